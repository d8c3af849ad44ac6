use std::fmt;

/// A newtype wrapper for cost values in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    /// Cost of `tokens` at a flat price per million tokens
    pub fn from_tokens(tokens: u64, price_per_million: f64) -> Self {
        Cost(tokens as f64 / 1_000_000.0 * price_per_million)
    }

    /// Format as currency string (e.g., "$1.23")
    pub fn to_formatted_string(&self) -> String {
        // Handle negative zero case
        let formatted_value = if self.0 == 0.0 { 0.00 } else { self.0 };
        format!("${:.2}", formatted_value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_formatting() {
        assert_eq!(Cost::from_tokens(1_234_000, 1.0).to_formatted_string(), "$1.23");
        assert_eq!(Cost::from_tokens(0, 0.0).to_formatted_string(), "$0.00");
        assert_eq!(Cost::from_tokens(0, -1.0).to_formatted_string(), "$0.00");
        assert_eq!(Cost::from_tokens(100_999_000, 1.0).to_formatted_string(), "$101.00");
    }

    #[test]
    fn test_cost_from_tokens() {
        assert_eq!(Cost::from_tokens(1_000_000, 1.0).to_formatted_string(), "$1.00");
        assert_eq!(Cost::from_tokens(0, 1.0).to_formatted_string(), "$0.00");
        assert_eq!(Cost::from_tokens(500_000, 1.0).to_formatted_string(), "$0.50");
        assert_eq!(Cost::from_tokens(2_500_000, 3.0).to_formatted_string(), "$7.50");
        assert_eq!(Cost::from_tokens(1_234, 1.0).to_formatted_string(), "$0.00");
    }

    #[test]
    fn test_cost_display() {
        let cost = Cost::from_tokens(42_420_000, 1.0);
        assert_eq!(format!("{}", cost), "$42.42");
    }
}
