use crate::types::TokenUsage;

/// Vertical position of the first optional line item
pub const FIRST_OPTIONAL_ROW_Y: u32 = 415;
/// Distance between consecutive line items
pub const ROW_STEP: u32 = 20;
/// Total-section offset with no optional line items
pub const TOTAL_BASE_Y: u32 = 435;

/// Row geometry for the line items below the input/output rows
///
/// Every coordinate from the total section down is derived from
/// `total_y`, which grows by one step per optional line present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptLayout {
    pub cache_write: bool,
    pub cache_read: bool,
}

impl ReceiptLayout {
    pub fn for_usage(tokens: &TokenUsage) -> Self {
        ReceiptLayout {
            cache_write: tokens.has_cache_write(),
            cache_read: tokens.has_cache_read(),
        }
    }

    pub fn cache_write_y(&self) -> Option<u32> {
        self.cache_write.then_some(FIRST_OPTIONAL_ROW_Y)
    }

    // Cache read sits directly below cache write when both are shown
    pub fn cache_read_y(&self) -> Option<u32> {
        self.cache_read.then(|| {
            if self.cache_write {
                FIRST_OPTIONAL_ROW_Y + ROW_STEP
            } else {
                FIRST_OPTIONAL_ROW_Y
            }
        })
    }

    pub fn optional_rows(&self) -> u32 {
        u32::from(self.cache_write) + u32::from(self.cache_read)
    }

    pub fn total_y(&self) -> u32 {
        TOTAL_BASE_Y + ROW_STEP * self.optional_rows()
    }

    pub fn total_divider_y(&self) -> u32 {
        self.total_y() + 10
    }

    pub fn total_row_y(&self) -> u32 {
        self.total_y() + 35
    }

    pub fn closing_divider_y(&self) -> u32 {
        self.total_y() + 45
    }

    pub fn cashier_y(&self) -> u32 {
        self.total_y() + 75
    }

    pub fn thanks_y(&self) -> u32 {
        self.total_y() + 105
    }

    pub fn footer_divider_y(&self) -> u32 {
        self.total_y() + 125
    }

    pub fn link_y(&self) -> u32 {
        self.total_y() + 145
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(cache_write: bool, cache_read: bool) -> ReceiptLayout {
        ReceiptLayout {
            cache_write,
            cache_read,
        }
    }

    #[test]
    fn test_no_optional_rows() {
        let l = layout(false, false);
        assert_eq!(l.cache_write_y(), None);
        assert_eq!(l.cache_read_y(), None);
        assert_eq!(l.total_y(), TOTAL_BASE_Y);
    }

    #[test]
    fn test_cache_write_only() {
        let l = layout(true, false);
        assert_eq!(l.cache_write_y(), Some(415));
        assert_eq!(l.cache_read_y(), None);
        assert_eq!(l.total_y(), 455);
    }

    #[test]
    fn test_cache_read_only_takes_first_slot() {
        let l = layout(false, true);
        assert_eq!(l.cache_write_y(), None);
        assert_eq!(l.cache_read_y(), Some(415));
        assert_eq!(l.total_y(), 455);
    }

    #[test]
    fn test_both_cache_rows() {
        let l = layout(true, true);
        assert_eq!(l.cache_write_y(), Some(415));
        assert_eq!(l.cache_read_y(), Some(435));
        assert_eq!(l.total_y(), TOTAL_BASE_Y + 2 * ROW_STEP);
    }

    #[test]
    fn test_downstream_rows_follow_total() {
        let l = layout(true, true);
        assert_eq!(l.total_divider_y(), 485);
        assert_eq!(l.total_row_y(), 510);
        assert_eq!(l.closing_divider_y(), 520);
        assert_eq!(l.cashier_y(), 550);
        assert_eq!(l.thanks_y(), 580);
        assert_eq!(l.footer_divider_y(), 600);
        assert_eq!(l.link_y(), 620);
    }

    #[test]
    fn test_rows_never_overlap() {
        for (write, read) in [(false, false), (true, false), (false, true), (true, true)] {
            let l = layout(write, read);
            let mut rows: Vec<u32> = [l.cache_write_y(), l.cache_read_y()]
                .into_iter()
                .flatten()
                .collect();
            rows.push(l.total_divider_y());
            rows.push(l.total_row_y());

            let mut sorted = rows.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), rows.len());
            // Last optional row sits above the total divider
            assert!(rows[..rows.len() - 2].iter().all(|y| *y < l.total_divider_y()));
        }
    }

    #[test]
    fn test_for_usage() {
        let tokens = TokenUsage {
            input_tokens: 1,
            output_tokens: 1,
            cache_write_tokens: 0,
            cache_read_tokens: 8,
        };
        assert_eq!(ReceiptLayout::for_usage(&tokens), layout(false, true));
    }
}
