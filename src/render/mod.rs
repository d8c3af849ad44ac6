pub mod layout;
pub mod logo;

use crate::formatting::{
    escape_xml, format_currency, format_duration, format_number_with_commas, format_timestamp,
};
use crate::models::display_model_name;
use crate::types::SessionData;

pub use layout::ReceiptLayout;
use logo::LOGO_PATH;

/// A rendered SVG receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReceipt(String);

impl RenderedReceipt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl From<String> for RenderedReceipt {
    fn from(s: String) -> Self {
        RenderedReceipt(s)
    }
}

impl AsRef<[u8]> for RenderedReceipt {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

// Everything above the logo path: canvas, styles, paper and top edge
const PRELUDE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="400" height="680" viewBox="0 0 400 680" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <style>
      .receipt-bg { fill: #f8f8f8; }
      .text { font-family: 'Courier New', Courier, monospace; font-size: 12px; fill: #333; }
      .text-bold { font-family: 'Courier New', Courier, monospace; font-size: 12px; fill: #333; font-weight: bold; }
      .text-large { font-family: 'Courier New', Courier, monospace; font-size: 14px; fill: #333; }
      .text-small { font-family: 'Courier New', Courier, monospace; font-size: 10px; fill: #666; }
      .separator { stroke: #333; stroke-width: 2; }
      .light-separator { stroke: #999; stroke-width: 1; stroke-dasharray: 2,2; }
      .logo { fill: #333; }
    </style>
  </defs>

  <!-- Receipt background -->
  <rect class="receipt-bg" x="10" y="10" width="380" height="660" rx="3"/>

  <!-- Top zigzag edge -->
  <path d="M10 25 L30 10 L50 25 L70 10 L90 25 L110 10 L130 25 L150 10 L170 25 L190 10 L210 25 L230 10 L250 25 L270 10 L290 25 L310 10 L330 25 L350 10 L370 25 L390 10" fill="#3a3a3a"/>

  <!-- Factory Logo -->
  <g transform="translate(130, 50) scale(0.12)">
    <path class="logo" d=""##;

const BOTTOM_EDGE: &str = r##"
  <!-- Bottom zigzag edge -->
  <path d="M10 665 L30 680 L50 665 L70 680 L90 665 L110 680 L130 665 L150 680 L170 665 L190 680 L210 665 L230 680 L250 665 L270 680 L290 665 L310 680 L330 665 L350 680 L370 665 L390 680" fill="#3a3a3a"/>
</svg>"##;

/// Render the receipt for one session.
///
/// Output depends only on `data` and the price, so rendering the same
/// session twice yields identical bytes.
pub fn render_receipt(data: &SessionData, price_per_million: f64) -> RenderedReceipt {
    let tokens = &data.tokens;
    let layout = ReceiptLayout::for_usage(tokens);

    let title = escape_xml(&data.title);
    let location = escape_xml(&data.location);
    let model_name = escape_xml(display_model_name(&data.model));
    // Unparseable timestamps come through verbatim from the transcript
    let date = escape_xml(&format_timestamp(&data.end_time));

    let mut svg = String::with_capacity(8 * 1024);
    svg.push_str(PRELUDE);
    svg.push_str(LOGO_PATH);
    svg.push_str("\"/>\n  </g>\n");

    svg.push_str(&branding());
    svg.push_str(&session_info(
        &location,
        &title,
        &date,
        &format_duration(data.active_time_ms),
    ));
    svg.push_str(&column_headers(&model_name));

    svg.push_str(&line_item("Input tokens", 375, tokens.input_tokens, price_per_million));
    svg.push_str(&line_item("Output tokens", 395, tokens.output_tokens, price_per_million));

    if let Some(y) = layout.cache_write_y() {
        svg.push_str(&line_item("Cache write", y, tokens.cache_write_tokens, price_per_million));
    }
    if let Some(y) = layout.cache_read_y() {
        svg.push_str(&line_item("Cache read", y, tokens.cache_read_tokens, price_per_million));
    }

    svg.push_str(&total_and_footer(
        &layout,
        &format_currency(tokens.total_tokens(), price_per_million),
        &model_name,
    ));
    svg.push_str(BOTTOM_EDGE);

    RenderedReceipt(svg)
}

fn branding() -> String {
    r#"
  <!-- DROID text -->
  <text x="200" y="145" class="text-large text-bold" text-anchor="middle" font-size="18">FACTORY</text>
  <text x="200" y="165" class="text-small" text-anchor="middle">DROID RECEIPT</text>

  <line x1="30" y1="185" x2="370" y2="185" class="separator"/>
"#
    .to_string()
}

fn session_info(location: &str, title: &str, date: &str, duration: &str) -> String {
    let mut rows = String::from("\n  <!-- Session info -->\n");
    for (label, value, y) in [
        ("Location", location, 210),
        ("Session", title, 230),
        ("Date", date, 250),
        ("Duration", duration, 270),
    ] {
        rows.push_str(&format!(
            r#"  <text x="30" y="{y}" class="text">{label}</text>
  <text x="370" y="{y}" class="text" text-anchor="end">{value}</text>
  <line x1="100" y1="{rule}" x2="290" y2="{rule}" class="light-separator"/>
"#,
            rule = y - 4,
        ));
    }
    rows.push_str("\n  <line x1=\"30\" y1=\"290\" x2=\"370\" y2=\"290\" class=\"separator\"/>\n");
    rows
}

fn column_headers(model_name: &str) -> String {
    format!(
        r#"
  <!-- Header -->
  <text x="30" y="315" class="text-bold">ITEM</text>
  <text x="200" y="315" class="text-bold" text-anchor="middle">QTY</text>
  <text x="370" y="315" class="text-bold" text-anchor="end">PRICE</text>

  <line x1="30" y1="325" x2="370" y2="325" class="light-separator"/>

  <!-- Model name -->
  <text x="30" y="350" class="text-bold">{model_name}</text>

  <!-- Line items -->"#
    )
}

fn line_item(label: &str, y: u32, tokens: u64, price_per_million: f64) -> String {
    format!(
        r#"
  <text x="45" y="{y}" class="text">{label}</text>
  <text x="200" y="{y}" class="text" text-anchor="middle">{qty}</text>
  <text x="370" y="{y}" class="text" text-anchor="end">{price}</text>"#,
        qty = format_number_with_commas(tokens),
        price = format_currency(tokens, price_per_million),
    )
}

fn total_and_footer(layout: &ReceiptLayout, total_cost: &str, model_name: &str) -> String {
    format!(
        r#"

  <!-- Total section -->
  <line x1="30" y1="{divider}" x2="370" y2="{divider}" class="separator"/>

  <text x="30" y="{total}" class="text-bold">TOTAL</text>
  <text x="370" y="{total}" class="text-bold" text-anchor="end">{total_cost}</text>

  <line x1="30" y1="{closing}" x2="370" y2="{closing}" class="separator"/>

  <!-- Footer -->
  <text x="200" y="{cashier}" class="text" text-anchor="middle">CASHIER: {model_name}</text>

  <text x="200" y="{thanks}" class="text" text-anchor="middle">Thank you for building!</text>

  <line x1="100" y1="{rule}" x2="300" y2="{rule}" class="light-separator"/>

  <text x="200" y="{link}" class="text-small" text-anchor="middle">github.com/Factory-AI/factory</text>
"#,
        divider = layout.total_divider_y(),
        total = layout.total_row_y(),
        closing = layout.closing_divider_y(),
        cashier = layout.cashier_y(),
        thanks = layout.thanks_y(),
        rule = layout.footer_divider_y(),
        link = layout.link_y(),
    )
}
