//! Rendering of [`CartSummary`] values for stdout.

use shop_core::CartSummary;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Renders `summaries` in `format`, newline-terminated.
pub fn render(summaries: &[CartSummary], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(summaries.iter().map(|s| render_line(s) + "\n").collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)? + "\n"),
    }
}

/// `vip: 3 items, subtotal $60.00, 10% off -$6.00, total $54.00`
fn render_line(summary: &CartSummary) -> String {
    let items = match summary.item_count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };

    match summary.discount_rate {
        Some(rate) => format!(
            "{}: {}, subtotal {}, {} off -{}, total {}",
            summary.calculator, items, summary.subtotal, rate, summary.discount, summary.total
        ),
        None => format!(
            "{}: {}, subtotal {}, total {}",
            summary.calculator, items, summary.subtotal, summary.total
        ),
    }
}
