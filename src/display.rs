//! Formatting helpers for terminal output

use crate::models::Money;

/// Width of banners and rules in the planner's output
pub const REPORT_WIDTH: usize = 34;

/// Format an amount with its currency symbol, right-aligned to a fixed width
pub fn format_amount(amount: Money, symbol: &str) -> String {
    format!("{}{:>10}", symbol, amount)
}

/// Format a percentage to one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:5.1}%", pct)
}

/// Center a title within `width` columns
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// A three-line banner: rule, centered title, rule
pub fn banner(title: &str, width: usize) -> String {
    format!(
        "{}\n{}\n{}",
        double_separator(width),
        format_header(title, width),
        double_separator(width)
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Left-align text in a field of given width, counting characters
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}
