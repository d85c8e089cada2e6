//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an amount the Spanish way: 1.234,56 €
pub fn format_eur(value: Decimal) -> String {
    let text = format!("{:.2}", value.round_dp(2));
    let negative = text.starts_with('-');
    let unsigned = text.trim_start_matches('-');
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let whole: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{},{} €", sign, whole, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(Decimal::new(123456, 2)), "1.234,56 €");
        assert_eq!(format_eur(Decimal::new(-500, 2)), "-5,00 €");
        assert_eq!(format_eur(Decimal::ZERO), "0,00 €");
        assert_eq!(format_eur(Decimal::new(999999999, 2)), "9.999.999,99 €");
        assert_eq!(format_eur(Decimal::new(75, 1)), "7,50 €");
    }
}
