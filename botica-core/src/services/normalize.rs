//! Field normalizer: lenient Spanish-locale cell conversions
//!
//! Export cells arrive as strings with currency symbols, comma decimal
//! separators, and assorted date layouts. Ingestion never fails on a bad
//! cell; every conversion here degrades to zero or empty so one mangled
//! field cannot reject a whole batch.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Formats tried for dates that are not already canonical
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d", "%d.%m.%Y"];

/// Convert a currency/decimal cell to a number, zero on failure.
///
/// Strips euro signs and swaps the comma decimal separator for a dot, so
/// "19,38 €" becomes 19.38. Thousands separators are not supported:
/// "1.234,56" turns into the unparsable "1.234.56" and degrades to zero,
/// matching how the source system has always read these files.
pub fn clean_decimal(raw: &str) -> Decimal {
    let cleaned = raw.replace('€', "").replace(',', ".");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    cleaned.parse().unwrap_or(Decimal::ZERO)
}

/// Convert a count cell to an integer, zero on failure.
///
/// Fractional counts ("1,5" on split blister packs) truncate toward zero.
pub fn clean_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return n;
    }
    clean_decimal(trimmed).trunc().to_i64().unwrap_or(0)
}

/// Normalize a date cell to canonical `DD/MM/YYYY`, empty string on failure.
///
/// A cell already shaped `DD/MM/YYYY` passes through without calendar
/// validation; the view layer skips entries that never resolve to a real
/// date. Anything else is tried against the known export formats and
/// reformatted on first match.
pub fn parse_local_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let canonical = Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap();
    if canonical.is_match(trimmed) {
        return trimmed.to_string();
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%d/%m/%Y").to_string();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_decimal_currency_cells() {
        assert_eq!(clean_decimal("19,38 €"), Decimal::new(1938, 2));
        assert_eq!(clean_decimal("19.38"), Decimal::new(1938, 2));
        assert_eq!(clean_decimal("€ 7,5"), Decimal::new(75, 1));
        assert_eq!(clean_decimal("-5,25€"), Decimal::new(-525, 2));
        assert_eq!(clean_decimal("0"), Decimal::ZERO);
    }

    #[test]
    fn test_clean_decimal_degrades_to_zero() {
        assert_eq!(clean_decimal(""), Decimal::ZERO);
        assert_eq!(clean_decimal("   "), Decimal::ZERO);
        assert_eq!(clean_decimal("abc"), Decimal::ZERO);
        // Thousands separator produces two dots
        assert_eq!(clean_decimal("1.234,56"), Decimal::ZERO);
    }

    #[test]
    fn test_clean_integer() {
        assert_eq!(clean_integer("3"), 3);
        assert_eq!(clean_integer("-2"), -2);
        assert_eq!(clean_integer(" 12 "), 12);
        assert_eq!(clean_integer(""), 0);
        assert_eq!(clean_integer("abc"), 0);
    }

    #[test]
    fn test_clean_integer_truncates_fractions() {
        assert_eq!(clean_integer("1,5"), 1);
        assert_eq!(clean_integer("-1,5"), -1);
        assert_eq!(clean_integer("2.0"), 2);
    }

    #[test]
    fn test_parse_local_date_canonical_passthrough() {
        assert_eq!(parse_local_date("01/03/2025"), "01/03/2025");
        // Shape check only: not calendar-validated on the fast path
        assert_eq!(parse_local_date("99/99/2025"), "99/99/2025");
    }

    #[test]
    fn test_parse_local_date_reformats_known_layouts() {
        assert_eq!(parse_local_date("2025-03-01"), "01/03/2025");
        assert_eq!(parse_local_date("01-03-2025"), "01/03/2025");
        assert_eq!(parse_local_date("2025/03/01"), "01/03/2025");
        assert_eq!(parse_local_date("01.03.2025"), "01/03/2025");
        // Single-digit day and month still land zero-padded
        assert_eq!(parse_local_date("1/3/2025"), "01/03/2025");
    }

    #[test]
    fn test_parse_local_date_failures_are_empty() {
        assert_eq!(parse_local_date(""), "");
        assert_eq!(parse_local_date("   "), "");
        assert_eq!(parse_local_date("yesterday"), "");
        assert_eq!(parse_local_date("2025-13-40"), "");
    }
}
