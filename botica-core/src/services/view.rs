//! Dataset views: derived dates, families, and date-window filtering
//!
//! Records keep their dates as strings; this module is where strings become
//! calendar dates. Entries that never parse (undated rows, shape-valid but
//! impossible dates) simply drop out of date-driven views.

use chrono::NaiveDate;

use crate::domain::{Category, DataStore, LastUpdated, Transaction};

/// Distinct parsable transaction dates, ascending
pub fn extract_available_dates(transactions: &[Transaction]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = transactions
        .iter()
        .filter_map(Transaction::calendar_date)
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Distinct non-empty family names, ascending
pub fn extract_unique_families(categories: &[Category]) -> Vec<String> {
    let mut families: Vec<String> = categories
        .iter()
        .filter(|c| !c.family.is_empty())
        .map(|c| c.family.clone())
        .collect();
    families.sort_unstable();
    families.dedup();
    families
}

/// Transactions whose date falls inside the window, inclusive on both ends.
///
/// Day-level comparison: passing the same date twice selects exactly that
/// day. Undated and unparsable records never match any window.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| match t.calendar_date() {
            Some(date) => date >= start && date <= end,
            None => false,
        })
        .cloned()
        .collect()
}

/// Assemble a dataset snapshot with its derived lookups
pub fn assemble_store(
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    last_updated: LastUpdated,
) -> DataStore {
    let available_dates = extract_available_dates(&transactions);
    let unique_families = extract_unique_families(&categories);
    DataStore {
        transactions,
        categories,
        available_dates,
        unique_families,
        last_updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx_on(date: &str, doc: &str) -> Transaction {
        Transaction {
            date: date.to_string(),
            document_number: doc.to_string(),
            ..Default::default()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_available_dates_sorted_and_distinct() {
        let transactions = vec![
            tx_on("02/03/2025", "A1"),
            tx_on("01/03/2025", "A2"),
            tx_on("02/03/2025", "A3"),
            tx_on("", "A4"),
            tx_on("99/99/2025", "A5"),
        ];
        assert_eq!(
            extract_available_dates(&transactions),
            vec![day(2025, 3, 1), day(2025, 3, 2)]
        );
    }

    #[test]
    fn test_families_sorted_distinct_non_empty() {
        let categories = vec![
            Category {
                family: "DERMOFARMACIA".to_string(),
                ..Default::default()
            },
            Category {
                family: "ANALGESICOS".to_string(),
                ..Default::default()
            },
            Category::default(),
            Category {
                family: "ANALGESICOS".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(
            extract_unique_families(&categories),
            vec!["ANALGESICOS", "DERMOFARMACIA"]
        );
    }

    #[test]
    fn test_date_window_is_inclusive_on_both_ends() {
        let transactions = vec![
            tx_on("28/02/2025", "A0"),
            tx_on("01/03/2025", "A1"),
            tx_on("15/03/2025", "A2"),
            tx_on("31/03/2025", "A3"),
            tx_on("01/04/2025", "A4"),
        ];
        let inside = filter_by_date_range(&transactions, day(2025, 3, 1), day(2025, 3, 31));
        let docs: Vec<&str> = inside.iter().map(|t| t.document_number.as_str()).collect();
        assert_eq!(docs, vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_same_day_window_selects_one_day() {
        let transactions = vec![tx_on("01/03/2025", "A1"), tx_on("02/03/2025", "A2")];
        let inside = filter_by_date_range(&transactions, day(2025, 3, 1), day(2025, 3, 1));
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].document_number, "A1");
    }

    #[test]
    fn test_undated_records_never_match_a_window() {
        let transactions = vec![tx_on("", "A1"), tx_on("99/99/2025", "A2")];
        let inside = filter_by_date_range(&transactions, day(2020, 1, 1), day(2030, 1, 1));
        assert!(inside.is_empty());
    }

    #[test]
    fn test_assemble_store_derives_lookups() {
        let transactions = vec![tx_on("01/03/2025", "A1")];
        let categories = vec![Category {
            family: "ANALGESICOS".to_string(),
            ..Default::default()
        }];
        let store = assemble_store(transactions, categories, LastUpdated::default());
        assert_eq!(store.available_dates, vec![day(2025, 3, 1)]);
        assert_eq!(store.unique_families, vec!["ANALGESICOS"]);
        assert_eq!(store.transactions.len(), 1);
    }
}
