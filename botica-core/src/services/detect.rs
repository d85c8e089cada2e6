//! Record kind detector: classify an upload by its header set

use crate::schema::{RawRow, RecordKind, Schema};

/// Classify a batch from the headers of its first row.
///
/// Transaction signals are checked first, so a sheet somehow carrying both
/// signal sets classifies as transactions. `None` means the batch matches
/// neither layout and must be rejected before any building or merging.
pub fn detect_record_kind(rows: &[RawRow], schema: &Schema) -> Option<RecordKind> {
    let first = rows.first()?;
    if schema.is_transactions(first) {
        return Some(RecordKind::Transactions);
    }
    if schema.is_categories(first) {
        return Some(RecordKind::Categories);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_detects_transactions() {
        let schema = Schema::standard();
        let rows = vec![row(&[("Fecha", "01/03/2025"), ("Vendedor", "(9)9 A LORENZO")])];
        assert_eq!(
            detect_record_kind(&rows, &schema),
            Some(RecordKind::Transactions)
        );
    }

    #[test]
    fn test_detects_categories() {
        let schema = Schema::standard();
        let rows = vec![row(&[
            ("Código", "654321.0"),
            ("Familia", "ANALGESICOS"),
            ("Descripción", "PARACETAMOL 1G"),
        ])];
        assert_eq!(
            detect_record_kind(&rows, &schema),
            Some(RecordKind::Categories)
        );
    }

    #[test]
    fn test_transaction_signals_win_over_category_signals() {
        // "Código" appears in both layouts; a date column settles it
        let schema = Schema::standard();
        let rows = vec![row(&[
            ("Fecha", "01/03/2025"),
            ("Código", "654321.0"),
            ("Familia", "ANALGESICOS"),
        ])];
        assert_eq!(
            detect_record_kind(&rows, &schema),
            Some(RecordKind::Transactions)
        );
    }

    #[test]
    fn test_unknown_headers_are_rejected() {
        let schema = Schema::standard();
        let rows = vec![row(&[("Name", "x"), ("Amount", "3")])];
        assert_eq!(detect_record_kind(&rows, &schema), None);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let schema = Schema::standard();
        assert_eq!(detect_record_kind(&[], &schema), None);
    }

    #[test]
    fn test_header_presence_suffices_even_with_empty_cells() {
        let schema = Schema::standard();
        let rows = vec![row(&[("Fecha", ""), ("Vendedor", "")])];
        assert_eq!(
            detect_record_kind(&rows, &schema),
            Some(RecordKind::Transactions)
        );
    }
}
