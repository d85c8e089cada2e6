//! Reconciliation engine: natural-key merge of a batch into a collection
//!
//! The single algorithm that rewrites canonical collections. Everything
//! downstream (views, reports, status) reads what this produced.

use std::collections::HashMap;

use crate::domain::Keyed;

/// Result of merging a batch into an existing collection
#[derive(Debug)]
pub struct MergeOutcome<T> {
    /// The merged collection: existing records first, in their original
    /// order with matches replaced in place, then unmatched batch records
    /// in batch order
    pub records: Vec<T>,
    /// Batch records whose key was not present before
    pub inserted: usize,
    /// Records replaced by a same-key batch record
    pub updated: usize,
}

/// Merge `batch` into `existing`, keeping at most one record per natural key.
///
/// Last write wins: a batch record fully replaces the stored record with the
/// same key, including fields the batch left at their defaults. Partial
/// field-level merging does not exist at this layer. Re-merging an already
/// merged batch changes nothing.
pub fn merge_records<T: Keyed>(batch: Vec<T>, existing: Vec<T>) -> MergeOutcome<T> {
    let capacity = existing.len() + batch.len();
    let mut records: Vec<T> = Vec::with_capacity(capacity);
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);
    let mut inserted = 0;
    let mut updated = 0;

    // Seed with the existing collection. Duplicate keys should not occur in
    // stored data, but a hand-edited file collapses to its last occurrence.
    for record in existing {
        let key = record.natural_key();
        if let Some(&pos) = positions.get(&key) {
            records[pos] = record;
        } else {
            positions.insert(key, records.len());
            records.push(record);
        }
    }

    for record in batch {
        let key = record.natural_key();
        if let Some(&pos) = positions.get(&key) {
            records[pos] = record;
            updated += 1;
        } else {
            positions.insert(key, records.len());
            records.push(record);
            inserted += 1;
        }
    }

    MergeOutcome {
        records,
        inserted,
        updated,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{Category, Transaction};

    fn tx(date: &str, doc: &str, code: &str, net_cents: i64) -> Transaction {
        Transaction {
            date: date.to_string(),
            document_number: doc.to_string(),
            product_code: code.to_string(),
            net_amount: Decimal::new(net_cents, 2),
            ..Default::default()
        }
    }

    fn keys<T: Keyed>(records: &[T]) -> Vec<String> {
        records.iter().map(|r| r.natural_key()).collect()
    }

    #[test]
    fn test_new_records_append_in_batch_order() {
        let existing = vec![tx("01/03/2025", "A1", "P1", 100)];
        let batch = vec![
            tx("02/03/2025", "B1", "P1", 200),
            tx("02/03/2025", "B2", "P2", 300),
        ];

        let outcome = merge_records(batch, existing);
        assert_eq!(outcome.inserted, 2);
        assert_eq!(outcome.updated, 0);
        assert_eq!(
            keys(&outcome.records),
            vec![
                "01/03/2025_A1_P1",
                "02/03/2025_B1_P1",
                "02/03/2025_B2_P2"
            ]
        );
    }

    #[test]
    fn test_matched_records_update_in_place() {
        let existing = vec![
            tx("01/03/2025", "A1", "P1", 100),
            tx("01/03/2025", "A2", "P2", 200),
            tx("01/03/2025", "A3", "P3", 300),
        ];
        let batch = vec![tx("01/03/2025", "A2", "P2", 999)];

        let outcome = merge_records(batch, existing);
        assert_eq!(outcome.inserted, 0);
        assert_eq!(outcome.updated, 1);
        assert_eq!(outcome.records.len(), 3);
        // Position preserved, content replaced
        assert_eq!(outcome.records[1].natural_key(), "01/03/2025_A2_P2");
        assert_eq!(outcome.records[1].net_amount, Decimal::new(999, 2));
    }

    #[test]
    fn test_same_document_on_a_new_date_is_a_new_record() {
        let existing = vec![tx("01/03/2025", "A1", "P1", 100)];
        // Same document and product, different date: a distinct sale
        let batch = vec![tx("02/03/2025", "A1", "P1", 250)];

        let outcome = merge_records(batch, existing);
        assert_eq!(outcome.inserted, 1);
        assert_eq!(outcome.updated, 0);
        assert_eq!(
            keys(&outcome.records),
            vec!["01/03/2025_A1_P1", "02/03/2025_A1_P1"]
        );
        assert_eq!(outcome.records[0].net_amount, Decimal::new(100, 2));
        assert_eq!(outcome.records[1].net_amount, Decimal::new(250, 2));
    }

    #[test]
    fn test_last_write_wins_replaces_whole_record() {
        let mut old = tx("01/03/2025", "A1", "P1", 500);
        old.seller = "(9)9 A LORENZO".to_string();
        old.payment_type = "Tarjeta".to_string();

        // Same key, defaults everywhere else
        let replacement = tx("01/03/2025", "A1", "P1", 100);

        let outcome = merge_records(vec![replacement], vec![old]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].net_amount, Decimal::new(100, 2));
        assert_eq!(outcome.records[0].seller, "");
        assert_eq!(outcome.records[0].payment_type, "");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let existing = vec![
            tx("01/03/2025", "A1", "P1", 100),
            tx("01/03/2025", "A2", "P2", 200),
        ];
        let batch = vec![
            tx("01/03/2025", "A2", "P2", 250),
            tx("02/03/2025", "B1", "P3", 300),
        ];

        let once = merge_records(batch.clone(), existing);
        let twice = merge_records(batch, once.records.clone());
        assert_eq!(once.records, twice.records);
        assert_eq!(twice.inserted, 0);
        assert_eq!(twice.updated, 2);
    }

    #[test]
    fn test_keys_stay_unique() {
        let existing = vec![
            tx("01/03/2025", "A1", "P1", 100),
            tx("01/03/2025", "A2", "P1", 200),
        ];
        let batch = vec![
            tx("01/03/2025", "A1", "P1", 150),
            tx("01/03/2025", "A3", "P1", 300),
        ];

        let outcome = merge_records(batch, existing);
        let unique: HashSet<String> = keys(&outcome.records).into_iter().collect();
        assert_eq!(unique.len(), outcome.records.len());
    }

    #[test]
    fn test_duplicate_keys_within_a_batch_collapse() {
        let batch = vec![
            tx("01/03/2025", "A1", "P1", 100),
            tx("01/03/2025", "A1", "P1", 200),
        ];

        let outcome = merge_records(batch, Vec::new());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].net_amount, Decimal::new(200, 2));
        assert_eq!(outcome.inserted, 1);
        assert_eq!(outcome.updated, 1);
    }

    #[test]
    fn test_empty_batch_leaves_collection_alone() {
        let existing = vec![tx("01/03/2025", "A1", "P1", 100)];
        let outcome = merge_records(Vec::new(), existing.clone());
        assert_eq!(outcome.records, existing);
        assert_eq!(outcome.inserted, 0);
        assert_eq!(outcome.updated, 0);
    }

    #[test]
    fn test_categories_merge_on_code() {
        let existing = vec![
            Category {
                code: "100.0".to_string(),
                family: "ANALGESICOS".to_string(),
                stock_current: 5,
                ..Default::default()
            },
            Category {
                code: "200.0".to_string(),
                family: "DERMOFARMACIA".to_string(),
                ..Default::default()
            },
        ];
        let batch = vec![Category {
            code: "100.0".to_string(),
            family: "ANALGESICOS".to_string(),
            stock_current: 9,
            ..Default::default()
        }];

        let outcome = merge_records(batch, existing);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.updated, 1);
        assert_eq!(outcome.records[0].stock_current, 9);
    }
}
