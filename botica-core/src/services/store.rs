//! Store service: dataset snapshots for consumers

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::DataStore;
use crate::ports::Repository;

use super::view::assemble_store;

/// Loads the canonical dataset with its derived lookups
pub struct StoreService {
    repository: Arc<dyn Repository>,
}

impl StoreService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// A full snapshot: both collections, available dates, families, stamps
    pub fn load(&self) -> Result<DataStore> {
        let transactions = self.repository.load_transactions()?;
        let categories = self.repository.load_categories()?;
        let last_updated = self.repository.last_updated()?;
        Ok(assemble_store(transactions, categories, last_updated))
    }

    /// Delete both collections and the update stamps
    pub fn clear(&self) -> Result<()> {
        self.repository.clear()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::adapters::MemoryRepository;
    use crate::domain::{Category, Transaction};

    #[test]
    fn test_snapshot_carries_derived_lookups() {
        let repository = Arc::new(MemoryRepository::new());
        repository
            .save_transactions(&[Transaction {
                date: "01/03/2025".to_string(),
                document_number: "A1".to_string(),
                ..Default::default()
            }])
            .unwrap();
        repository
            .save_categories(&[Category {
                code: "100.0".to_string(),
                family: "ANALGESICOS".to_string(),
                ..Default::default()
            }])
            .unwrap();

        let store = StoreService::new(repository).load().unwrap();
        assert_eq!(store.transactions.len(), 1);
        assert_eq!(
            store.available_dates,
            vec![NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()]
        );
        assert_eq!(store.unique_families, vec!["ANALGESICOS"]);
    }

    #[test]
    fn test_clear_empties_the_snapshot() {
        let repository = Arc::new(MemoryRepository::new());
        repository
            .save_transactions(&[Transaction::default()])
            .unwrap();

        let service = StoreService::new(repository);
        service.clear().unwrap();

        let store = service.load().unwrap();
        assert!(store.transactions.is_empty());
        assert!(store.last_updated.transactions.is_none());
    }
}
