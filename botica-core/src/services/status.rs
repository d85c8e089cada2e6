//! Status service: dataset summary for the status command

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::LastUpdated;
use crate::ports::Repository;

use super::view::{extract_available_dates, extract_unique_families};

/// Counts and coverage of the stored dataset
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStatus {
    pub transactions: usize,
    pub categories: usize,
    pub families: usize,
    /// First day with data, `None` on an empty or undated dataset
    pub earliest_date: Option<NaiveDate>,
    /// Last day with data
    pub latest_date: Option<NaiveDate>,
    pub last_updated: LastUpdated,
}

pub struct StatusService {
    repository: Arc<dyn Repository>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub fn summary(&self) -> Result<DatasetStatus> {
        let transactions = self.repository.load_transactions()?;
        let categories = self.repository.load_categories()?;
        let dates = extract_available_dates(&transactions);

        Ok(DatasetStatus {
            transactions: transactions.len(),
            categories: categories.len(),
            families: extract_unique_families(&categories).len(),
            earliest_date: dates.first().copied(),
            latest_date: dates.last().copied(),
            last_updated: self.repository.last_updated()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryRepository;
    use crate::domain::Transaction;

    fn tx_on(date: &str, doc: &str) -> Transaction {
        Transaction {
            date: date.to_string(),
            document_number: doc.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_dataset_summary() {
        let repository = Arc::new(MemoryRepository::new());
        let status = StatusService::new(repository).summary().unwrap();
        assert_eq!(status.transactions, 0);
        assert_eq!(status.categories, 0);
        assert!(status.earliest_date.is_none());
        assert!(status.last_updated.transactions.is_none());
    }

    #[test]
    fn test_date_coverage_spans_parsable_dates() {
        let repository = Arc::new(MemoryRepository::new());
        repository
            .save_transactions(&[
                tx_on("15/03/2025", "A1"),
                tx_on("01/03/2025", "A2"),
                tx_on("", "A3"),
            ])
            .unwrap();

        let status = StatusService::new(repository).summary().unwrap();
        assert_eq!(status.transactions, 3);
        assert_eq!(
            status.earliest_date,
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(
            status.latest_date,
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
    }
}
