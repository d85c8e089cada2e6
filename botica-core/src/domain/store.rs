//! Dataset snapshot types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Transaction};

/// Timestamps of the most recent successful merge per collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastUpdated {
    pub transactions: Option<DateTime<Utc>>,
    pub categories: Option<DateTime<Utc>>,
}

/// A snapshot of the canonical dataset with its derived lookups
///
/// Assembled on demand by [`crate::services::StoreService`]; never persisted
/// as a whole (the repository stores each collection separately).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStore {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    /// Distinct parsable transaction dates, ascending
    pub available_dates: Vec<NaiveDate>,
    /// Distinct non-empty family names, ascending
    pub unique_families: Vec<String>,
    pub last_updated: LastUpdated,
}
