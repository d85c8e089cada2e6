//! Repository port: storage abstraction for the canonical collections

use chrono::{DateTime, Utc};

use crate::domain::result::Result;
use crate::domain::{Category, LastUpdated, Transaction};
use crate::schema::RecordKind;

/// Exclusive hold on a dataset; dropping the guard releases it
pub trait DatasetGuard: Send {}

/// Storage for the canonical collections
///
/// Collections load and save whole; the reconciliation engine owns merging,
/// so adapters stay dumb about record semantics. Implementations must be
/// safe to share across threads (services hold them behind an `Arc`), and
/// `lock_dataset` must exclude every other holder of the same dataset,
/// other repository instances and other processes included.
pub trait Repository: Send + Sync {
    // =========================================================================
    // Locking
    // =========================================================================

    /// Take the dataset-wide exclusive lock, blocking until it is free.
    ///
    /// Every load-merge-save sequence must run under this guard. Saves are
    /// individually atomic, but without the guard two writers can merge
    /// against the same stale snapshot and the later save silently drops
    /// the earlier batch.
    fn lock_dataset(&self) -> Result<Box<dyn DatasetGuard>>;

    // =========================================================================
    // Collections
    // =========================================================================

    /// Load all transactions, empty when nothing was stored yet
    fn load_transactions(&self) -> Result<Vec<Transaction>>;

    /// Replace the stored transactions with the given collection
    fn save_transactions(&self, records: &[Transaction]) -> Result<()>;

    /// Load all catalog categories, empty when nothing was stored yet
    fn load_categories(&self) -> Result<Vec<Category>>;

    /// Replace the stored categories with the given collection
    fn save_categories(&self, records: &[Category]) -> Result<()>;

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Merge timestamps per collection
    fn last_updated(&self) -> Result<LastUpdated>;

    /// Record a successful merge of one collection
    fn mark_updated(&self, kind: RecordKind, at: DateTime<Utc>) -> Result<()>;

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Delete both collections and their metadata
    fn clear(&self) -> Result<()>;
}
