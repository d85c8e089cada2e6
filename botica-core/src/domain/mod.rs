//! Core domain entities and value types

mod category;
pub mod result;
mod store;
mod transaction;

pub use category::Category;
pub use store::{DataStore, LastUpdated};
pub use transaction::Transaction;

/// Natural-key identity of canonical records
///
/// The reconciliation engine keeps at most one record per key; entities
/// define here what "the same record" means for their collection.
pub trait Keyed {
    fn natural_key(&self) -> String;
}
