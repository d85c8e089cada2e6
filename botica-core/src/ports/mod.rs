//! Port definitions (hexagonal architecture)

mod repository;

pub use repository::{DatasetGuard, Repository};
