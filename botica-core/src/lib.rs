//! Botica Core - ingestion and reconciliation for pharmacy sales exports
//!
//! This crate implements the core pipeline following hexagonal architecture:
//!
//! - **domain**: Canonical records (Transaction, Category) and snapshots
//! - **schema**: Declarative header tables for the source spreadsheets
//! - **ports**: Trait definitions for external dependencies (Repository)
//! - **services**: Pipeline stages and their orchestration
//! - **adapters**: Concrete implementations (JSON files, CSV, memory, demo)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod schema;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::JsonFileRepository;
use config::Config;
use ports::Repository;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Category, DataStore, Keyed, LastUpdated, Transaction};
pub use schema::{RawRow, RecordKind, Schema};

/// Directory under the data dir holding the demo dataset
pub const DEMO_DIR: &str = "demo";

/// Main context for Botica operations
///
/// The primary entry point for frontends. It resolves which dataset to use
/// (real or demo), builds the repository, and wires up all services.
pub struct BoticaContext {
    pub config: Config,
    pub schema: Arc<Schema>,
    pub repository: Arc<dyn Repository>,
    pub ingest_service: IngestService,
    pub store_service: StoreService,
    pub status_service: StatusService,
    pub demo_service: DemoService,
}

impl BoticaContext {
    /// Create a new Botica context rooted at the data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        // Demo mode reads and writes a separate dataset directory
        let dataset_dir = if config.demo_mode {
            data_dir.join(DEMO_DIR)
        } else {
            data_dir.to_path_buf()
        };

        let repository: Arc<dyn Repository> = Arc::new(JsonFileRepository::new(&dataset_dir)?);
        let schema = Arc::new(config.schema());

        let ingest_service = IngestService::new(Arc::clone(&repository), Arc::clone(&schema));
        let store_service = StoreService::new(Arc::clone(&repository));
        let status_service = StatusService::new(Arc::clone(&repository));
        let demo_service = DemoService::new(data_dir);

        Ok(Self {
            config,
            schema,
            repository,
            ingest_service,
            store_service,
            status_service,
            demo_service,
        })
    }
}
