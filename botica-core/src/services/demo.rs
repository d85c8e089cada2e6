//! Demo service: manage demo mode
//!
//! Demo mode switches the context to a separate dataset directory seeded
//! with sample exports, so people can explore reports without uploading
//! real pharmacy data first.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::demo::{categories_batch, transactions_batch};
use crate::adapters::JsonFileRepository;
use crate::config::Config;
use crate::domain::result::Result;
use crate::ports::Repository;
use crate::schema::{RecordKind, Schema};
use crate::DEMO_DIR;

use super::ingest::IngestService;

/// Demo service for managing demo mode
pub struct DemoService {
    data_dir: PathBuf,
}

impl DemoService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.data_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    ///
    /// This will:
    /// 1. Reset the demo dataset (fresh start every time)
    /// 2. Enable demo mode in config
    /// 3. Seed the demo dataset through the normal ingest pipeline
    pub fn enable(&self) -> Result<()> {
        let repository = Arc::new(JsonFileRepository::new(&self.data_dir.join(DEMO_DIR))?);
        repository.clear()?;

        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.data_dir)?;

        let ingest = IngestService::new(repository, Arc::new(Schema::standard()));
        ingest.ingest(
            &transactions_batch(),
            Some(RecordKind::Transactions),
            false,
        )?;
        ingest.ingest(&categories_batch(), Some(RecordKind::Categories), false)?;

        Ok(())
    }

    /// Disable demo mode
    ///
    /// The demo dataset is kept unless `clean` is set, so toggling demo mode
    /// back on later starts instantly.
    pub fn disable(&self, clean: bool) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.data_dir)?;

        if clean {
            JsonFileRepository::new(&self.data_dir.join(DEMO_DIR))?.clear()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_enable_seeds_the_demo_dataset() {
        let dir = TempDir::new().unwrap();
        let service = DemoService::new(dir.path());
        service.enable().unwrap();

        assert!(service.is_enabled().unwrap());
        let repository = JsonFileRepository::new(&dir.path().join(DEMO_DIR)).unwrap();
        assert!(!repository.load_transactions().unwrap().is_empty());
        assert!(!repository.load_categories().unwrap().is_empty());
        assert!(repository.last_updated().unwrap().transactions.is_some());
    }

    #[test]
    fn test_enable_resets_previous_demo_data() {
        let dir = TempDir::new().unwrap();
        let service = DemoService::new(dir.path());
        service.enable().unwrap();
        let first = JsonFileRepository::new(&dir.path().join(DEMO_DIR))
            .unwrap()
            .load_transactions()
            .unwrap();

        // Enabling again re-seeds rather than doubling up
        service.enable().unwrap();
        let second = JsonFileRepository::new(&dir.path().join(DEMO_DIR))
            .unwrap()
            .load_transactions()
            .unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_disable_keeps_data_unless_clean() {
        let dir = TempDir::new().unwrap();
        let service = DemoService::new(dir.path());
        service.enable().unwrap();

        service.disable(false).unwrap();
        assert!(!service.is_enabled().unwrap());
        let repository = JsonFileRepository::new(&dir.path().join(DEMO_DIR)).unwrap();
        assert!(!repository.load_transactions().unwrap().is_empty());

        service.disable(true).unwrap();
        assert!(repository.load_transactions().unwrap().is_empty());
    }
}
