//! JSON file repository
//!
//! Persists each collection as a pretty-printed JSON document inside the
//! data directory. Writes go through a temp file in the same directory and
//! land with an atomic rename, so a reader never sees a half-written
//! document. `lock_dataset` takes an exclusive flock on a sidecar lock
//! file; holding it across a load-merge-save sequence is what keeps two
//! processes from merging against the same stale snapshot.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::domain::{Category, LastUpdated, Transaction};
use crate::ports::{DatasetGuard, Repository};
use crate::schema::RecordKind;

pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const META_FILE: &str = "meta.json";
const LOCK_FILE: &str = ".botica.lock";

/// Repository storing collections as JSON files in one directory
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Open (and create if needed) the data directory
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    // Atomic but deliberately unlocked: taking the flock here would deadlock
    // a caller already holding the dataset guard on another descriptor.
    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, value)?;
        tmp.write_all(b"\n")?;
        tmp.persist(self.path(name))
            .map_err(|e| Error::storage(format!("Failed to persist {}: {}", name, e)))?;
        Ok(())
    }

    fn exclusive_lock(&self) -> Result<LockGuard> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(self.path(LOCK_FILE))?;
        file.lock_exclusive()?;
        Ok(LockGuard { file })
    }
}

/// Held across a read-modify-write sequence; unlocks on drop
struct LockGuard {
    file: File,
}

impl DatasetGuard for LockGuard {}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

impl Repository for JsonFileRepository {
    fn lock_dataset(&self) -> Result<Box<dyn DatasetGuard>> {
        Ok(Box::new(self.exclusive_lock()?))
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        self.read_json(TRANSACTIONS_FILE)
    }

    fn save_transactions(&self, records: &[Transaction]) -> Result<()> {
        self.write_json(TRANSACTIONS_FILE, &records)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        self.read_json(CATEGORIES_FILE)
    }

    fn save_categories(&self, records: &[Category]) -> Result<()> {
        self.write_json(CATEGORIES_FILE, &records)
    }

    fn last_updated(&self) -> Result<LastUpdated> {
        self.read_json(META_FILE)
    }

    fn mark_updated(&self, kind: RecordKind, at: DateTime<Utc>) -> Result<()> {
        let mut meta: LastUpdated = self.read_json(META_FILE)?;
        match kind {
            RecordKind::Transactions => meta.transactions = Some(at),
            RecordKind::Categories => meta.categories = Some(at),
        }
        self.write_json(META_FILE, &meta)
    }

    fn clear(&self) -> Result<()> {
        let _lock = self.exclusive_lock()?;
        for name in [TRANSACTIONS_FILE, CATEGORIES_FILE, META_FILE] {
            let path = self.path(name);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
