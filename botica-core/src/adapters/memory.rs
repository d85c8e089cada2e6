//! In-memory repository for tests and ephemeral runs

use std::sync::{Arc, Condvar, Mutex, RwLock};

use chrono::{DateTime, Utc};

use crate::domain::result::Result;
use crate::domain::{Category, LastUpdated, Transaction};
use crate::ports::{DatasetGuard, Repository};
use crate::schema::RecordKind;

#[derive(Default)]
struct Inner {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    last_updated: LastUpdated,
}

/// Condvar-backed exclusive lock, so the guard can own its handle and
/// outlive the borrow a `MutexGuard` would pin
#[derive(Default)]
struct StoreLock {
    busy: Mutex<bool>,
    released: Condvar,
}

struct MemoryGuard {
    lock: Arc<StoreLock>,
}

impl DatasetGuard for MemoryGuard {}

impl Drop for MemoryGuard {
    fn drop(&mut self) {
        *self.lock.busy.lock().unwrap() = false;
        self.lock.released.notify_one();
    }
}

/// Repository keeping everything in process memory
#[derive(Default)]
pub struct MemoryRepository {
    inner: RwLock<Inner>,
    lock: Arc<StoreLock>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for MemoryRepository {
    fn lock_dataset(&self) -> Result<Box<dyn DatasetGuard>> {
        let mut busy = self.lock.busy.lock().unwrap();
        while *busy {
            busy = self.lock.released.wait(busy).unwrap();
        }
        *busy = true;
        Ok(Box::new(MemoryGuard {
            lock: Arc::clone(&self.lock),
        }))
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.inner.read().unwrap().transactions.clone())
    }

    fn save_transactions(&self, records: &[Transaction]) -> Result<()> {
        self.inner.write().unwrap().transactions = records.to_vec();
        Ok(())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.inner.read().unwrap().categories.clone())
    }

    fn save_categories(&self, records: &[Category]) -> Result<()> {
        self.inner.write().unwrap().categories = records.to_vec();
        Ok(())
    }

    fn last_updated(&self) -> Result<LastUpdated> {
        Ok(self.inner.read().unwrap().last_updated.clone())
    }

    fn mark_updated(&self, kind: RecordKind, at: DateTime<Utc>) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        match kind {
            RecordKind::Transactions => inner.last_updated.transactions = Some(at),
            RecordKind::Categories => inner.last_updated.categories = Some(at),
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        *inner = Inner::default();
        Ok(())
    }
}
