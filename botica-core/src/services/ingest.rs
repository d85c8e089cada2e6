//! Ingest service: upload orchestration
//!
//! Takes a raw batch through detection, building, and reconciliation, then
//! persists the merged collection. The read-modify-write against the
//! repository runs under the dataset lock so concurrent ingests, including
//! ones from other processes, cannot overwrite each other with stale
//! snapshots.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::ports::Repository;
use crate::schema::{RawRow, RecordKind, Schema};

use super::build::{build_categories, build_transactions};
use super::detect::detect_record_kind;
use super::reconcile::merge_records;

/// What one ingest did (or, for a dry run, would do)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestOutcome {
    pub kind: RecordKind,
    pub rows_read: usize,
    /// Records new to the collection
    pub inserted: usize,
    /// Records that replaced an existing record with the same key
    pub updated: usize,
    /// Collection size after the merge
    pub total: usize,
    pub dry_run: bool,
}

pub struct IngestService {
    repository: Arc<dyn Repository>,
    schema: Arc<Schema>,
}

impl IngestService {
    pub fn new(repository: Arc<dyn Repository>, schema: Arc<Schema>) -> Self {
        Self { repository, schema }
    }

    /// Classify a batch without touching the dataset
    pub fn detect(&self, rows: &[RawRow]) -> Option<RecordKind> {
        detect_record_kind(rows, &self.schema)
    }

    /// Merge a raw batch into its collection.
    ///
    /// `declared` is the kind the caller expects (from a `--kind` flag or an
    /// upload dialog); a batch whose headers disagree is rejected before
    /// anything is built or merged. With `dry_run` the merge is computed but
    /// nothing is saved; confirmation prompts are built on the collision
    /// count it reports.
    pub fn ingest(
        &self,
        rows: &[RawRow],
        declared: Option<RecordKind>,
        dry_run: bool,
    ) -> Result<IngestOutcome> {
        let detected = self.detect(rows).ok_or(Error::UnrecognizedFormat)?;
        if let Some(declared) = declared {
            if declared != detected {
                return Err(Error::TypeMismatch { declared, detected });
            }
        }

        // One merge at a time, held through the save: a concurrent
        // read-modify-write on a stale snapshot, whether from another thread
        // or another process, would silently drop the other writer's records.
        let _dataset = self.repository.lock_dataset()?;

        let (inserted, updated, total) = match detected {
            RecordKind::Transactions => {
                let batch = build_transactions(rows, &self.schema);
                let existing = self.repository.load_transactions()?;
                let outcome = merge_records(batch, existing);
                if !dry_run {
                    self.repository.save_transactions(&outcome.records)?;
                    self.repository
                        .mark_updated(RecordKind::Transactions, Utc::now())?;
                }
                (outcome.inserted, outcome.updated, outcome.records.len())
            }
            RecordKind::Categories => {
                let batch = build_categories(rows, &self.schema);
                let existing = self.repository.load_categories()?;
                let outcome = merge_records(batch, existing);
                if !dry_run {
                    self.repository.save_categories(&outcome.records)?;
                    self.repository
                        .mark_updated(RecordKind::Categories, Utc::now())?;
                }
                (outcome.inserted, outcome.updated, outcome.records.len())
            }
        };

        Ok(IngestOutcome {
            kind: detected,
            rows_read: rows.len(),
            inserted,
            updated,
            total,
            dry_run,
        })
    }
}
