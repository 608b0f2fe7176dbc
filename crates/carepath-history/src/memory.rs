//! In-memory implementation of `HistorySink`.
//!
//! `InMemoryHistory` keeps every entry in a `Vec` behind a `Mutex`, so one
//! store can be shared by several callers. Use `snapshot()` to export the
//! chain and `verify_integrity()` to confirm nothing was edited in place.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::{debug, info};

use carepath_contracts::{
    error::{CarepathError, CarepathResult},
    history::{AnalysisRecord, HistoryQuery},
};
use carepath_core::traits::HistorySink;

use crate::{
    chain::{hash_entry, verify_chain},
    entry::{HistoryEntry, HistorySnapshot},
};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct HistoryState {
    /// All entries written so far, in append order.
    pub(crate) entries: Vec<HistoryEntry>,

    /// `this_hash` of the last entry, or `GENESIS_HASH` before the first.
    pub(crate) last_hash: String,
}

// ── Public store ──────────────────────────────────────────────────────────────

/// An append-only analysis history backed by a SHA-256 hash chain.
pub struct InMemoryHistory {
    store_id: String,
    pub(crate) state: Arc<Mutex<HistoryState>>,
}

impl InMemoryHistory {
    /// Create an empty store. `store_id` is mixed into every entry hash.
    pub fn new(store_id: impl Into<String>) -> Self {
        let state = HistoryState {
            entries: Vec::new(),
            last_hash: HistoryEntry::GENESIS_HASH.to_string(),
        };
        Self {
            store_id: store_id.into(),
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export every entry written so far.
    pub fn snapshot(&self) -> HistorySnapshot {
        let state = self.lock();
        let head_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        HistorySnapshot {
            store_id: self.store_id.clone(),
            entries: state.entries.clone(),
            exported_at: Utc::now(),
            head_hash,
        }
    }

    /// Verify that the stored chain has not been edited.
    pub fn verify_integrity(&self) -> bool {
        verify_chain(&self.lock().entries)
    }

    // Readers tolerate a poisoned lock: entries are only ever pushed whole.
    fn lock(&self) -> std::sync::MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── HistorySink impl ──────────────────────────────────────────────────────────

impl HistorySink for InMemoryHistory {
    /// Append one record to the chain.
    ///
    /// Fails with `HistoryWriteFailed` if the lock is poisoned, or with
    /// `Serialization` if the record cannot be hashed.
    fn append(&self, record: &AnalysisRecord) -> CarepathResult<()> {
        let mut state = self.state.lock().map_err(|e| CarepathError::HistoryWriteFailed {
            reason: format!("history state lock poisoned: {}", e),
        })?;

        let sequence = state.entries.len() as u64;
        let prev_hash = state.last_hash.clone();
        let this_hash = hash_entry(&self.store_id, sequence, record, &prev_hash)?;

        state.entries.push(HistoryEntry {
            sequence,
            store_id: self.store_id.clone(),
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.last_hash = this_hash;

        info!(
            store_id = %self.store_id,
            sequence,
            kind = %record.kind,
            record_id = %record.id,
            "analysis recorded"
        );

        Ok(())
    }

    /// Matching records, newest first. Records with equal timestamps come
    /// back in reverse append order.
    fn query(&self, query: &HistoryQuery) -> Vec<AnalysisRecord> {
        let state = self.lock();
        let mut records: Vec<AnalysisRecord> = state
            .entries
            .iter()
            .rev()
            .map(|e| &e.record)
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        debug!(
            store_id = %self.store_id,
            matched = records.len(),
            "history queried"
        );
        records
    }
}
