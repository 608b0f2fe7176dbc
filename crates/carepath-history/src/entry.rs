//! History entry and snapshot types.
//!
//! `HistoryEntry` wraps an `AnalysisRecord` with its chain position and the
//! hashes that make edits detectable. `HistorySnapshot` is the exported copy
//! of a whole store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use carepath_contracts::history::AnalysisRecord;

/// One link in the history chain.
///
/// Changing any field, including those of `record`, invalidates `this_hash`
/// and every later `prev_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// Name of the store that wrote this entry.
    pub store_id: String,

    pub record: AnalysisRecord,

    /// Hex SHA-256 of the previous entry, or `GENESIS_HASH` for the first.
    pub prev_hash: String,

    /// Hex SHA-256 over (store_id, sequence, prev_hash, record JSON).
    pub this_hash: String,
}

impl HistoryEntry {
    /// The `prev_hash` of the first entry in every chain: 64 hex zeros.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A point-in-time export of a history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub store_id: String,

    /// All entries in chain order.
    pub entries: Vec<HistoryEntry>,

    pub exported_at: DateTime<Utc>,

    /// `this_hash` of the last entry; empty when the store is empty.
    pub head_hash: String,
}
