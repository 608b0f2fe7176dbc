//! Hash-chain primitives: hashing and chain verification.
//!
//! Hash input layout (bytes, in order):
//!   1. store_id as UTF-8 bytes
//!   2. sequence as 8-byte little-endian
//!   3. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   4. compact JSON of the record

use sha2::{Digest, Sha256};

use carepath_contracts::{error::CarepathResult, history::AnalysisRecord};

use crate::entry::HistoryEntry;

/// Compute the SHA-256 hash for one history entry.
///
/// Returns a lowercase 64-character hex string, or a serialization error if
/// the record's JSON result cannot be encoded.
pub fn hash_entry(
    store_id: &str,
    sequence: u64,
    record: &AnalysisRecord,
    prev_hash: &str,
) -> CarepathResult<String> {
    let record_json = serde_json::to_vec(record)?;

    let mut hasher = Sha256::new();
    hasher.update(store_id.as_bytes());
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&record_json);

    Ok(hex::encode(hasher.finalize()))
}

/// Verify a history chain.
///
/// Valid means every entry links to its predecessor (the first to
/// `GENESIS_HASH`), sequence numbers run 0, 1, 2, …, and every `this_hash`
/// matches the recomputed hash. An empty chain is valid.
pub fn verify_chain(entries: &[HistoryEntry]) -> bool {
    let mut expected_prev = HistoryEntry::GENESIS_HASH.to_string();

    for (position, entry) in entries.iter().enumerate() {
        if entry.sequence != position as u64 || entry.prev_hash != expected_prev {
            return false;
        }

        match hash_entry(&entry.store_id, entry.sequence, &entry.record, &entry.prev_hash) {
            Ok(recomputed) if recomputed == entry.this_hash => {}
            _ => return false,
        }

        expected_prev = entry.this_hash.clone();
    }

    true
}
