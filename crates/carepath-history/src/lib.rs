//! # carepath-history
//!
//! Append-only, SHA-256 hash-chained analysis history for CAREPATH.
//!
//! ## Overview
//!
//! Every analysis the caller logs is wrapped in a `HistoryEntry` that links
//! to the previous entry via its SHA-256 hash. Editing any entry breaks the
//! chain and is detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carepath_history::InMemoryHistory;
//! use carepath_core::traits::HistorySink;
//!
//! let history = InMemoryHistory::new("front-desk");
//! history.append(&record)?;
//! assert!(history.verify_integrity());
//! let latest = history.query(&HistoryQuery::for_patient("P-001"));
//! ```

pub mod chain;
pub mod entry;
pub mod memory;

pub use chain::{hash_entry, verify_chain};
pub use entry::{HistoryEntry, HistorySnapshot};
pub use memory::InMemoryHistory;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use carepath_contracts::history::{AnalysisKind, AnalysisRecord, HistoryQuery};
    use carepath_core::traits::HistorySink;

    use super::{HistoryEntry, InMemoryHistory};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn make_record(kind: AnalysisKind, input: &str, patient: Option<&str>) -> AnalysisRecord {
        AnalysisRecord::new(
            kind,
            input,
            json!({ "input": input }),
            patient.map(str::to_string),
        )
    }

    fn seeded_store() -> InMemoryHistory {
        let history = InMemoryHistory::new("test-store");
        history
            .append(&make_record(AnalysisKind::SymptomAnalysis, "fever", Some("P-001")))
            .unwrap();
        history
            .append(&make_record(AnalysisKind::Triage, "fever", Some("P-001")))
            .unwrap();
        history
            .append(&make_record(AnalysisKind::ImageAnalysis, "x-ray", Some("P-002")))
            .unwrap();
        history
            .append(&make_record(AnalysisKind::PrescriptionSuggestion, "pain", None))
            .unwrap();
        history
    }

    // ── Chain ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_hash_chain_integrity() {
        let history = seeded_store();
        assert_eq!(history.len(), 4);
        assert!(history.verify_integrity(), "chain must be valid after sequential appends");
    }

    #[test]
    fn test_tamper_detection() {
        let history = seeded_store();

        {
            let mut state = history.state.lock().unwrap();
            state.entries[1].record.result = json!({ "score": 0 });
        }

        assert!(
            !history.verify_integrity(),
            "chain must detect an edited result"
        );
    }

    #[test]
    fn test_reordering_detected() {
        let history = seeded_store();
        let mut entries = history.snapshot().entries;
        entries.swap(0, 1);
        assert!(!super::verify_chain(&entries));
    }

    #[test]
    fn test_genesis_hash() {
        let history = InMemoryHistory::new("genesis");
        history
            .append(&make_record(AnalysisKind::Triage, "first", None))
            .unwrap();

        let snapshot = history.snapshot();
        assert_eq!(snapshot.entries[0].prev_hash, HistoryEntry::GENESIS_HASH);
        assert_eq!(snapshot.entries[0].sequence, 0);
    }

    #[test]
    fn test_snapshot_head_hash() {
        let history = seeded_store();
        let snapshot = history.snapshot();

        assert_eq!(snapshot.store_id, "test-store");
        assert_eq!(snapshot.entries.len(), 4);
        assert_eq!(
            snapshot.head_hash,
            snapshot.entries.last().unwrap().this_hash
        );
        for (idx, entry) in snapshot.entries.iter().enumerate() {
            assert_eq!(entry.sequence, idx as u64);
        }
        assert!(super::verify_chain(&snapshot.entries));
    }

    #[test]
    fn test_verify_empty() {
        let history = InMemoryHistory::new("empty");
        assert!(history.is_empty());
        assert!(history.verify_integrity());
        assert!(history.snapshot().head_hash.is_empty());
        assert!(super::verify_chain(&[]));
    }

    #[test]
    fn test_store_id_changes_hash() {
        let record = make_record(AnalysisKind::Triage, "x", None);
        let a = super::hash_entry("store-a", 0, &record, HistoryEntry::GENESIS_HASH).unwrap();
        let b = super::hash_entry("store-b", 0, &record, HistoryEntry::GENESIS_HASH).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    #[test]
    fn test_query_all_newest_first() {
        let history = seeded_store();
        let inputs: Vec<String> = history
            .query(&HistoryQuery::all())
            .into_iter()
            .map(|r| r.input)
            .collect();
        // Appended in quick succession, so reverse append order either way.
        assert_eq!(inputs, vec!["pain", "x-ray", "fever", "fever"]);
    }

    #[test]
    fn test_query_by_patient_and_kind() {
        let history = seeded_store();

        let p1 = history.query(&HistoryQuery::for_patient("P-001"));
        assert_eq!(p1.len(), 2);
        assert!(p1.iter().all(|r| r.patient_id.as_deref() == Some("P-001")));

        let triage = history.query(&HistoryQuery::all().of_kind(AnalysisKind::Triage));
        assert_eq!(triage.len(), 1);
        assert_eq!(triage[0].kind, AnalysisKind::Triage);

        let none = history.query(&HistoryQuery::for_patient("P-002").of_kind(AnalysisKind::Triage));
        assert!(none.is_empty());
    }

    #[test]
    fn test_query_orders_by_timestamp() {
        let history = InMemoryHistory::new("ordering");
        let mut older = make_record(AnalysisKind::Triage, "older", None);
        older.timestamp = Utc::now() - Duration::hours(1);
        let newer = make_record(AnalysisKind::Triage, "newer", None);

        // Append the newer one first; the query must still put it first.
        history.append(&newer).unwrap();
        history.append(&older).unwrap();

        let inputs: Vec<String> = history
            .query(&HistoryQuery::all())
            .into_iter()
            .map(|r| r.input)
            .collect();
        assert_eq!(inputs, vec!["newer", "older"]);
    }
}
