//! Seam traits around the decision engine.
//!
//! - `RandomSource`   : injected randomness (confidence draws, pool picks)
//! - `HistorySink`    : append-only analysis log kept by the caller
//! - `ResultVerifier` : checks a result before the caller logs it
//!
//! The engine only depends on `RandomSource`. The other two are implemented
//! by sibling crates and wired together by whoever calls the engine.

use carepath_contracts::{
    error::CarepathResult,
    history::{AnalysisRecord, HistoryQuery},
    verify::{ResultSchema, VerificationReport},
};

/// A source of uniform random integers.
///
/// Every non-deterministic field the engine produces is drawn through this
/// trait, so a seeded implementation makes whole results reproducible.
pub trait RandomSource: Send + Sync {
    /// Return a uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&self, bound: u32) -> u32;

    /// Return a uniform integer in `[low, high)`, or `low` if the range is empty.
    fn in_range(&self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.below(high - low)
    }

    /// Return a uniform index into a slice of length `len`, or 0 if empty.
    fn index(&self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.below(bound) as usize
    }
}

/// The caller's analysis history.
///
/// Implementations must treat `append` as append-only: records written here
/// are never modified or removed.
pub trait HistorySink: Send + Sync {
    /// Append one record to the log.
    fn append(&self, record: &AnalysisRecord) -> CarepathResult<()>;

    /// Return every record matching `query`, newest first.
    fn query(&self, query: &HistoryQuery) -> Vec<AnalysisRecord>;
}

/// Checks an engine result, in its JSON form, before it is logged.
pub trait ResultVerifier: Send + Sync {
    /// Return a report with `passed = true` if every rule passes, or
    /// `passed = false` with the collected failures otherwise.
    fn verify(
        &self,
        result: &serde_json::Value,
        schema: &ResultSchema,
    ) -> CarepathResult<VerificationReport>;
}
