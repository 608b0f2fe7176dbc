//! Front-desk demo scenarios.
//!
//! Each scenario wires a real `AnalysisDesk` over an in-memory history with
//! the mock patients, prints what the desk decided, and finishes by checking
//! the history chain.

pub mod imaging;
pub mod prescription;
pub mod symptom_check;

use carepath_contracts::error::CarepathResult;
use carepath_history::InMemoryHistory;
use carepath_settings::EngineSettings;

/// Run every scenario in order with the same settings.
pub fn run_all(settings: &EngineSettings) -> CarepathResult<()> {
    symptom_check::run_scenario(settings)?;
    prescription::run_scenario(settings)?;
    imaging::run_scenario(settings)?;
    Ok(())
}

fn print_integrity(history: &InMemoryHistory) {
    println!(
        "  History chain integrity: {} ({} record(s) in chain, head {})",
        if history.verify_integrity() { "VERIFIED" } else { "FAILED" },
        history.len(),
        short_hash(&history.snapshot().head_hash)
    );
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}
