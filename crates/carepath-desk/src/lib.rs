//! # carepath-desk
//!
//! The front-desk runtime for the CAREPATH decision engine.
//!
//! [`AnalysisDesk`] is the engine's caller: it runs each analysis, verifies
//! the result against a schema, and appends it to a hash-chained history.
//! Three demo scenarios use mock data:
//!
//! 1. **Symptom check**: complaints from three patients, with the triage
//!    queue read back from history.
//! 2. **Prescription**: category inference, paediatric doses, and allergy
//!    precautions.
//! 3. **Imaging**: canned readings flagged against the confidence threshold,
//!    plus preventive insights.
//!
//! All data is hardcoded and fictional.

pub mod mock_data;
pub mod scenarios;
pub mod schemas;
pub mod service;

pub use service::{in_memory_desk, AnalysisDesk, SharedHistory};

use carepath_contracts::error::CarepathResult;
use carepath_settings::EngineSettings;

/// The settings file shipped with the desk.
pub const DEFAULT_SETTINGS_TOML: &str = include_str!("../config/carepath.toml");

/// Parse [`DEFAULT_SETTINGS_TOML`].
pub fn default_settings() -> CarepathResult<EngineSettings> {
    EngineSettings::from_toml_str(DEFAULT_SETTINGS_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_settings_parse() {
        let settings = default_settings().unwrap();
        assert_eq!(settings.confidence_threshold, 80);
        assert!(settings.auto_triage);
        assert_eq!(settings.random_seed, Some(2024));
    }

    #[test]
    fn scenarios_run_with_shipped_settings() {
        scenarios::run_all(&default_settings().unwrap()).unwrap();
    }
}
