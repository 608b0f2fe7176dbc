//! # carepath-settings
//!
//! The settings source for the CAREPATH decision engine.
//!
//! ## Overview
//!
//! This crate provides [`EngineSettings`]: the confidence threshold used to
//! flag image readings for specialist review, the auto-triage flag, and an
//! optional random seed. Settings are declared in TOML; every key has a
//! default.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use carepath_settings::EngineSettings;
//!
//! let settings = EngineSettings::from_file(Path::new("config/carepath.toml"))?;
//! ```

pub mod settings;

pub use settings::{EngineSettings, DEFAULT_CONFIDENCE_THRESHOLD};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use carepath_contracts::error::CarepathError;
    use tempfile::{NamedTempFile, TempDir};

    use crate::EngineSettings;

    // ── 1. defaults ───────────────────────────────────────────────────────────

    /// An empty document yields the defaults.
    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = EngineSettings::from_toml_str("").unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.confidence_threshold, 80);
        assert!(settings.auto_triage);
        assert!(settings.random_seed.is_none());
    }

    // ── 2. explicit values ────────────────────────────────────────────────────

    #[test]
    fn test_explicit_values() {
        let toml = r#"
            confidence_threshold = 65
            auto_triage = false
            random_seed = 42
        "#;

        let settings = EngineSettings::from_toml_str(toml).unwrap();
        assert_eq!(settings.confidence_threshold, 65);
        assert!(!settings.auto_triage);
        assert_eq!(settings.random_seed, Some(42));
    }

    // ── 3. partial document ───────────────────────────────────────────────────

    /// Keys that are present override; absent keys keep their defaults.
    #[test]
    fn test_partial_document() {
        let settings = EngineSettings::from_toml_str("auto_triage = false").unwrap();
        assert_eq!(settings.confidence_threshold, 80);
        assert!(!settings.auto_triage);
    }

    // ── 4. range validation ───────────────────────────────────────────────────

    #[test]
    fn test_threshold_above_100_rejected() {
        match EngineSettings::from_toml_str("confidence_threshold = 150") {
            Err(CarepathError::ConfigError { reason }) => {
                assert!(reason.contains("confidence_threshold"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// Values that do not fit a u8 fail at parse time.
    #[test]
    fn test_threshold_negative_rejected() {
        let result = EngineSettings::from_toml_str("confidence_threshold = -5");
        assert!(matches!(result, Err(CarepathError::ConfigError { .. })));
    }

    // ── 5. unknown keys ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_key_rejected() {
        let result = EngineSettings::from_toml_str("confidence_treshold = 70");
        match result {
            Err(CarepathError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse settings TOML"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 6. TOML parse error ───────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match EngineSettings::from_toml_str(bad_toml) {
            Err(CarepathError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse settings TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 7. file loading ───────────────────────────────────────────────────────

    #[test]
    fn test_from_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "confidence_threshold = 90").unwrap();
        writeln!(file, "random_seed = 11").unwrap();
        file.flush().unwrap();

        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.confidence_threshold, 90);
        assert_eq!(settings.random_seed, Some(11));
        assert!(settings.auto_triage);
    }

    #[test]
    fn test_from_file_in_temp_dir_rejects_bad_threshold() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("carepath.toml");
        std::fs::write(&path, "confidence_threshold = 101\n").unwrap();

        let result = EngineSettings::from_file(&path);
        assert!(matches!(result, Err(CarepathError::ConfigError { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let path = std::path::Path::new("/definitely/not/here/carepath.toml");
        match EngineSettings::from_file(path) {
            Err(CarepathError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read settings file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_with_seed_overrides() {
        let settings = EngineSettings::default().with_seed(Some(7));
        assert_eq!(settings.random_seed, Some(7));
    }
}
