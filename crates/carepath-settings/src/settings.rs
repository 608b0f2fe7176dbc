//! Engine settings and their TOML loader.
//!
//! Example:
//! ```toml
//! confidence_threshold = 80
//! auto_triage = true
//! random_seed = 42
//! ```
//!
//! Every key is optional. A missing key takes its default; an unknown key is
//! rejected so typos surface at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use carepath_contracts::error::{CarepathError, CarepathResult};

/// Default threshold below which image readings need specialist review.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 80;

/// Settings read once by the caller before invoking the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Image readings with confidence below this percentage are flagged for
    /// specialist review. Must be at most 100; 0 disables the flag.
    pub confidence_threshold: u8,

    /// When true, every symptom analysis also files a triage record in the
    /// analysis history.
    pub auto_triage: bool,

    /// Fixed seed for the engine's random source. `None` seeds from the OS.
    pub random_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            auto_triage: true,
            random_seed: None,
        }
    }
}

impl EngineSettings {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `CarepathError::ConfigError` if the TOML is malformed, names an
    /// unknown key, or holds an out-of-range value.
    pub fn from_toml_str(s: &str) -> CarepathResult<Self> {
        let settings: EngineSettings = toml::from_str(s).map_err(|e| CarepathError::ConfigError {
            reason: format!("failed to parse settings TOML: {}", e),
        })?;
        settings.validate()?;
        debug!(
            confidence_threshold = settings.confidence_threshold,
            auto_triage = settings.auto_triage,
            seeded = settings.random_seed.is_some(),
            "engine settings loaded"
        );
        Ok(settings)
    }

    /// Read the file at `path` and parse it as TOML settings.
    pub fn from_file(path: &Path) -> CarepathResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CarepathError::ConfigError {
            reason: format!("failed to read settings file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check value ranges that the type system does not enforce.
    pub fn validate(&self) -> CarepathResult<()> {
        if self.confidence_threshold > 100 {
            warn!(
                confidence_threshold = self.confidence_threshold,
                "confidence threshold out of range"
            );
            return Err(CarepathError::ConfigError {
                reason: format!(
                    "confidence_threshold must be between 0 and 100, got {}",
                    self.confidence_threshold
                ),
            });
        }
        Ok(())
    }

    /// Return a copy with `random_seed` replaced.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }
}
