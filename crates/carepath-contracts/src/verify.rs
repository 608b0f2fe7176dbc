//! Result verification schema and report types.
//!
//! Before an engine result is logged or returned by the desk, the verifier
//! runs its JSON form against a `ResultSchema`. Only a passing
//! `VerificationReport` lets the result through.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The full specification the verifier checks a result against.
///
/// Combines a JSON Schema document with domain rules that JSON Schema
/// cannot express as readably.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSchema {
    /// Unique identifier for this schema (e.g. "symptom-analysis-v1").
    pub schema_id: String,
    /// A JSON Schema document used for structural validation. `Null` skips it.
    pub json_schema: Value,
    /// Additional domain rules evaluated after structural validation.
    pub rules: Vec<VerificationRule>,
}

/// A single verification rule applied to a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRule {
    /// Unique identifier for this rule, referenced in failure reports.
    pub rule_id: String,
    pub description: String,
    pub rule_type: VerificationRuleType,
}

/// The kinds of checks the verifier supports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerificationRuleType {
    /// The field at `field_path` must be present and non-null.
    RequiredField {
        /// Dotted path, e.g. "triage_score.score".
        field_path: String,
    },

    /// The field at `field_path` must equal one of `allowed`.
    AllowedValues {
        field_path: String,
        allowed: Vec<Value>,
    },

    /// The field at `field_path` must be an integer in `[min, max]`.
    IntegerRange {
        field_path: String,
        min: i64,
        max: i64,
    },

    /// The array at `field_path` must hold at most `max` elements.
    MaxItems {
        field_path: String,
        max: usize,
    },

    /// Delegate to a named function registered with the verifier.
    Custom {
        function_name: String,
    },
}

/// The result of running every rule in a `ResultSchema`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if all rules passed.
    pub passed: bool,
    /// All failures collected during this run. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    /// Join failures into one `[rule] message; ...` line for logs and errors.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("[{}] {}", f.rule_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single rule failure within a `VerificationReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailure {
    pub rule_id: String,
    pub message: String,
}
