//! Schema-based result verifier for CAREPATH.
//!
//! `SchemaVerifier` implements the `ResultVerifier` trait from
//! `carepath-core`. Verification runs in two phases:
//!
//! 1. **Structural**: the result is validated against
//!    `ResultSchema::json_schema` using the `jsonschema` crate.
//! 2. **Domain**: each `VerificationRule` in `ResultSchema::rules` is
//!    evaluated in order. All failures are collected before returning.
//!
//! Custom rules delegate to named functions registered via `register_rule`.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use carepath_contracts::{
    error::{CarepathError, CarepathResult},
    verify::{ResultSchema, VerificationFailure, VerificationReport, VerificationRuleType},
};
use carepath_core::traits::ResultVerifier;

/// A caller-supplied verification function.
///
/// Receives the whole result. Returns `Some(message)` when the check fails,
/// or `None` on success.
pub type CustomVerifierFn = Box<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Combines JSON Schema structural validation with a set of domain rules.
pub struct SchemaVerifier {
    custom_rules: HashMap<String, CustomVerifierFn>,
}

impl SchemaVerifier {
    /// Create a verifier with no custom rules registered.
    pub fn new() -> Self {
        Self {
            custom_rules: HashMap::new(),
        }
    }

    /// Register a custom verification function under `name`.
    ///
    /// The name must match the `function_name` of a
    /// `VerificationRuleType::Custom` rule. Registering the same name twice
    /// replaces the previous function.
    pub fn register_rule(&mut self, name: impl Into<String>, f: CustomVerifierFn) {
        self.custom_rules.insert(name.into(), f);
    }

    /// Names of every registered custom rule, sorted.
    pub fn registered_rules(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.custom_rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Resolve a dotted field path (e.g. `"triage_score.score"`). Returns
    /// `None` when any segment is missing or the value is JSON `null`.
    fn resolve_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
        let mut current = value;
        for segment in path.split('.') {
            match current.get(segment) {
                Some(v) if !v.is_null() => current = v,
                _ => return None,
            }
        }
        Some(current)
    }

    fn check_rule(&self, result: &Value, rule_type: &VerificationRuleType) -> Option<String> {
        match rule_type {
            VerificationRuleType::RequiredField { field_path } => {
                match Self::resolve_path(result, field_path) {
                    None => Some(format!("required field '{field_path}' is missing or null")),
                    Some(_) => None,
                }
            }

            VerificationRuleType::AllowedValues { field_path, allowed } => {
                match Self::resolve_path(result, field_path) {
                    None => Some(format!(
                        "field '{field_path}' is missing; cannot check allowed values"
                    )),
                    Some(actual) if allowed.contains(actual) => None,
                    Some(actual) => Some(format!(
                        "field '{field_path}' has value {actual} which is not in the allowed set"
                    )),
                }
            }

            VerificationRuleType::IntegerRange { field_path, min, max } => {
                match Self::resolve_path(result, field_path).map(Value::as_i64) {
                    None => Some(format!("field '{field_path}' is missing; cannot check range")),
                    Some(None) => Some(format!("field '{field_path}' is not an integer")),
                    Some(Some(n)) if n < *min || n > *max => Some(format!(
                        "field '{field_path}' is {n}, outside [{min}, {max}]"
                    )),
                    Some(Some(_)) => None,
                }
            }

            // An absent array counts as empty.
            VerificationRuleType::MaxItems { field_path, max } => {
                match Self::resolve_path(result, field_path) {
                    None => None,
                    Some(v) => match v.as_array() {
                        None => Some(format!("field '{field_path}' is not an array")),
                        Some(items) if items.len() > *max => Some(format!(
                            "field '{field_path}' holds {} items, more than {max}",
                            items.len()
                        )),
                        Some(_) => None,
                    },
                }
            }

            // An unregistered name is itself a failure.
            VerificationRuleType::Custom { function_name } => {
                match self.custom_rules.get(function_name.as_str()) {
                    Some(f) => f(result),
                    None => Some(format!(
                        "no custom rule registered for function name '{function_name}'"
                    )),
                }
            }
        }
    }
}

impl Default for SchemaVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultVerifier for SchemaVerifier {
    fn verify(&self, result: &Value, schema: &ResultSchema) -> CarepathResult<VerificationReport> {
        let mut failures: Vec<VerificationFailure> = Vec::new();

        // ── Phase 1: JSON Schema structural validation ────────────────────────
        // A null json_schema means no structural constraint.
        if !schema.json_schema.is_null() {
            match jsonschema::validator_for(&schema.json_schema) {
                Ok(validator) => {
                    for error in validator.iter_errors(result) {
                        let message = format!(
                            "JSON Schema violation at {}: {}",
                            error.instance_path, error
                        );
                        warn!(schema_id = %schema.schema_id, %message, "structural validation failure");
                        failures.push(VerificationFailure {
                            rule_id: "json-schema".to_string(),
                            message,
                        });
                    }
                }
                // A schema that does not compile is a bug in the caller, not
                // a property of the result.
                Err(e) => {
                    warn!(schema_id = %schema.schema_id, error = %e, "schema compilation failure");
                    return Err(CarepathError::SchemaValidation {
                        reason: format!("invalid JSON Schema document '{}': {e}", schema.schema_id),
                    });
                }
            }
        }

        // ── Phase 2: Domain rules ─────────────────────────────────────────────
        for rule in &schema.rules {
            debug!(
                rule_id = %rule.rule_id,
                description = %rule.description,
                "evaluating verification rule"
            );

            if let Some(message) = self.check_rule(result, &rule.rule_type) {
                warn!(rule_id = %rule.rule_id, %message, "domain rule failed");
                failures.push(VerificationFailure {
                    rule_id: rule.rule_id.clone(),
                    message,
                });
            }
        }

        let passed = failures.is_empty();
        debug!(
            schema_id = %schema.schema_id,
            passed,
            failure_count = failures.len(),
            "verification complete"
        );

        Ok(VerificationReport { passed, failures })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
