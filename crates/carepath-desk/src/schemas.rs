//! Result schemas the desk verifies engine output against.
//!
//! Each kind of analysis has one `ResultSchema`: a JSON Schema document for
//! shape, plus domain rules for the ranges and flags the engine guarantees.
//! `desk_verifier()` registers the custom rules those schemas reference.

use serde_json::{json, Value};

use carepath_contracts::verify::{ResultSchema, VerificationRule, VerificationRuleType};
use carepath_verify::SchemaVerifier;

/// Custom rule: no alternative condition repeats the primary condition.
pub const ALTERNATIVES_EXCLUDE_PRIMARY: &str = "alternatives-exclude-primary";
/// Custom rule: every prescription line has a non-empty regimen.
pub const PRESCRIPTION_LINES_COMPLETE: &str = "prescription-lines-complete";

// ── Rule builders ─────────────────────────────────────────────────────────────

fn required(rule_id: &str, field_path: &str) -> VerificationRule {
    VerificationRule {
        rule_id: rule_id.to_string(),
        description: format!("{field_path} must be present"),
        rule_type: VerificationRuleType::RequiredField {
            field_path: field_path.to_string(),
        },
    }
}

fn range(rule_id: &str, field_path: &str, min: i64, max: i64) -> VerificationRule {
    VerificationRule {
        rule_id: rule_id.to_string(),
        description: format!("{field_path} must lie in [{min}, {max}]"),
        rule_type: VerificationRuleType::IntegerRange {
            field_path: field_path.to_string(),
            min,
            max,
        },
    }
}

fn one_of(rule_id: &str, field_path: &str, allowed: &[Value]) -> VerificationRule {
    VerificationRule {
        rule_id: rule_id.to_string(),
        description: format!("{field_path} must be one of {allowed:?}"),
        rule_type: VerificationRuleType::AllowedValues {
            field_path: field_path.to_string(),
            allowed: allowed.to_vec(),
        },
    }
}

fn always_true(rule_id: &str, field_path: &str) -> VerificationRule {
    one_of(rule_id, field_path, &[json!(true)])
}

fn custom(rule_id: &str, function_name: &str, description: &str) -> VerificationRule {
    VerificationRule {
        rule_id: rule_id.to_string(),
        description: description.to_string(),
        rule_type: VerificationRuleType::Custom {
            function_name: function_name.to_string(),
        },
    }
}

fn urgency_values() -> [Value; 3] {
    [json!("low"), json!("medium"), json!("high")]
}

// ── Schemas ───────────────────────────────────────────────────────────────────

pub fn triage_schema() -> ResultSchema {
    ResultSchema {
        schema_id: "triage-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "required": ["score", "priority", "estimated_wait_time", "recommended_action", "notes"],
            "properties": {
                "score": { "type": "integer" },
                "notes": { "type": "string" }
            }
        }),
        rules: vec![
            range("triage-score-range", "score", 0, 100),
            one_of("triage-priority", "priority", &urgency_values()),
        ],
    }
}

pub fn symptom_analysis_schema() -> ResultSchema {
    ResultSchema {
        schema_id: "symptom-analysis-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "required": [
                "detected_symptoms", "primary_condition", "alternative_conditions",
                "urgency_level", "confidence", "recommendations", "suggested_specialty",
                "triage_score"
            ],
            "properties": {
                "detected_symptoms": { "type": "array", "items": { "type": "string" } },
                "alternative_conditions": { "type": "array" },
                "recommendations": { "type": "array", "minItems": 1 }
            }
        }),
        rules: vec![
            required("primary-name", "primary_condition.name"),
            range("primary-probability", "primary_condition.probability", 0, 100),
            range("analysis-confidence", "confidence", 0, 95),
            range("analysis-triage-score", "triage_score.score", 0, 100),
            one_of("analysis-urgency", "urgency_level", &urgency_values()),
            VerificationRule {
                rule_id: "at-most-two-alternatives".to_string(),
                description: "at most two alternative conditions".to_string(),
                rule_type: VerificationRuleType::MaxItems {
                    field_path: "alternative_conditions".to_string(),
                    max: 2,
                },
            },
            custom(
                "alternatives-distinct",
                ALTERNATIVES_EXCLUDE_PRIMARY,
                "alternative conditions must not repeat the primary",
            ),
            always_true("analysis-follow-up", "follow_up_recommended"),
            always_true("analysis-disclaimer", "disclaimer_shown"),
        ],
    }
}

pub fn prescription_schema() -> ResultSchema {
    ResultSchema {
        schema_id: "prescription-suggestion-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "required": [
                "category", "primary_medications", "alternative_medications",
                "precautions", "interactions", "follow_up", "confidence"
            ],
            "properties": {
                "primary_medications": { "type": "array", "minItems": 1 },
                "precautions": { "type": "array", "minItems": 2 }
            }
        }),
        rules: vec![
            one_of(
                "prescription-category",
                "category",
                &[
                    json!("pain"),
                    json!("fever"),
                    json!("allergy"),
                    json!("hypertension"),
                    json!("infection"),
                    json!("general"),
                ],
            ),
            range("prescription-confidence", "confidence", 75, 94),
            always_true("doctor-review", "requires_doctor_review"),
            always_true("prescription-disclaimer", "disclaimer_shown"),
            required("follow-up-specialist", "follow_up.specialist"),
            custom(
                "lines-complete",
                PRESCRIPTION_LINES_COMPLETE,
                "every medication line needs dosage, frequency and duration",
            ),
        ],
    }
}

pub fn image_analysis_schema() -> ResultSchema {
    ResultSchema {
        schema_id: "image-analysis-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "required": ["image_type", "confidence", "findings", "recommendation", "model_version"],
            "properties": {
                "findings": { "type": "string", "minLength": 1 }
            }
        }),
        rules: vec![
            range("image-confidence", "confidence", 50, 95),
            range("image-quality", "quality_score", 80, 95),
            one_of("image-severity", "severity", &[json!("normal"), json!("mild")]),
            one_of(
                "image-follow-up",
                "follow_up_priority",
                &[json!("routine"), json!("priority"), json!("urgent")],
            ),
            always_true("image-disclaimer", "disclaimer_shown"),
        ],
    }
}

// ── Verifier ──────────────────────────────────────────────────────────────────

/// A `SchemaVerifier` with every custom rule the desk schemas reference.
pub fn desk_verifier() -> SchemaVerifier {
    let mut verifier = SchemaVerifier::new();

    verifier.register_rule(
        ALTERNATIVES_EXCLUDE_PRIMARY,
        Box::new(|result: &Value| -> Option<String> {
            let primary = result["primary_condition"]["name"].as_str()?;
            let repeated = result["alternative_conditions"]
                .as_array()?
                .iter()
                .any(|alt| alt["name"].as_str() == Some(primary));
            repeated.then(|| format!("alternative conditions repeat the primary '{primary}'"))
        }),
    );

    verifier.register_rule(
        PRESCRIPTION_LINES_COMPLETE,
        Box::new(|result: &Value| {
            let lines = ["primary_medications", "alternative_medications"]
                .iter()
                .filter_map(|key| result[*key].as_array())
                .flatten();
            for line in lines {
                for field in ["dosage", "frequency", "duration"] {
                    if line[field].as_str().map_or(true, str::is_empty) {
                        let medication = line["medication"].as_str().unwrap_or("?");
                        return Some(format!("{medication} has no {field}"));
                    }
                }
            }
            None
        }),
    );

    verifier
}
