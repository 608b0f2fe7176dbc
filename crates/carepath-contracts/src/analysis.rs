//! Symptom-analysis and triage result records.
//!
//! These are produced fresh on every engine call and handed to the caller,
//! which may log them to the analysis history.

use serde::{Deserialize, Serialize};

use crate::urgency::{Priority, Urgency};

/// Symptoms found in a free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomMatch {
    /// Detected symptom keys in knowledge-table order, without duplicates.
    pub detected: Vec<String>,
    /// Highest urgency among `detected`; `Low` when nothing was detected.
    pub max_urgency: Urgency,
}

/// A candidate diagnosis scored against the detected symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    /// Display name, e.g. `"HYPERTENSION"` or `"COMMON COLD"`.
    pub name: String,
    /// Percentage in [0, 100]; table matches are capped at 95.
    pub probability: u8,
    pub treatment: String,
    pub specialty: String,
    pub urgency: Urgency,
}

/// Outcome of the triage scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    /// Clamped into [0, 100].
    pub score: u8,
    pub priority: Priority,
    pub estimated_wait_time: String,
    pub recommended_action: String,
    /// `"; "`-joined flags, empty when none apply.
    pub notes: String,
}

/// Full result of analysing a free-text symptom description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub detected_symptoms: Vec<String>,
    pub primary_condition: ConditionMatch,
    /// At most two runners-up; never contains `primary_condition`.
    pub alternative_conditions: Vec<ConditionMatch>,
    pub urgency_level: Urgency,
    /// Percentage in [0, 95].
    pub confidence: u8,
    pub recommendations: Vec<String>,
    pub suggested_specialty: String,
    pub triage_score: TriageResult,
    pub requires_immediate_attention: bool,
    pub follow_up_recommended: bool,
    /// Always true: the engine never asserts medical certainty.
    pub disclaimer_shown: bool,
}

/// Preventive guidance derived from a patient's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsights {
    pub risk_factors: Vec<String>,
    pub preventive_recommendations: Vec<String>,
    pub lifestyle_insights: Vec<String>,
    pub follow_up_recommendations: Vec<String>,
}
