//! Canned medical-image analysis records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Normal,
    Mild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpPriority {
    Routine,
    Priority,
    Urgent,
}

/// Result of analysing one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Upper-cased image type as supplied by the caller, e.g. `"X-RAY"`.
    pub image_type: String,
    /// Percentage in [50, 95].
    pub confidence: u8,
    pub findings: String,
    pub recommendation: String,
    pub severity: FindingSeverity,
    pub follow_up_priority: FollowUpPriority,
    /// True when `confidence` is below the configured threshold.
    pub requires_specialist_review: bool,
    pub suggested_specialty: String,
    /// In [80, 95].
    pub quality_score: u8,
    pub processing_time: String,
    pub model_version: String,
    pub disclaimer_shown: bool,
    pub additional_recommendations: Vec<String>,
}
