//! Prescription suggestion records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse medication class chosen from a free-text diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicationCategory {
    Pain,
    Fever,
    Allergy,
    Hypertension,
    Infection,
    /// No keyword matched. Uses the pain medication list but generic
    /// frequency and duration.
    General,
}

impl MedicationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationCategory::Pain => "pain",
            MedicationCategory::Fever => "fever",
            MedicationCategory::Allergy => "allergy",
            MedicationCategory::Hypertension => "hypertension",
            MedicationCategory::Infection => "infection",
            MedicationCategory::General => "general",
        }
    }
}

impl fmt::Display for MedicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One suggested medication with its regimen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionLine {
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

/// When and with whom to follow up after a prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    pub timeframe: String,
    pub conditions: String,
    pub specialist: String,
}

/// Suggested prescription for a diagnosis. Always requires doctor review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionSuggestion {
    pub category: MedicationCategory,
    /// The first two lines of the category list.
    pub primary_medications: Vec<PrescriptionLine>,
    /// Everything after the first two.
    pub alternative_medications: Vec<PrescriptionLine>,
    pub precautions: Vec<String>,
    pub interactions: Vec<String>,
    pub lifestyle: Vec<String>,
    pub follow_up: FollowUpPlan,
    /// Drawn from the injected random source, in [75, 95).
    pub confidence: u8,
    pub warnings_present: bool,
    pub requires_doctor_review: bool,
    pub pharmacy_notes: String,
    pub disclaimer_shown: bool,
}

impl PrescriptionSuggestion {
    /// Iterate over primary then alternative lines.
    pub fn all_lines(&self) -> impl Iterator<Item = &PrescriptionLine> {
        self.primary_medications
            .iter()
            .chain(self.alternative_medications.iter())
    }
}
