//! Patient attributes the engine reads.
//!
//! Every field is optional. Missing attributes never cause an error; they
//! simply contribute no bonus, precaution, or insight.

use serde::{Deserialize, Serialize};

/// Caller-supplied attributes for one patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInfo {
    /// Identifier carried into the analysis history. Not read by the engine.
    pub patient_id: Option<String>,
    /// Age in whole years.
    pub age: Option<u32>,
    pub chronic_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub current_medications: Vec<String>,
    /// Body-mass index, used only by health insights.
    pub bmi: Option<f64>,
}

impl PatientInfo {
    /// A patient with nothing known but an identifier.
    pub fn with_id(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            ..Self::default()
        }
    }

    pub fn is_elderly(&self) -> bool {
        matches!(self.age, Some(age) if age > 65)
    }

    pub fn is_child(&self) -> bool {
        matches!(self.age, Some(age) if age < 12)
    }

    /// Case-insensitive exact match against the allergy list.
    pub fn is_allergic_to(&self, substance: &str) -> bool {
        self.allergies
            .iter()
            .any(|a| a.trim().eq_ignore_ascii_case(substance))
    }
}
