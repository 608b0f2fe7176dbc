//! Analysis history records.
//!
//! The engine never writes history itself. The caller wraps each result in
//! an `AnalysisRecord` and hands it to a `HistorySink`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for one history record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub uuid::Uuid);

impl RecordId {
    /// Create a new, unique record ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which engine operation produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    SymptomAnalysis,
    ImageAnalysis,
    PrescriptionSuggestion,
    Triage,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::SymptomAnalysis => "symptom_analysis",
            AnalysisKind::ImageAnalysis => "image_analysis",
            AnalysisKind::PrescriptionSuggestion => "prescription_suggestion",
            AnalysisKind::Triage => "triage",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: RecordId,
    pub kind: AnalysisKind,
    /// The primary input: symptom text, image type, or diagnosis.
    pub input: String,
    /// The engine result in its JSON form.
    pub result: serde_json::Value,
    pub timestamp: DateTime<Utc>,
    pub patient_id: Option<String>,
}

impl AnalysisRecord {
    /// Build a record stamped with a fresh ID and the current time.
    pub fn new(
        kind: AnalysisKind,
        input: impl Into<String>,
        result: serde_json::Value,
        patient_id: Option<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            kind,
            input: input.into(),
            result,
            timestamp: Utc::now(),
            patient_id,
        }
    }
}

/// Filter for reading history back. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub patient_id: Option<String>,
    pub kind: Option<AnalysisKind>,
}

impl HistoryQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_patient(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            kind: None,
        }
    }

    pub fn of_kind(mut self, kind: AnalysisKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Return true if `record` passes both filters.
    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        let patient_ok = match &self.patient_id {
            Some(id) => record.patient_id.as_deref() == Some(id.as_str()),
            None => true,
        };
        let kind_ok = self.kind.map_or(true, |k| record.kind == k);
        patient_ok && kind_ok
    }
}
