//! The front desk: the one caller of the decision engine.
//!
//! `AnalysisDesk` runs an engine operation, verifies the JSON form of the
//! result against its schema, appends it to the analysis history, and only
//! then hands it back. A result that fails verification is never logged and
//! never returned.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use carepath_contracts::{
    analysis::{AnalysisResult, HealthInsights, TriageResult},
    error::{CarepathError, CarepathResult},
    history::{AnalysisKind, AnalysisRecord, HistoryQuery},
    imaging::ImageAnalysis,
    patient::PatientInfo,
    prescription::PrescriptionSuggestion,
    urgency::Urgency,
    verify::ResultSchema,
};
use carepath_core::{
    traits::{HistorySink, ResultVerifier},
    DecisionEngine,
};
use carepath_history::InMemoryHistory;
use carepath_settings::EngineSettings;

use crate::schemas::{
    desk_verifier, image_analysis_schema, prescription_schema, symptom_analysis_schema,
    triage_schema,
};

/// Wires the engine to settings, history, and the result verifier.
pub struct AnalysisDesk {
    engine: DecisionEngine,
    settings: EngineSettings,
    history: Box<dyn HistorySink>,
    verifier: Box<dyn ResultVerifier>,
}

impl AnalysisDesk {
    /// Assemble a desk from explicit parts.
    pub fn new(
        engine: DecisionEngine,
        settings: EngineSettings,
        history: Box<dyn HistorySink>,
        verifier: Box<dyn ResultVerifier>,
    ) -> Self {
        Self {
            engine,
            settings,
            history,
            verifier,
        }
    }

    /// Build the engine from `settings.random_seed` and verify with the
    /// desk's standard schemas.
    pub fn from_settings(settings: EngineSettings, history: Box<dyn HistorySink>) -> Self {
        let engine = match settings.random_seed {
            Some(seed) => DecisionEngine::seeded(seed),
            None => DecisionEngine::from_entropy(),
        };
        debug!(
            seeded = settings.random_seed.is_some(),
            auto_triage = settings.auto_triage,
            "analysis desk assembled"
        );
        Self::new(engine, settings, history, Box::new(desk_verifier()))
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Analyse a complaint. With auto-triage on, the triage result is filed
    /// as its own history record right after the analysis. Both results are
    /// verified before either is appended.
    pub fn analyze_symptoms(&self, text: &str, patient: &PatientInfo) -> CarepathResult<AnalysisResult> {
        let result = self.engine.analyze_symptoms(text, patient);
        let patient_id = patient.patient_id.as_deref();

        let analysis = self.checked(AnalysisKind::SymptomAnalysis, &result, &symptom_analysis_schema())?;
        let triage = if self.settings.auto_triage {
            Some(self.checked(AnalysisKind::Triage, &result.triage_score, &triage_schema())?)
        } else {
            None
        };

        self.append(AnalysisKind::SymptomAnalysis, text, analysis, patient_id)?;
        if let Some(value) = triage {
            self.append(AnalysisKind::Triage, text, value, patient_id)?;
        }

        Ok(result)
    }

    /// Triage without a complaint text, e.g. from a nurse's urgency call.
    pub fn triage(
        &self,
        urgency: Option<Urgency>,
        symptom_count: usize,
        patient: &PatientInfo,
    ) -> CarepathResult<TriageResult> {
        let result = self.engine.triage(urgency, symptom_count, patient);
        let input = format!(
            "{} urgency, {} symptom(s)",
            urgency.as_ref().map_or("unknown", Urgency::as_str),
            symptom_count
        );
        self.record(
            AnalysisKind::Triage,
            &input,
            &result,
            &triage_schema(),
            patient.patient_id.as_deref(),
        )?;
        Ok(result)
    }

    pub fn suggest_prescription(
        &self,
        diagnosis: &str,
        patient: &PatientInfo,
    ) -> CarepathResult<PrescriptionSuggestion> {
        let result = self.engine.infer_prescription(diagnosis, patient);
        self.record(
            AnalysisKind::PrescriptionSuggestion,
            diagnosis,
            &result,
            &prescription_schema(),
            patient.patient_id.as_deref(),
        )?;
        Ok(result)
    }

    /// Read an image using the configured confidence threshold.
    pub fn analyze_image(
        &self,
        image_type: &str,
        patient_id: Option<&str>,
    ) -> CarepathResult<ImageAnalysis> {
        let result = self
            .engine
            .analyze_image(image_type, self.settings.confidence_threshold);
        self.record(
            AnalysisKind::ImageAnalysis,
            image_type,
            &result,
            &image_analysis_schema(),
            patient_id,
        )?;
        Ok(result)
    }

    /// Preventive insights. Not logged: they carry no decision.
    pub fn health_insights(&self, patient: &PatientInfo) -> HealthInsights {
        self.engine.health_insights(patient)
    }

    /// Logged records matching `query`, newest first.
    pub fn history(&self, query: &HistoryQuery) -> Vec<AnalysisRecord> {
        self.history.query(query)
    }

    /// Triage records, newest first. The desk's waiting queue.
    pub fn triage_queue(&self) -> Vec<AnalysisRecord> {
        self.history.query(&HistoryQuery::all().of_kind(AnalysisKind::Triage))
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn record<T: Serialize>(
        &self,
        kind: AnalysisKind,
        input: &str,
        result: &T,
        schema: &ResultSchema,
        patient_id: Option<&str>,
    ) -> CarepathResult<()> {
        let value = self.checked(kind, result, schema)?;
        self.append(kind, input, value, patient_id)
    }

    /// Serialize `result` and verify it against `schema`.
    fn checked<T: Serialize>(
        &self,
        kind: AnalysisKind,
        result: &T,
        schema: &ResultSchema,
    ) -> CarepathResult<Value> {
        let value = serde_json::to_value(result)?;

        let report = self.verifier.verify(&value, schema)?;
        if !report.passed {
            let reason = report.summary();
            warn!(
                kind = %kind,
                schema_id = %schema.schema_id,
                %reason,
                "result rejected; not logged"
            );
            return Err(CarepathError::VerificationFailed { reason });
        }
        Ok(value)
    }

    fn append(
        &self,
        kind: AnalysisKind,
        input: &str,
        value: Value,
        patient_id: Option<&str>,
    ) -> CarepathResult<()> {
        let record = AnalysisRecord::new(kind, input, value, patient_id.map(str::to_string));
        self.history.append(&record)?;

        info!(kind = %kind, record_id = %record.id, "result logged");
        Ok(())
    }
}

// ── Shared history handle ─────────────────────────────────────────────────────

/// Lets an `Arc<InMemoryHistory>` be handed to the desk as a
/// `Box<dyn HistorySink>` while the caller keeps a handle for snapshots and
/// integrity checks.
pub struct SharedHistory(pub Arc<InMemoryHistory>);

impl HistorySink for SharedHistory {
    fn append(&self, record: &AnalysisRecord) -> CarepathResult<()> {
        self.0.append(record)
    }

    fn query(&self, query: &HistoryQuery) -> Vec<AnalysisRecord> {
        self.0.query(query)
    }
}

/// A desk over a fresh in-memory history, plus the handle to inspect it.
pub fn in_memory_desk(
    settings: EngineSettings,
    store_id: &str,
) -> (AnalysisDesk, Arc<InMemoryHistory>) {
    let history = Arc::new(InMemoryHistory::new(store_id));
    let desk = AnalysisDesk::from_settings(settings, Box::new(SharedHistory(Arc::clone(&history))));
    (desk, history)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
