//! The decision engine: one entry point over the rule tables.
//!
//! Symptom analysis runs the pipeline:
//!
//!   Text → Symptom Matcher → Condition Scorer → Triage Scorer → AnalysisResult
//!
//! Every operation is total. The engine holds no state between calls apart
//! from its random source, which only feeds presentation fields (prescription
//! confidence, instruction text, image pool picks). With a seeded source the
//! engine is fully reproducible.

use tracing::info;

use carepath_contracts::{
    analysis::{AnalysisResult, ConditionMatch, HealthInsights, SymptomMatch, TriageResult},
    imaging::ImageAnalysis,
    patient::PatientInfo,
    prescription::PrescriptionSuggestion,
    urgency::Urgency,
};

use crate::{
    conditions, imaging, insights, prescription,
    random::SeededRandom,
    symptoms,
    traits::RandomSource,
    triage,
};

/// Cap on the symptom-analysis confidence.
const MAX_ANALYSIS_CONFIDENCE: usize = 95;
/// Number of runner-up conditions reported next to the primary one.
const MAX_ALTERNATIVES: usize = 2;

/// Rule-based decision engine.
///
/// Cheap to construct; safe to share across threads.
pub struct DecisionEngine {
    random: Box<dyn RandomSource>,
}

impl DecisionEngine {
    /// Create an engine drawing randomness from `random`.
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Create an engine whose random draws are fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SeededRandom::from_seed(seed)))
    }

    /// Create an engine seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(Box::new(SeededRandom::from_entropy()))
    }

    /// Detect known symptoms in free text. See [`symptoms::match_symptoms`].
    pub fn match_symptoms(&self, text: &str) -> SymptomMatch {
        symptoms::match_symptoms(text)
    }

    /// Score table conditions. See [`conditions::score_conditions`].
    pub fn score_conditions(&self, detected: &[String]) -> Vec<ConditionMatch> {
        conditions::score_conditions(detected)
    }

    /// Triage a patient. See [`triage::triage`].
    pub fn triage(
        &self,
        urgency: Option<Urgency>,
        symptom_count: usize,
        patient: &PatientInfo,
    ) -> TriageResult {
        triage::triage(urgency, symptom_count, patient)
    }

    /// Analyse a free-text symptom description.
    ///
    /// # Pipeline
    ///
    /// 1. Detect symptoms and the maximum urgency
    /// 2. Score conditions; the first is primary, the next two are
    ///    alternatives. With no match the primary is "General Health Concern"
    /// 3. Confidence = 60 + 10 per detected symptom, capped at 95
    /// 4. Triage with the maximum urgency and the detected count
    pub fn analyze_symptoms(&self, text: &str, patient: &PatientInfo) -> AnalysisResult {
        let SymptomMatch {
            detected,
            max_urgency,
        } = symptoms::match_symptoms(text);

        let mut candidates = conditions::score_conditions(&detected).into_iter();
        let primary_condition = candidates
            .next()
            .unwrap_or_else(|| conditions::general_health_concern(max_urgency));
        let alternative_conditions: Vec<ConditionMatch> =
            candidates.take(MAX_ALTERNATIVES).collect();

        let confidence = (60 + detected.len() * 10).min(MAX_ANALYSIS_CONFIDENCE) as u8;
        let recommendations = symptoms::recommendations(max_urgency, &detected);
        let suggested_specialty = symptoms::suggested_specialty(&detected).to_string();
        let triage_score = triage::triage(Some(max_urgency), detected.len(), patient);

        info!(
            detected = detected.len(),
            urgency = %max_urgency,
            primary = %primary_condition.name,
            triage_score = triage_score.score,
            "symptom analysis complete"
        );

        AnalysisResult {
            detected_symptoms: detected,
            primary_condition,
            alternative_conditions,
            urgency_level: max_urgency,
            confidence,
            recommendations,
            suggested_specialty,
            triage_score,
            requires_immediate_attention: max_urgency == Urgency::High,
            follow_up_recommended: true,
            disclaimer_shown: true,
        }
    }

    /// Suggest a prescription for a diagnosis. See
    /// [`prescription::infer_prescription`].
    pub fn infer_prescription(&self, diagnosis: &str, patient: &PatientInfo) -> PrescriptionSuggestion {
        prescription::infer_prescription(diagnosis, patient, self.random.as_ref())
    }

    /// Produce a canned image reading. See [`imaging::analyze_image`].
    pub fn analyze_image(&self, image_type: &str, confidence_threshold: u8) -> ImageAnalysis {
        imaging::analyze_image(image_type, confidence_threshold, self.random.as_ref())
    }

    /// Preventive insights for a patient profile.
    pub fn health_insights(&self, patient: &PatientInfo) -> HealthInsights {
        insights::health_insights(patient)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use carepath_contracts::urgency::Priority;

    use super::*;

    fn engine() -> DecisionEngine {
        DecisionEngine::seeded(2024)
    }

    #[test]
    fn chest_pain_and_dizziness_scenario() {
        let result = engine().analyze_symptoms("I have chest pain and dizziness", &PatientInfo::default());

        assert_eq!(result.detected_symptoms, vec!["chest pain", "dizziness"]);
        assert_eq!(result.urgency_level, Urgency::High);
        assert_eq!(result.primary_condition.name, "HYPERTENSION");
        assert!(result.primary_condition.probability > 75);
        assert!(result.alternative_conditions.is_empty());
        assert_eq!(result.confidence, 80);
        assert_eq!(result.suggested_specialty, "cardiology");
        assert!(result.requires_immediate_attention);
        // 80 base + 10 for two symptoms.
        assert_eq!(result.triage_score.score, 90);
        assert_eq!(result.triage_score.priority, Priority::High);
        assert!(result
            .recommendations
            .contains(&"Avoid physical exertion".to_string()));
    }

    #[test]
    fn unrecognised_text_falls_back_to_general_concern() {
        let result = engine().analyze_symptoms("my left elbow feels odd", &PatientInfo::default());

        assert!(result.detected_symptoms.is_empty());
        assert_eq!(result.urgency_level, Urgency::Low);
        assert_eq!(result.primary_condition.name, "General Health Concern");
        assert_eq!(result.primary_condition.probability, 50);
        assert_eq!(result.primary_condition.urgency, Urgency::Low);
        assert!(result.alternative_conditions.is_empty());
        assert_eq!(result.confidence, 60);
        assert_eq!(result.suggested_specialty, "general");
        assert_eq!(result.triage_score.score, 20);
        assert!(!result.requires_immediate_attention);
        assert!(result.disclaimer_shown);
    }

    #[test]
    fn alternatives_exclude_primary_and_are_capped() {
        let text = "fever, headache, dizziness, fatigue, nausea and a skin rash";
        let result = engine().analyze_symptoms(text, &PatientInfo::default());

        assert!(result.alternative_conditions.len() <= MAX_ALTERNATIVES);
        assert!(!result
            .alternative_conditions
            .contains(&result.primary_condition));
        let mut probabilities = vec![result.primary_condition.probability];
        probabilities.extend(result.alternative_conditions.iter().map(|c| c.probability));
        for pair in probabilities.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn analysis_triage_uses_patient_profile() {
        let patient = PatientInfo {
            age: Some(70),
            chronic_conditions: vec!["hypertension".to_string()],
            ..PatientInfo::default()
        };
        let result = engine().analyze_symptoms("mild headache", &patient);
        // 20 base + 5 symptom + 15 elderly + 10 chronic.
        assert_eq!(result.triage_score.score, 50);
        assert_eq!(result.triage_score.notes, "Elderly patient - increased priority");
    }

    #[test]
    fn deterministic_fields_are_idempotent() {
        let e = engine();
        let patient = PatientInfo { age: Some(8), ..PatientInfo::default() };
        let a = e.analyze_symptoms("fever and abdominal pain", &patient);
        let b = e.analyze_symptoms("fever and abdominal pain", &patient);
        assert_eq!(a, b);
    }

    #[test]
    fn same_seed_same_prescription_and_image() {
        let a = DecisionEngine::seeded(5);
        let b = DecisionEngine::seeded(5);
        let patient = PatientInfo::default();
        assert_eq!(
            a.infer_prescription("bacterial infection", &patient),
            b.infer_prescription("bacterial infection", &patient)
        );
        assert_eq!(a.analyze_image("ct", 80), b.analyze_image("ct", 80));
    }

    #[test]
    fn engine_facade_matches_free_functions() {
        let e = engine();
        let patient = PatientInfo { age: Some(70), ..PatientInfo::default() };
        assert_eq!(
            e.triage(Some(Urgency::High), 4, &patient),
            triage::triage(Some(Urgency::High), 4, &patient)
        );
        assert_eq!(e.match_symptoms("nausea"), symptoms::match_symptoms("nausea"));
        let detected = vec!["nausea".to_string()];
        assert_eq!(e.score_conditions(&detected), conditions::score_conditions(&detected));
        assert!(e.health_insights(&patient).preventive_recommendations.len() == 4);
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecisionEngine>();
    }
}
