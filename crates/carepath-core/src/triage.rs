//! Additive triage scoring.
//!
//! Score = urgency base + symptom bonus + age bonus + chronic bonus, clamped
//! to [0, 100]. The bands and their wait times live on `Priority`.

use tracing::debug;

use carepath_contracts::{
    analysis::TriageResult,
    patient::PatientInfo,
    urgency::{Priority, Urgency},
};

/// Base score for an urgency that could not be classified.
pub const UNKNOWN_URGENCY_BASE: u32 = 30;

const SYMPTOM_POINTS: usize = 5;
const SYMPTOM_CAP: usize = 20;
const ELDERLY_BONUS: u32 = 15;
const CHILD_BONUS: u32 = 10;
const CHRONIC_BONUS: u32 = 10;

/// Score a patient for queue placement.
///
/// `urgency` is `None` when the caller's urgency tag was not recognised; it
/// scores as [`UNKNOWN_URGENCY_BASE`]. Missing patient attributes add nothing.
pub fn triage(urgency: Option<Urgency>, symptom_count: usize, patient: &PatientInfo) -> TriageResult {
    let base = match urgency {
        Some(Urgency::High) => 80,
        Some(Urgency::Medium) => 50,
        Some(Urgency::Low) => 20,
        None => UNKNOWN_URGENCY_BASE,
    };

    let symptom_bonus = symptom_count.saturating_mul(SYMPTOM_POINTS).min(SYMPTOM_CAP) as u32;

    // Elderly and child are disjoint age ranges; elderly is checked first.
    let age_bonus = if patient.is_elderly() {
        ELDERLY_BONUS
    } else if patient.is_child() {
        CHILD_BONUS
    } else {
        0
    };

    let chronic_bonus = if patient.chronic_conditions.is_empty() {
        0
    } else {
        CHRONIC_BONUS
    };

    let score = (base + symptom_bonus + age_bonus + chronic_bonus).min(100) as u8;
    let priority = Priority::from_score(score);

    debug!(
        score,
        priority = %priority,
        symptom_count,
        "triage scored"
    );

    TriageResult {
        score,
        priority,
        estimated_wait_time: priority.estimated_wait_time().to_string(),
        recommended_action: priority.recommended_action().to_string(),
        notes: triage_notes(urgency, symptom_count, patient),
    }
}

fn triage_notes(urgency: Option<Urgency>, symptom_count: usize, patient: &PatientInfo) -> String {
    let mut notes = Vec::new();

    if urgency == Some(Urgency::High) {
        notes.push("High priority case requiring immediate attention");
    }
    if symptom_count > 3 {
        notes.push("Multiple symptoms reported - comprehensive assessment needed");
    }
    if patient.is_elderly() {
        notes.push("Elderly patient - increased priority");
    }

    notes.join("; ")
}
