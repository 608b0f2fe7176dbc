//! # carepath-core
//!
//! The rule-based decision engine behind CAREPATH.
//!
//! This crate provides:
//! - The static knowledge tables (`knowledge`)
//! - Symptom matching, condition scoring, triage scoring, and prescription
//!   inference, plus canned image readings and health insights
//! - The seam traits (`RandomSource`, `HistorySink`, `ResultVerifier`)
//! - The `DecisionEngine` facade that ties the operations together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carepath_core::DecisionEngine;
//! use carepath_contracts::patient::PatientInfo;
//!
//! let engine = DecisionEngine::seeded(42);
//! let result = engine.analyze_symptoms("chest pain and dizziness", &PatientInfo::default());
//! ```

pub mod conditions;
pub mod engine;
pub mod imaging;
pub mod insights;
pub mod knowledge;
pub mod prescription;
pub mod random;
pub mod symptoms;
pub mod traits;
pub mod triage;

pub use engine::DecisionEngine;
pub use random::SeededRandom;

// ── Cross-module properties ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use carepath_contracts::{patient::PatientInfo, urgency::Urgency};

    use crate::{knowledge::SYMPTOMS, DecisionEngine};

    /// Every subset of the symptom table, rendered as one sentence.
    fn all_symptom_texts() -> Vec<String> {
        (0u32..(1 << SYMPTOMS.len()))
            .map(|mask| {
                SYMPTOMS
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, s)| s.key)
                    .collect::<Vec<_>>()
                    .join(" and ")
            })
            .collect()
    }

    #[test]
    fn analysis_invariants_hold_for_every_symptom_subset() {
        let engine = DecisionEngine::seeded(1);
        let patient = PatientInfo {
            age: Some(80),
            chronic_conditions: vec!["copd".to_string()],
            ..PatientInfo::default()
        };

        for text in all_symptom_texts() {
            let r = engine.analyze_symptoms(&text, &patient);

            assert!(r.confidence <= 95, "{text}");
            assert!(r.primary_condition.probability <= 95, "{text}");
            assert!(r.triage_score.score <= 100, "{text}");
            assert!(r.alternative_conditions.len() <= 2, "{text}");
            assert!(!r.alternative_conditions.contains(&r.primary_condition), "{text}");
            for alt in &r.alternative_conditions {
                assert!(alt.probability <= r.primary_condition.probability, "{text}");
            }
            assert_eq!(r.requires_immediate_attention, r.urgency_level == Urgency::High);
            assert!(r.disclaimer_shown);
        }
    }

    #[test]
    fn detected_set_round_trips_through_text() {
        let engine = DecisionEngine::seeded(1);
        for entry in SYMPTOMS {
            let m = engine.match_symptoms(&entry.key.to_uppercase());
            assert!(m.detected.iter().any(|d| d == entry.key), "{}", entry.key);
            assert!(m.max_urgency >= entry.urgency);
        }
    }

    #[test]
    fn prescription_invariants_hold_for_any_seed() {
        for seed in 0..50 {
            let engine = DecisionEngine::seeded(seed);
            let s = engine.infer_prescription("infection", &PatientInfo::default());
            assert!((75..95).contains(&s.confidence));
            assert!(s.requires_doctor_review);
            assert_eq!(s.primary_medications.len(), 2);
        }
    }
}
