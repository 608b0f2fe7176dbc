//! Prescription inference from a free-text diagnosis.
//!
//! The category is picked by the first keyword rule that matches; the rules
//! are exclusive buckets, not a scored match. The medication list, regimen
//! tables, and precautions all hang off that category.

use tracing::debug;

use carepath_contracts::{
    patient::PatientInfo,
    prescription::{FollowUpPlan, MedicationCategory, PrescriptionLine, PrescriptionSuggestion},
};

use crate::{knowledge::medications_for, traits::RandomSource};

/// Keyword rules in priority order. First match wins.
const CATEGORY_RULES: &[(&[&str], MedicationCategory)] = &[
    (&["pain", "ache"], MedicationCategory::Pain),
    (&["fever", "temperature"], MedicationCategory::Fever),
    (&["allerg", "rash"], MedicationCategory::Allergy),
    (&["hypertension", "blood pressure"], MedicationCategory::Hypertension),
    (&["infection", "bacterial"], MedicationCategory::Infection),
];

const INSTRUCTIONS: &[&str] = &[
    "Take with food to reduce stomach irritation",
    "Take with a full glass of water",
    "Do not exceed recommended dosage",
    "Complete the full course even if feeling better",
    "Take at the same time each day",
];

const LIFESTYLE: &[&str] = &[
    "Maintain adequate hydration",
    "Get sufficient rest and sleep",
    "Eat a balanced diet rich in nutrients",
    "Engage in regular appropriate physical activity",
    "Avoid smoking and excessive alcohol consumption",
];

const ELDERLY_PRECAUTION: &str = "Elderly patients may require dosage adjustment";
const PENICILLIN_PRECAUTION: &str =
    "Patient has penicillin allergy - alternative antibiotic recommended";
const SIDE_EFFECT_PRECAUTION: &str = "Monitor for side effects and report to healthcare provider";
const ALCOHOL_PRECAUTION: &str = "Do not consume alcohol while taking this medication";
const INTERACTION_ADVISORY: &str = "Check for interactions with current medications";

/// Confidence is drawn uniformly from `[CONFIDENCE_LOW, CONFIDENCE_HIGH)`.
pub const CONFIDENCE_LOW: u32 = 75;
pub const CONFIDENCE_HIGH: u32 = 95;

/// Number of lines reported as primary; the rest are alternatives.
const PRIMARY_COUNT: usize = 2;

/// Pick the medication category for a diagnosis.
pub fn categorize(diagnosis: &str) -> MedicationCategory {
    let normalized = diagnosis.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(MedicationCategory::General)
}

/// Build a prescription suggestion for `diagnosis`.
///
/// Instruction text and confidence are drawn from `random`; everything else
/// is a pure function of the inputs. Never fails.
pub fn infer_prescription(
    diagnosis: &str,
    patient: &PatientInfo,
    random: &dyn RandomSource,
) -> PrescriptionSuggestion {
    let category = categorize(diagnosis);

    let mut lines: Vec<PrescriptionLine> = medications_for(category)
        .iter()
        .map(|medication| PrescriptionLine {
            medication: medication.to_string(),
            dosage: dosage(medication, patient).to_string(),
            frequency: frequency(category).to_string(),
            duration: duration(category).to_string(),
            instructions: INSTRUCTIONS[random.index(INSTRUCTIONS.len())].to_string(),
        })
        .collect();

    let alternative_medications = lines.split_off(PRIMARY_COUNT.min(lines.len()));
    let primary_medications = lines;

    let precautions = precautions(category, patient);
    let interactions = if patient.current_medications.is_empty() {
        Vec::new()
    } else {
        vec![INTERACTION_ADVISORY.to_string()]
    };

    let confidence = random.in_range(CONFIDENCE_LOW, CONFIDENCE_HIGH) as u8;
    let warnings_present = !interactions.is_empty() || precautions.len() > 2;

    debug!(
        category = %category,
        confidence,
        warnings_present,
        "prescription inferred"
    );

    PrescriptionSuggestion {
        category,
        primary_medications,
        alternative_medications,
        precautions,
        interactions,
        lifestyle: LIFESTYLE.iter().take(3).map(|s| s.to_string()).collect(),
        follow_up: follow_up(diagnosis),
        confidence,
        warnings_present,
        requires_doctor_review: true,
        pharmacy_notes: "Verify patient allergies before dispensing".to_string(),
        disclaimer_shown: true,
    }
}

/// Paediatric patients get half strength for the three medications with a
/// known child dose. Anything else is one tablet.
fn dosage(medication: &str, patient: &PatientInfo) -> &'static str {
    let child = patient.is_child();
    match medication {
        "Acetaminophen 500mg" => if child { "250mg" } else { "500mg" },
        "Ibuprofen 200mg" => if child { "100mg" } else { "200mg" },
        "Amoxicillin 500mg" => if child { "250mg" } else { "500mg" },
        _ => "1 tablet",
    }
}

fn frequency(category: MedicationCategory) -> &'static str {
    match category {
        MedicationCategory::Pain => "Every 6-8 hours as needed",
        MedicationCategory::Fever => "Every 4-6 hours as needed",
        MedicationCategory::Allergy | MedicationCategory::Hypertension => "Once daily",
        MedicationCategory::Infection => "Twice daily",
        MedicationCategory::General => "As directed",
    }
}

fn duration(category: MedicationCategory) -> &'static str {
    match category {
        MedicationCategory::Pain | MedicationCategory::Fever => "3-5 days",
        MedicationCategory::Allergy => "7-14 days",
        MedicationCategory::Hypertension => "Ongoing",
        MedicationCategory::Infection => "7-10 days",
        MedicationCategory::General => "5-7 days",
    }
}

fn precautions(category: MedicationCategory, patient: &PatientInfo) -> Vec<String> {
    let mut out = Vec::new();

    if patient.is_elderly() {
        out.push(ELDERLY_PRECAUTION);
    }
    if category == MedicationCategory::Infection && patient.is_allergic_to("penicillin") {
        out.push(PENICILLIN_PRECAUTION);
    }
    out.push(SIDE_EFFECT_PRECAUTION);
    out.push(ALCOHOL_PRECAUTION);

    out.into_iter().map(String::from).collect()
}

fn follow_up(diagnosis: &str) -> FollowUpPlan {
    let specialist = if diagnosis.to_lowercase().contains("chronic") {
        "specialist consultation"
    } else {
        "primary care follow-up"
    };
    FollowUpPlan {
        timeframe: "1-2 weeks".to_string(),
        conditions: "if symptoms persist or worsen".to_string(),
        specialist: specialist.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    /// Always returns the same offset, clamped to the bound.
    struct FixedRandom(u32);

    impl RandomSource for FixedRandom {
        fn below(&self, bound: u32) -> u32 {
            self.0.min(bound.saturating_sub(1))
        }
    }

    fn meds(s: &PrescriptionSuggestion) -> Vec<&str> {
        s.all_lines().map(|l| l.medication.as_str()).collect()
    }

    #[test]
    fn fever_diagnosis_selects_fever_category() {
        let s = infer_prescription("patient has a fever", &PatientInfo::default(), &FixedRandom(0));
        assert_eq!(s.category, MedicationCategory::Fever);
        assert_eq!(meds(&s), vec!["Acetaminophen 500mg", "Aspirin 325mg", "Ibuprofen 400mg"]);
        for line in s.all_lines() {
            assert_eq!(line.frequency, "Every 4-6 hours as needed");
            assert_eq!(line.duration, "3-5 days");
        }
        assert_eq!(s.primary_medications.len(), 2);
        assert_eq!(s.alternative_medications.len(), 1);
    }

    #[test]
    fn first_matching_rule_wins() {
        // "pain" outranks "fever" even though both appear.
        assert_eq!(categorize("Fever with body ache"), MedicationCategory::Pain);
        assert_eq!(categorize("High TEMPERATURE"), MedicationCategory::Fever);
        assert_eq!(categorize("allergic rhinitis"), MedicationCategory::Allergy);
        assert_eq!(categorize("elevated blood pressure"), MedicationCategory::Hypertension);
        assert_eq!(categorize("bacterial sinusitis"), MedicationCategory::Infection);
        assert_eq!(categorize("insomnia"), MedicationCategory::General);
        assert_eq!(categorize(""), MedicationCategory::General);
    }

    #[test]
    fn general_uses_pain_list_with_generic_regimen() {
        let s = infer_prescription("unclear", &PatientInfo::default(), &FixedRandom(0));
        assert_eq!(s.category, MedicationCategory::General);
        assert_eq!(meds(&s), vec!["Acetaminophen 500mg", "Ibuprofen 200mg", "Naproxen 220mg"]);
        assert_eq!(s.primary_medications[0].frequency, "As directed");
        assert_eq!(s.primary_medications[0].duration, "5-7 days");
    }

    #[test]
    fn child_dosages_are_halved() {
        let child = PatientInfo { age: Some(8), ..PatientInfo::default() };
        let s = infer_prescription("back pain", &child, &FixedRandom(0));
        let dosages: Vec<&str> = s.all_lines().map(|l| l.dosage.as_str()).collect();
        assert_eq!(dosages, vec!["250mg", "100mg", "1 tablet"]);

        let adult = PatientInfo { age: Some(40), ..PatientInfo::default() };
        let s = infer_prescription("back pain", &adult, &FixedRandom(0));
        let dosages: Vec<&str> = s.all_lines().map(|l| l.dosage.as_str()).collect();
        assert_eq!(dosages, vec!["500mg", "200mg", "1 tablet"]);
    }

    #[test]
    fn penicillin_precaution_only_for_infection() {
        let patient = PatientInfo {
            age: Some(70),
            allergies: vec!["penicillin".to_string()],
            ..PatientInfo::default()
        };

        let s = infer_prescription("bacterial infection", &patient, &FixedRandom(0));
        assert_eq!(
            s.precautions,
            vec![
                ELDERLY_PRECAUTION,
                PENICILLIN_PRECAUTION,
                SIDE_EFFECT_PRECAUTION,
                ALCOHOL_PRECAUTION,
            ]
        );
        assert!(s.warnings_present);

        let s = infer_prescription("headache pain", &patient, &FixedRandom(0));
        assert!(!s.precautions.iter().any(|p| p == PENICILLIN_PRECAUTION));
    }

    #[test]
    fn boilerplate_precautions_always_present() {
        let s = infer_prescription("", &PatientInfo::default(), &FixedRandom(0));
        assert_eq!(s.precautions, vec![SIDE_EFFECT_PRECAUTION, ALCOHOL_PRECAUTION]);
        assert!(s.interactions.is_empty());
        assert!(!s.warnings_present);
    }

    #[test]
    fn current_medications_add_interaction_advisory() {
        let patient = PatientInfo {
            current_medications: vec!["Warfarin".to_string()],
            ..PatientInfo::default()
        };
        let s = infer_prescription("hypertension", &patient, &FixedRandom(0));
        assert_eq!(s.interactions, vec![INTERACTION_ADVISORY]);
        assert!(s.warnings_present);
        assert_eq!(s.primary_medications[0].duration, "Ongoing");
    }

    #[test]
    fn confidence_and_instructions_come_from_random_source() {
        let s = infer_prescription("fever", &PatientInfo::default(), &FixedRandom(3));
        assert_eq!(s.confidence, 78);
        assert!(s
            .all_lines()
            .all(|l| l.instructions == "Complete the full course even if feeling better"));

        let s = infer_prescription("fever", &PatientInfo::default(), &FixedRandom(u32::MAX));
        assert_eq!(s.confidence, 94);
        assert!(s.all_lines().all(|l| l.instructions == "Take at the same time each day"));
    }

    #[test]
    fn seeded_sources_reproduce_suggestions() {
        let patient = PatientInfo::default();
        let a = infer_prescription("infection", &patient, &SeededRandom::from_seed(11));
        let b = infer_prescription("infection", &patient, &SeededRandom::from_seed(11));
        assert_eq!(a, b);
        assert!((75..95).contains(&a.confidence));
    }

    #[test]
    fn review_and_disclaimer_always_set() {
        for diagnosis in ["", "pain", "fever", "rash", "blood pressure", "infection", "???"] {
            let s = infer_prescription(diagnosis, &PatientInfo::default(), &FixedRandom(1));
            assert!(s.requires_doctor_review);
            assert!(s.disclaimer_shown);
            assert_eq!(s.lifestyle.len(), 3);
        }
    }

    #[test]
    fn chronic_diagnosis_routes_to_specialist() {
        let s = infer_prescription("Chronic back pain", &PatientInfo::default(), &FixedRandom(0));
        assert_eq!(s.follow_up.specialist, "specialist consultation");
        let s = infer_prescription("back pain", &PatientInfo::default(), &FixedRandom(0));
        assert_eq!(s.follow_up.specialist, "primary care follow-up");
    }
}
