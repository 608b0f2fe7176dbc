//! Simulated front-desk patients and complaints.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! registration system a real desk would read patients from.

use carepath_contracts::patient::PatientInfo;

// ── Patients (mock) ───────────────────────────────────────────────────────────

/// 72-year-old with hypertension on an ACE inhibitor. Elderly and chronic
/// bonuses both apply in triage.
pub fn elderly_cardiac_patient() -> PatientInfo {
    PatientInfo {
        patient_id: Some("P-1001".to_string()),
        age: Some(72),
        chronic_conditions: vec!["hypertension".to_string()],
        allergies: Vec::new(),
        current_medications: vec!["Lisinopril 10mg".to_string()],
        bmi: Some(31.4),
    }
}

/// 8-year-old with a penicillin allergy. Gets paediatric doses.
pub fn child_patient() -> PatientInfo {
    PatientInfo {
        patient_id: Some("P-1002".to_string()),
        age: Some(8),
        chronic_conditions: Vec::new(),
        allergies: vec!["Penicillin".to_string()],
        current_medications: Vec::new(),
        bmi: None,
    }
}

/// 34-year-old, otherwise healthy but underweight.
pub fn adult_patient() -> PatientInfo {
    PatientInfo {
        patient_id: Some("P-1003".to_string()),
        age: Some(34),
        chronic_conditions: Vec::new(),
        allergies: vec!["latex".to_string()],
        current_medications: Vec::new(),
        bmi: Some(17.9),
    }
}

/// Every mock patient, in registration order.
pub fn sample_patients() -> Vec<PatientInfo> {
    vec![elderly_cardiac_patient(), child_patient(), adult_patient()]
}

/// Look up a mock patient by identifier.
pub fn find_patient(patient_id: &str) -> Option<PatientInfo> {
    sample_patients()
        .into_iter()
        .find(|p| p.patient_id.as_deref() == Some(patient_id))
}

// ── Complaints (mock) ─────────────────────────────────────────────────────────

/// Free-text complaints paired with the patient who reported them.
pub fn sample_complaints() -> Vec<(PatientInfo, &'static str)> {
    vec![
        (
            elderly_cardiac_patient(),
            "I have chest pain and dizziness since this morning",
        ),
        (
            child_patient(),
            "He has a fever, a sore throat and some fatigue",
        ),
        (adult_patient(), "Mild headache after work, nothing else"),
    ]
}
