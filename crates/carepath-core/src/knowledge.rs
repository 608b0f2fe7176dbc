//! Static medical knowledge tables.
//!
//! These tables are the engine's only knowledge source. They are `const`
//! data, built into the binary and never mutated. Declaration order matters:
//! symptoms are reported and conditions are tie-broken in the order below.

use carepath_contracts::{prescription::MedicationCategory, urgency::Urgency};

/// A recognisable symptom and the specialties that usually handle it.
#[derive(Debug, Clone, Copy)]
pub struct SymptomEntry {
    /// Lower-case phrase searched for in free text.
    pub key: &'static str,
    pub urgency: Urgency,
    pub specialties: &'static [&'static str],
}

/// A condition the scorer can propose.
#[derive(Debug, Clone, Copy)]
pub struct ConditionEntry {
    /// Snake-case table key, e.g. `"common_cold"`.
    pub key: &'static str,
    /// Prior probability in [0, 1].
    pub base_probability: f64,
    pub symptoms: &'static [&'static str],
    pub urgency: Urgency,
    pub treatment: &'static str,
    pub specialty: &'static str,
}

impl ConditionEntry {
    /// `"common_cold"` becomes `"COMMON COLD"`. Only the first underscore is
    /// replaced, which covers every key in the table.
    pub fn display_name(&self) -> String {
        self.key.replacen('_', " ", 1).to_uppercase()
    }
}

pub const SYMPTOMS: &[SymptomEntry] = &[
    SymptomEntry {
        key: "fever",
        urgency: Urgency::Medium,
        specialties: &["general", "infectious-disease"],
    },
    SymptomEntry {
        key: "chest pain",
        urgency: Urgency::High,
        specialties: &["cardiology", "emergency"],
    },
    SymptomEntry {
        key: "headache",
        urgency: Urgency::Low,
        specialties: &["neurology", "general"],
    },
    SymptomEntry {
        key: "shortness of breath",
        urgency: Urgency::High,
        specialties: &["cardiology", "pulmonology"],
    },
    SymptomEntry {
        key: "nausea",
        urgency: Urgency::Low,
        specialties: &["gastroenterology", "general"],
    },
    SymptomEntry {
        key: "dizziness",
        urgency: Urgency::Medium,
        specialties: &["neurology", "cardiology"],
    },
    SymptomEntry {
        key: "fatigue",
        urgency: Urgency::Low,
        specialties: &["general", "endocrinology"],
    },
    SymptomEntry {
        key: "joint pain",
        urgency: Urgency::Low,
        specialties: &["orthopedics", "rheumatology"],
    },
    SymptomEntry {
        key: "skin rash",
        urgency: Urgency::Low,
        specialties: &["dermatology"],
    },
    SymptomEntry {
        key: "abdominal pain",
        urgency: Urgency::Medium,
        specialties: &["gastroenterology", "general"],
    },
];

pub const CONDITIONS: &[ConditionEntry] = &[
    ConditionEntry {
        key: "common_cold",
        base_probability: 0.85,
        symptoms: &["runny nose", "sore throat", "mild fever", "fatigue"],
        urgency: Urgency::Low,
        treatment: "Rest, fluids, over-the-counter medications",
        specialty: "general",
    },
    ConditionEntry {
        key: "hypertension",
        base_probability: 0.75,
        symptoms: &["headache", "dizziness", "chest pain"],
        urgency: Urgency::Medium,
        treatment: "Lifestyle changes, antihypertensive medications",
        specialty: "cardiology",
    },
    ConditionEntry {
        key: "migraine",
        base_probability: 0.70,
        symptoms: &["severe headache", "nausea", "light sensitivity"],
        urgency: Urgency::Medium,
        treatment: "Pain relief medications, rest in dark room",
        specialty: "neurology",
    },
    ConditionEntry {
        key: "allergic_reaction",
        base_probability: 0.65,
        symptoms: &["skin rash", "itching", "swelling"],
        urgency: Urgency::Medium,
        treatment: "Antihistamines, avoid triggers",
        specialty: "allergology",
    },
];

/// Symptom → specialty used for the analysis' suggested referral.
///
/// Narrower than `SymptomEntry::specialties`: only symptoms with one obvious
/// referral appear here.
pub const SPECIALTY_BY_SYMPTOM: &[(&str, &str)] = &[
    ("chest pain", "cardiology"),
    ("headache", "neurology"),
    ("joint pain", "orthopedics"),
    ("skin rash", "dermatology"),
    ("abdominal pain", "gastroenterology"),
];

const PAIN_MEDICATIONS: &[&str] = &["Acetaminophen 500mg", "Ibuprofen 200mg", "Naproxen 220mg"];
const FEVER_MEDICATIONS: &[&str] = &["Acetaminophen 500mg", "Aspirin 325mg", "Ibuprofen 400mg"];
const ALLERGY_MEDICATIONS: &[&str] = &["Loratadine 10mg", "Cetirizine 10mg", "Diphenhydramine 25mg"];
const HYPERTENSION_MEDICATIONS: &[&str] = &["Lisinopril 10mg", "Amlodipine 5mg", "Metoprolol 50mg"];
const INFECTION_MEDICATIONS: &[&str] = &["Amoxicillin 500mg", "Azithromycin 250mg", "Cephalexin 500mg"];

/// Ordered medication labels for a category. `General` borrows the pain list.
pub fn medications_for(category: MedicationCategory) -> &'static [&'static str] {
    match category {
        MedicationCategory::Pain | MedicationCategory::General => PAIN_MEDICATIONS,
        MedicationCategory::Fever => FEVER_MEDICATIONS,
        MedicationCategory::Allergy => ALLERGY_MEDICATIONS,
        MedicationCategory::Hypertension => HYPERTENSION_MEDICATIONS,
        MedicationCategory::Infection => INFECTION_MEDICATIONS,
    }
}

/// Look up a symptom entry by its exact key.
pub fn symptom(key: &str) -> Option<&'static SymptomEntry> {
    SYMPTOMS.iter().find(|s| s.key == key)
}
