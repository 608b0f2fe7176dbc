//! Symptom detection in free text.
//!
//! Detection is plain substring containment on the lower-cased text, not a
//! tokenised word match: "headache" is also found inside "subheadaches".

use tracing::debug;

use carepath_contracts::{analysis::SymptomMatch, urgency::Urgency};

use crate::knowledge::{SPECIALTY_BY_SYMPTOM, SYMPTOMS};

/// Detect known symptoms in `text` and report the highest urgency among them.
///
/// Never fails: empty or unrecognisable text yields no symptoms and `Low`.
pub fn match_symptoms(text: &str) -> SymptomMatch {
    let normalized = text.to_lowercase();
    let mut detected = Vec::new();
    let mut max_urgency = Urgency::Low;

    for entry in SYMPTOMS {
        if normalized.contains(entry.key) {
            detected.push(entry.key.to_string());
            max_urgency = max_urgency.max(entry.urgency);
        }
    }

    debug!(
        detected = detected.len(),
        max_urgency = %max_urgency,
        "symptom scan complete"
    );

    SymptomMatch {
        detected,
        max_urgency,
    }
}

/// Patient-facing advice for the overall urgency, followed by
/// symptom-specific lines for fever and chest pain.
pub fn recommendations(urgency: Urgency, detected: &[String]) -> Vec<String> {
    let mut out: Vec<&str> = match urgency {
        Urgency::High => vec![
            "Seek immediate medical attention",
            "Consider emergency room visit if symptoms worsen",
        ],
        Urgency::Medium => vec![
            "Schedule appointment with healthcare provider within 24-48 hours",
            "Monitor symptoms closely",
        ],
        Urgency::Low => vec![
            "Schedule routine appointment with primary care physician",
            "Rest and maintain good hydration",
        ],
    };

    let has = |key: &str| detected.iter().any(|d| d == key);

    if has("fever") {
        out.push("Take temperature regularly and record");
        out.push("Use fever-reducing medications as needed");
    }
    if has("chest pain") {
        out.push("Avoid physical exertion");
        out.push("Seek immediate help if pain worsens");
    }

    out.into_iter().map(String::from).collect()
}

/// The referral specialty of the first detected symptom that has one.
pub fn suggested_specialty(detected: &[String]) -> &'static str {
    detected
        .iter()
        .find_map(|d| {
            SPECIALTY_BY_SYMPTOM
                .iter()
                .find(|(symptom, _)| symptom == d)
                .map(|(_, specialty)| *specialty)
        })
        .unwrap_or("general")
}
