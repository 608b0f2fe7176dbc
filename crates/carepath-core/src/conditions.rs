//! Condition scoring against detected symptoms.
//!
//! Scoring algorithm:
//!
//! 1. For each condition, count its listed symptoms that overlap a detected
//!    symptom by substring in either direction ("mild fever" ↔ "fever").
//! 2. Drop conditions with no overlap.
//! 3. `probability = round(min(95, base * 100 + overlaps * 10))`.
//! 4. Stable-sort descending, so ties keep table order.

use tracing::debug;

use carepath_contracts::{analysis::ConditionMatch, urgency::Urgency};

use crate::knowledge::{ConditionEntry, CONDITIONS};

/// Highest probability a table match can reach.
pub const MAX_CONDITION_PROBABILITY: f64 = 95.0;

/// Score every table condition against `detected` and return the matches,
/// most probable first.
pub fn score_conditions(detected: &[String]) -> Vec<ConditionMatch> {
    let detected: Vec<String> = detected
        .iter()
        .map(|d| d.trim().to_lowercase())
        .filter(|d| !d.is_empty())
        .collect();

    let mut matches: Vec<ConditionMatch> = CONDITIONS
        .iter()
        .filter_map(|condition| {
            let score = match_score(condition, &detected);
            (score > 0).then(|| to_match(condition, score))
        })
        .collect();

    // `sort_by` is stable: equal probabilities keep declaration order.
    matches.sort_by(|a, b| b.probability.cmp(&a.probability));

    debug!(candidates = matches.len(), "condition scoring complete");
    matches
}

/// The placeholder used when no condition matches.
pub fn general_health_concern(urgency: Urgency) -> ConditionMatch {
    ConditionMatch {
        name: "General Health Concern".to_string(),
        probability: 50,
        treatment: "Consult with healthcare provider".to_string(),
        specialty: "general".to_string(),
        urgency,
    }
}

fn match_score(condition: &ConditionEntry, detected: &[String]) -> u32 {
    condition
        .symptoms
        .iter()
        .filter(|cond_symptom| {
            let cond_symptom = cond_symptom.to_lowercase();
            detected
                .iter()
                .any(|d| d.contains(cond_symptom.as_str()) || cond_symptom.contains(d.as_str()))
        })
        .count() as u32
}

fn to_match(condition: &ConditionEntry, score: u32) -> ConditionMatch {
    let raw = condition.base_probability * 100.0 + f64::from(score) * 10.0;
    let probability = raw.min(MAX_CONDITION_PROBABILITY).max(0.0).round() as u8;

    ConditionMatch {
        name: condition.display_name(),
        probability,
        treatment: condition.treatment.to_string(),
        specialty: condition.specialty.to_string(),
        urgency: condition.urgency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn names(matches: &[ConditionMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn chest_pain_and_dizziness_favour_hypertension() {
        let matches = score_conditions(&strings(&["chest pain", "dizziness"]));
        assert_eq!(names(&matches), vec!["HYPERTENSION"]);
        assert_eq!(matches[0].probability, 95);
        assert_eq!(matches[0].specialty, "cardiology");
        assert_eq!(matches[0].urgency, Urgency::Medium);
    }

    #[test]
    fn single_overlap_adds_ten_points() {
        let matches = score_conditions(&strings(&["dizziness"]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].probability, 85);
    }

    #[test]
    fn overlap_works_in_both_directions() {
        // "fever" is inside "mild fever"; "headache" is inside "severe headache".
        let matches = score_conditions(&strings(&["fever", "headache"]));
        assert_eq!(names(&matches), vec!["COMMON COLD", "HYPERTENSION", "MIGRAINE"]);
        assert_eq!(
            matches.iter().map(|m| m.probability).collect::<Vec<_>>(),
            vec![95, 85, 80]
        );
    }

    #[test]
    fn ties_keep_table_order() {
        // hypertension: 75 + 20 = 95, common cold: 85 + 10 = 95.
        let matches = score_conditions(&strings(&["headache", "dizziness", "fatigue"]));
        assert_eq!(&names(&matches)[..2], &["COMMON COLD", "HYPERTENSION"]);
        assert_eq!(matches[0].probability, matches[1].probability);
    }

    #[test]
    fn probabilities_are_capped_and_sorted() {
        let all: Vec<String> = crate::knowledge::SYMPTOMS
            .iter()
            .map(|s| s.key.to_string())
            .collect();
        let matches = score_conditions(&all);
        assert!(!matches.is_empty());
        for pair in matches.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        assert!(matches.iter().all(|m| m.probability <= 95));
    }

    #[test]
    fn no_detected_symptoms_no_matches() {
        assert!(score_conditions(&[]).is_empty());
        assert!(score_conditions(&strings(&["", "  "])).is_empty());
    }

    #[test]
    fn general_concern_inherits_urgency() {
        let m = general_health_concern(Urgency::High);
        assert_eq!(m.probability, 50);
        assert_eq!(m.urgency, Urgency::High);
        assert_eq!(m.name, "General Health Concern");
    }
}
