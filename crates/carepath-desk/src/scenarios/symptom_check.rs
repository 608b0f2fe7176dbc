//! Scenario 1: Symptom Check
//!
//! Three patients describe their complaints at the desk. Each complaint is
//! analysed, verified, and logged; with auto-triage on, a triage record is
//! filed next to each analysis.
//!
//! Walk-through:
//!   1. Elderly cardiac patient: chest pain + dizziness → high urgency,
//!      triage score capped at 100
//!   2. Child: fever, sore throat, fatigue → common cold leads the conditions
//!   3. Adult: mild headache → low urgency, routine consultation
//!   4. The triage queue is read back from history, most recent first
//!   5. History chain integrity verified at the end

use carepath_contracts::{analysis::AnalysisResult, error::CarepathResult};
use carepath_settings::EngineSettings;

use super::print_integrity;
use crate::{mock_data::sample_complaints, service::in_memory_desk};

fn print_analysis(result: &AnalysisResult) {
    let alternatives: Vec<&str> = result
        .alternative_conditions
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    println!("  Detected symptoms:      {}", result.detected_symptoms.join(", "));
    println!("  Urgency:                {}", result.urgency_level);
    println!(
        "  Primary condition:      {} ({}%)",
        result.primary_condition.name, result.primary_condition.probability
    );
    if !alternatives.is_empty() {
        println!("  Alternatives:           {}", alternatives.join(", "));
    }
    println!("  Confidence:             {}%", result.confidence);
    println!("  Suggested specialty:    {}", result.suggested_specialty);
    println!(
        "  Triage:                 {} ({}), wait {}",
        result.triage_score.score, result.triage_score.priority, result.triage_score.estimated_wait_time
    );
    if !result.triage_score.notes.is_empty() {
        println!("  Triage notes:           {}", result.triage_score.notes);
    }
    for line in &result.recommendations {
        println!("    - {}", line);
    }
}

/// Run Scenario 1: Symptom Check.
pub fn run_scenario(settings: &EngineSettings) -> CarepathResult<()> {
    println!("=== Scenario 1: Symptom Check ===");
    println!();

    let (desk, history) = in_memory_desk(settings.clone(), "symptom-check");

    for (patient, complaint) in sample_complaints() {
        println!(
            "  Patient {} (age {}): \"{}\"",
            patient.patient_id.as_deref().unwrap_or("?"),
            patient.age.map_or_else(|| "?".to_string(), |a| a.to_string()),
            complaint
        );
        let result = desk.analyze_symptoms(complaint, &patient)?;
        print_analysis(&result);
        println!();
    }

    // ── Read the triage queue back ────────────────────────────────────────────

    let queue = desk.triage_queue();
    println!("  Triage queue ({} record(s), most recent first):", queue.len());
    for record in &queue {
        println!(
            "    {} score={} priority={}",
            record.patient_id.as_deref().unwrap_or("?"),
            record.result["score"],
            record.result["priority"].as_str().unwrap_or("?")
        );
    }
    println!();

    print_integrity(&history);
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
