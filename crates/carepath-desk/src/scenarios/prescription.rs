//! Scenario 2: Prescription Suggestions
//!
//! The desk turns free-text diagnoses into medication suggestions. Every
//! suggestion is marked for doctor review and verified before it is logged.
//!
//! Walk-through:
//!   1. Elderly patient, "chronic hypertension": once-daily regimen,
//!      elderly precaution, interaction advisory, specialist follow-up
//!   2. Child with a penicillin allergy, "bacterial ear infection":
//!      paediatric Amoxicillin dose and a penicillin precaution
//!   3. Adult, "seasonal allergies with skin rash": allergy category

use carepath_contracts::{error::CarepathResult, prescription::PrescriptionSuggestion};
use carepath_settings::EngineSettings;

use super::print_integrity;
use crate::{
    mock_data::{adult_patient, child_patient, elderly_cardiac_patient},
    service::in_memory_desk,
};

fn print_suggestion(suggestion: &PrescriptionSuggestion) {
    println!("  Category:               {}", suggestion.category);
    for line in &suggestion.primary_medications {
        println!(
            "    primary:     {} {} | {} | {}",
            line.medication, line.dosage, line.frequency, line.duration
        );
    }
    for line in &suggestion.alternative_medications {
        println!(
            "    alternative: {} {} | {} | {}",
            line.medication, line.dosage, line.frequency, line.duration
        );
    }
    for precaution in &suggestion.precautions {
        println!("    precaution:  {}", precaution);
    }
    for interaction in &suggestion.interactions {
        println!("    interaction: {}", interaction);
    }
    println!(
        "  Follow-up:              {} ({})",
        suggestion.follow_up.timeframe, suggestion.follow_up.specialist
    );
    println!(
        "  Confidence:             {}% | warnings: {} | doctor review: {}",
        suggestion.confidence,
        if suggestion.warnings_present { "yes" } else { "no" },
        if suggestion.requires_doctor_review { "REQUIRED" } else { "no" }
    );
}

/// Run Scenario 2: Prescription Suggestions.
pub fn run_scenario(settings: &EngineSettings) -> CarepathResult<()> {
    println!("=== Scenario 2: Prescription Suggestions ===");
    println!();

    let (desk, history) = in_memory_desk(settings.clone(), "prescriptions");

    let cases = [
        (elderly_cardiac_patient(), "chronic hypertension"),
        (child_patient(), "bacterial ear infection"),
        (adult_patient(), "seasonal allergies with skin rash"),
    ];

    for (patient, diagnosis) in &cases {
        println!(
            "  Patient {}: \"{}\"",
            patient.patient_id.as_deref().unwrap_or("?"),
            diagnosis
        );
        let suggestion = desk.suggest_prescription(diagnosis, patient)?;
        print_suggestion(&suggestion);
        println!();
    }

    print_integrity(&history);
    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
