//! Scenario 3: Imaging and Preventive Insights
//!
//! Canned image readings are checked against the configured confidence
//! threshold; readings below it are flagged for specialist review. The
//! scenario ends with preventive insights for every mock patient, which are
//! shown but not logged.

use carepath_contracts::error::CarepathResult;
use carepath_settings::EngineSettings;

use super::print_integrity;
use crate::{
    mock_data::{elderly_cardiac_patient, sample_patients},
    service::in_memory_desk,
};

const IMAGE_TYPES: &[&str] = &["x-ray", "mri", "ct", "ecg", "ultrasound"];

/// Run Scenario 3: Imaging and Preventive Insights.
pub fn run_scenario(settings: &EngineSettings) -> CarepathResult<()> {
    println!("=== Scenario 3: Imaging and Preventive Insights ===");
    println!();

    let (desk, history) = in_memory_desk(settings.clone(), "imaging");
    let patient = elderly_cardiac_patient();

    println!(
        "  Confidence threshold:   {}%",
        desk.settings().confidence_threshold
    );
    println!();

    for image_type in IMAGE_TYPES {
        let reading = desk.analyze_image(image_type, patient.patient_id.as_deref())?;
        println!(
            "  {:<11} {}% (quality {}) -> {}",
            reading.image_type, reading.confidence, reading.quality_score, reading.suggested_specialty
        );
        println!("    findings: {}", reading.findings);
        println!("    next:     {}", reading.recommendation);
        if reading.requires_specialist_review {
            println!("    SPECIALIST REVIEW: confidence below threshold");
        }
    }
    println!();

    // ── Preventive insights ───────────────────────────────────────────────────

    for patient in sample_patients() {
        let insights = desk.health_insights(&patient);
        println!("  Insights for {}:", patient.patient_id.as_deref().unwrap_or("?"));
        for line in insights
            .risk_factors
            .iter()
            .chain(&insights.preventive_recommendations)
            .chain(&insights.lifestyle_insights)
        {
            println!("    - {}", line);
        }
    }
    println!();

    print_integrity(&history);
    println!();
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
