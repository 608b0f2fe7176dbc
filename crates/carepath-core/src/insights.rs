//! Preventive health insights from a patient profile.

use carepath_contracts::{analysis::HealthInsights, patient::PatientInfo};

const OBESE_BMI: f64 = 30.0;
const UNDERWEIGHT_BMI: f64 = 18.5;

/// Derive risk factors and preventive advice from age, BMI, and allergies.
pub fn health_insights(patient: &PatientInfo) -> HealthInsights {
    let mut insights = HealthInsights::default();

    if let Some(age) = patient.age {
        if age > 40 {
            insights
                .preventive_recommendations
                .push("Annual cardiovascular screening".to_string());
            insights
                .preventive_recommendations
                .push("Regular blood pressure monitoring".to_string());
        }
        if age > 50 {
            insights
                .preventive_recommendations
                .push("Colonoscopy screening".to_string());
            insights
                .preventive_recommendations
                .push("Bone density testing".to_string());
        }
    }

    match patient.bmi {
        Some(bmi) if bmi > OBESE_BMI => {
            insights.risk_factors.push("Obesity".to_string());
            insights
                .lifestyle_insights
                .push("Weight management program recommended".to_string());
        }
        Some(bmi) if bmi > 0.0 && bmi < UNDERWEIGHT_BMI => {
            insights.risk_factors.push("Underweight".to_string());
            insights
                .lifestyle_insights
                .push("Nutritional consultation recommended".to_string());
        }
        _ => {}
    }

    if !patient.allergies.is_empty() {
        insights
            .risk_factors
            .push(format!("Known allergies: {}", patient.allergies.join(", ")));
    }

    insights
}
