//! Canned image analysis.
//!
//! There is no image inference. Each image type has a small pool of canned
//! readings; one is picked through the random source and its confidence is
//! jittered by up to five points either way.

use tracing::debug;

use carepath_contracts::imaging::{FindingSeverity, FollowUpPriority, ImageAnalysis};

use crate::traits::RandomSource;

const MIN_CONFIDENCE: i32 = 50;
const MAX_CONFIDENCE: i32 = 95;
/// Jitter is drawn from `[-JITTER, JITTER]`.
const JITTER: i32 = 5;

pub const MODEL_VERSION: &str = "CarePath-Vision-v2.1";

struct CannedReading {
    confidence: u8,
    findings: &'static str,
    recommendation: &'static str,
    follow_up: FollowUpPriority,
    severity: FindingSeverity,
}

const XRAY_READINGS: &[CannedReading] = &[
    CannedReading {
        confidence: 89,
        findings: "Clear lung fields with normal cardiac silhouette. No acute abnormalities detected.",
        recommendation: "Continue routine monitoring. Results within normal limits.",
        follow_up: FollowUpPriority::Routine,
        severity: FindingSeverity::Normal,
    },
    CannedReading {
        confidence: 76,
        findings: "Mild infiltrate in lower right lung field. Possible early pneumonia.",
        recommendation: "Antibiotic therapy recommended. Follow-up chest X-ray in 1 week.",
        follow_up: FollowUpPriority::Urgent,
        severity: FindingSeverity::Mild,
    },
    CannedReading {
        confidence: 84,
        findings: "Normal bone structure and alignment. No fractures or dislocations observed.",
        recommendation: "No acute intervention required. Consider physiotherapy if pain persists.",
        follow_up: FollowUpPriority::Routine,
        severity: FindingSeverity::Normal,
    },
];

const MRI_READINGS: &[CannedReading] = &[
    CannedReading {
        confidence: 91,
        findings: "Brain tissue appears normal with good gray-white matter differentiation.",
        recommendation: "No abnormal findings. Continue current treatment plan.",
        follow_up: FollowUpPriority::Routine,
        severity: FindingSeverity::Normal,
    },
    CannedReading {
        confidence: 73,
        findings: "Small area of increased signal intensity in white matter. Clinical correlation needed.",
        recommendation: "Neurology consultation recommended for further evaluation.",
        follow_up: FollowUpPriority::Priority,
        severity: FindingSeverity::Mild,
    },
];

const CT_READINGS: &[CannedReading] = &[
    CannedReading {
        confidence: 87,
        findings: "No acute intracranial abnormalities. Normal brain parenchyma.",
        recommendation: "Reassuring findings. Continue symptomatic management.",
        follow_up: FollowUpPriority::Routine,
        severity: FindingSeverity::Normal,
    },
    CannedReading {
        confidence: 82,
        findings: "Normal abdominal organs with no signs of acute pathology.",
        recommendation: "No immediate concerns. Consider dietary modifications.",
        follow_up: FollowUpPriority::Routine,
        severity: FindingSeverity::Normal,
    },
];

const UNKNOWN_READINGS: &[CannedReading] = &[CannedReading {
    confidence: 65,
    findings: "Image quality adequate for preliminary assessment. No obvious abnormalities.",
    recommendation: "Professional radiological review recommended for definitive interpretation.",
    follow_up: FollowUpPriority::Routine,
    severity: FindingSeverity::Normal,
}];

fn readings_for(image_type: &str) -> &'static [CannedReading] {
    match image_type {
        "x-ray" => XRAY_READINGS,
        "mri" => MRI_READINGS,
        "ct" => CT_READINGS,
        _ => UNKNOWN_READINGS,
    }
}

fn specialty_for(image_type: &str) -> &'static str {
    match image_type {
        "ecg" => "cardiology",
        "eeg" => "neurology",
        _ => "radiology",
    }
}

fn additional_recommendations(severity: FindingSeverity) -> Vec<String> {
    let lines: [&str; 2] = match severity {
        FindingSeverity::Normal => ["Continue current treatment plan", "Follow up as scheduled"],
        FindingSeverity::Mild => [
            "Specialist consultation recommended",
            "Additional tests may be required",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

/// Produce a canned reading for `image_type`.
///
/// Unrecognised types fall back to the generic pool. The result is flagged
/// for specialist review when its confidence is below `confidence_threshold`.
pub fn analyze_image(
    image_type: &str,
    confidence_threshold: u8,
    random: &dyn RandomSource,
) -> ImageAnalysis {
    let key = image_type.trim().to_lowercase();
    let pool = readings_for(&key);
    let reading = &pool[random.index(pool.len()).min(pool.len() - 1)];

    let jitter = random.in_range(0, (2 * JITTER + 1) as u32) as i32 - JITTER;
    let confidence =
        (i32::from(reading.confidence) + jitter).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8;
    let quality_score = random.in_range(80, 96) as u8;
    let requires_specialist_review = confidence < confidence_threshold;

    debug!(
        image_type = %key,
        confidence,
        requires_specialist_review,
        "image reading selected"
    );

    ImageAnalysis {
        image_type: image_type.to_uppercase(),
        confidence,
        findings: reading.findings.to_string(),
        recommendation: reading.recommendation.to_string(),
        severity: reading.severity,
        follow_up_priority: reading.follow_up,
        requires_specialist_review,
        suggested_specialty: specialty_for(&key).to_string(),
        quality_score,
        processing_time: "2.3 seconds".to_string(),
        model_version: MODEL_VERSION.to_string(),
        disclaimer_shown: true,
        additional_recommendations: additional_recommendations(reading.severity),
    }
}
