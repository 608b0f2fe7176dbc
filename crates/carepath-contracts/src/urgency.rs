//! Ordinal severity tags shared by symptoms, conditions, and triage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How quickly a symptom or condition needs attention.
///
/// Variants are declared in ascending order so `Ord` gives
/// `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `low`, `medium`, `high`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUrgency(pub String);

impl fmt::Display for UnknownUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown urgency '{}'", self.0)
    }
}

impl std::error::Error for UnknownUrgency {}

impl FromStr for Urgency {
    type Err = UnknownUrgency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            _ => Err(UnknownUrgency(s.to_string())),
        }
    }
}

/// Queue position assigned by the triage scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Map a clamped triage score onto a priority band.
    ///
    /// 70 and above is high, 40 and above is medium, anything lower is low.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Priority::High
        } else if score >= 40 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn estimated_wait_time(&self) -> &'static str {
        match self {
            Priority::High => "0-15 minutes",
            Priority::Medium => "15-45 minutes",
            Priority::Low => "45-90 minutes",
        }
    }

    pub fn recommended_action(&self) -> &'static str {
        match self {
            Priority::High => "Immediate assessment required",
            Priority::Medium => "Prompt medical evaluation",
            Priority::Low => "Routine medical consultation",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
