// src/trip.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Normalized record of the user's travel preferences. Built once per
/// submit (from the form fields or from the parsed free-text query),
/// consumed by prompt construction, echoed back in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub duration: i64,
    pub budget: Budget,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub experience_type: ExperienceType,
}

impl TripRequest {
    /// Usability checks, run before any API call is made.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.destination.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Destination cannot be empty".to_string(),
            ));
        }
        if self.duration < 1 {
            return Err(AppError::BadRequest(
                "Duration must be at least 1 day".to_string(),
            ));
        }
        Ok(())
    }
}

/// Budget tier. The model (or the user) may answer with something outside
/// the three known tiers, which is carried through as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Budget {
    Budget,
    #[serde(rename = "Mid-range")]
    MidRange,
    Luxury,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Budget => write!(f, "Budget"),
            Budget::MidRange => write!(f, "Mid-range"),
            Budget::Luxury => write!(f, "Luxury"),
            Budget::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Selects the flavor of the attractions query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceType {
    #[serde(rename = "Most Famous")]
    MostFamous,
    #[default]
    Mix,
    #[serde(rename = "Offbeat Gems")]
    OffbeatGems,
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceType::MostFamous => write!(f, "Most Famous"),
            ExperienceType::Mix => write!(f, "Mix"),
            ExperienceType::OffbeatGems => write!(f, "Offbeat Gems"),
        }
    }
}
