// src/message.rs
use serde::{Deserialize, Serialize};

use crate::trip::{Budget, ExperienceType, TripRequest};

/// Which input path the user took on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    NaturalLanguage,
    Form,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::NaturalLanguage => "natural_language",
            InputMode::Form => "form",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub mode: InputMode,
    /// Free-text description, natural-language mode only.
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub experience_type: Option<ExperienceType>,
}

impl PlanRequest {
    /// Build a TripRequest from the structured fields. The free-text
    /// `query` field is ignored here so a stale value left over from
    /// natural-language mode cannot leak into a form submit. Validation
    /// happens separately, in `TripRequest::validate`.
    pub fn form_trip(&self) -> TripRequest {
        TripRequest {
            destination: self
                .destination
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            duration: self.duration.unwrap_or_default(),
            budget: self.budget.clone().unwrap_or(Budget::MidRange),
            interests: self.interests.clone(),
            experience_type: self.experience_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub request_id: String,
    pub trip: TripRequest,
    pub attractions: Vec<String>,
    pub itinerary: String,
}

#[derive(Debug, Deserialize)]
pub struct AttractionsRequest {
    pub destination: String,
    #[serde(default)]
    pub experience_type: Option<ExperienceType>,
}

#[derive(Debug, Serialize)]
pub struct AttractionsResponse {
    pub destination: String,
    pub attractions: Vec<String>,
}
