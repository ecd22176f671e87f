// src/services/parser.rs
//
// Natural-language input path: the user's free-text query is embedded
// verbatim in an extraction prompt and the model converts it to a JSON
// TripRequest. Missing optional fields get defaults via serde.

use crate::error::AppError;
use crate::services::gemini::TextGenerator;
use crate::trip::TripRequest;

pub fn extraction_prompt(query: &str) -> String {
    format!(
        "Convert this travel request to JSON format:\n\
         \"{query}\"\n\n\
         Respond with a single JSON object and nothing else. Required fields:\n\
         - destination (specific location)\n\
         - duration (in days, as a number)\n\
         - budget (\"Budget\", \"Mid-range\", \"Luxury\")\n\
         - interests (list of activities)\n\
         - experience_type (\"Most Famous\", \"Mix\", \"Offbeat Gems\")"
    )
}

pub async fn parse_trip_request(
    generator: &dyn TextGenerator,
    query: &str,
) -> Result<TripRequest, AppError> {
    let raw = generator.generate(&extraction_prompt(query)).await?;
    let json = strip_code_fences(&raw);

    serde_json::from_str(json).map_err(|e| {
        tracing::debug!(error = %e, "model output was not a usable TripRequest");
        AppError::BadRequest(
            "Could not understand the travel request. Please provide more details.".to_string(),
        )
    })
}

/// Models often wrap JSON in ```json fences despite being told not to.
fn strip_code_fences(raw: &str) -> &str {
    let s = raw.trim();
    let Some(s) = s.strip_prefix("```") else {
        return s;
    };
    let s = s.strip_prefix("json").unwrap_or(s);
    s.strip_suffix("```").unwrap_or(s).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Budget, ExperienceType};
    use async_trait::async_trait;

    struct StaticGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for StaticGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn prompt_carries_the_query_verbatim() {
        let prompt = extraction_prompt("5 days in Kerala with nature focus");
        assert!(prompt.contains("\"5 days in Kerala with nature focus\""));
        assert!(prompt.contains("destination"));
    }

    #[test]
    fn strips_json_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[tokio::test]
    async fn parses_fenced_model_output_with_defaults() {
        let generator = StaticGenerator(
            "```json\n{\"destination\": \"Kerala\", \"duration\": 5, \"budget\": \"Budget\"}\n```",
        );
        let trip = parse_trip_request(&generator, "5 days in Kerala").await.unwrap();
        assert_eq!(trip.destination, "Kerala");
        assert_eq!(trip.duration, 5);
        assert_eq!(trip.budget, Budget::Budget);
        assert!(trip.interests.is_empty());
        assert_eq!(trip.experience_type, ExperienceType::Mix);
    }

    #[tokio::test]
    async fn rejects_output_missing_required_fields() {
        let generator = StaticGenerator(r#"{"duration": 5, "budget": "Budget"}"#);
        let err = parse_trip_request(&generator, "somewhere nice").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn rejects_non_json_output() {
        let generator = StaticGenerator("I'm sorry, I can't help with that.");
        let err = parse_trip_request(&generator, "???").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
