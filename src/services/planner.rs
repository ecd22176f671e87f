// src/services/planner.rs
//
// Prompt construction for the two request types ("generate itinerary" and
// "list top attractions") and the calls that submit them. Model output is
// an opaque string; nothing here inspects its content.

use crate::error::AppError;
use crate::services::gemini::TextGenerator;
use crate::trip::{ExperienceType, TripRequest};

const MAX_ATTRACTIONS: usize = 7;

pub fn itinerary_prompt(trip: &TripRequest) -> String {
    let interests = if trip.interests.is_empty() {
        "general sightseeing".to_string()
    } else {
        trip.interests.join(", ")
    };

    format!(
        "Create a {}-day {} itinerary for {}.\n\n\
         Preferences:\n\
         - Interests: {}\n\
         - Experience Type: {}\n\n\
         Include:\n\
         - Suggested activities, restaurants, and transportation details.\n\
         - Estimated costs and time allocations.",
        trip.duration, trip.budget, trip.destination, interests, trip.experience_type
    )
}

pub fn attractions_prompt(destination: &str, experience: ExperienceType) -> String {
    let query = match experience {
        ExperienceType::MostFamous => format!("the top 10 attractions in {destination}"),
        ExperienceType::Mix => format!("the best things to do in {destination}"),
        ExperienceType::OffbeatGems => format!("hidden gems in {destination}"),
    };

    format!("List {query}. Reply with one attraction per line, no numbering and no commentary.")
}

/// Submit the itinerary request and relay the raw text back.
pub async fn generate_itinerary(
    generator: &dyn TextGenerator,
    trip: &TripRequest,
) -> Result<String, AppError> {
    generator.generate(&itinerary_prompt(trip)).await
}

/// Fetch the attractions list. A failed or empty response degrades to a
/// placeholder entry instead of failing the whole plan.
pub async fn top_attractions(
    generator: &dyn TextGenerator,
    destination: &str,
    experience: ExperienceType,
) -> Vec<String> {
    match generator
        .generate(&attractions_prompt(destination, experience))
        .await
    {
        Ok(raw) => {
            let attractions = parse_attraction_lines(&raw);
            if attractions.is_empty() {
                vec!["Attractions list unavailable".to_string()]
            } else {
                attractions
            }
        }
        Err(e) => {
            tracing::warn!(destination, error = %e, "attractions request failed");
            vec!["Attractions list unavailable".to_string()]
        }
    }
}

fn parse_attraction_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(clean_line)
        .take(MAX_ATTRACTIONS)
        .collect()
}

// Strip the bullet and numbering prefixes models add anyway.
fn clean_line(line: &str) -> Option<String> {
    let mut s = line.trim().trim_start_matches(['-', '*', '•']).trim_start();

    if let Some((prefix, rest)) = s.split_once('.') {
        if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) {
            s = rest.trim_start();
        }
    }

    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Budget;

    fn trip() -> TripRequest {
        TripRequest {
            destination: "Paris".to_string(),
            duration: 3,
            budget: Budget::Other("moderate".to_string()),
            interests: vec!["art".to_string(), "food".to_string()],
            experience_type: ExperienceType::Mix,
        }
    }

    #[test]
    fn itinerary_prompt_names_destination_and_duration() {
        let prompt = itinerary_prompt(&trip());
        assert!(!prompt.is_empty());
        assert!(prompt.contains("Paris"));
        assert!(prompt.contains('3'));
        assert!(prompt.contains("art, food"));
        assert!(prompt.contains("moderate"));
    }

    #[test]
    fn itinerary_prompt_handles_empty_interests() {
        let mut t = trip();
        t.interests.clear();
        assert!(itinerary_prompt(&t).contains("general sightseeing"));
    }

    #[test]
    fn attractions_prompt_varies_by_experience_type() {
        let famous = attractions_prompt("Rome", ExperienceType::MostFamous);
        assert!(famous.contains("top 10 attractions in Rome"));

        let mix = attractions_prompt("Rome", ExperienceType::Mix);
        assert!(mix.contains("best things to do in Rome"));

        let offbeat = attractions_prompt("Rome", ExperienceType::OffbeatGems);
        assert!(offbeat.contains("hidden gems in Rome"));
    }

    #[test]
    fn attraction_lines_are_cleaned_and_capped() {
        let raw = "- Eiffel Tower\n1. Louvre\n\n* Musée d'Orsay\nSainte-Chapelle\n2. A\n3. B\n4. C\n5. D\n6. E";
        let parsed = parse_attraction_lines(raw);
        assert_eq!(parsed.len(), MAX_ATTRACTIONS);
        assert_eq!(parsed[0], "Eiffel Tower");
        assert_eq!(parsed[1], "Louvre");
        assert_eq!(parsed[2], "Musée d'Orsay");
        assert_eq!(parsed[3], "Sainte-Chapelle");
    }
}
