//! Extraction of structured payloads from free-form model output.
//!
//! Models tend to wrap their JSON in prose, markdown fences or explanations.
//! Everything outside the outermost delimiter pair is ignored; everything
//! inside it must parse strictly or the extraction yields nothing.

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::models::itinerary::Itinerary;

/// Literal marker separating the conversational reply from an itinerary update.
pub const ITINERARY_UPDATE_MARKER: &str = "ITINERARY_UPDATE:";

/// Parses the span from the first `{` to the last `}` as `T`.
pub fn extract_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    extract_delimited(text, '{', '}')
}

/// Parses the span from the first `[` to the last `]` as a list of `T`.
pub fn extract_list<T: DeserializeOwned>(text: &str) -> Option<Vec<T>> {
    extract_delimited(text, '[', ']')
}

fn extract_delimited<T: DeserializeOwned>(text: &str, open: char, close: char) -> Option<T> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if start >= end {
        debug!("No {}...{} span found in model output", open, close);
        return None;
    }

    match serde_json::from_str(&text[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to parse structured payload from model output: {}", e);
            None
        }
    }
}

/// Conversational reply split away from an optional embedded itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSplit {
    pub response: String,
    pub itinerary_update: Option<Itinerary>,
}

/// Splits chat output at the first [`ITINERARY_UPDATE_MARKER`].
///
/// Without a marker the whole text is the reply. With one, the reply is the
/// trimmed text before it and the update is whatever object extraction finds
/// after it.
pub fn split_itinerary_update(text: &str) -> UpdateSplit {
    match text.split_once(ITINERARY_UPDATE_MARKER) {
        Some((reply, payload)) => UpdateSplit {
            response: reply.trim().to_string(),
            itinerary_update: extract_object(payload),
        },
        None => UpdateSplit {
            response: text.to_string(),
            itinerary_update: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityRecommendation;
    use crate::models::insights::{BudgetOptimization, CategoryOptimization, CulturalInsights};
    use crate::models::itinerary::DayPlan;
    use std::collections::BTreeMap;

    fn sample_itinerary() -> Itinerary {
        Itinerary {
            days: vec![
                DayPlan {
                    day: 1,
                    title: "Arrival in Lisbon".to_string(),
                    morning: "Check in and coffee in Chiado".to_string(),
                    afternoon: "Tram 28 through Alfama".to_string(),
                    evening: "Fado dinner".to_string(),
                    estimated_cost: 140.0,
                    tips: "Wear comfortable shoes".to_string(),
                },
                DayPlan {
                    day: 2,
                    title: "Belém".to_string(),
                    morning: "Jerónimos Monastery".to_string(),
                    afternoon: "Pastéis de Belém".to_string(),
                    evening: "Sunset at LX Factory".to_string(),
                    estimated_cost: 95.5,
                    tips: "Buy a Viva Viagem card".to_string(),
                },
            ],
            overview: "Two days in Lisbon".to_string(),
            total_estimated_cost: 235.5,
            packing_suggestions: vec!["Walking shoes".to_string()],
            cultural_tips: vec!["Dinner starts late".to_string()],
        }
    }

    #[test]
    fn test_extracts_itinerary_surrounded_by_prose() {
        let itinerary = sample_itinerary();
        let text = format!(
            "Here is your plan!\n```json\n{}\n```\nEnjoy the trip.",
            serde_json::to_string_pretty(&itinerary).unwrap()
        );

        assert_eq!(extract_object::<Itinerary>(&text), Some(itinerary));
    }

    #[test]
    fn test_extracts_activity_list_surrounded_by_prose() {
        let activities = vec![ActivityRecommendation {
            name: "Oceanário".to_string(),
            description: "One of Europe's largest aquariums".to_string(),
            duration: "2-3 hours".to_string(),
            cost_estimate: "$$".to_string(),
            best_time: "Morning".to_string(),
            indoor: true,
        }];
        let text = format!(
            "Sure! Here are some ideas: {} Let me know if you need more.",
            serde_json::to_string(&activities).unwrap()
        );

        assert_eq!(extract_list::<ActivityRecommendation>(&text), Some(activities));
    }

    #[test]
    fn test_extracts_cultural_insights_and_budget() {
        let insights = CulturalInsights {
            customs: vec!["Greet with two kisses".to_string()],
            etiquette: vec!["Keep your voice down on trams".to_string()],
            basic_phrases: BTreeMap::from([
                ("hello".to_string(), "olá".to_string()),
                ("thank_you".to_string(), "obrigado".to_string()),
            ]),
            tipping_guide: "Round up or leave 5-10%".to_string(),
            safety_tips: vec!["Watch for pickpockets".to_string()],
            local_insights: vec!["Miradouros are free".to_string()],
        };
        let text = format!("Insights: {}", serde_json::to_string(&insights).unwrap());
        assert_eq!(extract_object::<CulturalInsights>(&text), Some(insights));

        let budget = BudgetOptimization {
            optimizations: vec![CategoryOptimization {
                category: "accommodation".to_string(),
                current_cost: 500.0,
                suggested_cost: 350.0,
                suggestions: vec!["Stay in a guesthouse".to_string()],
            }],
            estimated_savings: 150.0,
            revised_total: 1850.0,
        };
        let text = format!("{}\nThat should help.", serde_json::to_string(&budget).unwrap());
        assert_eq!(extract_object::<BudgetOptimization>(&text), Some(budget));
    }

    #[test]
    fn test_no_delimiters_yields_none() {
        assert_eq!(extract_object::<Itinerary>(""), None);
        assert_eq!(extract_object::<Itinerary>("I could not build a plan."), None);
        assert_eq!(extract_list::<ActivityRecommendation>("no list here {}"), None);
    }

    #[test]
    fn test_reversed_delimiters_yield_none() {
        assert_eq!(extract_object::<serde_json::Value>("} oops {"), None);
        assert_eq!(extract_list::<serde_json::Value>("] oops ["), None);
    }

    #[test]
    fn test_malformed_interior_yields_none() {
        assert_eq!(extract_object::<Itinerary>("{\"itinerary\": [ {\"day\": 1,}"), None);
        assert_eq!(extract_object::<Itinerary>("{\"overview\": \"missing fields\"}"), None);
        assert_eq!(
            extract_list::<ActivityRecommendation>("[{\"name\": \"x\", \"indoor\": \"maybe\"}]"),
            None
        );
    }

    #[test]
    fn test_multiple_objects_are_over_captured() {
        // first `{` to last `}` spans both objects, which is not valid JSON
        let text = r#"{"a": 1} and also {"b": 2}"#;
        assert_eq!(extract_object::<serde_json::Value>(text), None);
    }

    #[test]
    fn test_split_without_marker_keeps_whole_text() {
        let split = split_itinerary_update("  Paris is lovely in spring.  ");
        assert_eq!(split.response, "  Paris is lovely in spring.  ");
        assert_eq!(split.itinerary_update, None);
    }

    #[test]
    fn test_split_with_marker_and_valid_update() {
        let itinerary = sample_itinerary();
        let text = format!(
            "Sure, I added it.\n\nITINERARY_UPDATE:\n{}",
            serde_json::to_string_pretty(&itinerary).unwrap()
        );

        let split = split_itinerary_update(&text);
        assert_eq!(split.response, "Sure, I added it.");
        assert_eq!(split.itinerary_update, Some(itinerary));
    }

    #[test]
    fn test_split_with_marker_and_broken_update() {
        let split = split_itinerary_update("Done!\nITINERARY_UPDATE:\n{\"itinerary\": oops}");
        assert_eq!(split.response, "Done!");
        assert_eq!(split.itinerary_update, None);
    }

    #[test]
    fn test_split_uses_first_marker_only() {
        let text = format!(
            "Updated. ITINERARY_UPDATE: {} ITINERARY_UPDATE: trailing",
            serde_json::to_string(&sample_itinerary()).unwrap()
        );

        let split = split_itinerary_update(&text);
        assert_eq!(split.response, "Updated.");
        assert_eq!(split.itinerary_update, Some(sample_itinerary()));
    }
}
