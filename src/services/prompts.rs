// Prompt templates. `{name}` is a variable, `{{`/`}}` are literal braces.

pub const ITINERARY_PROMPT: &str = r#"
You are an expert travel planner. Create a detailed day-by-day itinerary for a trip with the following details:

Destination: {destination}
Duration: {duration} days
Budget: ${budget}
Interests: {interests}
Travel Style: {travel_style}

Provide a structured JSON response with the following format:
{{
    "itinerary": [
        {{
            "day": 1,
            "title": "Day title",
            "morning": "Activity description with timing",
            "afternoon": "Activity description with timing",
            "evening": "Activity description with timing",
            "estimated_cost": 150,
            "tips": "Helpful tips for the day"
        }}
    ],
    "overview": "Brief trip overview",
    "total_estimated_cost": 1500,
    "packing_suggestions": ["item1", "item2"],
    "cultural_tips": ["tip1", "tip2"]
}}

Make it specific, practical, and tailored to the user's interests.
"#;

pub const ACTIVITY_PROMPT: &str = r#"
Recommend 5-7 activities in {location} for someone interested in {preferences}{weather_context}.

Provide response as JSON array:
[
    {{
        "name": "Activity name",
        "description": "Brief description",
        "duration": "2-3 hours",
        "cost_estimate": "$$",
        "best_time": "Morning/Afternoon/Evening",
        "indoor": true
    }}
]

Make recommendations specific and practical.
"#;

pub const CULTURAL_PROMPT: &str = r#"
Provide cultural insights and practical travel tips for {destination}.

Return as JSON:
{{
    "customs": ["custom1", "custom2"],
    "etiquette": ["etiquette1", "etiquette2"],
    "basic_phrases": {{"hello": "translation", "thank_you": "translation"}},
    "tipping_guide": "Tipping expectations",
    "safety_tips": ["tip1", "tip2"],
    "local_insights": ["insight1", "insight2"]
}}
"#;

pub const BUDGET_PROMPT: &str = r#"
Optimize this travel itinerary to fit a budget of ${budget}:
{current_itinerary}

Provide budget optimization suggestions as JSON:
{{
    "optimizations": [
        {{
            "category": "accommodation/food/transport/activities",
            "current_cost": 500,
            "suggested_cost": 350,
            "suggestions": ["suggestion1", "suggestion2"]
        }}
    ],
    "estimated_savings": 300,
    "revised_total": 1700
}}
"#;

pub const CHAT_PROMPT: &str = r#"
You are a helpful AI travel assistant for a trip to {destination}.

Current Itinerary Summary:
{itinerary}

Previous conversation:
{history}

User's question: {message}

Provide a helpful, conversational response. If the user wants to modify the itinerary (add, remove, or change activities), respond with:
1. A friendly acknowledgment and explanation
2. The complete updated itinerary as JSON at the end, after the marker below, in this EXACT format:

ITINERARY_UPDATE:
{{
    "itinerary": [
        {{
            "day": 1,
            "title": "Day title",
            "morning": "Activity description",
            "afternoon": "Activity description",
            "evening": "Activity description",
            "estimated_cost": 150,
            "tips": "Tips"
        }}
    ],
    "overview": "Trip overview",
    "total_estimated_cost": 1500,
    "packing_suggestions": ["item1", "item2"],
    "cultural_tips": ["tip1", "tip2"]
}}

If no itinerary modification is needed, just provide a helpful conversational response.
Be specific, friendly, and knowledgeable about travel.
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::llm_client::{render_prompt, PromptVariables};

    fn vars(names: &[&'static str]) -> PromptVariables {
        names.iter().map(|name| (*name, format!("<{}>", name))).collect()
    }

    #[test]
    fn test_all_templates_render() {
        let cases: [(&str, &[&'static str]); 5] = [
            (
                ITINERARY_PROMPT,
                &["destination", "duration", "budget", "interests", "travel_style"],
            ),
            (ACTIVITY_PROMPT, &["location", "preferences", "weather_context"]),
            (CULTURAL_PROMPT, &["destination"]),
            (BUDGET_PROMPT, &["budget", "current_itinerary"]),
            (CHAT_PROMPT, &["destination", "itinerary", "history", "message"]),
        ];

        for (template, names) in cases {
            let rendered = render_prompt(template, &vars(names)).unwrap();
            for name in names {
                assert!(rendered.contains(&format!("<{}>", name)));
            }
        }
    }

    #[test]
    fn test_chat_prompt_carries_update_marker() {
        let rendered = render_prompt(
            CHAT_PROMPT,
            &vars(&["destination", "itinerary", "history", "message"]),
        )
        .unwrap();
        assert!(rendered.contains(crate::services::extraction::ITINERARY_UPDATE_MARKER));
    }
}
