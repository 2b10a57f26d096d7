//! Deterministic, model-free stand-ins for generated content.

use crate::models::chat::{ChatRequest, ChatResult};
use crate::models::itinerary::{DayPlan, Itinerary, TripRequest};

const DEGENERATE_DAILY_BUDGET: f64 = 100.0;
const DAILY_SPEND_RATIO: f64 = 0.8;

const DEFAULT_MORNING: &str = "Visit popular landmarks and attractions";
const DEFAULT_AFTERNOON: &str = "Explore local neighborhoods and markets";
const DEFAULT_EVENING: &str = "Dinner at a recommended local restaurant";

const DAY_TIPS: &str =
    "Book tickets in advance to avoid queues. Best to start early to make the most of your day!";

const PACKING_SUGGESTIONS: [&str; 7] = [
    "Comfortable walking shoes",
    "Weather-appropriate clothing",
    "Camera or smartphone",
    "Sunscreen and hat",
    "Reusable water bottle",
    "Travel adapter",
    "First aid kit",
];

const CULTURAL_TIPS: [&str; 4] = [
    "Research local customs and etiquette before traveling",
    "Learn a few basic phrases in the local language",
    "Be respectful of local traditions and dress codes",
    "Try local cuisine and support local businesses",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Morning,
    Afternoon,
    Evening,
}

/// Interest overrides, applied in order. Later matches overwrite earlier ones.
const INTEREST_OVERRIDES: [(&[&str], Slot, &str); 4] = [
    (&["culture", "history"], Slot::Morning, "Tour historical sites and museums"),
    (&["food"], Slot::Evening, "Food tour and culinary experience"),
    (&["adventure"], Slot::Afternoon, "Outdoor adventure activities"),
    (&["nature"], Slot::Morning, "Explore natural parks and scenic areas"),
];

/// Budget available per day, or a fixed amount when the duration is not positive.
pub fn daily_budget(request: &TripRequest) -> f64 {
    if request.duration > 0 {
        request.budget / request.duration as f64
    } else {
        DEGENERATE_DAILY_BUDGET
    }
}

pub fn fallback_itinerary(request: &TripRequest) -> Itinerary {
    let estimated_cost = (daily_budget(request) * DAILY_SPEND_RATIO).floor();

    let mut morning = DEFAULT_MORNING;
    let mut afternoon = DEFAULT_AFTERNOON;
    let mut evening = DEFAULT_EVENING;
    for (keywords, slot, activity) in INTEREST_OVERRIDES {
        if keywords.iter().any(|keyword| request.has_interest(keyword)) {
            match slot {
                Slot::Morning => morning = activity,
                Slot::Afternoon => afternoon = activity,
                Slot::Evening => evening = activity,
            }
        }
    }

    let days = (1..=request.day_count())
        .map(|day| DayPlan {
            day,
            title: format!("Day {}: Discovering {}", day, request.destination),
            morning: morning.to_string(),
            afternoon: afternoon.to_string(),
            evening: evening.to_string(),
            estimated_cost,
            tips: DAY_TIPS.to_string(),
        })
        .collect();

    Itinerary {
        days,
        overview: format!(
            "An exciting {}-day journey through {}, tailored to your interests and budget.",
            request.duration, request.destination
        ),
        total_estimated_cost: request.budget,
        packing_suggestions: PACKING_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        cultural_tips: CULTURAL_TIPS.iter().map(|s| s.to_string()).collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    Dining,
    AddActivity,
    RemoveActivity,
    Weather,
    Budget,
    General,
}

/// Keyword sets checked top to bottom; the first topic with a hit wins.
const TOPIC_KEYWORDS: [(ChatTopic, &[&str]); 5] = [
    (ChatTopic::Dining, &["restaurant", "food", "eat", "dining"]),
    (ChatTopic::AddActivity, &["add", "include", "visit"]),
    (ChatTopic::RemoveActivity, &["remove", "cancel", "delete", "skip"]),
    (ChatTopic::Weather, &["weather", "temperature", "climate"]),
    (ChatTopic::Budget, &["budget", "cost", "expensive", "cheap", "price"]),
];

/// Classifies a message by case-insensitive substring match. Keywords are not
/// word-bounded: "weather" and "great" both contain "eat" and count as dining.
pub fn classify_message(message: &str) -> ChatTopic {
    let lowered = message.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ChatTopic::General)
}

/// Canned reply used when the model cannot answer. Never proposes an update.
pub fn fallback_chat_response(request: &ChatRequest) -> ChatResult {
    let destination = request.destination();

    let response = match classify_message(&request.message) {
        ChatTopic::Dining => format!(
            "I'd be happy to help with restaurant recommendations in {}! Based on local cuisine and popular spots, I suggest trying local specialties and asking your hotel for current recommendations. Would you like me to suggest specific areas or types of cuisine?",
            destination
        ),
        ChatTopic::AddActivity => "I understand you'd like to add something to your itinerary. While I'm currently unable to modify the itinerary automatically, I recommend considering the timing and location when adding new activities. What specific activity would you like to add and on which day?".to_string(),
        ChatTopic::RemoveActivity => "I can help you adjust your plans. Which day and activity would you like to remove? This will free up time for other experiences or simply allow for more flexibility.".to_string(),
        ChatTopic::Weather => format!(
            "For up-to-date weather information in {}, I recommend checking a weather service. Generally, it's good to pack layers and be prepared for changes. Would you like suggestions on what to pack?",
            destination
        ),
        ChatTopic::Budget => {
            let total = request
                .current_itinerary
                .as_ref()
                .map(|itinerary| itinerary.total_estimated_cost.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            format!(
                "I can help you optimize your budget. The current itinerary estimates ${} total. Would you like suggestions for budget-friendly alternatives?",
                total
            )
        }
        ChatTopic::General => format!(
            "I'm here to help with your trip to {}! I can assist with restaurant recommendations, activity suggestions, itinerary modifications, local tips, and budget planning. What would you like to know more about?",
            destination
        ),
    };

    ChatResult::reply(response)
}
