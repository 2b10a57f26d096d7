use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_DURATION_DAYS: i64 = 5;
/// Longest trip a single itinerary covers.
pub const MAX_TRIP_DAYS: i64 = 30;
const DEFAULT_BUDGET: f64 = 2000.0;
const DEFAULT_TRAVEL_STYLE: &str = "balanced";

fn default_duration() -> i64 {
    DEFAULT_DURATION_DAYS
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

fn default_travel_style() -> String {
    DEFAULT_TRAVEL_STYLE.to_string()
}

/// Parameters for a single itinerary generation call.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TripRequest {
    pub destination: String,
    #[serde(default = "default_duration")]
    pub duration: i64,
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_travel_style")]
    pub travel_style: String,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, duration: i64, budget: f64) -> Self {
        Self {
            destination: destination.into(),
            duration,
            budget,
            interests: Vec::new(),
            travel_style: default_travel_style(),
        }
    }

    /// Number of days to plan, clamped to `0..=MAX_TRIP_DAYS`.
    pub fn day_count(&self) -> u32 {
        u32::try_from(self.duration.clamp(0, MAX_TRIP_DAYS)).unwrap_or(0)
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive substring test against every interest tag.
    pub fn has_interest(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.interests
            .iter()
            .any(|interest| interest.to_lowercase().contains(&keyword))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub estimated_cost: f64,
    pub tips: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Itinerary {
    #[serde(rename = "itinerary")]
    pub days: Vec<DayPlan>,
    pub overview: String,
    pub total_estimated_cost: f64,
    pub packing_suggestions: Vec<String>,
    pub cultural_tips: Vec<String>,
}

impl Itinerary {
    /// An itinerary is usable when it has at least one day, its days are
    /// numbered 1..=n in order, and every day carries a positive cost.
    pub fn is_valid(&self) -> bool {
        !self.days.is_empty()
            && self
                .days
                .iter()
                .enumerate()
                .all(|(index, day)| day.day as usize == index + 1 && day.estimated_cost > 0.0)
    }

    pub fn summarize(&self) -> String {
        self.days
            .iter()
            .map(|day| {
                format!(
                    "Day {}: {} - Morning: {}..., Afternoon: {}..., Evening: {}...",
                    day.day,
                    day.title,
                    truncate_chars(&day.morning, SUMMARY_SLOT_CHARS),
                    truncate_chars(&day.afternoon, SUMMARY_SLOT_CHARS),
                    truncate_chars(&day.evening, SUMMARY_SLOT_CHARS),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const SUMMARY_SLOT_CHARS: usize = 50;

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

// Treats `null`, `{}` and anything that is not a well-formed itinerary as absent
pub fn deserialize_optional_itinerary<'de, D>(deserializer: D) -> Result<Option<Itinerary>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(other) => Ok(serde_json::from_value(other).ok()),
    }
}
