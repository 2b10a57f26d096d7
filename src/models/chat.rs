use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::itinerary::{deserialize_optional_itinerary, Itinerary};

/// Number of trailing turns forwarded to the model as conversation context.
pub const HISTORY_WINDOW: usize = 5;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TripContext {
    pub destination: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub trip_context: TripContext,
    #[serde(default, deserialize_with = "deserialize_optional_itinerary")]
    pub current_itinerary: Option<Itinerary>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn destination(&self) -> &str {
        self.trip_context
            .destination
            .as_deref()
            .filter(|destination| !destination.trim().is_empty())
            .unwrap_or("your destination")
    }

    /// The most recent turns, oldest first, rendered as `role: content` lines.
    pub fn recent_history(&self) -> String {
        let start = self
            .conversation_history
            .len()
            .saturating_sub(HISTORY_WINDOW);
        self.conversation_history[start..]
            .iter()
            .map(|turn| format!("{}: {}", turn.role.as_str(), turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn itinerary_summary(&self) -> String {
        match &self.current_itinerary {
            Some(itinerary) if !itinerary.days.is_empty() => itinerary.summarize(),
            _ => "No itinerary available yet.".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatResult {
    pub response: String,
    pub itinerary_update: Option<Itinerary>,
}

impl ChatResult {
    pub fn reply(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            itinerary_update: None,
        }
    }
}
