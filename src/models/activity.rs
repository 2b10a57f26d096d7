use serde::{Deserialize, Serialize};

/// A single model-recommended activity.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ActivityRecommendation {
    pub name: String,
    pub description: String,
    pub duration: String,
    // Price tier such as "$", "$$" or "$$$"
    pub cost_estimate: String,
    pub best_time: String,
    pub indoor: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ActivityRecommendationRequest {
    pub location: Option<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub weather: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestaurantQuery {
    pub location: Option<String>,
    pub cuisine: Option<String>,
    pub budget: Option<String>,
}
