use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CulturalInsights {
    pub customs: Vec<String>,
    pub etiquette: Vec<String>,
    // phrase key -> translation, e.g. "thank_you" -> "merci"
    pub basic_phrases: BTreeMap<String, String>,
    pub tipping_guide: String,
    pub safety_tips: Vec<String>,
    pub local_insights: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CategoryOptimization {
    pub category: String,
    pub current_cost: f64,
    pub suggested_cost: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BudgetOptimization {
    pub optimizations: Vec<CategoryOptimization>,
    pub estimated_savings: f64,
    pub revised_total: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BudgetOptimizationRequest {
    pub itinerary: Option<serde_json::Value>,
    pub target_budget: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CulturalInsightsQuery {
    pub destination: Option<String>,
}
