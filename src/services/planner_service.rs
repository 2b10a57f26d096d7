//! Travel Planner Service
//!
//! Wraps every generative call in the same pipeline: render a prompt, call the
//! model with a bounded timeout, extract the structured payload, and fall back
//! when any step fails. None of the public operations return an error.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::config::ModelConfig;
use crate::models::activity::ActivityRecommendation;
use crate::models::chat::{ChatRequest, ChatResult};
use crate::models::insights::{BudgetOptimization, CulturalInsights};
use crate::models::itinerary::{Itinerary, TripRequest};
use crate::services::extraction::{extract_list, extract_object, split_itinerary_update};
use crate::services::fallback::{fallback_chat_response, fallback_itinerary};
use crate::services::llm_client::{ModelClient, ModelError, OllamaClient, PromptVariables};
use crate::services::prompts::{
    ACTIVITY_PROMPT, BUDGET_PROMPT, CHAT_PROMPT, CULTURAL_PROMPT, ITINERARY_PROMPT,
};

pub struct TravelPlanner {
    model: Option<Arc<dyn ModelClient>>,
    timeout: Duration,
}

impl TravelPlanner {
    pub fn new(model: Option<Arc<dyn ModelClient>>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    /// Builds a planner backed by Ollama, or a fallback-only planner when the
    /// model is disabled or the HTTP client cannot be created.
    pub fn from_config(config: &ModelConfig) -> Self {
        if !config.enabled {
            info!("LLM disabled by configuration, using fallback responses");
            return Self::new(None, config.timeout);
        }

        match OllamaClient::new(config) {
            Ok(client) => {
                info!("LLM service initialized with model: {}", config.model);
                let model: Arc<dyn ModelClient> = Arc::new(client);
                Self::new(Some(model), config.timeout)
            }
            Err(e) => {
                warn!("Could not initialize Ollama client: {}. Will use fallback responses", e);
                Self::new(None, config.timeout)
            }
        }
    }

    pub fn model_name(&self) -> Option<String> {
        self.model.as_ref().map(|model| model.model_name())
    }

    async fn call_model(&self, template: &str, variables: PromptVariables) -> Result<String, ModelError> {
        let model = self
            .model
            .as_ref()
            .ok_or(ModelError::Unavailable)?;

        tokio::time::timeout(self.timeout, model.generate(template, &variables))
            .await
            .map_err(|_| ModelError::Timeout(self.timeout))?
    }

    pub async fn generate_itinerary(&self, request: &TripRequest) -> Itinerary {
        if self.model.is_none() {
            warn!("LLM not available, using fallback itinerary for {}", request.destination);
            return fallback_itinerary(request);
        }

        let variables = PromptVariables::from([
            ("destination", request.destination.clone()),
            ("duration", request.duration.to_string()),
            ("budget", request.budget.to_string()),
            ("interests", request.interests.join(", ")),
            ("travel_style", request.travel_style.clone()),
        ]);

        info!("Generating itinerary with AI for {}", request.destination);
        match self.call_model(ITINERARY_PROMPT, variables).await {
            Ok(text) => match extract_object::<Itinerary>(&text) {
                Some(itinerary)
                    if itinerary.is_valid()
                        && itinerary.days.len() == request.day_count() as usize =>
                {
                    info!("AI itinerary generated successfully");
                    itinerary
                }
                Some(itinerary) => {
                    warn!(
                        "AI itinerary failed validation ({} days for a {}-day trip), using fallback itinerary",
                        itinerary.days.len(),
                        request.duration
                    );
                    fallback_itinerary(request)
                }
                None => {
                    warn!("No itinerary found in model output, using fallback itinerary");
                    fallback_itinerary(request)
                }
            },
            Err(e) => {
                warn!("Error generating itinerary: {}. Using fallback itinerary", e);
                fallback_itinerary(request)
            }
        }
    }

    pub async fn activity_recommendations(
        &self,
        location: &str,
        preferences: &[String],
        weather: Option<&str>,
    ) -> Vec<ActivityRecommendation> {
        let weather_context = weather
            .filter(|weather| !weather.trim().is_empty())
            .map(|weather| format!(" considering the weather is {}", weather))
            .unwrap_or_default();

        let variables = PromptVariables::from([
            ("location", location.to_string()),
            ("preferences", preferences.join(", ")),
            ("weather_context", weather_context),
        ]);

        match self.call_model(ACTIVITY_PROMPT, variables).await {
            Ok(text) => extract_list(&text).unwrap_or_else(|| {
                warn!("No activity list found in model output for {}", location);
                Vec::new()
            }),
            Err(e) => {
                warn!("Error getting recommendations: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn restaurant_recommendations(
        &self,
        location: &str,
        cuisine: Option<&str>,
        budget_level: Option<&str>,
    ) -> Vec<ActivityRecommendation> {
        let preferences = [
            cuisine.unwrap_or("any").to_string(),
            format!("{} budget", budget_level.unwrap_or("medium")),
        ];
        self.activity_recommendations(location, &preferences, None)
            .await
    }

    pub async fn cultural_insights(&self, destination: &str) -> Option<CulturalInsights> {
        let variables = PromptVariables::from([("destination", destination.to_string())]);

        match self.call_model(CULTURAL_PROMPT, variables).await {
            Ok(text) => {
                let insights = extract_object(&text);
                if insights.is_none() {
                    warn!("No cultural insights found in model output for {}", destination);
                }
                insights
            }
            Err(e) => {
                warn!("Error generating cultural insights: {}", e);
                None
            }
        }
    }

    pub async fn optimize_budget(
        &self,
        itinerary: &serde_json::Value,
        target_budget: f64,
    ) -> Option<BudgetOptimization> {
        let variables = PromptVariables::from([
            ("current_itinerary", itinerary.to_string()),
            ("budget", target_budget.to_string()),
        ]);

        match self.call_model(BUDGET_PROMPT, variables).await {
            Ok(text) => {
                let optimization = extract_object(&text);
                if optimization.is_none() {
                    warn!("No budget optimization found in model output");
                }
                optimization
            }
            Err(e) => {
                warn!("Error optimizing budget: {}", e);
                None
            }
        }
    }

    pub async fn chat(&self, request: &ChatRequest) -> ChatResult {
        if self.model.is_none() {
            return fallback_chat_response(request);
        }

        let variables = PromptVariables::from([
            ("message", request.message.clone()),
            ("destination", request.destination().to_string()),
            ("itinerary", request.itinerary_summary()),
            ("history", request.recent_history()),
        ]);

        match self.call_model(CHAT_PROMPT, variables).await {
            Ok(text) => {
                let split = split_itinerary_update(&text);
                let itinerary_update = match split.itinerary_update {
                    Some(update) if update.is_valid() => Some(update),
                    Some(_) => {
                        warn!("Dropping itinerary update that failed validation");
                        None
                    }
                    None => None,
                };
                ChatResult {
                    response: split.response,
                    itinerary_update,
                }
            }
            Err(e) => {
                warn!("Error in chat assistant: {}", e);
                fallback_chat_response(request)
            }
        }
    }
}
