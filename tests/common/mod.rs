#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App};
use actix_cors::Cors;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wanderguide_api::routes;
use wanderguide_api::services::llm_client::{render_prompt, ModelClient, ModelError, PromptVariables};
use wanderguide_api::services::planner_service::TravelPlanner;

/// Model double that answers every prompt with the same scripted reply.
pub struct FakeModel {
    reply: Result<String, u16>,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for FakeModel {
    async fn generate(&self, template: &str, variables: &PromptVariables) -> Result<String, ModelError> {
        let prompt = render_prompt(template, variables)?;
        self.prompts.lock().unwrap().push(prompt);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ModelError::Status {
                status: *status,
                body: "model unavailable".to_string(),
            }),
        }
    }

    fn model_name(&self) -> String {
        "fake-model".to_string()
    }
}

pub struct TestApp {
    pub planner: web::Data<TravelPlanner>,
}

impl TestApp {
    /// No model configured: every generative endpoint serves fallbacks.
    pub fn offline() -> Self {
        Self {
            planner: web::Data::new(TravelPlanner::new(None, Duration::from_secs(1))),
        }
    }

    pub fn with_model(model: Arc<FakeModel>) -> Self {
        let model: Arc<dyn ModelClient> = model;
        Self {
            planner: web::Data::new(TravelPlanner::new(Some(model), Duration::from_secs(1))),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.planner.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub fn itinerary_json(days: u32) -> serde_json::Value {
    let plans: Vec<serde_json::Value> = (1..=days)
        .map(|day| {
            serde_json::json!({
                "day": day,
                "title": format!("Day {} in Kyoto", day),
                "morning": "Fushimi Inari at sunrise",
                "afternoon": "Nishiki Market",
                "evening": "Gion walk",
                "estimated_cost": 150.0,
                "tips": "Carry cash"
            })
        })
        .collect();

    serde_json::json!({
        "itinerary": plans,
        "overview": "Temples and food",
        "total_estimated_cost": 150.0 * days as f64,
        "packing_suggestions": ["Slip-on shoes"],
        "cultural_tips": ["Bow when greeting"]
    })
}
