use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::services::planner_service::TravelPlanner;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    message: String,
    version: String,
    model: ModelStatus,
}

#[derive(Serialize)]
struct ModelStatus {
    enabled: bool,
    name: Option<String>,
}

/// Liveness plus whether itinerary calls will reach a model or use fallbacks.
pub async fn health_check(planner: web::Data<TravelPlanner>) -> impl Responder {
    let name = planner.model_name();

    let health = HealthStatus {
        status: "healthy".to_string(),
        message: "Travel planner API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: ModelStatus {
            enabled: name.is_some(),
            name,
        },
    };

    HttpResponse::Ok().json(health)
}
