use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde_json::json;

use crate::models::chat::ChatRequest;
use crate::models::insights::{BudgetOptimizationRequest, CulturalInsightsQuery};
use crate::models::search::GenerateItinerary;
use crate::services::planner_service::TravelPlanner;

/*
    /api/itinerary/generate
*/
pub async fn generate(
    planner: web::Data<TravelPlanner>,
    input: web::Json<GenerateItinerary>,
) -> impl Responder {
    let trip = match input.into_inner().into_trip_request() {
        Ok(trip) => trip,
        Err(message) => return HttpResponse::BadRequest().json(json!({ "error": message })),
    };

    info!(
        "Generating {}-day itinerary for {} (budget {})",
        trip.duration, trip.destination, trip.budget
    );
    let itinerary = planner.generate_itinerary(&trip).await;

    HttpResponse::Ok().json(json!({
        "success": true,
        "itinerary": itinerary,
        "metadata": {
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "destination": trip.destination,
            "duration": trip.duration,
        }
    }))
}

/*
    /api/itinerary/optimize-budget
*/
pub async fn optimize_budget(
    planner: web::Data<TravelPlanner>,
    input: web::Json<BudgetOptimizationRequest>,
) -> impl Responder {
    let BudgetOptimizationRequest {
        itinerary,
        target_budget,
    } = input.into_inner();

    let (itinerary, target_budget) = match (itinerary, target_budget) {
        (Some(itinerary), Some(target_budget)) => (itinerary, target_budget),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": "Missing itinerary or target_budget" }))
        }
    };

    let optimizations = planner.optimize_budget(&itinerary, target_budget).await;

    HttpResponse::Ok().json(json!({
        "success": true,
        "optimizations": optimizations.map_or_else(|| json!({}), |o| json!(o)),
    }))
}

/*
    /api/itinerary/cultural-insights?destination=
*/
pub async fn cultural_insights(
    planner: web::Data<TravelPlanner>,
    query: web::Query<CulturalInsightsQuery>,
) -> impl Responder {
    let destination = match query.into_inner().destination {
        Some(destination) if !destination.trim().is_empty() => destination,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": "Destination parameter required" }))
        }
    };

    let insights = planner.cultural_insights(&destination).await;

    HttpResponse::Ok().json(json!({
        "success": true,
        "destination": destination,
        "insights": insights.map_or_else(|| json!({}), |i| json!(i)),
    }))
}

/*
    /api/itinerary/chat
*/
pub async fn chat(
    planner: web::Data<TravelPlanner>,
    input: web::Json<serde_json::Value>,
) -> impl Responder {
    let has_message = input
        .get("message")
        .and_then(|message| message.as_str())
        .map_or(false, |message| !message.trim().is_empty());
    if !has_message {
        return HttpResponse::BadRequest().json(json!({ "error": "Message is required" }));
    }

    let request: ChatRequest = match serde_json::from_value(input.into_inner()) {
        Ok(request) => request,
        Err(err) => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": format!("Invalid chat request: {}", err) }))
        }
    };

    let result = planner.chat(&request).await;

    HttpResponse::Ok().json(json!({
        "success": true,
        "response": result.response,
        "itinerary_update": result.itinerary_update,
    }))
}
