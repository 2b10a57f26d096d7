use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::weather::ForecastQuery;
use crate::services::weather_service;

/*
    /api/weather/forecast?destination=&days=
*/
pub async fn forecast(query: web::Query<ForecastQuery>) -> impl Responder {
    let ForecastQuery { destination, days } = query.into_inner();

    let destination = match destination.filter(|d| !d.trim().is_empty()) {
        Some(destination) => destination,
        None => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": "Destination parameter required" }))
        }
    };

    let requested = match days.as_deref().map(|raw| raw.trim().parse::<u32>()) {
        None => None,
        Some(Ok(days)) => Some(days),
        Some(Err(_)) => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid days parameter" }))
        }
    };

    let today = chrono::Local::now().date_naive();
    let forecast = weather_service::forecast(
        &mut rand::thread_rng(),
        today,
        weather_service::forecast_days(requested),
    );

    HttpResponse::Ok().json(json!({
        "success": true,
        "destination": destination,
        "forecast": forecast,
    }))
}
