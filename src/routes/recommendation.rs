use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::activity::{ActivityRecommendationRequest, RestaurantQuery};
use crate::services::planner_service::TravelPlanner;

/*
    /api/recommendations/activities
*/
pub async fn activities(
    planner: web::Data<TravelPlanner>,
    input: web::Json<ActivityRecommendationRequest>,
) -> impl Responder {
    let ActivityRecommendationRequest {
        location,
        preferences,
        weather,
    } = input.into_inner();

    let location = match location {
        Some(location) if !location.trim().is_empty() => location,
        _ => return HttpResponse::BadRequest().json(json!({ "error": "Location is required" })),
    };

    let recommendations = planner
        .activity_recommendations(&location, &preferences, weather.as_deref())
        .await;

    HttpResponse::Ok().json(json!({
        "success": true,
        "location": location,
        "count": recommendations.len(),
        "recommendations": recommendations,
    }))
}

/*
    /api/recommendations/restaurants?location=&cuisine=&budget=
*/
pub async fn restaurants(
    planner: web::Data<TravelPlanner>,
    query: web::Query<RestaurantQuery>,
) -> impl Responder {
    let RestaurantQuery {
        location,
        cuisine,
        budget,
    } = query.into_inner();

    let location = match location {
        Some(location) if !location.trim().is_empty() => location,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": "Location parameter required" }))
        }
    };

    let restaurants = planner
        .restaurant_recommendations(&location, cuisine.as_deref(), budget.as_deref())
        .await;

    HttpResponse::Ok().json(json!({
        "success": true,
        "location": location,
        "restaurants": restaurants,
    }))
}
