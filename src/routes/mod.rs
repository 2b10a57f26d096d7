use actix_web::web;

pub mod booking;
pub mod health;
pub mod itinerary;
pub mod recommendation;
pub mod weather;

/// Registers every endpoint under `/api`. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/itinerary")
                    .route("/generate", web::post().to(itinerary::generate))
                    .route(
                        "/optimize-budget",
                        web::post().to(itinerary::optimize_budget),
                    )
                    .route(
                        "/cultural-insights",
                        web::get().to(itinerary::cultural_insights),
                    )
                    .route("/chat", web::post().to(itinerary::chat)),
            )
            .service(
                web::scope("/recommendations")
                    .route("/activities", web::post().to(recommendation::activities))
                    .route("/restaurants", web::get().to(recommendation::restaurants)),
            )
            .service(
                web::scope("/bookings")
                    .route("/flights", web::get().to(booking::search_flights))
                    .route("/hotels", web::get().to(booking::search_hotels))
                    .route("/activities", web::get().to(booking::search_activities)),
            )
            .service(web::scope("/weather").route("/forecast", web::get().to(weather::forecast))),
    );
}
