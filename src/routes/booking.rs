use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde_json::json;

use crate::models::bookings::{DestinationQuery, FlightSearchQuery, HotelSearchQuery};
use crate::services::booking_service::{self, FlightSearch, HotelSearch};

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses an optional positive count, using `default` when the parameter is absent.
fn parse_count(raw: Option<&str>, default: u32) -> Option<u32> {
    match raw {
        None => Some(default),
        Some(raw) => raw.trim().parse::<u32>().ok().filter(|count| *count > 0),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/*
    /api/bookings/flights?origin=&destination=&departure_date=&return_date=&passengers=
*/
pub async fn search_flights(query: web::Query<FlightSearchQuery>) -> impl Responder {
    let FlightSearchQuery {
        origin,
        destination,
        departure_date,
        return_date,
        passengers,
    } = query.into_inner();

    let (origin, destination, departure_date) =
        match (present(origin), present(destination), present(departure_date)) {
            (Some(o), Some(d), Some(date)) => (o, d, date),
            _ => {
                return bad_request(
                    "Missing required parameters: origin, destination, departure_date",
                )
            }
        };

    let passengers = match parse_count(passengers.as_deref(), 1) {
        Some(passengers) => passengers,
        None => return bad_request("Invalid passenger count"),
    };

    let search = FlightSearch {
        origin,
        destination,
        departure_date,
        return_date: present(return_date),
        passengers,
    };
    let flights = booking_service::search_flights(&mut rand::thread_rng(), &search);

    HttpResponse::Ok().json(json!({
        "success": true,
        "count": flights.len(),
        "flights": flights,
        "search_params": {
            "origin": search.origin,
            "destination": search.destination,
            "departure_date": search.departure_date,
            "return_date": search.return_date,
            "passengers": search.passengers,
        }
    }))
}

/*
    /api/bookings/hotels?destination=&check_in=&check_out=&guests=&rooms=
*/
pub async fn search_hotels(query: web::Query<HotelSearchQuery>) -> impl Responder {
    let HotelSearchQuery {
        destination,
        check_in,
        check_out,
        guests,
        rooms,
    } = query.into_inner();

    let (destination, check_in, check_out) =
        match (present(destination), present(check_in), present(check_out)) {
            (Some(d), Some(i), Some(o)) => (d, i, o),
            _ => {
                return bad_request("Missing required parameters: destination, check_in, check_out")
            }
        };

    let (check_in, check_out) = match (parse_date(&check_in), parse_date(&check_out)) {
        (Some(i), Some(o)) => (i, o),
        _ => return bad_request("Invalid date format, expected YYYY-MM-DD"),
    };

    let (guests, rooms) = match (
        parse_count(guests.as_deref(), 2),
        parse_count(rooms.as_deref(), 1),
    ) {
        (Some(g), Some(r)) => (g, r),
        _ => return bad_request("Invalid guests or rooms count"),
    };

    let search = match HotelSearch::new(destination, check_in, check_out, guests, rooms) {
        Ok(search) => search,
        Err(message) => return bad_request(&message),
    };
    let hotels = booking_service::search_hotels(&mut rand::thread_rng(), &search);

    HttpResponse::Ok().json(json!({
        "success": true,
        "count": hotels.len(),
        "hotels": hotels,
        "search_params": {
            "destination": search.destination,
            "check_in": search.check_in.format("%Y-%m-%d").to_string(),
            "check_out": search.check_out.format("%Y-%m-%d").to_string(),
            "nights": search.nights(),
            "guests": search.guests,
            "rooms": search.rooms,
        }
    }))
}

/*
    /api/bookings/activities?destination=
*/
pub async fn search_activities(query: web::Query<DestinationQuery>) -> impl Responder {
    let destination = match present(query.into_inner().destination) {
        Some(destination) => destination,
        None => return bad_request("Destination parameter required"),
    };

    let activities = booking_service::activity_deals(&mut rand::thread_rng(), &destination);

    HttpResponse::Ok().json(json!({
        "success": true,
        "count": activities.len(),
        "activities": activities,
        "destination": destination,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None, 2), Some(2));
        assert_eq!(parse_count(Some("3"), 2), Some(3));
        assert_eq!(parse_count(Some("0"), 2), None);
        assert_eq!(parse_count(Some("two"), 2), None);
        assert_eq!(parse_count(Some("-1"), 2), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-06-01"), NaiveDate::from_ymd_opt(2026, 6, 1));
        assert_eq!(parse_date("06/01/2026"), None);
        assert_eq!(parse_date("2026-02-30"), None);
    }
}
