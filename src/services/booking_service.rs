//! Simulated flight, hotel and activity search.
//!
//! There is no booking backend; results are random but shaped like a real
//! provider response. Generators take the RNG as a parameter so tests can seed it.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::bookings::{
    ActivityDeal, Baggage, FlightAmenities, FlightEndpoint, FlightLeg, FlightOption, HotelLocation,
    HotelOption, HotelPolicies, HotelPrice, Price, PriceBreakdown, RoomDetails, TripType,
};

const AIRLINES: [(&str, &str); 5] = [
    ("SkyLine Airways", "SKY"),
    ("Global Wings", "GLW"),
    ("Pacific Air", "PAC"),
    ("Euro Express", "EEX"),
    ("Continental Flights", "CON"),
];

// (type, base nightly rate, stars)
const HOTEL_TYPES: [(&str, i64, u8); 6] = [
    ("Luxury Hotel", 300, 5),
    ("Boutique Hotel", 200, 4),
    ("Business Hotel", 150, 4),
    ("Budget Hotel", 80, 3),
    ("Resort", 250, 4),
    ("Apartment", 120, 4),
];

const ACTIVITY_TYPES: [&str; 8] = [
    "City Tour",
    "Food Tour",
    "Museum Visit",
    "Adventure Activity",
    "Cultural Experience",
    "Water Sports",
    "Day Trip",
    "Nightlife Experience",
];

const TAX_RATE: f64 = 0.15;

pub const MAX_STAY_NIGHTS: i64 = 30;
pub const MAX_ROOMS: u32 = 10;

#[derive(Debug, Clone)]
pub struct FlightSearch {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub passengers: u32,
}

#[derive(Debug, Clone)]
pub struct HotelSearch {
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
}

impl HotelSearch {
    /// Validates the stay before any pricing happens.
    pub fn new(
        destination: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        rooms: u32,
    ) -> Result<Self, String> {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err("check_out must be after check_in".to_string());
        }
        if nights > MAX_STAY_NIGHTS {
            return Err(format!("Stays are limited to {} nights", MAX_STAY_NIGHTS));
        }
        if rooms > MAX_ROOMS {
            return Err(format!("At most {} rooms can be booked at once", MAX_ROOMS));
        }

        Ok(Self {
            destination,
            check_in,
            check_out,
            guests,
            rooms,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Flight duration as (hours, minutes).
fn estimate_duration<R: Rng>(rng: &mut R) -> (u32, u32) {
    let hours = rng.gen_range(2..=12);
    let minutes = *[0, 15, 30, 45].choose(rng).unwrap_or(&0);
    (hours, minutes)
}

fn format_duration((hours, minutes): (u32, u32)) -> String {
    if minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}h", hours)
    }
}

fn random_time<R: Rng>(rng: &mut R) -> (u32, u32) {
    let hour = rng.gen_range(0..=23);
    let minute = *[0, 15, 30, 45].choose(rng).unwrap_or(&0);
    (hour, minute)
}

/// Adds a duration to a clock time, wrapping past midnight.
pub fn add_duration((hour, minute): (u32, u32), (hours, minutes): (u32, u32)) -> (u32, u32) {
    let total = hour * 60 + minute + hours * 60 + minutes;
    ((total / 60) % 24, total % 60)
}

fn clock((hour, minute): (u32, u32)) -> String {
    format!("{:02}:{:02}", hour, minute)
}

fn flight_leg<R: Rng>(rng: &mut R, from: &str, to: &str, date: &str, airline_code: &str) -> FlightLeg {
    let duration = estimate_duration(rng);
    let departure = random_time(rng);
    let arrival = add_duration(departure, duration);

    FlightLeg {
        departure: FlightEndpoint {
            airport: from.to_string(),
            time: format!("{}T{}", date, clock(departure)),
            terminal: format!("Terminal {}", rng.gen_range(1..=4)),
        },
        arrival: FlightEndpoint {
            airport: to.to_string(),
            time: format!("{}T{}", date, clock(arrival)),
            terminal: format!("Terminal {}", rng.gen_range(1..=4)),
        },
        duration: format_duration(duration),
        // mostly direct
        stops: *[0, 0, 0, 1].choose(rng).unwrap_or(&0),
        flight_number: format!("{}{}", airline_code, rng.gen_range(100..=999)),
    }
}

pub fn search_flights<R: Rng>(rng: &mut R, search: &FlightSearch) -> Vec<FlightOption> {
    let base_price: i64 = rng.gen_range(200..=800);

    let mut flights: Vec<FlightOption> = AIRLINES
        .iter()
        .enumerate()
        .map(|(i, (name, code))| {
            let outbound = flight_leg(rng, &search.origin, &search.destination, &search.departure_date, code);
            let return_leg = search
                .return_date
                .as_ref()
                .map(|date| flight_leg(rng, &search.destination, &search.origin, date, code));

            FlightOption {
                id: format!("flight_{}", i + 1),
                trip_type: if return_leg.is_some() { TripType::RoundTrip } else { TripType::OneWay },
                airline: name.to_string(),
                airline_code: code.to_string(),
                outbound,
                return_leg,
                price: Price {
                    amount: base_price + rng.gen_range(-100..=300) + i as i64 * 50,
                    currency: "USD".to_string(),
                    per_person: true,
                },
                amenities: FlightAmenities {
                    wifi: rng.gen_bool(0.5),
                    meals: rng.gen_bool(2.0 / 3.0),
                    entertainment: rng.gen_bool(2.0 / 3.0),
                    power_outlets: rng.gen_bool(0.5),
                },
                baggage: Baggage {
                    carry_on: "1 bag included".to_string(),
                    checked: if i < 3 {
                        format!("{} bag(s) included", rng.gen_range(1..=2))
                    } else {
                        "Additional fee".to_string()
                    },
                },
                class: ["Economy", "Economy", "Premium Economy"]
                    .choose(rng)
                    .unwrap_or(&"Economy")
                    .to_string(),
                rating: (rng.gen_range(3.5..=5.0_f64) * 10.0).round() / 10.0,
                reviews: rng.gen_range(100..=5000),
            }
        })
        .collect();

    flights.sort_by_key(|flight| flight.price.amount);
    flights
}

fn hotel_amenities(stars: u8) -> Vec<String> {
    let mut amenities = vec!["Free WiFi", "Air Conditioning", "24-hour Front Desk"];
    if stars >= 3 {
        amenities.extend(["Restaurant", "Room Service", "Parking"]);
    }
    if stars >= 4 {
        amenities.extend(["Fitness Center", "Pool", "Bar", "Concierge"]);
    }
    if stars >= 5 {
        amenities.extend(["Spa", "Airport Shuttle", "Business Center", "Valet Parking"]);
    }
    amenities.into_iter().map(String::from).collect()
}

fn hotel_name<R: Rng>(rng: &mut R, destination: &str, hotel_type: &str) -> String {
    const PREFIXES: [&str; 7] = ["The", "Grand", "Royal", "Plaza", "Sunset", "Harbor", "Garden"];
    const SUFFIXES: [&str; 5] = ["Hotel", "Resort", "Inn", "Suites", "Lodge"];

    let prefix = PREFIXES.choose(rng).unwrap_or(&"The");
    if hotel_type.contains("Apartment") {
        format!("{} City Apartments", destination)
    } else if hotel_type.contains("Boutique") {
        format!("{} {} Boutique", prefix, destination)
    } else {
        format!("{} {} {}", prefix, destination, SUFFIXES.choose(rng).unwrap_or(&"Hotel"))
    }
}

fn hotel_highlights<R: Rng>(rng: &mut R, stars: u8) -> Vec<String> {
    let mut highlights = vec!["Recently renovated", "Great location"];
    if stars >= 4 {
        highlights.extend(["Excellent breakfast", "Rooftop terrace"]);
    }
    if stars >= 5 {
        highlights.extend(["Award-winning restaurant", "Luxury amenities"]);
    }
    let count = highlights.len().min(3);
    highlights
        .choose_multiple(rng, count)
        .map(|highlight| highlight.to_string())
        .collect()
}

pub fn search_hotels<R: Rng>(rng: &mut R, search: &HotelSearch) -> Vec<HotelOption> {
    let nights = search.nights();

    let mut hotels: Vec<HotelOption> = HOTEL_TYPES
        .iter()
        .enumerate()
        .map(|(i, (hotel_type, base_rate, stars))| {
            let nightly_rate = base_rate + rng.gen_range(-30..=50);
            let total = nightly_rate
                .saturating_mul(nights)
                .saturating_mul(i64::from(search.rooms));

            HotelOption {
                id: format!("hotel_{}", i + 1),
                name: hotel_name(rng, &search.destination, hotel_type),
                hotel_type: hotel_type.to_string(),
                rating: *stars,
                review_score: (rng.gen_range(7.0..=9.5_f64) * 10.0).round() / 10.0,
                review_count: rng.gen_range(200..=5000),
                location: HotelLocation {
                    address: format!("{} {} Street", rng.gen_range(1..=999), search.destination),
                    district: ["Downtown", "City Center", "Waterfront", "Historic District"]
                        .choose(rng)
                        .unwrap_or(&"Downtown")
                        .to_string(),
                    distance_to_center: format!("{:.1} km", rng.gen_range(0.5..=3.5_f64)),
                },
                images: (1..=3)
                    .map(|n| format!("https://placeholder.com/hotel{}_{}.jpg", i + 1, n))
                    .collect(),
                price: HotelPrice {
                    nightly_rate,
                    total,
                    currency: "USD".to_string(),
                    taxes_included: false,
                    breakdown: PriceBreakdown {
                        base_price: total as f64 * (1.0 - TAX_RATE),
                        taxes: total as f64 * TAX_RATE,
                    },
                },
                rooms_available: rng.gen_range(1..=10),
                amenities: hotel_amenities(*stars),
                room_details: RoomDetails {
                    room_type: ["Standard Room", "Deluxe Room", "Suite"]
                        .choose(rng)
                        .unwrap_or(&"Standard Room")
                        .to_string(),
                    size: format!("{} m²", rng.gen_range(20..=50)),
                    bed_type: ["King Bed", "Queen Bed", "2 Twin Beds"]
                        .choose(rng)
                        .unwrap_or(&"King Bed")
                        .to_string(),
                    max_guests: search.guests,
                },
                policies: HotelPolicies {
                    check_in: "3:00 PM".to_string(),
                    check_out: "11:00 AM".to_string(),
                    cancellation: if i < 4 {
                        "Free cancellation until 24 hours before check-in".to_string()
                    } else {
                        "Non-refundable".to_string()
                    },
                    pets: rng.gen_bool(0.5),
                },
                highlights: hotel_highlights(rng, *stars),
            }
        })
        .collect();

    // best rated first, then cheapest
    hotels.sort_by(|a, b| b.rating.cmp(&a.rating).then(a.price.total.cmp(&b.price.total)));
    hotels
}

pub fn activity_deals<R: Rng>(rng: &mut R, destination: &str) -> Vec<ActivityDeal> {
    ACTIVITY_TYPES
        .iter()
        .enumerate()
        .map(|(i, activity_type)| {
            let mut includes = vec!["Professional guide".to_string()];
            if rng.gen_bool(0.5) {
                includes.push("Transportation".to_string());
            }
            if rng.gen_bool(0.5) {
                includes.push("Meals".to_string());
            }
            includes.push("Entry tickets".to_string());

            ActivityDeal {
                id: format!("activity_{}", i + 1),
                name: format!("{} {}", destination, activity_type),
                activity_type: activity_type.to_string(),
                description: format!(
                    "Experience the best of {} with this {}",
                    destination,
                    activity_type.to_lowercase()
                ),
                duration: format!("{} hours", rng.gen_range(2..=8)),
                price: rng.gen_range(30..=200),
                currency: "USD".to_string(),
                rating: (rng.gen_range(4.0..=5.0_f64) * 10.0).round() / 10.0,
                reviews: rng.gen_range(50..=1000),
                includes,
                availability: "Daily".to_string(),
                group_size: format!("Up to {} people", rng.gen_range(10..=30)),
                languages: vec![
                    "English".to_string(),
                    ["Spanish", "French", "German", "Italian"]
                        .choose(rng)
                        .unwrap_or(&"Spanish")
                        .to_string(),
                ],
            }
        })
        .collect()
}
