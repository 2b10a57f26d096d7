use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct FlightSearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub passengers: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HotelSearchQuery {
    pub destination: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<String>,
    pub rooms: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DestinationQuery {
    pub destination: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    RoundTrip,
    OneWay,
}

#[derive(Debug, Serialize, Clone)]
pub struct FlightEndpoint {
    pub airport: String,
    pub time: String,
    pub terminal: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct FlightLeg {
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
    pub stops: u8,
    pub flight_number: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct Price {
    pub amount: i64,
    pub currency: String,
    pub per_person: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct FlightAmenities {
    pub wifi: bool,
    pub meals: bool,
    pub entertainment: bool,
    pub power_outlets: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct Baggage {
    pub carry_on: String,
    pub checked: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct FlightOption {
    pub id: String,
    #[serde(rename = "type")]
    pub trip_type: TripType,
    pub airline: String,
    pub airline_code: String,
    pub outbound: FlightLeg,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_leg: Option<FlightLeg>,
    pub price: Price,
    pub amenities: FlightAmenities,
    pub baggage: Baggage,
    pub class: String,
    pub rating: f64,
    pub reviews: u32,
}

#[derive(Debug, Serialize, Clone)]
pub struct HotelLocation {
    pub address: String,
    pub district: String,
    pub distance_to_center: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub taxes: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct HotelPrice {
    pub nightly_rate: i64,
    pub total: i64,
    pub currency: String,
    pub taxes_included: bool,
    pub breakdown: PriceBreakdown,
}

#[derive(Debug, Serialize, Clone)]
pub struct RoomDetails {
    #[serde(rename = "type")]
    pub room_type: String,
    pub size: String,
    pub bed_type: String,
    pub max_guests: u32,
}

#[derive(Debug, Serialize, Clone)]
pub struct HotelPolicies {
    pub check_in: String,
    pub check_out: String,
    pub cancellation: String,
    pub pets: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct HotelOption {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub hotel_type: String,
    pub rating: u8,
    pub review_score: f64,
    pub review_count: u32,
    pub location: HotelLocation,
    pub images: Vec<String>,
    pub price: HotelPrice,
    pub rooms_available: u32,
    pub amenities: Vec<String>,
    pub room_details: RoomDetails,
    pub policies: HotelPolicies,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ActivityDeal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub duration: String,
    pub price: i64,
    pub currency: String,
    pub rating: f64,
    pub reviews: u32,
    pub includes: Vec<String>,
    pub availability: String,
    pub group_size: String,
    pub languages: Vec<String>,
}
