use serde::{Deserialize, Serialize};

use super::itinerary::{TripRequest, MAX_TRIP_DAYS};

/// Raw body of an itinerary generation request, before required fields are checked.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GenerateItinerary {
    pub destination: Option<String>,
    pub duration: Option<i64>,
    pub budget: Option<f64>,
    pub interests: Option<Vec<String>>,
    pub travel_style: Option<String>,
    pub travelers: Option<u32>,
}

impl GenerateItinerary {
    pub fn into_trip_request(self) -> Result<TripRequest, String> {
        let destination = self
            .destination
            .filter(|destination| !destination.trim().is_empty())
            .ok_or("Missing required field: destination")?;
        let duration = self.duration.ok_or("Missing required field: duration")?;
        let budget = self.budget.ok_or("Missing required field: budget")?;

        if duration <= 0 {
            return Err("Duration must be a positive number of days".to_string());
        }
        if duration > MAX_TRIP_DAYS {
            return Err(format!("Duration must be at most {} days", MAX_TRIP_DAYS));
        }
        if budget < 0.0 {
            return Err("Budget must not be negative".to_string());
        }

        let mut request = TripRequest::new(destination, duration, budget)
            .with_interests(self.interests.unwrap_or_default());
        if let Some(style) = self.travel_style {
            request.travel_style = style;
        }
        Ok(request)
    }
}
