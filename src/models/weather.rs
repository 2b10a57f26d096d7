use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastQuery {
    pub destination: Option<String>,
    pub days: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Clear,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Clear,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Clear => "🌤️",
        }
    }

    pub fn is_wet(&self) -> bool {
        matches!(self, Condition::Rainy)
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct Temperature {
    pub high: i32,
    pub low: i32,
    pub unit: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct DailyForecast {
    pub date: String,
    pub condition: Condition,
    pub temperature: Temperature,
    pub precipitation: u8,
    pub humidity: u8,
    pub wind_speed: u8,
    pub icon: String,
}
