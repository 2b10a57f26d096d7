//! Simulated weather forecasts. No weather provider is wired in yet.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::weather::{Condition, DailyForecast, Temperature};

pub const DEFAULT_FORECAST_DAYS: u32 = 7;
pub const MAX_FORECAST_DAYS: u32 = 14;

/// Clamps a requested forecast length to the supported window.
pub fn forecast_days(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_FORECAST_DAYS)
        .min(MAX_FORECAST_DAYS)
}

pub fn forecast<R: Rng>(rng: &mut R, start: NaiveDate, days: u32) -> Vec<DailyForecast> {
    (0..days)
        .map(|offset| {
            let condition = *Condition::ALL.choose(rng).unwrap_or(&Condition::Clear);
            let precipitation = if condition.is_wet() {
                rng.gen_range(0..=80)
            } else {
                rng.gen_range(0..=20)
            };

            DailyForecast {
                date: (start + Duration::days(offset as i64))
                    .format("%Y-%m-%d")
                    .to_string(),
                condition,
                temperature: Temperature {
                    high: rng.gen_range(20..=30),
                    low: rng.gen_range(10..=20),
                    unit: "C".to_string(),
                },
                precipitation,
                humidity: rng.gen_range(40..=80),
                wind_speed: rng.gen_range(5..=25),
                icon: condition.icon().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_forecast_days_default_and_cap() {
        assert_eq!(forecast_days(None), 7);
        assert_eq!(forecast_days(Some(3)), 3);
        assert_eq!(forecast_days(Some(30)), 14);
        assert_eq!(forecast_days(Some(0)), 0);
    }

    #[test]
    fn test_forecast_shape() {
        let start = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        let days = forecast(&mut StdRng::seed_from_u64(42), start, 5);

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].date, "2026-12-30");
        assert_eq!(days[2].date, "2027-01-01");
        for day in &days {
            assert!((20..=30).contains(&day.temperature.high));
            assert!((10..=20).contains(&day.temperature.low));
            assert!(day.precipitation <= 80);
            if !day.condition.is_wet() {
                assert!(day.precipitation <= 20);
            }
            assert_eq!(day.icon, day.condition.icon());
        }
    }

    #[test]
    fn test_condition_serializes_display_name() {
        let value = serde_json::to_value(Condition::PartlyCloudy).unwrap();
        assert_eq!(value, "Partly Cloudy");
    }
}
