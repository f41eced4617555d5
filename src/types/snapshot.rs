//! The normalized weather model produced by [`crate::WeatherNormalizer`].

use crate::types::geo::TimezoneId;
use crate::types::weather_code::WeatherCode;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of hourly entries in a snapshot (7 days of 24 hours).
pub const HOURS: usize = 168;
/// Number of daily entries in a snapshot.
pub const DAYS: usize = 7;

/// Which variant of a weather icon fits a code at a given moment.
///
/// Only codes whose icon shows the sky (clear, mainly clear, partly cloudy and showers) have
/// separate day and night artwork; every other code uses the neutral icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconVariant {
    Neutral,
    Day,
    Night,
}

impl IconVariant {
    pub fn for_code(code: WeatherCode, is_day: bool) -> Self {
        if !code.shows_sky() {
            IconVariant::Neutral
        } else if is_day {
            IconVariant::Day
        } else {
            IconVariant::Night
        }
    }

    /// Suffix used by icon resource names (`""`, `"_day"` or `"_night"`).
    pub fn suffix(self) -> &'static str {
        match self {
            IconVariant::Neutral => "",
            IconVariant::Day => "_day",
            IconVariant::Night => "_night",
        }
    }
}

/// Conditions at the observation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub weather_code: WeatherCode,
    /// Wind speed, never negative.
    pub wind_speed: f64,
    /// Direction the wind comes from in degrees; 0 when calm.
    pub wind_direction: f64,
    /// Relative humidity in percent, 0-100.
    pub humidity: u8,
    pub precipitation: f64,
    pub pressure: f64,
    pub uv_index: u32,
    /// Combined low and mid cloud cover in percent.
    pub cloud_cover: u8,
    pub dew_point: f64,
    pub precipitation_probability: u8,
    /// US AQI, when the payload was merged with air-quality data.
    pub us_aqi: Option<u32>,
    /// European AQI, when the payload was merged with air-quality data.
    pub european_aqi: Option<u32>,
    /// Sea surface temperature; absent away from the sea.
    pub sea_temperature: Option<f64>,
    pub is_day: bool,
}

impl CurrentConditions {
    pub fn icon_variant(&self) -> IconVariant {
        IconVariant::for_code(self.weather_code, self.is_day)
    }
}

/// One hour of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyConditions {
    /// Local wall-clock time at the start of the hour.
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub weather_code: WeatherCode,
    pub cloud_cover: u8,
    pub precipitation: f64,
    pub precipitation_probability: u8,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub uv_index: u32,
    pub is_day: bool,
}

impl HourlyConditions {
    pub fn icon_variant(&self) -> IconVariant {
        IconVariant::for_code(self.weather_code, self.is_day)
    }
}

/// One day of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyConditions {
    pub date: NaiveDate,
    /// Absent on polar days and nights, or when the upstream value was a sentinel.
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
    pub max_temperature: f64,
    pub min_temperature: f64,
    /// Representative code computed from the daytime hours.
    pub weather_code: WeatherCode,
    /// Whether any hour of the representative window is daytime.
    pub is_day: bool,
}

impl DailyConditions {
    pub fn icon_variant(&self) -> IconVariant {
        IconVariant::for_code(self.weather_code, self.is_day)
    }
}

/// A normalized, immutable forecast for one location.
///
/// Built once per refresh by [`crate::WeatherNormalizer::normalize`]; the next refresh
/// produces a new snapshot rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub timezone: TimezoneId,
    pub latitude: f64,
    /// Observation time of the current conditions.
    pub observed_at: DateTime<FixedOffset>,
    pub current: CurrentConditions,
    /// Exactly [`HOURS`] entries, index `day * 24 + hour`.
    pub hourly: Vec<HourlyConditions>,
    /// Exactly [`DAYS`] entries.
    pub daily: Vec<DailyConditions>,
    pub(crate) source: String,
}

impl WeatherSnapshot {
    /// The persisted form of this snapshot: the JSON document it was normalized from.
    ///
    /// Feed it to [`crate::WeatherNormalizer::restore`] to rebuild an identical snapshot.
    pub fn to_persisted(&self) -> &str {
        &self.source
    }

    /// The hour of `day` at `hour` (0-23), if within the forecast.
    pub fn hour(&self, day: usize, hour: usize) -> Option<&HourlyConditions> {
        if hour >= 24 {
            return None;
        }
        self.hourly.get(day * 24 + hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_variant_only_distinguishes_sky_codes() {
        assert_eq!(IconVariant::for_code(WeatherCode::Clear, true), IconVariant::Day);
        assert_eq!(IconVariant::for_code(WeatherCode::PartlyCloudy, false), IconVariant::Night);
        assert_eq!(IconVariant::for_code(WeatherCode::RainShowers, false), IconVariant::Night);
        assert_eq!(IconVariant::for_code(WeatherCode::Overcast, true), IconVariant::Neutral);
        assert_eq!(IconVariant::for_code(WeatherCode::Thunderstorm, true), IconVariant::Neutral);
        assert_eq!(IconVariant::Night.suffix(), "_night");
    }
}
