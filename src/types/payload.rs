//! The raw Open-Meteo payload as the normalizer consumes it.
//!
//! Parsing is deliberately lenient below the top level: a value of the wrong type inside a
//! series becomes `None` (and is later gap-filled), while a missing top-level object or a
//! missing required array is a structural error.

use crate::weather_data::error::WeatherDataError;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The merged forecast (and optionally air-quality / marine) document returned by Open-Meteo.
///
/// Field names follow the upstream schema exactly, so [`RawPayload`] serializes back into a
/// document the parser accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct RawPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    pub current_weather: RawCurrent,
    pub hourly: RawHourly,
    pub daily: RawDaily,
}

/// The `current_weather` object. Every field may be absent; the normalizer then falls back to
/// the hourly series at the current hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawCurrent {
    pub time: Option<String>,
    pub temperature: Option<f64>,
    #[serde(rename = "weathercode")]
    pub weather_code: Option<f64>,
    #[serde(rename = "windspeed")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "winddirection")]
    pub wind_direction: Option<f64>,
}

/// The `hourly` object: one entry per hour, starting at local midnight of the first day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawHourly {
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<Option<f64>>,
    #[serde(rename = "cloudcover_low")]
    pub cloud_cover_low: Vec<Option<f64>>,
    #[serde(rename = "cloudcover_mid")]
    pub cloud_cover_mid: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    #[serde(rename = "windspeed_10m")]
    pub wind_speed: Vec<Option<f64>>,
    #[serde(rename = "winddirection_10m")]
    pub wind_direction: Vec<Option<f64>>,
    #[serde(rename = "relativehumidity_2m")]
    pub relative_humidity: Vec<Option<f64>>,
    #[serde(rename = "pressure_msl")]
    pub pressure: Vec<Option<f64>>,
    pub uv_index: Vec<Option<f64>>,
    #[serde(rename = "dewpoint_2m")]
    pub dew_point: Vec<Option<f64>>,
    pub is_day: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_aqi: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub european_aqi: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sea_surface_temperature: Option<Vec<Option<f64>>>,
}

/// The `daily` object: one entry per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawDaily {
    pub sunrise: Vec<Option<String>>,
    pub sunset: Vec<Option<String>>,
    #[serde(rename = "temperature_2m_max")]
    pub max_temperature: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub min_temperature: Vec<Option<f64>>,
}

impl RawPayload {
    /// Parses a payload from JSON text.
    ///
    /// # Errors
    ///
    /// * [`WeatherDataError::InvalidJson`] if the text is not JSON at all.
    /// * [`WeatherDataError::NotAnObject`] / [`WeatherDataError::MissingField`] if the
    ///   top-level structure or a required array is missing.
    pub fn from_json(json: &str) -> Result<Self, WeatherDataError> {
        let value: Value = serde_json::from_str(json).map_err(WeatherDataError::InvalidJson)?;
        Self::try_from(value)
    }

    /// Serializes the payload back into the upstream schema.
    pub fn to_json(&self) -> String {
        // Only maps with string keys, numbers and strings: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl TryFrom<Value> for RawPayload {
    type Error = WeatherDataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let root = value
            .as_object()
            .ok_or(WeatherDataError::NotAnObject("payload"))?;
        let current = section(root, "current_weather")?;
        let hourly = section(root, "hourly")?;
        let daily = section(root, "daily")?;

        Ok(RawPayload {
            latitude: root.get("latitude").and_then(Value::as_f64),
            current_weather: RawCurrent {
                time: current.get("time").and_then(Value::as_str).map(str::to_owned),
                temperature: scalar(current, "temperature"),
                weather_code: scalar(current, "weathercode"),
                wind_speed: scalar(current, "windspeed"),
                wind_direction: scalar(current, "winddirection"),
            },
            hourly: RawHourly {
                temperature: numbers(hourly, "hourly", "temperature_2m")?,
                apparent_temperature: numbers(hourly, "hourly", "apparent_temperature")?,
                weather_code: numbers(hourly, "hourly", "weathercode")?,
                cloud_cover_low: numbers(hourly, "hourly", "cloudcover_low")?,
                cloud_cover_mid: numbers(hourly, "hourly", "cloudcover_mid")?,
                precipitation: numbers(hourly, "hourly", "precipitation")?,
                precipitation_probability: numbers(hourly, "hourly", "precipitation_probability")?,
                wind_speed: numbers(hourly, "hourly", "windspeed_10m")?,
                wind_direction: numbers(hourly, "hourly", "winddirection_10m")?,
                relative_humidity: numbers(hourly, "hourly", "relativehumidity_2m")?,
                pressure: numbers(hourly, "hourly", "pressure_msl")?,
                uv_index: numbers(hourly, "hourly", "uv_index")?,
                dew_point: numbers(hourly, "hourly", "dewpoint_2m")?,
                is_day: numbers(hourly, "hourly", "is_day")?,
                us_aqi: optional_numbers(hourly, "us_aqi"),
                european_aqi: optional_numbers(hourly, "european_aqi"),
                sea_surface_temperature: optional_numbers(hourly, "sea_surface_temperature"),
            },
            daily: RawDaily {
                sunrise: strings(daily, "daily", "sunrise")?,
                sunset: strings(daily, "daily", "sunset")?,
                max_temperature: numbers(daily, "daily", "temperature_2m_max")?,
                min_temperature: numbers(daily, "daily", "temperature_2m_min")?,
            },
        })
    }
}

fn section<'a>(
    root: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Map<String, Value>, WeatherDataError> {
    match root.get(key) {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(WeatherDataError::NotAnObject(key)),
        None => Err(WeatherDataError::MissingField {
            section: "payload",
            field: key,
        }),
    }
}

fn scalar(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}

fn array<'a>(
    object: &'a Map<String, Value>,
    section: &'static str,
    key: &'static str,
) -> Result<&'a Vec<Value>, WeatherDataError> {
    object
        .get(key)
        .and_then(Value::as_array)
        .ok_or(WeatherDataError::MissingField {
            section,
            field: key,
        })
}

fn numbers(
    object: &Map<String, Value>,
    section: &'static str,
    key: &'static str,
) -> Result<Vec<Option<f64>>, WeatherDataError> {
    Ok(array(object, section, key)?
        .iter()
        .map(|value| number_or_absent(value, key))
        .collect())
}

fn optional_numbers(object: &Map<String, Value>, key: &'static str) -> Option<Vec<Option<f64>>> {
    object.get(key).and_then(Value::as_array).map(|values| {
        values
            .iter()
            .map(|value| number_or_absent(value, key))
            .collect()
    })
}

fn number_or_absent(value: &Value, key: &str) -> Option<f64> {
    match value {
        Value::Null => None,
        other => {
            let number = other.as_f64();
            if number.is_none() {
                debug!("Non-numeric value {other} in '{key}' treated as absent");
            }
            number
        }
    }
}

fn strings(
    object: &Map<String, Value>,
    section: &'static str,
    key: &'static str,
) -> Result<Vec<Option<String>>, WeatherDataError> {
    Ok(array(object, section, key)?
        .iter()
        .map(|value| value.as_str().map(str::to_owned))
        .collect())
}
