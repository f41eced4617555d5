//! Turns a raw Open-Meteo payload into a [`WeatherSnapshot`].

use crate::types::geo::TimezoneId;
use crate::types::payload::RawPayload;
use crate::types::snapshot::{
    CurrentConditions, DailyConditions, HourlyConditions, WeatherSnapshot, DAYS, HOURS,
};
use crate::weather_data::code_correction::{corrected_code, total_cloud_cover};
use crate::weather_data::daily_code::{
    combined_weather_code, representative_window, DEFAULT_DAYTIME_WINDOW,
};
use crate::weather_data::date_parse::{localize, parse_or_absent, DEFAULT_SENTINEL_CUTOFF_YEAR};
use crate::weather_data::day_night::is_day;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::gap_fill::{fill_optional_series, fill_series};
use bon::bon;
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use chrono_tz::Tz;
use log::{debug, info};

/// Normalizes Open-Meteo forecasts for one location.
///
/// The normalizer is a pure function of its configuration and the payload: it holds no state
/// between calls, so one instance can be shared freely across threads.
///
/// # Examples
///
/// ```no_run
/// use chrono::Utc;
/// use meteocore::{WeatherDataError, WeatherNormalizer};
///
/// # fn run(json: &str) -> Result<(), WeatherDataError> {
/// let normalizer = WeatherNormalizer::builder()
///     .timezone("Europe/Stockholm")
///     .reference_instant(Utc::now())
///     .latitude(59.33)
///     .build()?;
///
/// let snapshot = normalizer.normalize_json(json)?;
/// println!("Today: {}", snapshot.daily[0].weather_code);
///
/// // Later, from storage:
/// let restored = normalizer.restore(snapshot.to_persisted())?;
/// assert_eq!(restored, snapshot);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherNormalizer {
    timezone_id: TimezoneId,
    timezone: Tz,
    reference_instant: DateTime<Utc>,
    latitude: Option<f64>,
    daytime_window: (u32, u32),
    sentinel_cutoff_year: i32,
}

/// The hourly series after gap-filling, each exactly [`HOURS`] long.
struct FilledHourly {
    temperature: Vec<f64>,
    apparent_temperature: Vec<f64>,
    weather_code: Vec<f64>,
    cloud_cover_low: Vec<f64>,
    cloud_cover_mid: Vec<f64>,
    precipitation: Vec<f64>,
    precipitation_probability: Vec<f64>,
    wind_speed: Vec<f64>,
    wind_direction: Option<Vec<f64>>,
    relative_humidity: Vec<f64>,
    pressure: Vec<f64>,
    uv_index: Vec<f64>,
    dew_point: Vec<f64>,
    is_day: Option<Vec<f64>>,
    us_aqi: Option<Vec<f64>>,
    european_aqi: Option<Vec<f64>>,
    sea_surface_temperature: Option<Vec<f64>>,
}

impl FilledHourly {
    fn from_raw(raw: &RawPayload) -> Result<Self, WeatherDataError> {
        let hourly = &raw.hourly;
        Ok(FilledHourly {
            temperature: fill_series(&hourly.temperature, HOURS, "temperature_2m")?,
            apparent_temperature: fill_series(
                &hourly.apparent_temperature,
                HOURS,
                "apparent_temperature",
            )?,
            weather_code: fill_series(&hourly.weather_code, HOURS, "weathercode")?,
            cloud_cover_low: fill_series(&hourly.cloud_cover_low, HOURS, "cloudcover_low")?,
            cloud_cover_mid: fill_series(&hourly.cloud_cover_mid, HOURS, "cloudcover_mid")?,
            precipitation: fill_series(&hourly.precipitation, HOURS, "precipitation")?,
            precipitation_probability: fill_series(
                &hourly.precipitation_probability,
                HOURS,
                "precipitation_probability",
            )?,
            wind_speed: fill_series(&hourly.wind_speed, HOURS, "windspeed_10m")?,
            // Upstream omits the direction when there is no wind, so a calm week has none.
            wind_direction: allow_empty(fill_series(
                &hourly.wind_direction,
                HOURS,
                "winddirection_10m",
            ))?,
            relative_humidity: fill_series(
                &hourly.relative_humidity,
                HOURS,
                "relativehumidity_2m",
            )?,
            pressure: fill_series(&hourly.pressure, HOURS, "pressure_msl")?,
            uv_index: fill_series(&hourly.uv_index, HOURS, "uv_index")?,
            dew_point: fill_series(&hourly.dew_point, HOURS, "dewpoint_2m")?,
            is_day: allow_empty(fill_series(&hourly.is_day, HOURS, "is_day"))?,
            us_aqi: fill_optional_series(hourly.us_aqi.as_deref(), HOURS),
            european_aqi: fill_optional_series(hourly.european_aqi.as_deref(), HOURS),
            sea_surface_temperature: fill_optional_series(
                hourly.sea_surface_temperature.as_deref(),
                HOURS,
            ),
        })
    }

    fn cloud_cover(&self, index: usize) -> u8 {
        total_cloud_cover(
            self.cloud_cover_low[index] as i32,
            self.cloud_cover_mid[index] as i32,
        )
    }

    fn precipitation(&self, index: usize) -> f64 {
        self.precipitation[index].max(0.0)
    }

    fn wind_direction(&self, index: usize, wind_speed: f64) -> f64 {
        if wind_speed == 0.0 {
            return 0.0;
        }
        self.wind_direction
            .as_ref()
            .map_or(0.0, |directions| directions[index])
    }
}

/// Treats an all-null series as absent while keeping every other error.
fn allow_empty(
    filled: Result<Vec<f64>, WeatherDataError>,
) -> Result<Option<Vec<f64>>, WeatherDataError> {
    match filled {
        Ok(values) => Ok(Some(values)),
        Err(WeatherDataError::EmptySeries { field }) => {
            debug!("Series '{field}' is entirely null");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn non_negative_index(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

#[bon]
impl WeatherNormalizer {
    /// Creates a normalizer for one location.
    ///
    /// # Arguments
    ///
    /// * `.timezone(..)`: **Required.** IANA name of the location's timezone, the one the
    ///   payload's local timestamps are expressed in (usually from [`crate::resolve`]).
    /// * `.reference_instant(DateTime<Utc>)`: **Required.** Used as the observation time when
    ///   the payload carries none (or an unparsable one).
    /// * `.latitude(f64)`: Latitude for polar day/night decisions. Defaults to the payload's
    ///   `latitude`, then to the equator.
    /// * `.daytime_window((u32, u32))`: Local hours `[start, end)` that decide a day's
    ///   representative code. Defaults to `(10, 20)`.
    /// * `.sentinel_cutoff_year(i32)`: Dates before this year are treated as absent. Defaults
    ///   to 2000.
    ///
    /// # Errors
    ///
    /// * [`WeatherDataError::UnknownTimezone`] if `timezone` is not in the tz database.
    /// * [`WeatherDataError::InvalidDaytimeWindow`] if the window is empty or ends after 24.
    #[builder]
    pub fn new(
        #[builder(into)] timezone: TimezoneId,
        reference_instant: DateTime<Utc>,
        latitude: Option<f64>,
        daytime_window: Option<(u32, u32)>,
        sentinel_cutoff_year: Option<i32>,
    ) -> Result<Self, WeatherDataError> {
        let tz: Tz = timezone
            .as_str()
            .parse()
            .map_err(|_| WeatherDataError::UnknownTimezone(timezone.to_string()))?;
        let daytime_window = daytime_window.unwrap_or(DEFAULT_DAYTIME_WINDOW);
        let (start, end) = daytime_window;
        if start >= end || end > 24 {
            return Err(WeatherDataError::InvalidDaytimeWindow { start, end });
        }
        Ok(WeatherNormalizer {
            timezone_id: timezone,
            timezone: tz,
            reference_instant,
            latitude,
            daytime_window,
            sentinel_cutoff_year: sentinel_cutoff_year.unwrap_or(DEFAULT_SENTINEL_CUTOFF_YEAR),
        })
    }

    /// Normalizes an already parsed payload.
    ///
    /// The snapshot's persisted form is the payload re-serialized in the upstream schema.
    ///
    /// # Errors
    ///
    /// Structural problems only: a required series that is too short
    /// ([`WeatherDataError::SeriesTooShort`]) or entirely null
    /// ([`WeatherDataError::EmptySeries`]). Unparsable dates and malformed values inside a
    /// series are recovered.
    pub fn normalize(&self, raw: &RawPayload) -> Result<WeatherSnapshot, WeatherDataError> {
        self.build_snapshot(raw, raw.to_json())
    }

    /// Parses and normalizes a payload given as JSON text.
    ///
    /// # Errors
    ///
    /// Everything [`RawPayload::from_json`] and [`WeatherNormalizer::normalize`] report.
    pub fn normalize_json(&self, json: &str) -> Result<WeatherSnapshot, WeatherDataError> {
        let raw = RawPayload::from_json(json)?;
        self.build_snapshot(&raw, json.to_string())
    }

    /// Rebuilds a snapshot from [`WeatherSnapshot::to_persisted`].
    ///
    /// With the same normalizer configuration the result equals the original snapshot.
    pub fn restore(&self, persisted: &str) -> Result<WeatherSnapshot, WeatherDataError> {
        self.normalize_json(persisted)
    }

    pub fn timezone(&self) -> &TimezoneId {
        &self.timezone_id
    }

    fn build_snapshot(
        &self,
        raw: &RawPayload,
        source: String,
    ) -> Result<WeatherSnapshot, WeatherDataError> {
        let tz = self.timezone;
        let cutoff = self.sentinel_cutoff_year;
        let latitude = self.latitude.or(raw.latitude).unwrap_or(0.0);

        let now = parse_or_absent(raw.current_weather.time.as_deref(), tz, cutoff)
            .unwrap_or_else(|| {
                debug!("No usable observation time, using the reference instant");
                self.reference_instant.with_timezone(&tz)
            });
        let current_hour = now.hour();
        info!(
            "Normalizing forecast for {} observed at {}",
            self.timezone_id,
            now.naive_local()
        );

        let filled = FilledHourly::from_raw(raw)?;
        for (field, series) in [
            ("sunrise", &raw.daily.sunrise),
            ("sunset", &raw.daily.sunset),
        ] {
            if series.len() < DAYS {
                return Err(WeatherDataError::SeriesTooShort {
                    field,
                    expected: DAYS,
                    found: series.len(),
                });
            }
        }
        let max_temperature = fill_series(&raw.daily.max_temperature, DAYS, "temperature_2m_max")?;
        let min_temperature = fill_series(&raw.daily.min_temperature, DAYS, "temperature_2m_min")?;
        let sunrises: Vec<_> = raw.daily.sunrise[..DAYS]
            .iter()
            .map(|value| parse_or_absent(value.as_deref(), tz, cutoff))
            .collect();
        let sunsets: Vec<_> = raw.daily.sunset[..DAYS]
            .iter()
            .map(|value| parse_or_absent(value.as_deref(), tz, cutoff))
            .collect();

        let first_hour = now.date_naive().and_time(NaiveTime::MIN);
        let hourly: Vec<HourlyConditions> = (0..HOURS)
            .map(|i| {
                let time = first_hour + TimeDelta::hours(i as i64);
                let cloud_cover = filled.cloud_cover(i);
                let precipitation = filled.precipitation(i);
                let wind_speed = filled.wind_speed[i].max(0.0);
                let day = i / 24;
                let is_day = match &filled.is_day {
                    Some(flags) => flags[i] != 0.0,
                    None => self.sun_is_up(
                        &time,
                        sunrises[day].as_ref(),
                        sunsets[day].as_ref(),
                        latitude,
                    ),
                };
                HourlyConditions {
                    time,
                    temperature: filled.temperature[i],
                    weather_code: corrected_code(
                        filled.weather_code[i] as i64,
                        cloud_cover,
                        precipitation,
                    ),
                    cloud_cover,
                    precipitation,
                    precipitation_probability: percent(filled.precipitation_probability[i]),
                    wind_speed,
                    wind_direction: filled.wind_direction(i, wind_speed),
                    uv_index: non_negative_index(filled.uv_index[i]),
                    is_day,
                }
            })
            .collect();

        let daily: Vec<DailyConditions> = (0..DAYS)
            .map(|d| {
                let window = representative_window(d, current_hour, self.daytime_window);
                let hours = &hourly[window];
                let codes: Vec<_> = hours.iter().map(|h| h.weather_code).collect();
                DailyConditions {
                    date: first_hour.date() + TimeDelta::days(d as i64),
                    sunrise: sunrises[d].map(|t| t.fixed_offset()),
                    sunset: sunsets[d].map(|t| t.fixed_offset()),
                    max_temperature: max_temperature[d],
                    min_temperature: min_temperature[d],
                    weather_code: combined_weather_code(&codes),
                    is_day: hours.iter().any(|h| h.is_day),
                }
            })
            .collect();

        let h = current_hour as usize;
        let current_weather = &raw.current_weather;
        let cloud_cover = filled.cloud_cover(h);
        let precipitation = filled.precipitation(h);
        let raw_code = current_weather
            .weather_code
            .unwrap_or(filled.weather_code[h]);
        let wind_speed = current_weather
            .wind_speed
            .unwrap_or(filled.wind_speed[h])
            .max(0.0);
        let wind_direction = match current_weather.wind_direction {
            Some(direction) if wind_speed != 0.0 => direction,
            _ => filled.wind_direction(h, wind_speed),
        };
        let current = CurrentConditions {
            temperature: current_weather
                .temperature
                .unwrap_or(filled.temperature[h]),
            apparent_temperature: filled.apparent_temperature[h],
            weather_code: corrected_code(raw_code as i64, cloud_cover, precipitation),
            wind_speed,
            wind_direction,
            humidity: percent(filled.relative_humidity[h]),
            precipitation,
            pressure: filled.pressure[h].max(0.0),
            uv_index: non_negative_index(filled.uv_index[h]),
            cloud_cover,
            dew_point: filled.dew_point[h],
            precipitation_probability: percent(filled.precipitation_probability[h]),
            us_aqi: filled.us_aqi.as_ref().map(|v| non_negative_index(v[h])),
            european_aqi: filled.european_aqi.as_ref().map(|v| non_negative_index(v[h])),
            sea_temperature: filled.sea_surface_temperature.as_ref().map(|v| v[h]),
            is_day: is_day(&now, sunrises[0].as_ref(), sunsets[0].as_ref(), latitude),
        };

        Ok(WeatherSnapshot {
            timezone: self.timezone_id.clone(),
            latitude,
            observed_at: now.fixed_offset(),
            current,
            hourly,
            daily,
            source,
        })
    }

    /// Sun-based day flag for an hour, used when the upstream `is_day` series is unusable.
    fn sun_is_up(
        &self,
        time: &NaiveDateTime,
        sunrise: Option<&DateTime<Tz>>,
        sunset: Option<&DateTime<Tz>>,
        latitude: f64,
    ) -> bool {
        match localize(time, self.timezone) {
            Some(instant) => is_day(&instant, sunrise, sunset, latitude),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather_code::WeatherCode;
    use crate::weather_data::test_support::{sample_payload, sample_payload_json, SAMPLE_TIMEZONE};
    use chrono::{NaiveDate, TimeZone};
    use serde_json::Value;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap()
    }

    fn normalizer() -> WeatherNormalizer {
        WeatherNormalizer::builder()
            .timezone(SAMPLE_TIMEZONE)
            .reference_instant(reference())
            .build()
            .unwrap()
    }

    fn normalize_value(value: Value) -> Result<WeatherSnapshot, WeatherDataError> {
        normalizer().normalize_json(&value.to_string())
    }

    #[test]
    fn sample_current_conditions() {
        let snapshot = normalizer().normalize_json(&sample_payload_json()).unwrap();
        let current = &snapshot.current;
        assert_eq!(snapshot.latitude, 59.33);
        assert_eq!(snapshot.observed_at.naive_local().hour(), 12);
        assert_eq!(snapshot.observed_at.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(current.temperature, 21.4);
        assert_eq!(current.weather_code, WeatherCode::MainlyClear);
        assert_eq!(current.cloud_cover, 44);
        assert_eq!(current.wind_direction, 230.0);
        assert_eq!(current.humidity, 72);
        assert_eq!(current.uv_index, 6);
        assert_eq!(current.us_aqi, Some(42));
        assert_eq!(current.european_aqi, Some(27));
        assert_eq!(current.sea_temperature, Some(14.2));
        assert!(current.is_day);
    }

    #[test]
    fn sample_daily_codes() {
        let snapshot = normalizer().normalize_json(&sample_payload_json()).unwrap();
        let codes: Vec<WeatherCode> = snapshot.daily.iter().map(|d| d.weather_code).collect();
        assert_eq!(
            codes,
            vec![
                WeatherCode::MainlyClear,
                WeatherCode::LightRain,
                WeatherCode::Thunderstorm,
                WeatherCode::Clear,
                WeatherCode::Fog,
                WeatherCode::RainShowers,
                WeatherCode::HeavyRain,
            ]
        );
        assert_eq!(snapshot.daily[0].date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(snapshot.daily[6].date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
        assert!(snapshot.daily.iter().all(|d| d.is_day));
        let sunrise = snapshot.daily[0].sunrise.unwrap();
        assert_eq!((sunrise.hour(), sunrise.minute()), (3, 30));
    }

    #[test]
    fn sample_hourly_clean_up() {
        let snapshot = normalizer().normalize_json(&sample_payload_json()).unwrap();
        assert_eq!(snapshot.hourly.len(), HOURS);
        // Nulls take the nearest earlier value.
        assert_eq!(snapshot.hourly[100].temperature, 16.0);
        assert_eq!(snapshot.hourly[50].wind_speed, 8.25);
        // Calm hours have no direction.
        assert_eq!(snapshot.hourly[3].wind_speed, 0.0);
        assert_eq!(snapshot.hourly[3].wind_direction, 0.0);
        assert_eq!(snapshot.hourly[4].wind_direction, 60.0);
        assert!(snapshot.hourly[12].is_day);
        assert!(!snapshot.hourly[2].is_day);
        assert_eq!(snapshot.hourly[35].weather_code, WeatherCode::LightRain);
        assert_eq!(snapshot.hourly[130].weather_code, WeatherCode::RainShowers);
        assert!(snapshot.hourly.iter().all(|h| !h.weather_code.is_drizzle()));
        let hour = snapshot.hour(1, 11).unwrap();
        assert_eq!(
            hour.time,
            NaiveDate::from_ymd_opt(2024, 6, 11)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap()
        );
        assert!(snapshot.hour(0, 24).is_none());
    }

    #[test]
    fn persisted_form_round_trips() {
        let normalizer = normalizer();
        let snapshot = normalizer.normalize_json(&sample_payload_json()).unwrap();
        let restored = normalizer.restore(snapshot.to_persisted()).unwrap();
        assert_eq!(restored, snapshot);

        let raw = RawPayload::from_json(&sample_payload_json()).unwrap();
        let from_raw = normalizer.normalize(&raw).unwrap();
        assert_eq!(normalizer.restore(from_raw.to_persisted()).unwrap(), from_raw);
        assert_eq!(from_raw.daily, snapshot.daily);
    }

    #[test]
    fn sentinel_and_garbage_dates_become_absent() {
        let mut value = sample_payload();
        value["daily"]["sunrise"][2] = Value::from("1970-01-01T00:00");
        value["daily"]["sunset"][3] = Value::from("not a date");
        value["daily"]["sunset"][4] = Value::Null;
        let snapshot = normalize_value(value).unwrap();
        assert_eq!(snapshot.daily[2].sunrise, None);
        assert_eq!(snapshot.daily[3].sunset, None);
        assert_eq!(snapshot.daily[4].sunset, None);
        assert!(snapshot.daily[2].sunset.is_some());
    }

    #[test]
    fn missing_current_values_fall_back_to_the_hourly_series() {
        let mut value = sample_payload();
        let current = value["current_weather"].as_object_mut().unwrap();
        current.remove("temperature");
        current.remove("winddirection");
        let snapshot = normalize_value(value).unwrap();
        assert_eq!(snapshot.current.temperature, 20.0);
        assert_eq!(snapshot.current.wind_direction, 180.0);
    }

    #[test]
    fn missing_observation_time_uses_the_reference_instant() {
        let mut value = sample_payload();
        value["current_weather"]["time"] = Value::Null;
        let snapshot = normalize_value(value).unwrap();
        assert_eq!(snapshot.observed_at, reference().fixed_offset());
        // 11:00 local: the representative window of today starts at 11.
        assert_eq!(snapshot.observed_at.naive_local().hour(), 11);
        assert_eq!(snapshot.current.humidity, 71);
    }

    #[test]
    fn unusable_is_day_series_falls_back_to_the_sun() {
        let mut value = sample_payload();
        value["hourly"]["is_day"] = Value::Array(vec![Value::Null; HOURS]);
        let snapshot = normalize_value(value).unwrap();
        assert!(snapshot.hourly[12].is_day);
        assert!(!snapshot.hourly[2].is_day);
        assert!(snapshot.hourly[24 + 22].is_day);
        assert!(!snapshot.hourly[24 + 23].is_day);
    }

    #[test]
    fn structural_problems_are_errors() {
        let mut value = sample_payload();
        value["hourly"]["uv_index"] = Value::Array(vec![Value::Null; HOURS]);
        assert!(matches!(
            normalize_value(value).unwrap_err(),
            WeatherDataError::EmptySeries { field: "uv_index" }
        ));

        let mut value = sample_payload();
        value["daily"]["sunset"] = Value::Array(vec![Value::from("2024-06-10T22:00")]);
        assert!(matches!(
            normalize_value(value).unwrap_err(),
            WeatherDataError::SeriesTooShort {
                field: "sunset",
                expected: 7,
                found: 1
            }
        ));

        let mut value = sample_payload();
        value["hourly"]["pressure_msl"] = Value::Array(vec![Value::from(1000.0); 24]);
        assert!(matches!(
            normalize_value(value).unwrap_err(),
            WeatherDataError::SeriesTooShort { field: "pressure_msl", .. }
        ));
    }

    #[test]
    fn optional_series_may_be_missing() {
        let mut value = sample_payload();
        let hourly = value["hourly"].as_object_mut().unwrap();
        hourly.remove("us_aqi");
        hourly.remove("european_aqi");
        hourly.insert(
            "sea_surface_temperature".into(),
            Value::Array(vec![Value::Null; HOURS]),
        );
        let snapshot = normalize_value(value).unwrap();
        assert_eq!(snapshot.current.us_aqi, None);
        assert_eq!(snapshot.current.european_aqi, None);
        assert_eq!(snapshot.current.sea_temperature, None);
    }

    #[test]
    fn daytime_window_is_configurable() {
        let normalizer = WeatherNormalizer::builder()
            .timezone(SAMPLE_TIMEZONE)
            .reference_instant(reference())
            .daytime_window((16, 24))
            .latitude(-33.9)
            .build()
            .unwrap();
        let snapshot = normalizer.normalize_json(&sample_payload_json()).unwrap();
        assert_eq!(snapshot.daily[2].weather_code, WeatherCode::MainlyClear);
        assert_eq!(snapshot.latitude, -33.9);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let err = WeatherNormalizer::builder()
            .timezone("Mars/Olympus_Mons")
            .reference_instant(reference())
            .build()
            .unwrap_err();
        assert!(matches!(err, WeatherDataError::UnknownTimezone(_)));

        let err = WeatherNormalizer::builder()
            .timezone("Etc/GMT-2")
            .reference_instant(reference())
            .daytime_window((20, 10))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            WeatherDataError::InvalidDaytimeWindow { start: 20, end: 10 }
        ));
    }
}
