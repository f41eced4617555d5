//! Normalizes a forecast saved from Open-Meteo.
//!
//! ```sh
//! curl -o forecast.json "https://api.open-meteo.com/v1/forecast?latitude=59.33&longitude=18.07&current_weather=true&timezone=auto&hourly=temperature_2m,apparent_temperature,weathercode,cloudcover_low,cloudcover_mid,precipitation,precipitation_probability,windspeed_10m,winddirection_10m,relativehumidity_2m,pressure_msl,uv_index,dewpoint_2m,is_day&daily=sunrise,sunset,temperature_2m_max,temperature_2m_min"
//! cargo run --example normalize_payload -- forecast.json SE
//! ```

use chrono::Utc;
use meteocore::{resolve, AddressHint, GeoPoint, RawPayload, WeatherNormalizer};
use std::{env, error::Error, fs};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or("usage: normalize_payload <forecast.json> <country code>")?;
    let country_code = args.next().unwrap_or_default();

    let json = fs::read_to_string(&path)?;
    let raw = RawPayload::from_json(&json)?;

    // Open-Meteo echoes the requested coordinates.
    let document: serde_json::Value = serde_json::from_str(&json)?;
    let point = GeoPoint::new(
        document["latitude"].as_f64().unwrap_or(0.0),
        document["longitude"].as_f64().unwrap_or(0.0),
    );
    let timezone = resolve(point, &AddressHint::country(country_code));
    println!("Timezone: {timezone}");

    let normalizer = WeatherNormalizer::builder()
        .timezone(timezone)
        .reference_instant(Utc::now())
        .build()?;
    let snapshot = normalizer.normalize(&raw)?;

    let now = &snapshot.current;
    println!(
        "Now: {:?} ({}{}), {:.1}°C, wind {:.0} km/h from {}°",
        now.weather_code,
        now.weather_code.code(),
        now.icon_variant().suffix(),
        now.temperature,
        now.wind_speed,
        now.wind_direction,
    );
    for (day, daily) in snapshot.daily.iter().enumerate() {
        println!(
            "Day {day}: {:<28} {:>5.1} / {:>5.1}°C",
            format!("{:?}", daily.weather_code),
            daily.min_temperature,
            daily.max_temperature,
        );
    }

    Ok(())
}
