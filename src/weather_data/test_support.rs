//! A realistic Stockholm forecast payload shared by the unit tests.
//!
//! Day by day (raw code, cloud cover, precipitation) the forecast is:
//! 0. mainly clear (code 2, 44 % cloud)
//! 1. light rain from 10:00 to 16:00 under 90 % cloud, overcast otherwise
//! 2. mainly clear with a thunderstorm at 15:00
//! 3. clear
//! 4. fog until noon, overcast afterwards
//! 5. rain showers (0.5 mm, 30 % cloud) from 10:00 to 20:00, mainly clear otherwise
//! 6. "drizzle" with 1.5 mm per hour under full cloud
//!
//! The observation time is 2024-06-10 12:00 local time; a few values are null.

use serde_json::{json, Value};

pub(crate) const SAMPLE_TIMEZONE: &str = "Europe/Stockholm";

struct Hour {
    code: f64,
    low: f64,
    mid: f64,
    precipitation: f64,
}

fn hour(day: usize, hour: usize) -> Hour {
    let (code, low, mid, precipitation) = match day {
        0 => (2.0, 20.0, 30.0, 0.0),
        1 if (10..16).contains(&hour) => (61.0, 80.0, 50.0, 0.2),
        1 => (3.0, 80.0, 50.0, 0.0),
        2 if hour == 15 => (95.0, 80.0, 50.0, 3.0),
        2 => (2.0, 20.0, 30.0, 0.0),
        3 => (0.0, 0.0, 0.0, 0.0),
        4 if hour < 12 => (45.0, 100.0, 0.0, 0.0),
        4 => (3.0, 80.0, 50.0, 0.0),
        5 if (10..20).contains(&hour) => (80.0, 30.0, 0.0, 0.5),
        5 => (1.0, 30.0, 0.0, 0.0),
        _ => (53.0, 100.0, 100.0, 1.5),
    };
    Hour {
        code,
        low,
        mid,
        precipitation,
    }
}

pub(crate) fn sample_payload() -> Value {
    let hours: Vec<(usize, usize)> = (0..168).map(|i| (i / 24, i % 24)).collect();
    let series = |f: &dyn Fn(usize, usize) -> f64| -> Vec<Value> {
        hours.iter().map(|(d, h)| json!(f(*d, *h))).collect()
    };

    let mut temperature = series(&|d, h| {
        14.0 + d as f64 * 0.5 + if (10..18).contains(&h) { 6.0 } else { 0.0 }
    });
    temperature[100] = Value::Null;
    let mut wind_speed = series(&|_, h| if h == 3 { 0.0 } else { 8.0 + h as f64 * 0.25 });
    wind_speed[50] = Value::Null;

    json!({
        "latitude": 59.33,
        "longitude": 18.07,
        "timezone": SAMPLE_TIMEZONE,
        "current_weather": {
            "time": "2024-06-10T12:00",
            "temperature": 21.4,
            "weathercode": 2,
            "windspeed": 11.2,
            "winddirection": 230
        },
        "hourly": {
            "temperature_2m": temperature,
            "apparent_temperature": series(&|d, h| {
                13.0 + d as f64 * 0.5 + if (10..18).contains(&h) { 5.0 } else { 0.0 }
            }),
            "weathercode": series(&|d, h| hour(d, h).code),
            "cloudcover_low": series(&|d, h| hour(d, h).low),
            "cloudcover_mid": series(&|d, h| hour(d, h).mid),
            "precipitation": series(&|d, h| hour(d, h).precipitation),
            "precipitation_probability": series(&|d, h| {
                if hour(d, h).precipitation > 0.0 { 80.0 } else { 10.0 }
            }),
            "windspeed_10m": wind_speed,
            "winddirection_10m": series(&|_, h| (h * 15) as f64),
            "relativehumidity_2m": series(&|_, h| 60.0 + h as f64),
            "pressure_msl": series(&|d, _| 1012.0 + d as f64),
            "uv_index": series(&|_, h| if (10..16).contains(&h) { 5.6 } else { 0.4 }),
            "dewpoint_2m": series(&|_, _| 9.5),
            "is_day": series(&|_, h| if (4..22).contains(&h) { 1.0 } else { 0.0 }),
            "us_aqi": series(&|_, h| 30.0 + h as f64),
            "european_aqi": series(&|_, h| 15.0 + h as f64),
            "sea_surface_temperature": series(&|_, _| 14.2)
        },
        "daily": {
            "sunrise": (0..7).map(|d| format!("2024-06-{:02}T03:3{d}", 10 + d)).collect::<Vec<_>>(),
            "sunset": (0..7).map(|d| format!("2024-06-{:02}T22:0{d}", 10 + d)).collect::<Vec<_>>(),
            "temperature_2m_max": (0..7).map(|d| 20.0 + d as f64 * 0.5).collect::<Vec<_>>(),
            "temperature_2m_min": (0..7).map(|d| 14.0 + d as f64 * 0.5).collect::<Vec<_>>()
        }
    })
}

pub(crate) fn sample_payload_json() -> String {
    sample_payload().to_string()
}
