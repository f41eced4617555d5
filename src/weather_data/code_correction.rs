//! Corrects the weather code reported by the API using the measured cloud cover and
//! precipitation.
//!
//! The upstream code is often off: it reports overcast skies for high clouds nobody can see,
//! rain intensities that do not match the precipitation amount, and drizzle where there is
//! none. The corrected code is derived so that
//! - cloudiness follows the low and mid cloud cover,
//! - rain and snow intensity follow the precipitation amount,
//! - the sun-and-rain (showers) codes are only used when the sky is not too cloudy,
//! - drizzle is always reported as rain.

use crate::types::weather_code::WeatherCode;

/// Codes kept exactly as reported: fog, freezing drizzle, freezing rain, snow grains and
/// thunderstorms.
///
/// ```
/// use meteocore::{corrected_code, PASSTHROUGH_CODES};
///
/// for code in PASSTHROUGH_CODES {
///     assert_eq!(corrected_code(code.into(), 0, 0.0).code(), code);
/// }
/// ```
pub const PASSTHROUGH_CODES: [u8; 10] = [45, 48, 56, 57, 66, 67, 77, 95, 96, 99];

/// Below this cloud cover precipitation is reported as showers (sun with rain or snow).
///
/// ```
/// use meteocore::{corrected_code, WeatherCode, SUNNY_CLOUD_COVER_LIMIT};
///
/// let limit = SUNNY_CLOUD_COVER_LIMIT;
/// assert_eq!(corrected_code(61, limit - 1, 0.1), WeatherCode::LightRainShowers);
/// assert_eq!(corrected_code(61, limit, 0.1), WeatherCode::LightRain);
/// ```
pub const SUNNY_CLOUD_COVER_LIMIT: u8 = 75;

/// Precipitation intensity buckets in mm per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrecipitationIntensity {
    /// Exactly 0 mm.
    None,
    /// Up to 0.3 mm.
    Light,
    /// Up to 1.0 mm.
    Medium,
    /// More than 1.0 mm.
    Heavy,
}

impl PrecipitationIntensity {
    pub fn from_amount(precipitation: f64) -> Self {
        if precipitation <= 0.0 {
            PrecipitationIntensity::None
        } else if precipitation <= 0.3 {
            PrecipitationIntensity::Light
        } else if precipitation <= 1.0 {
            PrecipitationIntensity::Medium
        } else {
            PrecipitationIntensity::Heavy
        }
    }
}

/// Combines the low and mid cloud layers into one cloud cover percentage.
///
/// The layers are treated as independent occluders: the clear fraction of the sky is the
/// product of both layers' clear fractions. High clouds are ignored on purpose since they
/// barely dim the sun. Inputs are clamped to 0-100.
///
/// # Examples
///
/// ```
/// use meteocore::total_cloud_cover;
///
/// assert_eq!(total_cloud_cover(0, 0), 0);
/// assert_eq!(total_cloud_cover(50, 50), 75);
/// assert_eq!(total_cloud_cover(100, 20), 100);
/// ```
pub fn total_cloud_cover(low: i32, mid: i32) -> u8 {
    let clear_low = 100 - low.clamp(0, 100);
    let clear_mid = 100 - mid.clamp(0, 100);
    let clear = clear_low * clear_mid / 100;
    (100 - clear) as u8
}

/// Maps a cloud cover percentage to clear (0), mainly clear (1), partly cloudy (2) or
/// overcast (3).
pub fn cloud_cover_code(cloud_cover: u8) -> WeatherCode {
    match cloud_cover {
        0..=25 => WeatherCode::Clear,
        26..=50 => WeatherCode::MainlyClear,
        51..=75 => WeatherCode::PartlyCloudy,
        _ => WeatherCode::Overcast,
    }
}

/// Corrects a raw upstream weather code.
///
/// `raw_code` does not have to be a valid WMO code; the result always is.
///
/// # Examples
///
/// ```
/// use meteocore::{corrected_code, WeatherCode};
///
/// // Light rain under a mostly clear sky is a shower.
/// assert_eq!(corrected_code(61, 20, 0.1), WeatherCode::LightRainShowers);
/// // Overcast reported, but only a few low clouds.
/// assert_eq!(corrected_code(3, 10, 0.0), WeatherCode::Clear);
/// // Drizzle becomes rain.
/// assert_eq!(corrected_code(53, 90, 0.5), WeatherCode::Rain);
/// ```
pub fn corrected_code(raw_code: i64, cloud_cover: u8, precipitation: f64) -> WeatherCode {
    if let Some(code) = WeatherCode::from_i64(raw_code) {
        if PASSTHROUGH_CODES.contains(&code.code()) {
            return code;
        }
    }
    let intensity = PrecipitationIntensity::from_amount(precipitation);
    let is_snow = raw_code / 10 == 7 || raw_code == 85 || raw_code == 86;
    let is_rain_or_drizzle =
        raw_code / 10 == 5 || raw_code / 10 == 6 || matches!(raw_code, 80 | 81 | 82);

    if cloud_cover < SUNNY_CLOUD_COVER_LIMIT {
        return match (intensity, is_snow) {
            (PrecipitationIntensity::None, _) => cloud_cover_code(cloud_cover),
            (PrecipitationIntensity::Light | PrecipitationIntensity::Medium, true) => {
                WeatherCode::SnowShowers
            }
            (PrecipitationIntensity::Heavy, true) => WeatherCode::HeavySnowShowers,
            (PrecipitationIntensity::Light, false) => WeatherCode::LightRainShowers,
            (PrecipitationIntensity::Medium, false) => WeatherCode::RainShowers,
            (PrecipitationIntensity::Heavy, false) => WeatherCode::HeavyRainShowers,
        };
    }
    if is_snow {
        return match intensity {
            PrecipitationIntensity::Medium => WeatherCode::Snowfall,
            PrecipitationIntensity::Heavy => WeatherCode::HeavySnowfall,
            _ => WeatherCode::LightSnowfall,
        };
    }
    if is_rain_or_drizzle {
        return match intensity {
            PrecipitationIntensity::None => WeatherCode::Overcast,
            PrecipitationIntensity::Light => WeatherCode::LightRain,
            PrecipitationIntensity::Medium => WeatherCode::Rain,
            PrecipitationIntensity::Heavy => WeatherCode::HeavyRain,
        };
    }
    WeatherCode::Overcast
}
