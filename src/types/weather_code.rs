//! Defines the `WeatherCode` enum, the closed set of WMO weather interpretation codes the
//! Open-Meteo API reports and that every corrected code in a snapshot belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WMO weather interpretation code as used by Open-Meteo.
///
/// See the [Open-Meteo documentation](https://open-meteo.com/en/docs) ("WMO Weather
/// interpretation codes") for the official definitions.
///
/// Convert a raw integer with [`WeatherCode::from_i64`] and back with [`WeatherCode::code`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    Clear = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    RimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    Drizzle = 53,
    /// Code 55: Dense drizzle.
    DenseDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    LightFreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    DenseFreezingDrizzle = 57,
    /// Code 61: Slight rain.
    LightRain = 61,
    /// Code 63: Moderate rain.
    Rain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    LightFreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    HeavyFreezingRain = 67,
    /// Code 71: Slight snow fall.
    LightSnowfall = 71,
    /// Code 73: Moderate snow fall.
    Snowfall = 73,
    /// Code 75: Heavy snow fall.
    HeavySnowfall = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers (sun and light rain).
    LightRainShowers = 80,
    /// Code 81: Moderate rain showers.
    RainShowers = 81,
    /// Code 82: Violent rain showers.
    HeavyRainShowers = 82,
    /// Code 85: Slight snow showers.
    SnowShowers = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShowers = 86,
    /// Code 95: Thunderstorm.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormWithHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    ThunderstormWithHeavyHail = 99,
}

impl WeatherCode {
    /// All valid codes in ascending order.
    pub const ALL: [WeatherCode; 28] = [
        WeatherCode::Clear,
        WeatherCode::MainlyClear,
        WeatherCode::PartlyCloudy,
        WeatherCode::Overcast,
        WeatherCode::Fog,
        WeatherCode::RimeFog,
        WeatherCode::LightDrizzle,
        WeatherCode::Drizzle,
        WeatherCode::DenseDrizzle,
        WeatherCode::LightFreezingDrizzle,
        WeatherCode::DenseFreezingDrizzle,
        WeatherCode::LightRain,
        WeatherCode::Rain,
        WeatherCode::HeavyRain,
        WeatherCode::LightFreezingRain,
        WeatherCode::HeavyFreezingRain,
        WeatherCode::LightSnowfall,
        WeatherCode::Snowfall,
        WeatherCode::HeavySnowfall,
        WeatherCode::SnowGrains,
        WeatherCode::LightRainShowers,
        WeatherCode::RainShowers,
        WeatherCode::HeavyRainShowers,
        WeatherCode::SnowShowers,
        WeatherCode::HeavySnowShowers,
        WeatherCode::Thunderstorm,
        WeatherCode::ThunderstormWithHail,
        WeatherCode::ThunderstormWithHeavyHail,
    ];

    /// Attempts to convert a raw WMO code into a `WeatherCode` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCode)` if `value` is one of the 28 codes Open-Meteo documents.
    /// * `None` otherwise (e.g. 4 or 100).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meteocore::WeatherCode;
    ///
    /// assert_eq!(WeatherCode::from_i64(61), Some(WeatherCode::LightRain));
    /// assert_eq!(WeatherCode::from_i64(4), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        WeatherCode::ALL
            .iter()
            .copied()
            .find(|code| code.code() as i64 == value)
    }

    /// The numeric WMO code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 0-3: clear to overcast, no precipitation.
    pub fn is_clear_or_cloudy(self) -> bool {
        self.code() <= 3
    }

    pub fn is_fog(self) -> bool {
        self.code() / 10 == 4
    }

    /// Plain drizzle (51, 53, 55), not freezing drizzle.
    pub fn is_drizzle(self) -> bool {
        matches!(self.code(), 51 | 53 | 55)
    }

    pub fn is_freezing_drizzle(self) -> bool {
        matches!(self.code(), 56 | 57)
    }

    /// Rain or rain showers (61, 63, 65, 80, 81, 82).
    pub fn is_rain(self) -> bool {
        matches!(self.code(), 61 | 63 | 65 | 80 | 81 | 82)
    }

    pub fn is_freezing_rain(self) -> bool {
        matches!(self.code(), 66 | 67)
    }

    /// Snow, snow grains or snow showers (71, 73, 75, 77, 85, 86).
    pub fn is_snow(self) -> bool {
        self.code() / 10 == 7 || matches!(self.code(), 85 | 86)
    }

    pub fn is_thunderstorm(self) -> bool {
        self.code() / 10 == 9
    }

    /// Codes whose icon shows the sun (or moon): 0, 1, 2 and the showers in the 80s.
    pub fn shows_sky(self) -> bool {
        self.code() <= 2 || self.code() / 10 == 8
    }
}

impl TryFrom<u8> for WeatherCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WeatherCode::from_i64(value as i64).ok_or_else(|| format!("invalid WMO weather code {value}"))
    }
}

impl From<WeatherCode> for u8 {
    fn from(code: WeatherCode) -> Self {
        code.code()
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
