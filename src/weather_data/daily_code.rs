//! Picks one representative weather code per day.
//!
//! The upstream daily code gives too much weight to the night, so the daily code is derived from
//! the corrected hourly codes of the daytime window instead.

use crate::types::weather_code::WeatherCode;
use std::ops::Range;

/// Default daytime window, in local hours, used for the representative code.
pub const DEFAULT_DAYTIME_WINDOW: (u32, u32) = (10, 20);

/// The hourly indices that represent `day`.
///
/// Future days (and today, before the window opens) use `[start, end)` of that day. Once
/// today's window has opened only the remaining hours count, and after it has closed the rest of
/// the day is used so the range is never empty.
///
/// # Arguments
///
/// * `day` - Day index, 0 for today.
/// * `current_hour` - Local hour (0-23) of the observation time.
/// * `window` - `(start, end)` local hours with `start < end <= 24`.
///
/// # Examples
///
/// ```
/// use meteocore::representative_window;
///
/// assert_eq!(representative_window(2, 15, (10, 20)), 58..68);
/// assert_eq!(representative_window(0, 8, (10, 20)), 10..20);
/// assert_eq!(representative_window(0, 15, (10, 20)), 15..20);
/// assert_eq!(representative_window(0, 21, (10, 20)), 21..24);
/// ```
pub fn representative_window(day: usize, current_hour: u32, window: (u32, u32)) -> Range<usize> {
    let (start, end) = (window.0 as usize, window.1 as usize);
    let current_hour = current_hour as usize;
    if day > 0 || current_hour < start {
        24 * day + start..24 * day + end
    } else if current_hour < end {
        current_hour..end
    } else {
        current_hour..24
    }
}

/// Combines the hourly codes of a day into the code that best describes it.
///
/// Categories are checked in order of how much they matter to someone planning their day:
/// 1. any thunderstorm (the smallest thunderstorm code),
/// 2. rain or snow, whichever occurs in more hours (rain on a tie), with the rounded mean
///    intensity and the showers variant if any hour shows the sky,
/// 3. freezing rain (heavy rain unless light freezing rain occurs more often), drizzle,
///    freezing drizzle, fog,
/// 4. the rounded mean of the remaining clear and cloudy codes.
///
/// An empty slice yields [`WeatherCode::Clear`].
///
/// # Examples
///
/// ```
/// use meteocore::{combined_weather_code, WeatherCode};
///
/// let day = [WeatherCode::Clear, WeatherCode::LightRain, WeatherCode::HeavyRain];
/// assert_eq!(combined_weather_code(&day), WeatherCode::RainShowers);
/// ```
pub fn combined_weather_code(codes: &[WeatherCode]) -> WeatherCode {
    if let Some(thunderstorm) = codes.iter().copied().filter(|c| c.is_thunderstorm()).min() {
        return thunderstorm;
    }

    let rain: Vec<WeatherCode> = codes.iter().copied().filter(|c| c.is_rain()).collect();
    let snow: Vec<WeatherCode> = codes.iter().copied().filter(|c| c.is_snow()).collect();
    if !rain.is_empty() || !snow.is_empty() {
        let has_sun = codes.iter().any(|c| c.shows_sky());
        if rain.len() >= snow.len() {
            let intensity = mean_intensity(&rain, |code| match code {
                WeatherCode::LightRain | WeatherCode::LightRainShowers => 1,
                WeatherCode::Rain | WeatherCode::RainShowers => 2,
                _ => 3,
            });
            return match (intensity, has_sun) {
                (1, true) => WeatherCode::LightRainShowers,
                (1, false) => WeatherCode::LightRain,
                (3, true) => WeatherCode::HeavyRainShowers,
                (3, false) => WeatherCode::HeavyRain,
                (_, true) => WeatherCode::RainShowers,
                (_, false) => WeatherCode::Rain,
            };
        }
        if snow.iter().all(|c| *c == WeatherCode::SnowGrains) {
            return WeatherCode::SnowGrains;
        }
        let intensity = mean_intensity(&snow, |code| match code {
            WeatherCode::LightSnowfall => 1,
            WeatherCode::HeavySnowfall | WeatherCode::HeavySnowShowers => 3,
            _ => 2,
        });
        return match (intensity, has_sun) {
            (3, true) => WeatherCode::HeavySnowShowers,
            (3, false) => WeatherCode::HeavySnowfall,
            (_, true) => WeatherCode::SnowShowers,
            (1, false) => WeatherCode::LightSnowfall,
            (_, false) => WeatherCode::Snowfall,
        };
    }

    if codes.iter().any(|c| c.is_freezing_rain()) {
        // Counted as 65 against 66: a day with only heavy freezing rain reads as heavy rain.
        return majority(codes, WeatherCode::HeavyRain, WeatherCode::LightFreezingRain);
    }

    let drizzle: Vec<WeatherCode> = codes.iter().copied().filter(|c| c.is_drizzle()).collect();
    if !drizzle.is_empty() {
        // 51, 53 and 55 map to intensities 1, 2 and 3.
        return match mean_intensity(&drizzle, |code| (code.code() as u32 - 49) / 2) {
            1 => WeatherCode::LightDrizzle,
            2 => WeatherCode::Drizzle,
            _ => WeatherCode::DenseDrizzle,
        };
    }

    if codes.iter().any(|c| c.is_freezing_drizzle()) {
        return majority(
            codes,
            WeatherCode::LightFreezingDrizzle,
            WeatherCode::DenseFreezingDrizzle,
        );
    }

    if codes.iter().any(|c| c.is_fog()) {
        return majority(codes, WeatherCode::Fog, WeatherCode::RimeFog);
    }

    if codes.is_empty() {
        return WeatherCode::Clear;
    }
    let mean = codes.iter().map(|c| c.code() as f64).sum::<f64>() / codes.len() as f64;
    WeatherCode::from_i64(mean.round() as i64).unwrap_or(WeatherCode::Overcast)
}

fn mean_intensity(codes: &[WeatherCode], intensity: impl Fn(WeatherCode) -> u32) -> u32 {
    if codes.is_empty() {
        return 0;
    }
    let total: u32 = codes.iter().map(|c| intensity(*c)).sum();
    (total as f64 / codes.len() as f64).round() as u32
}

/// `first` unless `second` occurs strictly more often.
fn majority(codes: &[WeatherCode], first: WeatherCode, second: WeatherCode) -> WeatherCode {
    let count = |code: WeatherCode| codes.iter().filter(|c| **c == code).count();
    if count(first) >= count(second) {
        first
    } else {
        second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WeatherCode::*;

    #[test]
    fn only_snow_grains_stay_snow_grains() {
        assert_eq!(combined_weather_code(&[SnowGrains; 10]), SnowGrains);
        assert_eq!(combined_weather_code(&[SnowGrains, Overcast, Overcast]), SnowGrains);
        assert_eq!(combined_weather_code(&[SnowGrains, LightSnowfall, Overcast]), Snowfall);
    }

    #[test]
    fn thunderstorm_beats_everything_and_smallest_wins() {
        let day = [Clear, HeavyRain, ThunderstormWithHeavyHail, Thunderstorm, HeavySnowfall];
        assert_eq!(combined_weather_code(&day), Thunderstorm);
        let day = [Fog, ThunderstormWithHeavyHail, ThunderstormWithHail];
        assert_eq!(combined_weather_code(&day), ThunderstormWithHail);
    }

    #[test]
    fn rain_intensity_is_averaged() {
        assert_eq!(combined_weather_code(&[Overcast, LightRain, LightRain]), LightRain);
        assert_eq!(combined_weather_code(&[Overcast, LightRain, HeavyRain]), Rain);
        assert_eq!(combined_weather_code(&[Overcast, HeavyRain, Rain]), HeavyRain);
        assert_eq!(combined_weather_code(&[PartlyCloudy, HeavyRain, Rain]), HeavyRainShowers);
    }

    #[test]
    fn rain_wins_a_tie_with_snow() {
        assert_eq!(combined_weather_code(&[Overcast, Rain, Snowfall]), Rain);
        assert_eq!(combined_weather_code(&[Overcast, Rain, Snowfall, HeavySnowfall]), HeavySnowfall);
    }

    #[test]
    fn snow_uses_showers_when_the_sky_shows() {
        assert_eq!(combined_weather_code(&[Clear, LightSnowfall]), SnowShowers);
        assert_eq!(combined_weather_code(&[Overcast, LightSnowfall]), LightSnowfall);
        assert_eq!(combined_weather_code(&[MainlyClear, HeavySnowfall]), HeavySnowShowers);
    }

    #[test]
    fn secondary_categories_pick_by_count() {
        assert_eq!(combined_weather_code(&[Overcast, LightFreezingRain, HeavyFreezingRain]), LightFreezingRain);
        assert_eq!(combined_weather_code(&[DenseFreezingDrizzle, Overcast]), DenseFreezingDrizzle);
        assert_eq!(combined_weather_code(&[Fog, RimeFog, RimeFog]), RimeFog);
        assert_eq!(combined_weather_code(&[Fog, Clear]), Fog);
    }

    #[test]
    fn freezing_rain_is_voted_between_heavy_rain_and_light_freezing_rain() {
        assert_eq!(combined_weather_code(&[HeavyFreezingRain; 10]), HeavyRain);
        assert_eq!(combined_weather_code(&[HeavyFreezingRain, Overcast]), HeavyRain);
        assert_eq!(
            combined_weather_code(&[HeavyFreezingRain, HeavyFreezingRain, LightFreezingRain]),
            LightFreezingRain
        );
        assert_eq!(combined_weather_code(&[LightFreezingRain; 4]), LightFreezingRain);
    }

    #[test]
    fn drizzle_is_averaged() {
        assert_eq!(combined_weather_code(&[LightDrizzle, DenseDrizzle, Overcast]), Drizzle);
        assert_eq!(combined_weather_code(&[LightDrizzle, LightDrizzle]), LightDrizzle);
        assert_eq!(combined_weather_code(&[DenseDrizzle, Fog]), DenseDrizzle);
    }

    #[test]
    fn clear_and_cloudy_codes_are_averaged() {
        assert_eq!(combined_weather_code(&[Clear, Overcast]), PartlyCloudy);
        assert_eq!(combined_weather_code(&[Clear, Clear, Overcast]), MainlyClear);
        assert_eq!(combined_weather_code(&[]), Clear);
    }

    #[test]
    fn window_never_empty() {
        for hour in 0..24 {
            assert!(!representative_window(0, hour, DEFAULT_DAYTIME_WINDOW).is_empty());
        }
        assert_eq!(representative_window(6, 23, DEFAULT_DAYTIME_WINDOW), 154..164);
        assert_eq!(representative_window(0, 10, DEFAULT_DAYTIME_WINDOW), 10..20);
        assert_eq!(representative_window(0, 20, DEFAULT_DAYTIME_WINDOW), 20..24);
    }
}
