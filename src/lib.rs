mod error;
pub mod timezone;
mod types;
mod weather_data;

pub use error::MeteocoreError;

pub use timezone::region_name::normalize_region;
pub use timezone::resolve;

pub use types::geo::*;
pub use types::payload::*;
pub use types::snapshot::*;
pub use types::weather_code::WeatherCode;

pub use weather_data::code_correction::{
    cloud_cover_code, corrected_code, total_cloud_cover, PrecipitationIntensity, PASSTHROUGH_CODES,
    SUNNY_CLOUD_COVER_LIMIT,
};
pub use weather_data::daily_code::{
    combined_weather_code, representative_window, DEFAULT_DAYTIME_WINDOW,
};
pub use weather_data::date_parse::{parse_local_time, DEFAULT_SENTINEL_CUTOFF_YEAR};
pub use weather_data::day_night::is_day;
pub use weather_data::error::WeatherDataError;
pub use weather_data::gap_fill::nearest_non_null;
pub use weather_data::merge::merge_payloads;
pub use weather_data::normalizer::WeatherNormalizer;
