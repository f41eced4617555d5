use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteocoreError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error("Failed to decode cached snapshot")]
    CacheDecode(#[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode snapshot for the cache")]
    CacheEncode(#[source] Box<bincode::error::EncodeError>),
}
