pub mod geo;
pub mod payload;
pub mod snapshot;
pub mod weather_code;
