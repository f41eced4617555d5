use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Payload is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Expected '{0}' to be a JSON object")]
    NotAnObject(&'static str),

    #[error("Required field '{field}' is missing from '{section}'")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("Series '{field}' has {found} entries, expected at least {expected}")]
    SeriesTooShort {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    // Every element null: nothing to gap-fill from.
    #[error("Series '{field}' contains no values")]
    EmptySeries { field: &'static str },

    #[error("Unknown IANA timezone '{0}'")]
    UnknownTimezone(String),

    // Recovered locally by the normalizer; never returned from `normalize`.
    #[error("Failed to parse date '{value}'")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Date '{0}' does not exist in the configured timezone")]
    NonexistentLocalTime(String),

    #[error("Invalid daytime window {start}..{end}, expected start < end <= 24")]
    InvalidDaytimeWindow { start: u32, end: u32 },
}
