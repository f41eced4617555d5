pub mod cache;
pub mod code_correction;
pub mod daily_code;
pub mod date_parse;
pub mod day_night;
pub mod error;
pub mod gap_fill;
pub mod merge;
pub mod normalizer;
#[cfg(test)]
pub(crate) mod test_support;
