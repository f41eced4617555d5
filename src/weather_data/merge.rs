use log::debug;
use serde_json::Value;

/// Merges `other` into `base`, the way separate Open-Meteo responses (forecast, air quality,
/// marine) are combined into one payload before normalization.
///
/// Objects are merged key by key, recursively. When both sides hold an array the longer one
/// is kept, since some APIs forecast further ahead than others and the shared `time` arrays
/// collide; on equal length `other` wins. Any other value in `other` overwrites `base`.
///
/// # Examples
///
/// ```
/// use meteocore::merge_payloads;
/// use serde_json::json;
///
/// let mut forecast = json!({"hourly": {"time": [1, 2, 3], "temperature_2m": [4, 5, 6]}});
/// let air_quality = json!({"hourly": {"time": [1, 2], "us_aqi": [30, 31]}});
/// merge_payloads(&mut forecast, air_quality);
///
/// assert_eq!(forecast["hourly"]["time"], json!([1, 2, 3]));
/// assert_eq!(forecast["hourly"]["us_aqi"], json!([30, 31]));
/// ```
pub fn merge_payloads(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_payloads(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(kept), Value::Array(dropped)) if kept.len() > dropped.len() => {
            debug!(
                "Keeping array of {} entries over one of {}",
                kept.len(),
                dropped.len()
            );
        }
        (slot, value) => *slot = value,
    }
}
