//! Geographic inputs of the timezone resolver: a coordinate pair, the address components a
//! geocoder produced for it, and the resulting IANA timezone name.

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 coordinate in decimal degrees.
///
/// # Examples
///
/// ```
/// use meteocore::GeoPoint;
///
/// let denver = GeoPoint::new(39.74, -104.99);
/// assert_eq!(denver.latitude, 39.74);
/// assert_eq!(denver.longitude, -104.99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Address components for a point, as returned by a reverse geocoder.
///
/// Only `country_code` is required. The region names are free text in whatever form the
/// geocoder produced (English or localized, with or without administrative suffixes such as
/// "Province" or "Oblast"); the resolver normalizes them before matching.
///
/// # Examples
///
/// ```
/// use meteocore::AddressHint;
///
/// let hint = AddressHint::builder()
///     .country_code("US")
///     .region("Indiana")
///     .sub_region("Starke County")
///     .build();
/// assert_eq!(hint.country_code, "US");
/// assert_eq!(hint.sub_region.as_deref(), Some("Starke County"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct AddressHint {
    /// ISO 3166-1 alpha-2 country code (e.g. "AR").
    #[builder(into)]
    pub country_code: String,
    /// Admin area: state, province, oblast...
    #[builder(into)]
    pub region: Option<String>,
    /// Sub-admin area: county, district...
    #[builder(into)]
    pub sub_region: Option<String>,
    /// City or town.
    #[builder(into)]
    pub locality: Option<String>,
    /// Neighbourhood or borough within the locality.
    #[builder(into)]
    pub sub_locality: Option<String>,
    /// Human readable country name.
    #[builder(into)]
    pub country_name: Option<String>,
    /// First formatted address line, e.g. "Rue de Rivoli 1, 75001 Paris, France".
    #[builder(into)]
    pub address_line: Option<String>,
}

impl AddressHint {
    /// Creates a hint that carries nothing but a country code.
    pub fn country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            ..Self::default()
        }
    }

    /// Best-effort name of the place this address is in, for labelling a location.
    ///
    /// Tries, in order: the locality, the city segment of the address line (the segment just
    /// before the country name, with postal codes stripped), the sub-locality, the sub-region,
    /// the region and finally the country name. All-caps and all-lowercase values are
    /// converted to title case, except the country name which is returned as given.
    ///
    /// Returns `None` when every component is missing or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteocore::AddressHint;
    ///
    /// let hint = AddressHint::builder()
    ///     .country_code("FR")
    ///     .country_name("France")
    ///     .address_line("Rue de Rivoli 1, 75001 Paris, France")
    ///     .build();
    /// assert_eq!(hint.display_name().as_deref(), Some("Paris"));
    ///
    /// let shouting = AddressHint::builder().country_code("US").locality("NEW YORK").build();
    /// assert_eq!(shouting.display_name().as_deref(), Some("New York"));
    /// ```
    pub fn display_name(&self) -> Option<String> {
        non_blank(self.locality.as_deref(), true)
            .or_else(|| self.city_from_address_line())
            .or_else(|| non_blank(self.sub_locality.as_deref(), true))
            .or_else(|| non_blank(self.sub_region.as_deref(), true))
            .or_else(|| non_blank(self.region.as_deref(), true))
            .or_else(|| non_blank(self.country_name.as_deref(), false))
    }

    fn city_from_address_line(&self) -> Option<String> {
        let line = self.address_line.as_deref()?;
        let country = self.country_name.as_deref().unwrap_or("");
        let without_country = line.strip_suffix(country)?.trim_end();
        let head = without_country.strip_suffix(',')?;
        let (_, segment) = head.rsplit_once(',')?;
        let city = segment.trim_matches(|c: char| c.is_ascii_digit() || c.is_whitespace());
        if city.is_empty() || city.contains(|c: char| c.is_ascii_digit()) {
            return None;
        }
        non_blank(Some(city), true)
    }
}

fn non_blank(value: Option<&str>, fix_capitalization: bool) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    if fix_capitalization && (trimmed == trimmed.to_uppercase() || trimmed == trimmed.to_lowercase())
    {
        return Some(title_case(trimmed));
    }
    Some(trimmed.to_string())
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// An IANA timezone identifier such as `"America/Denver"` or `"Etc/GMT+5"`.
///
/// The resolver produces these from lookup tables; they are not validated against a live
/// tz database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimezoneId(String);

impl TimezoneId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TimezoneId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TimezoneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for TimezoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for TimezoneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_locality() {
        let hint = AddressHint::builder()
            .country_code("SE")
            .locality("Uppsala")
            .region("Uppsala County")
            .build();
        assert_eq!(hint.display_name().as_deref(), Some("Uppsala"));
    }

    #[test]
    fn display_name_reads_city_before_country_in_address_line() {
        let hint = AddressHint::builder()
            .country_code("DE")
            .country_name("Germany")
            .address_line("Unter den Linden 77, 10117 Berlin, Germany")
            .build();
        assert_eq!(hint.display_name().as_deref(), Some("Berlin"));
    }

    #[test]
    fn display_name_skips_address_line_without_city_segment() {
        let hint = AddressHint::builder()
            .country_code("DE")
            .country_name("Germany")
            .address_line("10117, Germany")
            .sub_region("Mitte")
            .build();
        assert_eq!(hint.display_name().as_deref(), Some("Mitte"));
    }

    #[test]
    fn display_name_falls_back_through_components() {
        let hint = AddressHint::builder()
            .country_code("NO")
            .locality("   ")
            .region("svalbard")
            .build();
        assert_eq!(hint.display_name().as_deref(), Some("Svalbard"));

        let only_country = AddressHint::builder()
            .country_code("NO")
            .country_name("NORWAY")
            .build();
        assert_eq!(only_country.display_name().as_deref(), Some("NORWAY"));

        assert_eq!(AddressHint::country("NO").display_name(), None);
    }

    #[test]
    fn mixed_case_names_are_kept() {
        let hint = AddressHint::builder().country_code("US").locality("McAllen").build();
        assert_eq!(hint.display_name().as_deref(), Some("McAllen"));
    }

    #[test]
    fn timezone_id_compares_with_str() {
        let tz = TimezoneId::from("Europe/Oslo");
        assert_eq!(tz, "Europe/Oslo");
        assert_eq!(tz.to_string(), "Europe/Oslo");
    }
}
