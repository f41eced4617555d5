//! Resolution of a coordinate plus its geocoded address to an IANA timezone name.
//!
//! Most countries observe a single zone. The others are split by region (state, province,
//! oblast), by county for some US states, and by coordinates where a region straddles a
//! boundary. Anything the tables cannot place falls back to a fixed `Etc/GMT±N` zone derived
//! from the longitude, so resolution never fails.

mod countries;
mod lookup;
pub mod region_name;
mod regions;

use crate::types::geo::{AddressHint, GeoPoint, TimezoneId};
use countries::{country, Country};
use log::debug;
use lookup::Lookup;

/// Resolves the timezone observed at `point`.
///
/// The country code is matched after trimming and upper-casing; region names are normalized
/// (accents folded, administrative affixes stripped) and compared ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use meteocore::{AddressHint, GeoPoint, resolve};
///
/// let paris = resolve(GeoPoint::new(48.86, 2.35), &AddressHint::country("fr"));
/// assert_eq!(paris, "Europe/Paris");
///
/// let starke = AddressHint::builder()
///     .country_code("US")
///     .region("Indiana")
///     .sub_region("Starke County")
///     .build();
/// assert_eq!(resolve(GeoPoint::new(41.28, -86.65), &starke), "America/Indiana/Knox");
///
/// // Unknown countries fall back to the longitude.
/// assert_eq!(resolve(GeoPoint::new(0.0, -75.0), &AddressHint::country("ZZ")), "Etc/GMT+5");
/// ```
pub fn resolve(point: GeoPoint, hint: &AddressHint) -> TimezoneId {
    let code = hint.country_code.trim().to_ascii_uppercase();
    let zone = match country(&code) {
        Some(Country::Zone(zone)) => Some(zone),
        Some(Country::Rules(rules)) => rules(&Lookup::new(point, hint)),
        None => None,
    };
    match zone {
        Some(zone) => TimezoneId::from(zone),
        None => {
            debug!(
                "No timezone for country '{code}', region {:?}, sub-region {:?}; using longitude {}",
                hint.region, hint.sub_region, point.longitude
            );
            longitude_offset_zone(point.longitude)
        }
    }
}

/// The fixed-offset zone whose nominal meridian is nearest to `longitude`.
///
/// `Etc/GMT` names carry the inverted sign: 75°W is five hours behind UTC and yields
/// `Etc/GMT+5`. Offsets are clamped to the range the tz database defines; a NaN longitude
/// maps to `Etc/GMT0`.
///
/// ```
/// use meteocore::timezone::longitude_offset_zone;
///
/// assert_eq!(longitude_offset_zone(0.0), "Etc/GMT0");
/// assert_eq!(longitude_offset_zone(-7.5), "Etc/GMT0");
/// assert_eq!(longitude_offset_zone(7.5), "Etc/GMT-1");
/// assert_eq!(longitude_offset_zone(-180.0), "Etc/GMT+12");
/// ```
pub fn longitude_offset_zone(longitude: f64) -> TimezoneId {
    let hours = (longitude / 15.0 + 0.5).floor();
    let offset = if hours.is_nan() {
        0
    } else {
        hours.clamp(-12.0, 14.0) as i32
    };
    if offset < 0 {
        TimezoneId::new(format!("Etc/GMT+{}", -offset))
    } else {
        TimezoneId::new(format!("Etc/GMT{}", -offset))
    }
}
