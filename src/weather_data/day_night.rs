use chrono::{DateTime, Datelike, TimeZone};

/// Classifies `instant` as day or night from the day's sunrise and sunset.
///
/// Handles the polar edge cases:
/// * no sunrise and no sunset, or both equal: polar day or night, decided by hemisphere and
///   season (April through September is day north of the equator, October through March
///   south of it),
/// * only a sunset: day until (and including) the sunset,
/// * only a sunrise: day after the sunrise,
/// * sunrise after sunset (the night falls inside the day): day outside `(sunset, sunrise]`.
///
/// Otherwise it is day when `sunrise < instant <= sunset`.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Europe::Stockholm;
/// use meteocore::is_day;
///
/// let sunrise = Stockholm.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap();
/// let sunset = Stockholm.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap();
/// let noon = Stockholm.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
/// assert!(is_day(&noon, Some(&sunrise), Some(&sunset), 59.3));
/// assert!(!is_day(&sunrise, Some(&sunrise), Some(&sunset), 59.3));
/// ```
pub fn is_day<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    sunrise: Option<&DateTime<Tz>>,
    sunset: Option<&DateTime<Tz>>,
    latitude: f64,
) -> bool {
    match (sunrise, sunset) {
        (Some(rise), Some(set)) if rise == set => polar(instant, latitude),
        (None, None) => polar(instant, latitude),
        (None, Some(set)) => instant <= set,
        (Some(rise), None) => instant > rise,
        (Some(rise), Some(set)) if rise > set => instant > rise || instant <= set,
        (Some(rise), Some(set)) => rise < instant && instant <= set,
    }
}

fn polar<Tz: TimeZone>(instant: &DateTime<Tz>, latitude: f64) -> bool {
    if (4..=9).contains(&instant.month()) {
        latitude > 0.0
    } else {
        latitude < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use chrono_tz::America::Anchorage;
    use chrono_tz::Europe::Stockholm;
    use chrono_tz::Tz;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        Stockholm.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn ordinary_day_bounds() {
        let rise = at(2024, 3, 20, 6, 0);
        let set = at(2024, 3, 20, 18, 0);
        assert!(!is_day(&rise, Some(&rise), Some(&set), 59.3));
        assert!(is_day(&(rise + Duration::minutes(1)), Some(&rise), Some(&set), 59.3));
        assert!(is_day(&set, Some(&rise), Some(&set), 59.3));
        assert!(!is_day(&(set + Duration::minutes(1)), Some(&rise), Some(&set), 59.3));
        assert!(!is_day(&at(2024, 3, 20, 3, 0), Some(&rise), Some(&set), 59.3));
    }

    #[test]
    fn polar_day_and_night_follow_the_season() {
        let june = at(2024, 6, 21, 0, 0);
        let december = at(2024, 12, 21, 12, 0);
        assert!(is_day(&june, None, None, 78.0));
        assert!(!is_day(&june, None, None, -78.0));
        assert!(!is_day(&december, None, None, 78.0));
        assert!(is_day(&december, None, None, -78.0));
        let same = at(2024, 9, 30, 0, 0);
        assert!(is_day(&same, Some(&same), Some(&same), 70.0));
        assert!(!is_day(&at(2024, 10, 1, 12, 0), None, None, 70.0));
        assert!(!is_day(&june, None, None, 0.0));
    }

    #[test]
    fn single_event_days() {
        let set = at(2024, 5, 15, 23, 40);
        assert!(is_day(&at(2024, 5, 15, 10, 0), None, Some(&set), 69.0));
        assert!(is_day(&set, None, Some(&set), 69.0));
        assert!(!is_day(&at(2024, 5, 15, 23, 50), None, Some(&set), 69.0));
        let rise = at(2024, 7, 30, 1, 10);
        assert!(!is_day(&rise, Some(&rise), None, 69.0));
        assert!(is_day(&at(2024, 7, 30, 1, 11), Some(&rise), None, 69.0));
    }

    #[test]
    fn sunset_before_sunrise_wraps_around() {
        let set = at(2024, 5, 20, 0, 30);
        let rise = at(2024, 5, 20, 1, 30);
        assert!(is_day(&at(2024, 5, 20, 0, 10), Some(&rise), Some(&set), 68.0));
        assert!(!is_day(&at(2024, 5, 20, 1, 0), Some(&rise), Some(&set), 68.0));
        assert!(!is_day(&rise, Some(&rise), Some(&set), 68.0));
        assert!(is_day(&at(2024, 5, 20, 12, 0), Some(&rise), Some(&set), 68.0));
    }

    #[test]
    fn compares_instants_not_wall_clock() {
        let rise = at(2024, 3, 20, 6, 0);
        let set = at(2024, 3, 20, 18, 0);
        let noon_here = at(2024, 3, 20, 12, 0).with_timezone(&Anchorage);
        let rise = rise.with_timezone(&Anchorage);
        let set = set.with_timezone(&Anchorage);
        assert!(is_day(&noon_here, Some(&rise), Some(&set), 59.3));
    }
}
