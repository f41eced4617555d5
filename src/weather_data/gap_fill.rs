//! Works around Open-Meteo occasionally returning `null` inside series that should be dense
//! (<https://github.com/open-meteo/open-meteo/issues/71>).

use crate::weather_data::error::WeatherDataError;
use log::debug;

/// Returns the value at `index`, or the closest non-null value in time if it is null.
///
/// The search goes outward symmetrically (`index - 1`, `index + 1`, `index - 2`, ...), so at
/// equal distance the earlier hour wins. Returns `None` if `index` is out of range or the
/// entire series is null.
///
/// # Examples
///
/// ```
/// use meteocore::nearest_non_null;
///
/// let series = [None, Some(4.0), None, None, Some(9.0)];
/// assert_eq!(nearest_non_null(&series, 0), Some(4.0));
/// assert_eq!(nearest_non_null(&series, 2), Some(4.0));
/// assert_eq!(nearest_non_null(&series, 3), Some(9.0));
/// ```
pub fn nearest_non_null<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    let current = values.get(index)?;
    if current.is_some() {
        return *current;
    }
    for distance in 1..values.len() {
        let below = index.checked_sub(distance).and_then(|i| values[i]);
        if below.is_some() {
            return below;
        }
        let above = values.get(index + distance).copied().flatten();
        if above.is_some() {
            return above;
        }
    }
    None
}

/// Gap-fills the first `len` entries of a required series.
///
/// # Errors
///
/// * [`WeatherDataError::SeriesTooShort`] if the series has fewer than `len` entries.
/// * [`WeatherDataError::EmptySeries`] if every entry is null.
pub(crate) fn fill_series(
    values: &[Option<f64>],
    len: usize,
    field: &'static str,
) -> Result<Vec<f64>, WeatherDataError> {
    if values.len() < len {
        return Err(WeatherDataError::SeriesTooShort {
            field,
            expected: len,
            found: values.len(),
        });
    }
    let gaps = values[..len].iter().filter(|v| v.is_none()).count();
    if gaps > 0 {
        debug!("Filling {gaps} null entries in '{field}'");
    }
    (0..len)
        .map(|i| nearest_non_null(values, i).ok_or(WeatherDataError::EmptySeries { field }))
        .collect()
}

/// Gap-fills an optional series; `None` when the series is missing, too short, or all null.
pub(crate) fn fill_optional_series(values: Option<&[Option<f64>]>, len: usize) -> Option<Vec<f64>> {
    let values = values?;
    if values.len() < len {
        return None;
    }
    (0..len).map(|i| nearest_non_null(values, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn present_value_is_returned_as_is() {
        assert_eq!(nearest_non_null(&[Some(1), Some(2), Some(3)], 1), Some(2));
    }

    #[test]
    fn lower_neighbour_wins_a_tie() {
        assert_eq!(nearest_non_null(&[Some(1), None, Some(3)], 1), Some(1));
    }

    #[test]
    fn searches_past_the_edges() {
        let series = [None, None, None, Some(7)];
        assert_eq!(nearest_non_null(&series, 0), Some(7));
        let series = [Some(7), None, None, None];
        assert_eq!(nearest_non_null(&series, 3), Some(7));
    }

    #[test]
    fn all_null_and_out_of_range_yield_none() {
        let series: [Option<f64>; 3] = [None, None, None];
        assert_eq!(nearest_non_null(&series, 1), None);
        assert_eq!(nearest_non_null(&[Some(1.0)], 5), None);
        assert_eq!(nearest_non_null::<f64>(&[], 0), None);
    }

    #[test]
    fn fill_series_reports_structural_problems() {
        let err = fill_series(&[Some(1.0)], 3, "temperature_2m").unwrap_err();
        assert!(matches!(
            err,
            WeatherDataError::SeriesTooShort {
                expected: 3,
                found: 1,
                ..
            }
        ));
        let err = fill_series(&[None, None], 2, "uv_index").unwrap_err();
        assert!(matches!(err, WeatherDataError::EmptySeries { field: "uv_index" }));
    }

    #[test]
    fn fill_series_truncates_but_searches_the_whole_series() {
        let filled = fill_series(&[None, None, Some(5.0)], 2, "x").unwrap();
        assert_eq!(filled, vec![5.0, 5.0]);
    }

    #[test]
    fn optional_series_is_dropped_when_unusable() {
        assert_eq!(fill_optional_series(None, 2), None);
        assert_eq!(fill_optional_series(Some(&[None, None][..]), 2), None);
        assert_eq!(fill_optional_series(Some(&[Some(1.0)][..]), 2), None);
        assert_eq!(
            fill_optional_series(Some(&[None, Some(2.0)][..]), 2),
            Some(vec![2.0, 2.0])
        );
    }

    proptest! {
        #[test]
        fn single_value_fills_every_index(len in 1usize..200, seed in any::<usize>(), value in -100.0f64..100.0) {
            let k = seed % len;
            let mut series = vec![None; len];
            series[k] = Some(value);
            for i in 0..len {
                prop_assert_eq!(nearest_non_null(&series, i), Some(value));
            }
        }

        #[test]
        fn filled_value_is_one_of_the_nearest(series in proptest::collection::vec(proptest::option::of(0i32..1000), 1..60), seed in any::<usize>()) {
            let index = seed % series.len();
            match nearest_non_null(&series, index) {
                None => prop_assert!(series.iter().all(Option::is_none)),
                Some(found) => {
                    let best = series
                        .iter()
                        .enumerate()
                        .filter(|(_, v)| v.is_some())
                        .map(|(i, _)| i.abs_diff(index))
                        .min();
                    let positions: Vec<usize> = series
                        .iter()
                        .enumerate()
                        .filter(|(_, v)| **v == Some(found))
                        .map(|(i, _)| i.abs_diff(index))
                        .collect();
                    prop_assert!(positions.contains(&best.unwrap_or(usize::MAX)));
                }
            }
        }
    }
}
