use crate::timezone::region_name::normalize_region;
use crate::timezone::regions::Table;
use crate::types::geo::{AddressHint, GeoPoint};

/// A location prepared for the country rules: coordinates plus the normalized address parts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lookup {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    region: Option<String>,
    sub_region: Option<String>,
    locality: Option<String>,
}

fn find(table: Table, key: Option<&str>) -> Option<&'static str> {
    let key = key?;
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, zone)| *zone)
}

impl Lookup {
    pub(crate) fn new(point: GeoPoint, hint: &AddressHint) -> Self {
        let normalize = |value: &Option<String>| value.as_deref().and_then(normalize_region);
        Lookup {
            latitude: point.latitude,
            longitude: point.longitude,
            region: normalize(&hint.region),
            sub_region: normalize(&hint.sub_region),
            locality: normalize(&hint.locality),
        }
    }

    pub(crate) fn region_in(&self, table: Table) -> Option<&'static str> {
        find(table, self.region.as_deref())
    }

    pub(crate) fn sub_region_in(&self, table: Table) -> Option<&'static str> {
        find(table, self.sub_region.as_deref())
    }

    pub(crate) fn region_is(&self, name: &str) -> bool {
        self.region
            .as_deref()
            .is_some_and(|region| region.eq_ignore_ascii_case(name))
    }

    pub(crate) fn region_is_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.region_is(name))
    }

    pub(crate) fn region_contains(&self, needle: &str) -> bool {
        self.region.as_deref().is_some_and(|region| {
            region
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase())
        })
    }

    pub(crate) fn sub_region_is(&self, name: &str) -> bool {
        self.sub_region
            .as_deref()
            .is_some_and(|sub_region| sub_region.eq_ignore_ascii_case(name))
    }

    pub(crate) fn locality_is(&self, name: &str) -> bool {
        self.locality
            .as_deref()
            .is_some_and(|locality| locality.eq_ignore_ascii_case(name))
    }

    pub(crate) fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone::regions::ARGENTINA;

    #[test]
    fn matches_normalized_names_ignoring_case() {
        let hint = AddressHint::builder()
            .country_code("AR")
            .region("PROVINCIA DE MENDOZA")
            .build();
        let lookup = Lookup::new(GeoPoint::new(-32.9, -68.8), &hint);
        assert_eq!(lookup.region_in(ARGENTINA), Some("America/Argentina/Mendoza"));

        let hint = AddressHint::builder()
            .country_code("AR")
            .region("Provincia de MENDOZA")
            .sub_region("  ")
            .build();
        let lookup = Lookup::new(GeoPoint::new(-32.9, -68.8), &hint);
        assert_eq!(lookup.region_in(ARGENTINA), Some("America/Argentina/Mendoza"));
        assert!(lookup.region_is("mendoza"));
        assert!(lookup.region_contains("END"));
        assert!(!lookup.sub_region_is(""));
        assert!(!lookup.locality_is("Mendoza"));
    }
}
