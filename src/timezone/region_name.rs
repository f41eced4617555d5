//! Normalization of administrative area names before they are matched against the region
//! tables.
//!
//! Geocoders return the same region in many spellings ("Provincia de Tucumán", "Tucuman",
//! "Samarskaya oblast'", "Samara Oblast"). Normalization folds accents, drops apostrophes and
//! strips the administrative affixes so that all of them reduce to one key.

const ACCENTS: [(char, char); 33] = [
    ('á', 'a'),
    ('ã', 'a'),
    ('â', 'a'),
    ('à', 'a'),
    ('é', 'e'),
    ('ê', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ö', 'o'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ç', 'c'),
    ('ñ', 'n'),
    ('ı', 'y'),
    ('ý', 'y'),
    ('Á', 'A'),
    ('Ã', 'A'),
    ('Â', 'A'),
    ('À', 'A'),
    ('É', 'E'),
    ('Ê', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ô', 'O'),
    ('Õ', 'O'),
    ('Ö', 'O'),
    ('Ú', 'U'),
    ('Ü', 'U'),
    ('Ç', 'C'),
    ('Ñ', 'N'),
    ('Ý', 'Y'),
];

/// Removed wherever they occur, in this order, ignoring ASCII case.
const AFFIXES: [&str; 16] = [
    "Provincia de ",
    " Province",
    "State of ",
    " oblysy",
    "Respublika",
    "Republic of ",
    "Republic ",
    "Oblast",
    "oblast",
    " Autonomous Okrug",
    " avtonomnyy okrug",
    "Krai",
    "kray",
    "skaya",
    "skaja",
    " County",
];

fn fold(c: char) -> Option<char> {
    if c == '\'' || c == '\u{2019}' {
        return None;
    }
    ACCENTS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(Some(c), |(_, to)| Some(*to))
}

/// Removes every occurrence of the ASCII `affix` from `name`, ignoring ASCII case.
fn strip_ignoring_case(name: &mut String, affix: &str) {
    let affix = affix.to_ascii_lowercase();
    // ASCII lower-casing keeps byte offsets, so positions carry over to `name`.
    while let Some(start) = name.to_ascii_lowercase().find(&affix) {
        name.replace_range(start..start + affix.len(), "");
    }
}

/// Normalizes an administrative area name for table lookups.
///
/// Returns `None` for missing, empty or whitespace-only names.
///
/// # Examples
///
/// ```
/// use meteocore::normalize_region;
///
/// assert_eq!(normalize_region("Provincia de Tucumán").as_deref(), Some("Tucuman"));
/// assert_eq!(normalize_region("Samarskaya oblast'").as_deref(), Some("Samar"));
/// assert_eq!(normalize_region("Qyzylorda oblısı").as_deref(), Some("Qyzylorda"));
/// assert_eq!(normalize_region("  ").as_deref(), None);
/// ```
pub fn normalize_region(name: &str) -> Option<String> {
    let mut normalized: String = name.chars().filter_map(fold).collect();
    for affix in AFFIXES {
        strip_ignoring_case(&mut normalized, affix);
    }
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_in_both_cases() {
        assert_eq!(normalize_region("Québec").as_deref(), Some("Quebec"));
        assert_eq!(normalize_region("ÁÉÍÓÚ çñ").as_deref(), Some("AEIOU cn"));
        assert_eq!(normalize_region("Bayan-Ölgii").as_deref(), Some("Bayan-Olgii"));
        assert_eq!(normalize_region("Sükhbaatar").as_deref(), Some("Sukhbaatar"));
        assert_eq!(normalize_region("Rondônia").as_deref(), Some("Rondonia"));
    }

    #[test]
    fn strips_administrative_affixes() {
        assert_eq!(normalize_region("Provincia de Mendoza").as_deref(), Some("Mendoza"));
        assert_eq!(normalize_region("Mendoza Province").as_deref(), Some("Mendoza"));
        assert_eq!(normalize_region("State of Amazonas").as_deref(), Some("Amazonas"));
        assert_eq!(normalize_region("Kaliningrad Oblast").as_deref(), Some("Kaliningrad"));
        assert_eq!(normalize_region("Respublika Sakha (Yakutiya)").as_deref(), Some("Sakha (Yakutiya)"));
        assert_eq!(normalize_region("Republic of Buryatia").as_deref(), Some("Buryatia"));
        assert_eq!(normalize_region("Primorskiy kray").as_deref(), Some("Primorskiy"));
        assert_eq!(
            normalize_region("Khanty-Mansiyskiy avtonomnyy okrug").as_deref(),
            Some("Khanty-Mansiyskiy")
        );
        assert_eq!(normalize_region("Starke County").as_deref(), Some("Starke"));
    }

    #[test]
    fn strips_affixes_in_any_case() {
        assert_eq!(normalize_region("PROVINCIA DE MENDOZA").as_deref(), Some("MENDOZA"));
        assert_eq!(normalize_region("mendoza province").as_deref(), Some("mendoza"));
        assert_eq!(normalize_region("KALININGRAD OBLAST").as_deref(), Some("KALININGRAD"));
        assert_eq!(normalize_region("Primorskiy Kray").as_deref(), Some("Primorskiy"));
        assert_eq!(normalize_region("LAKE COUNTY").as_deref(), Some("LAKE"));
    }

    #[test]
    fn drops_apostrophes() {
        assert_eq!(
            normalize_region("Evreyskaya avtonomnaya oblast'").as_deref(),
            Some("Evrey avtonomnaya")
        );
        assert_eq!(normalize_region("Tomskaya oblast’").as_deref(), Some("Tom"));
    }

    #[test]
    fn empty_names_are_absent() {
        assert_eq!(normalize_region(""), None);
        assert_eq!(normalize_region("   "), None);
        assert_eq!(normalize_region("Oblast"), None);
    }
}
