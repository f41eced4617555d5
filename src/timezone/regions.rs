//! Region and county tables for countries spanning several timezones.
//!
//! Keys are normalized names (see [`super::region_name::normalize_region`]); lookups ignore
//! ASCII case. Source: the tz database's zone descriptions
//! (<https://en.wikipedia.org/wiki/List_of_tz_database_time_zones>).

pub(crate) type Table = &'static [(&'static str, &'static str)];

pub(crate) const ARGENTINA: Table = &[
    ("Buenos Aires", "America/Argentina/Buenos_Aires"),
    ("Catamarca", "America/Argentina/Catamarca"),
    ("Chubut", "America/Argentina/Catamarca"),
    ("Jujuy", "America/Argentina/Jujuy"),
    ("La Rioja", "America/Argentina/La_Rioja"),
    ("Mendoza", "America/Argentina/Mendoza"),
    ("Santa Cruz", "America/Argentina/Rio_Gallegos"),
    ("Salta", "America/Argentina/Salta"),
    ("San Juan", "America/Argentina/San_Juan"),
    ("San Luis", "America/Argentina/San_Luis"),
    ("Tucuman", "America/Argentina/Tucuman"),
    ("Tierra del Fuego", "America/Argentina/Ushuaia"),
];

pub(crate) const AUSTRALIA: Table = &[
    ("South Australia", "Australia/Adelaide"),
    ("Queensland", "Australia/Brisbane"),
    ("Northern Territory", "Australia/Darwin"),
    ("Tasmania", "Australia/Hobart"),
    ("Victoria", "Australia/Melbourne"),
    ("Western Australia", "Australia/Perth"),
];

/// States sharing the Sydney zone, apart from Broken Hill and Lord Howe Island.
pub(crate) const AUSTRALIA_EAST: &[&str] = &[
    "New South Wales",
    "Australian Capital Territory",
    "Jervis Bay Territory",
];

pub(crate) const BRAZIL: Table = &[
    ("Roraima", "America/Boa_Vista"),
    ("Amapa", "America/Belem"),
    ("Para", "America/Belem"),
    ("Maranhao", "America/Fortaleza"),
    ("Piaui", "America/Fortaleza"),
    ("Ceara", "America/Fortaleza"),
    ("Rio Grande do Norte", "America/Fortaleza"),
    ("Paraiba", "America/Fortaleza"),
    ("Tocantins", "America/Araguaina"),
    ("Acre", "America/Rio_Branco"),
    ("Rondonia", "America/Porto_Velho"),
    ("Mato Grosso", "America/Cuiaba"),
    ("Pernambuco", "America/Recife"),
    ("Bahia", "America/Bahia"),
    ("Alagoas", "America/Maceio"),
    ("Sergipe", "America/Maceio"),
    ("Mato Grosso do Sul", "America/Campo_Grande"),
];

pub(crate) const CANADA: Table = &[
    ("Prince Edward Island", "America/Halifax"),
    ("Nova Scotia", "America/Halifax"),
    ("New Brunswick", "America/Halifax"),
    ("Manitoba", "America/Winnipeg"),
    ("Alberta", "America/Edmonton"),
    ("Yukon", "America/Whitehorse"),
    ("Northwest Territories", "America/Yellowknife"),
];

pub(crate) const INDONESIA: Table = &[
    ("Aceh", "Asia/Jakarta"),
    ("Bengkulu", "Asia/Jakarta"),
    ("Jambi", "Asia/Jakarta"),
    ("Lampung", "Asia/Jakarta"),
    ("North Sumatra", "Asia/Jakarta"),
    ("Sumatera Utara", "Asia/Jakarta"),
    ("Riau", "Asia/Jakarta"),
    ("South Sumatra", "Asia/Jakarta"),
    ("Sumatera Selatan", "Asia/Jakarta"),
    ("West Sumatra", "Asia/Jakarta"),
    ("Sumatera Barat", "Asia/Jakarta"),
    ("Riau Islands", "Asia/Jakarta"),
    ("Kepulauan Riau", "Asia/Jakarta"),
    ("Bangka Belitung Islands", "Asia/Jakarta"),
    ("Kepulauan Bangka Belitung", "Asia/Jakarta"),
    ("Banten", "Asia/Jakarta"),
    ("Jakarta", "Asia/Jakarta"),
    ("Daerah Khusus Ibukota Jakarta", "Asia/Jakarta"),
    ("West Java", "Asia/Jakarta"),
    ("Jawa Barat", "Asia/Jakarta"),
    ("Central Java", "Asia/Jakarta"),
    ("Jawa Tengah", "Asia/Jakarta"),
    ("Special Region of Yogyakarta", "Asia/Jakarta"),
    ("Daerah Istimewa Yogyakarta", "Asia/Jakarta"),
    ("East Java", "Asia/Jakarta"),
    ("Jawa Timur", "Asia/Jakarta"),
    ("West Kalimantan", "Asia/Pontianak"),
    ("Kalimantan Barat", "Asia/Pontianak"),
    ("Central Kalimantan", "Asia/Pontianak"),
    ("Kalimantan Tengah", "Asia/Pontianak"),
    ("South Kalimantan", "Asia/Makassar"),
    ("Kalimantan Selatan", "Asia/Makassar"),
    ("East Kalimantan", "Asia/Makassar"),
    ("Kalimantan Timur", "Asia/Makassar"),
    ("North Kalimantan", "Asia/Makassar"),
    ("Kalimantan Utara", "Asia/Makassar"),
    ("North Sulawesi", "Asia/Makassar"),
    ("Sulawesi Utara", "Asia/Makassar"),
    ("Gorontalo", "Asia/Makassar"),
    ("Central Sulawesi", "Asia/Makassar"),
    ("Sulawesi Tengah", "Asia/Makassar"),
    ("West Sulawesi", "Asia/Makassar"),
    ("Sulawesi Barat", "Asia/Makassar"),
    ("South Sulawesi", "Asia/Makassar"),
    ("Sulawesi Selatan", "Asia/Makassar"),
    ("South East Sulawesi", "Asia/Makassar"),
    ("Sulawesi Tenggara", "Asia/Makassar"),
    ("Bali", "Asia/Makassar"),
    ("West Nusa Tenggara", "Asia/Makassar"),
    ("Nusa Tenggara Barat", "Asia/Makassar"),
    ("East Nusa Tenggara", "Asia/Makassar"),
    ("Nusa Tenggara Timur", "Asia/Makassar"),
    ("Maluku", "Asia/Jayapura"),
    ("North Maluku", "Asia/Jayapura"),
    ("Maluku Utara", "Asia/Jayapura"),
    ("West Papua", "Asia/Jayapura"),
    ("Papua Barat", "Asia/Jayapura"),
    ("Papua", "Asia/Jayapura"),
];

pub(crate) const KAZAKHSTAN: Table = &[
    ("Kyzylorda", "Asia/Qyzylorda"),
    ("Qyzylorda", "Asia/Qyzylorda"),
    ("Kostanay", "Asia/Qostanay"),
    ("Qostanay", "Asia/Qostanay"),
    ("Aktobe", "Asia/Aqtobe"),
    ("Aqtobe", "Asia/Aqtobe"),
    ("Mangystau", "Asia/Aqtau"),
    ("Atyrau", "Asia/Atyrau"),
    ("West Kazakhstan", "Asia/Oral"),
];

pub(crate) const MONGOLIA: Table = &[
    ("Bayan-Olgii", "Asia/Hovd"),
    ("Bayan-Olgiy", "Asia/Hovd"),
    ("Govi-Altai", "Asia/Hovd"),
    ("Khovd", "Asia/Hovd"),
    ("Hovd", "Asia/Hovd"),
    ("Uvs", "Asia/Hovd"),
    ("Zavkhan", "Asia/Hovd"),
    ("Dornod", "Asia/Choibalsan"),
    ("Sukhbaatar", "Asia/Choibalsan"),
];

pub(crate) const MEXICO: Table = &[
    ("Baja California", "America/Tijuana"),
    ("Sonora", "America/Hermosillo"),
    ("Baja California Sur", "America/Mazatlan"),
    ("Nayarit", "America/Mazatlan"),
    ("Sinaloa", "America/Mazatlan"),
    ("Chihuahua", "America/Chihuahua"),
    ("Quintana Roo", "America/Cancun"),
];

/// Keys are what remains once "Oblast", "Krai", "-skaya" and friends are stripped, which is
/// why some look truncated ("Samar", "Tom").
pub(crate) const RUSSIA: Table = &[
    ("Kaliningrad", "Europe/Kaliningrad"),
    ("Kirov", "Europe/Kirov"),
    ("Saratov", "Europe/Volgograd"),
    ("Volgograd", "Europe/Volgograd"),
    ("Astrakhan", "Europe/Volgograd"),
    ("Samar", "Europe/Samara"),
    ("Samara", "Europe/Samara"),
    ("Udmurt", "Europe/Samara"),
    ("Ulyanovsk", "Europe/Ulyanovsk"),
    ("Bashkortostan", "Asia/Yekaterinburg"),
    ("Chelyabin", "Asia/Yekaterinburg"),
    ("Chelyabinsk", "Asia/Yekaterinburg"),
    ("Khanty-Mansi", "Asia/Yekaterinburg"),
    ("Khanty-Mansiyskiy", "Asia/Yekaterinburg"),
    ("Kurgan", "Asia/Yekaterinburg"),
    ("Orenburg", "Asia/Yekaterinburg"),
    ("Perm", "Asia/Yekaterinburg"),
    ("Permskiy", "Asia/Yekaterinburg"),
    ("Sverdlov", "Asia/Yekaterinburg"),
    ("Sverdlovsk", "Asia/Yekaterinburg"),
    ("Tyumen", "Asia/Yekaterinburg"),
    ("Yamalo-Nenets", "Asia/Yekaterinburg"),
    ("Yamalo-Nenetskiy", "Asia/Yekaterinburg"),
    ("Altai", "Asia/Omsk"),
    ("Altay", "Asia/Omsk"),
    ("Altayskiy", "Asia/Omsk"),
    ("Om", "Asia/Omsk"),
    ("Omsk", "Asia/Omsk"),
    ("Novosibir", "Asia/Novosibirsk"),
    ("Novosibirsk", "Asia/Novosibirsk"),
    ("Tom", "Asia/Novosibirsk"),
    ("Tomsk", "Asia/Novosibirsk"),
    ("Kemerov", "Asia/Novokuznetsk"),
    ("Kemerovo", "Asia/Novokuznetsk"),
    ("Khakasiya", "Asia/Krasnoyarsk"),
    ("Khakassia", "Asia/Krasnoyarsk"),
    ("Krasnoyarsk", "Asia/Krasnoyarsk"),
    ("Krasnoyarskiy", "Asia/Krasnoyarsk"),
    ("Tuva", "Asia/Krasnoyarsk"),
    ("Irkut", "Asia/Irkutsk"),
    ("Irkutsk", "Asia/Irkutsk"),
    ("Buryatia", "Asia/Irkutsk"),
    ("Buryatiya", "Asia/Irkutsk"),
    ("Amur", "Asia/Yakutsk"),
    ("Zabaykalsky", "Asia/Yakutsk"),
    ("Jewish Autonomous", "Asia/Vladivostok"),
    ("Evrey avtonomnaya", "Asia/Vladivostok"),
    ("Khabarovsk", "Asia/Vladivostok"),
    ("Khabarovskiy", "Asia/Vladivostok"),
    ("Primorsky", "Asia/Vladivostok"),
    ("Primorskiy", "Asia/Vladivostok"),
    ("Sakhalin", "Asia/Sakhalin"),
    ("Magadan", "Asia/Magadan"),
    ("Kamchatka", "Asia/Kamchatka"),
    ("Chukotka", "Asia/Anadyr"),
];

/// US states lying entirely in one zone.
pub(crate) const US_STATES: Table = &[
    ("Connecticut", "America/New_York"),
    ("Delaware", "America/New_York"),
    ("District of Columbia", "America/New_York"),
    ("Georgia", "America/New_York"),
    ("Maine", "America/New_York"),
    ("Maryland", "America/New_York"),
    ("Massachusetts", "America/New_York"),
    ("New Hampshire", "America/New_York"),
    ("New Jersey", "America/New_York"),
    ("New York", "America/New_York"),
    ("North Carolina", "America/New_York"),
    ("Ohio", "America/New_York"),
    ("Pennsylvania", "America/New_York"),
    ("Rhode Island", "America/New_York"),
    ("South Carolina", "America/New_York"),
    ("Vermont", "America/New_York"),
    ("Virginia", "America/New_York"),
    ("West Virginia", "America/New_York"),
    ("Alabama", "America/Chicago"),
    ("Arkansas", "America/Chicago"),
    ("Illinois", "America/Chicago"),
    ("Iowa", "America/Chicago"),
    ("Louisiana", "America/Chicago"),
    ("Minnesota", "America/Chicago"),
    ("Mississippi", "America/Chicago"),
    ("Missouri", "America/Chicago"),
    ("Oklahoma", "America/Chicago"),
    ("Wisconsin", "America/Chicago"),
    ("Colorado", "America/Denver"),
    ("Montana", "America/Denver"),
    ("New Mexico", "America/Denver"),
    ("Utah", "America/Denver"),
    ("Wyoming", "America/Denver"),
    ("California", "America/Los_Angeles"),
    ("Nevada", "America/Los_Angeles"),
    ("Washington", "America/Los_Angeles"),
    ("Hawaii", "Pacific/Honolulu"),
];

pub(crate) const INDIANA_COUNTIES: Table = &[
    ("Jasper", "America/Chicago"),
    ("Lake", "America/Chicago"),
    ("LaPorte", "America/Chicago"),
    ("Newton", "America/Chicago"),
    ("Porter", "America/Chicago"),
    ("Gibson", "America/Chicago"),
    ("Posey", "America/Chicago"),
    ("Spencer", "America/Chicago"),
    ("Vanderburgh", "America/Chicago"),
    ("Warrick", "America/Chicago"),
    ("Starke", "America/Indiana/Knox"),
    ("Perry", "America/Indiana/Tell_City"),
    ("Pulaski", "America/Indiana/Winamac"),
    ("Pike", "America/Indiana/Petersburg"),
    ("Daviess", "America/Indiana/Vincennes"),
    ("Dubois", "America/Indiana/Vincennes"),
    ("Knox", "America/Indiana/Vincennes"),
    ("Martin", "America/Indiana/Vincennes"),
    ("Crawford", "America/Indiana/Marengo"),
    ("Clark", "America/Kentucky/Louisville"),
    ("Floyd", "America/Kentucky/Louisville"),
    ("Harrison", "America/Kentucky/Louisville"),
    ("Switzerland", "America/Indiana/Vevay"),
];

pub(crate) const KANSAS_COUNTIES: Table = &[
    ("Sherman", "America/Denver"),
    ("Wallace", "America/Denver"),
    ("Greeley", "America/Denver"),
    ("Hamilton", "America/Denver"),
];

pub(crate) const KENTUCKY_COUNTIES: Table = &[
    ("Adair", "America/Chicago"),
    ("Allen", "America/Chicago"),
    ("Ballard", "America/Chicago"),
    ("Barren", "America/Chicago"),
    ("Breckinridge", "America/Chicago"),
    ("Butler", "America/Chicago"),
    ("Caldwell", "America/Chicago"),
    ("Calloway", "America/Chicago"),
    ("Carlisle", "America/Chicago"),
    ("Christian", "America/Chicago"),
    ("Clinton", "America/Chicago"),
    ("Crittenden", "America/Chicago"),
    ("Cumberland", "America/Chicago"),
    ("Daviess", "America/Chicago"),
    ("Edmonson", "America/Chicago"),
    ("Fulton", "America/Chicago"),
    ("Graves", "America/Chicago"),
    ("Grayson", "America/Chicago"),
    ("Green", "America/Chicago"),
    ("Hancock", "America/Chicago"),
    ("Hart", "America/Chicago"),
    ("Henderson", "America/Chicago"),
    ("Hickman", "America/Chicago"),
    ("Hopkins", "America/Chicago"),
    ("Livingston", "America/Chicago"),
    ("Logan", "America/Chicago"),
    ("Lyon", "America/Chicago"),
    ("McCracken", "America/Chicago"),
    ("McLean", "America/Chicago"),
    ("Marshall", "America/Chicago"),
    ("Meade", "America/Chicago"),
    ("Metcalfe", "America/Chicago"),
    ("Monroe", "America/Chicago"),
    ("Muhlenberg", "America/Chicago"),
    ("Ohio", "America/Chicago"),
    ("Russell", "America/Chicago"),
    ("Simpson", "America/Chicago"),
    ("Todd", "America/Chicago"),
    ("Trigg", "America/Chicago"),
    ("Union", "America/Chicago"),
    ("Warren", "America/Chicago"),
    ("Webster", "America/Chicago"),
];

pub(crate) const MICHIGAN_COUNTIES: Table = &[
    ("Gogebic", "America/Menominee"),
    ("Iron", "America/Menominee"),
    ("Dickinson", "America/Menominee"),
    ("Menominee", "America/Menominee"),
];

/// Cherry County is split and handled separately.
pub(crate) const NEBRASKA_COUNTIES: Table = &[
    ("Arthur", "America/Denver"),
    ("Chase", "America/Denver"),
    ("Dundy", "America/Denver"),
    ("Grant", "America/Denver"),
    ("Hooker", "America/Denver"),
    ("Keith", "America/Denver"),
    ("Perkins", "America/Denver"),
    ("Sioux", "America/Denver"),
    ("Scotts Bluff", "America/Denver"),
    ("Banner", "America/Denver"),
    ("Kimball", "America/Denver"),
    ("Dawes", "America/Denver"),
    ("Box Butte", "America/Denver"),
    ("Morrill", "America/Denver"),
    ("Cheyenne", "America/Denver"),
    ("Sheridan", "America/Denver"),
    ("Garden", "America/Denver"),
    ("Deuel", "America/Denver"),
];

/// Dunn and McKenzie counties are split and handled separately.
pub(crate) const NORTH_DAKOTA_COUNTIES: Table = &[
    ("Bowman", "America/Denver"),
    ("Adams", "America/Denver"),
    ("Slope", "America/Denver"),
    ("Hettinger", "America/Denver"),
    ("Grant", "America/Denver"),
    ("Stark", "America/Denver"),
    ("Billings", "America/Denver"),
    ("Golden Valley", "America/Denver"),
];

pub(crate) const SOUTH_DAKOTA_COUNTIES: Table = &[
    ("Harding", "America/Denver"),
    ("Perkins", "America/Denver"),
    ("Corson", "America/Denver"),
    ("Dewey", "America/Denver"),
    ("Ziebach", "America/Denver"),
    ("Haakon", "America/Denver"),
    ("Jackson", "America/Denver"),
    ("Bennett", "America/Denver"),
    ("Meade", "America/Denver"),
    ("Lawrence", "America/Denver"),
    ("Pennington", "America/Denver"),
    ("Custer", "America/Denver"),
    ("Fall River", "America/Denver"),
    ("Oglala Lakota", "America/Denver"),
    ("Butte", "America/Denver"),
];

pub(crate) const TENNESSEE_COUNTIES: Table = &[
    ("Scott", "America/New_York"),
    ("Campbell", "America/New_York"),
    ("Claiborne", "America/New_York"),
    ("Hancock", "America/New_York"),
    ("Hawkins", "America/New_York"),
    ("Sullivan", "America/New_York"),
    ("Johnson", "America/New_York"),
    ("Morgan", "America/New_York"),
    ("Anderson", "America/New_York"),
    ("Union", "America/New_York"),
    ("Grainger", "America/New_York"),
    ("Hamblen", "America/New_York"),
    ("Greene", "America/New_York"),
    ("Washington", "America/New_York"),
    ("Unicoi", "America/New_York"),
    ("Carter", "America/New_York"),
    ("Roane", "America/New_York"),
    ("Loudon", "America/New_York"),
    ("Knox", "America/New_York"),
    ("Blount", "America/New_York"),
    ("Jefferson", "America/New_York"),
    ("Sevier", "America/New_York"),
    ("Cocke", "America/New_York"),
    ("Rhea", "America/New_York"),
    ("Meigs", "America/New_York"),
    ("McMinn", "America/New_York"),
    ("Monroe", "America/New_York"),
    ("Hamilton", "America/New_York"),
    ("Bradley", "America/New_York"),
    ("Polk", "America/New_York"),
];

pub(crate) const TEXAS_COUNTIES: Table = &[
    ("El Paso", "America/Denver"),
    ("Hudspeth", "America/Denver"),
];

/// Every table, for consistency checks.
#[cfg(test)]
pub(crate) const ALL: &[(&str, Table)] = &[
    ("ARGENTINA", ARGENTINA),
    ("AUSTRALIA", AUSTRALIA),
    ("BRAZIL", BRAZIL),
    ("CANADA", CANADA),
    ("INDONESIA", INDONESIA),
    ("KAZAKHSTAN", KAZAKHSTAN),
    ("MONGOLIA", MONGOLIA),
    ("MEXICO", MEXICO),
    ("RUSSIA", RUSSIA),
    ("US_STATES", US_STATES),
    ("INDIANA_COUNTIES", INDIANA_COUNTIES),
    ("KANSAS_COUNTIES", KANSAS_COUNTIES),
    ("KENTUCKY_COUNTIES", KENTUCKY_COUNTIES),
    ("MICHIGAN_COUNTIES", MICHIGAN_COUNTIES),
    ("NEBRASKA_COUNTIES", NEBRASKA_COUNTIES),
    ("NORTH_DAKOTA_COUNTIES", NORTH_DAKOTA_COUNTIES),
    ("SOUTH_DAKOTA_COUNTIES", SOUTH_DAKOTA_COUNTIES),
    ("TENNESSEE_COUNTIES", TENNESSEE_COUNTIES),
    ("TEXAS_COUNTIES", TEXAS_COUNTIES),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone::region_name::normalize_region;
    use std::collections::HashSet;

    #[test]
    fn keys_survive_normalization() {
        for (name, table) in ALL {
            for (key, _) in table.iter() {
                assert_eq!(
                    normalize_region(key).as_deref(),
                    Some(*key),
                    "key '{key}' in {name} is not normalized"
                );
            }
        }
        for key in AUSTRALIA_EAST {
            assert_eq!(normalize_region(key).as_deref(), Some(*key));
        }
    }

    #[test]
    fn keys_are_unique_per_table() {
        for (name, table) in ALL {
            let mut seen = HashSet::new();
            for (key, _) in table.iter() {
                assert!(seen.insert(key.to_ascii_lowercase()), "duplicate '{key}' in {name}");
            }
        }
    }

    #[test]
    fn zones_exist_in_the_tz_database() {
        for (name, table) in ALL {
            for (key, zone) in table.iter() {
                assert!(
                    zone.parse::<chrono_tz::Tz>().is_ok(),
                    "unknown zone '{zone}' for '{key}' in {name}"
                );
            }
        }
    }
}
