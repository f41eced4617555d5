//! Country dispatch: a single zone for most countries, a rule function for the ones spanning
//! several zones.

use crate::timezone::lookup::Lookup;
use crate::timezone::regions::{
    Table, ARGENTINA, AUSTRALIA, AUSTRALIA_EAST, BRAZIL, CANADA, INDIANA_COUNTIES, INDONESIA,
    KANSAS_COUNTIES, KAZAKHSTAN, KENTUCKY_COUNTIES, MEXICO, MICHIGAN_COUNTIES, MONGOLIA,
    NEBRASKA_COUNTIES, NORTH_DAKOTA_COUNTIES, RUSSIA, SOUTH_DAKOTA_COUNTIES, TENNESSEE_COUNTIES,
    TEXAS_COUNTIES, US_STATES,
};

/// How a country resolves. `Rules` returns `None` when the location should fall back to its
/// longitude offset.
#[derive(Clone, Copy)]
pub(crate) enum Country {
    Zone(&'static str),
    Rules(fn(&Lookup) -> Option<&'static str>),
}

/// Sorted by ISO 3166-1 alpha-2 code.
pub(crate) const COUNTRIES: &[(&str, Country)] = &[
    ("AD", Country::Zone("Europe/Andorra")),
    ("AE", Country::Zone("Asia/Dubai")),
    ("AF", Country::Zone("Asia/Kabul")),
    ("AG", Country::Zone("America/Antigua")),
    ("AI", Country::Zone("America/Anguilla")),
    ("AL", Country::Zone("Europe/Tirane")),
    ("AM", Country::Zone("Asia/Yerevan")),
    ("AO", Country::Zone("Africa/Luanda")),
    ("AQ", Country::Rules(antarctica)),
    ("AR", Country::Rules(argentina)),
    ("AS", Country::Zone("Pacific/Pago_Pago")),
    ("AT", Country::Zone("Europe/Vienna")),
    ("AU", Country::Rules(australia)),
    ("AW", Country::Zone("America/Aruba")),
    ("AX", Country::Zone("Europe/Mariehamn")),
    ("AZ", Country::Zone("Asia/Baku")),
    ("BA", Country::Zone("Europe/Sarajevo")),
    ("BB", Country::Zone("America/Barbados")),
    ("BD", Country::Zone("Asia/Dhaka")),
    ("BE", Country::Zone("Europe/Brussels")),
    ("BF", Country::Zone("Africa/Ouagadougou")),
    ("BG", Country::Zone("Europe/Sofia")),
    ("BH", Country::Zone("Asia/Bahrain")),
    ("BI", Country::Zone("Africa/Bujumbura")),
    ("BJ", Country::Zone("Africa/Porto-Novo")),
    ("BL", Country::Zone("America/St_Barthelemy")),
    ("BM", Country::Zone("Atlantic/Bermuda")),
    ("BN", Country::Zone("Asia/Brunei")),
    ("BO", Country::Zone("America/La_Paz")),
    ("BQ", Country::Zone("America/Kralendijk")),
    ("BR", Country::Rules(brazil)),
    ("BS", Country::Zone("America/Nassau")),
    ("BT", Country::Zone("Asia/Thimphu")),
    ("BW", Country::Zone("Africa/Gaborone")),
    ("BY", Country::Zone("Europe/Minsk")),
    ("BZ", Country::Zone("America/Belize")),
    ("CA", Country::Rules(canada)),
    ("CC", Country::Zone("Indian/Cocos")),
    ("CD", Country::Zone("Africa/Kinshasa")),
    ("CF", Country::Zone("Africa/Bangui")),
    ("CG", Country::Zone("Africa/Brazzaville")),
    ("CH", Country::Zone("Europe/Zurich")),
    ("CI", Country::Zone("Africa/Abidjan")),
    ("CK", Country::Zone("Pacific/Rarotonga")),
    ("CL", Country::Rules(chile)),
    ("CM", Country::Zone("Africa/Douala")),
    ("CN", Country::Zone("Asia/Shanghai")),
    ("CO", Country::Zone("America/Bogota")),
    ("CR", Country::Zone("America/Costa_Rica")),
    ("CU", Country::Zone("America/Havana")),
    ("CV", Country::Zone("Atlantic/Cape_Verde")),
    ("CW", Country::Zone("America/Curacao")),
    ("CX", Country::Zone("Indian/Christmas")),
    ("CY", Country::Zone("Asia/Nicosia")),
    ("CZ", Country::Zone("Europe/Prague")),
    ("DE", Country::Zone("Europe/Berlin")),
    ("DJ", Country::Zone("Africa/Djibouti")),
    ("DK", Country::Zone("Europe/Copenhagen")),
    ("DM", Country::Zone("America/Dominica")),
    ("DO", Country::Zone("America/Santo_Domingo")),
    ("DZ", Country::Zone("Africa/Algiers")),
    ("EC", Country::Rules(ecuador)),
    ("EE", Country::Zone("Europe/Tallinn")),
    ("EG", Country::Zone("Africa/Cairo")),
    ("EH", Country::Zone("Africa/El_Aaiun")),
    ("ER", Country::Zone("Africa/Asmara")),
    ("ES", Country::Rules(spain)),
    ("ET", Country::Zone("Africa/Addis_Ababa")),
    ("FI", Country::Zone("Europe/Helsinki")),
    ("FJ", Country::Zone("Pacific/Fiji")),
    ("FK", Country::Zone("Atlantic/Stanley")),
    ("FM", Country::Rules(micronesia)),
    ("FO", Country::Zone("Atlantic/Faroe")),
    ("FR", Country::Zone("Europe/Paris")),
    ("GA", Country::Zone("Africa/Libreville")),
    ("GB", Country::Zone("Europe/London")),
    ("GD", Country::Zone("America/Grenada")),
    ("GE", Country::Zone("Asia/Tbilisi")),
    ("GF", Country::Zone("America/Cayenne")),
    ("GG", Country::Zone("Europe/Guernsey")),
    ("GH", Country::Zone("Africa/Accra")),
    ("GI", Country::Zone("Europe/Gibraltar")),
    ("GL", Country::Rules(greenland)),
    ("GM", Country::Zone("Africa/Banjul")),
    ("GN", Country::Zone("Africa/Conakry")),
    ("GP", Country::Zone("America/Guadeloupe")),
    ("GQ", Country::Zone("Africa/Malabo")),
    ("GR", Country::Zone("Europe/Athens")),
    ("GS", Country::Zone("Atlantic/South_Georgia")),
    ("GT", Country::Zone("America/Guatemala")),
    ("GU", Country::Zone("Pacific/Guam")),
    ("GW", Country::Zone("Africa/Bissau")),
    ("GY", Country::Zone("America/Guyana")),
    ("HK", Country::Zone("Asia/Hong_Kong")),
    ("HN", Country::Zone("America/Tegucigalpa")),
    ("HR", Country::Zone("Europe/Zagreb")),
    ("HT", Country::Zone("America/Port-au-Prince")),
    ("HU", Country::Zone("Europe/Budapest")),
    ("ID", Country::Rules(indonesia)),
    ("IE", Country::Zone("Europe/Dublin")),
    ("IL", Country::Zone("Asia/Jerusalem")),
    ("IM", Country::Zone("Europe/Isle_of_Man")),
    ("IN", Country::Zone("Asia/Kolkata")),
    ("IO", Country::Zone("Indian/Chagos")),
    ("IQ", Country::Zone("Asia/Baghdad")),
    ("IR", Country::Zone("Asia/Tehran")),
    ("IS", Country::Zone("Atlantic/Reykjavik")),
    ("IT", Country::Zone("Europe/Rome")),
    ("JM", Country::Zone("America/Jamaica")),
    ("JO", Country::Zone("Asia/Amman")),
    ("JP", Country::Zone("Asia/Tokyo")),
    ("KE", Country::Zone("Africa/Nairobi")),
    ("KG", Country::Zone("Asia/Bishkek")),
    ("KH", Country::Zone("Asia/Phnom_Penh")),
    ("KI", Country::Rules(kiribati)),
    ("KM", Country::Zone("Indian/Comoro")),
    ("KN", Country::Zone("America/St_Kitts")),
    ("KP", Country::Zone("Asia/Pyongyang")),
    ("KR", Country::Zone("Asia/Seoul")),
    ("KW", Country::Zone("Asia/Kuwait")),
    ("KY", Country::Zone("America/Cayman")),
    ("KZ", Country::Rules(kazakhstan)),
    ("LA", Country::Zone("Asia/Vientiane")),
    ("LB", Country::Zone("Asia/Beirut")),
    ("LC", Country::Zone("America/St_Lucia")),
    ("LI", Country::Zone("Europe/Vaduz")),
    ("LK", Country::Zone("Asia/Colombo")),
    ("LR", Country::Zone("Africa/Monrovia")),
    ("LS", Country::Zone("Africa/Maseru")),
    ("LT", Country::Zone("Europe/Vilnius")),
    ("LU", Country::Zone("Europe/Luxembourg")),
    ("LV", Country::Zone("Europe/Riga")),
    ("LY", Country::Zone("Africa/Tripoli")),
    ("MA", Country::Zone("Africa/Casablanca")),
    ("MC", Country::Zone("Europe/Monaco")),
    ("MD", Country::Zone("Europe/Chisinau")),
    ("ME", Country::Zone("Europe/Podgorica")),
    ("MF", Country::Zone("America/Marigot")),
    ("MG", Country::Zone("Indian/Antananarivo")),
    ("MH", Country::Zone("Pacific/Majuro")),
    ("MK", Country::Zone("Europe/Skopje")),
    ("ML", Country::Zone("Africa/Bamako")),
    ("MM", Country::Zone("Asia/Yangon")),
    ("MN", Country::Rules(mongolia)),
    ("MO", Country::Zone("Asia/Macau")),
    ("MP", Country::Zone("Pacific/Saipan")),
    ("MQ", Country::Zone("America/Martinique")),
    ("MR", Country::Zone("Africa/Nouakchott")),
    ("MS", Country::Zone("America/Montserrat")),
    ("MT", Country::Zone("Europe/Malta")),
    ("MU", Country::Zone("Indian/Mauritius")),
    ("MV", Country::Zone("Indian/Maldives")),
    ("MW", Country::Zone("Africa/Blantyre")),
    ("MX", Country::Rules(mexico)),
    ("MY", Country::Zone("Asia/Kuala_Lumpur")),
    ("MZ", Country::Zone("Africa/Maputo")),
    ("NA", Country::Zone("Africa/Windhoek")),
    ("NC", Country::Zone("Pacific/Noumea")),
    ("NE", Country::Zone("Africa/Niamey")),
    ("NF", Country::Zone("Pacific/Norfolk")),
    ("NG", Country::Zone("Africa/Lagos")),
    ("NI", Country::Zone("America/Managua")),
    ("NL", Country::Zone("Europe/Amsterdam")),
    ("NO", Country::Zone("Europe/Oslo")),
    ("NP", Country::Zone("Asia/Kathmandu")),
    ("NR", Country::Zone("Pacific/Nauru")),
    ("NU", Country::Zone("Pacific/Niue")),
    ("NZ", Country::Rules(new_zealand)),
    ("OM", Country::Zone("Asia/Muscat")),
    ("PA", Country::Zone("America/Panama")),
    ("PE", Country::Zone("America/Lima")),
    ("PF", Country::Rules(french_polynesia)),
    ("PG", Country::Rules(papua_new_guinea)),
    ("PH", Country::Zone("Asia/Manila")),
    ("PK", Country::Zone("Asia/Karachi")),
    ("PL", Country::Zone("Europe/Warsaw")),
    ("PM", Country::Zone("America/Miquelon")),
    ("PN", Country::Zone("Pacific/Pitcairn")),
    ("PR", Country::Zone("America/Puerto_Rico")),
    ("PS", Country::Zone("Asia/Hebron")),
    ("PT", Country::Rules(portugal)),
    ("PW", Country::Zone("Pacific/Palau")),
    ("PY", Country::Zone("America/Asuncion")),
    ("QA", Country::Zone("Asia/Qatar")),
    ("RE", Country::Zone("Indian/Reunion")),
    ("RO", Country::Zone("Europe/Bucharest")),
    ("RS", Country::Zone("Europe/Belgrade")),
    ("RU", Country::Rules(russia)),
    ("RW", Country::Zone("Africa/Kigali")),
    ("SA", Country::Zone("Asia/Riyadh")),
    ("SB", Country::Zone("Pacific/Guadalcanal")),
    ("SC", Country::Zone("Indian/Mahe")),
    ("SD", Country::Zone("Africa/Khartoum")),
    ("SE", Country::Zone("Europe/Stockholm")),
    ("SG", Country::Zone("Asia/Singapore")),
    ("SH", Country::Zone("Atlantic/St_Helena")),
    ("SI", Country::Zone("Europe/Ljubljana")),
    ("SJ", Country::Zone("Arctic/Longyearbyen")),
    ("SK", Country::Zone("Europe/Bratislava")),
    ("SL", Country::Zone("Africa/Freetown")),
    ("SM", Country::Zone("Europe/San_Marino")),
    ("SN", Country::Zone("Africa/Dakar")),
    ("SO", Country::Zone("Africa/Mogadishu")),
    ("SR", Country::Zone("America/Paramaribo")),
    ("SS", Country::Zone("Africa/Juba")),
    ("ST", Country::Zone("Africa/Sao_Tome")),
    ("SV", Country::Zone("America/El_Salvador")),
    ("SX", Country::Zone("America/Lower_Princes")),
    ("SY", Country::Zone("Asia/Damascus")),
    ("SZ", Country::Zone("Africa/Mbabane")),
    ("TC", Country::Zone("America/Grand_Turk")),
    ("TD", Country::Zone("Africa/Ndjamena")),
    ("TF", Country::Zone("Indian/Kerguelen")),
    ("TG", Country::Zone("Africa/Lome")),
    ("TH", Country::Zone("Asia/Bangkok")),
    ("TJ", Country::Zone("Asia/Dushanbe")),
    ("TK", Country::Zone("Pacific/Fakaofo")),
    ("TL", Country::Zone("Asia/Dili")),
    ("TM", Country::Zone("Asia/Ashgabat")),
    ("TN", Country::Zone("Africa/Tunis")),
    ("TO", Country::Zone("Pacific/Tongatapu")),
    ("TR", Country::Zone("Europe/Istanbul")),
    ("TT", Country::Zone("America/Port_of_Spain")),
    ("TV", Country::Zone("Pacific/Funafuti")),
    ("TW", Country::Zone("Asia/Taipei")),
    ("TZ", Country::Zone("Africa/Dar_es_Salaam")),
    ("UA", Country::Zone("Europe/Kiev")),
    ("UG", Country::Zone("Africa/Kampala")),
    ("UM", Country::Rules(us_minor_outlying_islands)),
    ("US", Country::Rules(united_states)),
    ("UY", Country::Zone("America/Montevideo")),
    ("UZ", Country::Zone("Asia/Tashkent")),
    ("VA", Country::Zone("Europe/Vatican")),
    ("VC", Country::Zone("America/St_Vincent")),
    ("VE", Country::Zone("America/Caracas")),
    ("VG", Country::Zone("America/Tortola")),
    ("VI", Country::Zone("America/St_Thomas")),
    ("VN", Country::Zone("Asia/Ho_Chi_Minh")),
    ("VU", Country::Zone("Pacific/Efate")),
    ("WF", Country::Zone("Pacific/Wallis")),
    ("WS", Country::Zone("Pacific/Apia")),
    ("YE", Country::Zone("Asia/Aden")),
    ("YT", Country::Zone("Indian/Mayotte")),
    ("ZA", Country::Zone("Africa/Johannesburg")),
    ("ZM", Country::Zone("Africa/Lusaka")),
    ("ZW", Country::Zone("Africa/Harare")),
];

pub(crate) fn country(code: &str) -> Option<Country> {
    COUNTRIES
        .binary_search_by(|(key, _)| (*key).cmp(code))
        .ok()
        .map(|index| COUNTRIES[index].1)
}

fn antarctica(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    let zone = if lat < -88.75 {
        "Antarctica/South_Pole"
    } else if lon > -90.0 && lon < -20.0 {
        "Antarctica/Palmer"
    } else if lon > 160.0 || lon < -150.0 {
        "Antarctica/McMurdo"
    } else if lat < -80.0 || lon < 15.0 {
        "Antarctica/Troll"
    } else if lon < 45.0 {
        "Antarctica/Syowa"
    } else if lon < 70.0 {
        "Antarctica/Mawson"
    } else if lon < 100.0 {
        "Antarctica/Davis"
    } else if lon < 110.0 && lat < -78.0 {
        "Antarctica/Troll"
    } else if lon < 135.0 {
        "Antarctica/Casey"
    } else {
        "Antarctica/DumontDUrville"
    };
    Some(zone)
}

fn argentina(l: &Lookup) -> Option<&'static str> {
    Some(l.region_in(ARGENTINA).unwrap_or("America/Argentina/Cordoba"))
}

fn australia(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    if lat < -50.0 {
        return Some("Australia/Macquarie");
    }
    if let Some(zone) = l.region_in(AUSTRALIA) {
        return Some(zone);
    }
    if !l.region_is_any(AUSTRALIA_EAST) {
        return None;
    }
    let zone = if lon < 141.9 && lat > -32.2 && lat < -31.6 {
        "Australia/Broken_Hill"
    } else if l.locality_is("Lord Howe Island") {
        "Australia/Lord_Howe"
    } else {
        "Australia/Sydney"
    };
    Some(zone)
}

fn brazil(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    if lon > -34.0 {
        return Some("America/Noronha");
    }
    if l.region_is("Amazonas") {
        return Some(if -5.33 * lon - 2.41 * lat >= 382.97 {
            "America/Eirunepe"
        } else {
            "America/Manaus"
        });
    }
    Some(l.region_in(BRAZIL).unwrap_or("America/Sao_Paulo"))
}

fn canada(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    if let Some(zone) = l.region_in(CANADA) {
        return Some(zone);
    }
    let region = l.region()?;
    let zone = match region.to_ascii_lowercase().as_str() {
        "saskatchewan" => {
            // Lloydminster keeps Alberta time.
            if lat < 53.55 && lat > 53.0 && lon < -109.55 {
                "America/Edmonton"
            } else {
                "America/Regina"
            }
        }
        "nunavut" => {
            if l.locality_is("Coral Harbour") {
                "America/Coral_Harbour"
            } else if lon > -85.0 || l.locality_is("Arctic Bay") {
                "America/Iqaluit"
            } else if lon < -102.0 || (lat > 67.0 && lat < 73.0 && lon < -89.0) {
                "America/Cambridge_Bay"
            } else {
                "America/Rankin_Inlet"
            }
        }
        "newfoundland and labrador" => {
            if lon > -57.1 && lat < 53.5 {
                "America/St_Johns"
            } else {
                "America/Goose_Bay"
            }
        }
        "quebec" => {
            if lon > -51.6 {
                "America/Blanc-Sablon"
            } else {
                "America/Montreal"
            }
        }
        "ontario" => {
            if lon > -90.0 {
                if lat > 52.9 && lat < 54.0 && lon < -88.0 {
                    "America/Winnipeg"
                } else {
                    "America/Toronto"
                }
            } else if lon > -91.0 && lat > 51.0 && lat < 51.7 {
                "America/Atikokan"
            } else if lon > -91.0 && lat < 49.2 {
                "America/Toronto"
            } else if lon > -92.0 && lat < 49.0 {
                "America/Atikokan"
            } else {
                "America/Winnipeg"
            }
        }
        "british columbia" => {
            if lat < 50.0 && lon > -116.88 && (lon < -116.4 || (lat < 49.3 && lon < -116.0)) {
                "America/Creston"
            } else if lon > -116.88 || (lat > 51.0 && lon > -117.7) {
                "America/Edmonton"
            } else if -6.24 * lon - 8.63 * lat < 284.65 {
                "America/Fort_Nelson"
            } else {
                "America/Vancouver"
            }
        }
        _ => return None,
    };
    Some(zone)
}

fn chile(l: &Lookup) -> Option<&'static str> {
    let zone = if l.longitude < -90.0 {
        "Pacific/Easter"
    } else if l.region_contains("Magallanes") {
        "America/Punta_Arenas"
    } else {
        "America/Santiago"
    };
    Some(zone)
}

fn ecuador(l: &Lookup) -> Option<&'static str> {
    Some(if l.longitude < -85.0 {
        "Pacific/Galapagos"
    } else {
        "America/Guayaquil"
    })
}

fn spain(l: &Lookup) -> Option<&'static str> {
    Some(if l.longitude < -10.0 {
        "Atlantic/Canary"
    } else {
        "Europe/Madrid"
    })
}

fn micronesia(l: &Lookup) -> Option<&'static str> {
    Some(if l.longitude > 154.0 {
        "Pacific/Pohnpei"
    } else {
        "Pacific/Chuuk"
    })
}

fn greenland(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    let zone = if lon > -32.0 && lat > 70.0 && lat < 74.0 {
        "America/Scoresbysund"
    } else if lon > -23.0 && lat > 75.0 && lat < 78.0 {
        "America/Danmarkshavn"
    } else if lon < -66.0 {
        "America/Thule"
    } else {
        "America/Nuuk"
    };
    Some(zone)
}

fn indonesia(l: &Lookup) -> Option<&'static str> {
    l.region_in(INDONESIA)
}

fn kiribati(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    let zone = if lon < -178.0 || lon > 0.0 {
        "Pacific/Tarawa"
    } else if lat > -2.5 || lon > -158.5 {
        "Pacific/Kiritimati"
    } else {
        "Pacific/Kanton"
    };
    Some(zone)
}

fn kazakhstan(l: &Lookup) -> Option<&'static str> {
    Some(l.region_in(KAZAKHSTAN).unwrap_or("Asia/Almaty"))
}

fn mongolia(l: &Lookup) -> Option<&'static str> {
    Some(l.region_in(MONGOLIA).unwrap_or("Asia/Ulaanbaatar"))
}

fn mexico(l: &Lookup) -> Option<&'static str> {
    Some(l.region_in(MEXICO).unwrap_or("America/Mexico_City"))
}

fn new_zealand(l: &Lookup) -> Option<&'static str> {
    Some(if l.longitude < 0.0 {
        "Pacific/Chatham"
    } else {
        "Pacific/Auckland"
    })
}

fn french_polynesia(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    let zone = if lon > -135.3 && lat < -23.0 {
        "Pacific/Gambier"
    } else if lon > 142.5 && lat > -11.0 {
        "Pacific/Marquesas"
    } else {
        "Pacific/Tahiti"
    };
    Some(zone)
}

fn papua_new_guinea(l: &Lookup) -> Option<&'static str> {
    Some(if l.region_contains("Bougainville") {
        "Pacific/Bougainville"
    } else {
        "Pacific/Port_Moresby"
    })
}

fn portugal(l: &Lookup) -> Option<&'static str> {
    let zone = if l.latitude < 35.0 {
        "Atlantic/Madeira"
    } else if l.longitude < -15.0 {
        "Atlantic/Azores"
    } else {
        "Europe/Lisbon"
    };
    Some(zone)
}

fn russia(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    if l.region_is("Sakha") {
        let zone = if lon > 142.0 && lat < 73.0 && (lat > 65.2 || lon > 146.2) {
            "Asia/Srednekolymsk"
        } else if lon > 140.0 && lat < 65.2 {
            "Asia/Ust-Nera"
        } else if (lon > 133.5 && lat > 65.2) || (lon > 131.0 && lat > 65.5 && lat < 68.0) {
            "Asia/Vladivostok"
        } else {
            "Asia/Yakutsk"
        };
        return Some(zone);
    }
    if let Some(zone) = l.region_in(RUSSIA) {
        return Some(zone);
    }
    (lon < 68.0).then_some("Europe/Moscow")
}

fn us_minor_outlying_islands(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    let zone = if lat > 20.0 {
        "Pacific/Midway"
    } else if lon > 0.0 {
        "Pacific/Wake"
    } else if lat > 10.0 {
        "Pacific/Johnston"
    } else if lon < -170.0 {
        // Howland and Baker Islands
        "Etc/GMT+12"
    } else {
        "Pacific/Midway"
    };
    Some(zone)
}

fn united_states(l: &Lookup) -> Option<&'static str> {
    let (lat, lon) = (l.latitude, l.longitude);
    if let Some(zone) = l.region_in(US_STATES) {
        return Some(zone);
    }
    let region = l.region()?;
    let counties = |table: Table, default: &'static str| Some(l.sub_region_in(table).unwrap_or(default));
    match region.to_ascii_lowercase().as_str() {
        "alaska" => Some(if lon < -169.5 || lon > 0.0 {
            "America/Adak"
        } else {
            "America/Anchorage"
        }),
        "arizona" => {
            // The Navajo Nation observes DST, the Hopi reservation inside it does not.
            let navajo = (lat >= 35.22 && lon >= -111.0)
                || (lat >= 35.77 && lat <= 36.87 && lon >= -111.75);
            let hopi = lat > 35.6 && lat < 36.0 && lon > -111.0 && lon < -110.15;
            Some(if navajo && !hopi {
                "America/Shiprock"
            } else {
                "America/Phoenix"
            })
        }
        "florida" => {
            let panhandle = (-3.99 * lon - 2.02 * lat > 278.862
                || -5.81 * lon + 2.8 * lat > 579.039)
                && (lat > 30.0 || lon < -84.95);
            Some(if panhandle {
                "America/Chicago"
            } else {
                "America/New_York"
            })
        }
        "idaho" => Some(if lat > 45.5 && lon < -114.0 {
            "America/Los_Angeles"
        } else {
            "America/Boise"
        }),
        "indiana" => counties(INDIANA_COUNTIES, "America/Indiana/Indianapolis"),
        "kansas" => counties(KANSAS_COUNTIES, "America/Chicago"),
        "kentucky" => counties(KENTUCKY_COUNTIES, "America/New_York"),
        "michigan" => counties(MICHIGAN_COUNTIES, "America/Detroit"),
        "nebraska" => {
            if l.sub_region_is("Cherry") {
                Some(if lon < -100.65 {
                    "America/Denver"
                } else {
                    "America/Chicago"
                })
            } else {
                counties(NEBRASKA_COUNTIES, "America/Chicago")
            }
        }
        "north dakota" => {
            if l.sub_region_is("Dunn") || l.sub_region_is("McKenzie") {
                Some(if lon < -102.0 && lat < 47.45 {
                    "America/Denver"
                } else {
                    "America/Chicago"
                })
            } else {
                counties(NORTH_DAKOTA_COUNTIES, "America/Chicago")
            }
        }
        "oregon" => Some(if l.sub_region_is("Malheur") && lat > 42.4 {
            "America/Boise"
        } else {
            "America/Los_Angeles"
        }),
        "south dakota" => counties(SOUTH_DAKOTA_COUNTIES, "America/Chicago"),
        "tennessee" => counties(TENNESSEE_COUNTIES, "America/Chicago"),
        "texas" => counties(TEXAS_COUNTIES, "America/Chicago"),
        _ => None,
    }
}
