//! Country reference data.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

macro_rules! countries {
    ($($code:literal => ($name:literal, $region:literal)),* $(,)?) => {
        const COUNTRIES: &[Country] = &[
            $(Country { code: $code, name: $name, region: $region }),*
        ];

        /// Every country code in the catalog, in table order.
        pub const ALL_COUNTRY_CODES: &[&str] = &[$($code),*];
    };
}

countries! {
    "AE" => ("United Arab Emirates", "Asia"),
    "AR" => ("Argentina", "Americas"),
    "AT" => ("Austria", "Europe"),
    "AU" => ("Australia", "Oceania"),
    "BD" => ("Bangladesh", "Asia"),
    "BE" => ("Belgium", "Europe"),
    "BG" => ("Bulgaria", "Europe"),
    "BR" => ("Brazil", "Americas"),
    "CA" => ("Canada", "Americas"),
    "CH" => ("Switzerland", "Europe"),
    "CL" => ("Chile", "Americas"),
    "CN" => ("China", "Asia"),
    "CO" => ("Colombia", "Americas"),
    "CY" => ("Cyprus", "Europe"),
    "CZ" => ("Czech Republic", "Europe"),
    "DE" => ("Germany", "Europe"),
    "DK" => ("Denmark", "Europe"),
    "EE" => ("Estonia", "Europe"),
    "EG" => ("Egypt", "Africa"),
    "ES" => ("Spain", "Europe"),
    "FI" => ("Finland", "Europe"),
    "FR" => ("France", "Europe"),
    "GB" => ("United Kingdom", "Europe"),
    "GR" => ("Greece", "Europe"),
    "HK" => ("Hong Kong", "Asia"),
    "HR" => ("Croatia", "Europe"),
    "HU" => ("Hungary", "Europe"),
    "ID" => ("Indonesia", "Asia"),
    "IE" => ("Ireland", "Europe"),
    "IL" => ("Israel", "Asia"),
    "IN" => ("India", "Asia"),
    "IS" => ("Iceland", "Europe"),
    "IT" => ("Italy", "Europe"),
    "JP" => ("Japan", "Asia"),
    "KE" => ("Kenya", "Africa"),
    "KR" => ("South Korea", "Asia"),
    "LI" => ("Liechtenstein", "Europe"),
    "LT" => ("Lithuania", "Europe"),
    "LU" => ("Luxembourg", "Europe"),
    "LV" => ("Latvia", "Europe"),
    "MC" => ("Monaco", "Europe"),
    "MT" => ("Malta", "Europe"),
    "MX" => ("Mexico", "Americas"),
    "MY" => ("Malaysia", "Asia"),
    "NG" => ("Nigeria", "Africa"),
    "NL" => ("Netherlands", "Europe"),
    "NO" => ("Norway", "Europe"),
    "NZ" => ("New Zealand", "Oceania"),
    "PE" => ("Peru", "Americas"),
    "PH" => ("Philippines", "Asia"),
    "PK" => ("Pakistan", "Asia"),
    "PL" => ("Poland", "Europe"),
    "PT" => ("Portugal", "Europe"),
    "RO" => ("Romania", "Europe"),
    "RU" => ("Russia", "Europe"),
    "SA" => ("Saudi Arabia", "Asia"),
    "SE" => ("Sweden", "Europe"),
    "SG" => ("Singapore", "Asia"),
    "SI" => ("Slovenia", "Europe"),
    "SK" => ("Slovakia", "Europe"),
    "SM" => ("San Marino", "Europe"),
    "TH" => ("Thailand", "Asia"),
    "TR" => ("Turkey", "Asia"),
    "UA" => ("Ukraine", "Europe"),
    "US" => ("United States", "Americas"),
    "VN" => ("Vietnam", "Asia"),
    "ZA" => ("South Africa", "Africa"),
}

/// Euro members of SEPA followed by the non-euro members.
pub(crate) const SEPA_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "FI", "FR", "GR", "IE", "IT", "LV", "LT", "LU", "MC", "MT",
    "NL", "PT", "SK", "SM", "SI", "ES", "BG", "HR", "CZ", "DK", "GB", "HU", "PL", "RO", "SE",
    "IS", "NO", "LI", "CH",
];

const STATE_REQUIRED: &[&str] = &["US", "CA", "AU"];

pub fn country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}

pub fn all_countries() -> &'static [Country] {
    COUNTRIES
}

pub fn sepa_country_codes() -> &'static [&'static str] {
    SEPA_COUNTRY_CODES
}

/// Whether a postal address in this country needs a state or province.
pub fn is_state_required(country_code: &str) -> bool {
    STATE_REQUIRED.contains(&country_code)
}
