// crates/geoplaces-core/src/raw.rs

//! Raw GeoNames records, one per upstream row.
//!
//! These mirror the external dumps column for column and may be subject to the
//! GeoNames license (CC BY 4.0). They only live for the duration of a build.

use crate::schema::{float, int, list, text, Field, Schema};

/// One row of `cities15000.txt`.
///
/// Column order follows <https://download.geonames.org/export/dump/readme.txt>.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct City {
    pub geonameid: i64,
    pub name: String,
    pub asciiname: String,
    pub alternatenames: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub feature_class: String,
    /// e.g. `PPLC` for a capital, see <https://www.geonames.org/export/codes.html>.
    pub feature_code: String,
    pub country_code: String,
    pub cc2: Vec<String>,
    pub admin1_code: String,
    pub admin2_code: String,
    pub admin3_code: String,
    pub admin4_code: String,
    pub population: i64,
    pub elevation: i64,
    pub dem: i64,
    /// IANA zone name.
    pub timezone: String,
    pub modification_date: String,
}

impl Schema for City {
    const FIELDS: &'static [Field<Self>] = &[
        Field { name: "geonameid", set: |c, v| c.geonameid = int(v) },
        Field { name: "name", set: |c, v| c.name = text(v) },
        Field { name: "asciiname", set: |c, v| c.asciiname = text(v) },
        Field { name: "alternatenames", set: |c, v| c.alternatenames = list(v, text) },
        Field { name: "latitude", set: |c, v| c.latitude = float(v) },
        Field { name: "longitude", set: |c, v| c.longitude = float(v) },
        Field { name: "feature_class", set: |c, v| c.feature_class = text(v) },
        Field { name: "feature_code", set: |c, v| c.feature_code = text(v) },
        Field { name: "country_code", set: |c, v| c.country_code = text(v) },
        Field { name: "cc2", set: |c, v| c.cc2 = list(v, text) },
        Field { name: "admin1_code", set: |c, v| c.admin1_code = text(v) },
        Field { name: "admin2_code", set: |c, v| c.admin2_code = text(v) },
        Field { name: "admin3_code", set: |c, v| c.admin3_code = text(v) },
        Field { name: "admin4_code", set: |c, v| c.admin4_code = text(v) },
        Field { name: "population", set: |c, v| c.population = int(v) },
        Field { name: "elevation", set: |c, v| c.elevation = int(v) },
        Field { name: "dem", set: |c, v| c.dem = int(v) },
        Field { name: "timezone", set: |c, v| c.timezone = text(v) },
        Field { name: "modification_date", set: |c, v| c.modification_date = text(v) },
    ];
}

/// One row of `countryInfo.txt`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Country {
    pub iso: String,
    pub iso3: String,
    pub iso_numeric: i64,
    pub fips: String,
    pub country: String,
    pub capital: String,
    pub area: f64,
    pub population: i64,
    pub continent: String,
    pub tld: String,
    pub currency_code: String,
    pub currency_name: String,
    pub phone: String,
    pub postal_code_format: String,
    pub postal_code_regex: String,
    /// Ordered language tags, primary first (`en-US,es-US,haw,fr`).
    pub languages: Vec<String>,
    pub geonameid: i64,
    pub neighbours: Vec<String>,
    pub equivalent_fips_code: String,
}

impl Schema for Country {
    const FIELDS: &'static [Field<Self>] = &[
        Field { name: "iso", set: |c, v| c.iso = text(v) },
        Field { name: "iso3", set: |c, v| c.iso3 = text(v) },
        Field { name: "iso_numeric", set: |c, v| c.iso_numeric = int(v) },
        Field { name: "fips", set: |c, v| c.fips = text(v) },
        Field { name: "country", set: |c, v| c.country = text(v) },
        Field { name: "capital", set: |c, v| c.capital = text(v) },
        Field { name: "area", set: |c, v| c.area = float(v) },
        Field { name: "population", set: |c, v| c.population = int(v) },
        Field { name: "continent", set: |c, v| c.continent = text(v) },
        Field { name: "tld", set: |c, v| c.tld = text(v) },
        Field { name: "currency_code", set: |c, v| c.currency_code = text(v) },
        Field { name: "currency_name", set: |c, v| c.currency_name = text(v) },
        Field { name: "phone", set: |c, v| c.phone = text(v) },
        Field { name: "postal_code_format", set: |c, v| c.postal_code_format = text(v) },
        Field { name: "postal_code_regex", set: |c, v| c.postal_code_regex = text(v) },
        Field { name: "languages", set: |c, v| c.languages = list(v, text) },
        Field { name: "geonameid", set: |c, v| c.geonameid = int(v) },
        Field { name: "neighbours", set: |c, v| c.neighbours = list(v, text) },
        Field { name: "equivalent_fips_code", set: |c, v| c.equivalent_fips_code = text(v) },
    ];
}

impl Country {
    /// Primary language tag, or [`DEFAULT_LOCALE`] when none is listed.
    pub fn locale(&self) -> &str {
        self.languages
            .iter()
            .map(|tag| tag.trim())
            .find(|tag| !tag.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
    }
}

pub const DEFAULT_LOCALE: &str = "en";
