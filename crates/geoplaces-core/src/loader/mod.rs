// crates/geoplaces-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (HTTP, Zip) and delegates to the text parsers.
//!
//! The parsers in [`parse`] work on in-memory payloads and never touch the
//! network; the `fetch` feature adds thin blocking downloaders on top.

mod parse;

#[cfg(feature = "fetch")]
mod fetch;

pub use parse::{
    parse_cities_tsv, parse_cities_zip, parse_countries, parse_legacy_links, LegacyMap,
    COUNTRY_HEADER_MARKER,
};

#[cfg(feature = "fetch")]
pub use fetch::{fetch_cities, fetch_countries, fetch_legacy, fetch_sources};

pub const CITIES_URL: &str = "https://download.geonames.org/export/dump/cities15000.zip";

pub const COUNTRIES_URL: &str = "https://download.geonames.org/export/dump/countryInfo.txt";

/// The tzdata `backward` file: `Link TARGET LINK-NAME` for every retired zone.
pub const LEGACY_TZ_URL: &str = "https://raw.githubusercontent.com/eggert/tz/main/backward";

use crate::raw::{City, Country};

/// Everything downloaded for one build, before any transformation.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub cities: Vec<City>,
    pub countries: Vec<Country>,
    pub legacy: LegacyMap,
}
