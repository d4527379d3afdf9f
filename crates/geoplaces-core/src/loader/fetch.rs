// crates/geoplaces-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use super::parse::{parse_cities_zip, parse_countries, parse_legacy_links, LegacyMap};
use super::{Sources, CITIES_URL, COUNTRIES_URL, LEGACY_TZ_URL};
use crate::error::Result;
use crate::raw::{City, Country};

use log::info;

/// GET `url`, failing on any non-2xx status.
fn download(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    info!("Fetched {} ({} bytes)", url, bytes.len());
    Ok(bytes.to_vec())
}

fn download_text(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let text = response.text()?;
    info!("Fetched {} ({} bytes)", url, text.len());
    Ok(text)
}

pub fn fetch_cities() -> Result<Vec<City>> {
    let bytes = download(CITIES_URL)?;
    let cities = parse_cities_zip(&bytes)?;
    info!("Decoded {} cities", cities.len());
    Ok(cities)
}

pub fn fetch_countries() -> Result<Vec<Country>> {
    let text = download_text(COUNTRIES_URL)?;
    let countries = parse_countries(&text)?;
    info!("Decoded {} countries", countries.len());
    Ok(countries)
}

pub fn fetch_legacy() -> Result<LegacyMap> {
    let text = download_text(LEGACY_TZ_URL)?;
    let legacy = parse_legacy_links(&text);
    info!("Decoded {} legacy timezone targets", legacy.len());
    Ok(legacy)
}

/// Downloads all three sources one after another; the first failure aborts.
pub fn fetch_sources() -> Result<Sources> {
    Ok(Sources {
        cities: fetch_cities()?,
        countries: fetch_countries()?,
        legacy: fetch_legacy()?,
    })
}
