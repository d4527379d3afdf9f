// crates/geoplaces-core/src/pipeline.rs

//! # Transform Pipeline
//!
//! Reduces the full GeoNames city dump to a few places per country and
//! replaces timezone and country strings with positions into two shared
//! lookup arrays.
//!
//! Order of operations:
//! 1. Sort every city by population, largest first (stable).
//! 2. Index the distinct timezones of the *unfiltered* set.
//! 3. Index countries by case-insensitive ISO code.
//! 4. Keep only the [`FEATURE_CODES`] places, grouped by country.
//! 5. Per country, keep the first [`ALWAYS_KEEP`] plus every remaining city
//!    with at least [`MIN_POPULATION`] inhabitants.

use crate::dataset::{CountryEntry, Dataset, Place};
use crate::error::{GeoError, Result};
use crate::loader::{LegacyMap, Sources};
use crate::raw::{City, Country};

use log::{debug, info};
use std::collections::{BTreeSet, HashMap};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Cities beyond the first [`ALWAYS_KEEP`] of a country need at least this many inhabitants.
pub const MIN_POPULATION: i64 = 80_000;

/// Largest cities of a country kept regardless of population.
pub const ALWAYS_KEEP: usize = 3;

/// Populated places worth offering in a picker.
///
/// `PPL` populated place, `PPLA`/`PPLA2` seat of a first/second-order
/// division, `PPLC` capital, `PPLG` seat of government.
/// See <https://www.geonames.org/export/codes.html>.
pub const FEATURE_CODES: &[&str] = &["PPL", "PPLA", "PPLA2", "PPLC", "PPLG"];

pub fn is_wanted_feature(code: &str) -> bool {
    FEATURE_CODES.contains(&code)
}

// -----------------------------------------------------------------------------
// INDICES
// -----------------------------------------------------------------------------

/// Distinct zone names in byte order; a zone's id is its position.
#[derive(Debug, Clone, Default)]
pub struct TimezoneIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl TimezoneIndex {
    pub fn from_cities<'a>(cities: impl IntoIterator<Item = &'a City>) -> Self {
        let names: Vec<String> = cities
            .into_iter()
            .map(|c| c.timezone.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self { names, positions }
    }

    pub fn position(&self, timezone: &str) -> Option<usize> {
        self.positions.get(timezone).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Countries ordered by case-insensitive ISO code.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    entries: Vec<CountryEntry>,
    positions: HashMap<String, usize>,
}

impl CountryIndex {
    pub fn from_countries(countries: &[Country]) -> Self {
        let mut entries: Vec<CountryEntry> = countries
            .iter()
            .map(|c| CountryEntry(c.iso.clone(), c.country.clone(), c.locale().to_owned()))
            .collect();
        entries.sort_by_cached_key(|e| e.iso().to_lowercase());

        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.iso().to_owned(), i))
            .collect();
        Self { entries, positions }
    }

    pub fn position(&self, iso: &str) -> Option<usize> {
        self.positions.get(iso).copied()
    }

    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<CountryEntry> {
        self.entries
    }
}

// -----------------------------------------------------------------------------
// SELECTION
// -----------------------------------------------------------------------------

/// Picks the cities of one country from a population-sorted group.
///
/// The first [`ALWAYS_KEEP`] are positional and need no population check.
pub fn select_cities<'a>(group: &[&'a City]) -> Vec<&'a City> {
    let head = group.iter().take(ALWAYS_KEEP);
    let tail = group
        .iter()
        .skip(ALWAYS_KEEP)
        .filter(|c| c.population >= MIN_POPULATION);
    head.chain(tail).copied().collect()
}

/// Stable population-descending order.
pub fn sort_by_population(cities: &[City]) -> Vec<&City> {
    let mut sorted: Vec<&City> = cities.iter().collect();
    sorted.sort_by(|a, b| b.population.cmp(&a.population));
    sorted
}

/// Wanted cities keyed by country code, each group still population-sorted.
pub fn group_by_country<'a>(sorted: &[&'a City]) -> HashMap<&'a str, Vec<&'a City>> {
    let mut groups: HashMap<&str, Vec<&City>> = HashMap::new();
    for &city in sorted.iter().filter(|c| is_wanted_feature(&c.feature_code)) {
        groups.entry(city.country_code.as_str()).or_default().push(city);
    }
    groups
}

// -----------------------------------------------------------------------------
// BUILD
// -----------------------------------------------------------------------------

/// Counters for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Cities in the source dump.
    pub cities: usize,
    pub countries: usize,
    pub timezones: usize,
    /// Cities left after the feature-code filter.
    pub filtered: usize,
    /// Places written.
    pub places: usize,
}

/// Output of [`build_dataset`].
#[derive(Debug)]
pub struct Build<'a> {
    pub dataset: Dataset,
    /// Every emitted city, in output order.
    pub selected: Vec<&'a City>,
    /// All cities, population-descending.
    pub sorted: Vec<&'a City>,
    pub stats: BuildStats,
}

pub fn build_dataset<'a>(
    cities: &'a [City],
    countries: &[Country],
    legacy: LegacyMap,
) -> Result<Build<'a>> {
    let sorted = sort_by_population(cities);
    let timezones = TimezoneIndex::from_cities(sorted.iter().copied());
    let country_index = CountryIndex::from_countries(countries);

    let groups = group_by_country(&sorted);
    let filtered = groups.values().map(Vec::len).sum();

    let mut places = Vec::new();
    let mut selected = Vec::new();

    for entry in country_index.entries() {
        let chosen = groups
            .get(entry.iso())
            .map(|g| select_cities(g))
            .unwrap_or_default();
        if chosen.is_empty() {
            debug!("No cities for {} ({})", entry.iso(), entry.name());
            continue;
        }

        for city in chosen {
            let tz_idx = timezones.position(&city.timezone).ok_or_else(|| {
                GeoError::InvalidData(format!("timezone {:?} not indexed", city.timezone))
            })?;
            let ct_idx = country_index.position(&city.country_code).ok_or_else(|| {
                GeoError::InvalidData(format!("country {:?} not indexed", city.country_code))
            })?;
            places.push(Place(city.geonameid, city.name.clone(), tz_idx, ct_idx));
            selected.push(city);
        }
    }

    let stats = BuildStats {
        cities: cities.len(),
        countries: country_index.len(),
        timezones: timezones.len(),
        filtered,
        places: places.len(),
    };
    info!(
        "Selected {} places from {} filtered cities ({} timezones, {} countries)",
        stats.places, stats.filtered, stats.timezones, stats.countries
    );

    Ok(Build {
        dataset: Dataset {
            timezones: timezones.into_names(),
            countries: country_index.into_entries(),
            cities: places,
            legacy,
        },
        selected,
        sorted,
        stats,
    })
}

impl Sources {
    pub fn build(&self) -> Result<Build<'_>> {
        build_dataset(&self.cities, &self.countries, self.legacy.clone())
    }
}
