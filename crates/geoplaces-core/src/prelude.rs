//! geoplaces prelude: bring common types into scope for tools and tests.

#![allow(unused_imports)]

pub use crate::dataset::{CountryEntry, Dataset, Place};
pub use crate::error::{GeoError, Result};
pub use crate::loader::{
    parse_cities_tsv, parse_cities_zip, parse_countries, parse_legacy_links, LegacyMap, Sources,
};
pub use crate::pipeline::{
    build_dataset, Build, BuildStats, CountryIndex, TimezoneIndex, FEATURE_CODES, MIN_POPULATION,
};
pub use crate::raw::{City, Country};
pub use crate::report::{feature_histogram, print_histogram, source_histogram, FeatureCount};
pub use crate::schema::Schema;
pub use crate::writer::{write_json, DEFAULT_OUTPUT};
