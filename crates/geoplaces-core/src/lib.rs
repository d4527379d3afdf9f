// crates/geoplaces-core/src/lib.rs

//! geoplaces-core
//! ==============
//!
//! Builds the compact world cities / countries / timezones table used by the
//! timezone picker.
//!
//! The build downloads three public sources, keeps a handful of populous
//! places per country and writes a single JSON document:
//!
//! ```text
//! {
//!   "timezones": ["Africa/Abidjan", ...],
//!   "countries": [["AD", "Andorra", "ca"], ...],
//!   "cities":    [[3041563, "Andorra la Vella", 211, 0], ...],
//!   "legacy":    {"Asia/Kolkata": ["Asia/Calcutta"], ...}
//! }
//! ```
//!
//! Each city row references its timezone and country by position.
//!
//! Offline use
//! -----------
//! With `default-features = false` the crate never touches the network; feed
//! payloads to the parsers in [`loader`] and pass the records to
//! [`pipeline::build_dataset`].
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dataset;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod prelude;
pub mod raw;
pub mod report;
pub mod schema;
pub mod writer;

// Re-exports
pub use crate::dataset::{CountryEntry, Dataset, Place};
pub use crate::error::{GeoError, Result};
pub use crate::loader::{LegacyMap, Sources};
pub use crate::pipeline::{build_dataset, Build, BuildStats};
pub use crate::raw::{City, Country};
pub use crate::writer::write_json;
