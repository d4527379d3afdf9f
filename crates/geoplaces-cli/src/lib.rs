//! geoplaces-cli
//! =============
//!
//! Command-line front end for [`geoplaces_core`]: downloads the GeoNames city
//! and country dumps plus the tzdata `backward` file, and writes the compact
//! JSON dataset used by the timezone picker.
//!
//! ```text
//! geoplaces build                      # writes src/utils/geonames.json
//! geoplaces build -o public/geo.json
//! geoplaces report                     # feature-code histograms only
//! RUST_LOG=debug geoplaces build
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// The binary is the deliverable; this target only carries the crate docs.
