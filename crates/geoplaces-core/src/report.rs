// crates/geoplaces-core/src/report.rs

//! Feature-code histograms printed after a build.
//!
//! Purely diagnostic; nothing here feeds back into the dataset.

use crate::pipeline::MIN_POPULATION;
use crate::raw::City;
use std::fmt;

/// Examples listed per feature code.
pub const EXAMPLES_PER_CODE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCount {
    pub code: String,
    pub count: usize,
    /// `"<country code>, <city name>"`, first seen first.
    pub examples: Vec<String>,
}

impl fmt::Display for FeatureCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} {:>6}  {}", self.code, self.count, self.examples.join("; "))
    }
}

/// Counts cities per feature code, most frequent first.
///
/// Codes with equal counts keep the order they were first seen in.
pub fn feature_histogram<'a>(cities: impl IntoIterator<Item = &'a City>) -> Vec<FeatureCount> {
    let mut counts: Vec<FeatureCount> = Vec::new();

    for city in cities {
        let slot = match counts.iter().position(|c| c.code == city.feature_code) {
            Some(i) => &mut counts[i],
            None => {
                counts.push(FeatureCount {
                    code: city.feature_code.clone(),
                    count: 0,
                    examples: Vec::new(),
                });
                let last = counts.len() - 1;
                &mut counts[last]
            }
        };
        slot.count += 1;
        if slot.examples.len() < EXAMPLES_PER_CODE {
            slot.examples
                .push(format!("{}, {}", city.country_code, city.name));
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Histogram over the whole dump, restricted to cities at or above
/// [`MIN_POPULATION`], before any feature-code filtering.
pub fn source_histogram<'a>(sorted: impl IntoIterator<Item = &'a City>) -> Vec<FeatureCount> {
    feature_histogram(
        sorted
            .into_iter()
            .filter(|c| c.population >= MIN_POPULATION),
    )
}

pub fn print_histogram(title: &str, rows: &[FeatureCount]) {
    println!("{title}:");
    for row in rows {
        println!("  {row}");
    }
}
