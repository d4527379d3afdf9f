// crates/geoplaces-core/src/dataset.rs
use crate::loader::LegacyMap;
use serde::{Deserialize, Serialize};

/// `[iso, name, locale]` as consumed by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry(pub String, pub String, pub String);

impl CountryEntry {
    pub fn iso(&self) -> &str {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }

    pub fn locale(&self) -> &str {
        &self.2
    }
}

/// `[geonameid, name, timezone index, country index]`.
///
/// The indices point into [`Dataset::timezones`] and [`Dataset::countries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place(pub i64, pub String, pub usize, pub usize);

impl Place {
    pub fn geonameid(&self) -> i64 {
        self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }

    pub fn timezone_idx(&self) -> usize {
        self.2
    }

    pub fn country_idx(&self) -> usize {
        self.3
    }
}

/// The emitted document.
///
/// Field order is the key order of the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Sorted, distinct IANA zone names.
    pub timezones: Vec<String>,
    /// Sorted by ISO code, case-insensitively.
    pub countries: Vec<CountryEntry>,
    pub cities: Vec<Place>,
    pub legacy: LegacyMap,
}

impl Dataset {
    /// Compact JSON, non-ASCII left as UTF-8.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Places whose timezone or country index is out of range.
    pub fn dangling_places(&self) -> impl Iterator<Item = &Place> {
        self.cities.iter().filter(move |p| {
            p.timezone_idx() >= self.timezones.len() || p.country_idx() >= self.countries.len()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut legacy = LegacyMap::new();
        legacy.insert("Asia/Kolkata".into(), vec!["Asia/Calcutta".into()]);
        Dataset {
            timezones: vec!["Europe/Zurich".into()],
            countries: vec![CountryEntry("CH".into(), "Switzerland".into(), "de-CH".into())],
            cities: vec![Place(2657896, "Zürich".into(), 0, 0)],
            legacy,
        }
    }

    #[test]
    fn serializes_as_compact_arrays() {
        let json = String::from_utf8(sample().to_json_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"timezones":["Europe/Zurich"],"countries":[["CH","Switzerland","de-CH"]],"cities":[[2657896,"Zürich",0,0]],"legacy":{"Asia/Kolkata":["Asia/Calcutta"]}}"#
        );
    }

    #[test]
    fn reads_back_what_it_writes() {
        let ds = sample();
        let back: Dataset = serde_json::from_slice(&ds.to_json_bytes().unwrap()).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn detects_out_of_range_indices() {
        let mut ds = sample();
        assert_eq!(ds.dangling_places().count(), 0);
        ds.cities.push(Place(1, "Nowhere".into(), 5, 0));
        ds.cities.push(Place(2, "Elsewhere".into(), 0, 1));
        assert_eq!(ds.dangling_places().count(), 2);
    }
}
