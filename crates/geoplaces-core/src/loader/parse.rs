// crates/geoplaces-core/src/loader/parse.rs
use crate::error::{GeoError, Result};
use crate::raw::{City, Country};
use crate::schema::Schema;

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

/// Current zone name -> sorted retired names that link to it.
pub type LegacyMap = BTreeMap<String, Vec<String>>;

/// Last column label of the commented header in `countryInfo.txt`.
pub const COUNTRY_HEADER_MARKER: &str = "EquivalentFipsCode";

/// Decodes every non-blank tab-separated line into `T`.
fn parse_rows<T: Schema>(text: &str) -> Vec<T> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let cells: Vec<&str> = line.split('\t').collect();
            T::from_cells(&cells)
        })
        .collect()
}

pub fn parse_cities_tsv(text: &str) -> Vec<City> {
    parse_rows(text)
}

/// Unpacks the GeoNames city dump. The archive must hold exactly one file.
pub fn parse_cities_zip(bytes: &[u8]) -> Result<Vec<City>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    if archive.len() != 1 {
        return Err(GeoError::InvalidData(format!(
            "expected exactly one file in city archive, found {}",
            archive.len()
        )));
    }

    let mut entry = archive.by_index(0)?;
    let mut raw = Vec::new();
    entry.read_to_end(&mut raw)?;
    let text = String::from_utf8(raw).map_err(|e| {
        GeoError::InvalidData(format!("{} is not valid UTF-8: {e}", entry.name()))
    })?;

    Ok(parse_cities_tsv(&text))
}

/// Parses `countryInfo.txt`, skipping the comment block up to the header row.
pub fn parse_countries(text: &str) -> Result<Vec<Country>> {
    let (_, body) = text.split_once(COUNTRY_HEADER_MARKER).ok_or_else(|| {
        GeoError::InvalidData(format!(
            "country file has no `{COUNTRY_HEADER_MARKER}` header"
        ))
    })?;
    Ok(parse_rows(body))
}

/// Collects `Link` lines of the tzdata `backward` file.
///
/// Only `Area/Location` names on both sides are kept; anything under `Etc/`
/// or without a slash (`GMT`, `UTC`, `Cuba`) is skipped. Names with several
/// slashes (`America/Argentina/Buenos_Aires`) count as `Area/Location` too.
pub fn parse_legacy_links(text: &str) -> LegacyMap {
    let mut legacy = LegacyMap::new();

    for line in text.lines().filter(|l| l.starts_with("Link")) {
        let parts: Vec<&str> = line.split('\t').filter(|p| !p.is_empty()).collect();
        let (current, prior) = match parts.as_slice() {
            [_, current, prior, ..] => (*current, *prior),
            _ => continue,
        };
        if !is_area_zone(current) || !is_area_zone(prior) {
            continue;
        }
        legacy
            .entry(current.to_owned())
            .or_default()
            .push(prior.to_owned());
    }

    for aliases in legacy.values_mut() {
        aliases.sort();
        aliases.dedup();
    }
    legacy
}

fn is_area_zone(name: &str) -> bool {
    name.contains('/') && !name.starts_with("Etc/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn zip_of(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    const ROW: &str = "3117735\tMadrid\tMadrid\t\t40.4165\t-3.70256\tP\tPPLC\tES\t\t29\tM\t28079\t\t3255944\t\t665\tEurope/Madrid\t2024-06-04";

    #[test]
    fn city_zip_with_single_entry_is_decoded() {
        let bytes = zip_of(&[("cities15000.txt", &format!("{ROW}\n{ROW}\n"))]);
        let cities = parse_cities_zip(&bytes).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Madrid");
        assert_eq!(cities[0].population, 3255944);
    }

    #[test]
    fn city_zip_with_two_entries_is_rejected() {
        let bytes = zip_of(&[("a.txt", ROW), ("b.txt", ROW)]);
        assert!(matches!(
            parse_cities_zip(&bytes),
            Err(GeoError::InvalidData(_))
        ));
    }

    #[test]
    fn garbage_is_not_a_zip() {
        assert!(matches!(
            parse_cities_zip(b"not a zip"),
            Err(GeoError::Zip(_))
        ));
    }

    fn patch_u32(bytes: &mut [u8], signature: [u8; 4], offset: usize, value: u32) {
        let start = bytes
            .windows(4)
            .position(|w| w == signature)
            .expect("signature present");
        bytes[start + offset..start + offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn oversized_declared_entry_does_not_preallocate() {
        let mut bytes = zip_of(&[("cities15000.txt", ROW)]);
        // uncompressed size in the local header and the central directory
        patch_u32(&mut bytes, [0x50, 0x4b, 0x03, 0x04], 22, 0xFFFF_FFF0);
        patch_u32(&mut bytes, [0x50, 0x4b, 0x01, 0x02], 24, 0xFFFF_FFF0);

        // Stored data is bounded by the compressed size, so the real row comes back
        // or the archive is rejected; either way no 4 GiB buffer is reserved.
        if let Ok(cities) = parse_cities_zip(&bytes) {
            assert_eq!(cities.len(), 1);
            assert_eq!(cities[0].name, "Madrid");
        }
    }

    #[test]
    fn country_header_and_blank_lines_are_skipped() {
        let text = "# GeoNames\n#\n#ISO\tISO3\tISO-Numeric\tfips\tCountry\tCapital\tArea(in sq km)\tPopulation\tContinent\ttld\tCurrencyCode\tCurrencyName\tPhone\tPostal Code Format\tPostal Code Regex\tLanguages\tgeonameid\tneighbours\tEquivalentFipsCode\n\
AD\tAND\t020\tAN\tAndorra\tAndorra la Vella\t468\t77006\tEU\t.ad\tEUR\tEuro\t376\tAD###\t^(?:AD)*(\\d{3})$\tca\t3041565\tES,FR\t\n\
\n\
AE\tARE\t784\tAE\tUnited Arab Emirates\tAbu Dhabi\t82880\t9630959\tAS\t.ae\tAED\tDirham\t971\t\t\tar-AE,fa,en,hi,ur\t290557\tSA,OM\t\n";
        let countries = parse_countries(text).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].iso, "AD");
        assert_eq!(countries[0].iso_numeric, 20);
        assert_eq!(countries[1].languages[0], "ar-AE");
    }

    #[test]
    fn country_file_without_header_is_invalid() {
        assert!(parse_countries("AD\tAND\n").is_err());
    }

    #[test]
    fn legacy_links_keep_area_zones() {
        let text = "# tzdb links for backward compatibility\n\
Link\tAmerica/Argentina/Buenos_Aires\tAmerica/Buenos_Aires\n\
Link\tAmerica/Argentina/Buenos_Aires\tAmerica/Argentina/ComodRivadavia\n\
Link\tEtc/UTC\tEtc/Universal\n\
Link\tEurope/London\tEtc/GMT-0\n\
Link\tAmerica/Havana\t\tCuba\t# comment\n\
Link\tAsia/Kolkata\t\tAsia/Calcutta\n\
Link\tAsia/Kolkata\tAsia/Calcutta\n\
Zone\tEurope/Nowhere\t0:00\t-\tNWT\n";
        let legacy = parse_legacy_links(text);

        assert_eq!(
            legacy["America/Argentina/Buenos_Aires"],
            vec!["America/Argentina/ComodRivadavia", "America/Buenos_Aires"]
        );
        assert_eq!(legacy["Asia/Kolkata"], vec!["Asia/Calcutta"]);
        assert!(!legacy.contains_key("Etc/UTC"));
        assert!(!legacy.contains_key("Europe/London"));
        assert!(!legacy.contains_key("America/Havana"));
        assert_eq!(legacy.len(), 2);
    }

    #[test]
    fn short_link_lines_are_ignored() {
        assert!(parse_legacy_links("Link\tEurope/Berlin\n").is_empty());
    }
}
