// crates/geoplaces-core/src/writer.rs
use crate::dataset::Dataset;
use crate::error::{GeoError, Result};

use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "src/utils/geonames.json";

/// Writes `dataset` as compact JSON, replacing whatever is at `path`.
///
/// The document is serialized before the file is opened, so a failure here
/// leaves an existing file untouched.
pub fn write_json(path: &Path, dataset: &Dataset) -> Result<()> {
    let bytes = dataset.to_json_bytes().map_err(GeoError::Json)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(GeoError::Io)?;
    }

    let file = File::create(path).map_err(GeoError::Io)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(GeoError::Io)?;
    writer.flush().map_err(GeoError::Io)?;

    info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
