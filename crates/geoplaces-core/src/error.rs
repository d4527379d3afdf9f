// crates/geoplaces-core/src/error.rs
use thiserror::Error;

/// Everything that can abort a dataset build.
///
/// Malformed cells inside a row are never reported here; the schema decoder
/// substitutes defaults for them instead.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Transport failure or a non-success HTTP status.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeoError>;
