//! Error type for dataset parsing.
//!
//! Errors stop at the loader: each failed dataset is logged and replaced
//! by an empty collection before anything reaches the map.

use thiserror::Error;

/// Failure while reading or parsing one of the input datasets.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid visa CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid boundary GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("boundary GeoJSON must be a FeatureCollection")]
    NotAFeatureCollection,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
