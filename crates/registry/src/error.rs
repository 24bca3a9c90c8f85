//! Error types for loading and validating guide catalogs.

use std::path::PathBuf;

use thiserror::Error;

/// Error surfaced when a catalog cannot be read, parsed, or validated.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("guide {node_type}.{field_key} has an empty title")]
    EmptyTitle { node_type: String, field_key: String },

    #[error("guide {node_type}.{field_key} has no steps")]
    MissingSteps { node_type: String, field_key: String },

    #[error("guide {node_type}.{field_key} has an invalid url `{url}`: {reason}")]
    InvalidUrl {
        node_type: String,
        field_key: String,
        url: String,
        reason: String,
    },

    #[error("overlay catalog {path}: {source}")]
    Overlay {
        path: PathBuf,
        #[source]
        source: Box<CatalogError>,
    },
}
