use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Pokedex progress engine
///
/// Only failures that make a report impossible surface here. Malformed tokens, bad scalar fields
/// and missing companion data are absorbed by the pipeline and never become errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The species catalog could not be read
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// The trainer snapshot could not be read
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    /// The report configuration could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to loading the species catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog exists at the given location
    #[error("Catalog not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The catalog exists but could not be read
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The CSV catalog is not well-formed
    #[error("Malformed CSV catalog: {0}")]
    Csv(#[from] csv::Error),
    /// The RON catalog is not well-formed
    #[error("Malformed RON catalog: {0}")]
    Ron(#[from] ron::error::SpannedError),
    /// The catalog file extension is not one we can read
    #[error("Unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Errors related to loading the trainer snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed RON snapshot: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Malformed JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to loading the report configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Type alias for Results using ReportError
pub type ReportResult<T> = Result<T, ReportError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using SnapshotError
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
