//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and normalizing the movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer could not make sense of the file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    ///
    /// `accepted` lists every header alias we looked for.
    #[error("Missing required column {column} (accepted headers: {accepted})")]
    MissingColumn { column: String, accepted: String },

    /// A field held a value we could not use
    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        field: String,
        line: usize,
        value: String,
    },

    /// No usable rows survived normalization
    #[error("Catalog is empty after dropping unusable rows")]
    Empty,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
