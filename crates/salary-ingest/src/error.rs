//! Error types for salary data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading manifests, datasets and CSV sources.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Asset Errors ===
    /// Failed to read an asset file.
    #[error("failed to read asset {path}: {source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Requested asset path leaves the asset root.
    #[error("asset path escapes the asset root: {path}")]
    PathEscapesRoot { path: PathBuf },

    /// Manifest contained no usable entries.
    #[error("manifest has no entries: {path}")]
    EmptyManifest { path: PathBuf },

    // === Dataset Errors ===
    /// Dataset JSON could not be parsed.
    #[error("failed to parse dataset {path}: {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write a dataset file.
    #[error("failed to write dataset {path}: {source}")]
    DatasetWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize records to JSON.
    #[error("failed to serialize dataset {path}: {source}")]
    DatasetSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Session Errors ===
    /// Year is not listed in the top-level manifest.
    #[error("unknown year: {year}")]
    UnknownYear { year: String },

    /// Location is not listed in the year's manifest.
    #[error("unknown location '{location}' for year {year}")]
    UnknownLocation { year: String, location: String },

    /// No year has been selected yet.
    #[error("no year selected")]
    NoYearSelected,

    /// A newer request was started before this one completed.
    #[error("request {generation} was superseded by request {current}")]
    Superseded { generation: u64, current: u64 },

    // === CSV Import Errors ===
    /// CSV reader failure.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column not found in the CSV header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Numeric field could not be parsed.
    #[error("invalid {column} value '{value}' in {path} at row {row}")]
    InvalidNumber {
        column: String,
        value: String,
        row: usize,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnknownLocation {
            year: "2023".to_string(),
            location: "UIX".to_string(),
        };
        assert_eq!(err.to_string(), "unknown location 'UIX' for year 2023");

        let err = IngestError::InvalidNumber {
            column: "total_salary".to_string(),
            value: "n/a".to_string(),
            row: 4,
            path: PathBuf::from("input/UIS.csv"),
        };
        assert_eq!(
            err.to_string(),
            "invalid total_salary value 'n/a' in input/UIS.csv at row 4"
        );
    }
}
