//! Dataset JSON reading and writing.

use std::fs;
use std::path::Path;

use salary_model::Record;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::{IngestError, Result};

/// Parses a JSON array of records and orders each record's positions by
/// salary, highest first.
///
/// `origin` is only used for error reporting.
pub fn parse_dataset(text: &str, origin: &Path) -> Result<Vec<Record>> {
    let mut records: Vec<Record> =
        serde_json::from_str(text).map_err(|source| IngestError::DatasetParse {
            path: origin.to_path_buf(),
            source,
        })?;
    for record in &mut records {
        record.sort_positions();
    }
    Ok(records)
}

/// Writes records as a tab-indented JSON array.
pub fn write_dataset(path: &Path, records: &[Record]) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|source| IngestError::DatasetSerialize {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, buffer).map_err(|source| IngestError::DatasetWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), records = records.len(), "dataset written");
    Ok(())
}
