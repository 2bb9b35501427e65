//! Conversion of published salary CSV exports into dataset records.
//!
//! One CSV row is one position. Rows sharing an employee name and total
//! salary belong to the same employee.

use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use salary_model::{Position, Record, tenure_description};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

pub const COL_NAME: &str = "name";
pub const COL_TOTAL_SALARY: &str = "total_salary";
pub const COL_POSITION_TITLE: &str = "position_title";
pub const COL_DEPARTMENT: &str = "department";
pub const COL_COLLEGE: &str = "college";
pub const COL_POSITION_SALARY: &str = "position_salary";
pub const COL_TENURE: &str = "tenure";
pub const COL_PAY_TYPE: &str = "pay_type";

const REQUIRED_COLUMNS: [&str; 8] = [
    COL_NAME,
    COL_TOTAL_SALARY,
    COL_POSITION_TITLE,
    COL_DEPARTMENT,
    COL_COLLEGE,
    COL_POSITION_SALARY,
    COL_TENURE,
    COL_PAY_TYPE,
];

struct ColumnIndex {
    indices: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let mut indices = HashMap::new();
        for column in REQUIRED_COLUMNS {
            let idx = normalized
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.to_string(),
                    path: path.to_path_buf(),
                })?;
            indices.insert(column, idx);
        }
        Ok(Self { indices })
    }

    fn get<'a>(&self, row: &'a StringRecord, column: &str) -> &'a str {
        self.indices
            .get(column)
            .and_then(|&idx| row.get(idx))
            .unwrap_or("")
            .trim()
    }
}

fn parse_amount(value: &str, column: &str, row: usize, path: &Path) -> Result<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| IngestError::InvalidNumber {
            column: column.to_string(),
            value: value.to_string(),
            row,
            path: path.to_path_buf(),
        })
}

/// Reads a salary CSV export and groups its rows into records sorted by name.
pub fn import_salary_csv(path: &Path) -> Result<Vec<Record>> {
    let csv_error = |source: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers, path)?;

    let mut records: Vec<Record> = Vec::new();
    let mut by_key: HashMap<(String, String), usize> = HashMap::new();
    let mut rows_read = 0usize;

    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let row_number = idx + 1;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        rows_read += 1;

        let name = columns.get(&row, COL_NAME);
        let total = parse_amount(
            columns.get(&row, COL_TOTAL_SALARY),
            COL_TOTAL_SALARY,
            row_number,
            path,
        )?;
        let position_salary = parse_amount(
            columns.get(&row, COL_POSITION_SALARY),
            COL_POSITION_SALARY,
            row_number,
            path,
        )?;
        let position = Position {
            title: columns.get(&row, COL_POSITION_TITLE).to_string(),
            department: columns.get(&row, COL_DEPARTMENT).to_string(),
            college: columns.get(&row, COL_COLLEGE).to_string(),
            position_salary,
            tenure: tenure_description(columns.get(&row, COL_TENURE)).to_string(),
            pay_type: columns.get(&row, COL_PAY_TYPE).to_string(),
        };

        // Totals are compared as formatted strings to avoid float equality.
        let key = (name.to_string(), format!("{total:.2}"));
        match by_key.get(&key) {
            Some(&existing) => records[existing].positions.push(position),
            None => {
                by_key.insert(key, records.len());
                records.push(Record {
                    name: name.to_string(),
                    salary: Some(total),
                    positions: vec![position],
                });
            }
        }
    }

    debug!(path = %path.display(), rows = rows_read, "csv rows read");
    records.sort_by(|a, b| a.name.cmp(&b.name));
    info!(
        path = %path.display(),
        rows = rows_read,
        records = records.len(),
        "salary csv imported"
    );
    Ok(records)
}
