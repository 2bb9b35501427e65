use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One appointment held by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Position title (e.g. "Professor").
    #[serde(default)]
    pub title: String,
    /// College or administrative unit.
    pub college: String,
    /// Department within the college.
    pub department: String,
    /// Salary for this position alone.
    pub position_salary: f64,
    /// Tenure status description.
    #[serde(default)]
    pub tenure: String,
    /// Pay type code as published (e.g. "AA").
    #[serde(default)]
    pub pay_type: String,
}

impl Position {
    pub fn new(college: impl Into<String>, department: impl Into<String>, salary: f64) -> Self {
        Self {
            title: String::new(),
            college: college.into(),
            department: department.into(),
            position_salary: salary,
            tenure: String::new(),
            pay_type: String::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// True when this position sits under the given college and department.
    pub fn is_in(&self, college: &str, department: &str) -> bool {
        self.college == college && self.department == department
    }
}

/// One employee's salary entry.
///
/// Datasets come in two shapes: the nested form with a `positions` array,
/// and a flat form where `college`, `department` and `salary` sit directly
/// on the record. Both deserialize into this type; a flat record becomes a
/// record with a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordRepr")]
pub struct Record {
    pub name: String,
    /// Published total salary, if the dataset carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub positions: Vec<Position>,
}

impl Record {
    pub fn new(name: impl Into<String>, positions: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            salary: None,
            positions,
        }
    }

    /// Total salary: the published total when present, otherwise the sum of
    /// position salaries.
    pub fn total_salary(&self) -> f64 {
        self.salary
            .unwrap_or_else(|| self.positions.iter().map(|p| p.position_salary).sum())
    }

    /// Sorts positions by salary, highest first. Equal salaries keep their
    /// relative order.
    pub fn sort_positions(&mut self) {
        self.positions
            .sort_by(|a, b| compare_salary(b.position_salary, a.position_salary));
    }

    pub fn has_college(&self, college: &str) -> bool {
        self.positions.iter().any(|p| p.college == college)
    }

    pub fn has_position_in(&self, college: &str, department: &str) -> bool {
        self.positions.iter().any(|p| p.is_in(college, department))
    }
}

/// Total order over salaries (NaN sorts above every number).
pub fn compare_salary(left: f64, right: f64) -> Ordering {
    left.total_cmp(&right)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordRepr {
    Nested {
        name: String,
        #[serde(default)]
        salary: Option<f64>,
        positions: Vec<Position>,
    },
    Flat {
        name: String,
        college: String,
        department: String,
        salary: f64,
        #[serde(default)]
        title: String,
    },
}

impl From<RecordRepr> for Record {
    fn from(repr: RecordRepr) -> Self {
        match repr {
            RecordRepr::Nested {
                name,
                salary,
                positions,
            } => Record {
                name,
                salary,
                positions,
            },
            RecordRepr::Flat {
                name,
                college,
                department,
                salary,
                title,
            } => Record {
                name,
                salary: Some(salary),
                positions: vec![Position::new(college, department, salary).with_title(title)],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_salary_falls_back_to_position_sum() {
        let record = Record::new(
            "Doe, Jane",
            vec![Position::new("X", "Y", 100.0), Position::new("X", "Z", 50.5)],
        );
        assert!((record.total_salary() - 150.5).abs() < 1e-9);

        let published = Record {
            salary: Some(120.0),
            ..record
        };
        assert!((published.total_salary() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn sort_positions_is_descending_and_stable() {
        let mut record = Record::new(
            "A",
            vec![
                Position::new("C1", "first", 10.0),
                Position::new("C2", "top", 90.0),
                Position::new("C3", "second", 10.0),
            ],
        );
        record.sort_positions();
        let departments: Vec<&str> = record
            .positions
            .iter()
            .map(|p| p.department.as_str())
            .collect();
        assert_eq!(departments, vec!["top", "first", "second"]);
    }
}
