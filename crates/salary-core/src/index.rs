//! College → department index built once per dataset.

use std::collections::{BTreeMap, BTreeSet};

use salary_model::Record;

/// Distinct colleges and, per college, distinct departments.
///
/// Both levels are sorted ascending by plain string comparison, so the
/// ordering is case-sensitive ("Zoology" sorts before "anthropology").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentIndex {
    colleges: Vec<String>,
    departments: BTreeMap<String, Vec<String>>,
}

impl DepartmentIndex {
    pub fn build(records: &[Record]) -> Self {
        let mut mapping: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for record in records {
            for position in &record.positions {
                mapping
                    .entry(position.college.as_str())
                    .or_default()
                    .insert(position.department.as_str());
            }
        }
        let colleges = mapping.keys().map(|c| (*c).to_string()).collect();
        let departments = mapping
            .into_iter()
            .map(|(college, departments)| {
                (
                    college.to_string(),
                    departments.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();
        Self {
            colleges,
            departments,
        }
    }

    pub fn colleges(&self) -> &[String] {
        &self.colleges
    }

    /// Departments under `college`; empty for an unknown college.
    pub fn departments(&self, college: &str) -> &[String] {
        self.departments
            .get(college)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, college: &str, department: &str) -> bool {
        self.departments(college).iter().any(|d| d == department)
    }

    /// Every (college, department) pair, in index order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.departments
            .iter()
            .flat_map(|(college, departments)| {
                departments
                    .iter()
                    .map(move |department| (college.as_str(), department.as_str()))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_model::Position;

    #[test]
    fn builds_sorted_unique_levels() {
        let records = vec![
            Record::new(
                "A",
                vec![
                    Position::new("LAS", "English", 1.0),
                    Position::new("Engineering", "Physics", 2.0),
                ],
            ),
            Record::new(
                "B",
                vec![
                    Position::new("LAS", "Chemistry", 1.0),
                    Position::new("LAS", "English", 3.0),
                    Position::new("agriculture", "Dairy", 3.0),
                ],
            ),
        ];
        let index = DepartmentIndex::build(&records);
        assert_eq!(index.colleges(), ["Engineering", "LAS", "agriculture"]);
        assert_eq!(index.departments("LAS"), ["Chemistry", "English"]);
        assert!(index.departments("Law").is_empty());
        assert!(index.contains("Engineering", "Physics"));
        assert!(!index.contains("LAS", "Physics"));
        assert_eq!(index.pairs().len(), 4);
    }
}
