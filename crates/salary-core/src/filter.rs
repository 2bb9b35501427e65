//! Cascading college → department filter with name search.
//!
//! The state owns the loaded records and never mutates them after load.
//! Selecting a college narrows the autocomplete options to that college's
//! departments; selecting a department then narrows the visible records to
//! those holding a position in both. Name search is applied on top of the
//! coarse filter.
//!
//! Changes to the eligible option list are pushed to subscribers over
//! `mpsc` channels.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use salary_model::Record;
use tracing::debug;

use crate::error::{FilterError, Result};
use crate::index::DepartmentIndex;
use crate::search::{filter_options, matches_name};

static NEXT_STATE_ID: AtomicU64 = AtomicU64::new(1);

/// Which level the next autocomplete selection fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterLevel {
    College,
    Department,
    /// Both levels are set; no further options are offered.
    Complete,
}

/// Outcome of [`FilterState::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    College(String),
    Department(String),
    Ignored,
}

#[derive(Debug)]
pub struct FilterState {
    id: u64,
    records: Vec<Record>,
    index: DepartmentIndex,
    college: Option<String>,
    department: Option<String>,
    name_query: String,
    /// Indices into `records` that pass the college/department filter.
    coarse: Vec<usize>,
    subscribers: Vec<Sender<Vec<String>>>,
    revision: u64,
}

impl FilterState {
    pub fn new(records: Vec<Record>) -> Self {
        let mut state = Self {
            id: NEXT_STATE_ID.fetch_add(1, Ordering::Relaxed),
            records: Vec::new(),
            index: DepartmentIndex::default(),
            college: None,
            department: None,
            name_query: String::new(),
            coarse: Vec::new(),
            subscribers: Vec::new(),
            revision: 0,
        };
        state.replace_records(records);
        state
    }

    /// Swaps in a freshly loaded dataset and resets every filter.
    pub fn replace_records(&mut self, mut records: Vec<Record>) {
        for record in &mut records {
            record.sort_positions();
        }
        self.index = DepartmentIndex::build(&records);
        self.records = records;
        self.college = None;
        self.department = None;
        self.name_query.clear();
        debug!(
            records = self.records.len(),
            colleges = self.index.colleges().len(),
            "filter state loaded"
        );
        self.refresh();
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn index(&self) -> &DepartmentIndex {
        &self.index
    }

    pub fn selected_college(&self) -> Option<&str> {
        self.college.as_deref()
    }

    pub fn selected_department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    /// Bumped on every change that alters the visible records.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Unique per constructed state; revisions are only comparable between
    /// equal ids.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn level(&self) -> FilterLevel {
        match (&self.college, &self.department) {
            (None, _) => FilterLevel::College,
            (Some(_), None) => FilterLevel::Department,
            (Some(_), Some(_)) => FilterLevel::Complete,
        }
    }

    /// Options the next selection may choose from, before any query.
    pub fn eligible_options(&self) -> &[String] {
        match (&self.college, &self.department) {
            (None, _) => self.index.colleges(),
            (Some(college), None) => self.index.departments(college),
            (Some(_), Some(_)) => &[],
        }
    }

    /// Autocomplete options narrowed by a case-insensitive prefix query.
    pub fn options(&self, query: &str) -> Vec<String> {
        filter_options(self.eligible_options(), query)
    }

    /// Receives the eligible option list after every change to it.
    pub fn subscribe(&mut self) -> Receiver<Vec<String>> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Fills the next empty level with `option`. A blank option selects
    /// nothing.
    pub fn select(&mut self, option: &str) -> Selection {
        if option.trim().is_empty() {
            debug!("blank selection ignored");
            return Selection::Ignored;
        }
        match self.level() {
            FilterLevel::College => {
                debug!(college = option, "college selected");
                self.college = Some(option.to_string());
                self.refresh();
                Selection::College(option.to_string())
            }
            FilterLevel::Department => {
                debug!(department = option, "department selected");
                self.department = Some(option.to_string());
                self.refresh();
                Selection::Department(option.to_string())
            }
            FilterLevel::Complete => {
                debug!(option = %option, "selection ignored, filters complete");
                Selection::Ignored
            }
        }
    }

    /// Selects (or replaces) the department under the current college.
    pub fn select_department(&mut self, department: &str) -> Result<()> {
        if department.trim().is_empty() {
            return Err(FilterError::BlankDepartment);
        }
        if self.college.is_none() {
            return Err(FilterError::DepartmentWithoutCollege {
                department: department.to_string(),
            });
        }
        self.department = Some(department.to_string());
        self.refresh();
        Ok(())
    }

    /// Clears the college and, with it, the department.
    pub fn clear_college(&mut self) {
        if self.college.is_none() && self.department.is_none() {
            return;
        }
        self.college = None;
        self.department = None;
        self.refresh();
    }

    /// Clears only the department; the college's departments become the
    /// options again.
    pub fn clear_department(&mut self) {
        if self.department.take().is_some() {
            self.refresh();
        }
    }

    /// Removes whichever filter currently holds `filter`.
    ///
    /// Returns false if neither level matches. The department is checked
    /// first so a department sharing its college's name is removed alone.
    pub fn remove(&mut self, filter: &str) -> bool {
        if self.department.as_deref() == Some(filter) {
            self.clear_department();
            true
        } else if self.college.as_deref() == Some(filter) {
            self.clear_college();
            true
        } else {
            false
        }
    }

    pub fn set_name_query(&mut self, query: &str) {
        if self.name_query != query {
            self.name_query = query.to_string();
            self.revision += 1;
        }
    }

    /// Records passing the coarse filter and the name query, in load order.
    pub fn visible(&self) -> Vec<&Record> {
        self.coarse
            .iter()
            .map(|&idx| &self.records[idx])
            .filter(|record| matches_name(record, &self.name_query))
            .collect()
    }

    /// Records passing the coarse filter only.
    pub fn coarse_matches(&self) -> Vec<&Record> {
        self.coarse.iter().map(|&idx| &self.records[idx]).collect()
    }

    fn refresh(&mut self) {
        self.coarse = match (&self.college, &self.department) {
            (None, _) => (0..self.records.len()).collect(),
            (Some(college), None) => self
                .records
                .iter()
                .enumerate()
                .filter(|(_, record)| record.has_college(college))
                .map(|(idx, _)| idx)
                .collect(),
            (Some(college), Some(department)) => self
                .records
                .iter()
                .enumerate()
                .filter(|(_, record)| record.has_position_in(college, department))
                .map(|(idx, _)| idx)
                .collect(),
        };
        self.revision += 1;
        self.notify();
    }

    fn notify(&mut self) {
        let options = self.eligible_options().to_vec();
        self.subscribers
            .retain(|subscriber| subscriber.send(options.clone()).is_ok());
    }
}
