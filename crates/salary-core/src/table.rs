//! Sorting and paging of the visible records.

use std::cmp::Ordering;
use std::fmt;

use salary_model::{Record, compare_salary};

use crate::error::{FilterError, Result};
use crate::filter::FilterState;

pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Salary,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Salary => "Salary",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Column sort driven by header clicks.
///
/// Clicking the active column cycles ascending → descending → unsorted;
/// clicking another column starts it ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            active: Some((column, direction)),
        }
    }

    pub fn active(&self) -> Option<(SortColumn, SortDirection)> {
        self.active
    }

    pub fn toggle(&mut self, column: SortColumn) {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Stable sort; an unsorted state keeps the input order.
    pub fn apply(&self, rows: &mut [&Record]) {
        let Some((column, direction)) = self.active else {
            return;
        };
        rows.sort_by(|a, b| {
            let ordering = compare_by(column, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

fn compare_by(column: SortColumn, a: &Record, b: &Record) -> Ordering {
    match column {
        SortColumn::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortColumn::Salary => compare_salary(a.total_salary(), b.total_salary()),
    }
}

/// Position of one page within the full row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_count: usize,
    /// First row on the page (0-based, inclusive).
    pub start: usize,
    /// End of the page (0-based, exclusive).
    pub end: usize,
}

impl PageInfo {
    pub fn label(&self) -> String {
        if self.total == 0 {
            return "No records".to_string();
        }
        format!(
            "Showing {}-{} of {} records (page {} of {})",
            self.start + 1,
            self.end,
            self.total,
            self.page_index + 1,
            self.page_count
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(FilterError::InvalidPageSize);
        }
        Ok(Self {
            page_index: 0,
            page_size,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Changing the page size returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(FilterError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.page_index = 0;
        Ok(())
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// Slices out the current page. Indices past the end clamp to the last
    /// page.
    pub fn page<'a, T>(&self, rows: &'a [T]) -> (&'a [T], PageInfo) {
        let total = rows.len();
        let page_count = total.div_ceil(self.page_size).max(1);
        let page_index = self.page_index.min(page_count - 1);
        let start = (page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        (
            &rows[start..end],
            PageInfo {
                page_index,
                page_size: self.page_size,
                total,
                page_count,
                start,
                end,
            },
        )
    }
}

/// One rendered page of the table.
#[derive(Debug)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a Record>,
    pub info: PageInfo,
    pub sort: Option<(SortColumn, SortDirection)>,
}

/// Sort and pagination state layered over a [`FilterState`].
///
/// Any filter change since the last render, or rendering a different
/// state, sends the view back to the first page.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub sort: SortState,
    pub paginator: Paginator,
    seen: Option<(u64, u64)>,
}

impl TableView {
    pub fn new(sort: SortState, paginator: Paginator) -> Self {
        Self {
            sort,
            paginator,
            seen: None,
        }
    }

    pub fn render<'a>(&mut self, state: &'a FilterState) -> TablePage<'a> {
        let current = (state.id(), state.revision());
        if self.seen.is_some_and(|seen| seen != current) {
            self.paginator.first_page();
        }
        self.seen = Some(current);

        let mut rows = state.visible();
        self.sort.apply(&mut rows);
        let (page, info) = self.paginator.page(&rows);
        TablePage {
            rows: page.to_vec(),
            info,
            sort: self.sort.active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_model::Position;

    fn record(name: &str, salary: f64) -> Record {
        Record::new(name, vec![Position::new("C", "D", salary)])
    }

    #[test]
    fn toggle_cycles_direction() {
        let mut sort = SortState::default();
        sort.toggle(SortColumn::Name);
        assert_eq!(sort.active(), Some((SortColumn::Name, SortDirection::Ascending)));
        sort.toggle(SortColumn::Name);
        assert_eq!(sort.active(), Some((SortColumn::Name, SortDirection::Descending)));
        sort.toggle(SortColumn::Name);
        assert_eq!(sort.active(), None);
        sort.toggle(SortColumn::Name);
        sort.toggle(SortColumn::Salary);
        assert_eq!(sort.active(), Some((SortColumn::Salary, SortDirection::Ascending)));
    }

    #[test]
    fn sorts_by_name_and_salary() {
        let records = vec![record("bob", 30.0), record("Alice", 10.0), record("carol", 20.0)];
        let mut rows: Vec<&Record> = records.iter().collect();

        SortState::new(SortColumn::Name, SortDirection::Ascending).apply(&mut rows);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "carol"]);

        SortState::new(SortColumn::Salary, SortDirection::Descending).apply(&mut rows);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "carol", "Alice"]);
    }

    #[test]
    fn page_clamps_past_the_end() {
        let rows: Vec<u32> = (0..7).collect();
        let mut paginator = Paginator::new(3).unwrap();
        paginator.set_page(9);
        let (page, info) = paginator.page(&rows);
        assert_eq!(page, &[6]);
        assert_eq!(info.page_index, 2);
        assert_eq!(info.page_count, 3);
        assert_eq!(info.start, 6);
    }

    #[test]
    fn empty_rows_have_one_empty_page() {
        let rows: Vec<u32> = Vec::new();
        let (page, info) = Paginator::default().page(&rows);
        assert!(page.is_empty());
        assert_eq!(info.page_count, 1);
        assert_eq!(info.label(), "No records");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(Paginator::new(0), Err(FilterError::InvalidPageSize));
        let mut paginator = Paginator::default();
        assert!(paginator.set_page_size(0).is_err());
        assert_eq!(paginator.page_size(), DEFAULT_PAGE_SIZE);
    }
}
