//! Cascading filter engine for salary records.

pub mod error;
pub mod filter;
pub mod index;
pub mod search;
pub mod table;

pub use error::{FilterError, Result};
pub use filter::{FilterLevel, FilterState, Selection};
pub use index::DepartmentIndex;
pub use search::{filter_options, matches_name};
pub use table::{
    DEFAULT_PAGE_SIZE, PageInfo, Paginator, SortColumn, SortDirection, SortState, TablePage,
    TableView,
};
