use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Department filters are only reachable once a college is chosen.
    #[error("cannot select department '{department}' before a college")]
    DepartmentWithoutCollege { department: String },
    #[error("department must not be blank")]
    BlankDepartment,
    #[error("page size must be at least 1")]
    InvalidPageSize,
}

pub type Result<T> = std::result::Result<T, FilterError>;
