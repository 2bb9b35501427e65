//! Salary record data model.

pub mod error;
pub mod record;
pub mod tenure;

pub use error::{ModelError, Result};
pub use record::{Position, Record, compare_salary};
pub use tenure::{TenureCode, tenure_description};
