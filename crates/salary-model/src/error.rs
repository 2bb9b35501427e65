use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown tenure code: {0:?}")]
    UnknownTenureCode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
