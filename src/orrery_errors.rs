use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrreryError {
    #[error("Unknown solar system body: {0}")]
    UnknownBody(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
}
