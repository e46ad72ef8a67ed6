use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Exactly 4 numbers are required, got {0}")]
    WrongCount(usize),
    #[error("Numbers must be finite: {0}")]
    NonFinite(f64),
}
