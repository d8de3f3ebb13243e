use thiserror::Error;

pub type EvResult<T> = Result<T, EvError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
