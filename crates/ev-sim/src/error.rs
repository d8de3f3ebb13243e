//! Error types for integration runs.

use ev_core::EvError;
use thiserror::Error;

/// Errors encountered while configuring or running an integration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid step size: dt = {dt} (must be finite and positive)")]
    InvalidStepSize { dt: f64 },

    #[error("Invalid time range: t0 = {t0}, tf = {tf} (bounds must be finite)")]
    InvalidTimeRange { t0: f64, tf: f64 },

    #[error("Initial state has no components")]
    EmptyState,

    #[error("Generator operator must be square (got {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("Generator returned {actual} components at t = {t}, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        t: f64,
    },

    #[error("Time grid needs {points} points, limit is {limit}")]
    TooManySteps { points: f64, limit: usize },

    #[error("Generator error: {message}")]
    Generator { message: String },

    #[error(transparent)]
    Core(#[from] EvError),
}

pub type SimResult<T> = Result<T, SimError>;
