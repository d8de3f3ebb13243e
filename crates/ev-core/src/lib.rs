//! ev-core: shared foundation for the evolve workspace.
//!
//! Contains:
//! - numeric (Real + float checks + convergence order)
//! - state (complex state vectors and helpers)
//! - timing (opt-in wall-clock timing)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod state;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EvError, EvResult};
pub use numeric::*;
pub use state::{Amplitude, State};
