//! Fixed-step RK4 evolution of complex state vectors.
//!
//! Provides:
//! - The `Generator` capability for right-hand sides dy/dt = f(t, y)
//! - A linear generator dy/dt = -i·O·y with an explicit operator
//! - A classical RK4 stepper behind the `Integrator` trait
//! - A trajectory driver over a half-open time grid
//!
//! # Example
//!
//! ```
//! use ev_core::state;
//! use ev_sim::{LinearGenerator, integrate};
//!
//! let generator = LinearGenerator::reference();
//! let y0 = state::from_real(&[1.0, 0.0]);
//! let traj = integrate(&generator, &y0, 0.0, 1.0, 0.01).unwrap();
//!
//! assert_eq!(traj.len(), traj.t().len());
//! assert_eq!(traj.state(0).unwrap(), y0);
//! ```

pub mod error;
pub mod generator;
pub mod integrator;
pub mod linear;
pub mod sim;
pub mod trajectory;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use generator::{Autonomous, Generator};
pub use integrator::{Integrator, RK4};
pub use linear::LinearGenerator;
pub use sim::{TimeSpan, integrate, integrate_span};
pub use trajectory::{RunStats, Trajectory};
