//! The generator capability: the right-hand side dy/dt = f(t, y).

use ev_core::{Real, State};

use crate::error::{SimError, SimResult};

/// Instantaneous time derivative of a state.
///
/// Implementations must be pure: the same `(t, y)` always yields the same
/// derivative, and the returned vector has the same length as `y`. The
/// integrator checks the length of every output and fails with
/// [`SimError::DimensionMismatch`] instead of panicking.
///
/// Any `Fn(Real, &State) -> State` closure is a generator. Wrap a
/// time-independent `Fn(&State) -> State` in [`Autonomous`].
pub trait Generator {
    /// Compute dy/dt at time `t`.
    fn derivative(&self, t: Real, y: &State) -> SimResult<State>;
}

impl<F> Generator for F
where
    F: Fn(Real, &State) -> State,
{
    fn derivative(&self, t: Real, y: &State) -> SimResult<State> {
        Ok(self(t, y))
    }
}

/// Adapter for generators that do not depend on time.
#[derive(Clone, Copy, Debug)]
pub struct Autonomous<F>(pub F);

impl<F> Generator for Autonomous<F>
where
    F: Fn(&State) -> State,
{
    fn derivative(&self, _t: Real, y: &State) -> SimResult<State> {
        Ok((self.0)(y))
    }
}

/// Evaluate `generator` and check the output has `y.len()` components.
pub(crate) fn checked_derivative<G: Generator + ?Sized>(
    generator: &G,
    t: Real,
    y: &State,
) -> SimResult<State> {
    let dy = generator.derivative(t, y)?;
    if dy.len() != y.len() {
        return Err(SimError::DimensionMismatch {
            expected: y.len(),
            actual: dy.len(),
            t,
        });
    }
    Ok(dy)
}
