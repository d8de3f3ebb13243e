//! Fixed-step time integrators.

use ev_core::{Real, State};

use crate::error::SimResult;
use crate::generator::{Generator, checked_derivative};

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step of size `dt` starting at `t`.
    fn step<G: Generator + ?Sized>(
        &self,
        generator: &G,
        t: Real,
        y: &State,
        dt: Real,
    ) -> SimResult<State>;

    /// Number of generator evaluations per step.
    fn evals_per_step(&self) -> usize;
}

/// Multiply every component by a real factor.
fn scaled(a: &State, factor: Real) -> State {
    a.map(|z| z * factor)
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<G: Generator + ?Sized>(
        &self,
        generator: &G,
        t: Real,
        y: &State,
        dt: Real,
    ) -> SimResult<State> {
        let k1 = scaled(&checked_derivative(generator, t, y)?, dt);

        let y2 = y + scaled(&k1, 0.5);
        let k2 = scaled(&checked_derivative(generator, t + 0.5 * dt, &y2)?, dt);

        let y3 = y + scaled(&k2, 0.5);
        let k3 = scaled(&checked_derivative(generator, t + 0.5 * dt, &y3)?, dt);

        let y4 = y + &k3;
        let k4 = scaled(&checked_derivative(generator, t + dt, &y4)?, dt);

        // y_next = y + (k1 + 2*k2 + 2*k3 + k4) / 6
        let k_sum = k1 + scaled(&k2, 2.0) + scaled(&k3, 2.0) + k4;
        Ok(y + k_sum.map(|z| z / 6.0))
    }

    fn evals_per_step(&self) -> usize {
        4
    }
}
