//! Trajectory driver and run configuration.

use ev_core::timing::Timer;
use ev_core::{Amplitude, Real, State, ensure_finite, ensure_positive, state};
use nalgebra::DMatrix;
use tracing::{debug, debug_span, trace, warn};

use crate::error::{SimError, SimResult};
use crate::generator::{Generator, checked_derivative};
use crate::integrator::{Integrator, RK4};
use crate::trajectory::{RunStats, Trajectory};

/// Half-open time interval `[t0, tf)` sampled every `dt`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeSpan {
    /// Initial time
    pub t0: Real,
    /// Final time (excluded from the grid)
    pub tf: Real,
    /// Fixed time step
    pub dt: Real,
    /// Upper bound on grid points, checked before allocating
    pub max_points: usize,
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self {
            t0: 0.0,
            tf: 1.0,
            dt: 1e-3,
            max_points: 10_000_000,
        }
    }
}

impl TimeSpan {
    pub fn new(t0: Real, tf: Real, dt: Real) -> Self {
        Self {
            t0,
            tf,
            dt,
            ..Self::default()
        }
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Check bounds, step size and grid size.
    ///
    /// `tf <= t0` is valid and describes an empty grid.
    pub fn validate(&self) -> SimResult<()> {
        let range_err = |_| SimError::InvalidTimeRange {
            t0: self.t0,
            tf: self.tf,
        };
        ensure_finite(self.t0, "t0").map_err(range_err)?;
        ensure_finite(self.tf, "tf").map_err(range_err)?;
        ensure_positive(self.dt, "dt").map_err(|_| SimError::InvalidStepSize { dt: self.dt })?;
        if self.tf > self.t0 {
            let points = ((self.tf - self.t0) / self.dt).ceil();
            if points > self.max_points as Real {
                return Err(SimError::TooManySteps {
                    points,
                    limit: self.max_points,
                });
            }
        }
        Ok(())
    }

    /// Number of grid points, ceil((tf - t0) / dt) with every point below `tf`.
    ///
    /// Zero for an empty range and for any span that fails [`TimeSpan::validate`].
    pub fn len(&self) -> usize {
        if self.tf <= self.t0 || self.validate().is_err() {
            return 0;
        }
        let mut n = ((self.tf - self.t0) / self.dt).ceil() as usize;
        while n > 0 && self.point(n - 1) >= self.tf {
            n -= 1;
        }
        n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid point `i`, computed as `t0 + i * dt`.
    pub fn point(&self, i: usize) -> Real {
        self.t0 + i as Real * self.dt
    }

    /// The full time grid.
    pub fn grid(&self) -> Vec<Real> {
        (0..self.len()).map(|i| self.point(i)).collect()
    }
}

/// Integrate dy/dt = f(t, y) with fixed-step RK4 over `[t0, tf)`.
///
/// Returns one state per grid point; row 0 is `y0` unchanged. `tf <= t0`
/// yields an empty trajectory.
pub fn integrate<G>(
    generator: &G,
    y0: &State,
    t0: Real,
    tf: Real,
    dt: Real,
) -> SimResult<Trajectory>
where
    G: Generator + ?Sized,
{
    integrate_span(generator, y0, &TimeSpan::new(t0, tf, dt))
}

/// Integrate over a configured [`TimeSpan`].
pub fn integrate_span<G>(generator: &G, y0: &State, span: &TimeSpan) -> SimResult<Trajectory>
where
    G: Generator + ?Sized,
{
    if y0.is_empty() {
        return Err(SimError::EmptyState);
    }
    span.validate()?;
    state::ensure_all_finite(y0, "initial state")?;

    let n = y0.len();
    let t = span.grid();
    let points = t.len();

    let _span = debug_span!("integrate", n, points).entered();
    let timer = Timer::start("integrate");

    if points == 0 {
        warn!(
            t0 = span.t0,
            tf = span.tf,
            "empty time range; returning empty trajectory"
        );
        let stats = RunStats {
            steps: 0,
            rhs_evals: 0,
            elapsed_s: timer.stop(),
        };
        return Ok(Trajectory::new(t, DMatrix::zeros(0, n), stats));
    }

    // One entry evaluation so a misshapen generator fails before the trajectory is allocated.
    checked_derivative(generator, span.t0, y0)?;
    let mut rhs_evals = 1;

    debug!(t0 = span.t0, tf = span.tf, dt = span.dt, "starting RK4 integration");

    let mut y = DMatrix::<Amplitude>::zeros(points, n);
    y.set_row(0, &y0.transpose());

    let stepper = RK4;
    let mut current = y0.clone();
    for i in 1..points {
        let next = stepper.step(generator, t[i - 1], &current, span.dt)?;
        rhs_evals += stepper.evals_per_step();
        trace!(step = i, t = t[i], "step accepted");
        y.set_row(i, &next.transpose());
        current = next;
    }

    let label = timer.label();
    let stats = RunStats {
        steps: points - 1,
        rhs_evals,
        elapsed_s: timer.stop(),
    };
    debug!(
        timer = label,
        steps = stats.steps,
        rhs_evals = stats.rhs_evals,
        elapsed_s = ?stats.elapsed_s,
        "integration finished"
    );

    Ok(Trajectory::new(t, y, stats))
}
