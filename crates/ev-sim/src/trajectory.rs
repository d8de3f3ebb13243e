//! Integration results.

use ev_core::{Amplitude, EvResult, Real, State, state};
use nalgebra::DMatrix;

/// Bookkeeping for one integration run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Number of steps taken (grid points minus one)
    pub steps: usize,
    /// Number of generator evaluations, including the entry check
    pub rhs_evals: usize,
    /// Wall-clock seconds, when timing is enabled
    pub elapsed_s: Option<f64>,
}

/// Time grid paired with one state per grid point.
///
/// Row `i` of [`Trajectory::y`] is the state at time `t()[i]`. Row 0 is the
/// initial state exactly as supplied.
#[derive(Clone, Debug)]
pub struct Trajectory {
    t: Vec<Real>,
    y: DMatrix<Amplitude>,
    stats: RunStats,
}

impl Trajectory {
    pub(crate) fn new(t: Vec<Real>, y: DMatrix<Amplitude>, stats: RunStats) -> Self {
        debug_assert_eq!(t.len(), y.nrows());
        Self { t, y, stats }
    }

    /// Time grid.
    pub fn t(&self) -> &[Real] {
        &self.t
    }

    /// States, one row per grid point.
    pub fn y(&self) -> &DMatrix<Amplitude> {
        &self.y
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Width of each state.
    pub fn dim(&self) -> usize {
        self.y.ncols()
    }

    /// State at grid index `i`.
    pub fn state(&self, i: usize) -> Option<State> {
        (i < self.len()).then(|| self.y.row(i).transpose())
    }

    pub fn final_state(&self) -> Option<State> {
        self.len().checked_sub(1).and_then(|i| self.state(i))
    }

    /// Iterate `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (Real, State)> + '_ {
        self.t
            .iter()
            .enumerate()
            .map(|(i, &t)| (t, self.y.row(i).transpose()))
    }

    /// Norm of each state.
    pub fn norms(&self) -> Vec<Real> {
        self.iter().map(|(_, y)| state::norm(&y)).collect()
    }

    /// Largest deviation of the state norm from the initial norm.
    ///
    /// Zero for an empty trajectory.
    pub fn max_norm_drift(&self) -> Real {
        let norms = self.norms();
        match norms.first() {
            Some(&n0) => norms.iter().map(|n| (n - n0).abs()).fold(0.0, Real::max),
            None => 0.0,
        }
    }

    /// Largest componentwise error against a reference solution `exact(t)`.
    pub fn max_error_by<F>(&self, exact: F) -> EvResult<Real>
    where
        F: Fn(Real) -> State,
    {
        let mut worst: Real = 0.0;
        for (t, y) in self.iter() {
            worst = worst.max(state::max_abs_diff(&exact(t), &y)?);
        }
        Ok(worst)
    }

    /// Split into the time grid and the state matrix.
    pub fn into_parts(self) -> (Vec<Real>, DMatrix<Amplitude>) {
        (self.t, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point() -> Trajectory {
        let mut y = DMatrix::zeros(2, 2);
        y[(0, 0)] = Amplitude::new(1.0, 0.0);
        y[(1, 1)] = Amplitude::new(0.0, 2.0);
        Trajectory::new(vec![0.0, 0.5], y, RunStats::default())
    }

    #[test]
    fn rows_are_states() {
        let traj = two_point();
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.dim(), 2);
        assert_eq!(traj.state(0).unwrap(), state::from_real(&[1.0, 0.0]));
        assert_eq!(
            traj.final_state().unwrap(),
            state::from_parts(&[0.0, 0.0], &[0.0, 2.0]).unwrap()
        );
        assert!(traj.state(2).is_none());
    }

    #[test]
    fn norm_drift_measured_from_first_row() {
        let traj = two_point();
        assert_eq!(traj.norms(), vec![1.0, 2.0]);
        assert_eq!(traj.max_norm_drift(), 1.0);
    }

    #[test]
    fn empty_trajectory_keeps_width() {
        let traj = Trajectory::new(Vec::new(), DMatrix::zeros(0, 3), RunStats::default());
        assert!(traj.is_empty());
        assert_eq!(traj.dim(), 3);
        assert!(traj.final_state().is_none());
        assert_eq!(traj.max_norm_drift(), 0.0);
    }

    #[test]
    fn error_against_reference() {
        let traj = two_point();
        let err = traj
            .max_error_by(|t| {
                if t == 0.0 {
                    state::from_real(&[1.0, 0.0])
                } else {
                    state::from_parts(&[0.0, 0.0], &[0.0, 1.5]).unwrap()
                }
            })
            .unwrap();
        assert!((err - 0.5).abs() < 1e-15);
    }
}
