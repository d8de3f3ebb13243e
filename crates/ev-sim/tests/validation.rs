//! Input validation and failure propagation for the trajectory driver.

use ev_core::{EvError, Real, State, state};
use ev_sim::{
    Autonomous, Generator, LinearGenerator, SimError, SimResult, TimeSpan, integrate,
    integrate_span,
};

/// Generator that reports an error once time passes `fail_after`.
struct FailsLate {
    fail_after: Real,
}

impl Generator for FailsLate {
    fn derivative(&self, t: Real, y: &State) -> SimResult<State> {
        if t > self.fail_after {
            return Err(SimError::Generator {
                message: format!("no data past t = {}", self.fail_after),
            });
        }
        Ok(-y)
    }
}

#[test]
fn non_positive_step_is_rejected() {
    let g = LinearGenerator::reference();
    let y0 = state::from_real(&[1.0, 0.0]);
    for dt in [0.0, -0.01] {
        let err = integrate(&g, &y0, 0.0, 1.0, dt).unwrap_err();
        assert_eq!(err, SimError::InvalidStepSize { dt });
    }
}

#[test]
fn non_finite_bounds_are_rejected() {
    let g = LinearGenerator::reference();
    let y0 = state::from_real(&[1.0, 0.0]);
    let err = integrate(&g, &y0, 0.0, Real::INFINITY, 0.1).unwrap_err();
    assert!(matches!(err, SimError::InvalidTimeRange { .. }));
}

#[test]
fn empty_initial_state_is_rejected() {
    let g = Autonomous(|y: &State| y.clone());
    let err = integrate(&g, &State::zeros(0), 0.0, 1.0, 0.1).unwrap_err();
    assert_eq!(err, SimError::EmptyState);
}

#[test]
fn non_finite_initial_state_is_rejected() {
    let g = LinearGenerator::reference();
    let y0 = state::from_real(&[Real::NAN, 0.0]);
    let err = integrate(&g, &y0, 0.0, 1.0, 0.1).unwrap_err();
    assert!(matches!(err, SimError::Core(EvError::NonFinite { .. })));
}

#[test]
fn empty_or_reversed_range_gives_empty_trajectory() {
    let g = LinearGenerator::reference();
    let y0 = state::from_real(&[1.0, 0.0]);
    for (t0, tf) in [(1.0, 1.0), (2.0, 1.0)] {
        let traj = integrate(&g, &y0, t0, tf, 0.1).unwrap();
        assert!(traj.is_empty());
        assert_eq!(traj.y().nrows(), 0);
        assert_eq!(traj.dim(), 2);
        assert_eq!(traj.stats().steps, 0);
        assert_eq!(traj.stats().rhs_evals, 0);
    }
}

#[test]
fn empty_range_never_calls_the_generator() {
    let y0 = state::from_real(&[1.0, 0.0]);

    let misshapen = Autonomous(|_y: &State| state::from_real(&[0.0]));
    let traj = integrate(&misshapen, &y0, 1.0, 1.0, 0.1).unwrap();
    assert!(traj.is_empty());

    let failing = FailsLate { fail_after: -1.0 };
    let traj = integrate(&failing, &y0, 3.0, 2.0, 0.1).unwrap();
    assert!(traj.is_empty());
    assert_eq!(traj.stats().rhs_evals, 0);
}

#[test]
fn wrong_length_generator_fails_before_stepping() {
    let g = Autonomous(|_y: &State| state::from_real(&[0.0]));
    let y0 = state::from_real(&[1.0, 0.0]);
    let err = integrate(&g, &y0, 0.5, 1.0, 0.1).unwrap_err();
    assert_eq!(
        err,
        SimError::DimensionMismatch {
            expected: 2,
            actual: 1,
            t: 0.5
        }
    );
}

#[test]
fn wrong_length_mid_run_is_reported_not_panicked() {
    let g = |t: Real, y: &State| {
        if t >= 0.5 {
            State::zeros(y.len() + 1)
        } else {
            State::zeros(y.len())
        }
    };
    let y0 = state::from_real(&[1.0]);
    let err = integrate(&g, &y0, 0.0, 1.0, 0.125).unwrap_err();
    match err {
        SimError::DimensionMismatch {
            expected,
            actual,
            t,
        } => {
            assert_eq!((expected, actual), (1, 2));
            assert!(t >= 0.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn generator_errors_propagate_unchanged() {
    let g = FailsLate { fail_after: 0.3 };
    let y0 = state::from_real(&[1.0]);
    let err = integrate(&g, &y0, 0.0, 1.0, 0.1).unwrap_err();
    assert_eq!(
        err,
        SimError::Generator {
            message: "no data past t = 0.3".to_string()
        }
    );
}

#[test]
fn operator_dimension_mismatch_is_an_error() {
    let g = LinearGenerator::reference();
    let y0 = state::from_real(&[1.0, 0.0, 0.0]);
    let err = integrate(&g, &y0, 0.0, 1.0, 0.1).unwrap_err();
    assert!(matches!(
        err,
        SimError::Core(EvError::DimensionMismatch {
            expected: 2,
            actual: 3,
            ..
        })
    ));
}

#[test]
fn oversized_grid_is_rejected_up_front() {
    let g = LinearGenerator::reference();
    let y0 = state::from_real(&[1.0, 0.0]);
    let span = TimeSpan::new(0.0, 1e6, 1e-3).with_max_points(1_000);
    let err = integrate_span(&g, &y0, &span).unwrap_err();
    assert!(matches!(err, SimError::TooManySteps { limit: 1_000, .. }));
}

#[test]
fn error_messages_are_readable() {
    let msg = SimError::InvalidStepSize { dt: -1.0 }.to_string();
    assert!(msg.contains("dt = -1"));
    let msg = SimError::DimensionMismatch {
        expected: 2,
        actual: 3,
        t: 0.0,
    }
    .to_string();
    assert!(msg.contains("returned 3 components"));
}
