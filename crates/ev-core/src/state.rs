//! Complex state vectors.
//!
//! Every state is stored as `Complex<f64>` regardless of whether the caller's
//! values are nominally real, so generators are free to return complex
//! derivatives.

use nalgebra::{Complex, DVector};

use crate::{EvError, EvResult, Real};

/// One complex component of a state vector.
pub type Amplitude = Complex<Real>;

/// Instantaneous configuration of the system.
pub type State = DVector<Amplitude>;

/// Build a state from real values (imaginary parts zero).
pub fn from_real(values: &[Real]) -> State {
    State::from_iterator(values.len(), values.iter().map(|&re| Amplitude::new(re, 0.0)))
}

/// Build a state from separate real and imaginary parts.
pub fn from_parts(re: &[Real], im: &[Real]) -> EvResult<State> {
    if re.len() != im.len() {
        return Err(EvError::DimensionMismatch {
            what: "imaginary parts",
            expected: re.len(),
            actual: im.len(),
        });
    }
    Ok(State::from_iterator(
        re.len(),
        re.iter().zip(im).map(|(&a, &b)| Amplitude::new(a, b)),
    ))
}

/// Euclidean norm, sqrt(sum |y_k|^2).
pub fn norm(y: &State) -> Real {
    y.iter().map(|z| z.norm_sqr()).sum::<Real>().sqrt()
}

/// Largest componentwise modulus of `a - b`.
pub fn max_abs_diff(a: &State, b: &State) -> EvResult<Real> {
    if a.len() != b.len() {
        return Err(EvError::DimensionMismatch {
            what: "state length",
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, Real::max))
}

/// Fails on the first component with a NaN or infinite part.
pub fn ensure_all_finite(y: &State, what: &'static str) -> EvResult<()> {
    for z in y.iter() {
        if !z.re.is_finite() {
            return Err(EvError::NonFinite { what, value: z.re });
        }
        if !z.im.is_finite() {
            return Err(EvError::NonFinite { what, value: z.im });
        }
    }
    Ok(())
}
