use crate::EvError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, EvError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, EvError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(EvError::InvalidArg { what })
    }
}

/// Empirical convergence order from two errors whose step sizes differ by `ratio`.
///
/// For a method of order p, halving the step (`ratio = 2`) divides the error by
/// roughly `2^p`, so this returns `log(coarse / fine) / log(ratio)`.
pub fn observed_order(coarse_err: Real, fine_err: Real, ratio: Real) -> Real {
    (coarse_err / fine_err).ln() / ratio.ln()
}
