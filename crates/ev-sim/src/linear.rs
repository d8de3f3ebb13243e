//! Linear Schrödinger-like generator dy/dt = -i · O · y.

use ev_core::{Amplitude, EvError, Real, State};
use nalgebra::DMatrix;

use crate::error::{SimError, SimResult};
use crate::generator::Generator;

/// Constant-operator generator computing dy/dt = -i · (O · y).
///
/// The operator is explicit configuration owned by the generator. For a
/// Hermitian `O` the evolution is unitary and preserves the norm of the
/// state; for a skew-symmetric real `O` (such as [`LinearGenerator::reference`])
/// the factor `-i` makes the generator Hermitian and the norm grows.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGenerator {
    operator: DMatrix<Amplitude>,
}

impl LinearGenerator {
    /// Create a generator from a square complex operator.
    pub fn new(operator: DMatrix<Amplitude>) -> SimResult<Self> {
        if !operator.is_square() {
            return Err(SimError::NotSquare {
                rows: operator.nrows(),
                cols: operator.ncols(),
            });
        }
        Ok(Self { operator })
    }

    /// Create a generator from a real `dim x dim` operator given row by row.
    pub fn from_real(dim: usize, row_major: &[Real]) -> SimResult<Self> {
        if row_major.len() != dim * dim {
            return Err(EvError::DimensionMismatch {
                what: "operator entries",
                expected: dim * dim,
                actual: row_major.len(),
            }
            .into());
        }
        let entries: Vec<Amplitude> = row_major
            .iter()
            .map(|&re| Amplitude::new(re, 0.0))
            .collect();
        Self::new(DMatrix::from_row_slice(dim, dim, &entries))
    }

    /// The 2x2 operator O = [[0, -1], [1, 0]].
    pub fn reference() -> Self {
        let o = DMatrix::from_row_slice(
            2,
            2,
            &[
                Amplitude::new(0.0, 0.0),
                Amplitude::new(-1.0, 0.0),
                Amplitude::new(1.0, 0.0),
                Amplitude::new(0.0, 0.0),
            ],
        );
        Self { operator: o }
    }

    pub fn operator(&self) -> &DMatrix<Amplitude> {
        &self.operator
    }

    /// Length of the states this generator accepts.
    pub fn dim(&self) -> usize {
        self.operator.nrows()
    }
}

impl Generator for LinearGenerator {
    fn derivative(&self, _t: Real, y: &State) -> SimResult<State> {
        if y.len() != self.dim() {
            return Err(EvError::DimensionMismatch {
                what: "state length for operator",
                expected: self.dim(),
                actual: y.len(),
            }
            .into());
        }
        Ok((&self.operator * y) * Amplitude::new(0.0, -1.0))
    }
}
