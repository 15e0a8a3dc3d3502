use serde::{Serialize, Deserialize};

use crate::error::LossError;
use crate::math::matrix::Matrix;
use super::{SoftmaxLoss, SvmHingeLoss};

/// Selects which classification loss an external training loop plugs in.
///
/// - `Softmax`  — cross-entropy over softmax-normalized scores.
/// - `SvmHinge` — multiclass margin loss with fixed δ = 1.
///
/// The two are alternative loss heads with identical contracts; nothing
/// flows between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Softmax,
    SvmHinge,
}

impl LossType {
    /// Dispatches to the explicit-loop implementation.
    pub fn naive(
        &self,
        w: &Matrix,
        x: &Matrix,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix), LossError> {
        match self {
            LossType::Softmax => SoftmaxLoss::naive(w, x, y, reg),
            LossType::SvmHinge => SvmHingeLoss::naive(w, x, y, reg),
        }
    }

    /// Dispatches to the whole-matrix implementation.
    pub fn vectorized(
        &self,
        w: &Matrix,
        x: &Matrix,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix), LossError> {
        match self {
            LossType::Softmax => SoftmaxLoss::vectorized(w, x, y, reg),
            LossType::SvmHinge => SvmHingeLoss::vectorized(w, x, y, reg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dispatch_matches_direct_calls() {
        let w = Matrix::from_data(vec![vec![0.2, -0.1], vec![0.4, 0.3]]);
        let x = Matrix::from_data(vec![vec![1.0, -0.5], vec![0.3, 0.8]]);
        let y = vec![0, 1];

        let (via_enum, _) = LossType::Softmax.vectorized(&w, &x, &y, 0.1).unwrap();
        let (direct, _) = SoftmaxLoss::vectorized(&w, &x, &y, 0.1).unwrap();
        assert_abs_diff_eq!(via_enum, direct);

        let (via_enum, _) = LossType::SvmHinge.naive(&w, &x, &y, 0.1).unwrap();
        let (direct, _) = SvmHingeLoss::naive(&w, &x, &y, 0.1).unwrap();
        assert_abs_diff_eq!(via_enum, direct);
    }
}
