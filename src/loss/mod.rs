pub mod softmax;
pub mod svm;
pub mod loss_type;

pub use softmax::SoftmaxLoss;
pub use svm::SvmHingeLoss;
pub use loss_type::LossType;

use crate::error::LossError;
use crate::math::matrix::Matrix;

/// Eager precondition checks shared by every loss entry point.
///
/// `w` is (D, C), `x` is (N, D), `y` holds one class index per example.
/// Checks run in taxonomy order: shapes, then labels, then finiteness.
pub(crate) fn validate(w: &Matrix, x: &Matrix, y: &[usize]) -> Result<(), LossError> {
    if w.rows == 0 || w.cols == 0 || x.rows == 0 {
        return Err(LossError::ShapeMismatch {
            expected: "non-empty W and a non-empty batch".to_string(),
            found: format!("W ({}, {}), X ({}, {})", w.rows, w.cols, x.rows, x.cols),
        });
    }
    if x.cols != w.rows {
        return Err(LossError::ShapeMismatch {
            expected: format!("X with {} columns to match W ({}, {})", w.rows, w.rows, w.cols),
            found: format!("X ({}, {})", x.rows, x.cols),
        });
    }
    if y.len() != x.rows {
        return Err(LossError::ShapeMismatch {
            expected: format!("{} labels to match X ({}, {})", x.rows, x.rows, x.cols),
            found: format!("{} labels", y.len()),
        });
    }
    for (i, &label) in y.iter().enumerate() {
        if label >= w.cols {
            return Err(LossError::InvalidLabel {
                example: i,
                label,
                classes: w.cols,
            });
        }
    }
    if !w.is_finite() {
        return Err(LossError::NonFiniteInput("W"));
    }
    if !x.is_finite() {
        return Err(LossError::NonFiniteInput("X"));
    }
    Ok(())
}

/// Score row for example `i`: X[i]·W, a length-C vector.
pub(crate) fn score_row(x: &Matrix, w: &Matrix, i: usize) -> Vec<f64> {
    let mut scores = vec![0.0; w.cols];
    for j in 0..w.cols {
        for d in 0..w.rows {
            scores[j] += x.data[i][d] * w.data[d][j];
        }
    }
    scores
}
