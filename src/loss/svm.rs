use crate::error::LossError;
use crate::math::matrix::Matrix;
use super::{score_row, validate};

/// Margin width. Fixed rather than configurable: its scale trades off
/// directly against the scale of W, so tuning it buys nothing over tuning
/// the regularization strength.
const DELTA: f64 = 1.0;

/// Multiclass SVM hinge loss ("margin loss") for a linear classifier.
///
/// Same contract as [`SoftmaxLoss`](super::SoftmaxLoss): scores are `X·W`,
/// the loss is batch-averaged with the L2 penalty `reg · Σ W²` (no ½
/// factor), and the gradient has the shape of `W`. Every class whose score
/// comes within `DELTA` of the correct class's score contributes
/// `s_j - s_y + DELTA` to the loss; a margin of exactly zero contributes
/// nothing to loss or subgradient.
pub struct SvmHingeLoss;

impl SvmHingeLoss {
    /// Explicit-loop form, mirroring the margin definition one class at a
    /// time.
    pub fn naive(
        w: &Matrix,
        x: &Matrix,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix), LossError> {
        validate(w, x, y)?;

        let num_train = x.rows;
        let num_classes = w.cols;
        let mut loss = 0.0;
        let mut dw = Matrix::zeros(w.rows, w.cols);

        for i in 0..num_train {
            let scores = score_row(x, w, i);
            let correct = scores[y[i]];

            for j in 0..num_classes {
                if j == y[i] {
                    continue;
                }
                let margin = scores[j] - correct + DELTA;
                if margin > 0.0 {
                    loss += margin;
                    for d in 0..w.rows {
                        dw.data[d][j] += x.data[i][d];
                        dw.data[d][y[i]] -= x.data[i][d];
                    }
                }
            }
        }

        loss /= num_train as f64;
        loss += reg * w.sum_of_squares();
        let dw = dw.scale(1.0 / num_train as f64) + w.scale(2.0 * reg);

        Ok((loss, dw))
    }

    /// Whole-matrix form: margin matrix, then a ±1 indicator matrix turned
    /// into the gradient with a single Xᵀ multiply.
    pub fn vectorized(
        w: &Matrix,
        x: &Matrix,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix), LossError> {
        validate(w, x, y)?;

        let num_train = x.rows;
        let scores = x.clone() * w.clone();

        let mut margins = Matrix::zeros(num_train, w.cols);
        for (i, &label) in y.iter().enumerate() {
            let correct = scores.data[i][label];
            for j in 0..w.cols {
                margins.data[i][j] = (scores.data[i][j] - correct + DELTA).max(0.0);
            }
            // The formula leaves exactly DELTA at the correct class
            // (s_y - s_y + DELTA); it must not count against itself.
            margins.data[i][label] = 0.0;
        }

        let total: f64 = margins.data.iter().flat_map(|row| row.iter()).sum();

        // +1 for every violating class, -count on the label column.
        let mut indicator = margins.map(|m| if m > 0.0 { 1.0 } else { 0.0 });
        for (i, &label) in y.iter().enumerate() {
            let count: f64 = indicator.data[i].iter().sum();
            indicator.data[i][label] = -count;
        }

        let loss = total / num_train as f64 + reg * w.sum_of_squares();
        let dw = (x.transpose() * indicator).scale(1.0 / num_train as f64) + w.scale(2.0 * reg);

        Ok((loss, dw))
    }
}
