use crate::error::LossError;
use crate::math::matrix::Matrix;
use crate::math::stable::{log_sum_exp, softmax_row};
use super::{score_row, validate};

/// Softmax cross-entropy loss for a linear classifier.
///
/// Scores are `X·W` with `W` of shape (D, C), `X` of shape (N, D) and
/// `y[i]` the correct class of example i. Each entry point returns the
/// batch-averaged loss plus the L2 penalty `reg · Σ W²` (no ½ factor),
/// together with the gradient w.r.t. `W` (same shape as `W`).
///
/// The per-example contribution uses the log-sum-exp form
/// `-s[y[i]] + ln Σ_j exp(s[j])` rather than `-ln p[y[i]]`, so a true-class
/// probability that underflows to zero never reaches the logarithm.
pub struct SoftmaxLoss;

impl SoftmaxLoss {
    /// Explicit-loop form: one pass over examples with an inner loop over
    /// classes accumulating gradient columns.
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
            loss += log_sum_exp(&scores) - scores[y[i]];

            let p = softmax_row(&scores);
            for j in 0..num_classes {
                let coeff = if j == y[i] { p[j] - 1.0 } else { p[j] };
                for d in 0..w.rows {
                    dw.data[d][j] += coeff * x.data[i][d];
                }
            }
        }

        loss /= num_train as f64;
        loss += reg * w.sum_of_squares();
        let dw = dw.scale(1.0 / num_train as f64) + w.scale(2.0 * reg);

        Ok((loss, dw))
    }

    /// Whole-matrix form: one score multiply, row-wise reductions for the
    /// probabilities, and a single Xᵀ·P multiply for the gradient.
    pub fn vectorized(
        w: &Matrix,
        x: &Matrix,
        y: &[usize],
        reg: f64,
    ) -> Result<(f64, Matrix), LossError> {
        validate(w, x, y)?;

        let num_train = x.rows;
        let scores = x.clone() * w.clone();

        // Row-wise max and exp-sum stand in for NumPy's broadcasting; the
        // helpers are the same ones the naive path uses, so the two paths
        // share their intermediates exactly.
        let mut data_loss = 0.0;
        let mut probs = Matrix::zeros(num_train, w.cols);
        for i in 0..num_train {
            let row = scores.row(i);
            data_loss += log_sum_exp(row) - row[y[i]];
            probs.data[i] = softmax_row(row);
        }

        // `probs` is owned by this call, so subtracting 1 at the label
        // column cannot alias storage the caller still holds.
        for (i, &label) in y.iter().enumerate() {
            probs.data[i][label] -= 1.0;
        }

        let loss = data_loss / num_train as f64 + reg * w.sum_of_squares();
        let dw = (x.transpose() * probs).scale(1.0 / num_train as f64) + w.scale(2.0 * reg);

        Ok((loss, dw))
    }
}
