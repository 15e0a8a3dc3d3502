//! Numeric-stability helpers shared by the naive and vectorized loss paths.
//!
//! Both paths must go through the same per-row max and exp-sum so that their
//! results agree to floating-point tolerance, which is why these reductions
//! live here instead of being re-derived in each loss module.

/// Largest entry of a score row.
pub fn row_max(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// ln(Σ exp(row[j])), computed against the row max so the exponentials
/// stay bounded. Softmax is shift-invariant, so the shift cancels exactly.
pub fn log_sum_exp(row: &[f64]) -> f64 {
    let max = row_max(row);
    let sum: f64 = row.iter().map(|&s| (s - max).exp()).sum();
    max + sum.ln()
}

/// Softmax probabilities of a score row, with the row max subtracted
/// before exponentiating.
pub fn softmax_row(row: &[f64]) -> Vec<f64> {
    let max = row_max(row);
    let exps: Vec<f64> = row.iter().map(|&s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn softmax_row_sums_to_one() {
        let p = softmax_row(&[1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(p[2] > p[1] && p[1] > p[0]);
    }

    #[test]
    fn softmax_row_is_shift_invariant() {
        let p = softmax_row(&[0.5, -1.0, 2.0]);
        let shifted = softmax_row(&[0.5 + 100.0, -1.0 + 100.0, 2.0 + 100.0]);
        for (a, b) in p.iter().zip(shifted.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn log_sum_exp_survives_large_scores() {
        // Unshifted exp(1000) overflows to +inf; the shifted form must not.
        let v = log_sum_exp(&[1000.0, 999.0]);
        assert!(v.is_finite());
        assert_abs_diff_eq!(v, 1000.0 + (1.0 + (-1.0f64).exp()).ln(), epsilon = 1e-9);
    }

    #[test]
    fn log_sum_exp_matches_direct_form_for_small_scores() {
        let row: [f64; 3] = [0.1, -0.3, 0.7];
        let direct = row.iter().map(|&s| s.exp()).sum::<f64>().ln();
        assert_abs_diff_eq!(log_sum_exp(&row), direct, epsilon = 1e-12);
    }

    #[test]
    fn uniform_scores_give_uniform_probabilities() {
        let p = softmax_row(&[0.0; 4]);
        for &v in &p {
            assert_abs_diff_eq!(v, 0.25, epsilon = 1e-12);
        }
    }
}
