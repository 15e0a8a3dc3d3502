use crate::math::matrix::Matrix;

/// Central-difference numerical gradient of a scalar function of a matrix:
/// (f(W + h·e_kl) - f(W - h·e_kl)) / 2h for every entry (k, l).
///
/// Perturbs a locally-owned clone of `w`, so the caller's matrix is never
/// touched. Cost is two evaluations of `f` per entry; intended for
/// verifying analytic gradients on small problems, not for training.
pub fn numerical_gradient<F>(f: F, w: &Matrix, h: f64) -> Matrix
where
    F: Fn(&Matrix) -> f64,
{
    let mut grad = Matrix::zeros(w.rows, w.cols);
    let mut probe = w.clone();

    for i in 0..w.rows {
        for j in 0..w.cols {
            let orig = probe.data[i][j];

            probe.data[i][j] = orig + h;
            let plus = f(&probe);

            probe.data[i][j] = orig - h;
            let minus = f(&probe);

            probe.data[i][j] = orig;
            grad.data[i][j] = (plus - minus) / (2.0 * h);
        }
    }

    grad
}
