//! Sequential reference multiplier.
//!
//! The classic triple loop, kept deliberately plain: the parallel engine is
//! validated against this implementation, and both accumulate each cell in
//! increasing `k` order, so for identical inputs the two paths produce
//! bit-identical results.

use ndarray::Array2;

/// Multiply `a * b` with a single-threaded triple loop.
///
/// Cells are computed row by row; each accumulates
/// `sum over k of a[i, k] * b[k, j]` with plain `f64` addition.
///
/// # Panics
///
/// Panics if `a.ncols() != b.nrows()`.
pub fn multiply(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let (n, m) = a.dim();
    let (b_rows, p) = b.dim();
    assert_eq!(
        m, b_rows,
        "Cannot multiply {}x{} by {}x{}: inner dimensions disagree",
        n, m, b_rows, p
    );

    let mut c = Array2::zeros((n, p));
    for i in 0..n {
        for j in 0..p {
            let mut sum = 0.0;
            for k in 0..m {
                sum += a[[i, k]] * b[[k, j]];
            }
            c[[i, j]] = sum;
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_known_two_by_two() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        assert_eq!(multiply(&a, &b), array![[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = array![[2.0, -1.0, 0.5], [4.0, 0.0, 3.0]];
        let identity = Array2::eye(3);
        assert_eq!(multiply(&a, &identity), a);
    }

    #[test]
    fn test_row_times_column() {
        let row = array![[1.0, 2.0, 3.0]];
        let col = array![[4.0], [5.0], [6.0]];
        let product = multiply(&row, &col);
        assert_eq!(product.dim(), (1, 1));
        assert_abs_diff_eq!(product[[0, 0]], 32.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_row_operand() {
        let a = Array2::zeros((0, 3));
        let b = Array2::zeros((3, 4));
        assert_eq!(multiply(&a, &b).dim(), (0, 4));
    }

    #[test]
    #[should_panic(expected = "inner dimensions disagree")]
    fn test_mismatched_inner_dimensions_panic() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((4, 2));
        multiply(&a, &b);
    }
}
