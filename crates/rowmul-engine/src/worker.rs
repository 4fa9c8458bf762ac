//! Worker body: the dot-product cells for one row band.
//!
//! A worker owns nothing but shared read-only views of the operands, its
//! assigned row range, and the exclusive mutable band for that range. It
//! writes its cells and returns; it never communicates with the
//! coordinator or with other workers.

use ndarray::{ArrayView2, ArrayViewMut2};

use crate::partition::RowRange;

/// Compute output rows `rows` of the product `a * b` into `band`.
///
/// Band row `r - rows.start` receives output row `r`. Each cell
/// accumulates `sum over k of a[r, k] * b[k, j]` in increasing `k` with
/// plain `f64` addition, matching the sequential reference, so the result
/// is identical for any worker count.
///
/// # Panics
///
/// Panics if the operand shapes or the band shape disagree with `rows`.
/// The coordinator observes such a panic as an abnormal worker
/// termination; a faulted worker never reports success over a partial
/// band.
pub fn multiply_rows(
    a: ArrayView2<'_, f64>,
    b: ArrayView2<'_, f64>,
    rows: RowRange,
    mut band: ArrayViewMut2<'_, f64>,
) {
    let inner = a.ncols();
    assert_eq!(
        inner,
        b.nrows(),
        "Operand inner dimensions disagree: {} vs {}",
        inner,
        b.nrows()
    );
    assert!(
        rows.end <= a.nrows(),
        "Row range {} exceeds the left operand's {} rows",
        rows,
        a.nrows()
    );
    assert_eq!(
        band.nrows(),
        rows.len(),
        "Band holds {} rows but the range {} holds {}",
        band.nrows(),
        rows,
        rows.len()
    );
    assert_eq!(
        band.ncols(),
        b.ncols(),
        "Band holds {} columns but the right operand has {}",
        band.ncols(),
        b.ncols()
    );

    let cols = b.ncols();
    for (band_row, r) in (rows.start..rows.end).enumerate() {
        for j in 0..cols {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += a[[r, k]] * b[[k, j]];
            }
            band[[band_row, j]] = sum;
        }
    }

    log::debug!("Computed rows {}", rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_full_range_known_product() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let mut out = Array2::zeros((2, 2));

        multiply_rows(
            a.view(),
            b.view(),
            RowRange { start: 0, end: 2 },
            out.view_mut(),
        );
        assert_eq!(out, array![[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn test_band_receives_only_its_rows() {
        let a = array![[1.0, 0.0], [0.0, 1.0], [2.0, 2.0]];
        let b = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
        let mut band = Array2::zeros((2, 4));

        // Rows 1..3 of the product, offset to band rows 0..2.
        multiply_rows(
            a.view(),
            b.view(),
            RowRange { start: 1, end: 3 },
            band.view_mut(),
        );
        assert_eq!(
            band,
            array![[5.0, 6.0, 7.0, 8.0], [12.0, 16.0, 20.0, 24.0]]
        );
    }

    #[test]
    fn test_empty_range_writes_nothing() {
        let a = array![[1.0], [2.0]];
        let b = array![[3.0]];
        let mut band = Array2::zeros((0, 1));

        multiply_rows(
            a.view(),
            b.view(),
            RowRange { start: 2, end: 2 },
            band.view_mut(),
        );
        assert_eq!(band.nrows(), 0);
    }

    #[test]
    #[should_panic(expected = "Band holds")]
    fn test_band_shape_mismatch_panics() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let mut band = Array2::zeros((1, 2));

        multiply_rows(
            a.view(),
            b.view(),
            RowRange { start: 0, end: 2 },
            band.view_mut(),
        );
    }
}
