//! Shared result buffer lifecycle.
//!
//! One flat allocation holds the full output matrix in row-major order:
//! cell `(r, c)` lives at offset `r * cols + c`. Before any worker starts,
//! the buffer is split along the row axis into one exclusive mutable band
//! per partition, so the borrow checker rules out overlapping writes and no
//! locking is needed. The region is reclaimed exactly once on every path:
//! dropping the buffer on failure, or converting it into the output matrix
//! on success.

use ndarray::{Array2, ArrayViewMut2, Axis};

use crate::error::{EngineError, Result};
use crate::partition::RowRange;

/// Owner of the `rows x cols` result cells for one multiplication request.
#[derive(Debug)]
pub struct ResultBuffer {
    cells: Array2<f64>,
}

impl ResultBuffer {
    /// Allocate a zeroed buffer for a `rows x cols` result.
    ///
    /// Allocation is explicit and fallible: an oversized request surfaces
    /// as [`EngineError::AllocationFailure`] instead of aborting the
    /// process, and no worker is ever spawned against a buffer that failed
    /// to allocate.
    pub fn allocate(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| allocation_failure(rows, cols))?;

        let mut data: Vec<f64> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| allocation_failure(rows, cols))?;
        data.resize(len, 0.0);

        let cells = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| allocation_failure(rows, cols))?;
        log::debug!("Allocated {}x{} result buffer", rows, cols);
        Ok(Self { cells })
    }

    /// Buffer dimensions as `(rows, cols)`.
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Split the buffer into one exclusive mutable row band per partition,
    /// in plan order.
    ///
    /// Each band borrows the buffer mutably for its whole lifetime, so no
    /// two bands can alias a cell and nothing else can touch the buffer
    /// while workers hold them.
    ///
    /// # Panics
    ///
    /// Panics if `ranges` is not contiguous from row 0 or does not cover
    /// the buffer's rows exactly.
    pub fn partition_mut(&mut self, ranges: &[RowRange]) -> Vec<ArrayViewMut2<'_, f64>> {
        let rows = self.cells.nrows();
        let mut bands = Vec::with_capacity(ranges.len());
        let mut rest = self.cells.view_mut();
        let mut next_row = 0;

        for range in ranges {
            assert_eq!(
                range.start, next_row,
                "Partition plan must be contiguous: expected row {}, got {}",
                next_row, range.start
            );
            let (band, tail) = rest.split_at(Axis(0), range.len());
            bands.push(band);
            rest = tail;
            next_row = range.end;
        }
        assert_eq!(
            next_row, rows,
            "Partition plan covers {} of {} buffer rows",
            next_row, rows
        );
        bands
    }

    /// Consume the buffer and hand the completed cells over as the output
    /// matrix. Zero-copy; dropping the returned matrix releases the region.
    pub fn into_matrix(self) -> Array2<f64> {
        self.cells
    }
}

fn allocation_failure(rows: usize, cols: usize) -> EngineError {
    let requested = rows
        .saturating_mul(cols)
        .saturating_mul(std::mem::size_of::<f64>());
    EngineError::AllocationFailure {
        rows,
        cols,
        requested,
    }
}
