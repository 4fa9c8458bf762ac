//! Row-range partition planning.
//!
//! The output's row space is split into exactly one contiguous half-open
//! range per worker. Ranges are ordered, non-overlapping, and cover every
//! row exactly once; the last range absorbs the remainder when the worker
//! count does not divide the row count evenly. More workers than rows is
//! legal: the surplus workers receive empty ranges and do no work.

use std::fmt;

use crate::error::{EngineError, Result};

/// A half-open range `[start, end)` of result rows assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row of the range.
    pub start: usize,
    /// One past the last row of the range.
    pub end: usize,
}

impl RowRange {
    /// Number of rows in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range holds no rows.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Split `rows` output rows into exactly `workers` contiguous ranges.
///
/// The chunk size is `rows / workers`, clamped to at least one row, and the
/// final range absorbs any remainder (`rows mod workers`). When
/// `workers > rows` the first `rows` ranges hold one row each and every
/// range past index `rows` is empty.
///
/// Planning is pure: no resource is acquired here.
pub fn plan(rows: usize, workers: usize) -> Result<Vec<RowRange>> {
    if workers == 0 {
        return Err(EngineError::InvalidWorkerCount { workers });
    }

    let base = (rows / workers).max(1);
    let mut ranges = Vec::with_capacity(workers);
    for i in 0..workers {
        let start = (i * base).min(rows);
        let end = if i == workers - 1 {
            rows
        } else {
            ((i + 1) * base).min(rows)
        };
        ranges.push(RowRange { start, end });
    }

    log::trace!(
        "Planned {} rows across {} workers (chunk {}, remainder {})",
        rows,
        workers,
        base,
        rows % workers
    );
    Ok(ranges)
}
