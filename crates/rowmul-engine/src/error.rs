//! Engine error taxonomy.
//!
//! Every failure the engine can produce is a concrete [`EngineError`]
//! variant; nothing is swallowed or retried. A failed worker indicates a
//! logic or resource fault, not a transient condition.

use thiserror::Error;

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the parallel multiplication engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The operand inner dimensions disagree. Raised before any resource
    /// is acquired.
    #[error(
        "Cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}: inner dimensions disagree"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// The requested worker count cannot partition anything.
    #[error("Worker count must be at least 1, got {workers}")]
    InvalidWorkerCount { workers: usize },

    /// The shared result buffer could not be reserved. No worker has been
    /// spawned when this is raised.
    #[error("Failed to allocate {rows}x{cols} result buffer ({requested} bytes)")]
    AllocationFailure {
        rows: usize,
        cols: usize,
        requested: usize,
    },

    /// One or more workers terminated abnormally. Raised only after every
    /// worker has been joined, so no thread is left running.
    #[error("{} worker(s) terminated abnormally (partitions {:?})", .partitions.len(), .partitions)]
    WorkerFailure { partitions: Vec<usize> },

    /// The OS refused to start a worker thread. Workers already running
    /// are joined before this is raised.
    #[error("Failed to spawn worker for partition {partition}")]
    SpawnFailure {
        partition: usize,
        source: std::io::Error,
    },
}
