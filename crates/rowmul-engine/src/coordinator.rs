//! Spawn/join orchestration for one multiplication request.
//!
//! The coordinator validates the operands, allocates the shared result
//! buffer, spawns exactly one named worker thread per partition, and blocks
//! on a full barrier join before touching the result. Scoped threads make
//! the barrier structural: the spawning scope cannot be exited while any
//! worker is unjoined, on any path, so the coordinator's read of the buffer
//! is always ordered after every worker's writes and a stuck worker is
//! never abandoned. There is no cancellation or timeout; a worker that
//! never terminates blocks the join indefinitely.

use std::thread;
use std::time::Instant;

use log::{error, info};
use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use crate::buffer::ResultBuffer;
use crate::error::{EngineError, Result};
use crate::partition::{self, RowRange};
use crate::worker;

/// Per-band worker body.
///
/// Injectable so the join path can be exercised against a faulting body;
/// [`Coordinator::run`] always passes [`worker::multiply_rows`].
type WorkerFn = dyn Fn(ArrayView2<'_, f64>, ArrayView2<'_, f64>, RowRange, ArrayViewMut2<'_, f64>)
    + Send
    + Sync;

/// How one spawned worker ended.
enum WorkerOutcome {
    Completed,
    Panicked(String),
    SpawnFailed(std::io::Error),
}

/// Runs multiplication requests across a fixed number of workers.
///
/// The coordinator itself is reusable; each [`run`](Self::run) call is one
/// self-contained request that allocates, computes, and releases its own
/// buffer.
pub struct Coordinator {
    workers: usize,
}

impl Coordinator {
    /// Create a coordinator that spawns `workers` workers per request.
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Worker count used for each request.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Multiply `a * b` across the configured workers.
    ///
    /// Preconditions are checked before any resource is acquired: operand
    /// inner dimensions first, then the worker count via the partition
    /// plan. The buffer is allocated only once both hold, and no result
    /// escapes unless every worker terminated cleanly.
    pub fn run(&self, a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
        let (left_rows, left_cols) = a.dim();
        let (right_rows, right_cols) = b.dim();
        if left_cols != right_rows {
            return Err(EngineError::DimensionMismatch {
                left_rows,
                left_cols,
                right_rows,
                right_cols,
            });
        }

        let plan = partition::plan(left_rows, self.workers)?;
        let mut buffer = ResultBuffer::allocate(left_rows, right_cols)?;

        execute(
            a.view(),
            b.view(),
            &plan,
            buffer.partition_mut(&plan),
            &worker::multiply_rows,
        )?;

        Ok(buffer.into_matrix())
    }
}

impl Default for Coordinator {
    /// Coordinator with one worker per available CPU.
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(workers)
    }
}

/// Spawn one named worker per partition, join them all, and map outcomes
/// to a single result.
///
/// Every spawned worker is joined before this returns, even when a spawn
/// attempt fails midway or a worker panics; the survivors run to
/// completion. A partial result never escapes because the caller drops the
/// buffer whenever this errors.
fn execute(
    a: ArrayView2<'_, f64>,
    b: ArrayView2<'_, f64>,
    plan: &[RowRange],
    bands: Vec<ArrayViewMut2<'_, f64>>,
    body: &WorkerFn,
) -> Result<()> {
    debug_assert_eq!(plan.len(), bands.len());

    let started = Instant::now();
    let outcomes: Vec<WorkerOutcome> = thread::scope(|scope| {
        let mut spawned = Vec::with_capacity(plan.len());
        for (index, (range, band)) in plan.iter().copied().zip(bands).enumerate() {
            let handle = thread::Builder::new()
                .name(format!("rowmul-worker-{index}"))
                .spawn_scoped(scope, move || body(a, b, range, band));
            spawned.push(handle);
        }

        // Joining here, inside the scope, keeps the barrier explicit: every
        // handle is consumed before the scope can close.
        spawned
            .into_iter()
            .map(|handle| match handle {
                Ok(handle) => match handle.join() {
                    Ok(()) => WorkerOutcome::Completed,
                    Err(payload) => WorkerOutcome::Panicked(panic_message(payload.as_ref())),
                },
                Err(source) => WorkerOutcome::SpawnFailed(source),
            })
            .collect()
    });
    let elapsed = started.elapsed();

    let mut failed_partitions = Vec::new();
    let mut spawn_failure: Option<(usize, std::io::Error)> = None;
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            WorkerOutcome::Completed => {}
            WorkerOutcome::Panicked(reason) => {
                error!(
                    "Worker {} (rows {}) terminated abnormally: {}",
                    index, plan[index], reason
                );
                failed_partitions.push(index);
            }
            WorkerOutcome::SpawnFailed(source) => {
                error!(
                    "Worker {} (rows {}) failed to spawn: {}",
                    index, plan[index], source
                );
                if spawn_failure.is_none() {
                    spawn_failure = Some((index, source));
                }
            }
        }
    }

    if let Some((partition, source)) = spawn_failure {
        return Err(EngineError::SpawnFailure { partition, source });
    }
    if !failed_partitions.is_empty() {
        return Err(EngineError::WorkerFailure {
            partitions: failed_partitions,
        });
    }

    info!(
        "Joined {} workers in {:.3} ms",
        plan.len(),
        elapsed.as_secs_f64() * 1e3
    );
    Ok(())
}

/// Best-effort extraction of a worker's panic message.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
