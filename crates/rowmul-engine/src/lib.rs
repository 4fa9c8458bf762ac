//! # Rowmul Engine
//!
//! Row-partitioned parallel matrix multiplication. The output's rows are
//! split into contiguous ranges, one per worker; each worker receives an
//! exclusive mutable band of one shared result buffer and computes its
//! dot-product cells without any locking, because the bands cannot
//! overlap. A full barrier join orders the coordinator's read of the
//! buffer after every worker's writes.
//!
//! ## Modules
//!
//! - [`partition`]: splits the row space into per-worker ranges.
//! - [`buffer`]: owns the shared result allocation and hands out the
//!   exclusive bands.
//! - [`worker`]: the per-band multiplication body.
//! - [`coordinator`]: validation, spawning, the join barrier, and outcome
//!   reporting.
//! - [`error`]: the engine error taxonomy.
//!
//! ## Entry point
//!
//! ```
//! use ndarray::array;
//! use rowmul_engine::Coordinator;
//!
//! let a = array![[1.0, 2.0], [3.0, 4.0]];
//! let b = array![[5.0, 6.0], [7.0, 8.0]];
//! let c = Coordinator::new(2).run(&a, &b).unwrap();
//! assert_eq!(c, array![[19.0, 22.0], [43.0, 50.0]]);
//! ```

pub mod buffer;
pub mod coordinator;
pub mod error;
pub mod partition;
pub mod worker;

pub use buffer::ResultBuffer;
pub use coordinator::Coordinator;
pub use error::{EngineError, Result};
pub use partition::{plan, RowRange};
