//! Matrix storage and reference arithmetic for `rowmul`.
//!
//! This crate holds everything the parallel engine treats as a
//! collaborator rather than core logic:
//!
//! - [`io`]: the plain-text matrix format, one row per line with
//!   space-separated real numbers.
//! - [`sequential`]: the single-threaded triple-loop multiplier the
//!   parallel path is validated against.
//!
//! Matrices are [`ndarray::Array2<f64>`] in standard (row-major) layout
//! throughout the workspace.

pub mod io;
pub mod sequential;

pub use io::{format_matrix, parse_matrix, read_matrix, write_matrix, ParseError};
