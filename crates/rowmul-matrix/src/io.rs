//! Plain-text matrix files.
//!
//! The format is one matrix row per line, values separated by whitespace:
//! ```text
//! 1 2 3
//! 4 5 6
//! ```
//! Blank lines are skipped. Every row must have the same number of values;
//! a ragged row or an unparseable token is a fatal error carrying the
//! 1-based line number. A file with no data lines is the 0x0 matrix.

use std::fs;
use std::path::Path;

use ndarray::Array2;
use thiserror::Error;

/// Errors reading, parsing, or writing matrix files.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    FormatError { line: usize, message: String },
}

/// Parse a matrix from plain text.
pub fn parse_matrix(content: &str) -> Result<Array2<f64>, ParseError> {
    let mut values: Vec<f64> = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0usize;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut count = 0usize;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| ParseError::FormatError {
                line: idx + 1,
                message: format!("Invalid number '{}'", token),
            })?;
            values.push(value);
            count += 1;
        }

        match cols {
            None => cols = Some(count),
            Some(expected) if expected != count => {
                return Err(ParseError::FormatError {
                    line: idx + 1,
                    message: format!("Expected {} columns, found {}", expected, count),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let cols = cols.unwrap_or(0);
    Array2::from_shape_vec((rows, cols), values).map_err(|e| ParseError::FormatError {
        line: rows,
        message: e.to_string(),
    })
}

/// Format a matrix in the same row-per-line layout accepted by
/// [`parse_matrix`].
pub fn format_matrix(matrix: &Array2<f64>) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Read a matrix from a file.
pub fn read_matrix(path: &Path) -> Result<Array2<f64>, ParseError> {
    let content = fs::read_to_string(path)?;
    let matrix = parse_matrix(&content)?;
    log::debug!(
        "Read {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(matrix)
}

/// Write a matrix to a file, creating parent directories if needed.
pub fn write_matrix(path: &Path, matrix: &Array2<f64>) -> Result<(), ParseError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format_matrix(matrix))?;
    log::debug!(
        "Wrote {}x{} matrix to {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(())
}
