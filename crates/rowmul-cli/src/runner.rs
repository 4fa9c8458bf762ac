//! Command execution: load operands, run the requested mode, persist.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::info;
use ndarray::Array2;

use rowmul_engine::Coordinator;
use rowmul_matrix::{io, sequential};

use crate::Mode;

/// Multiply two matrix files and write the product.
pub fn multiply(
    a_path: &Path,
    b_path: &Path,
    output: &Path,
    workers: Option<usize>,
    mode: Mode,
) -> Result<()> {
    let (a, b) = load_operands(a_path, b_path)?;

    let started = Instant::now();
    let (product, label) = match mode {
        Mode::Parallel => {
            let coordinator = workers.map(Coordinator::new).unwrap_or_default();
            let label = format!("parallel, {} workers", coordinator.workers());
            (coordinator.run(&a, &b)?, label)
        }
        Mode::Sequential => {
            // sequential::multiply panics on mismatched operands; validate first.
            ensure_compatible(&a, &b)?;
            (sequential::multiply(&a, &b), "sequential".to_string())
        }
    };
    let elapsed = started.elapsed();

    io::write_matrix(output, &product)
        .with_context(|| format!("Failed to write product to {}", output.display()))?;

    println!(
        "{}x{} product written to {}",
        product.nrows(),
        product.ncols(),
        output.display()
    );
    println!("Multiplication took {:.6} s ({})", elapsed.as_secs_f64(), label);
    Ok(())
}

/// Report whether two matrix files can be multiplied, without computing.
pub fn check(a_path: &Path, b_path: &Path) -> Result<()> {
    let (a, b) = load_operands(a_path, b_path)?;
    ensure_compatible(&a, &b)?;

    println!(
        "{}x{} * {}x{} -> {}x{} product",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols(),
        a.nrows(),
        b.ncols()
    );
    Ok(())
}

fn ensure_compatible(a: &Array2<f64>, b: &Array2<f64>) -> Result<()> {
    if a.ncols() != b.nrows() {
        bail!(
            "Cannot multiply {}x{} by {}x{}: inner dimensions disagree",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        );
    }
    Ok(())
}

fn load_operands(a_path: &Path, b_path: &Path) -> Result<(Array2<f64>, Array2<f64>)> {
    let a = io::read_matrix(a_path)
        .with_context(|| format!("Failed to load left operand {}", a_path.display()))?;
    let b = io::read_matrix(b_path)
        .with_context(|| format!("Failed to load right operand {}", b_path.display()))?;
    info!(
        "Loaded operands: {}x{} and {}x{}",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols()
    );
    Ok((a, b))
}
