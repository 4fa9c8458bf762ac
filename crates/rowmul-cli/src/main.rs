//! rowmul command-line interface.
//!
//! Multiply plain-text matrix files:
//! ```sh
//! rowmul multiply a.txt b.txt -o c.txt --workers 4
//! rowmul multiply a.txt b.txt --mode sequential
//! rowmul check a.txt b.txt
//! ```
//!
//! Logging is controlled through `RUST_LOG` (for example
//! `RUST_LOG=rowmul_engine=debug`).

mod runner;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowmul")]
#[command(about = "Row-partitioned parallel matrix multiplication")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply two matrix files and write the product.
    Multiply {
        /// Path to the left operand.
        a: PathBuf,
        /// Path to the right operand.
        b: PathBuf,
        /// Destination for the product.
        #[arg(short, long, default_value = "product.txt")]
        output: PathBuf,
        /// Worker count (defaults to the available parallelism).
        #[arg(short, long)]
        workers: Option<usize>,
        /// Execution mode.
        #[arg(long, value_enum, default_value_t = Mode::Parallel)]
        mode: Mode,
    },
    /// Check whether two matrix files can be multiplied.
    Check {
        /// Path to the left operand.
        a: PathBuf,
        /// Path to the right operand.
        b: PathBuf,
    },
}

/// How the product is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Row-partitioned worker threads.
    Parallel,
    /// The single-threaded reference triple loop.
    Sequential,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Multiply {
            a,
            b,
            output,
            workers,
            mode,
        } => runner::multiply(&a, &b, &output, workers, mode),
        Commands::Check { a, b } => runner::check(&a, &b),
    }
}
