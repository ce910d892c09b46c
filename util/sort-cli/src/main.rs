use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use classic_sorts::dataset::DEFAULT_SEED;
use classic_sorts::io::{read_integers, write_lines};
use classic_sorts::{Algorithm, Distribution};

mod bench;
mod generate;
#[cfg(test)]
mod test_util;

/// classic-sort: sort integers with one of five classic algorithms.
///
/// Reads whitespace separated integers, tokens that are not integers are skipped. Progress is
/// logged to stderr, control it with RUST_LOG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort integers and print them one per line.
    Sort(SortArgs),
    /// Sort a file and compare the result with an expected file.
    Check(CheckArgs),
    /// Write the benchmark datasets to disk.
    Generate(GenerateArgs),
    /// Time every algorithm on every dataset and print the results as JSON.
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct SortArgs {
    /// bubble, insertion, selection, merge or quick
    #[arg(long, short)]
    algorithm: Algorithm,

    /// Input file, stdin if omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Output file, stdout if omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[arg(long, short)]
    algorithm: Algorithm,

    #[arg(long, short)]
    input: PathBuf,

    /// File holding the correctly sorted input
    #[arg(long, short)]
    expected: PathBuf,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Datasets are written to <OUT_DIR>/<SIZE>/<DISTRIBUTION>.txt
    #[arg(long)]
    pub out_dir: PathBuf,

    #[arg(long, value_delimiter = ',', default_values_t = [10_000, 100_000, 500_000, 1_000_000])]
    pub sizes: Vec<usize>,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    #[arg(long, value_delimiter = ',', default_values_t = [1_000, 10_000])]
    pub sizes: Vec<usize>,

    /// Comma separated, all algorithms if omitted
    #[arg(long, value_delimiter = ',')]
    pub algorithms: Vec<Algorithm>,

    /// Comma separated, all distributions if omitted
    #[arg(long, value_delimiter = ',')]
    pub distributions: Vec<Distribution>,

    /// Timed runs per algorithm and dataset
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Sort(args) => run_sort(args),
        Command::Check(args) => run_check(args),
        Command::Generate(args) => generate::run(args),
        Command::Bench(args) => bench::run(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Stdout carries the sorted data, so everything else goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_sort(args: SortArgs) -> Result<()> {
    let mut values = read_values(args.input.as_deref())?;

    sort_logged(args.algorithm, &mut values);

    match args.output.as_deref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_lines(file, &values)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote sorted output");
        }
        None => write_lines(io::stdout().lock(), &values).context("failed to write stdout")?,
    }

    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let mut values = read_values(Some(args.input.as_path()))?;
    let expected = read_values(Some(args.expected.as_path()))?;

    sort_logged(args.algorithm, &mut values);

    if let Some(mismatch) = first_mismatch(&values, &expected) {
        bail!(
            "{} output differs from {}: {mismatch}",
            args.algorithm,
            args.expected.display()
        );
    }

    info!(algorithm = %args.algorithm, count = values.len(), "output matches");
    Ok(())
}

fn sort_logged(algorithm: Algorithm, values: &mut [i64]) {
    info!(%algorithm, count = values.len(), "sorting");

    let start = Instant::now();
    algorithm.sort(values);
    debug!(%algorithm, elapsed_us = start.elapsed().as_micros() as u64, "sorted");
}

fn read_values(path: Option<&Path>) -> Result<Vec<i64>> {
    let values = match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            read_integers(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => read_integers(io::stdin().lock()).context("failed to read stdin")?,
    };

    debug!(count = values.len(), "read integers");
    Ok(values)
}

/// Describes the first difference between `got` and `expected`, if any.
fn first_mismatch(got: &[i64], expected: &[i64]) -> Option<String> {
    if let Some(i) = got.iter().zip(expected).position(|(a, b)| a != b) {
        return Some(format!(
            "line {}: got {}, expected {}",
            i + 1,
            got[i],
            expected[i]
        ));
    }

    if got.len() != expected.len() {
        return Some(format!(
            "got {} values, expected {}",
            got.len(),
            expected.len()
        ));
    }

    None
}
