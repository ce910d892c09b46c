use std::io::{self, Write};
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use classic_sorts::dataset;
use classic_sorts::{Algorithm, Distribution};

use crate::BenchArgs;

/// Timing summary for one algorithm on one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchRecord {
    pub algorithm: String,
    pub distribution: String,
    pub size: usize,
    pub runs: u32,
    pub min_ns: u64,
    pub mean_ns: u64,
    pub max_ns: u64,
}

pub fn run(args: BenchArgs) -> Result<()> {
    pin_thread_to_core();

    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };
    let distributions = if args.distributions.is_empty() {
        Distribution::ALL.to_vec()
    } else {
        args.distributions.clone()
    };

    let mut records = Vec::new();
    for (size, distribution, input) in inputs(&args.sizes, &distributions, args.seed) {
        // Every algorithm sees the exact same input.
        for &algorithm in &algorithms {
            let record = measure(algorithm, distribution, &input, args.runs)?;
            info!(
                %algorithm,
                %distribution,
                size,
                mean_ms = record.mean_ns as f64 / 1e6,
                "measured"
            );
            records.push(record);
        }
    }

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &records).context("failed to write results")?;
    writeln!(stdout).context("failed to write results")?;

    Ok(())
}

/// The datasets `generate` writes for `sizes` and `seed`, limited to `distributions`.
///
/// The full suite is drawn and filtered afterwards, so a dataset does not change with the set of
/// selected distributions.
pub fn inputs<'a>(
    sizes: &'a [usize],
    distributions: &'a [Distribution],
    seed: u64,
) -> impl Iterator<Item = (usize, Distribution, Vec<i64>)> + 'a {
    dataset::suite(sizes, seed)
        .filter(move |(_, distribution, _)| distributions.contains(distribution))
}

/// Sorts a fresh copy of `input` `runs` times and checks every result.
pub fn measure(
    algorithm: Algorithm,
    distribution: Distribution,
    input: &[i64],
    runs: u32,
) -> Result<BenchRecord> {
    ensure!(runs > 0, "at least one run is required");

    let mut timings = Vec::with_capacity(runs as usize);
    for _ in 0..runs {
        let mut v = input.to_vec();

        let start = Instant::now();
        algorithm.sort(&mut v);
        let elapsed = start.elapsed();

        ensure!(
            v.windows(2).all(|w| w[0] <= w[1]),
            "{algorithm} produced unsorted output for {distribution} (len {})",
            input.len()
        );
        timings.push(elapsed.as_nanos() as u64);
    }

    let total: u64 = timings.iter().sum();

    Ok(BenchRecord {
        algorithm: algorithm.to_string(),
        distribution: distribution.to_string(),
        size: input.len(),
        runs,
        min_ns: timings.iter().copied().min().unwrap_or(0),
        mean_ns: total / u64::from(runs),
        max_ns: timings.iter().copied().max().unwrap_or(0),
    })
}

fn pin_thread_to_core() {
    // Pin to the last core, that one is least likely to be busy with OS work.
    match core_affinity::get_core_ids().and_then(|ids| ids.last().copied()) {
        Some(core_id) => {
            if !core_affinity::set_for_current(core_id) {
                warn!(?core_id, "failed to pin benchmark thread");
            }
        }
        None => warn!("unable to query core ids, benchmark thread is not pinned"),
    }
}
