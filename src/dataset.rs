//! Reproducible benchmark inputs.
//!
//! These are the six input shapes the benchmark suite is run against. Unlike
//! `sort_test_tools::patterns` they produce `i64` values in `0..=size`, the format written to and
//! read from the dataset files.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Seed used when none is given, so that every run sees the same datasets.
pub const DEFAULT_SEED: u64 = 42;

// One random swap per this many elements.
const NEARLY_SORTED_SWAP_DIVISOR: usize = 100;

const FEW_UNIQUE_VALUES: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Uniform values in `0..=size`.
    Random,
    /// `0..size`.
    Sorted,
    /// `size` down to `1`.
    Reverse,
    /// `0..size` with `size / 100` random swaps.
    NearlySorted,
    /// Uniform values in `0..10`.
    FewUnique,
    /// One random value in `0..=size`, repeated.
    Identical,
}

impl Distribution {
    pub const ALL: [Distribution; 6] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
        Distribution::NearlySorted,
        Distribution::FewUnique,
        Distribution::Identical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reverse => "reverse",
            Distribution::NearlySorted => "nearly_sorted",
            Distribution::FewUnique => "few_unique",
            Distribution::Identical => "identical",
        }
    }

    /// Generates `size` values drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(self, size: usize, rng: &mut R) -> Vec<i64> {
        let upper = size as i64;

        match self {
            Distribution::Random => (0..size).map(|_| rng.gen_range(0..=upper)).collect(),
            Distribution::Sorted => (0..upper).collect(),
            Distribution::Reverse => (1..=upper).rev().collect(),
            Distribution::NearlySorted => {
                let mut values = (0..upper).collect::<Vec<_>>();
                for _ in 0..size / NEARLY_SORTED_SWAP_DIVISOR {
                    let i = rng.gen_range(0..size);
                    let j = rng.gen_range(0..size);
                    values.swap(i, j);
                }
                values
            }
            Distribution::FewUnique => (0..size)
                .map(|_| rng.gen_range(0..FEW_UNIQUE_VALUES))
                .collect(),
            Distribution::Identical => vec![rng.gen_range(0..=upper); size],
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown distribution `{0}`, expected one of: random, sorted, reverse, nearly_sorted, \
     few_unique, identical"
)]
pub struct ParseDistributionError(String);

impl FromStr for Distribution {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");

        Distribution::ALL
            .into_iter()
            .find(|distribution| distribution.name() == name)
            .ok_or_else(|| ParseDistributionError(s.to_owned()))
    }
}

/// Returns the generator every dataset for `seed` is drawn from.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Yields `(size, distribution, values)` for every size and every distribution in
/// [`Distribution::ALL`] order.
///
/// All datasets are drawn one after the other from a single generator seeded with `seed`, so a
/// dataset depends on everything drawn before it. Skip unwanted entries after they were yielded,
/// never before, or the remaining datasets change.
pub fn suite(
    sizes: &[usize],
    seed: u64,
) -> impl Iterator<Item = (usize, Distribution, Vec<i64>)> + '_ {
    let mut rng = seeded_rng(seed);

    sizes
        .iter()
        .flat_map(|&size| Distribution::ALL.into_iter().map(move |d| (size, d)))
        .map(move |(size, distribution)| {
            let values = distribution.generate(size, &mut rng);
            (size, distribution, values)
        })
}
