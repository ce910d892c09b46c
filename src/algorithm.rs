use std::fmt;
use std::str::FromStr;

use sort_test_tools::Sort;
use thiserror::Error;

use crate::stable::{bubble_sort, insertion_sort, merge_sort};
use crate::unstable::{quick_sort, selection_sort};

/// Runtime handle for one of the sorts in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// `true` if the algorithm never reorders elements that compare equal.
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble => bubble_sort::SortImpl::IS_STABLE,
            Algorithm::Insertion => insertion_sort::SortImpl::IS_STABLE,
            Algorithm::Selection => selection_sort::SortImpl::IS_STABLE,
            Algorithm::Merge => merge_sort::SortImpl::IS_STABLE,
            Algorithm::Quick => quick_sort::SortImpl::IS_STABLE,
        }
    }

    /// Sorts `arr` in ascending order, in place.
    pub fn sort<T>(self, arr: &mut [T])
    where
        T: Ord + Copy,
    {
        match self {
            Algorithm::Bubble => bubble_sort::sort(arr),
            Algorithm::Insertion => insertion_sort::sort(arr),
            Algorithm::Selection => selection_sort::sort(arr),
            Algorithm::Merge => merge_sort::sort(arr),
            Algorithm::Quick => quick_sort::sort(arr),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort algorithm `{0}`, expected one of: bubble, insertion, selection, merge, quick")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the plain name (`merge`) as well as the `_sort`/`-sort` spelling (`merge_sort`),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower
            .strip_suffix("_sort")
            .or_else(|| lower.strip_suffix("-sort"))
            .unwrap_or(&lower);

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}
