//! Five classic comparison sorts plus the plumbing to feed them integers.
//!
//! Every sort lives in its own module and exposes `sort(&mut [T])` and a `SortImpl` type for the
//! shared test suite in `sort_test_tools`. Stable sorts live under [`stable`], the rest under
//! [`unstable`].

macro_rules! sort_impl {
    (@impl $name:expr, $is_stable:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            const IS_STABLE: bool = $is_stable;

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Copy,
            {
                sort(arr);
            }
        }
    };
    ($name:expr, stable) => {
        sort_impl!(@impl $name, true);
    };
    ($name:expr, unstable) => {
        sort_impl!(@impl $name, false);
    };
}

pub mod algorithm;
pub mod dataset;
pub mod io;
pub mod stable;
pub mod unstable;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use dataset::{Distribution, ParseDistributionError};
