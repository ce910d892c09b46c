pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Common interface every sort implementation under test provides.
pub trait Sort {
    /// `true` if the implementation never reorders elements that compare equal.
    const IS_STABLE: bool;

    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy;
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_type_tests {
    ($sort_impl:ty, $type:ident, $($test_fn_name:ident),+) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<$test_fn_name _ $type>]() {
                    $crate::tests::$test_fn_name::<$type, $sort_impl>();
                }
            }
        )+
    };
}

/// Stamps out the full test suite for `$sort_impl`.
///
/// Invoke it once per module, the generated test functions have fixed names.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_seed);
        $crate::instantiate_sort_test_inner!($sort_impl, int_edge);
        $crate::instantiate_sort_test_inner!($sort_impl, idempotent);
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_with_patterns);

        $crate::instantiate_sort_type_tests!(
            $sort_impl,
            i32,
            random,
            random_d2,
            random_d20,
            random_z1,
            all_equal,
            ascending,
            descending,
            saw_ascending,
            saw_descending,
            pipe_organ
        );

        $crate::instantiate_sort_type_tests!(
            $sort_impl,
            i64,
            random,
            random_d20,
            descending,
            pipe_organ
        );

        $crate::instantiate_sort_type_tests!(
            $sort_impl,
            u64,
            random,
            random_d20,
            ascending,
            saw_descending
        );
    };
}
