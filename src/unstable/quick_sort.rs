sort_impl!("quick_sort_unstable", unstable);

/// Sorts the slice with quicksort, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// The pivot is always the middle element of the current range. It is parked at the end of the
/// range, a single left-to-right Lomuto scan moves every element strictly less than the pivot to
/// the front, and the pivot is swapped back between the two partitions. There is no fallback for
/// bad pivots, inputs with many equal elements degrade to quadratic time.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// classic_sorts::unstable::quick_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    quicksort(arr, &mut |a, b| a.lt(b));
}

// --- IMPL ---

/// Sorts `v` recursively.
///
/// Only the shorter partition is sorted with a recursive call, the longer one is handled by the
/// next loop iteration. That limits the recursion depth to `log2(len)` even for degenerate
/// partitions.
fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let num_lt = partition(v, len / 2, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(num_lt);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Takes the input slice `v` and re-arranges elements such that all elements that compare true
/// for `is_less(elem, pivot)` where `pivot == v[pivot_pos]` are on the left side of `v`,
/// followed by the pivot, followed by the other elements, notionally considered greater or
/// equal to `pivot`.
///
/// Returns the number of elements that are compared true for `is_less(elem, pivot)`, which is
/// also the final position of the pivot.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(pivot_pos < len);

    // Place the pivot at the end of slice, the scan below never touches it.
    let last = len - 1;
    v.swap(pivot_pos, last);

    let mut num_lt = 0;
    for i in 0..last {
        if is_less(&v[i], &v[last]) {
            v.swap(i, num_lt);
            num_lt += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(num_lt, last);

    num_lt
}
