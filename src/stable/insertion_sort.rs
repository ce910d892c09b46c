sort_impl!("insertion_sort_stable", stable);

/// Sorts the slice with insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place
/// (i.e., does not allocate), *O*(*n*^2) worst-case and *O*(*n*) on already sorted input.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// classic_sorts::stable::insertion_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord + Copy,
{
    insertion_sort_shift_left(arr, 1, &mut |a, b| a.lt(b));
}

// --- IMPL ---

/// Sorts `v` using insertion sort, assuming `v[..offset]` is already sorted.
///
/// Every element from `offset` on is taken out as `key`, all preceding elements greater than
/// `key` are shifted one slot to the right and `key` is written into the remaining hole.
fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in offset.min(len)..len {
        let key = v[i];
        let mut hole = i;

        // Strict comparison, an equal element is never shifted past `key`.
        while hole > 0 && is_less(&key, &v[hole - 1]) {
            v[hole] = v[hole - 1];
            hole -= 1;
        }

        v[hole] = key;
    }
}
