sort_impl!("selection_sort_unstable", unstable);

/// Sorts the slice with selection sort, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n*^2) regardless of the input.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// classic_sorts::unstable::selection_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    selection_sort(arr, &mut |a, b| a.lt(b));
}

// --- IMPL ---

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        // First occurrence of the minimum of the unsorted suffix.
        let mut min_index = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_index]) {
                min_index = j;
            }
        }

        // Swapping `v[i]` away can carry it past an equal element, hence unstable.
        if min_index != i {
            v.swap(i, min_index);
        }
    }
}
