sort_impl!("bubble_sort_stable", stable);

/// Sorts the slice with bubble sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Performs up to `len - 1` passes over the slice. Every pass walks the adjacent pairs from the
/// front up to the unsorted boundary and swaps a pair if the left element is greater than the
/// right one, which moves the largest remaining element into its final position. A pass without
/// any swap means the slice is sorted and ends the sort early.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// classic_sorts::stable::bubble_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    bubble_sort(arr, &mut |a, b| a.lt(b));
}

// --- IMPL ---

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        let mut was_swap = false;

        // Everything at or past `len - 1 - pass` already holds its final value.
        for j in 0..(len - 1 - pass) {
            // Only a strictly greater left element moves, so equal elements keep their order.
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                was_swap = true;
            }
        }

        if !was_swap {
            break;
        }
    }
}
