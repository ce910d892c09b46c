sort_impl!("merge_sort_stable", stable);

/// Sorts the slice with a top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// The slice is recursively split at its midpoint, the lower half taking the extra element of an
/// odd length, until the parts hold at most one element. Adjacent sorted halves are then merged
/// bottom-up through a scratch buffer. The buffer is allocated once per call with the length of
/// the slice and shared by every merge, so auxiliary memory is *O*(*n*) and the recursion depth is
/// *O*(log(*n*)).
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// classic_sorts::stable::merge_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord + Copy,
{
    merge_sort(arr, &mut |a, b| a.lt(b));
}

// --- IMPL ---

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Every merge only looks at `buf[..range_len]`, the initial contents are never read.
    let mut buf = v.to_vec();
    merge_sort_rec(v, &mut buf, is_less);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len - len / 2;

    let (left, right) = v.split_at_mut(mid);
    merge_sort_rec(left, buf, is_less);
    merge_sort_rec(right, buf, is_less);

    merge(v, mid, &mut buf[..len], is_less);
}

/// Merges the non-descending runs `v[..mid]` and `v[mid..]` into `v`.
///
/// `buf` must have the same length as `v`.
fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid <= len && buf.len() == len);

    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    while left < mid && right < len {
        // Take from the right run only if its head is strictly less. Ties go left, which is what
        // makes the merge stable.
        if is_less(&v[right], &v[left]) {
            buf[out] = v[right];
            right += 1;
        } else {
            buf[out] = v[left];
            left += 1;
        }
        out += 1;
    }

    // At most one of the runs still has elements left.
    let left_rest = mid - left;
    buf[out..out + left_rest].copy_from_slice(&v[left..mid]);
    out += left_rest;
    buf[out..].copy_from_slice(&v[right..]);

    v.copy_from_slice(buf);
}
