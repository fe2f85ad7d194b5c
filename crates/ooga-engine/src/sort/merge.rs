use core::cmp::Ordering;

/// Stable bottom-up merge sort using a caller-provided scratch slice.
///
/// Intended for records without an integer key, or with orderings that need a
/// comparator. The draw pipeline itself orders quads with the radix sort.
///
/// # Panics
/// If `scratch.len() != items.len()`.
pub fn merge_sort_by<T, F>(items: &mut [T], scratch: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    assert_eq!(scratch.len(), items.len(), "merge_sort: scratch must match input length");

    let n = items.len();
    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);

            let (mut l, mut r, mut k) = (start, mid, start);
            while l < mid && r < end {
                // `<=` keeps the left run first on ties.
                if compare(&items[l], &items[r]) != Ordering::Greater {
                    scratch[k] = items[l];
                    l += 1;
                } else {
                    scratch[k] = items[r];
                    r += 1;
                }
                k += 1;
            }
            scratch[k..k + (mid - l)].copy_from_slice(&items[l..mid]);
            k += mid - l;
            scratch[k..k + (end - r)].copy_from_slice(&items[r..end]);

            items[start..end].copy_from_slice(&scratch[start..end]);
            start += 2 * width;
        }
        width *= 2;
    }
}
