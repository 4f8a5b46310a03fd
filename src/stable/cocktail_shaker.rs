use std::cmp::Ordering;

sort_impl!("cocktail_shaker_stable");

/// Sorts the slice with cocktail shaker sort.
///
/// This sort is stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    cocktail_shaker_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with cocktail shaker sort using a comparator function.
///
/// The comparator must define a total order, otherwise the resulting order is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    cocktail_shaker_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Alternates a left-to-right and a right-to-left bubble pass over the window `v[lo..=hi]`.
///
/// The forward pass carries the largest element of the window to `hi` and the backward pass
/// carries the smallest to `lo`, so both ends shrink by one per round and settled elements are
/// never compared again. Only strictly out of order neighbours are swapped, which keeps equal
/// elements in their original order.
fn cocktail_shaker_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut lo = 0;
    let mut hi = len - 1;

    while lo < hi {
        let mut swapped = false;

        for i in lo..hi {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
        hi -= 1;

        for j in (lo + 1..=hi).rev() {
            if is_less(&v[j], &v[j - 1]) {
                v.swap(j, j - 1);
                swapped = true;
            }
        }
        lo += 1;

        if !swapped {
            break;
        }
    }
}
