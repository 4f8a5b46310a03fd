use std::cmp::Ordering;

sort_impl!("insertion_stable");

/// Sorts the slice with insertion sort.
///
/// This sort is stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with insertion sort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` left until its predecessor is no longer strictly greater.
/// `v[..v.len() - 1]` must already be sorted.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut j = v.len() - 1;

    // Stopping on equal elements keeps the sort stable.
    while j > 0 && is_less(&v[j], &v[j - 1]) {
        v.swap(j, j - 1);
        j -= 1;
    }
}
