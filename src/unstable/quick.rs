use std::cmp::Ordering;

use rand::Rng;

sort_impl!("quick_unstable");

/// Sorts the slice with randomized quicksort, drawing pivots from the thread local RNG.
///
/// This sort is unstable, in-place, *O*(*n*^2) worst-case and *O*(*n* \* log(*n*)) expected.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut rand::thread_rng(), &mut |a, b| a.lt(b));
}

/// Sorts the slice with randomized quicksort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut rand::thread_rng(), &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Sorts the slice with quicksort, drawing every pivot from `rng`.
///
/// The result is sorted for any stream `rng` produces, even a constant one. Only the number of
/// comparisons and the recursion depth depend on pivot quality.
pub fn sort_by_with_rng<T, F, R>(v: &mut [T], mut compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    quicksort(v, rng, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` recursively.
///
/// The pivot candidate is drawn uniformly from `0..len - 1`, the last index is never a
/// candidate because `partition` parks the pivot there.
fn quicksort<T, F, R>(v: &mut [T], rng: &mut R, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let pivot_pos = rng.gen_range(0..len - 1);
    let mid = partition(v, pivot_pos, is_less);

    // Split the slice into `left`, `pivot`, and `right`.
    let (left, right) = v.split_at_mut(mid);
    let right = &mut right[1..];

    quicksort(left, rng, is_less);
    quicksort(right, rng, is_less);
}

/// Re-arranges `v` such that every element comparing true for `is_less(elem, pivot)` where
/// `pivot == v[pivot_pos]` comes first, followed by the pivot, followed by the rest.
///
/// Returns the final index of the pivot.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;

    // Place the pivot at the end of the slice.
    v.swap(pivot_pos, last);
    let (v_without_pivot, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    let mut boundary = 0;
    for i in 0..v_without_pivot.len() {
        if is_less(&v_without_pivot[i], pivot) {
            v_without_pivot.swap(i, boundary);
            boundary += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(boundary, last);

    boundary
}
