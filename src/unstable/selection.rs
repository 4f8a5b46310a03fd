use std::cmp::Ordering;

sort_impl!("selection_unstable");

/// Sorts the slice with selection sort.
///
/// This sort is unstable, in-place and *O*(*n*^2) regardless of the input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with selection sort using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let min = i + min_index(&v[i..], is_less);
        v.swap(i, min);
    }
}

/// Returns the index of the first minimum of the non-empty slice `v`.
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min = 0;
    for j in 1..v.len() {
        if is_less(&v[j], &v[min]) {
            min = j;
        }
    }
    min
}
