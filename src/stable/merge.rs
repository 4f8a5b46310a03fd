use std::cmp::Ordering;
use std::mem::{self, size_of};
use std::ptr;

sort_impl!("merge_stable");

/// Sorts the slice with top-down merge sort.
///
/// This sort is stable and *O*(*n* \* log(*n*)) in every case. It allocates one scratch buffer
/// the size of `v` per call, the sorted result always lands back in `v`.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with top-down merge sort using a comparator function.
///
/// The comparator must define a total order. If it does not, or if it panics, the resulting
/// order is unspecified but `v` still holds every original element exactly once.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // The buffer keeps length 0, it only ever holds shallow copies of elements owned by `v`, so
    // nothing is dropped twice if `is_less` panics.
    let mut buf = Vec::<T>::with_capacity(len);
    tracing::trace!(len, "merge sort scratch allocated");

    // SAFETY: `buf` has room for `len` elements, which is the largest range ever merged.
    unsafe {
        merge_sort_rec(v, buf.as_mut_ptr(), &mut is_less);
    }
}

/// Sorts `v[..=mid]` and `v[mid + 1..]` recursively, then merges them.
///
/// # Safety
///
/// `buf` must be valid for writes of `v.len()` elements and must not alias `v`.
unsafe fn merge_sort_rec<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Same split as `left + (right - left) / 2` on inclusive bounds, the left run gets the
    // extra element on odd lengths.
    let mid = (len - 1) / 2;

    merge_sort_rec(&mut v[..=mid], buf, is_less);
    merge_sort_rec(&mut v[mid + 1..], buf, is_less);
    merge(v, mid + 1, buf, is_less);
}

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` into `v`.
///
/// The whole range is copied into `buf` first, then the smaller head of the two copied runs is
/// written back to `v`. On ties the left run wins, which keeps the merge stable. Once either
/// run is exhausted only the rest of the left run is copied back: if the right run has
/// leftovers they already sit at their final positions in `v`, because every write so far went
/// to an index below the next unread right element.
///
/// # Safety
///
/// `buf` must be valid for writes of `v.len()` elements and must not alias `v`. `mid` must be
/// in `1..v.len()`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v_base = v.as_mut_ptr();
    ptr::copy_nonoverlapping(v_base, buf, len);

    // If `is_less` panics, `v` may hold duplicated bit copies of some elements and miss others.
    // Copying the untouched snapshot back restores the original permutation.
    let guard = CopyOnDrop {
        src: buf,
        dest: v_base,
        len,
    };

    let buf_mid = buf.add(mid) as *const T;
    let buf_end = buf.add(len) as *const T;

    let mut left = buf as *const T;
    let mut right = buf_mid;
    let mut out = v_base;

    while left < buf_mid && right < buf_end {
        let take_right = is_less(&*right, &*left);
        let to_copy = if take_right { right } else { left };
        ptr::copy_nonoverlapping(to_copy, out, 1);
        out = out.add(1);
        right = right.add(take_right as usize);
        left = left.add(!take_right as usize);
    }

    let rem_len = buf_mid.offset_from(left) as usize;
    ptr::copy_nonoverlapping(left, out, rem_len);

    mem::forget(guard);

    // When dropped, copies `len` elements from `src` into `dest`.
    struct CopyOnDrop<T> {
        src: *const T,
        dest: *mut T,
        len: usize,
    }

    impl<T> Drop for CopyOnDrop<T> {
        fn drop(&mut self) {
            // SAFETY: `src` holds `len` initialized elements and `dest` is valid for `len` writes.
            unsafe {
                ptr::copy_nonoverlapping(self.src, self.dest, self.len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn ties_prefer_left_run() {
        let mut v = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn right_run_tail_stays_in_place() {
        // Splits into [1, 5, 2] and [3, 4, 6]. The left run is exhausted after 5 and the 6 is
        // never copied back.
        let mut v = [1, 5, 2, 3, 4, 6];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);

        let mut v = [9, 8, 7, 1, 2, 3, 4, 5, 6];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn panicking_comparator_keeps_every_element() {
        let mut v: Vec<String> = (0..50).rev().map(|i| i.to_string()).collect();
        let mut calls = 0;

        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            sort_by(&mut v, |a, b| {
                calls += 1;
                if calls == 40 {
                    panic!("comparator gave up");
                }
                a.cmp(b)
            });
        }));
        assert!(res.is_err());

        let mut seen: Vec<i32> = v.iter().map(|s| s.parse().unwrap()).collect();
        seen.sort();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn zero_sized_types() {
        let mut v = [(); 16];
        sort(&mut v);
        assert_eq!(v.len(), 16);
    }
}
