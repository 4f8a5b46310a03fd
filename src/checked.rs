//! Entry points that validate their arguments before sorting.
//!
//! A missing argument is expressed as `None`. Every check happens before the first element is
//! read, so a rejected call leaves the slice untouched.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::SortError;
use crate::{radix, stable, unstable};

const ABSENT_ARRAY_OR_COMPARATOR: &str = "array and/or comparator is absent";
const ABSENT_QUICK_SORT_ARGUMENT: &str = "array, comparator and/or random source is absent";
const ABSENT_ARRAY: &str = "array is absent";

fn reject(op: &'static str, reason: &'static str) -> SortError {
    tracing::debug!(op, reason, "rejected sort call");
    SortError::InvalidArgument(reason)
}

fn require<'a, T, F>(
    op: &'static str,
    arr: Option<&'a mut [T]>,
    compare: Option<F>,
) -> Result<(&'a mut [T], F), SortError> {
    match (arr, compare) {
        (Some(arr), Some(compare)) => Ok((arr, compare)),
        _ => Err(reject(op, ABSENT_ARRAY_OR_COMPARATOR)),
    }
}

/// Stable, in-place cocktail shaker sort. See [`stable::cocktail_shaker`].
pub fn cocktail_shaker_sort<T, F>(
    arr: Option<&mut [T]>,
    compare: Option<F>,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (arr, compare) = require("cocktail_shaker_sort", arr, compare)?;
    stable::cocktail_shaker::sort_by(arr, compare);
    Ok(())
}

/// Stable, in-place insertion sort. See [`stable::insertion`].
pub fn insertion_sort<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (arr, compare) = require("insertion_sort", arr, compare)?;
    stable::insertion::sort_by(arr, compare);
    Ok(())
}

/// Unstable, in-place selection sort. See [`unstable::selection`].
pub fn selection_sort<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (arr, compare) = require("selection_sort", arr, compare)?;
    unstable::selection::sort_by(arr, compare);
    Ok(())
}

/// Unstable, in-place quicksort drawing its pivots from `rng`. See [`unstable::quick`].
pub fn quick_sort<T, F, R>(
    arr: Option<&mut [T]>,
    compare: Option<F>,
    rng: Option<&mut R>,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    match (arr, compare, rng) {
        (Some(arr), Some(compare), Some(rng)) => {
            unstable::quick::sort_by_with_rng(arr, compare, rng);
            Ok(())
        }
        _ => Err(reject("quick_sort", ABSENT_QUICK_SORT_ARGUMENT)),
    }
}

/// Stable merge sort, the result lands back in `arr`. See [`stable::merge`].
pub fn merge_sort<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (arr, compare) = require("merge_sort", arr, compare)?;
    stable::merge::sort_by(arr, compare);
    Ok(())
}

/// Stable LSD radix sort on non-negative integers, returns the sorted `arr`. See [`radix`].
pub fn radix_sort(arr: Option<&mut [u64]>) -> Result<&mut [u64], SortError> {
    match arr {
        Some(arr) => radix::sort(arr),
        None => Err(reject("radix_sort", ABSENT_ARRAY)),
    }
}
