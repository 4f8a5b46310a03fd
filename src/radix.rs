//! Least significant digit radix sort over decimal digits.
//!
//! Digits are extracted with integer division and remainder only, powers of ten come from
//! [`pow`] instead of any floating point routine.

use crate::error::SortError;

/// Number of decimal digit buckets.
const RADIX: usize = 10;

/// Sorts `v` in ascending order with LSD radix sort and returns it.
///
/// This sort is stable and *O*(*k* \* *n*) where *k* is the number of decimal digits of the
/// largest element. Each digit pass distributes the elements into ten FIFO buckets in their
/// current order and then drains the buckets back into `v` from digit 0 to digit 9.
pub fn sort(v: &mut [u64]) -> Result<&mut [u64], SortError> {
    let mut buckets: [Vec<u64>; RADIX] = Default::default();

    let mut max = v.iter().copied().max().unwrap_or(0);
    let mut exp = 0;

    while max > 0 {
        let divisor = pow(10, exp)?;
        tracing::trace!(exp, divisor, "radix digit pass");

        for &x in v.iter() {
            buckets[digit(x, divisor)].push(x);
        }

        let mut out = 0;
        for bucket in buckets.iter_mut() {
            for x in bucket.drain(..) {
                v[out] = x;
                out += 1;
            }
        }

        max /= 10;
        exp += 1;
    }

    Ok(v)
}

#[inline]
fn digit(x: u64, divisor: u64) -> usize {
    ((x / divisor) % RADIX as u64) as usize
}

/// Raises `base` to the power `exp` by repeated squaring.
///
/// Fails with [`SortError::InvalidArgument`] if `exp` is negative or if both `base` and `exp`
/// are zero. Overflow of the result is not checked.
pub fn pow(base: u64, exp: i32) -> Result<u64, SortError> {
    if exp < 0 {
        return Err(SortError::InvalidArgument("invalid exponent"));
    }
    if base == 0 && exp == 0 {
        return Err(SortError::InvalidArgument(
            "base and exponent cannot both be 0",
        ));
    }

    match exp {
        0 => Ok(1),
        1 => Ok(base),
        _ => {
            let half = pow(base, exp / 2)?;
            let squared = half * half;
            if exp % 2 == 0 {
                Ok(squared)
            } else {
                Ok(squared * base)
            }
        }
    }
}
