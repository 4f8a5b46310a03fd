//! Six classic array sorts driven by a caller supplied comparison function.
//!
//! The stable sorts live in [`stable`], the unstable ones in [`unstable`] and the integer only
//! radix sort in [`radix`]. Each comparison sort module offers `sort` and `sort_by`, the crate
//! root re-exports the argument checked entry points from [`checked`].

/// Generates a `SortImpl` type that forwards to the `sort` and `sort_by` functions of the
/// module it is invoked in, so the generic test suite can be instantiated for it.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod checked;
pub mod radix;
pub mod stable;
pub mod unstable;

mod error;

pub use checked::{
    cocktail_shaker_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
};
pub use error::SortError;
pub use radix::pow;
