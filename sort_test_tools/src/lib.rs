pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

// Re-exported so the instantiation macro works without the caller depending on paste.
#[doc(hidden)]
pub use paste;
