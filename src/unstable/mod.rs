// Swaps the minimum of the unsorted suffix into place, always O(N^2).
pub mod selection;

// Lomuto style quicksort with a uniformly random pivot.
pub mod quick;
