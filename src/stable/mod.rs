// Bidirectional bubble sort, O(N) on sorted input.
pub mod cocktail_shaker;

// Shifts each element left past its strictly greater predecessors.
pub mod insertion;

// Top-down merge sort with a single scratch buffer per call.
pub mod merge;
