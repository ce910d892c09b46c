pub mod bubble_sort;

pub mod insertion_sort;

// Top-down merge sort with a single hoisted scratch buffer.
pub mod merge_sort;
