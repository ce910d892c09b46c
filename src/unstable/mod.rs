// Lomuto partition with a fixed middle pivot.
pub mod quick_sort;

pub mod selection_sort;
