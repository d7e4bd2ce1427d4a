pub mod pivot;
pub mod quicksort;

pub use pivot::PivotSelection;
pub use quicksort::{quicksort, quicksort_by, quicksort_with};
