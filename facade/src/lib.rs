pub mod aggregate;
pub mod algorithms;

pub use aggregate::{facade_factory, with_sort, AlgorithmFacade, Algorithms};
