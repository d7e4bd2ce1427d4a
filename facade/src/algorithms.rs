use std::cmp::Ordering;

use itertools::Itertools;

/// Joins the elements with `separator` between each pair.
pub fn join(elements: &[String], separator: &str) -> String {
    elements.iter().join(separator)
}

/// The index of the first element containing `target` as a substring.
///
/// Ties resolve to the earliest index; `None` when nothing matches.
pub fn search(elements: &[String], target: &str) -> Option<usize> {
    elements.iter().position(|element| element.contains(target))
}

/// A sorted copy of `elements` under [`compare`].
pub fn sort(elements: &[String]) -> Vec<String> {
    let mut sorted = elements.to_vec();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

/// Three-way string comparison.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}
