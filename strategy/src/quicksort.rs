use std::cmp::Ordering;

use crate::pivot::PivotSelection;

/// Sorts a copy of `elements` under the natural ordering, picking pivots
/// with `pivot_selector`.
///
/// The input itself is never mutated. The selector is called once per
/// partition step with the inclusive bounds of the current range and must
/// return an index inside that range; anything else is a precondition
/// violation and panics.
pub fn quicksort<T, S>(elements: &[T], pivot_selector: S) -> Vec<T>
where
    T: Ord + Clone,
    S: Fn(usize, usize) -> usize,
{
    quicksort_by(elements, pivot_selector, Ord::cmp)
}

/// [`quicksort`] generalized over a three-way comparer.
pub fn quicksort_by<T, S, C>(elements: &[T], pivot_selector: S, compare: C) -> Vec<T>
where
    T: Clone,
    S: Fn(usize, usize) -> usize,
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();
    if let Some(right) = sorted.len().checked_sub(1) {
        sort_range(&mut sorted, &pivot_selector, &compare, 0, right);
    }
    sorted
}

/// Fixing a pivot selection up front yields a fully specified sort function.
pub fn quicksort_with<T>(selection: PivotSelection) -> impl Fn(&[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    move |elements| quicksort(elements, selection.selector())
}

fn sort_range<T, S, C>(v: &mut [T], pivot_selector: &S, compare: &C, left: usize, right: usize)
where
    T: Clone,
    S: Fn(usize, usize) -> usize,
    C: Fn(&T, &T) -> Ordering,
{
    if left >= right {
        return;
    }

    let partition_index = partition(v, pivot_selector, compare, left, right);
    sort_range(v, pivot_selector, compare, left, partition_index);
    sort_range(v, pivot_selector, compare, partition_index + 1, right);
}

/// Hoare-style two-pointer partition of `v[left..=right]`.
///
/// Returns an index `p` in `left..right` such that every element of
/// `v[left..=p]` is `<=` every element of `v[p + 1..=right]` under `compare`.
fn partition<T, S, C>(
    v: &mut [T],
    pivot_selector: &S,
    compare: &C,
    left: usize,
    right: usize,
) -> usize
where
    T: Clone,
    S: Fn(usize, usize) -> usize,
    C: Fn(&T, &T) -> Ordering,
{
    let pivot_index = pivot_selector(left, right);
    assert!(
        (left..=right).contains(&pivot_index),
        "pivot selector returned {pivot_index}, outside of the range {left}..={right}"
    );

    // The pivot element sits at the left bound for the duration of the
    // partition, keeping both scans inside the range.
    v.swap(left, pivot_index);
    let pivot = v[left].clone();

    let mut i = left;
    let mut j = right;
    loop {
        while compare(&v[i], &pivot) == Ordering::Less {
            i += 1;
        }
        while compare(&v[j], &pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        v.swap(i, j);
        // The unconditional advance moves the scans past elements equal to
        // the pivot, so duplicate-heavy ranges still shrink.
        i += 1;
        j -= 1;
    }
}
