use std::cmp::Ordering;

use crate::color::{Axis, ColorPoint};

/// Quickselect: reorder `points[left..=right]` so that `points[k]` holds the element that would
/// be there if the range were sorted on `axis`, with [`ColorPoint::cmp_by_axis`] breaking ties.
///
/// Afterwards every item in `[left..k-1]` compares less than or equal to the k-th item and
/// every item in `[k+1..right]` compares greater than or equal to it.
///
/// The pivot is always the last item of the current range, so the expected cost is linear in
/// the range size but an adversarial ordering degrades it to quadratic.
#[inline]
pub fn select(points: &mut [ColorPoint], k: usize, mut left: usize, mut right: usize, axis: Axis) {
    debug_assert!(
        left <= k && k <= right && right < points.len(),
        "select target {} outside of [{}, {}] in {} points",
        k,
        left,
        right,
        points.len()
    );

    while right > left {
        let p = partition(points, left, right, axis);
        match k.cmp(&p) {
            // k >= left, so p > left here and p - 1 cannot underflow
            Ordering::Less => right = p - 1,
            Ordering::Greater => left = p + 1,
            Ordering::Equal => return,
        }
    }
}

/// Lomuto partition around `points[right]`. Returns the final position of the pivot.
#[inline]
fn partition(points: &mut [ColorPoint], left: usize, right: usize, axis: Axis) -> usize {
    let pivot = points[right];
    let mut store = left;
    for j in left..right {
        if !pivot.is_ordered_before(&points[j], axis) {
            points.swap(store, j);
            store += 1;
        }
    }
    points.swap(store, right);
    store
}
