use crate::color::{Axis, ColorPoint};
use crate::kdtree::select::select;
use crate::kdtree::ColorTree;

/// Below this many points the two halves of a subtree are sorted on the current thread.
#[cfg(feature = "rayon")]
const PARALLEL_SORT_THRESHOLD: usize = 4096;

/// A builder to create a [`ColorTree`].
#[derive(Debug, Clone)]
pub struct ColorTreeBuilder {
    points: Vec<ColorPoint>,
    num_items: usize,
}

impl ColorTreeBuilder {
    /// Create a new builder expecting the provided number of items.
    pub fn new(num_items: usize) -> Self {
        assert!(num_items > 0, "A color tree needs at least one item.");

        Self {
            points: Vec::with_capacity(num_items),
            num_items,
        }
    }

    /// Add a color to the index. Returns its insertion index.
    pub fn add(&mut self, point: ColorPoint) -> usize {
        assert!(
            self.points.len() < self.num_items,
            "Added more than the expected {} items.",
            self.num_items
        );

        let index = self.points.len();
        self.points.push(point);
        index
    }

    /// Add an opaque color to the index. Returns its insertion index.
    pub fn add_rgb(&mut self, r: u8, g: u8, b: u8) -> usize {
        self.add(ColorPoint::opaque(r, g, b))
    }

    /// Consume this builder, performing the k-d sort and generating a ColorTree ready for
    /// queries.
    pub fn finish(self) -> ColorTree {
        assert_eq!(
            self.points.len(),
            self.num_items,
            "Added {} items when expected {}.",
            self.points.len(),
            self.num_items
        );

        ColorTree::new(self.points)
    }
}

/// k-d sort `points` in place, splitting on `axis` at this level.
///
/// The subtree root of a slice is its middle item, `(len - 1) / 2`, which is the same item as
/// `(start + end) / 2` for the closed range `[start, end]` the slice covers in the full tree.
pub(crate) fn sort(points: &mut [ColorPoint], axis: Axis) {
    if points.len() <= 1 {
        return;
    }

    // middle index
    let m = (points.len() - 1) >> 1;

    // move the median on this axis into the middle so that the halves lie on either side of it
    let right = points.len() - 1;
    select(points, m, 0, right, axis);

    // recursively kd-sort first half and second half on the next axis
    let (left_half, rest) = points.split_at_mut(m);
    let right_half = &mut rest[1..];
    let next = axis.next();

    #[cfg(feature = "rayon")]
    {
        if left_half.len() + right_half.len() >= PARALLEL_SORT_THRESHOLD {
            rayon::join(|| sort(left_half, next), || sort(right_half, next));
            return;
        }
    }

    sort(left_half, next);
    sort(right_half, next);
}
