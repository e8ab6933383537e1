use log::trace;
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tinyvec::TinyVec;

use crate::color::{Axis, ColorPoint};
use crate::kdtree::{ColorTree, ColorTreeRef, Node};

/// A trait for searching and accessing data out of a ColorTree.
pub trait ColorTreeIndex: Sized {
    /// The underlying k-d sorted points of this tree
    fn points(&self) -> &[ColorPoint];

    /// The number of items in this tree
    fn num_items(&self) -> usize {
        self.points().len()
    }

    /// Find the stored color closest to `query` by squared Euclidean distance over red, green
    /// and blue.
    ///
    /// When several colors are equally close, which of them is returned depends on the tree
    /// layout: it is deterministic for a given input but not otherwise specified.
    fn nearest_neighbor(&self, query: ColorPoint) -> ColorPoint {
        self.nearest_neighbor_with_distance(query).0
    }

    /// Like [`nearest_neighbor`][Self::nearest_neighbor], also returning the squared
    /// distance to the match.
    fn nearest_neighbor_with_distance(&self, query: ColorPoint) -> (ColorPoint, u32) {
        let points = self.points();
        assert!(!points.is_empty(), "Cannot query an empty color tree.");

        let mut best = points[(points.len() - 1) >> 1];
        let mut best_dist = query.sq_dist(&best);

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[SearchFrame; 33]> = TinyVec::new();
        stack.push(SearchFrame {
            left: 0,
            right: points.len() - 1,
            axis: Axis::Red,
            plane_dist: 0,
        });

        while let Some(frame) = stack.pop() {
            // the best sphere no longer crosses the plane this half lies behind
            if best_dist < frame.plane_dist {
                continue;
            }

            let m = (frame.left + frame.right) >> 1;
            let point = points[m];
            let dist = query.sq_dist(&point);
            if dist < best_dist {
                best = point;
                best_dist = dist;
            }

            let left_half = (m > frame.left).then(|| (frame.left, m - 1));
            let right_half = (m < frame.right).then(|| (m + 1, frame.right));
            let (near, far) = if query.is_ordered_before(&point, frame.axis) {
                (left_half, right_half)
            } else {
                (right_half, left_half)
            };

            // Note: the far half is pushed first so the whole near half is searched before it
            let axis = frame.axis.next();
            if let Some((left, right)) = far {
                stack.push(SearchFrame {
                    left,
                    right,
                    axis,
                    plane_dist: query.axis_sq_dist(&point, frame.axis),
                });
            }
            if let Some((left, right)) = near {
                stack.push(SearchFrame {
                    left,
                    right,
                    axis,
                    plane_dist: 0,
                });
            }
        }

        (best, best_dist)
    }

    /// Find the nearest stored color for each query, in query order.
    ///
    /// With the `rayon` feature the queries are answered in parallel.
    fn nearest_neighbors(&self, queries: &[ColorPoint]) -> Vec<ColorPoint>
    where
        Self: Sync,
    {
        trace!(
            "Matching {} queries against {} colors",
            queries.len(),
            self.num_items()
        );

        #[cfg(feature = "rayon")]
        let iter = queries.par_iter();
        #[cfg(not(feature = "rayon"))]
        let iter = queries.iter();

        iter.map(|query| self.nearest_neighbor(*query)).collect()
    }

    /// Access the root node of the tree for manual traversal.
    fn root(&self) -> Node<'_, Self> {
        Node::from_root(self)
    }
}

/// A pending subtree in the nearest neighbor search.
#[derive(Debug, Clone, Copy, Default)]
struct SearchFrame {
    left: usize,
    right: usize,
    axis: Axis,
    /// Squared distance from the query to the splitting plane this subtree lies behind, zero
    /// for the half containing the query.
    plane_dist: u32,
}

impl ColorTreeIndex for ColorTree {
    fn points(&self) -> &[ColorPoint] {
        &self.points
    }
}

impl ColorTreeIndex for ColorTreeRef<'_> {
    fn points(&self) -> &[ColorPoint] {
        self.points
    }
}
