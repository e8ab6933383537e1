use std::cmp::Ordering;

use log::debug;

use crate::color::{Axis, ColorPoint};
use crate::error::{Result, RgbIndexError};
use crate::kdtree::builder::sort;
use crate::kdtree::{ColorTreeIndex, Node};

/// An owned, k-d sorted set of colors.
///
/// Usually this will be created via [`ColorTree::new`] or a
/// [`ColorTreeBuilder`][crate::kdtree::ColorTreeBuilder]. It is never modified after
/// construction, so it can be shared between threads and queried concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTree {
    pub(crate) points: Vec<ColorPoint>,
}

impl ColorTree {
    /// Build a tree over `points`, permuting them in place into k-d order.
    ///
    /// The points are expected to be free of duplicates.
    ///
    /// # Panics
    ///
    /// If `points` is empty.
    pub fn new(mut points: Vec<ColorPoint>) -> Self {
        assert!(!points.is_empty(), "Cannot build a color tree with no points.");

        sort(&mut points, Axis::Red);
        debug!("Built color tree over {} points", points.len());

        Self { points }
    }

    /// Build a tree over `points`, returning an error instead of panicking when there are none.
    pub fn try_new(points: Vec<ColorPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(RgbIndexError::EmptyInput);
        }
        Ok(Self::new(points))
    }

    /// The k-d sorted points backing this tree.
    pub fn into_inner(self) -> Vec<ColorPoint> {
        self.points
    }

    /// A borrowed view onto this tree.
    pub fn as_ref(&self) -> ColorTreeRef<'_> {
        ColorTreeRef {
            points: &self.points,
        }
    }
}

impl AsRef<[ColorPoint]> for ColorTree {
    fn as_ref(&self) -> &[ColorPoint] {
        &self.points
    }
}

/// A reference onto an external, already k-d sorted slice of colors.
///
/// Usually this will be created from a [`ColorTree`] via its [`as_ref`][ColorTree::as_ref]
/// method, but it can also wrap the output of [`ColorTree::into_inner`] held elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTreeRef<'a> {
    pub(crate) points: &'a [ColorPoint],
}

impl<'a> ColorTreeRef<'a> {
    /// Wrap a slice, checking that it is non-empty and in k-d order.
    pub fn try_new(points: &'a [ColorPoint]) -> Result<Self> {
        if points.is_empty() {
            return Err(RgbIndexError::EmptyInput);
        }

        let tree = Self { points };
        check_kd_order(tree.root())?;
        Ok(tree)
    }
}

/// Walk every subtree, checking that its root splits its items on the subtree's axis.
fn check_kd_order<T: ColorTreeIndex>(root: Node<'_, T>) -> Result<()> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        let median = node.point();
        let axis = node.axis();
        let violation = RgbIndexError::NotKdSorted {
            index: node.middle_index(),
        };

        if let Some(left) = node.left_child() {
            if left
                .points()
                .iter()
                .any(|p| p.cmp_by_axis(&median, axis) == Ordering::Greater)
            {
                return Err(violation);
            }
            stack.push(left);
        }

        if let Some(right) = node.right_child() {
            if right
                .points()
                .iter()
                .any(|p| p.cmp_by_axis(&median, axis) == Ordering::Less)
            {
                return Err(violation);
            }
            stack.push(right);
        }
    }

    Ok(())
}
