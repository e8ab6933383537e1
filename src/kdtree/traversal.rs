//! Utilities to traverse the ColorTree structure.

use crate::color::{Axis, ColorPoint};
use crate::kdtree::ColorTreeIndex;

/// A subtree of a ColorTree.
///
/// The tree is implicit: a node covers the closed range `[left, right]` of the tree's points
/// and its root item sits at the middle of that range.
#[derive(Debug, Clone)]
pub struct Node<'a, T: ColorTreeIndex> {
    /// The tree that this node is a reference onto
    tree: &'a T,

    /// The axis this subtree's root splits on.
    axis: Axis,

    left: usize,
    right: usize,
}

impl<'a, T: ColorTreeIndex> Node<'a, T> {
    pub(crate) fn from_root(tree: &'a T) -> Self {
        Self {
            tree,
            axis: Axis::Red,
            left: 0,
            right: tree.num_items() - 1,
        }
    }

    /// Note: this is the index into the tree's points, not the insertion index.
    #[inline]
    pub fn middle_index(&self) -> usize {
        (self.left + self.right) >> 1
    }

    /// The item at the root of this subtree.
    #[inline]
    pub fn point(&self) -> ColorPoint {
        self.tree.points()[self.middle_index()]
    }

    /// The axis this subtree is split on.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// All items of this subtree, including its root.
    pub fn points(&self) -> &'a [ColorPoint] {
        &self.tree.points()[self.left..=self.right]
    }

    /// The number of items in this subtree.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Always `false`: every node holds at least its root item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The child node representing the "left" half, if there is one.
    ///
    /// Note that this **does not include** the middle index of the current node.
    pub fn left_child(&self) -> Option<Node<'a, T>> {
        let m = self.middle_index();
        (m > self.left).then(|| Self {
            tree: self.tree,
            axis: self.axis.next(),
            left: self.left,
            right: m - 1,
        })
    }

    /// The child node representing the "right" half, if there is one.
    ///
    /// Note that this **does not include** the middle index of the current node.
    pub fn right_child(&self) -> Option<Node<'a, T>> {
        let m = self.middle_index();
        (m < self.right).then(|| Self {
            tree: self.tree,
            axis: self.axis.next(),
            left: m + 1,
            right: self.right,
        })
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == self.right
    }
}
