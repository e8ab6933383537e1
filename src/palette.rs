//! A palette mapping representative colors to labels, such as the thumbnail each color was
//! averaged from.

use std::collections::BTreeMap;

use log::debug;

use crate::color::ColorPoint;
use crate::error::{Result, RgbIndexError};
use crate::kdtree::{ColorTree, ColorTreeIndex};

/// A set of unique colors, each with a label, indexed for nearest-color lookups.
#[derive(Debug, Clone)]
pub struct Palette<L> {
    tree: ColorTree,
    labels: BTreeMap<ColorPoint, L>,
}

impl<L> Palette<L> {
    /// Build a palette from `(color, label)` entries.
    ///
    /// Entries sharing a color collapse into one, keeping the label of the later entry.
    /// Returns [`RgbIndexError::EmptyInput`] if there are no entries.
    pub fn new(entries: impl IntoIterator<Item = (ColorPoint, L)>) -> Result<Self> {
        let mut labels = BTreeMap::new();
        let mut num_duplicates = 0usize;
        for (color, label) in entries {
            if labels.insert(color, label).is_some() {
                num_duplicates += 1;
            }
        }
        if labels.is_empty() {
            return Err(RgbIndexError::EmptyInput);
        }
        if num_duplicates > 0 {
            debug!(
                "Collapsed {} palette entries with duplicate colors",
                num_duplicates
            );
        }

        let tree = ColorTree::new(labels.keys().copied().collect());
        Ok(Self { tree, labels })
    }

    /// The tree over this palette's colors.
    pub fn tree(&self) -> &ColorTree {
        &self.tree
    }

    /// The number of distinct colors.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`: an empty palette cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label stored for exactly `color`.
    pub fn label(&self, color: &ColorPoint) -> Option<&L> {
        self.labels.get(color)
    }

    /// The palette color closest to `query`, with its label.
    pub fn nearest(&self, query: ColorPoint) -> (ColorPoint, &L) {
        let color = self.tree.nearest_neighbor(query);
        // every color in the tree is a key of `labels`
        (color, &self.labels[&color])
    }

    /// The label of the closest palette color for each query, in query order.
    pub fn nearest_labels(&self, queries: &[ColorPoint]) -> Vec<&L> {
        self.tree
            .nearest_neighbors(queries)
            .into_iter()
            .map(|color| &self.labels[&color])
            .collect()
    }

    /// Iterate over colors and their labels in color order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColorPoint, &L)> {
        self.labels.iter()
    }
}
