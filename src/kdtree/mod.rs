//! An implementation of an immutable 3-d tree over RGB colors.

#![warn(missing_docs)]

mod builder;
mod index;
mod select;
mod r#trait;
mod traversal;

pub use builder::ColorTreeBuilder;
pub use index::{ColorTree, ColorTreeRef};
pub use r#trait::ColorTreeIndex;
pub use select::select;
pub use traversal::Node;
