#![doc = include_str!("../README.md")]

mod color;
mod error;
pub mod kdtree;
pub mod palette;

pub use color::{Axis, ColorPoint};
pub use error::{Result, RgbIndexError};

#[cfg(test)]
pub(crate) mod test;
