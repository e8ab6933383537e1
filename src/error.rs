use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RgbIndexError {
    /// A tree or palette was requested over zero colors.
    #[error("Cannot index an empty set of colors.")]
    EmptyInput,

    /// A borrowed slice violates the k-d ordering at the given subtree root.
    #[error("Points are not kd-sorted: ordering violated around index {index}.")]
    NotKdSorted { index: usize },

    /// A pixel buffer whose length is not a whole number of RGBA8 pixels.
    #[error("Expected a multiple of 4 bytes for RGBA pixels, got {len}.")]
    InvalidBufferLength { len: usize },
}

pub type Result<T> = std::result::Result<T, RgbIndexError>;
