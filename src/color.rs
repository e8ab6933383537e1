//! The color value stored in the index and the axes it is split on.

use std::cmp::Ordering;

use bytemuck::{Pod, Zeroable};

use crate::error::{Result, RgbIndexError};

/// One of the three geometric channels of a [`ColorPoint`].
///
/// The k-d tree splits on `Red` at the root and cycles `Red -> Green -> Blue -> Red` with
/// depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Channel 0.
    #[default]
    Red,
    /// Channel 1.
    Green,
    /// Channel 2.
    Blue,
}

impl Axis {
    /// The splitting axis of the next tree level.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Axis::Red => Axis::Green,
            Axis::Green => Axis::Blue,
            Axis::Blue => Axis::Red,
        }
    }

    /// The channel position, 0 for red through 2 for blue.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An RGBA8 color, used both as a stored palette entry and as a query.
///
/// Only `r`, `g` and `b` take part in distances. The opacity channel `a` is still part of the
/// value's identity and of its total order, which is lexicographic over `(r, g, b, a)` and is
/// used to break ties between points sharing a value on the comparison axis.
///
/// The layout matches an interleaved RGBA8 pixel, so decoded image buffers can be viewed as
/// `&[ColorPoint]` with [`ColorPoint::cast_rgba`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct ColorPoint {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity. Ignored by distances.
    pub a: u8,
}

impl ColorPoint {
    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// The value of this color along `axis`.
    #[inline]
    pub const fn channel(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Red => self.r,
            Axis::Green => self.g,
            Axis::Blue => self.b,
        }
    }

    /// Squared Euclidean distance over the red, green and blue channels.
    #[inline]
    pub fn sq_dist(&self, other: &ColorPoint) -> u32 {
        self.axis_sq_dist(other, Axis::Red)
            + self.axis_sq_dist(other, Axis::Green)
            + self.axis_sq_dist(other, Axis::Blue)
    }

    /// Squared distance along a single axis, i.e. to the splitting plane through `other`.
    #[inline]
    pub fn axis_sq_dist(&self, other: &ColorPoint, axis: Axis) -> u32 {
        let d = u32::from(self.channel(axis).abs_diff(other.channel(axis)));
        d * d
    }

    /// Compare on `axis`, falling back to the total order when the channel values are equal.
    #[inline]
    pub fn cmp_by_axis(&self, other: &ColorPoint, axis: Axis) -> Ordering {
        self.channel(axis)
            .cmp(&other.channel(axis))
            .then_with(|| self.cmp(other))
    }

    /// Returns `true` if `self` sorts strictly before `other` on `axis` (tie-broken).
    #[inline]
    pub fn is_ordered_before(&self, other: &ColorPoint, axis: Axis) -> bool {
        self.cmp_by_axis(other, axis) == Ordering::Less
    }

    /// The average color of a set of pixels.
    ///
    /// Each of `r`, `g` and `b` is the truncated integer mean of that channel; the result is
    /// opaque regardless of the input opacities. Returns `None` when there are no pixels.
    pub fn average(pixels: impl IntoIterator<Item = ColorPoint>) -> Option<ColorPoint> {
        let mut count = 0u64;
        let mut sums = [0u64; 3];
        for pixel in pixels {
            sums[0] += u64::from(pixel.r);
            sums[1] += u64::from(pixel.g);
            sums[2] += u64::from(pixel.b);
            count += 1;
        }
        if count == 0 {
            return None;
        }

        // A mean of u8 values always fits back into a u8
        let [r, g, b] = sums.map(|sum| (sum / count) as u8);
        Some(ColorPoint::opaque(r, g, b))
    }

    /// View an interleaved RGBA8 buffer as colors without copying.
    pub fn cast_rgba(bytes: &[u8]) -> Result<&[ColorPoint]> {
        if bytes.len() % 4 != 0 {
            return Err(RgbIndexError::InvalidBufferLength { len: bytes.len() });
        }
        Ok(bytemuck::cast_slice(bytes))
    }
}

impl From<[u8; 4]> for ColorPoint {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<[u8; 3]> for ColorPoint {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::opaque(r, g, b)
    }
}

impl From<ColorPoint> for [u8; 4] {
    fn from(value: ColorPoint) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}
