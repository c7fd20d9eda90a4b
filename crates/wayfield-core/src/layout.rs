//! The [`GridLayout`] type: how tile coordinates map to linear grid offsets.
//!
//! Per-tile data (distance fields, terrain noise) lives in flat buffers
//! indexed by *grid offset*. A layout fixes the formula
//! `offset = start + y * stride + x` for tiles inside `[0, width) x [0, height)`.
//! The stride may exceed the width, leaving padding columns at the end of
//! each row.

use std::fmt;

use crate::direction::Direction;
use crate::geom::{Point, Range};

/// Reasons a [`GridLayout`] cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Width or height is negative.
    NegativeSize { width: i32, height: i32 },
    /// Row stride is smaller than the row width.
    StrideTooSmall { stride: i32, width: i32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NegativeSize { width, height } => {
                write!(f, "grid size {width}x{height} is negative")
            }
            LayoutError::StrideTooSmall { stride, width } => {
                write!(f, "row stride {stride} is smaller than grid width {width}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Mapping between tile coordinates and grid offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LayoutRepr"))]
pub struct GridLayout {
    width: i32,
    height: i32,
    stride: i32,
    start: usize,
}

/// Unchecked wire form; deserialization goes through
/// [`GridLayout::with_stride`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LayoutRepr {
    width: i32,
    height: i32,
    stride: i32,
    start: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<LayoutRepr> for GridLayout {
    type Error = LayoutError;

    fn try_from(r: LayoutRepr) -> Result<Self, LayoutError> {
        GridLayout::with_stride(r.width, r.height, r.stride, r.start)
    }
}

impl GridLayout {
    /// A tightly packed layout: stride equals width, offsets start at 0.
    ///
    /// Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        Self {
            width,
            height: height.max(0),
            stride: width,
            start: 0,
        }
    }

    /// A layout with an explicit row stride and first-tile offset.
    pub fn with_stride(
        width: i32,
        height: i32,
        stride: i32,
        start: usize,
    ) -> Result<Self, LayoutError> {
        if width < 0 || height < 0 {
            return Err(LayoutError::NegativeSize { width, height });
        }
        if stride < width {
            return Err(LayoutError::StrideTooSmall { stride, width });
        }
        Ok(Self {
            width,
            height,
            stride,
            start,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Tiles addressable through this layout.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Length a backing buffer needs to hold every tile of the layout.
    pub fn len(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return self.start;
        }
        self.start + (self.height as usize - 1) * self.stride as usize + self.width as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Grid offset of `p`, or `None` outside the grid.
    #[inline]
    pub fn offset(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(self.start + p.y as usize * self.stride as usize + p.x as usize)
    }

    /// Tile at grid offset `offset`, or `None` for padding and out-of-grid
    /// offsets.
    pub fn point(&self, offset: usize) -> Option<Point> {
        let rel = offset.checked_sub(self.start)?;
        if self.stride == 0 {
            return None;
        }
        let stride = self.stride as usize;
        let p = Point::new((rel % stride) as i32, (rel / stride) as i32);
        self.contains(p).then_some(p)
    }

    /// Offset change of one step in direction `dir`.
    ///
    /// Derived from the row stride: with stride 162, north is -162,
    /// north-east -161 and south-east +163.
    #[inline]
    pub fn offset_delta(&self, dir: Direction) -> isize {
        let d = dir.delta();
        d.y as isize * self.stride as isize + d.x as isize
    }

    /// The neighbour of tile `p` (stored at `offset`) in direction `dir`,
    /// as a point and its offset. Returns `None` when the step leaves the
    /// grid.
    #[inline]
    pub fn neighbor(&self, p: Point, offset: usize, dir: Direction) -> Option<(Point, usize)> {
        let np = p.step(dir);
        if !self.contains(np) {
            return None;
        }
        let noff = offset.checked_add_signed(self.offset_delta(dir))?;
        Some((np, noff))
    }
}
