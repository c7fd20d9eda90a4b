//! Read-only per-tile inputs to path reconstruction.
//!
//! A distance field holds, for every grid offset, the cost of reaching the
//! tile the field was flooded from. The flood fill itself lives elsewhere;
//! this module only defines how reconstruction reads its output, plus
//! owned buffers for callers that do not keep their own.

use std::fmt;

use rand::{Rng, RngExt};
use wayfield_core::{GridLayout, Point};

/// Distance value of a blocked or unreachable tile.
pub const BLOCKED: i32 = 0;

/// Lowest distance value that means "never reached by the flood fill".
pub const UNSET: i32 = 998;

/// Read access to a distance field keyed by grid offset.
pub trait DistanceField {
    /// Cost stored at `offset`. Offsets outside the field read as
    /// [`BLOCKED`].
    fn distance(&self, offset: usize) -> i32;
}

impl DistanceField for [i32] {
    #[inline]
    fn distance(&self, offset: usize) -> i32 {
        self.get(offset).copied().unwrap_or(BLOCKED)
    }
}

impl DistanceField for Vec<i32> {
    #[inline]
    fn distance(&self, offset: usize) -> i32 {
        self.as_slice().distance(offset)
    }
}

/// Read access to the static per-tile random bytes that make flotsam drift.
pub trait NoiseField {
    /// Random byte stored at `offset`; 0 outside the field.
    fn noise(&self, offset: usize) -> u8;
}

impl NoiseField for [u8] {
    #[inline]
    fn noise(&self, offset: usize) -> u8 {
        self.get(offset).copied().unwrap_or(0)
    }
}

impl NoiseField for Vec<u8> {
    #[inline]
    fn noise(&self, offset: usize) -> u8 {
        self.as_slice().noise(offset)
    }
}

/// A buffer whose length does not match its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    /// Length the layout requires ([`GridLayout::len`]).
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer holds {} values, layout needs {}",
            self.found, self.expected
        )
    }
}

impl std::error::Error for SizeMismatch {}

fn check_len(layout: &GridLayout, found: usize) -> Result<(), SizeMismatch> {
    let expected = layout.len();
    if found != expected {
        return Err(SizeMismatch { expected, found });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// DistanceMap
// ---------------------------------------------------------------------------

/// An owned distance field laid out by a [`GridLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DistanceMapRepr"))]
pub struct DistanceMap {
    layout: GridLayout,
    values: Vec<i32>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DistanceMapRepr {
    layout: GridLayout,
    values: Vec<i32>,
}

#[cfg(feature = "serde")]
impl TryFrom<DistanceMapRepr> for DistanceMap {
    type Error = SizeMismatch;

    fn try_from(r: DistanceMapRepr) -> Result<Self, SizeMismatch> {
        DistanceMap::from_vec(r.layout, r.values)
    }
}

impl DistanceMap {
    /// A field with every tile [`BLOCKED`].
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            values: vec![BLOCKED; layout.len()],
        }
    }

    /// A field whose value at each tile is `f(tile)`.
    pub fn from_fn(layout: GridLayout, mut f: impl FnMut(Point) -> i32) -> Self {
        let mut map = Self::new(layout);
        for p in layout.bounds() {
            map.set(p, f(p));
        }
        map
    }

    /// Wrap an existing buffer indexed by grid offset. Its length must be
    /// exactly `layout.len()`.
    pub fn from_vec(layout: GridLayout, values: Vec<i32>) -> Result<Self, SizeMismatch> {
        check_len(&layout, values.len())?;
        Ok(Self { layout, values })
    }

    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Cost at tile `p`; [`BLOCKED`] outside the grid.
    pub fn at(&self, p: Point) -> i32 {
        self.layout
            .offset(p)
            .map_or(BLOCKED, |off| self.values.distance(off))
    }

    /// Set the cost at tile `p`. Does nothing outside the grid.
    pub fn set(&mut self, p: Point, cost: i32) {
        if let Some(v) = self.layout.offset(p).and_then(|off| self.values.get_mut(off)) {
            *v = cost;
        }
    }

    /// The raw buffer, indexed by grid offset.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}

impl DistanceField for DistanceMap {
    #[inline]
    fn distance(&self, offset: usize) -> i32 {
        self.values.distance(offset)
    }
}

// ---------------------------------------------------------------------------
// NoiseMap
// ---------------------------------------------------------------------------

/// An owned per-tile random byte field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "NoiseMapRepr"))]
pub struct NoiseMap {
    layout: GridLayout,
    values: Vec<u8>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct NoiseMapRepr {
    layout: GridLayout,
    values: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<NoiseMapRepr> for NoiseMap {
    type Error = SizeMismatch;

    fn try_from(r: NoiseMapRepr) -> Result<Self, SizeMismatch> {
        NoiseMap::from_vec(r.layout, r.values)
    }
}

impl NoiseMap {
    /// Fill a field for `layout` with bytes drawn from `rng`.
    pub fn generate(layout: GridLayout, rng: &mut impl Rng) -> Self {
        let mut values = vec![0; layout.len()];
        for p in layout.bounds() {
            if let Some(off) = layout.offset(p) {
                values[off] = rng.random::<u8>();
            }
        }
        Self { layout, values }
    }

    pub fn from_vec(layout: GridLayout, values: Vec<u8>) -> Result<Self, SizeMismatch> {
        check_len(&layout, values.len())?;
        Ok(Self { layout, values })
    }

    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn at(&self, p: Point) -> u8 {
        self.layout.offset(p).map_or(0, |off| self.values.noise(off))
    }

    pub fn set(&mut self, p: Point, value: u8) {
        if let Some(v) = self.layout.offset(p).and_then(|off| self.values.get_mut(off)) {
            *v = value;
        }
    }
}

impl NoiseField for NoiseMap {
    #[inline]
    fn noise(&self, offset: usize) -> u8 {
        self.values.noise(offset)
    }
}
