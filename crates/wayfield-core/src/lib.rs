//! **wayfield-core** — tile grid geometry.
//!
//! This crate provides the types shared by the *wayfield* crates: tile
//! coordinates, the eight compass directions movers travel in, and the
//! [`GridLayout`] that maps coordinates to linear grid offsets.

pub mod direction;
pub mod geom;
pub mod layout;

pub use direction::{Direction, Neighborhood, Walk, walk};
pub use geom::{Point, Range};
pub use layout::{GridLayout, LayoutError};
