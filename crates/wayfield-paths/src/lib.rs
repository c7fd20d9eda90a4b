//! Path reconstruction over precomputed distance fields.
//!
//! A flood fill elsewhere in the simulation assigns every reachable tile its
//! step distance from a source, 1 at the source itself. This crate walks such
//! a field backwards from a destination, always moving to a cheaper
//! neighbour, and hands movers the compass directions that lead from the
//! source to the destination. No search is performed here: a walk costs time
//! proportional to the path length and allocates nothing.
//!
//! Three walks share one loop ([`Router::descend`]) and differ only in their
//! [`Policy`]:
//!
//! | Operation | Ties go to | Stops at |
//! |---|---|---|
//! | [`Router::path`] | the neighbour heading for the source | the source |
//! | [`Router::closest_within_range`] | the neighbour heading for the source | the first tile within range |
//! | [`Router::water_path`] | per-call or per-tile random drift | the source |
//!
//! The distance field must not be rebuilt while a walk reads it; any number
//! of routers may read the same field at once.

mod config;
mod descend;
mod error;
mod field;
mod land;
mod range;
mod router;
mod traits;
mod water;

#[cfg(test)]
mod testutil;

pub use config::{MAX_STEPS, RouteConfig};
pub use descend::Descent;
pub use error::RouteError;
pub use field::{
    BLOCKED, DistanceField, DistanceMap, NoiseField, NoiseMap, SizeMismatch, UNSET,
};
pub use router::Router;
pub use traits::Policy;
pub use water::Drift;
