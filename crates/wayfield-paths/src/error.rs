use std::fmt;

use wayfield_core::Point;

/// Why a path could not be reconstructed.
///
/// Every variant is recoverable: callers typically rebuild the distance
/// field and retry on a later tick, or leave the mover idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// The destination lies outside the grid layout.
    DestinationOutOfGrid { destination: Point },
    /// The destination is blocked or was never reached by the flood fill.
    Unreachable { destination: Point, cost: i32 },
    /// No usable neighbour at `at`: the field was built for different
    /// obstacles than the ones now in place.
    BrokenDescent { at: Point, cost: i32 },
    /// The walk hit the step limit.
    TooLong { limit: usize },
    /// The walk reached the source without passing a tile within `range`.
    RangeNotMet { range: i32 },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DestinationOutOfGrid { destination } => {
                write!(f, "destination {destination} is outside the grid")
            }
            RouteError::Unreachable { destination, cost } => {
                write!(f, "destination {destination} is unreachable (distance {cost})")
            }
            RouteError::BrokenDescent { at, cost } => {
                write!(f, "no lower neighbour at {at} (distance {cost})")
            }
            RouteError::TooLong { limit } => write!(f, "path exceeds {limit} steps"),
            RouteError::RangeNotMet { range } => {
                write!(f, "no tile within range {range} on the way to the source")
            }
        }
    }
}

impl std::error::Error for RouteError {}
