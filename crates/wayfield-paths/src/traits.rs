use std::ops::ControlFlow;

use wayfield_core::{Direction, Point};

/// Tie-break and early-exit rules for one reconstruction walk.
///
/// [`Router::descend`](crate::Router::descend) always moves to the cheapest
/// usable neighbour. A policy decides what happens among equally cheap
/// neighbours and may stop the walk before it reaches the source.
pub trait Policy {
    /// Called for every tile the walk stands on, destination first, before
    /// the walk checks whether it has arrived. Returning `Break` stops the
    /// walk at `at`.
    fn enter(&mut self, _at: Point, _offset: usize, _cost: i32) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Whether a neighbour in direction `dir`, costing exactly as much as the
    /// best candidate so far, replaces that candidate. `have_best` is false
    /// while no neighbour has been chosen yet.
    fn prefer_tie(&self, dir: Direction, have_best: bool) -> bool;
}
