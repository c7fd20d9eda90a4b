//! Paths for boats and floating objects.
//!
//! Water paths always use all eight directions and ignore the heading to
//! the source: the tie-break only exists to make floating things look like
//! they drift.

use std::ops::ControlFlow;

use rand::{Rng, RngExt};
use wayfield_core::{Direction, GridLayout, Neighborhood, Point};

use crate::Router;
use crate::error::RouteError;
use crate::field::{DistanceField, NoiseField};
use crate::traits::Policy;

/// How a floating object chooses among equally short ways.
#[derive(Clone, Copy)]
pub enum Drift<'a> {
    /// Every equally cheap neighbour replaces the previous one, so the last
    /// one in clockwise order wins.
    Plain,
    /// On each tile, ties are taken only when the terrain noise there
    /// matches the per-call draw. The object meanders instead of following
    /// one straight shortest path.
    Flotsam(&'a dyn NoiseField),
}

struct Drifting<'a> {
    drift: Drift<'a>,
    draw: u8,
    here: u8,
}

impl Policy for Drifting<'_> {
    fn enter(&mut self, _at: Point, offset: usize, _cost: i32) -> ControlFlow<()> {
        self.here = match self.drift {
            Drift::Plain => self.draw,
            Drift::Flotsam(noise) => noise.noise(offset) & 3,
        };
        ControlFlow::Continue(())
    }

    fn prefer_tie(&self, _dir: Direction, _have_best: bool) -> bool {
        self.here == self.draw
    }
}

impl Router {
    /// Reconstruct a water path to `destination` over a field flooded from
    /// the source.
    ///
    /// Draws one value in `0..4` from `rng` per call, before anything else.
    /// Returns the directions source first, borrowed from the router.
    pub fn water_path<F: DistanceField + ?Sized>(
        &mut self,
        field: &F,
        layout: &GridLayout,
        destination: Point,
        drift: Drift<'_>,
        rng: &mut impl Rng,
    ) -> Result<&[Direction], RouteError> {
        let draw = rng.random::<u8>() & 3;
        let mut policy = Drifting {
            drift,
            draw,
            here: draw,
        };
        self.descend(field, layout, destination, Neighborhood::Eight, &mut policy)?;
        Ok(self.finish())
    }
}
