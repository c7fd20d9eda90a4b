//! Point-to-point paths for land movers.

use std::ops::ControlFlow;

use wayfield_core::{Direction, GridLayout, Neighborhood, Point};

use crate::Router;
use crate::error::RouteError;
use crate::field::DistanceField;
use crate::traits::Policy;

/// Among equally cheap neighbours, prefer the one heading straight for the
/// source; otherwise keep the first one found.
pub(crate) struct TowardSource {
    source: Point,
    heading: Option<Direction>,
}

impl TowardSource {
    pub(crate) fn new(source: Point) -> Self {
        Self {
            source,
            heading: None,
        }
    }
}

impl Policy for TowardSource {
    fn enter(&mut self, at: Point, _offset: usize, _cost: i32) -> ControlFlow<()> {
        self.heading = Direction::general(at, self.source);
        ControlFlow::Continue(())
    }

    fn prefer_tie(&self, dir: Direction, have_best: bool) -> bool {
        !have_best || Some(dir) == self.heading
    }
}

impl Router {
    /// Reconstruct the path from `source` to `destination` over a distance
    /// field flooded from `source`.
    ///
    /// Returns the directions a mover takes, source first. The result
    /// borrows the router's buffer. An empty slice means the destination
    /// already is the source.
    pub fn path<F: DistanceField + ?Sized>(
        &mut self,
        field: &F,
        layout: &GridLayout,
        source: Point,
        destination: Point,
        neighborhood: Neighborhood,
    ) -> Result<&[Direction], RouteError> {
        let mut policy = TowardSource::new(source);
        self.descend(field, layout, destination, neighborhood, &mut policy)?;
        Ok(self.finish())
    }

    /// Like [`path`](Self::path), but copy the directions into `out` and
    /// return their count. Failures leave `out` empty and return 0.
    pub fn path_into<F: DistanceField + ?Sized>(
        &mut self,
        field: &F,
        layout: &GridLayout,
        source: Point,
        destination: Point,
        neighborhood: Neighborhood,
        out: &mut Vec<Direction>,
    ) -> usize {
        out.clear();
        if let Ok(steps) = self.path(field, layout, source, destination, neighborhood) {
            out.extend_from_slice(steps);
        }
        out.len()
    }
}
