use log::{debug, trace};
use wayfield_core::{Direction, GridLayout, Neighborhood, Point};

use crate::Router;
use crate::error::RouteError;
use crate::field::{BLOCKED, DistanceField};
use crate::traits::Policy;

/// How a successful walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The walk reached a tile of cost 1, the source.
    Arrived(Point),
    /// The policy stopped the walk at this tile.
    Stopped(Point),
}

impl Router {
    /// Walk from `destination` down the distance field towards its source.
    ///
    /// Each step moves to the cheapest non-blocked neighbour in
    /// `neighborhood`, never straight back to the tile just left; `policy`
    /// settles ties and may stop the walk early. The forward travel
    /// directions are recorded into the router's step buffer in
    /// destination-to-source order; see [`steps`](Self::steps).
    pub fn descend<F, P>(
        &mut self,
        field: &F,
        layout: &GridLayout,
        destination: Point,
        neighborhood: Neighborhood,
        policy: &mut P,
    ) -> Result<Descent, RouteError>
    where
        F: DistanceField + ?Sized,
        P: Policy,
    {
        self.steps.clear();

        let Some(mut offset) = layout.offset(destination) else {
            debug!("route to {destination}: outside grid");
            return Err(RouteError::DestinationOutOfGrid { destination });
        };
        let cost = field.distance(offset);
        if cost <= BLOCKED || cost >= self.config.unset_threshold {
            debug!("route to {destination}: unreachable (distance {cost})");
            return Err(RouteError::Unreachable { destination, cost });
        }

        let mut at = destination;
        let mut back: Option<Direction> = None;
        loop {
            let cost = field.distance(offset);
            if policy.enter(at, offset, cost).is_break() {
                return Ok(Descent::Stopped(at));
            }
            if cost <= 1 {
                return Ok(Descent::Arrived(at));
            }

            let mut best: Option<(Direction, Point, usize)> = None;
            let mut best_cost = cost;
            for dir in neighborhood.directions() {
                if Some(dir) == back {
                    continue;
                }
                let Some((np, noff)) = layout.neighbor(at, offset, dir) else {
                    continue;
                };
                let next = field.distance(noff);
                if next <= BLOCKED {
                    continue;
                }
                if next < best_cost
                    || (next == best_cost && policy.prefer_tie(dir, best.is_some()))
                {
                    best_cost = next;
                    best = Some((dir, np, noff));
                }
            }

            let Some((dir, np, noff)) = best else {
                debug!("route to {destination}: dead end at {at} (distance {cost})");
                return Err(RouteError::BrokenDescent { at, cost });
            };
            let forward = dir.reverse();
            self.steps.push(forward);
            back = Some(forward);
            trace!("{at} -> {np} ({best_cost})");
            at = np;
            offset = noff;

            if self.steps.len() >= self.config.max_steps {
                debug!(
                    "route to {destination}: exceeds {} steps",
                    self.config.max_steps
                );
                return Err(RouteError::TooLong {
                    limit: self.config.max_steps,
                });
            }
        }
    }

    /// Forward directions recorded by the last walk, destination first.
    #[inline]
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// Reverse the recorded steps into source-to-destination order.
    pub(crate) fn finish(&mut self) -> &[Direction] {
        self.steps.reverse();
        &self.steps
    }
}
