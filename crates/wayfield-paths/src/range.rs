//! How close a mover can get: the first tile on the way back from the
//! destination that lies within a given distance of the source.

use std::ops::ControlFlow;

use wayfield_core::{Direction, GridLayout, Neighborhood, Point};

use crate::Router;
use crate::descend::Descent;
use crate::error::RouteError;
use crate::field::DistanceField;
use crate::land::TowardSource;
use crate::traits::Policy;

struct WithinRange {
    steer: TowardSource,
    range: i32,
}

impl Policy for WithinRange {
    fn enter(&mut self, at: Point, offset: usize, cost: i32) -> ControlFlow<()> {
        // The source tile itself never counts as within range.
        if cost > 1 && cost <= self.range {
            return ControlFlow::Break(());
        }
        self.steer.enter(at, offset, cost)
    }

    fn prefer_tie(&self, dir: Direction, have_best: bool) -> bool {
        self.steer.prefer_tie(dir, have_best)
    }
}

impl Router {
    /// Walk back from `destination` over a field flooded from `source` and
    /// return the first tile whose distance is at most `range`.
    ///
    /// Used for ranged interaction: an archer standing on the returned tile
    /// can reach `destination` without walking all the way. Only tiles with
    /// distance above 1 qualify: fails with [`RouteError::RangeNotMet`] when
    /// the walk reaches the source first, so `range <= 1` and a destination
    /// on the source always fail.
    pub fn closest_within_range<F: DistanceField + ?Sized>(
        &mut self,
        field: &F,
        layout: &GridLayout,
        source: Point,
        destination: Point,
        neighborhood: Neighborhood,
        range: i32,
    ) -> Result<Point, RouteError> {
        let mut policy = WithinRange {
            steer: TowardSource::new(source),
            range,
        };
        match self.descend(field, layout, destination, neighborhood, &mut policy)? {
            Descent::Stopped(p) => Ok(p),
            Descent::Arrived(_) => Err(RouteError::RangeNotMet { range }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::BLOCKED;
    use crate::testutil::{flood, open_field};

    #[test]
    fn stops_at_first_tile_in_range() {
        let layout = GridLayout::new(10, 10);
        let src = Point::new(0, 0);
        let field = open_field(layout, src);
        let mut r = Router::new();
        let p = r
            .closest_within_range(&field, &layout, src, Point::new(5, 5), Neighborhood::Eight, 2)
            .unwrap();
        assert_eq!(p, Point::new(1, 1));
        assert_eq!(field.at(p), 2);
    }

    #[test]
    fn destination_already_in_range() {
        let layout = GridLayout::new(10, 10);
        let src = Point::new(4, 4);
        let field = open_field(layout, src);
        let mut r = Router::new();
        let dst = Point::new(6, 5);
        let p = r
            .closest_within_range(&field, &layout, src, dst, Neighborhood::Eight, 8)
            .unwrap();
        assert_eq!(p, dst);
        assert!(r.steps().is_empty());
    }

    #[test]
    fn every_tile_before_the_answer_is_out_of_range() {
        let layout = GridLayout::new(25, 25);
        let walls: Vec<Point> = (3..22).map(|y| Point::new(12, y)).collect();
        let src = Point::new(4, 12);
        let dst = Point::new(20, 12);
        let field = flood(layout, src, &walls, Neighborhood::Four);
        let mut r = Router::new();
        let range = 6;
        let p = r
            .closest_within_range(&field, &layout, src, dst, Neighborhood::Four, range)
            .unwrap();
        assert!(field.at(p) <= range);
        // Retrace the walk: the recorded steps lead from `dst` to `p`, each
        // tile on the way still out of range.
        let mut at = dst;
        for d in r.steps() {
            assert!(field.at(at) > range);
            at = at.step(d.reverse());
        }
        assert_eq!(at, p);
    }

    #[test]
    fn range_below_one_is_never_met() {
        let layout = GridLayout::new(6, 6);
        let src = Point::new(0, 0);
        let field = open_field(layout, src);
        let mut r = Router::new();
        let err = r
            .closest_within_range(&field, &layout, src, Point::new(4, 3), Neighborhood::Eight, 0)
            .unwrap_err();
        assert_eq!(err, RouteError::RangeNotMet { range: 0 });
    }

    #[test]
    fn unreachable_destination_fails() {
        let layout = GridLayout::new(6, 6);
        let src = Point::new(0, 0);
        let mut field = open_field(layout, src);
        field.set(Point::new(4, 3), BLOCKED);
        let mut r = Router::new();
        let err = r
            .closest_within_range(&field, &layout, src, Point::new(4, 3), Neighborhood::Eight, 3)
            .unwrap_err();
        assert!(matches!(err, RouteError::Unreachable { .. }));
    }

    #[test]
    fn range_of_one_is_never_met() {
        let layout = GridLayout::new(10, 10);
        let src = Point::new(0, 0);
        let field = open_field(layout, src);
        let mut r = Router::new();
        let err = r
            .closest_within_range(&field, &layout, src, Point::new(5, 5), Neighborhood::Eight, 1)
            .unwrap_err();
        assert_eq!(err, RouteError::RangeNotMet { range: 1 });
        // The walk still went all the way to the source.
        assert_eq!(r.steps().len(), 5);
    }

    #[test]
    fn destination_on_source_is_never_in_range() {
        let layout = GridLayout::new(6, 6);
        let src = Point::new(2, 2);
        let field = open_field(layout, src);
        let mut r = Router::new();
        let err = r
            .closest_within_range(&field, &layout, src, src, Neighborhood::Eight, 3)
            .unwrap_err();
        assert_eq!(err, RouteError::RangeNotMet { range: 3 });
        assert!(r.steps().is_empty());
    }
}
