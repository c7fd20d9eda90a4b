//! Compass directions and the neighbourhoods built from them.

use crate::geom::Point;

/// One of the eight compass directions, numbered clockwise from north.
///
/// Even discriminants are the cardinal directions. The numbering is part of
/// the public contract: paths handed to movers are sequences of these values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in clockwise order starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal directions, clockwise from north.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Numeric value in `0..8`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Direction for a numeric value, or `None` outside `0..8`.
    #[inline]
    pub const fn from_index(i: u8) -> Option<Direction> {
        if i < 8 {
            Some(Self::ALL[i as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Coordinate delta of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::NorthEast => Point::new(1, -1),
            Direction::East => Point::new(1, 0),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::West => Point::new(-1, 0),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }

    /// The opposite direction.
    ///
    /// A step recorded while walking from the destination back to the source
    /// becomes, reversed, the direction a mover travels from source to
    /// destination.
    #[inline]
    pub const fn reverse(self) -> Direction {
        Self::ALL[((self.index() + 4) % 8) as usize]
    }

    /// The compass direction that best approximates the heading from `from`
    /// to `to`, or `None` when both points are the same tile.
    ///
    /// A cardinal direction is returned when the dominant axis delta is at
    /// least four times the other one; otherwise the diagonal of the
    /// quadrant.
    pub fn general(from: Point, to: Point) -> Option<Direction> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx == 0 && dy == 0 {
            return None;
        }
        let (ax, ay) = (dx.abs(), dy.abs());
        let horizontal = if dx > 0 {
            Direction::East
        } else {
            Direction::West
        };
        let vertical = if dy > 0 {
            Direction::South
        } else {
            Direction::North
        };
        if ax >= 4 * ay {
            return Some(horizontal);
        }
        if ay >= 4 * ax {
            return Some(vertical);
        }
        Some(match (dx > 0, dy > 0) {
            (true, false) => Direction::NorthEast,
            (true, true) => Direction::SouthEast,
            (false, true) => Direction::SouthWest,
            (false, false) => Direction::NorthWest,
        })
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> Self {
        d.index()
    }
}

// ---------------------------------------------------------------------------
// Neighborhood
// ---------------------------------------------------------------------------

/// Which neighbours a mover may step to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Cardinal and diagonal steps.
    #[default]
    Eight,
    /// Cardinal steps only.
    Four,
}

impl Neighborhood {
    /// Neighbourhood for a direction count of 8 or 4.
    pub const fn from_directions(n: u8) -> Option<Neighborhood> {
        match n {
            8 => Some(Neighborhood::Eight),
            4 => Some(Neighborhood::Four),
            _ => None,
        }
    }

    /// Stride through [`Direction::ALL`]: 1 for eight-way, 2 for cardinal.
    #[inline]
    pub const fn step(self) -> usize {
        match self {
            Neighborhood::Eight => 1,
            Neighborhood::Four => 2,
        }
    }

    /// Candidate directions in clockwise order from north.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().step_by(self.step())
    }
}

// ---------------------------------------------------------------------------
// Walk
// ---------------------------------------------------------------------------

/// Replay a direction sequence from `start`, yielding each tile entered.
pub fn walk(start: Point, dirs: &[Direction]) -> Walk<'_> {
    Walk {
        pos: start,
        dirs: dirs.iter(),
    }
}

/// Iterator returned by [`walk`].
pub struct Walk<'a> {
    pos: Point,
    dirs: std::slice::Iter<'a, Direction>,
}

impl Iterator for Walk<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let d = self.dirs.next()?;
        self.pos = self.pos.step(*d);
        Some(self.pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dirs.size_hint()
    }
}

impl ExactSizeIterator for Walk<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, 0, -1)]
    #[case(Direction::NorthEast, 1, -1)]
    #[case(Direction::East, 1, 0)]
    #[case(Direction::SouthEast, 1, 1)]
    #[case(Direction::South, 0, 1)]
    #[case(Direction::SouthWest, -1, 1)]
    #[case(Direction::West, -1, 0)]
    #[case(Direction::NorthWest, -1, -1)]
    fn delta_table(#[case] dir: Direction, #[case] dx: i32, #[case] dy: i32) {
        assert_eq!(dir.delta(), Point::new(dx, dy));
    }

    #[test]
    fn reverse_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
            assert_eq!(d.delta() + d.reverse().delta(), Point::ZERO);
        }
    }

    #[test]
    fn index_round_trip() {
        for (i, d) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(d.index() as usize, i);
            assert_eq!(Direction::from_index(i as u8), Some(d));
        }
        assert_eq!(Direction::from_index(8), None);
    }

    #[test]
    fn cardinal_directions_are_even() {
        let cardinal: Vec<_> = Direction::ALL.into_iter().filter(|d| d.is_cardinal()).collect();
        assert_eq!(cardinal, Direction::CARDINAL);
    }

    #[rstest]
    #[case((0, 0), (0, 5), Some(Direction::South))]
    #[case((0, 0), (0, -5), Some(Direction::North))]
    #[case((0, 0), (7, 0), Some(Direction::East))]
    #[case((0, 0), (-7, 0), Some(Direction::West))]
    #[case((5, 5), (0, 0), Some(Direction::NorthWest))]
    #[case((0, 0), (3, 3), Some(Direction::SouthEast))]
    #[case((0, 0), (3, -1), Some(Direction::NorthEast))]
    #[case((0, 0), (4, -1), Some(Direction::East))]
    #[case((0, 0), (-1, 4), Some(Direction::South))]
    #[case((0, 0), (-1, 3), Some(Direction::SouthWest))]
    #[case((2, 2), (2, 2), None)]
    fn general_direction(
        #[case] from: (i32, i32),
        #[case] to: (i32, i32),
        #[case] want: Option<Direction>,
    ) {
        let got = Direction::general(Point::new(from.0, from.1), Point::new(to.0, to.1));
        assert_eq!(got, want);
    }

    #[test]
    fn neighborhood_candidates() {
        let eight: Vec<_> = Neighborhood::Eight.directions().collect();
        assert_eq!(eight, Direction::ALL);
        let four: Vec<_> = Neighborhood::Four.directions().collect();
        assert_eq!(four, Direction::CARDINAL);
        assert_eq!(Neighborhood::from_directions(8), Some(Neighborhood::Eight));
        assert_eq!(Neighborhood::from_directions(4), Some(Neighborhood::Four));
        assert_eq!(Neighborhood::from_directions(6), None);
    }

    #[test]
    fn walk_replays_steps() {
        let dirs = [Direction::East, Direction::East, Direction::SouthEast];
        let pts: Vec<_> = walk(Point::new(1, 1), &dirs).collect();
        assert_eq!(
            pts,
            vec![Point::new(2, 1), Point::new(3, 1), Point::new(4, 2)]
        );
        assert_eq!(walk(Point::ZERO, &[]).count(), 0);
    }
}
