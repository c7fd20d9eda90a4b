//! Distance fields for tests, built the way a flood fill would build them:
//! cost 1 at the source, growing by one per step.

use std::collections::VecDeque;

use wayfield_core::{GridLayout, Neighborhood, Point};

use crate::field::{BLOCKED, DistanceMap, UNSET};

/// Obstacle-free eight-way field flooded from `source`.
pub(crate) fn open_field(layout: GridLayout, source: Point) -> DistanceMap {
    DistanceMap::from_fn(layout, |p| 1 + p.chebyshev(source))
}

/// Breadth-first flood from `source` around `walls`. Walls read as
/// [`BLOCKED`], tiles the flood never reaches as [`UNSET`].
pub(crate) fn flood(
    layout: GridLayout,
    source: Point,
    walls: &[Point],
    neighborhood: Neighborhood,
) -> DistanceMap {
    let mut map = DistanceMap::from_fn(layout, |p| {
        if walls.contains(&p) { BLOCKED } else { UNSET }
    });
    let mut queue = VecDeque::new();
    map.set(source, 1);
    queue.push_back(source);
    while let Some(p) = queue.pop_front() {
        let d = map.at(p);
        for dir in neighborhood.directions() {
            let np = p.step(dir);
            if layout.contains(np) && map.at(np) == UNSET {
                map.set(np, d + 1);
                queue.push_back(np);
            }
        }
    }
    map
}
