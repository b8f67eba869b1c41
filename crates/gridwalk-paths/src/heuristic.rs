use gridwalk_core::Point;

/// Estimates the remaining cost between two positions.
///
/// Must never overestimate the true cost (admissible), otherwise A* may
/// return a path that is not shortest.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// The [`manhattan`] heuristic. Admissible and consistent for
/// 4-directional movement with unit step cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
