//! The [`Cell`] type: one grid position and its wall flag.

use gridwalk_core::Point;

/// A single grid position.
///
/// Cells are fixed once their grid is built: neither the position nor the
/// passable flag can change afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    passable: bool,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Point, passable: bool) -> Self {
        Self { pos, passable }
    }

    /// A walkable cell at `pos`.
    #[inline]
    pub const fn floor(pos: Point) -> Self {
        Self::new(pos, true)
    }

    /// An impassable cell at `pos`.
    #[inline]
    pub const fn wall(pos: Point) -> Self {
        Self::new(pos, false)
    }

    #[inline]
    pub const fn pos(self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        self.passable
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        !self.passable
    }

    /// Layout character for this cell: `#` for walls, `.` otherwise.
    #[inline]
    pub const fn glyph(self) -> char {
        if self.passable { '.' } else { '#' }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::wall(Point::new(5, 6));
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
