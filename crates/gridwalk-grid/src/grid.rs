//! The [`Grid`] type: owns every [`Cell`] and their orthogonal adjacency.

use std::fmt;

use gridwalk_core::{Point, Range};
use log::debug;
use rand::Rng;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::obstacles::{Bernoulli, ObstaclePolicy, Open};

/// Neighbour offsets in link order: right, left, down, up.
const LINK_DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// Up to four in-bounds neighbour positions of one cell.
#[derive(Debug, Clone, Copy, Default)]
struct Links {
    buf: [Point; 4],
    len: usize,
}

impl Links {
    fn as_slice(&self) -> &[Point] {
        &self.buf[..self.len]
    }
}

/// A `cols × rows` grid of cells with precomputed 4-directional adjacency.
///
/// Every coordinate in `[0, cols) × [0, rows)` has exactly one cell.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
    links: Vec<Links>,
}

impl Grid {
    /// Build a grid where each cell is a wall with `obstacle_probability`,
    /// drawn independently from `rng`. The start and end corners are kept
    /// passable.
    pub fn build<R: Rng + ?Sized>(
        cols: i32,
        rows: i32,
        obstacle_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let policy = Bernoulli::new(obstacle_probability)?;
        Self::generate(cols, rows, &policy, rng)
    }

    /// Build a grid from a [`GridConfig`].
    pub fn with_config<R: Rng + ?Sized>(cfg: &GridConfig, rng: &mut R) -> Result<Self, GridError> {
        let policy =
            Bernoulli::new(cfg.obstacle_probability)?.keep_corners_open(cfg.keep_corners_open);
        Self::generate(cfg.cols, cfg.rows, &policy, rng)
    }

    /// An obstacle-free grid.
    pub fn open(cols: i32, rows: i32) -> Result<Self, GridError> {
        Self::generate(cols, rows, &Open, &mut rand::rng())
    }

    /// Build a grid using an arbitrary obstacle policy.
    pub fn generate<R: Rng + ?Sized>(
        cols: i32,
        rows: i32,
        policy: &impl ObstaclePolicy,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if cols <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        let bounds = Range::sized(cols, rows);
        let cells = bounds
            .iter()
            .map(|p| Cell::new(p, !policy.is_wall(p, bounds, rng)))
            .collect();
        let grid = Self::from_cells(bounds, cells);
        debug!(
            "grid: built {}x{} with {} walls",
            cols,
            rows,
            grid.wall_count()
        );
        Ok(grid)
    }

    /// Parse a layout drawn in ASCII: `#` is a wall, `.` is floor, one line
    /// per row. Surrounding whitespace of the whole string is ignored, but
    /// every line must have the same width.
    pub fn from_layout(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut cells = Vec::new();
        let mut cols: i32 = -1;
        let mut rows: i32 = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                let passable = match ch {
                    '.' => true,
                    '#' => false,
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                };
                cells.push(Cell::new(pos, passable));
                x += 1;
            }
            if cols >= 0 && x != cols {
                return Err(GridError::InconsistentSize(s.to_string()));
            }
            cols = x;
            rows += 1;
        }
        if cols <= 0 {
            return Err(GridError::InvalidDimensions {
                cols: cols.max(0),
                rows,
            });
        }
        Ok(Self::from_cells(Range::sized(cols, rows), cells))
    }

    /// Second construction pass: link every cell to its in-bounds
    /// orthogonal neighbours. `cells` must cover `bounds` in row-major order.
    fn from_cells(bounds: Range, cells: Vec<Cell>) -> Self {
        let links = bounds
            .iter()
            .map(|p| {
                let mut l = Links::default();
                for d in LINK_DIRS {
                    let n = p + d;
                    if bounds.contains(n) {
                        l.buf[l.len] = n;
                        l.len += 1;
                    }
                }
                l
            })
            .collect();
        Self {
            bounds,
            cells,
            links,
        }
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// The rectangle `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `(x, y)`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        let pos = Point::new(x, y);
        self.get(pos).copied().ok_or(GridError::OutOfRange {
            pos,
            bounds: self.bounds,
        })
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.bounds.index_of(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.get(p).is_some_and(|c| c.is_passable())
    }

    /// In-bounds orthogonal neighbours of `p`, walls included, in the order
    /// right, left, down, up. Empty if `p` is outside the grid.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.bounds.index_of(p) {
            Some(i) => self.links[i].as_slice(),
            None => &[],
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    /// The conventional start cell, top-left `(0, 0)`.
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// The conventional end cell, bottom-right `(cols - 1, rows - 1)`.
    pub fn end(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }
}

/// Renders the grid in the layout format accepted by
/// [`Grid::from_layout`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ROOM: &str = "\
...#
.#..
...#";

    #[test]
    fn open_grid_has_every_cell() {
        let g = Grid::open(4, 3).unwrap();
        assert_eq!(g.len(), 12);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.wall_count(), 0);
        for p in g.bounds() {
            assert_eq!(g.cell_at(p.x, p.y).unwrap().pos(), p);
        }
    }

    #[test]
    fn cell_at_out_of_range() {
        let g = Grid::open(3, 3).unwrap();
        assert_eq!(
            g.cell_at(3, 0),
            Err(GridError::OutOfRange {
                pos: Point::new(3, 0),
                bounds: Range::sized(3, 3)
            })
        );
        assert!(g.cell_at(0, -1).is_err());
        assert!(g.get(Point::new(-1, 2)).is_none());
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            Grid::open(0, 5).unwrap_err(),
            GridError::InvalidDimensions { cols: 0, rows: 5 }
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Grid::build(3, -1, 0.2, &mut rng).is_err());
        assert!(matches!(
            Grid::build(3, 3, 2.0, &mut rng),
            Err(GridError::InvalidProbability(_))
        ));
    }

    #[test]
    fn neighbors_are_orthogonal_in_bounds_and_ordered() {
        let g = Grid::open(3, 3).unwrap();
        assert_eq!(
            g.neighbors(Point::new(1, 1)),
            &[
                Point::new(2, 1),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(1, 0)
            ]
        );
        assert_eq!(g.neighbors(Point::new(0, 0)), &[Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(g.neighbors(Point::new(2, 2)).len(), 2);
        assert_eq!(g.neighbors(Point::new(1, 0)).len(), 3);
        assert!(g.neighbors(Point::new(9, 9)).is_empty());
    }

    #[test]
    fn neighbors_are_symmetric() {
        let g = Grid::open(5, 4).unwrap();
        for p in g.bounds() {
            for &n in g.neighbors(p) {
                assert!(g.contains(n));
                assert!(p.is_adjacent(n));
                assert!(g.neighbors(n).contains(&p), "{n} does not link back to {p}");
            }
        }
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let g = Grid::open(1, 1).unwrap();
        assert!(g.neighbors(Point::ZERO).is_empty());
        assert_eq!(g.start(), g.end());
    }

    #[test]
    fn seeded_build_is_deterministic() {
        let a = Grid::build(20, 20, 0.2, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Grid::build(20, 20, 0.2, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
        assert!(a.wall_count() > 0);
    }

    #[test]
    fn build_keeps_corners_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = Grid::build(6, 4, 1.0, &mut rng).unwrap();
        assert!(g.start().is_passable());
        assert!(g.end().is_passable());
        assert_eq!(g.end().pos(), Point::new(5, 3));
        assert_eq!(g.wall_count(), 22);
    }

    #[test]
    fn config_can_close_corners() {
        let cfg = GridConfig {
            cols: 3,
            rows: 2,
            obstacle_probability: 1.0,
            keep_corners_open: false,
        };
        let g = Grid::with_config(&cfg, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(g.wall_count(), 6);
    }

    #[test]
    fn layout_parse() {
        let g = Grid::from_layout(ROOM).unwrap();
        assert_eq!((g.cols(), g.rows()), (4, 3));
        assert!(g.cell_at(3, 0).unwrap().is_wall());
        assert!(g.cell_at(1, 1).unwrap().is_wall());
        assert!(g.cell_at(0, 0).unwrap().is_passable());
        assert_eq!(g.wall_count(), 3);
        assert!(!g.is_passable(Point::new(3, 2)));
        assert!(!g.is_passable(Point::new(4, 0)));
    }

    #[test]
    fn layout_display_round_trip() {
        let g = Grid::from_layout(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn layout_errors() {
        assert!(matches!(
            Grid::from_layout("..\n..."),
            Err(GridError::InconsistentSize(_))
        ));
        assert_eq!(
            Grid::from_layout("..\n.x").unwrap_err(),
            GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(matches!(
            Grid::from_layout("   "),
            Err(GridError::InvalidDimensions { .. })
        ));
    }
}
