//! Shared pieces of the gridwalk demos: command-line options and a plain
//! text view of a grid with a partially revealed path.

use clap::Parser;
use gridwalk_core::Point;
use gridwalk_grid::{Cell, Grid, GridConfig};
use gridwalk_paths::{PathOrder, SearchConfig};

/// Find a path across a random grid and reveal it one step per tick.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 20)]
    pub cols: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 20)]
    pub rows: i32,

    /// Probability that a cell is a wall
    #[arg(long, default_value_t = 0.2)]
    pub walls: f64,

    /// Seed for obstacle placement (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between revealed steps, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Stop the reveal after this many steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Reveal from the goal back towards the start
    #[arg(long)]
    pub reverse: bool,

    /// Reveal the start cell as the first step
    #[arg(long)]
    pub include_start: bool,
}

impl Args {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig::sized(self.cols, self.rows).with_obstacle_probability(self.walls)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            order: if self.reverse {
                PathOrder::GoalToStart
            } else {
                PathOrder::StartToGoal
            },
            include_start: self.include_start,
            ..Default::default()
        }
    }
}

/// Draw `grid` as text: `#` wall, `.` floor, `*` revealed path, `S`/`E`
/// the corner endpoints.
pub fn render(grid: &Grid, shown: &[Cell]) -> String {
    let start = grid.start().pos();
    let end = grid.end().pos();
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for y in 0..grid.rows() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.cols() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == end {
                'E'
            } else if shown.iter().any(|c| c.pos() == p) {
                '*'
            } else {
                grid.get(p).map_or(' ', |c| c.glyph())
            };
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_paths::find_path;

    #[test]
    fn render_marks_endpoints_and_path() {
        let grid = Grid::from_layout("...\n.#.\n...").unwrap();
        let path = find_path(&grid, grid.start().pos(), grid.end().pos()).unwrap();
        assert_eq!(render(&grid, &[]), "S..\n.#.\n..E");
        assert_eq!(render(&grid, &path[..2]), "S**\n.#.\n..E");
    }

    #[test]
    fn args_map_to_configs() {
        let args = Args::parse_from(["walk", "--cols", "8", "--walls", "0.3", "--reverse"]);
        let g = args.grid_config();
        assert_eq!((g.cols, g.rows), (8, 20));
        assert_eq!(g.obstacle_probability, 0.3);
        let s = args.search_config();
        assert_eq!(s.order, PathOrder::GoalToStart);
        assert!(!s.include_start);
    }
}
