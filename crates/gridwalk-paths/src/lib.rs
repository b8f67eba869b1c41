//! A* pathfinding over [`gridwalk_grid::Grid`]s.
//!
//! - [`PathFinder::search`] finds a shortest 4-directional path between two
//!   cells, or an empty path when the goal cannot be reached.
//! - [`Heuristic`] is the cost-estimate seam; [`Manhattan`] is the default
//!   and is admissible for unit-cost orthogonal moves.
//! - [`Playback`] hands a finished path out one cell at a time for
//!   incremental presentation.
//!
//! Search state (g, h and f scores, predecessors, open/closed flags) lives
//! in the `PathFinder`, never on the grid. Reusing a `PathFinder` invalidates
//! the previous search's state lazily, so repeated queries do not allocate
//! after warm-up.

mod astar;
mod config;
mod error;
mod heuristic;
mod playback;
mod state;

pub use astar::{PathFinder, find_path};
pub use config::{PathOrder, SameEndpoints, SearchConfig};
pub use error::{InvalidInput, SearchError};
pub use heuristic::{Heuristic, Manhattan, manhattan};
pub use playback::Playback;
pub use state::{ScoreRecord, SearchStats};
