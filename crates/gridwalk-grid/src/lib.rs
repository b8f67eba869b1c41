//! Grid model for gridwalk: immutable [`Cell`]s, a [`Grid`] that owns them
//! and their 4-directional adjacency, and seedable obstacle generation.
//!
//! Grids are built in two passes. Every cell is allocated first (its wall
//! flag drawn from an [`ObstaclePolicy`]), then each cell is linked to its
//! in-bounds orthogonal neighbours. Cells never carry search state, so a
//! `&Grid` can be searched by any number of path finders at once.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod obstacles;

pub use cell::Cell;
pub use config::GridConfig;
pub use error::GridError;
pub use grid::Grid;
pub use obstacles::{Bernoulli, ObstaclePolicy, Open};
