//! Obstacle placement policies.
//!
//! A policy decides, cell by cell, whether a freshly allocated cell is a
//! wall. Randomness always comes from the caller's `rng`, so seeding it
//! (e.g. `StdRng::seed_from_u64`) makes a layout fully reproducible.

use crate::error::GridError;
use gridwalk_core::{Point, Range};
use rand::Rng;

/// Decides which cells of a new grid are walls.
pub trait ObstaclePolicy {
    /// Called once per position of `bounds`, in row-major order.
    fn is_wall<R: Rng + ?Sized>(&self, p: Point, bounds: Range, rng: &mut R) -> bool;
}

/// No walls at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Open;

impl ObstaclePolicy for Open {
    fn is_wall<R: Rng + ?Sized>(&self, _p: Point, _bounds: Range, _rng: &mut R) -> bool {
        false
    }
}

/// Independent per-cell coin flip: each cell is a wall with `probability`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    probability: f64,
    keep_corners_open: bool,
}

impl Default for Bernoulli {
    fn default() -> Self {
        Self {
            probability: 0.2,
            keep_corners_open: true,
        }
    }
}

impl Bernoulli {
    /// Create a policy with the given wall probability. Corners are kept
    /// open by default.
    pub fn new(probability: f64) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        Ok(Self {
            probability,
            ..Default::default()
        })
    }

    /// Whether the top-left and bottom-right corners are forced passable
    /// (builder).
    pub fn keep_corners_open(mut self, keep: bool) -> Self {
        self.keep_corners_open = keep;
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl ObstaclePolicy for Bernoulli {
    fn is_wall<R: Rng + ?Sized>(&self, p: Point, bounds: Range, rng: &mut R) -> bool {
        // Always draw, so forcing the corners open does not shift the
        // sequence seen by the remaining cells.
        let r: f64 = rng.random();
        if self.keep_corners_open && (p == bounds.min || p == bounds.max.shift(-1, -1)) {
            return false;
        }
        r < self.probability
    }
}
