//! Step-by-step delivery of a computed path.
//!
//! The search always finishes before presentation starts. A presenter pulls
//! one cell per tick from a [`Playback`] and may stop at any point; stopping
//! never affects the path itself.

use gridwalk_grid::Cell;

/// Cursor over a finished path, yielding one cell per step.
#[derive(Debug, Clone)]
pub struct Playback {
    path: Vec<Cell>,
    shown: usize,
    stopped: bool,
}

impl Playback {
    pub fn new(path: Vec<Cell>) -> Self {
        Self {
            path,
            shown: 0,
            stopped: false,
        }
    }

    /// The complete path, regardless of progress.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Cells handed out so far, in order.
    pub fn shown(&self) -> &[Cell] {
        &self.path[..self.shown]
    }

    /// Cells not yet handed out.
    pub fn remaining(&self) -> usize {
        self.path.len() - self.shown
    }

    /// Halt playback. Further steps yield nothing until
    /// [`restart`](Self::restart) or [`resume`](Self::resume).
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Continue from where playback was stopped.
    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// Rewind to the first cell and clear the stopped flag.
    pub fn restart(&mut self) {
        self.shown = 0;
        self.stopped = false;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Every cell has been handed out.
    pub fn is_finished(&self) -> bool {
        self.shown == self.path.len()
    }
}

impl From<Vec<Cell>> for Playback {
    fn from(path: Vec<Cell>) -> Self {
        Self::new(path)
    }
}

impl Iterator for Playback {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.stopped {
            return None;
        }
        let c = self.path.get(self.shown).copied()?;
        self.shown += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.stopped { 0 } else { self.remaining() };
        (n, Some(n))
    }
}
