use gridwalk_core::Point;

/// Scores recorded for one cell by the most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    /// Cost from the start along the best known path.
    pub g: i32,
    /// Heuristic estimate of the remaining cost to the goal.
    pub h: i32,
    /// `g + h`, the expansion priority.
    pub f: i32,
    /// Predecessor on the best known path; `None` for the start.
    pub came_from: Option<Point>,
    /// Whether the cell was finalized (moved to the closed set).
    pub closed: bool,
}

/// Counters describing the most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells moved to the closed set.
    pub expanded: usize,
    /// Cells ever added to the open set, start included.
    pub discovered: usize,
    /// Number of steps of the path found, `None` when unreachable.
    pub cost: Option<i32>,
}

// ---------------------------------------------------------------------------
// Internal per-cell node, indexed by the grid's row-major index
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    /// Search generation that last touched this node. Nodes from older
    /// generations read as unvisited.
    pub(crate) generation: u32,
    /// Order of first entry into the open set; breaks f ties.
    pub(crate) seq: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            seq: 0,
            closed: false,
        }
    }
}

/// Open-set entry, ordered for `BinaryHeap` so that the smallest `f` pops
/// first and equal `f` pops in discovery order.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
