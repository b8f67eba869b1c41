use std::collections::BinaryHeap;

use gridwalk_core::{Point, Range};
use gridwalk_grid::{Cell, Grid};
use log::{debug, trace};

use crate::config::{PathOrder, SameEndpoints, SearchConfig};
use crate::error::{InvalidInput, SearchError};
use crate::heuristic::{Heuristic, Manhattan};
use crate::state::{NO_PARENT, Node, NodeRef, ScoreRecord, SearchStats};

/// Find a path with a fresh, default-configured [`PathFinder`].
pub fn find_path(grid: &Grid, start: Point, end: Point) -> Result<Vec<Cell>, SearchError> {
    PathFinder::new().search(grid, start, end)
}

/// A* search engine.
///
/// Owns the per-cell search state and reuses it between calls: every
/// search bumps a generation counter, which resets all scores and
/// predecessors without touching the node array.
pub struct PathFinder<H = Manhattan> {
    config: SearchConfig,
    heuristic: H,
    nodes: Vec<Node>,
    generation: u32,
    bounds: Range,
    stats: Option<SearchStats>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// A finder using the [`Manhattan`] heuristic and default settings.
    pub fn new() -> Self {
        Self::with_heuristic(Manhattan)
    }

    /// A Manhattan finder with the given output conventions.
    pub fn with_config(config: SearchConfig) -> Self {
        let mut pf = Self::new();
        pf.config = config;
        pf
    }
}

impl<H: Heuristic> PathFinder<H> {
    /// A finder using a custom heuristic. It must be admissible for the
    /// returned paths to be shortest.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            config: SearchConfig::default(),
            heuristic,
            nodes: Vec::new(),
            generation: 0,
            bounds: Range::default(),
            stats: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Search from the grid's top-left corner to its bottom-right corner.
    pub fn search_default(&mut self, grid: &Grid) -> Result<Vec<Cell>, SearchError> {
        self.search(grid, grid.start().pos(), grid.end().pos())
    }

    /// Compute a shortest path from `start` to `end` moving orthogonally
    /// through passable cells.
    ///
    /// Returns an empty path when `end` cannot be reached, including when
    /// either endpoint is a wall. The order and whether `start` is included
    /// follow [`SearchConfig`].
    pub fn search(
        &mut self,
        grid: &Grid,
        start: Point,
        end: Point,
    ) -> Result<Vec<Cell>, SearchError> {
        let bounds = grid.bounds();
        let start_idx = bounds
            .index_of(start)
            .ok_or(InvalidInput::StartOutOfGrid(start))?;
        let goal_idx = bounds
            .index_of(end)
            .ok_or(InvalidInput::EndOutOfGrid(end))?;

        let cur_gen = self.begin(bounds);
        debug!("astar: searching {start} -> {end} on {bounds}");

        if !grid.is_passable(start) || !grid.is_passable(end) {
            debug!("astar: endpoint is a wall, no path");
            self.stats = Some(SearchStats::default());
            return Ok(Vec::new());
        }

        if start_idx == goal_idx {
            return match self.config.same_endpoints {
                SameEndpoints::Reject => Err(InvalidInput::SameEndpoints(start).into()),
                SameEndpoints::ZeroLength => {
                    self.seed(start_idx, 0, cur_gen);
                    self.stats = Some(SearchStats {
                        expanded: 0,
                        discovered: 1,
                        cost: Some(0),
                    });
                    Ok(grid.get(start).copied().into_iter().collect())
                }
            };
        }

        self.seed(start_idx, self.heuristic.estimate(start, end), cur_gen);
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            seq: 0,
        });
        let mut next_seq: u32 = 1;
        let mut expanded = 0;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip entries superseded by a cheaper push or already closed.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || cn.closed || cn.f != current.f {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].closed = true;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let cp = bounds.point_at(ci);
            trace!("astar: expand {cp} g={current_g} f={}", current.f);

            for &np in grid.neighbors(cp) {
                if !grid.is_passable(np) {
                    continue;
                }
                let Some(ni) = bounds.index_of(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;
                let h = self.heuristic.estimate(np, end);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                    n.seq = next_seq;
                    next_seq += 1;
                }

                n.g = tentative_g;
                n.h = h;
                n.f = tentative_g + h;
                n.parent = ci;
                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq: n.seq,
                });
            }
        };

        let discovered = next_seq as usize;
        if !found {
            debug!("astar: open set exhausted after {expanded} expansions, no path");
            self.stats = Some(SearchStats {
                expanded,
                discovered,
                cost: None,
            });
            return Ok(Vec::new());
        }

        // Walk predecessors back from the goal; the start is never pushed.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.extend(grid.get(bounds.point_at(ci)).copied());
            ci = self.nodes[ci].parent;
        }
        if self.config.include_start {
            path.extend(grid.get(start).copied());
        }
        if self.config.order == PathOrder::StartToGoal {
            path.reverse();
        }

        let cost = self.nodes[goal_idx].g;
        debug!("astar: found path of cost {cost} after {expanded} expansions");
        self.stats = Some(SearchStats {
            expanded,
            discovered,
            cost: Some(cost),
        });
        Ok(path)
    }

    /// Scores the most recent search recorded for `p`, or `None` if the
    /// search never reached it.
    pub fn score(&self, p: Point) -> Option<ScoreRecord> {
        let i = self.bounds.index_of(p)?;
        let n = self.nodes.get(i)?;
        if self.generation == 0 || n.generation != self.generation {
            return None;
        }
        Some(ScoreRecord {
            g: n.g,
            h: n.h,
            f: n.f,
            came_from: (n.parent != NO_PARENT).then(|| self.bounds.point_at(n.parent)),
            closed: n.closed,
        })
    }

    /// Counters for the most recent search.
    pub fn last_search(&self) -> Option<SearchStats> {
        self.stats
    }

    /// Eagerly clear all search state.
    pub fn reset(&mut self) {
        self.nodes.fill(Node::default());
        self.generation = 0;
        self.stats = None;
    }

    /// Size the node array for `bounds` and open a new generation.
    fn begin(&mut self, bounds: Range) -> u32 {
        if self.nodes.len() < bounds.len() {
            self.nodes.resize(bounds.len(), Node::default());
        }
        self.bounds = bounds;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.generation
    }

    fn seed(&mut self, idx: usize, h: i32, cur_gen: u32) {
        self.nodes[idx] = Node {
            g: 0,
            h,
            f: h,
            parent: NO_PARENT,
            generation: cur_gen,
            seq: 0,
            closed: false,
        };
    }
}
