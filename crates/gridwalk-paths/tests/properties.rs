//! Whole-engine properties checked over seeded random grids.

use std::collections::VecDeque;

use gridwalk_core::Point;
use gridwalk_grid::{Grid, GridConfig};
use gridwalk_paths::{PathFinder, Playback, SearchConfig, find_path, manhattan};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Breadth-first step counts from `from` over passable cells.
fn bfs_distances(grid: &Grid, from: Point) -> Vec<Option<i32>> {
    let bounds = grid.bounds();
    let mut dist = vec![None; bounds.len()];
    let Some(si) = bounds.index_of(from) else {
        return dist;
    };
    dist[si] = Some(0);
    let mut queue = VecDeque::from([from]);
    while let Some(p) = queue.pop_front() {
        let d = dist[bounds.index_of(p).unwrap()].unwrap();
        for &n in grid.neighbors(p) {
            let ni = bounds.index_of(n).unwrap();
            if grid.is_passable(n) && dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn random_grids() -> impl Iterator<Item = Grid> {
    (0..40u64).map(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let cfg = GridConfig::sized(12 + (seed % 5) as i32, 9 + (seed % 4) as i32)
            .with_obstacle_probability(0.3);
        Grid::with_config(&cfg, &mut rng).unwrap()
    })
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    let grid = Grid::open(7, 5).unwrap();
    let mut pf = PathFinder::new();
    for start in grid.bounds() {
        for end in [Point::new(0, 0), Point::new(6, 4), Point::new(3, 2), Point::new(6, 0)] {
            let path = pf.search(&grid, start, end).unwrap();
            let expected = manhattan(start, end).max(1) as usize;
            assert_eq!(path.len(), expected, "{start} -> {end}");
        }
    }
}

#[test]
fn paths_are_adjacent_steps_over_passable_cells() {
    let mut pf = PathFinder::new();
    for grid in random_grids() {
        let start = grid.start().pos();
        let path = pf.search_default(&grid).unwrap();
        let mut prev = start;
        for c in &path {
            assert!(c.is_passable());
            assert!(prev.is_adjacent(c.pos()), "{prev} -> {}", c.pos());
            prev = c.pos();
        }
        if let Some(last) = path.last() {
            assert_eq!(last.pos(), grid.end().pos());
        }
    }
}

#[test]
fn path_length_matches_bfs_distance() {
    let mut pf = PathFinder::new();
    let mut reachable = 0;
    for grid in random_grids() {
        let dist = bfs_distances(&grid, grid.start().pos());
        let end = grid.end().pos();
        let path = pf.search_default(&grid).unwrap();
        match dist[grid.bounds().index_of(end).unwrap()] {
            Some(d) => {
                reachable += 1;
                assert_eq!(path.len() as i32, d);
                assert_eq!(pf.last_search().unwrap().cost, Some(d));
            }
            None => assert!(path.is_empty()),
        }
    }
    assert!(reachable > 0);
}

#[test]
fn heuristic_never_overestimates() {
    let grid = Grid::open(9, 6).unwrap();
    let end = Point::new(8, 5);
    let dist = bfs_distances(&grid, end);
    for p in grid.bounds() {
        let actual = dist[grid.bounds().index_of(p).unwrap()].unwrap();
        assert!(manhattan(p, end) <= actual);
    }
}

#[test]
fn enclosed_goal_is_unreachable() {
    let grid = Grid::from_layout(
        "\
.....
...#.
..#.#
...#.",
    )
    .unwrap();
    let mut pf = PathFinder::new();
    let path = pf.search(&grid, Point::new(0, 0), Point::new(3, 2)).unwrap();
    assert!(path.is_empty());
    assert_eq!(pf.last_search().unwrap().cost, None);
}

#[test]
fn two_by_two_blocked() {
    let grid = Grid::from_layout(".#\n#.").unwrap();
    assert!(find_path(&grid, Point::new(0, 0), Point::new(1, 1)).unwrap().is_empty());
}

#[test]
fn repeated_searches_are_identical() {
    let mut pf = PathFinder::new();
    for grid in random_grids().take(10) {
        let a = pf.search_default(&grid).unwrap();
        let b = pf.search_default(&grid).unwrap();
        let c = PathFinder::new().search_default(&grid).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn same_seed_same_grid_same_path() {
    let cfg = GridConfig::default();
    let g1 = Grid::with_config(&cfg, &mut StdRng::seed_from_u64(2024)).unwrap();
    let g2 = Grid::with_config(&cfg, &mut StdRng::seed_from_u64(2024)).unwrap();
    assert_eq!(g1.to_string(), g2.to_string());
    assert_eq!(
        find_path(&g1, Point::new(0, 0), Point::new(19, 19)).unwrap(),
        find_path(&g2, Point::new(0, 0), Point::new(19, 19)).unwrap()
    );
}

#[test]
fn one_grid_many_finders_across_threads() {
    let grid = Grid::build(30, 30, 0.2, &mut StdRng::seed_from_u64(5)).unwrap();
    let expected = find_path(&grid, Point::new(0, 0), Point::new(29, 29)).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| find_path(&grid, Point::new(0, 0), Point::new(29, 29)).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn playback_replays_search_result() {
    let grid = Grid::open(3, 3).unwrap();
    let mut pf = PathFinder::with_config(SearchConfig::default());
    let path = pf.search_default(&grid).unwrap();
    let mut pb = Playback::new(path.clone());
    let first_two: Vec<_> = pb.by_ref().take(2).collect();
    pb.stop();
    assert_eq!(first_two, path[..2]);
    assert_eq!(pb.remaining(), 2);
    assert_eq!(pb.path(), &path[..]);
}
