//! End-to-end checks of the engine surface: generation, wall editing and
//! bounded searches over generated mazes.

use mazeviz::{Algorithm, Direction, Grid, Maze, MazeConfig, Point};
use mazeviz_gen::MazeGen;
use mazeviz_paths::{Search, bfs_distance, flood_fill, path_len, path_points};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generated(w: i32, h: i32, seed: u64) -> Maze {
    let mut maze = Maze::new(MazeConfig::with_size(w, h).with_seed(seed)).unwrap();
    maze.generate().unwrap();
    maze
}

fn perfect(w: i32, h: i32, seed: u64) -> Grid {
    let mut grid = Grid::new(w, h);
    MazeGen::new(StdRng::seed_from_u64(seed))
        .carve(&mut grid)
        .unwrap();
    grid
}

fn assert_symmetric(grid: &Grid) {
    for c in grid.cells() {
        for d in Direction::ALL {
            if let Some(n) = grid.cell(c.location() + d.offset()) {
                assert_eq!(
                    c.has_wall(d),
                    n.has_wall(d.opposite()),
                    "asymmetric wall at {} toward {:?}",
                    c.location(),
                    d
                );
            }
        }
    }
}

#[test]
fn generated_mazes_are_connected() {
    for (seed, (w, h)) in [(10, 10), (1, 17), (23, 7), (30, 30)].into_iter().enumerate() {
        let maze = generated(w, h, seed as u64);
        let reached = flood_fill(maze.grid(), Point::new(0, 0));
        assert_eq!(reached.len(), maze.grid().len(), "{w}x{h} maze is split");
    }
}

#[test]
fn walls_stay_symmetric_through_edits() {
    let mut maze = generated(9, 7, 11);
    assert_symmetric(maze.grid());
    maze.toggle_wall(Point::new(4, 3), Direction::North).unwrap();
    maze.toggle_wall(Point::new(0, 6), Direction::East).unwrap();
    maze.toggle_wall_segment(Point::new(2, 1), Point::new(2, 6)).unwrap();
    assert_symmetric(maze.grid());
    maze.generate().unwrap();
    assert_symmetric(maze.grid());
    maze.clear_grid();
    assert_symmetric(maze.grid());
}

#[test]
fn clear_after_generate_leaves_no_walls() {
    let mut maze = generated(10, 10, 5);
    assert!(maze.grid().closed_wall_count() > 0);
    maze.clear_grid();
    assert_eq!(maze.grid().closed_wall_count(), 0);
}

#[test]
fn dijkstra_matches_breadth_first_search() {
    for seed in 0..6 {
        let maze = generated(14, 11, seed);
        let braided = maze.grid();
        let tree = perfect(14, 11, seed);
        let pairs = [
            (Point::new(0, 0), Point::new(13, 10)),
            (Point::new(7, 5), Point::new(0, 10)),
            (Point::new(13, 0), Point::new(2, 3)),
        ];
        for grid in [braided, &tree] {
            for &(start, end) in &pairs {
                let run = Search::new(start, end)
                    .dijkstra(grid, usize::MAX)
                    .unwrap()
                    .unwrap();
                assert!(run.reached_end);
                assert_eq!(Some(path_len(&run.path)), bfs_distance(grid, start, end));
            }
        }
    }
}

#[test]
fn astar_matches_dijkstra_on_a_perfect_maze() {
    for seed in 0..4 {
        let grid = perfect(12, 12, seed);
        let search = Search::new(Point::new(0, 0), Point::new(11, 11));
        let d = search.dijkstra(&grid, usize::MAX).unwrap().unwrap();
        let a = search.astar(&grid, usize::MAX, false).unwrap().unwrap();
        assert_eq!(path_len(&a.path), path_len(&d.path));
    }
}

#[test]
fn three_by_three_open_grid() {
    let mut maze = generated(3, 3, 8);
    maze.clear_grid();
    let d = maze.search(Algorithm::Dijkstra, usize::MAX).unwrap().unwrap();
    let a = maze.search(Algorithm::AStarNoTieBreak, usize::MAX).unwrap().unwrap();
    // The open grid has cycles, so several shortest routes exist.
    assert_eq!(path_len(&d.path), 4);
    assert_eq!(path_len(&a.path), 4);
    assert!(a.snapshot.step <= d.snapshot.step);
}

#[test]
fn heuristic_paths_are_valid_and_never_shorter() {
    let maze = generated(16, 16, 21);
    let grid = maze.grid();
    let start = maze.start().unwrap();
    let end = maze.end().unwrap();
    let best = bfs_distance(grid, start, end).unwrap();
    for algo in Algorithm::ALL {
        let run = maze.search(algo, usize::MAX).unwrap().unwrap();
        assert!(run.reached_end, "{} did not reach the end", algo.name());
        assert!(path_len(&run.path) >= best);
        let pts = path_points(&run.path, start, end).unwrap();
        assert!(pts.windows(2).all(|w| grid.is_open_between(w[0], w[1])));
    }
}

#[test]
fn step_zero_is_the_start() {
    let maze = generated(10, 10, 2);
    for algo in Algorithm::ALL {
        let run = maze.search(algo, 0).unwrap().unwrap();
        assert_eq!(run.snapshot.step, 0);
        assert_eq!(run.snapshot.current, Point::new(0, 0));
        assert!(run.snapshot.visited.is_empty());
    }
}

#[test]
fn scrubbing_is_reproducible() {
    let maze = generated(12, 9, 4);
    for algo in Algorithm::ALL {
        let full = maze.search(algo, usize::MAX).unwrap().unwrap();
        let n = full.snapshot.step;
        for step in [1, n / 3, n / 2, n - 1] {
            let a = maze.search(algo, step).unwrap().unwrap();
            let b = maze.search(algo, step).unwrap().unwrap();
            assert_eq!(a.snapshot, b.snapshot);
            assert_eq!(a.snapshot.visited[..], full.snapshot.visited[..step]);
        }
        // Past the end, more steps change nothing.
        let beyond = maze.search(algo, maze.max_step() + 10).unwrap().unwrap();
        assert_eq!(beyond.snapshot, full.snapshot);
    }
}

#[test]
fn disconnected_end_yields_no_snapshot() {
    let mut maze = generated(6, 6, 13);
    let end = maze.end().unwrap();
    for d in [Direction::West, Direction::North] {
        if !maze.grid().cell(end).unwrap().has_wall(d) {
            maze.toggle_wall(end, d).unwrap();
        }
    }
    let first = maze.run_search(Algorithm::Dijkstra, 3).unwrap().cloned();
    assert!(first.is_some());
    for algo in Algorithm::ALL {
        assert!(maze.run_search(algo, maze.max_step()).unwrap().is_none());
    }
    assert_eq!(maze.snapshot().cloned(), first);
}

#[test]
fn concurrent_read_only_searches() {
    let maze = generated(20, 20, 17);
    let (left, right) = std::thread::scope(|s| {
        let l = s.spawn(|| maze.search(Algorithm::Dijkstra, usize::MAX));
        let r = s.spawn(|| maze.search(Algorithm::AStarTieBreak, usize::MAX));
        (l.join().unwrap(), r.join().unwrap())
    });
    let left = left.unwrap().unwrap();
    let right = right.unwrap().unwrap();
    assert!(left.reached_end && right.reached_end);
    assert_eq!(
        left.snapshot,
        maze.search(Algorithm::Dijkstra, usize::MAX).unwrap().unwrap().snapshot
    );
}
