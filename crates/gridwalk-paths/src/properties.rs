//! Cross-checks between the two engines on seeded random grids.

use std::collections::HashSet;

use gridwalk_core::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    NoObstacles, Obstacles, find_path_astar, find_path_astar_with_stats, find_path_bfs,
    find_path_bfs_with_stats, in_bounds,
};

fn cells(width: i32, height: i32) -> impl Iterator<Item = Point> {
    (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
}

fn random_obstacles(rng: &mut StdRng, width: i32, height: i32, density: f64) -> HashSet<Point> {
    cells(width, height)
        .filter(|_| rng.random_bool(density))
        .collect()
}

fn assert_valid_path(
    path: &[Point],
    start: Point,
    goal: Point,
    blocked: &impl Obstacles,
    width: i32,
    height: i32,
) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not one step", w[0], w[1]);
    }
    for &p in &path[1..] {
        assert!(in_bounds(p, width, height), "{p} left the grid");
        assert!(!blocked.is_blocked(p), "{p} is blocked");
    }
    let distinct: HashSet<_> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path revisits a cell");
}

#[test]
fn open_grids_agree_on_length() {
    for width in 1..7 {
        for height in 1..7 {
            let all: Vec<_> = cells(width, height).collect();
            for &start in &all {
                for &goal in &all {
                    let bfs = find_path_bfs(start, goal, &NoObstacles, width, height)
                        .unwrap()
                        .unwrap();
                    let astar = find_path_astar(start, goal, &NoObstacles, width, height)
                        .unwrap()
                        .unwrap();
                    let expected = crate::manhattan(start, goal) as usize + 1;
                    assert_eq!(bfs.len(), expected);
                    assert_eq!(astar.len(), expected);
                    assert_valid_path(&astar, start, goal, &NoObstacles, width, height);
                }
            }
        }
    }
}

#[test]
fn random_obstacles_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let width = rng.random_range(1..16);
        let height = rng.random_range(1..16);
        let blocked = random_obstacles(&mut rng, width, height, 0.3);
        let start = Point::new(rng.random_range(0..width), rng.random_range(0..height));
        let goal = Point::new(rng.random_range(0..width), rng.random_range(0..height));

        let (bfs, bfs_visited) =
            find_path_bfs_with_stats(start, goal, &blocked, width, height).unwrap();
        let (astar, astar_visited) =
            find_path_astar_with_stats(start, goal, &blocked, width, height).unwrap();

        assert_eq!(bfs.is_some(), astar.is_some(), "{start} -> {goal}");
        assert!(bfs_visited >= 1 && astar_visited >= 1);
        if let (Some(bfs), Some(astar)) = (bfs, astar) {
            assert_eq!(bfs.len(), astar.len(), "{start} -> {goal}");
            assert_valid_path(&bfs, start, goal, &blocked, width, height);
            assert_valid_path(&astar, start, goal, &blocked, width, height);
        }
    }
}

#[test]
fn astar_explores_less_on_open_grids() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let start = Point::new(rng.random_range(0..30), rng.random_range(0..30));
        let goal = Point::new(rng.random_range(0..30), rng.random_range(0..30));
        let (_, bfs) = find_path_bfs_with_stats(start, goal, &NoObstacles, 30, 30).unwrap();
        let (_, astar) = find_path_astar_with_stats(start, goal, &NoObstacles, 30, 30).unwrap();
        assert!(astar <= bfs, "{start} -> {goal}: astar {astar} > bfs {bfs}");
    }
}

#[test]
fn full_walls_disconnect() {
    // A vertical wall at every column, and a horizontal one at every row.
    for n in 3..8 {
        for x in 1..n - 1 {
            let wall: HashSet<_> = (0..n).map(|y| Point::new(x, y)).collect();
            let start = Point::new(0, n / 2);
            let goal = Point::new(n - 1, n / 2);
            assert_eq!(find_path_bfs(start, goal, &wall, n, n).unwrap(), None);
            assert_eq!(find_path_astar(start, goal, &wall, n, n).unwrap(), None);
        }
        for y in 1..n - 1 {
            let wall: HashSet<_> = (0..n).map(|x| Point::new(x, y)).collect();
            let start = Point::new(n / 2, 0);
            let goal = Point::new(n / 2, n - 1);
            assert_eq!(find_path_bfs(start, goal, &wall, n, n).unwrap(), None);
            assert_eq!(find_path_astar(start, goal, &wall, n, n).unwrap(), None);
        }
    }
}

#[test]
fn searches_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let blocked: HashSet<Point> = (0..9).map(|y| Point::new(5, y)).collect();
                find_path_astar(Point::new(0, i), Point::new(9, i), &blocked, 10, 10)
                    .unwrap()
                    .map(|p| p.len())
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let i = i as i32;
        // Around the wall's single gap at y=9.
        let expected = 9 + 2 * (9 - i) as usize + 1;
        assert_eq!(h.join().unwrap(), Some(expected));
    }
}
