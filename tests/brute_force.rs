use rand::{Rng, SeedableRng, rngs::StdRng};
use yagol::{Cell, FillMode, Grid};

const SEED: u64 = 1337;

/// Counts alive Moore neighbors by scanning, ignoring the stored counts
fn brute_force_count(grid: &Grid, x: usize, y: usize) -> u8 {
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let nx = (x as i64 + dx).rem_euclid(w) as usize;
            let ny = (y as i64 + dy).rem_euclid(h) as usize;
            if grid.array()[ny * grid.width() + nx].is_alive() {
                count += 1;
            }
        }
    }
    count
}

fn assert_counts_consistent(grid: &Grid) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            assert_eq!(
                grid.neighbor_count(x, y).unwrap(),
                brute_force_count(grid, x, y),
                "stale neighbor count at ({x}, {y}) in generation {}",
                grid.generation()
            );
        }
    }
}

/// Applies B3/S23 to a plain alive/dead snapshot
fn brute_force_next(grid: &Grid) -> Vec<bool> {
    let mut next = Vec::with_capacity(grid.len());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let alive = grid.is_alive(x, y).unwrap();
            let n = brute_force_count(grid, x, y);
            next.push(matches!((alive, n), (true, 2) | (_, 3)));
        }
    }
    next
}

fn alive_flags(grid: &Grid) -> Vec<bool> {
    grid.array().iter().map(|c| c.is_alive()).collect()
}

#[test]
fn random_edits_keep_counts_consistent() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for (w, h) in [(3, 3), (4, 7), (16, 9), (31, 32)] {
        let mut grid = Grid::new(w, h).unwrap();
        for _ in 0..2_000 {
            let i = rng.random_range(0..grid.len());
            match rng.random_range(0..10) {
                0..=4 => grid.set_index(i).unwrap(),
                5..=8 => grid.clear_index(i).unwrap(),
                _ => grid.iterate(),
            }
        }
        assert_counts_consistent(&grid);
    }
}

#[test]
fn iterate_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for (w, h) in [(3, 3), (5, 5), (17, 13), (64, 48)] {
        let mut grid = Grid::new(w, h).unwrap();
        FillMode::Random { density: 0.4 }
            .apply(&mut grid, &mut rng)
            .unwrap();

        for _ in 0..30 {
            let expected = brute_force_next(&grid);
            grid.iterate();
            assert_eq!(alive_flags(&grid), expected, "{w}x{h} gen {}", grid.generation());
            assert_counts_consistent(&grid);
        }
    }
}

#[test]
fn edits_between_generations_stay_consistent() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let mut grid = Grid::new(20, 20).unwrap();
    FillMode::Random { density: 0.3 }
        .apply(&mut grid, &mut rng)
        .unwrap();

    for _ in 0..50 {
        grid.iterate();
        for _ in 0..5 {
            let (x, y) = (rng.random_range(0..20), rng.random_range(0..20));
            grid.toggle(x, y).unwrap();
        }
        let expected = brute_force_next(&grid);
        grid.iterate();
        assert_eq!(alive_flags(&grid), expected);
    }
    assert_counts_consistent(&grid);
}

#[test]
fn idempotent_edits_leave_bytes_untouched() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut grid = Grid::new(12, 10).unwrap();
    FillMode::Random { density: 0.5 }
        .apply(&mut grid, &mut rng)
        .unwrap();

    let before = grid.array().to_vec();
    for i in 0..grid.len() {
        if before[i].is_alive() {
            grid.set_index(i).unwrap();
        } else {
            grid.clear_index(i).unwrap();
        }
    }
    assert_eq!(grid.array(), &before[..]);
}

#[test]
fn set_clear_round_trip_on_every_cell() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut grid = Grid::new(9, 7).unwrap();
    FillMode::Random { density: 0.5 }
        .apply(&mut grid, &mut rng)
        .unwrap();

    for i in 0..grid.len() {
        let before = grid.array().to_vec();
        if before[i].is_alive() {
            continue;
        }
        grid.set_index(i).unwrap();
        grid.clear_index(i).unwrap();
        assert_eq!(grid.array(), &before[..], "index {i}");
    }
}

#[test]
fn edges_and_corners_reach_opposite_sides() {
    let (w, h) = (6, 5);
    let edges = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1), (0, 2), (3, h - 1)];
    for (x, y) in edges {
        let mut grid = Grid::new(w, h).unwrap();
        grid.set(x, y).unwrap();
        assert_counts_consistent(&grid);
        assert_eq!(grid.array().iter().map(|c| c.neighbor_count() as usize).sum::<usize>(), 8);

        grid.clear(x, y).unwrap();
        assert!(grid.array().iter().all(|&c| c == Cell::DEAD));
    }
}

#[test]
fn ring_around_dead_center() {
    for (w, h) in [(5, 5), (8, 6)] {
        let mut grid = Grid::new(w, h).unwrap();
        for y in 1..=3 {
            for x in 1..=3 {
                if (x, y) != (2, 2) {
                    grid.set(x, y).unwrap();
                }
            }
        }
        assert_eq!(grid.neighbor_count(2, 2).unwrap(), brute_force_count(&grid, 2, 2));
        assert_eq!(grid.neighbor_count(2, 2).unwrap(), 8);

        let expected = brute_force_next(&grid);
        grid.iterate();
        assert_eq!(alive_flags(&grid), expected);
        // overcrowded center stays dead
        assert_eq!(grid.is_alive(2, 2), Ok(false));
    }
}

#[test]
fn block_survives_many_generations() {
    let mut grid = Grid::new(4, 4).unwrap();
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        grid.set(x, y).unwrap();
    }
    let start = grid.array().to_vec();
    for _ in 0..20 {
        grid.iterate();
        assert_eq!(grid.array(), &start[..]);
    }
}

#[test]
fn blinker_has_period_two_across_the_seam() {
    // straddles the vertical seam at x = 0
    let mut grid = Grid::new(8, 8).unwrap();
    for x in [7, 0, 1] {
        grid.set(x, 4).unwrap();
    }
    let start = grid.array().to_vec();

    grid.iterate();
    let vertical: Vec<_> = (0..grid.len())
        .filter(|&i| grid.array()[i].is_alive())
        .map(|i| grid.torus().coords(i))
        .collect();
    assert_eq!(vertical, vec![(0, 3), (0, 4), (0, 5)]);

    grid.iterate();
    assert_eq!(grid.array(), &start[..]);
}

#[test]
fn resize_always_yields_dead_grid() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut grid = Grid::new(10, 10).unwrap();
    for (w, h) in [(3, 4), (20, 5), (10, 10)] {
        FillMode::All.apply(&mut grid, &mut rng).unwrap();
        grid.iterate();

        grid.resize(w, h).unwrap();
        assert_eq!((grid.width(), grid.height()), (w, h));
        assert_eq!(grid.array().len(), w * h);
        assert!(grid.array().iter().all(|&c| c == Cell::DEAD));
        assert_counts_consistent(&grid);
    }
}
