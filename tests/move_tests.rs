//! Move engine tests - scenarios and properties over generated grids

use merge2048::core::{
    apply_move, combine, grid_changed, is_terminal, rotate, slide, spawn_random_tile, IndexMove,
    SimpleRng,
};
use merge2048::types::{Animation, Direction, GameError, Grid, Position};

/// Random grid with roughly a third of the cells empty
fn random_grid(rng: &mut SimpleRng, size: usize) -> Grid {
    let rows = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| match rng.next_range(3) {
                    0 => 0,
                    _ => 2u32 << rng.next_range(4),
                })
                .collect::<Vec<u32>>()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn sample_grids() -> Vec<Grid> {
    let mut rng = SimpleRng::new(2048);
    (0..200)
        .map(|i| {
            let size = 2 + i % 4;
            random_grid(&mut rng, size)
        })
        .collect()
}

#[test]
fn test_slide_scenario() {
    let result = slide(&[2, 2, 0, 4]);
    assert_eq!(result.row, vec![2, 2, 4, 0]);
    assert_eq!(result.moves, vec![IndexMove::new(3, 2, 4)]);
}

#[test]
fn test_combine_scenario() {
    let result = combine(&[2, 2, 4, 0]);
    assert_eq!(result.row, vec![4, 4, 0, 0]);
    assert_eq!(result.score, 4);
}

#[test]
fn test_full_row_combine_scenario() {
    let result = combine(&[2, 2, 2, 2]);
    assert_eq!(result.row, vec![4, 4, 0, 0]);
    assert_eq!(result.score, 8);
    assert_eq!(result.merges, 2);
    // Every tile took part in a merge: four sources, two per target.
    assert_eq!(result.moves.len(), 4);
}

#[test]
fn test_apply_move_scenario() {
    let grid = Grid::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
    let result = apply_move(&grid, Direction::Left);

    assert_eq!(result.grid, Grid::from_rows(vec![vec![4, 0], vec![0, 0]]).unwrap());
    assert_eq!(result.score_delta, 4);
    assert_eq!(
        result.animations,
        vec![Animation::Move {
            from: Position::new(0, 1),
            to: Position::new(0, 0),
            value: 4,
        }]
    );
}

#[test]
fn test_spawn_into_last_free_cell() {
    let grid = Grid::from_rows(vec![vec![2, 4, 8], vec![16, 0, 32], vec![64, 128, 256]]).unwrap();
    let mut rng = SimpleRng::new(77);
    let trials = 10_000;
    let mut fours = 0;
    for _ in 0..trials {
        let spawn = spawn_random_tile(&grid, &mut rng).unwrap();
        assert_eq!(spawn.tile.position, Position::new(1, 1));
        if spawn.tile.value == 4 {
            fours += 1;
        } else {
            assert_eq!(spawn.tile.value, 2);
        }
    }
    let ratio = fours as f64 / trials as f64;
    assert!((0.08..0.12).contains(&ratio), "ratio of fours was {}", ratio);
}

#[test]
fn test_spawn_on_full_grid_fails() {
    let grid = Grid::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
    let mut rng = SimpleRng::new(1);
    assert_eq!(
        spawn_random_tile(&grid, &mut rng).unwrap_err(),
        GameError::NoFreeTile
    );
}

#[test]
fn test_rotation_properties() {
    for grid in sample_grids() {
        for r in -3..4 {
            assert_eq!(rotate(&rotate(&grid, r), (4 - r).rem_euclid(4)), grid);
        }
        let mut g = grid.clone();
        for _ in 0..4 {
            g = rotate(&g, 1);
        }
        assert_eq!(g, grid);
    }
}

#[test]
fn test_moves_preserve_sum_and_score() {
    for grid in sample_grids() {
        for dir in Direction::ALL {
            let result = apply_move(&grid, dir);
            assert_eq!(result.grid.sum(), grid.sum(), "{:?} changed the sum", dir);
            assert_eq!(result.score_delta % 4, 0);
            if result.score_delta > 0 {
                assert!(grid_changed(&grid, &result.grid));
            }
        }
    }
}

#[test]
fn test_no_noop_animations() {
    for grid in sample_grids() {
        for dir in Direction::ALL {
            for anim in apply_move(&grid, dir).animations {
                match anim {
                    Animation::Move { from, to, .. } => assert_ne!(from, to),
                    Animation::Appear { .. } => panic!("moves never emit Appear"),
                }
            }
        }
    }
}

#[test]
fn test_move_is_idempotent_without_merges() {
    // Once a push has nothing left to merge, repeating it changes nothing.
    for grid in sample_grids() {
        for dir in Direction::ALL {
            let mut g = grid.clone();
            loop {
                let result = apply_move(&g, dir);
                if !grid_changed(&g, &result.grid) {
                    assert!(result.animations.is_empty());
                    assert_eq!(result.score_delta, 0);
                    break;
                }
                g = result.grid;
            }
        }
    }
}

#[test]
fn test_single_merge_per_tile() {
    for grid in sample_grids() {
        for row in grid.rows() {
            let slid = slide(row);
            let combined = combine(&slid.row);
            // Each output tile is either copied or the sum of exactly one pair.
            let tiles_in = slid.row.iter().filter(|&&v| v != 0).count();
            let tiles_out = combined.row.iter().filter(|&&v| v != 0).count();
            assert_eq!(tiles_in - tiles_out, combined.merges);
        }
    }
}

#[test]
fn test_terminal_detection() {
    for grid in sample_grids() {
        if grid.has_free_tile() {
            assert!(!is_terminal(&grid));
            continue;
        }
        let n = grid.size();
        let has_pair = (0..n).any(|r| {
            (0..n).any(|c| {
                let v = grid.get(Position::new(r, c));
                (c + 1 < n && v == grid.get(Position::new(r, c + 1)))
                    || (r + 1 < n && v == grid.get(Position::new(r + 1, c)))
            })
        });
        assert_eq!(is_terminal(&grid), !has_pair, "grid:\n{}", grid);
    }
}
