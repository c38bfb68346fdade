//! Spawn module - random tiles on empty cells
//!
//! A spawn draws twice from the [`RandomSource`]: first the value (2 with
//! probability [`SPAWN_TWO_PROBABILITY`], else 4), then a uniformly chosen
//! empty cell in row-major order.

use crate::rng::{pick_index, RandomSource};
use crate::types::{
    Animation, GameError, Grid, Position, INITIAL_TILES, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
    SPAWN_TWO_PROBABILITY,
};

/// A tile chosen for spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub position: Position,
    pub value: u32,
}

impl SpawnedTile {
    /// The `Appear` animation announcing this tile
    pub fn animation(&self) -> Animation {
        Animation::Appear {
            position: self.position,
            value: self.value,
        }
    }
}

/// Grid after a spawn, plus the tile that was added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawn {
    pub grid: Grid,
    pub tile: SpawnedTile,
}

/// Choose a cell and value without applying them
pub fn pick_spawn(grid: &Grid, rng: &mut impl RandomSource) -> Result<SpawnedTile, GameError> {
    let value = if rng.next_f64() < SPAWN_TWO_PROBABILITY {
        SPAWN_LOW_VALUE
    } else {
        SPAWN_HIGH_VALUE
    };

    let free = grid.free_tiles();
    if free.is_empty() {
        return Err(GameError::NoFreeTile);
    }
    let position = free[pick_index(rng, free.len())];

    Ok(SpawnedTile { position, value })
}

/// Place a random tile on an empty cell.
///
/// Fails with [`GameError::NoFreeTile`] on a full grid.
pub fn spawn_random_tile(grid: &Grid, rng: &mut impl RandomSource) -> Result<Spawn, GameError> {
    let tile = pick_spawn(grid, rng)?;
    let grid = grid.with_tile(tile.position, tile.value)?;
    Ok(Spawn { grid, tile })
}

/// Fresh board: all zeros plus [`INITIAL_TILES`] random tiles
pub fn new_game(size: usize, rng: &mut impl RandomSource) -> Result<Grid, GameError> {
    let mut grid = Grid::empty(size)?;
    for _ in 0..INITIAL_TILES.min(size * size) {
        grid = spawn_random_tile(&grid, rng)?.grid;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Replays a fixed list of draws
    fn scripted(draws: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = draws.into_iter();
        move || iter.next().expect("script exhausted")
    }

    #[test]
    fn test_single_free_cell_is_always_chosen() {
        let grid = Grid::from_rows(vec![vec![2, 4], vec![8, 0]]).unwrap();
        let mut rng = SimpleRng::new(3);
        for _ in 0..50 {
            let spawn = spawn_random_tile(&grid, &mut rng).unwrap();
            assert_eq!(spawn.tile.position, Position::new(1, 1));
            assert_eq!(spawn.grid.get(Position::new(1, 1)), Some(spawn.tile.value));
        }
    }

    #[test]
    fn test_value_threshold() {
        let grid = Grid::empty(2).unwrap();

        let mut rng = scripted(vec![0.89, 0.0]);
        assert_eq!(pick_spawn(&grid, &mut rng).unwrap().value, 2);

        let mut rng = scripted(vec![0.9, 0.0]);
        assert_eq!(pick_spawn(&grid, &mut rng).unwrap().value, 4);
    }

    #[test]
    fn test_position_is_row_major_index() {
        let grid = Grid::from_rows(vec![vec![0, 2], vec![0, 0]]).unwrap();
        // Free cells: (0,0), (1,0), (1,1)
        let mut rng = scripted(vec![0.0, 0.5]);
        assert_eq!(
            pick_spawn(&grid, &mut rng).unwrap().position,
            Position::new(1, 0)
        );
        let mut rng = scripted(vec![0.0, 0.99]);
        assert_eq!(
            pick_spawn(&grid, &mut rng).unwrap().position,
            Position::new(1, 1)
        );
    }

    #[test]
    fn test_full_grid_fails() {
        let grid = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            spawn_random_tile(&grid, &mut rng),
            Err(GameError::NoFreeTile)
        );
    }

    #[test]
    fn test_spawn_leaves_input_untouched() {
        let grid = Grid::empty(3).unwrap();
        let mut rng = SimpleRng::new(5);
        let spawn = spawn_random_tile(&grid, &mut rng).unwrap();
        assert_eq!(grid, Grid::empty(3).unwrap());
        assert_eq!(spawn.grid.free_tiles().len(), 8);
        assert_eq!(
            spawn.tile.animation(),
            Animation::Appear {
                position: spawn.tile.position,
                value: spawn.tile.value,
            }
        );
    }

    #[test]
    fn test_value_distribution() {
        let grid = Grid::empty(4).unwrap();
        let mut rng = SimpleRng::new(2024);
        let trials = 20_000;
        let twos = (0..trials)
            .filter(|_| pick_spawn(&grid, &mut rng).unwrap().value == 2)
            .count();
        let ratio = twos as f64 / trials as f64;
        assert!((0.88..0.92).contains(&ratio), "ratio of twos was {}", ratio);
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let mut rng = SimpleRng::new(42);
        let grid = new_game(4, &mut rng).unwrap();
        assert_eq!(grid.free_tiles().len(), 14);
        assert!(grid
            .rows()
            .iter()
            .flatten()
            .all(|&v| v == 0 || v == 2 || v == 4));

        let tiny = new_game(1, &mut rng).unwrap();
        assert_eq!(tiny.free_tiles().len(), 0);
        assert!(new_game(0, &mut rng).is_err());
    }
}
