//! Core game logic module - pure, deterministic, and testable
//!
//! This crate computes legal state transitions for the tile-merging puzzle.
//! It has **no state of its own** and no dependencies on UI, storage, or I/O:
//!
//! - **Pure**: every operation is a function of its inputs; grids are never
//!   modified in place
//! - **Deterministic**: randomness only enters through [`RandomSource`], so a
//!   seeded [`SimpleRng`] replays identical games
//! - **Portable**: rendering, input and persistence belong to the caller
//!
//! # Module Structure
//!
//! - [`rotation`]: quarter-turn rotation and position mapping between frames
//! - [`row`]: slide and combine for a single row pushed toward index 0
//! - [`animation`]: chaining slide/combine moves and mapping them to the grid
//! - [`moves`]: applying a push to a whole grid
//! - [`spawn`]: random tiles on empty cells
//! - [`terminal`]: detecting that no push changes the grid
//! - [`ease`](mod@ease): easing curve for animated tile motion
//! - [`rng`]: randomness source trait and seeded LCG
//!
//! # Game Rules
//!
//! - A push slides every tile toward one edge, closing gaps
//! - Two adjacent equal tiles merge into their sum; a tile merges at most once
//!   per push, and pairs nearest the pushed edge merge first
//! - Tiles at `MAX_TILE` (2^31) never merge
//! - Each merge adds the merged value to the score
//! - After a push that changed the grid, one tile spawns on a random empty
//!   cell: a 2 with probability 0.9, otherwise a 4
//! - The game is over when no push changes the grid
//!
//! # Example
//!
//! ```
//! use merge2048_core::{apply_move, grid_changed, is_terminal, spawn_random_tile, SimpleRng};
//! use merge2048_core::types::{Direction, Grid};
//!
//! let grid = Grid::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
//! let result = apply_move(&grid, Direction::Left);
//! assert_eq!(result.score_delta, 4);
//!
//! if grid_changed(&grid, &result.grid) {
//!     let mut rng = SimpleRng::new(12345);
//!     let spawn = spawn_random_tile(&result.grid, &mut rng).unwrap();
//!     assert!(!is_terminal(&spawn.grid));
//! }
//! ```

pub mod animation;
pub mod ease;
pub mod moves;
pub mod rng;
pub mod rotation;
pub mod row;
pub mod spawn;
pub mod terminal;

pub use merge2048_types as types;

// Re-export commonly used items for convenience
pub use animation::{compile_row, place_row};
pub use ease::{ease, ease_between, ease_default};
pub use moves::{apply_move, grid_changed};
pub use rng::{RandomSource, SimpleRng};
pub use rotation::{map_position, rotate};
pub use row::{combine, slide, CombineResult, IndexMove, SlideResult};
pub use spawn::{new_game, pick_spawn, spawn_random_tile, Spawn, SpawnedTile};
pub use terminal::{can_move, is_terminal, legal_moves};
