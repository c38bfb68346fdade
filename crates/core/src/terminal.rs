//! Terminal-state detection
//!
//! A grid is terminal when no push changes it. This reuses the move engine and
//! discards its score and animations, so it never touches randomness.

use crate::moves::{apply_move, grid_changed};
use crate::types::{Direction, Grid};

/// Whether pushing `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    grid_changed(grid, &apply_move(grid, direction).grid)
}

/// Directions that change the grid, in [`Direction::ALL`] order
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(grid, d))
        .collect()
}

/// True iff no direction changes the grid
pub fn is_terminal(grid: &Grid) -> bool {
    // A free cell always leaves some tile room to slide.
    if grid.has_free_tile() {
        return false;
    }
    !Direction::ALL.into_iter().any(|d| can_move(grid, d))
}
