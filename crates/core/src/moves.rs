//! Move engine - applies one push to a whole grid
//!
//! Steps for a push in direction `d` with rotation code `r`:
//!
//! 1. rotate the grid by `r` so the push points toward column 0
//! 2. slide, combine and compile every row of the rotated grid
//! 3. rotate the assembled rows back by `-r`
//!
//! Animations are mapped with `r` while each row is processed, so they already
//! carry positions of the caller's (unrotated) grid.

use tracing::trace;

use crate::animation::{compile_row, place_row};
use crate::row::{combine, slide};
use crate::rotation::{rotate, rotate_matrix};
use crate::types::{Direction, Grid, MoveResult};

/// Apply a push. The input grid is never modified.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let r = direction.rotation_code() as i32;
    let size = grid.size();
    let rotated = rotate(grid, r);

    let mut rows = Vec::with_capacity(size);
    let mut animations = Vec::new();
    let mut score_delta = 0u32;

    for (row_index, row) in rotated.rows().iter().enumerate() {
        let slid = slide(row);
        let combined = combine(&slid.row);
        let compiled = compile_row(&slid.moves, &combined.moves);

        animations.extend(place_row(&compiled, row_index, r, size));
        score_delta = score_delta.saturating_add(combined.score);
        rows.push(combined.row);
    }

    let grid = Grid::from_rows_trusted(rotate_matrix(&rows, -r));

    trace!(
        direction = direction.as_str(),
        score_delta,
        ?animations,
        "compiled move"
    );

    MoveResult {
        grid,
        animations,
        score_delta,
    }
}

/// Element-wise comparison; true if any cell differs
pub fn grid_changed(before: &Grid, after: &Grid) -> bool {
    before != after
}
