//! Rotation module - reduces every push direction to "slide toward column 0"
//!
//! One quarter turn maps `out[i][j] = in[j][n - 1 - i]`. After rotating a grid
//! by a direction's rotation code, pushing that direction is the same as
//! pushing left, so only one slide algorithm exists. The inverse rotation is
//! `-r mod 4`.

use crate::types::{Grid, Position};

/// Normalize a (possibly negative) quarter-turn count to 0..=3
#[inline]
pub fn normalize(quarter_turns: i32) -> u8 {
    quarter_turns.rem_euclid(4) as u8
}

/// Rotate a square matrix by `quarter_turns` quarter turns
pub fn rotate_matrix<T: Copy>(matrix: &[Vec<T>], quarter_turns: i32) -> Vec<Vec<T>> {
    let mut out: Vec<Vec<T>> = matrix.to_vec();
    for _ in 0..normalize(quarter_turns) {
        out = rotate_once(&out);
    }
    out
}

fn rotate_once<T: Copy>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let n = matrix.len();
    (0..n)
        .map(|i| (0..n).map(|j| matrix[j][n - 1 - i]).collect())
        .collect()
}

/// Rotate a grid, returning a new grid
pub fn rotate(grid: &Grid, quarter_turns: i32) -> Grid {
    if normalize(quarter_turns) == 0 {
        return grid.clone();
    }
    Grid::from_rows_trusted(rotate_matrix(grid.rows(), quarter_turns))
}

/// Map a coordinate of the rotated frame back to the original grid.
///
/// `row` is the row index inside the rotated grid and `column` the column
/// produced there (e.g. after a slide).
pub fn map_position(row: usize, quarter_turns: i32, column: usize, size: usize) -> Position {
    let last = size - 1;
    match normalize(quarter_turns) {
        0 => Position::new(row, column),
        1 => Position::new(column, last - row),
        2 => Position::new(last - row, last - column),
        _ => Position::new(last - column, row),
    }
}
