//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data: the engine in `merge2048-core` operates on
//! these types, and the session layer persists them.
//!
//! # Grid
//!
//! A [`Grid`] is a square `N x N` matrix of tile values. Every value is either
//! `0` (empty) or a power of two `>= 2`. Grids are immutable values: the engine
//! never edits a caller's grid in place, it always builds a new one.
//!
//! Coordinates are [`Position`] `{ row, column }`, with `(0, 0)` in the top-left
//! corner.
//!
//! # Directions
//!
//! Each [`Direction`] maps to a rotation code `r` (left=0, up=1, right=2,
//! down=3). Rotating the grid `r` quarter turns turns every push into a push
//! toward column 0, so the engine only implements "slide left".
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Classic 4x4 board |
//! | `INITIAL_TILES` | 2 | Tiles spawned on a fresh board |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance that a spawned tile is a 2 (else 4) |
//! | `ANIMATION_DURATION_MS` | 600 | Length of one move animation |
//! | `EASE_EXPONENT` | 4 | Exponent of the in-out easing curve |
//! | `MAX_TILE` | 2^31 | Largest tile; a pair at this value does not merge |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classic board size
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Number of random tiles placed on a new board
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 2 (otherwise 4)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Spawned tile values
pub const SPAWN_LOW_VALUE: u32 = 2;
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Animation timing (milliseconds)
pub const ANIMATION_DURATION_MS: u32 = 600;

/// Quartic in-out easing
pub const EASE_EXPONENT: f64 = 4.0;

/// Largest tile a `u32` cell can hold. Two tiles at this value never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Errors raised at the engine boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("no free tile left on the grid")]
    NoFreeTile,
}

impl GameError {
    fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidGrid {
            reason: reason.into(),
        }
    }
}

/// Check whether a value may appear in a grid cell
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Square matrix of tile values.
///
/// Construct with [`Grid::from_rows`] (validated) or [`Grid::empty`].
/// Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Grid {
    rows: Vec<Vec<u32>>,
}

impl Grid {
    /// Create an all-zero grid of the given size
    pub fn empty(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::invalid("grid must not be empty"));
        }
        Ok(Self {
            rows: vec![vec![0; size]; size],
        })
    }

    /// Build a grid from rows, checking shape and tile values
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::invalid("grid must not be empty"));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GameError::invalid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            if let Some((c, &v)) = row.iter().enumerate().find(|(_, &v)| !is_valid_tile(v)) {
                return Err(GameError::invalid(format!(
                    "value {} at ({}, {}) is not 0 or a power of two",
                    v, r, c
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Wrap rows that are already known to be a valid grid.
    ///
    /// Used by the engine for grids it derives from a validated grid.
    /// Shape and values are only re-checked in debug builds.
    pub fn from_rows_trusted(rows: Vec<Vec<u32>>) -> Self {
        debug_assert!(
            Self::from_rows(rows.clone()).is_ok(),
            "engine produced an invalid grid: {:?}",
            rows
        );
        Self { rows }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Get the value at a position, None if out of bounds
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.column)).copied()
    }

    /// Return a copy of this grid with one cell replaced
    pub fn with_tile(&self, pos: Position, value: u32) -> Result<Self, GameError> {
        if !is_valid_tile(value) {
            return Err(GameError::invalid(format!(
                "value {} is not 0 or a power of two",
                value
            )));
        }
        if self.get(pos).is_none() {
            return Err(GameError::invalid(format!(
                "position {} is outside a {}x{} grid",
                pos,
                self.size(),
                self.size()
            )));
        }
        let mut rows = self.rows.clone();
        rows[pos.row][pos.column] = value;
        Ok(Self { rows })
    }

    /// All empty cells in row-major order
    pub fn free_tiles(&self) -> Vec<Position> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &v)| v == 0)
                    .map(move |(c, _)| Position::new(r, c))
            })
            .collect()
    }

    pub fn has_free_tile(&self) -> bool {
        self.rows.iter().flatten().any(|&v| v == 0)
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.rows.iter().flatten().map(|&v| v as u64).sum()
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if v == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", v, width = width)?;
                }
            }
        }
        Ok(())
    }
}

/// Push directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Number of quarter turns that align this push with "toward column 0"
    pub fn rotation_code(&self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" | "push-left" => Some(Direction::Left),
            "right" | "r" | "push-right" => Some(Direction::Right),
            "up" | "u" | "push-up" => Some(Direction::Up),
            "down" | "d" | "push-down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Visual transition produced by a move or a spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Animation {
    /// A new tile materializes (spawns only)
    Appear { position: Position, value: u32 },
    /// A tile travels from `from` to `to`, ending with `value`
    Move {
        from: Position,
        to: Position,
        value: u32,
    },
}

impl Animation {
    /// Final value shown by the animated tile
    pub fn value(&self) -> u32 {
        match self {
            Animation::Appear { value, .. } | Animation::Move { value, .. } => *value,
        }
    }

    /// A move that does not go anywhere
    pub fn is_noop(&self) -> bool {
        match self {
            Animation::Appear { .. } => false,
            Animation::Move { from, to, .. } => from == to,
        }
    }
}

/// Output of one push
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    pub animations: Vec<Animation>,
    pub score_delta: u32,
}
