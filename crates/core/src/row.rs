//! Row module - slide and combine for a single row pushed toward index 0
//!
//! A push is two passes over each row:
//!
//! 1. [`slide`] packs non-zero tiles to the front, keeping their order.
//! 2. [`combine`] merges adjacent equal tiles of the packed row. A tile merges
//!    with at most one neighbour, and a merged tile never merges again in the
//!    same push because the scan reads the packed input, not its own output.
//!
//! Two tiles at [`MAX_TILE`] never merge, since their sum does not fit a cell.
//!
//! Both passes record index-level moves ([`IndexMove`]) that the animation
//! compiler later chains and maps to grid positions.

use crate::types::MAX_TILE;

/// A tile moving between two indices of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexMove {
    pub from: usize,
    pub to: usize,
    /// Value the tile shows when it arrives
    pub value: u32,
}

impl IndexMove {
    pub const fn new(from: usize, to: usize, value: u32) -> Self {
        Self { from, to, value }
    }

    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Result of [`slide`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideResult {
    pub row: Vec<u32>,
    /// One entry per tile whose index changed
    pub moves: Vec<IndexMove>,
}

/// Result of [`combine`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombineResult {
    pub row: Vec<u32>,
    /// Merge sources always appear in pairs (a source may equal its target);
    /// unmerged tiles only appear when their index changed.
    pub moves: Vec<IndexMove>,
    /// Sum of the merged values
    pub score: u32,
    /// Number of merged pairs
    pub merges: usize,
}

/// Remove gaps, keeping the order of non-zero tiles, and pad with zeros
pub fn slide(row: &[u32]) -> SlideResult {
    let mut packed = Vec::with_capacity(row.len());
    let mut moves = Vec::new();

    for (i, &value) in row.iter().enumerate() {
        if value == 0 {
            continue;
        }
        let to = packed.len();
        if to != i {
            moves.push(IndexMove::new(i, to, value));
        }
        packed.push(value);
    }

    packed.resize(row.len(), 0);
    SlideResult { row: packed, moves }
}

/// Merge adjacent equal tiles of an already slid row
pub fn combine(row: &[u32]) -> CombineResult {
    let mut out = Vec::with_capacity(row.len());
    let mut moves = Vec::new();
    let mut score = 0u32;
    let mut merges = 0usize;

    let mut i = 0;
    while i < row.len() {
        let value = row[i];
        if value == 0 {
            i += 1;
            continue;
        }

        let to = out.len();
        // Tiles at MAX_TILE have no representable sum and stay put.
        if value < MAX_TILE && row.get(i + 1) == Some(&value) {
            let merged = value * 2;
            moves.push(IndexMove::new(i, to, merged));
            moves.push(IndexMove::new(i + 1, to, merged));
            out.push(merged);
            score = score.saturating_add(merged);
            merges += 1;
            // The partner is consumed; it can't start another pair.
            i += 2;
        } else {
            if to != i {
                moves.push(IndexMove::new(i, to, value));
            }
            out.push(value);
            i += 1;
        }
    }

    out.resize(row.len(), 0);
    CombineResult {
        row: out,
        moves,
        score,
        merges,
    }
}
