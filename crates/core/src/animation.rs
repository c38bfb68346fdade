//! Animation compiler - turns per-row index moves into grid animations
//!
//! A tile that slides and then merges would otherwise be drawn as two hops
//! with a jump at the midpoint. [`compile_row`] fuses such pairs into a single
//! move, then [`place_row`] maps the result from the rotated frame back to
//! grid positions.
//!
//! Chain matching: slide moves are visited in order, and each one takes the
//! first combine move (in combine order) that starts where the slide ended and
//! has not been taken yet. Under the single-merge rule there is never more
//! than one candidate, but hand-built inputs get the same deterministic result.

use crate::row::IndexMove;
use crate::rotation::map_position;
use crate::types::Animation;

/// Chain slide moves with the combine moves that continue them.
///
/// Output order: slide moves (fused or not) in slide order, then the combine
/// moves no slide move continued. Moves that end where they started are
/// dropped after chaining.
pub fn compile_row(slide_moves: &[IndexMove], combine_moves: &[IndexMove]) -> Vec<IndexMove> {
    let mut taken = vec![false; combine_moves.len()];
    let mut compiled = Vec::with_capacity(slide_moves.len() + combine_moves.len());

    for slide in slide_moves {
        let next = combine_moves
            .iter()
            .enumerate()
            .find(|(j, c)| !taken[*j] && c.from == slide.to);

        match next {
            Some((j, combine)) => {
                taken[j] = true;
                compiled.push(IndexMove::new(slide.from, combine.to, combine.value));
            }
            None => compiled.push(*slide),
        }
    }

    compiled.extend(
        combine_moves
            .iter()
            .zip(&taken)
            .filter(|(_, &t)| !t)
            .map(|(c, _)| *c),
    );

    compiled.retain(|m| !m.is_noop());
    compiled
}

/// Map compiled index moves of one rotated row to grid animations
pub fn place_row(
    moves: &[IndexMove],
    row_index: usize,
    quarter_turns: i32,
    size: usize,
) -> Vec<Animation> {
    moves
        .iter()
        .map(|m| Animation::Move {
            from: map_position(row_index, quarter_turns, m.from, size),
            to: map_position(row_index, quarter_turns, m.to, size),
            value: m.value,
        })
        .collect()
}
