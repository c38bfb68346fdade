//! Easing curve for tile motion
//!
//! Renderers interpolate a moving tile between its `from` and `to` cells with
//! a symmetric in-out power curve. `g = 4` (quartic) is the default.

use crate::types::{Position, EASE_EXPONENT};

/// In-out power easing.
///
/// `t` is clamped to `[0, 1]`; the curve maps 0 to 0, 0.5 to 0.5 and 1 to 1.
pub fn ease(t: f64, g: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        0.5 * (2.0 * t).powf(g)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powf(g)
    }
}

/// Interpolated `(row, column)` of a tile moving from `from` to `to`
pub fn ease_between(from: Position, to: Position, t: f64, g: f64) -> (f64, f64) {
    let k = ease(t, g);
    let lerp = |a: usize, b: usize| a as f64 + (b as f64 - a as f64) * k;
    (lerp(from.row, to.row), lerp(from.column, to.column))
}

/// [`ease_between`] with the default exponent
pub fn ease_default(from: Position, to: Position, t: f64) -> (f64, f64) {
    ease_between(from, to, t, EASE_EXPONENT)
}
