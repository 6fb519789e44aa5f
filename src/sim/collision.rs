//! Axis-separated collision resolution against the tile grid
//!
//! One axis is resolved at a time: horizontal first with the pre-move `y`,
//! then vertical with the already-corrected `x`. The ordering is a
//! deliberate tie-break that decides corner behavior (a body approaching a
//! corner diagonally resolves horizontal penetration first and never snags
//! on a ledge), so callers must not swap it.
//!
//! The leading edge must strictly enter the next tile before a collision is
//! flagged; a body exactly flush with a tile boundary is not colliding. A
//! single step can cross more than one tile boundary (the driver clamps dt
//! at two reference frames, so terminal velocity covers up to ~25 units),
//! so every crossed row/column is checked in motion order and the body
//! clamps against the first solid one.

use glam::Vec2;

use super::level::Level;
use crate::consts::TILE;
use crate::{tile_index, tile_origin};

/// Scan interval along the body edge; half a tile never skips a row/column
const SCAN_STEP: f32 = TILE / 2.0;
/// Inset from the body's top edge when scanning rows
const TOP_INSET: f32 = 1.0;
/// Inset from the body's other edges, so flush contact on the perpendicular
/// axis does not read as a hit on this one
const EDGE_INSET: f32 = 2.0;

/// Outcome of resolving one axis of displacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    /// Corrected coordinate on the resolved axis
    pub coord: f32,
    /// A solid tile halted the displacement; zero the velocity component
    pub hit: bool,
    /// Downward motion was halted (vertical axis only)
    pub grounded: bool,
}

/// Tile index the leading edge has strictly entered. Moving in the positive
/// direction, a coordinate exactly on a tile boundary still belongs to the
/// previous tile (the occupied span is half-open).
#[inline]
fn leading_index(coord: f32, positive: bool) -> i32 {
    let idx = tile_index(coord);
    if positive && coord == tile_origin(idx) {
        idx - 1
    } else {
        idx
    }
}

/// True if any scanned sample between `start` and `end` (inclusive, in
/// half-tile steps) classifies as solid. `classify_at` maps one sample
/// coordinate on the spanned axis to a tile.
#[inline]
fn span_blocked(start: f32, end: f32, classify_at: impl Fn(f32) -> bool) -> bool {
    let mut at = start;
    loop {
        if classify_at(at) {
            return true;
        }
        if at >= end {
            return false;
        }
        at = (at + SCAN_STEP).min(end);
    }
}

/// First tile index the leading edge newly enters between `pre` and `post`
/// (exclusive of `pre`), in motion order, for which `blocked` holds. Empty
/// when the step never crosses a tile boundary.
fn first_blocked(pre: i32, post: i32, positive: bool, blocked: impl Fn(i32) -> bool) -> Option<i32> {
    if positive {
        (pre + 1..=post).find(|&idx| blocked(idx))
    } else {
        (post..pre).rev().find(|&idx| blocked(idx))
    }
}

/// Resolve a horizontal displacement `dx` for a body at `pos` (top-left)
/// of `size`, using the pre-vertical-move `y`.
pub fn resolve_horizontal(level: &Level, pos: Vec2, size: Vec2, dx: f32) -> AxisResolution {
    let moved = pos.x + dx;
    if dx == 0.0 {
        return AxisResolution {
            coord: moved,
            hit: false,
            grounded: false,
        };
    }

    let rightward = dx > 0.0;
    let (pre, post) = if rightward {
        (
            leading_index(pos.x + size.x, true),
            leading_index(moved + size.x, true),
        )
    } else {
        (leading_index(pos.x, false), leading_index(moved, false))
    };

    let top = pos.y + TOP_INSET;
    let bottom = pos.y + size.y - EDGE_INSET;
    let hit = first_blocked(pre, post, rightward, |col| {
        span_blocked(top, bottom, |yy| {
            level.classify(col, tile_index(yy)).is_solid()
        })
    });

    let coord = match hit {
        // flush against the tile boundary
        Some(col) if rightward => tile_origin(col) - size.x,
        Some(col) => tile_origin(col + 1),
        None => moved,
    };

    AxisResolution {
        coord,
        hit: hit.is_some(),
        grounded: false,
    }
}

/// Resolve a vertical displacement `dy` for a body at `pos` (top-left) of
/// `size`, using the already-corrected `x`. Reports ground contact only
/// when downward motion was halted.
pub fn resolve_vertical(level: &Level, pos: Vec2, size: Vec2, dy: f32) -> AxisResolution {
    let moved = pos.y + dy;
    if dy == 0.0 {
        return AxisResolution {
            coord: moved,
            hit: false,
            grounded: false,
        };
    }

    let downward = dy > 0.0;
    let (pre, post) = if downward {
        (
            leading_index(pos.y + size.y, true),
            leading_index(moved + size.y, true),
        )
    } else {
        (leading_index(pos.y, false), leading_index(moved, false))
    };

    let left = pos.x + EDGE_INSET;
    let right = pos.x + size.x - EDGE_INSET;
    let hit = first_blocked(pre, post, downward, |row| {
        span_blocked(left, right, |xx| {
            level.classify(tile_index(xx), row).is_solid()
        })
    });

    let coord = match hit {
        Some(row) if downward => tile_origin(row) - size.y,
        Some(row) => tile_origin(row + 1),
        None => moved,
    };

    AxisResolution {
        coord,
        hit: hit.is_some(),
        grounded: hit.is_some() && downward,
    }
}

/// Clamp velocity to the run-speed and terminal-velocity bounds. Applied
/// after both axes have resolved.
#[inline]
pub fn clamp_velocity(vel: Vec2, max_run_speed: f32, terminal_velocity: f32) -> Vec2 {
    Vec2::new(
        vel.x.clamp(-max_run_speed, max_run_speed),
        vel.y.clamp(-terminal_velocity, terminal_velocity),
    )
}
