//! Per-frame simulation step
//!
//! Processing order, given a normalized time delta:
//!   1. Manual reset (full reset, lives preserved)
//!   2. Steering / friction / facing
//!   3. Jump (edge-triggered: fires on a fresh press while grounded)
//!   4. Gravity
//!   5. Horizontal then vertical collision resolution (order is load-bearing)
//!   6. Velocity caps
//!   7. Pickup / goal check over every cell the body rectangle spans
//!   8. Fall-death: respawn, or full reset on life exhaustion
//!   9. Elapsed time, camera, HUD snapshot on change

use super::camera::camera_offset;
use super::collision::{clamp_velocity, resolve_horizontal, resolve_vertical};
use super::level::Tile;
use super::state::{GameState, StatsSnapshot};
use crate::consts::FRAME_INTERVAL_MS;
use crate::tuning::Tuning;
use crate::{tile_index, tile_origin};

/// Held movement inputs for a single frame, read once from the input buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Manual full reset (dedicated key)
    pub reset: bool,
}

/// Advance the simulation by one frame. `dt` is the wall-clock delta scaled
/// to the reference frame interval (1.0 at 60 fps, clamped by the driver).
/// Returns a stats snapshot when any HUD-visible value changed.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, tuning: &Tuning) -> Option<StatsSnapshot> {
    if input.reset {
        state.full_reset(false);
        return emit_if_changed(state);
    }

    let p = &mut state.player;

    // steering; friction only when no direction is held
    if input.left {
        p.vel.x -= tuning.move_accel;
        p.facing = -1;
    }
    if input.right {
        p.vel.x += tuning.move_accel;
        p.facing = 1;
    }
    if !input.left && !input.right {
        p.vel.x *= tuning.friction;
    }

    // jump on a fresh press while grounded
    if input.jump && !state.jump_held && p.on_ground {
        p.vel.y = tuning.jump_velocity;
        p.on_ground = false;
    }
    state.jump_held = input.jump;

    // gravity, unconditionally
    p.vel.y += tuning.gravity;

    // horizontal resolve with the pre-move y, vertical with the corrected x
    let h = resolve_horizontal(&state.level, p.pos, p.size, p.vel.x * dt);
    p.pos.x = h.coord;
    if h.hit {
        p.vel.x = 0.0;
    }

    let v = resolve_vertical(&state.level, p.pos, p.size, p.vel.y * dt);
    p.pos.y = v.coord;
    p.on_ground = v.grounded;
    if v.hit {
        p.vel.y = 0.0;
    }

    p.vel = clamp_velocity(p.vel, tuning.max_run_speed, tuning.terminal_velocity);

    collect_overlapped(state, tuning);

    // fall-death past the bottom margin
    if state.player.pos.y > state.fall_death_y() {
        state.stats.lives = state.stats.lives.saturating_sub(1);
        log::info!("fall death at x {:.1}", state.player.pos.x);
        if state.stats.lives == 0 {
            state.full_reset(true);
        } else {
            state.respawn();
        }
    }

    state.stats.time_secs += dt * (FRAME_INTERVAL_MS as f32 / 1000.0);
    state.camera_x = camera_offset(state.player.pos.x, state.level.width());

    emit_if_changed(state)
}

/// Consume coins and latch the goal for every cell the body rectangle
/// overlaps. The spanned range is half-open: an edge exactly flush with a
/// tile boundary does not reach into the next tile.
fn collect_overlapped(state: &mut GameState, tuning: &Tuning) {
    let p = &state.player;
    let col0 = tile_index(p.pos.x);
    let col1 = trailing_index(p.pos.x + p.size.x);
    let row0 = tile_index(p.pos.y);
    let row1 = trailing_index(p.pos.y + p.size.y);

    for row in row0..=row1 {
        for col in col0..=col1 {
            match state.level.classify(col, row) {
                Tile::Coin => {
                    state.level.consume(col, row);
                    state.stats.coins += 1;
                    state.stats.score += tuning.coin_score;
                    log::debug!("coin at ({col}, {row}), total {}", state.stats.coins);
                }
                Tile::Goal if !state.won => {
                    state.won = true;
                    state.stats.score += tuning.goal_bonus;
                    log::info!("goal reached, score {}", state.stats.score);
                }
                _ => {}
            }
        }
    }
}

/// Last tile index covered by a half-open span ending at `edge`
#[inline]
fn trailing_index(edge: f32) -> i32 {
    let idx = tile_index(edge);
    if edge == tile_origin(idx) { idx - 1 } else { idx }
}

/// Snapshot emission with change detection on the HUD-visible fields.
/// Elapsed time advances every frame and is carried by the snapshot but
/// does not by itself trigger an emission.
fn emit_if_changed(state: &mut GameState) -> Option<StatsSnapshot> {
    let snap = state.snapshot();
    let changed = match &state.last_snapshot {
        None => true,
        Some(prev) => !prev.same_hud_fields(&snap),
    };
    if changed {
        state.last_snapshot = Some(snap.clone());
        Some(snap)
    } else {
        None
    }
}
