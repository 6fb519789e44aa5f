//! Coin Run - a tile-based 2D platformer engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level grid, collision, game state)
//! - `renderer`: Pure state -> draw-command geometry
//! - `input`: Logical key mapping and the per-frame held-key buffer
//! - `hud`: Stats snapshot sink for an external HUD
//! - `driver`: Frame driver (delta normalization, stop semantics)
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::{HudEmitter, StatsSink};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Tile edge length in world units
    pub const TILE: f32 = 16.0;
    /// Default visual scale multiplier (display only, never touches sim coords)
    pub const SCALE: f32 = 3.0;
    /// Viewport width in tiles
    pub const VIEW_W: u32 = 24;
    /// Viewport height in tiles
    pub const VIEW_H: u32 = 14;

    /// Reference frame interval the simulation is tuned against (~60 fps)
    pub const FRAME_INTERVAL_MS: f64 = 16.67;
    /// Maximum normalized frame scale (long pauses must not tunnel the body)
    pub const MAX_FRAME_SCALE: f32 = 2.0;

    /// Downward acceleration per reference frame
    pub const GRAVITY: f32 = 0.45;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -7.8;
    /// Horizontal acceleration per reference frame while steering
    pub const MOVE_ACCEL: f32 = 2.1;
    /// Velocity multiplier per reference frame with no steering input
    pub const FRICTION: f32 = 0.85;
    /// Horizontal speed cap (both directions)
    pub const MAX_RUN_SPEED: f32 = 6.0;
    /// Vertical speed cap (terminal velocity, both directions)
    pub const TERMINAL_VELOCITY: f32 = 12.0;

    /// Player body size in world units
    pub const PLAYER_W: f32 = 12.0;
    pub const PLAYER_H: f32 = 16.0;
    /// Spawn column (top-left of the body), in tiles from the level origin
    pub const SPAWN_COL: f32 = 2.0;

    /// Score granted per coin
    pub const COIN_SCORE: u64 = 100;
    /// Score granted once when the goal is reached
    pub const GOAL_BONUS: u64 = 500;
    /// Lives at the start of a run
    pub const STARTING_LIVES: u32 = 3;
    /// Tiles below the bottom row before a fall counts as death
    pub const FALL_MARGIN_TILES: f32 = 2.0;
}

/// Tile index containing a world coordinate (floor toward negative infinity)
#[inline]
pub fn tile_index(world: f32) -> i32 {
    (world / consts::TILE).floor() as i32
}

/// World coordinate of a tile's origin (top-left corner)
#[inline]
pub fn tile_origin(index: i32) -> f32 {
    index as f32 * consts::TILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_index_rounds_down() {
        assert_eq!(tile_index(0.0), 0);
        assert_eq!(tile_index(15.9), 0);
        assert_eq!(tile_index(16.0), 1);
        assert_eq!(tile_index(-0.1), -1);
    }

    #[test]
    fn test_tile_origin_inverts_index() {
        for i in [-3, 0, 1, 42] {
            assert_eq!(tile_index(tile_origin(i)), i);
        }
    }
}
