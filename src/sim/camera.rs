//! Horizontal camera framing
//!
//! The offset is derived from the player position every frame and is never
//! authoritative state; `GameState.camera_x` is only a cache of this value.

use crate::consts::{TILE, VIEW_W};

/// Viewport offset that keeps the player a third of the way into the view,
/// clamped so the camera never shows past either end of the world.
pub fn camera_offset(player_x: f32, level_width_tiles: u32) -> f32 {
    let view_px = VIEW_W as f32 * TILE;
    let world_px = level_width_tiles as f32 * TILE;
    (player_x - view_px / 3.0).clamp(0.0, (world_px - view_px).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_at_world_start() {
        assert_eq!(camera_offset(0.0, 64), 0.0);
        assert_eq!(camera_offset(100.0, 64), 0.0);
    }

    #[test]
    fn test_follows_player_mid_world() {
        let view_px = VIEW_W as f32 * TILE; // 384
        let x = 500.0;
        assert_eq!(camera_offset(x, 64), x - view_px / 3.0);
    }

    #[test]
    fn test_clamped_at_world_end() {
        let view_px = VIEW_W as f32 * TILE;
        let world_px = 64.0 * TILE;
        assert_eq!(camera_offset(world_px, 64), world_px - view_px);
    }

    #[test]
    fn test_world_narrower_than_view_pins_to_zero() {
        assert_eq!(camera_offset(300.0, 10), 0.0);
    }
}
