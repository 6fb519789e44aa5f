//! Draw-command generation
//!
//! `render` is a pure function of the simulation state: background, the
//! visible slice of the tile grid, the player sprite, and the win banner,
//! all expressed as backend-agnostic draw commands in view space (camera
//! already subtracted). No simulation state is mutated here.

use glam::Vec2;

use crate::consts::{TILE, VIEW_H, VIEW_W};
use crate::sim::level::Tile;
use crate::sim::state::GameState;
use crate::tile_index;

/// One backend-agnostic drawing primitive, in view-space world units
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { color: [f32; 4] },
    Rect { x: f32, y: f32, w: f32, h: f32, color: [f32; 4] },
    Disc { cx: f32, cy: f32, radius: f32, color: [f32; 4] },
    Triangle { points: [[f32; 2]; 3], color: [f32; 4] },
    Text { x: f32, y: f32, text: String, color: [f32; 4] },
}

// palette (sRGB 0..1)
const SKY: [f32; 4] = [0.043, 0.071, 0.125, 1.0];
const NIGHT: [f32; 4] = [0.055, 0.106, 0.227, 1.0];
const STAR: [f32; 4] = [0.047, 0.082, 0.188, 1.0];
const BLOCK: [f32; 4] = [0.169, 0.227, 0.353, 1.0];
const BLOCK_FACE: [f32; 4] = [0.231, 0.314, 0.490, 1.0];
const COIN: [f32; 4] = [0.969, 0.788, 0.282, 1.0];
const COIN_GLINT: [f32; 4] = [1.0, 0.949, 0.698, 1.0];
const POLE: [f32; 4] = [0.769, 0.816, 0.902, 1.0];
const PENNANT: [f32; 4] = [0.949, 0.333, 0.353, 1.0];
const HERO_RED: [f32; 4] = [0.937, 0.267, 0.267, 1.0];
const HERO_SKIN: [f32; 4] = [0.945, 0.761, 0.490, 1.0];
const HERO_BLUE: [f32; 4] = [0.145, 0.388, 0.922, 1.0];
const HERO_BLUE_DARK: [f32; 4] = [0.114, 0.306, 0.847, 1.0];
const HERO_BOOT: [f32; 4] = [0.122, 0.161, 0.216, 1.0];
const BANNER_BG: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const STAR_COUNT: u32 = 50;
/// Background parallax factor relative to the camera
const STAR_PARALLAX: f32 = 0.3;

/// Paint the whole frame as draw commands
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(256);
    let camera = state.camera_x;
    let view_w = VIEW_W as f32 * TILE;
    let view_h = VIEW_H as f32 * TILE;

    out.push(DrawCommand::Clear { color: SKY });
    out.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        w: view_w,
        h: view_h,
        color: NIGHT,
    });
    push_starfield(&mut out, camera, view_w, view_h);
    push_tiles(&mut out, state, camera, view_w);
    push_player(&mut out, state, camera);

    if state.won {
        out.push(DrawCommand::Rect {
            x: 20.0,
            y: 20.0,
            w: 140.0,
            h: 26.0,
            color: BANNER_BG,
        });
        out.push(DrawCommand::Text {
            x: 30.0,
            y: 38.0,
            text: "Level Complete!".to_string(),
            color: WHITE,
        });
    }

    out
}

/// Sparse 2x2 stars at hashed positions, drifting at a fraction of the
/// camera speed
fn push_starfield(out: &mut Vec<DrawCommand>, camera: f32, view_w: f32, view_h: f32) {
    let wrap = view_w * 4.0;
    let drift = (camera * STAR_PARALLAX).rem_euclid(wrap);
    for i in 0..STAR_COUNT {
        let x = ((i * 73) as f32).rem_euclid(wrap) - drift;
        let y = 4.0 + ((i * 29) % (view_h as u32 - 8)) as f32;
        out.push(DrawCommand::Rect {
            x,
            y,
            w: 2.0,
            h: 2.0,
            color: STAR,
        });
    }
}

/// Tiles within the visible column range only
fn push_tiles(out: &mut Vec<DrawCommand>, state: &GameState, camera: f32, view_w: f32) {
    let first_col = tile_index(camera).max(0);
    let last_col = tile_index(camera + view_w).min(state.level.width() as i32 - 1);

    for row in 0..state.level.height() as i32 {
        for col in first_col..=last_col {
            let px = col as f32 * TILE - camera;
            let py = row as f32 * TILE;
            match state.level.classify(col, row) {
                Tile::Empty => {}
                Tile::Solid => {
                    out.push(DrawCommand::Rect {
                        x: px,
                        y: py,
                        w: TILE,
                        h: TILE,
                        color: BLOCK,
                    });
                    out.push(DrawCommand::Rect {
                        x: px + 2.0,
                        y: py + 2.0,
                        w: TILE - 4.0,
                        h: TILE - 4.0,
                        color: BLOCK_FACE,
                    });
                }
                Tile::Coin => {
                    let (cx, cy) = (px + TILE / 2.0, py + TILE / 2.0);
                    out.push(DrawCommand::Disc {
                        cx,
                        cy,
                        radius: 5.0,
                        color: COIN,
                    });
                    out.push(DrawCommand::Rect {
                        x: cx - 1.0,
                        y: cy - 3.0,
                        w: 2.0,
                        h: 6.0,
                        color: COIN_GLINT,
                    });
                }
                Tile::Goal => {
                    out.push(DrawCommand::Rect {
                        x: px + TILE / 2.0 - 1.0,
                        y: py,
                        w: 2.0,
                        h: TILE,
                        color: POLE,
                    });
                    out.push(DrawCommand::Triangle {
                        points: [
                            [px + TILE / 2.0, py + 4.0],
                            [px + TILE / 2.0 + 8.0, py + 8.0],
                            [px + TILE / 2.0, py + 12.0],
                        ],
                        color: PENNANT,
                    });
                }
            }
        }
    }
}

/// Pixel-rect hero sprite: (local x, local y, w, h, color) over a
/// 16-unit-wide sprite cell, mirrored about its center when facing left
const SPRITE: [(f32, f32, f32, f32, [f32; 4]); 11] = [
    (4.0, 0.0, 12.0, 4.0, HERO_RED),   // hat brim, extends forward
    (4.0, 2.0, 8.0, 4.0, HERO_RED),    // hat top
    (5.0, 6.0, 6.0, 6.0, HERO_SKIN),   // face
    (3.0, 12.0, 10.0, 8.0, HERO_BLUE), // overalls
    (3.0, 14.0, 10.0, 6.0, HERO_BLUE_DARK),
    (2.0, 12.0, 3.0, 4.0, HERO_RED), // sleeves
    (11.0, 12.0, 3.0, 4.0, HERO_RED),
    (1.0, 15.0, 3.0, 3.0, HERO_SKIN), // hands
    (12.0, 15.0, 3.0, 3.0, HERO_SKIN),
    (3.0, 20.0, 4.0, 3.0, HERO_BOOT), // boots
    (9.0, 20.0, 4.0, 3.0, HERO_BOOT),
];

const SPRITE_CELL: f32 = 16.0;

fn push_player(out: &mut Vec<DrawCommand>, state: &GameState, camera: f32) {
    let p = &state.player;
    let origin = Vec2::new(p.pos.x - camera, p.pos.y);
    let mirrored = p.facing < 0;

    for (lx, ly, w, h, color) in SPRITE {
        let x = if mirrored {
            origin.x + SPRITE_CELL - lx - w
        } else {
            origin.x + lx
        };
        out.push(DrawCommand::Rect {
            x,
            y: origin.y + ly,
            w,
            h,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::camera_offset;

    fn discs(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
            .count()
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let state = GameState::new();
        let commands = render(&state);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn test_visible_range_only() {
        let mut state = GameState::new();
        // camera at the world start: coins at cols 8, 20, 22 are in view,
        // the two at cols 33 and 45 (and the goal at col 60) are not
        state.camera_x = 0.0;
        let commands = render(&state);
        assert_eq!(discs(&commands), 3);
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Triangle { .. }))
        );

        // camera at the world end: only the col-45 coin and the goal remain
        state.camera_x = camera_offset(state.world_px_width(), state.level.width());
        let commands = render(&state);
        assert_eq!(discs(&commands), 1);
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Triangle { .. }))
        );
    }

    #[test]
    fn test_consumed_coin_disappears() {
        let mut state = GameState::new();
        let before = discs(&render(&state));
        state.level.consume(8, 8);
        assert_eq!(discs(&render(&state)), before - 1);
    }

    #[test]
    fn test_banner_only_when_won() {
        let mut state = GameState::new();
        let has_text = |cmds: &[DrawCommand]| {
            cmds.iter()
                .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "Level Complete!"))
        };
        assert!(!has_text(&render(&state)));
        state.won = true;
        assert!(has_text(&render(&state)));
    }

    #[test]
    fn test_sprite_mirrors_with_facing() {
        let mut state = GameState::new();
        state.camera_x = 0.0;
        let right = render(&state);
        state.player.facing = -1;
        let left = render(&state);
        assert_ne!(right, left);
        // same number of primitives either way
        assert_eq!(right.len(), left.len());
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let state = GameState::new();
        let snapshot = state.snapshot();
        let pos = state.player.pos;
        let _ = render(&state);
        assert_eq!(state.snapshot(), snapshot);
        assert_eq!(state.player.pos, pos);
    }
}
