//! Game state and core simulation types
//!
//! The whole per-frame mutable bundle (grid, body, stats, camera) lives in
//! one owned `GameState` aggregate passed by reference into each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Level, level_one};
use crate::consts::*;

/// The player's rectangular physical body
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in world units
    pub pos: Vec2,
    /// Body size; fixed for the session
    pub size: Vec2,
    pub vel: Vec2,
    /// True when downward motion was halted by a solid tile this frame
    pub on_ground: bool,
    /// Facing sign: +1 right, -1 left
    pub facing: i8,
}

impl Player {
    /// A player at the fixed spawn point with zero velocity
    pub fn at_spawn() -> Self {
        Self {
            pos: Vec2::new(SPAWN_COL * TILE, 0.0),
            size: Vec2::new(PLAYER_W, PLAYER_H),
            vel: Vec2::ZERO,
            on_ground: false,
            facing: 1,
        }
    }

    /// Return the body to the spawn point, dropping all motion
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(SPAWN_COL * TILE, 0.0);
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Derived per-run statistics. `score` and `coins` only ever increase
/// within a run; a full reset zeroes them.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub score: u64,
    pub coins: u32,
    pub lives: u32,
    pub time_secs: f32,
}

/// The stats snapshot handed to the external HUD consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub score: u64,
    pub coins: u32,
    pub lives: u32,
    pub time_secs: f32,
    /// 1-based level indicator
    pub level: u32,
    pub won: bool,
}

impl StatsSnapshot {
    /// Equality over the HUD-visible fields. Elapsed time advances every
    /// frame and is carried along, but does not count as a change.
    pub fn same_hud_fields(&self, other: &Self) -> bool {
        self.score == other.score
            && self.coins == other.coins
            && self.lives == other.lives
            && self.level == other.level
            && self.won == other.won
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub level_index: u32,
    pub level: Level,
    pub player: Player,
    pub stats: RunStats,
    /// Horizontal viewport offset, recomputed each frame from the player
    /// position; cached here for the renderer, never authoritative.
    pub camera_x: f32,
    /// Latched when the goal is first touched; cleared only by full reset
    pub won: bool,
    /// Jump key state last frame, for edge-triggered jumps
    pub jump_held: bool,
    /// Last snapshot handed to the HUD, for change detection
    pub last_snapshot: Option<StatsSnapshot>,
}

impl GameState {
    /// Fresh state: authored level, body at spawn, full lives
    pub fn new() -> Self {
        Self {
            level_index: 0,
            level: level_one(),
            player: Player::at_spawn(),
            stats: RunStats {
                lives: STARTING_LIVES,
                ..RunStats::default()
            },
            camera_x: 0.0,
            won: false,
            jump_held: false,
            last_snapshot: None,
        }
    }

    /// Return the body to spawn without touching stats or the grid
    pub fn respawn(&mut self) {
        self.player.respawn();
        log::info!("respawn: {} lives remaining", self.stats.lives);
    }

    /// Rebuild the grid from its authored layout, return the body to spawn,
    /// and zero the run stats. Lives return to the starting constant on the
    /// life-exhaustion path; a manual reset keeps them.
    pub fn full_reset(&mut self, restore_lives: bool) {
        self.level.rebuild();
        self.player = Player::at_spawn();
        let lives = if restore_lives {
            STARTING_LIVES
        } else {
            self.stats.lives
        };
        self.stats = RunStats {
            lives,
            ..RunStats::default()
        };
        self.camera_x = 0.0;
        self.won = false;
        self.jump_held = false;
        log::info!("full reset (lives {})", lives);
    }

    /// Current stats snapshot for the HUD
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            score: self.stats.score,
            coins: self.stats.coins,
            lives: self.stats.lives,
            time_secs: self.stats.time_secs,
            level: self.level_index + 1,
            won: self.won,
        }
    }

    /// World width in pixels (world units)
    #[inline]
    pub fn world_px_width(&self) -> f32 {
        self.level.width() as f32 * TILE
    }

    /// Vertical bound past which a fall counts as death
    #[inline]
    pub fn fall_death_y(&self) -> f32 {
        (self.level.height() as f32 + FALL_MARGIN_TILES) * TILE
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Tile;

    #[test]
    fn test_new_state_initial_values() {
        let state = GameState::new();
        assert_eq!(state.player.pos, Vec2::new(2.0 * TILE, 0.0));
        assert_eq!(state.stats.lives, STARTING_LIVES);
        assert_eq!(state.stats.score, 0);
        assert!(!state.won);
        assert!(!state.player.on_ground);
    }

    #[test]
    fn test_respawn_keeps_stats_and_grid() {
        let mut state = GameState::new();
        state.level.consume(8, 8);
        state.stats.score = 300;
        state.stats.coins = 3;
        state.player.pos = Vec2::new(500.0, 100.0);
        state.player.vel = Vec2::new(4.0, 9.0);

        state.respawn();
        assert_eq!(state.player.pos, Vec2::new(2.0 * TILE, 0.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.stats.score, 300);
        assert_eq!(state.stats.coins, 3);
        assert_eq!(state.level.classify(8, 8), Tile::Empty);
    }

    #[test]
    fn test_full_reset_restores_everything() {
        let mut state = GameState::new();
        state.level.consume(8, 8);
        state.stats.score = 700;
        state.stats.coins = 2;
        state.stats.lives = 0;
        state.stats.time_secs = 33.0;
        state.won = true;

        state.full_reset(true);
        assert_eq!(state.stats.score, 0);
        assert_eq!(state.stats.coins, 0);
        assert_eq!(state.stats.lives, STARTING_LIVES);
        assert_eq!(state.stats.time_secs, 0.0);
        assert!(!state.won);
        assert_eq!(state.level.classify(8, 8), Tile::Coin);
    }

    #[test]
    fn test_manual_reset_preserves_lives() {
        let mut state = GameState::new();
        state.stats.lives = 2;
        state.stats.score = 100;
        state.full_reset(false);
        assert_eq!(state.stats.lives, 2);
        assert_eq!(state.stats.score, 0);
    }

    #[test]
    fn test_snapshot_reflects_stats() {
        let mut state = GameState::new();
        state.stats.score = 600;
        state.stats.coins = 1;
        state.won = true;
        let snap = state.snapshot();
        assert_eq!(snap.score, 600);
        assert_eq!(snap.coins, 1);
        assert_eq!(snap.level, 1);
        assert!(snap.won);
    }
}
