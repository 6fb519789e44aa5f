//! Data-driven game balance
//!
//! Physics and scoring values the simulation is tuned with. Defaults match
//! the reference constants in `consts`; a host can override them from JSON.
//! Fixed geometry (tile size, view dimensions, body size) is not tunable.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and scoring balance for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per reference frame
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_velocity: f32,
    /// Horizontal acceleration per reference frame while steering
    pub move_accel: f32,
    /// Velocity multiplier per reference frame with no steering input
    pub friction: f32,
    /// Horizontal speed cap
    pub max_run_speed: f32,
    /// Vertical speed cap
    pub terminal_velocity: f32,
    /// Score granted per coin
    pub coin_score: u64,
    /// Score granted once when the goal is reached
    pub goal_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            move_accel: MOVE_ACCEL,
            friction: FRICTION,
            max_run_speed: MAX_RUN_SPEED,
            terminal_velocity: TERMINAL_VELOCITY,
            coin_score: COIN_SCORE,
            goal_bonus: GOAL_BONUS,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!("loaded tuning overrides");
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.45);
        assert_eq!(t.jump_velocity, -7.8);
        assert_eq!(t.move_accel, 2.1);
        assert_eq!(t.friction, 0.85);
        assert_eq!(t.coin_score, 100);
        assert_eq!(t.goal_bonus, 500);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{"gravity": 0.6, "goal_bonus": 1000}"#).unwrap();
        assert_eq!(t.gravity, 0.6);
        assert_eq!(t.goal_bonus, 1000);
        assert_eq!(t.friction, Tuning::default().friction);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("{gravity: fast}").is_err());
    }

    #[test]
    fn test_round_trip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }
}
