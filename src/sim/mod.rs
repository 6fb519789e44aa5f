//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One owned `GameState` aggregate, mutated only through `tick`
//! - No rendering or platform dependencies
//! - Every step is a total function of (state, input, dt)

pub mod camera;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use camera::camera_offset;
pub use collision::{AxisResolution, clamp_velocity, resolve_horizontal, resolve_vertical};
pub use level::{Level, Tile, level_one};
pub use state::{GameState, Player, RunStats, StatsSnapshot};
pub use tick::{TickInput, tick};
