//! Input source boundary
//!
//! The host's event stream writes into a single held-key set; the frame
//! loop reads it exactly once per frame at the top of the simulation step.
//! Nothing else crosses that boundary.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical movement keys, independent of physical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
    Reset,
}

/// Map a physical key name (DOM `KeyboardEvent.key` convention) to a
/// logical key. Arrows and WASD are equivalent; space and up both jump.
pub fn map_key(name: &str) -> Option<Key> {
    match name {
        "ArrowLeft" | "a" | "A" => Some(Key::Left),
        "ArrowRight" | "d" | "D" => Some(Key::Right),
        " " | "Space" | "ArrowUp" | "w" | "W" => Some(Key::Jump),
        "r" | "R" => Some(Key::Reset),
        _ => None,
    }
}

/// Keys whose browser default (page scrolling) the host must suppress
/// while the simulation owns focus
pub fn wants_default_suppressed(name: &str) -> bool {
    matches!(name, "ArrowLeft" | "ArrowRight" | "ArrowUp" | "ArrowDown" | " ")
}

/// Currently-held logical keys. Single writer (the event handlers), read
/// once per frame via `frame_input`.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drop every held key (host focus loss; avoids stuck movement)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// The per-frame input sample handed to the simulation step
    pub fn frame_input(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            jump: self.is_held(Key::Jump),
            reset: self.is_held(Key::Reset),
        }
    }
}
