//! World settings - screen bounds and the collision-alignment flag
//!
//! The original engine kept these as process-wide statics set by a one-time
//! `Initialize` call. They are an explicit value here so every world owns
//! its own copy and tests can run independent simulations side by side.

use serde::{Deserialize, Serialize};

/// Shared configuration read by every body's move/wrap operation.
///
/// Set once when the world is created and treated as read-only per step;
/// there is no interior mutability and no locking (single update loop).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSettings {
    /// Right wrap edge. Bodies past it teleport back to x = 0.
    pub screen_width: f32,
    /// Bottom wrap edge. Bodies past it teleport back to y = 0.
    pub screen_height: f32,
    /// Selects `move_and_align` over `move_by` for velocity-driven moves.
    pub align_collisions: bool,
}

impl WorldSettings {
    /// Settings for a fresh world. The alignment flag always starts off.
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            align_collisions: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        // Serialization of three plain fields cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
