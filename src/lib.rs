//! Arcadia Engine - 2D movement and collision for arcade games
//!
//! A deliberately small kinematic core: bodies are circles or axis-aligned
//! boxes that move by their velocity, roll back on contact, and wrap at the
//! screen edges. No rotation, no impulse solver, no broad phase.
//!
//! Architecture:
//! - geometry/    - Vec2 and distance/projection helpers
//! - body/        - Body shapes, movement and pairwise collision tests
//! - config       - World settings (screen bounds, alignment flag)
//! - simulation/  - Orchestration and public WASM facade

pub mod body;
pub mod config;
pub mod geometry;
pub mod simulation;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports (keeps existing internal/external paths working)
pub use body::{Body, Shape};
pub use config::WorldSettings;
pub use geometry::{
    clamp, distance, dot, nearest_point_on_finite_line, squared_distance, Vec2,
};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Arcadia WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::World;
