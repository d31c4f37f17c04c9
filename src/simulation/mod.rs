//! World - the simulation context that owns the bodies
//!
//! Orchestration only: movement and collision rules live in `body`, the
//! settings type in `config`. The world adds identity (spawn ids), the
//! per-frame sweep, and the rect snapshot consumed by the renderer.

use crate::body::Body;
use crate::config::WorldSettings;
use crate::geometry::Vec2;

#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::World;

/// The simulation world
pub struct WorldCore {
    bodies: Vec<Body>,
    // Parallel to `bodies`; entries move together under swap_remove.
    ids: Vec<u32>,
    next_id: u32,

    // Settings
    settings: WorldSettings,

    // State
    frame: u64,

    // Render interop
    rect_transfer_buffer: Vec<f32>,
}

impl WorldCore {
    /// Create a new world bounded by the given screen size
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        init::create_world_core(screen_width, screen_height)
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Spawn a box body, returning its id.
    pub fn spawn_box(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        commands::spawn_box(self, x, y, w, h)
    }

    /// Spawn a circle body, returning its id.
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32) -> u32 {
        commands::spawn_circle(self, x, y, radius)
    }

    /// Remove a body by id. Returns false for an unknown id.
    pub fn remove_body(&mut self, id: u32) -> bool {
        commands::remove_body(self, id)
    }

    /// Set a body's per-update velocity. Returns false for an unknown id.
    pub fn set_velocity(&mut self, id: u32, x: f32, y: f32) -> bool {
        commands::set_velocity(self, id, x, y)
    }

    /// Teleport a body. Returns false for an unknown id.
    pub fn set_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        commands::set_position(self, id, x, y)
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        commands::body(self, id)
    }

    pub fn body_position(&self, id: u32) -> Option<Vec2> {
        commands::body(self, id).map(|b| b.pos)
    }

    pub fn body_size(&self, id: u32) -> Option<Vec2> {
        commands::body(self, id).map(|b| b.size())
    }

    /// Remove all bodies. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    pub fn set_align_collisions(&mut self, enabled: bool) {
        settings::set_align_collisions(self, enabled);
    }

    pub fn align_collisions(&self) -> bool {
        settings::align_collisions(self)
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        settings::set_screen_size(self, width, height);
    }

    /// Replace the settings from a JSON document. On parse failure the
    /// current settings are left untouched.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        settings::settings_json(self)
    }

    /// Advance the simulation one frame: every body auto-moves against all
    /// the others and wraps at the screen edges.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Refresh the rect snapshot; returns the number of floats written.
    pub fn extract_rects(&mut self) -> usize {
        render_extract::extract_rects(self)
    }

    /// The rect snapshot as last filled by `extract_rects`: one
    /// (x, y, w, h) quadruple per body.
    pub fn rects(&self) -> &[f32] {
        &self.rect_transfer_buffer
    }

    pub fn rects_ptr(&self) -> *const f32 {
        self.rect_transfer_buffer.as_ptr()
    }

    pub fn rects_len(&self) -> usize {
        self.rect_transfer_buffer.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
