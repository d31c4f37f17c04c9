use wasm_bindgen::prelude::*;

use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with the given screen bounds
    #[wasm_bindgen(constructor)]
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            core: WorldCore::new(screen_width, screen_height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.core.settings().screen_width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.core.settings().screen_height
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Spawn a box body at (x, y) with size (w, h).
    /// Returns the body ID
    pub fn spawn_box(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.spawn_box(x, y, w, h)
    }

    /// Spawn a circle body centered at (x, y) with the given radius.
    /// Returns the body ID
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32) -> u32 {
        self.core.spawn_circle(x, y, radius)
    }

    /// Remove a body by ID
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    /// Set a body's velocity (distance moved per step)
    pub fn set_velocity(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.set_velocity(id, x, y)
    }

    /// Teleport a body to (x, y) without collision checks
    pub fn set_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.set_position(id, x, y)
    }

    pub fn has_body(&self, id: u32) -> bool {
        self.core.body(id).is_some()
    }

    /// Body x position (0 for unknown ids; check `has_body` when unsure)
    pub fn body_x(&self, id: u32) -> f32 {
        self.core.body_position(id).map(|p| p.x).unwrap_or(0.0)
    }

    /// Body y position
    pub fn body_y(&self, id: u32) -> f32 {
        self.core.body_position(id).map(|p| p.y).unwrap_or(0.0)
    }

    /// Body width (2r for circles)
    pub fn body_w(&self, id: u32) -> f32 {
        self.core.body_size(id).map(|s| s.x).unwrap_or(0.0)
    }

    /// Body height (2r for circles)
    pub fn body_h(&self, id: u32) -> f32 {
        self.core.body_size(id).map(|s| s.y).unwrap_or(0.0)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Route velocity-driven moves through the aligning variant
    pub fn set_align_collisions(&mut self, enabled: bool) {
        self.core.set_align_collisions(enabled);
    }

    pub fn get_align_collisions(&self) -> bool {
        self.core.align_collisions()
    }

    /// Resize the wrap bounds of an existing world
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.core.set_screen_size(width, height);
    }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_settings_json(&self) -> String {
        self.core.settings_json()
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    // === RENDER API ===

    /// Refresh the rect snapshot; returns the number of floats written
    pub fn extract_rects(&mut self) -> usize {
        self.core.extract_rects()
    }

    /// Copy of the rect snapshot as a typed array: (x, y, w, h) per body
    pub fn rects(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.core.rects())
    }

    /// Get pointer to the rect snapshot (for zero-copy JS rendering)
    pub fn rects_ptr(&self) -> *const f32 {
        self.core.rects_ptr()
    }

    /// Snapshot length in floats
    pub fn rects_len(&self) -> usize {
        self.core.rects_len()
    }
}
