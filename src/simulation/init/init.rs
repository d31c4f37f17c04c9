use crate::config::WorldSettings;

use super::WorldCore;

pub(super) fn create_world_core(screen_width: f32, screen_height: f32) -> WorldCore {
    WorldCore {
        bodies: Vec::new(),
        ids: Vec::new(),
        next_id: 1,
        settings: WorldSettings::new(screen_width, screen_height),
        frame: 0,
        rect_transfer_buffer: Vec::new(),
    }
}
