use crate::config::WorldSettings;

use super::WorldCore;

pub(super) fn set_align_collisions(world: &mut WorldCore, enabled: bool) {
    world.settings.align_collisions = enabled;
}

pub(super) fn align_collisions(world: &WorldCore) -> bool {
    world.settings.align_collisions
}

pub(super) fn set_screen_size(world: &mut WorldCore, width: f32, height: f32) {
    world.settings.screen_width = width;
    world.settings.screen_height = height;
}

pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    world.settings = WorldSettings::from_json(json)?;
    Ok(())
}

pub(super) fn settings_json(world: &WorldCore) -> String {
    world.settings.to_json()
}
