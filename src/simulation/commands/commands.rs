use crate::body::Body;
use crate::geometry::Vec2;

use super::WorldCore;

pub(super) fn spawn_box(world: &mut WorldCore, x: f32, y: f32, w: f32, h: f32) -> u32 {
    push_body(world, Body::new_box(Vec2::new(x, y), Vec2::new(w, h)))
}

pub(super) fn spawn_circle(world: &mut WorldCore, x: f32, y: f32, radius: f32) -> u32 {
    push_body(world, Body::new_circle(Vec2::new(x, y), radius))
}

fn push_body(world: &mut WorldCore, body: Body) -> u32 {
    let id = world.next_id;
    world.next_id = world.next_id.saturating_add(1);
    world.bodies.push(body);
    world.ids.push(id);
    id
}

pub(super) fn remove_body(world: &mut WorldCore, id: u32) -> bool {
    let Some(idx) = index_of(world, id) else {
        return false;
    };
    world.bodies.swap_remove(idx);
    world.ids.swap_remove(idx);
    true
}

pub(super) fn set_velocity(world: &mut WorldCore, id: u32, x: f32, y: f32) -> bool {
    let Some(idx) = index_of(world, id) else {
        return false;
    };
    world.bodies[idx].velocity = Vec2::new(x, y);
    true
}

pub(super) fn set_position(world: &mut WorldCore, id: u32, x: f32, y: f32) -> bool {
    let Some(idx) = index_of(world, id) else {
        return false;
    };
    world.bodies[idx].pos = Vec2::new(x, y);
    true
}

pub(super) fn body(world: &WorldCore, id: u32) -> Option<&Body> {
    index_of(world, id).map(|idx| &world.bodies[idx])
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.ids.clear();
}

fn index_of(world: &WorldCore, id: u32) -> Option<usize> {
    world.ids.iter().position(|&b| b == id)
}
