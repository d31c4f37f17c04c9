use super::*;
use crate::geometry::Vec2;

#[test]
fn spawn_assigns_unique_monotonic_ids() {
    let mut world = WorldCore::new(640.0, 480.0);

    let a = world.spawn_box(0.0, 0.0, 10.0, 10.0);
    let b = world.spawn_circle(100.0, 100.0, 5.0);
    let c = world.spawn_box(200.0, 200.0, 10.0, 10.0);

    assert!(a < b && b < c);
    assert_eq!(world.body_count(), 3);
}

#[test]
fn step_applies_velocity_to_a_lone_body() {
    let mut world = WorldCore::new(640.0, 480.0);
    let id = world.spawn_circle(100.0, 100.0, 5.0);
    world.set_velocity(id, 3.0, -2.0);

    world.step();

    assert_eq!(world.body_position(id), Some(Vec2::new(103.0, 98.0)));
    assert_eq!(world.frame(), 1);
}

#[test]
fn step_rolls_back_a_blocked_body() {
    let mut world = WorldCore::new(640.0, 480.0);
    let mover = world.spawn_circle(100.0, 100.0, 5.0);
    world.spawn_box(106.0, 95.0, 10.0, 10.0);
    world.set_velocity(mover, 4.0, 0.0);

    world.step();

    // The attempted position (104, 100) overlaps the box, so the whole
    // move is rolled back.
    assert_eq!(world.body_position(mover), Some(Vec2::new(100.0, 100.0)));
}

#[test]
fn step_wraps_bodies_past_the_edge() {
    let mut world = WorldCore::new(640.0, 480.0);
    let id = world.spawn_circle(639.0, 100.0, 5.0);
    world.set_velocity(id, 2.0, 0.0);

    world.step();

    assert_eq!(world.body_position(id), Some(Vec2::new(0.0, 100.0)));
}

#[test]
fn earlier_movers_are_seen_at_new_positions() {
    let mut world = WorldCore::new(640.0, 480.0);
    // First body steps out of the way; second body then fits through.
    let first = world.spawn_box(10.0, 10.0, 4.0, 4.0);
    let second = world.spawn_box(2.0, 10.0, 4.0, 4.0);
    world.set_velocity(first, 20.0, 0.0);
    world.set_velocity(second, 9.0, 0.0);

    world.step();

    assert_eq!(world.body_position(first), Some(Vec2::new(30.0, 10.0)));
    assert_eq!(world.body_position(second), Some(Vec2::new(11.0, 10.0)));
}

#[test]
fn align_flag_routes_moves_without_changing_outcomes() {
    // move_and_align is rollback-only for now, so both settings of the
    // flag must land bodies in the same place.
    let run = |align: bool| {
        let mut world = WorldCore::new(640.0, 480.0);
        world.set_align_collisions(align);
        let mover = world.spawn_circle(100.0, 100.0, 5.0);
        world.spawn_box(106.0, 95.0, 10.0, 10.0);
        world.set_velocity(mover, 4.0, 0.0);
        world.step();
        world.body_position(mover)
    };

    assert_eq!(run(false), run(true));
}

#[test]
fn removed_bodies_stop_blocking_movers() {
    let mut world = WorldCore::new(640.0, 480.0);
    let mover = world.spawn_circle(100.0, 100.0, 5.0);
    let wall = world.spawn_box(106.0, 95.0, 10.0, 10.0);
    world.set_velocity(mover, 4.0, 0.0);

    assert!(world.remove_body(wall));
    assert!(!world.remove_body(wall));
    assert!(world.body(wall).is_none());

    world.step();
    assert_eq!(world.body_position(mover), Some(Vec2::new(104.0, 100.0)));
}

#[test]
fn unknown_ids_are_rejected() {
    let mut world = WorldCore::new(640.0, 480.0);
    assert!(!world.set_velocity(999, 1.0, 1.0));
    assert!(!world.set_position(999, 1.0, 1.0));
    assert!(!world.remove_body(999));
    assert_eq!(world.body_position(999), None);
    assert_eq!(world.body_size(999), None);
}

#[test]
fn clear_empties_the_world_but_keeps_ids_fresh() {
    let mut world = WorldCore::new(640.0, 480.0);
    let before = world.spawn_box(0.0, 0.0, 1.0, 1.0);
    world.clear();
    assert_eq!(world.body_count(), 0);

    let after = world.spawn_box(0.0, 0.0, 1.0, 1.0);
    assert!(after > before);
}

#[test]
fn settings_json_round_trips_through_the_world() {
    let mut world = WorldCore::new(320.0, 240.0);
    world.set_align_collisions(true);

    let json = world.settings_json();
    let mut other = WorldCore::new(0.0, 0.0);
    other.load_settings_json(&json).expect("settings json should parse");

    assert_eq!(other.settings(), world.settings());
}

#[test]
fn malformed_settings_json_leaves_settings_unchanged() {
    let mut world = WorldCore::new(320.0, 240.0);
    assert!(world.load_settings_json("{ nope").is_err());
    assert_eq!(world.settings().screen_width, 320.0);
    assert_eq!(world.settings().screen_height, 240.0);
}

#[test]
fn extract_rects_packs_four_floats_per_body() {
    let mut world = WorldCore::new(640.0, 480.0);
    world.spawn_box(5.0, 6.0, 7.0, 8.0);
    world.spawn_circle(20.0, 30.0, 4.0);

    let len = world.extract_rects();
    assert_eq!(len, 8);
    assert_eq!(world.rects_len(), 8);

    // Box rect is verbatim; the circle rect is its bounding square,
    // anchored at center - radius.
    assert_eq!(world.rects()[..4], [5.0, 6.0, 7.0, 8.0]);
    assert_eq!(world.rects()[4..], [16.0, 26.0, 8.0, 8.0]);
}
