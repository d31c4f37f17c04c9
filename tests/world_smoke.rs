use arcadia_engine::World;

#[test]
fn world_smoke_step_and_wrap() {
    let mut world = World::new(640.0, 480.0);
    let player = world.spawn_circle(100.0, 100.0, 10.0);
    let wall = world.spawn_box(300.0, 80.0, 40.0, 40.0);
    assert_eq!(world.body_count(), 2);

    assert!(world.set_velocity(player, 5.0, 0.0));
    world.step();
    assert_eq!(world.body_x(player), 105.0);
    assert_eq!(world.frame(), 1);

    // Drive the player into the wall: position must stop changing.
    assert!(world.set_position(player, 288.0, 100.0));
    world.step();
    assert_eq!(world.body_x(player), 288.0);

    // Remove the wall and the same step goes through, then off the edge
    // and around.
    assert!(world.remove_body(wall));
    world.step();
    assert_eq!(world.body_x(player), 293.0);

    assert!(world.set_position(player, 638.0, 100.0));
    world.step();
    assert_eq!(world.body_x(player), 0.0);
}

#[test]
fn world_smoke_render_snapshot() {
    let mut world = World::new(640.0, 480.0);
    world.spawn_box(1.0, 2.0, 3.0, 4.0);
    world.spawn_circle(50.0, 60.0, 5.0);

    assert_eq!(world.extract_rects(), 8);
    assert_eq!(world.rects_len(), 8);
    assert!(!world.rects_ptr().is_null());
}
