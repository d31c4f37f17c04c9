use arcadia_engine::simulation::WorldCore;
use arcadia_engine::WorldSettings;

#[test]
fn settings_smoke_parses_and_round_trips() {
    let mut world = WorldCore::new(320.0, 240.0);
    world.set_align_collisions(true);

    let json = world.settings_json();
    let parsed = WorldSettings::from_json(&json).expect("settings json should parse");
    assert_eq!(&parsed, world.settings());

    let mut fresh = WorldCore::new(0.0, 0.0);
    fresh
        .load_settings_json(&json)
        .expect("world should accept its own settings dump");
    assert_eq!(fresh.settings().screen_width, 320.0);
    assert_eq!(fresh.settings().screen_height, 240.0);
    assert!(fresh.align_collisions());

    // Parse failure must not clobber the current settings.
    assert!(fresh.load_settings_json("[]").is_err());
    assert_eq!(fresh.settings().screen_width, 320.0);
}
