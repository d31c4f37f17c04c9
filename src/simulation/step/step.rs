use super::WorldCore;

/// Advance every body one update, in storage order.
///
/// Each body scans all the others, so a body moved earlier in the sweep is
/// seen at its new position by the bodies after it - same as calling the
/// auto-move operations one body at a time from a game loop.
pub(super) fn step(world: &mut WorldCore) {
    let settings = world.settings;

    for i in 0..world.bodies.len() {
        // Split the slice around the mover so its own scan never sees it.
        let (head, rest) = world.bodies.split_at_mut(i);
        let Some((body, tail)) = rest.split_first_mut() else {
            break;
        };
        body.auto_move_and_wrap(&settings, head.iter().chain(tail.iter()));
    }

    world.frame += 1;
}
