use super::WorldCore;

/// Refill the transfer buffer with one (x, y, w, h) rect per body, in
/// storage order, and return the number of floats written.
///
/// Rects are top-left anchored, so circles come out as their bounding
/// square - which is what a quad renderer wants to draw around them.
pub(super) fn extract_rects(world: &mut WorldCore) -> usize {
    world.rect_transfer_buffer.clear();
    world.rect_transfer_buffer.reserve(world.bodies.len() * 4);

    for body in &world.bodies {
        let (origin, size) = body.bounding_box();
        world
            .rect_transfer_buffer
            .extend_from_slice(&[origin.x, origin.y, size.x, size.y]);
    }

    world.rect_transfer_buffer.len()
}
