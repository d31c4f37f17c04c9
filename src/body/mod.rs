//! Body - a movable circle or box participating in collision checks
//!
//! This is intentionally simple (no SAT / no impulse solver):
//! - Moves are all-or-nothing: apply the motion, scan the other bodies,
//!   roll the whole move back on the first contact.
//! - Wrap teleports a body that left the screen to the opposite edge.
//! - All collision comparisons are strict, so exact edge contact does not
//!   count as a collision.
//! - No rotation; boxes stay axis-aligned.

mod body;
mod shape;

pub use body::Body;
pub use shape::Shape;
