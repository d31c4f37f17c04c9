use crate::geometry::Vec2;

/// Shape of a body.
///
/// A closed set: collision dispatch is a small finite matrix over these
/// tags, and each variant carries only the fields that mean something for
/// it. `None` is what a default-constructed body has; it never collides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle. `size` extends right and down from the
    /// body's top-left `pos`.
    Box { size: Vec2 },
    /// Circle around the body's `pos` (the center, not a corner).
    Circle { radius: f32 },
    /// No shape yet.
    #[default]
    None,
}
