use crate::config::WorldSettings;
use crate::geometry::{distance, squared_distance, Vec2};

use super::shape::Shape;

/// A physical object with a position, velocity and either a circle or a
/// box shape.
///
/// All fields are public for easier debugging. `pos` is the top-left
/// corner for a box and the center for a circle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub shape: Shape,
    pub pos: Vec2,
    /// Distance the body will try to move each update.
    pub velocity: Vec2,
}

impl Body {
    /// Create a box body with the given top-left position and size.
    pub fn new_box(pos: Vec2, size: Vec2) -> Self {
        Self {
            shape: Shape::Box { size },
            pos,
            velocity: Vec2::zero(),
        }
    }

    /// Create a circle body with the given center and radius.
    pub fn new_circle(pos: Vec2, radius: f32) -> Self {
        Self {
            shape: Shape::Circle { radius },
            pos,
            velocity: Vec2::zero(),
        }
    }

    /// Extents of the body: the box size, or the circle's 2r bounding
    /// square. A shapeless body has zero size.
    pub fn size(&self) -> Vec2 {
        match self.shape {
            Shape::Box { size } => size,
            Shape::Circle { radius } => Vec2::new(radius * 2.0, radius * 2.0),
            Shape::None => Vec2::zero(),
        }
    }

    /// Top-left origin and extents of the axis-aligned box containing the
    /// shape. For a box this is just (`pos`, `size`); a circle's box is
    /// anchored at `pos - (r, r)`.
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        match self.shape {
            Shape::Circle { radius } => (self.pos - Vec2::new(radius, radius), self.size()),
            _ => (self.pos, self.size()),
        }
    }

    /// Move by the body's own velocity, collide against `others`, then
    /// wrap at the screen edges.
    pub fn auto_move_and_wrap<'a, I>(&mut self, settings: &WorldSettings, others: I)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        self.auto_move(settings, others);
        self.wrap(settings);
    }

    /// Move by the body's own velocity and collide against `others`.
    pub fn auto_move<'a, I>(&mut self, settings: &WorldSettings, others: I)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        if settings.align_collisions {
            self.move_and_align(self.velocity, others);
        } else {
            self.move_by(self.velocity, others);
        }
    }

    /// Move by an arbitrary motion and collide against `others`.
    ///
    /// All-or-nothing: the motion is applied optimistically, and the first
    /// collision found rolls the position back to where it started. The
    /// scan stops at that first hit. `others` must not contain the moving
    /// body itself - the world guarantees this by splitting its slice
    /// around the mover.
    pub fn move_by<'a, I>(&mut self, motion: Vec2, others: I)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let origin = self.pos;
        self.pos = self.pos + motion;

        for other in others {
            if self.check_collision(other) {
                self.pos = origin;
                break;
            }
        }
    }

    /// Move, then align flush against whatever was hit.
    ///
    /// Alignment is not implemented: on contact this currently rolls the
    /// whole move back, making it behave exactly like `move_by`.
    // TODO: on collision, back off along the motion direction in unit
    // steps until the contact resolves, so bodies come to rest touching
    // instead of stopping a full step short.
    pub fn move_and_align<'a, I>(&mut self, motion: Vec2, others: I)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let origin = self.pos;
        self.pos = self.pos + motion;

        for other in others {
            if self.check_collision(other) {
                self.pos = origin;
                break;
            }
        }
    }

    /// Teleport the body to the opposite screen edge once it leaves the
    /// configured bounds. Hard reset to 0 or the bound, not a modulo wrap
    /// of the overflow amount.
    pub fn wrap(&mut self, settings: &WorldSettings) {
        if self.pos.x > settings.screen_width {
            self.pos.x = 0.0;
        } else if self.pos.x < 0.0 {
            self.pos.x = settings.screen_width;
        }

        if self.pos.y > settings.screen_height {
            self.pos.y = 0.0;
        } else if self.pos.y < 0.0 {
            self.pos.y = settings.screen_height;
        }
    }

    /// Check for a collision between this and another body, dispatching on
    /// both shape tags. The mixed pair is always evaluated from the box
    /// side; shapeless bodies never collide with anything.
    pub fn check_collision(&self, other: &Body) -> bool {
        match (self.shape, other.shape) {
            (Shape::Circle { .. }, Shape::Circle { .. }) => self.circle_collides_circle(other),
            (Shape::Box { .. }, Shape::Box { .. }) => self.box_collides_box(other),
            (Shape::Box { .. }, Shape::Circle { .. }) => self.circle_collides_box(other),
            (Shape::Circle { .. }, Shape::Box { .. }) => other.circle_collides_box(self),
            (Shape::None, _) | (_, Shape::None) => false,
        }
    }

    /// True if the distance between the two circle centers is less than
    /// their combined radii. Exact contact is not a collision.
    pub fn circle_collides_circle(&self, other: &Body) -> bool {
        let (Shape::Circle { radius: r1 }, Shape::Circle { radius: r2 }) =
            (self.shape, other.shape)
        else {
            return false;
        };

        distance(self.pos, other.pos) < r1 + r2
    }

    /// Collide `circle` against *this* box.
    ///
    /// Ordered cheap-first: bounding-box rejection, then the flat-edge
    /// span test, then the four corners against the squared radius. No
    /// square root on any path.
    pub fn circle_collides_box(&self, circle: &Body) -> bool {
        let Shape::Box { size } = self.shape else {
            return false;
        };
        let Shape::Circle { radius } = circle.shape else {
            return false;
        };

        // No collision if the bounding boxes do not intersect.
        let (circle_origin, circle_size) = circle.bounding_box();
        if !self.box_overlaps_rect(circle_origin, circle_size) {
            return false;
        }

        // Bounding boxes overlap, so a center strictly inside either span
        // means the circle overlaps a flat edge of the box.
        if circle.pos.x > self.pos.x && circle.pos.x < self.pos.x + size.x {
            return true;
        }
        if circle.pos.y > self.pos.y && circle.pos.y < self.pos.y + size.y {
            return true;
        }

        // Otherwise the only possible contact is one of the four corners.
        let squared_radius = radius * radius;
        squared_distance(self.pos, circle.pos) < squared_radius
            || squared_distance(self.pos + Vec2::new(size.x, 0.0), circle.pos) < squared_radius
            || squared_distance(self.pos + Vec2::new(0.0, size.y), circle.pos) < squared_radius
            || squared_distance(self.pos + Vec2::new(size.x, size.y), circle.pos) < squared_radius
    }

    /// True if this box and the other body's rect overlap on both axes.
    /// Edge-touching rectangles do not overlap.
    pub fn box_collides_box(&self, other: &Body) -> bool {
        self.box_overlaps_rect(other.pos, other.size())
    }

    /// Rect-parameterized variant of the box overlap test: this body's
    /// rect against an arbitrary (`origin`, `size`) rect.
    pub fn box_overlaps_rect(&self, origin: Vec2, size: Vec2) -> bool {
        let own = self.size();

        self.pos.y < origin.y + size.y
            && self.pos.y + own.y > origin.y
            && self.pos.x < origin.x + size.x
            && self.pos.x + own.x > origin.x
    }
}
