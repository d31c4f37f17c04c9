use super::vec2::Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).magnitude()
}

/// Squared distance between two points. Cheaper than `distance` when only
/// comparing against another squared quantity.
pub fn squared_distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).squared_magnitude()
}

/// Restrict `val` to `[min, max]`.
///
/// Callers must pass `min <= max`; the ordering of the two checks is what
/// you get otherwise.
pub fn clamp(val: f32, min: f32, max: f32) -> f32 {
    if val < min {
        return min;
    }
    if val > max {
        return max;
    }
    val
}

/// Dot product of two vectors.
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Closest point to `point` on the segment from `start` to `end`.
///
/// Projects the point onto the carrying line, then clamps the projection
/// parameter to the segment. A zero-length segment degenerates to `start`.
pub fn nearest_point_on_finite_line(start: Vec2, end: Vec2, point: Vec2) -> Vec2 {
    let mut line = end - start;
    let len = line.magnitude();
    line.normalize();

    let d = dot(point - start, line);
    let d = clamp(d, 0.0, len);
    start + line * d
}
