//! Geometry primitives - Vec2 and the scalar/projection helpers
//!
//! Plain value math only. Nothing here touches the world or the bodies,
//! and nothing validates its inputs: NaN in, NaN out.

mod queries;
mod vec2;

pub use queries::{clamp, distance, dot, nearest_point_on_finite_line, squared_distance};
pub use vec2::Vec2;
