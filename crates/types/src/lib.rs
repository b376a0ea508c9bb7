pub mod color;
pub mod geometry;
pub mod tools;

pub use color::Color;
pub use geometry::{BoundRect, Scale, Size, Transform, Vector2};
pub use tools::{deg_to_rad, fix_line_width_by_scale, get_scale};
