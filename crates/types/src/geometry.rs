use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Affine transform used for component and surface transforms.
pub use kurbo::Affine as Transform;

/// A 2-D point or offset in document space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn create(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a new point offset componentwise by `(x, y)`.
    pub fn add_by_point(self, x: f64, y: f64) -> Self {
        Self {
            x: self.x + x,
            y: self.y + y,
        }
    }

    /// Rotates the vector about the origin by `angle` radians.
    ///
    /// Positive angles turn the x axis towards the y axis, which is clockwise on
    /// a y-down canvas.
    pub fn rotate(self, angle: f64) -> Self {
        if angle == 0.0 {
            return self;
        }
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Componentwise comparison within `epsilon`.
    pub fn approx_eq(self, other: Vector2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        self.add_by_point(rhs.x, rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.add_by_point(-rhs.x, -rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::create(-self.x, -self.y)
    }
}

impl From<Vector2> for kurbo::Point {
    fn from(v: Vector2) -> Self {
        kurbo::Point::new(v.x, v.y)
    }
}

impl From<kurbo::Point> for Vector2 {
    fn from(p: kurbo::Point) -> Self {
        Vector2::create(p.x, p.y)
    }
}

impl From<Vector2> for kurbo::Vec2 {
    fn from(v: Vector2) -> Self {
        kurbo::Vec2::new(v.x, v.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Visible region handed to a draw pass for culling.
///
/// The renderer never interprets it; consumers that cull read it as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// True if the two rectangles share any point, edges included.
    pub fn intersects(&self, other: &BoundRect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }
}

/// Scale inherited from the host scene (zoom and device pixel ratio).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Scale {
    pub fn uniform(scale: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}
