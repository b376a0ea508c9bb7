use crate::error::RenderError;
use quire_types::{Color, Transform, Vector2};

/// The host's 2-D drawing surface, abstracting canvas primitives.
///
/// State calls (`save`, `restore`, `rotate`, `translate`, style setters) cannot
/// fail, so they are safe to issue from drop guards. Paint calls may fail, e.g.
/// when a backend runs out of resources.
pub trait DrawingSurface {
    fn save(&mut self);

    fn restore(&mut self);

    /// Rotates the current transform by `angle` radians.
    fn rotate(&mut self, angle: f64);

    fn translate(&mut self, x: f64, y: f64);

    fn set_font(&mut self, font: &str);

    fn set_fill_style(&mut self, color: Color);

    fn set_stroke_style(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), RenderError>;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError>;

    fn stroke_line(&mut self, from: Vector2, to: Vector2) -> Result<(), RenderError>;

    /// The transform currently applied to paint calls.
    fn transform(&self) -> Transform;
}
