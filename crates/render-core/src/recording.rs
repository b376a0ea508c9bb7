use crate::error::RenderError;
use crate::traits::DrawingSurface;
use crate::types::DrawOp;
use quire_types::{Color, Transform, Vector2};

/// A drawing surface that records every call and tracks the resulting transform.
///
/// Used for tests, the op cache and the CLI. Replaying the recorded ops on a
/// real surface reproduces the same output.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Hands out the recorded ops, leaving the transform state untouched.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn paint_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| op.is_paint())
    }

    /// Depth of the save/restore stack.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Replays `ops` onto `surface` in order.
    pub fn replay(ops: &[DrawOp], surface: &mut dyn DrawingSurface) -> Result<(), RenderError> {
        for op in ops {
            op.apply(surface)?;
        }
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.saved.push(self.transform);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(transform) => self.transform = transform,
            None => log::warn!("restore() without matching save() ignored"),
        }
        self.ops.push(DrawOp::Restore);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform = self.transform * Transform::rotate(angle);
        self.ops.push(DrawOp::Rotate { angle });
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.transform = self.transform * Transform::translate((x, y));
        self.ops.push(DrawOp::Translate { x, y });
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::SetFont {
            font: font.to_string(),
        });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFillStyle { color });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ops.push(DrawOp::SetStrokeStyle { color });
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth { width });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), RenderError> {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError> {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError> {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2) -> Result<(), RenderError> {
        self.ops.push(DrawOp::StrokeLine { from, to });
        Ok(())
    }

    fn transform(&self) -> Transform {
        self.transform
    }
}
