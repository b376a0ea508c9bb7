use crate::error::RenderError;
use crate::traits::DrawingSurface;
use quire_types::{Color, Vector2};
use serde::Serialize;
use std::fmt;

/// One call issued against a [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    Save,
    Restore,
    Rotate { angle: f64 },
    Translate { x: f64, y: f64 },
    SetFont { font: String },
    SetFillStyle { color: Color },
    SetStrokeStyle { color: Color },
    SetLineWidth { width: f64 },
    FillText { text: String, x: f64, y: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeLine { from: Vector2, to: Vector2 },
}

impl DrawOp {
    /// Re-issues the recorded call against `surface`.
    pub fn apply(&self, surface: &mut dyn DrawingSurface) -> Result<(), RenderError> {
        match self {
            DrawOp::Save => surface.save(),
            DrawOp::Restore => surface.restore(),
            DrawOp::Rotate { angle } => surface.rotate(*angle),
            DrawOp::Translate { x, y } => surface.translate(*x, *y),
            DrawOp::SetFont { font } => surface.set_font(font),
            DrawOp::SetFillStyle { color } => surface.set_fill_style(*color),
            DrawOp::SetStrokeStyle { color } => surface.set_stroke_style(*color),
            DrawOp::SetLineWidth { width } => surface.set_line_width(*width),
            DrawOp::FillText { text, x, y } => return surface.fill_text(text, *x, *y),
            DrawOp::FillRect { x, y, width, height } => {
                return surface.fill_rect(*x, *y, *width, *height);
            }
            DrawOp::StrokeRect { x, y, width, height } => {
                return surface.stroke_rect(*x, *y, *width, *height);
            }
            DrawOp::StrokeLine { from, to } => return surface.stroke_line(*from, *to),
        }
        Ok(())
    }

    /// True for calls that put ink on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawOp::FillText { .. }
                | DrawOp::FillRect { .. }
                | DrawOp::StrokeRect { .. }
                | DrawOp::StrokeLine { .. }
        )
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Save => write!(f, "save"),
            DrawOp::Restore => write!(f, "restore"),
            DrawOp::Rotate { angle } => write!(f, "rotate {:.6}", angle),
            DrawOp::Translate { x, y } => write!(f, "translate {:.2} {:.2}", x, y),
            DrawOp::SetFont { font } => write!(f, "font {}", font),
            DrawOp::SetFillStyle { color } => write!(f, "fill-style {}", color),
            DrawOp::SetStrokeStyle { color } => write!(f, "stroke-style {}", color),
            DrawOp::SetLineWidth { width } => write!(f, "line-width {:.2}", width),
            DrawOp::FillText { text, x, y } => write!(f, "fill-text {:?} at {:.2} {:.2}", text, x, y),
            DrawOp::FillRect { x, y, width, height } => {
                write!(f, "fill-rect {:.2} {:.2} {:.2}x{:.2}", x, y, width, height)
            }
            DrawOp::StrokeRect { x, y, width, height } => {
                write!(f, "stroke-rect {:.2} {:.2} {:.2}x{:.2}", x, y, width, height)
            }
            DrawOp::StrokeLine { from, to } => write!(
                f,
                "stroke-line {:.2} {:.2} -> {:.2} {:.2}",
                from.x, from.y, to.x, to.y
            ),
        }
    }
}
