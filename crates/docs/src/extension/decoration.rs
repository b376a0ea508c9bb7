use super::{ExtensionOffset, SpanExtension};
use quire_render_core::{DrawingSurface, RenderError};
use quire_skeleton::Span;
use quire_types::{BoundRect, Color, Scale, Vector2, deg_to_rad, get_scale};

/// Below-baseline distance of the underline, as a fraction of the font size.
const UNDERLINE_OFFSET: f64 = 0.1;
/// Height of the strikethrough above the baseline, as a fraction of the ascent.
const STRIKE_POSITION: f64 = 0.35;

/// Strokes underline and strikethrough along the span's rotated baseline.
#[derive(Debug, Default)]
pub struct SpanDecoration;

impl SpanExtension for SpanDecoration {
    fn key(&self) -> &str {
        "span-decoration"
    }

    fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        parent_scale: Scale,
        span: &Span,
        offset: &ExtensionOffset,
        _bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        let style = &span.style;
        if !style.underline && !style.strikethrough {
            return Ok(());
        }

        let vertex_angle = deg_to_rad(offset.render_config.vertex_angle);
        let baseline = offset.span_point_with_font;
        let run = Vector2::create(span.width, 0.0).rotate(vertex_angle);
        let scale = get_scale(parent_scale);

        surface.set_stroke_style(style.color.unwrap_or(Color::BLACK));
        surface.set_line_width(if scale > 0.0 { 1.0 / scale } else { 1.0 });

        if style.underline {
            let drop = Vector2::create(0.0, style.font_size * UNDERLINE_OFFSET).rotate(vertex_angle);
            let from = baseline + drop;
            surface.stroke_line(from, from + run)?;
        }
        if style.strikethrough {
            let ascent = offset.span_start_point - baseline;
            let from = baseline.add_by_point(ascent.x * STRIKE_POSITION, ascent.y * STRIKE_POSITION);
            surface.stroke_line(from, from + run)?;
        }
        Ok(())
    }
}
