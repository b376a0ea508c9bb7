use super::{ExtensionOffset, SpanExtension};
use quire_render_core::{DrawingSurface, RenderError};
use quire_skeleton::Span;
use quire_types::{BoundRect, Scale, deg_to_rad};

/// Fills the box behind a span when its style carries a background colour.
#[derive(Debug, Default)]
pub struct SpanBackground;

impl SpanExtension for SpanBackground {
    fn key(&self) -> &str {
        "span-background"
    }

    fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        _parent_scale: Scale,
        span: &Span,
        offset: &ExtensionOffset,
        _bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        let Some(background) = span.style.background else {
            return Ok(());
        };
        let start = offset.span_start_point;
        let height = offset.center_point.y * 2.0;
        surface.set_fill_style(background);

        let vertex_angle = deg_to_rad(offset.render_config.vertex_angle);
        if vertex_angle == 0.0 {
            return surface.fill_rect(start.x, start.y, span.width, height);
        }

        // The box follows the slanted baseline.
        surface.save();
        surface.translate(start.x, start.y);
        surface.rotate(vertex_angle);
        let result = surface.fill_rect(0.0, 0.0, span.width, height);
        surface.restore();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_render_core::{DrawOp, RecordingSurface};
    use quire_skeleton::{RenderConfig, SpanStyle};
    use quire_types::{Color, Vector2};

    fn span(background: Option<Color>) -> Span {
        Span {
            content: "abc".into(),
            width: 30.0,
            style: SpanStyle {
                background,
                ..SpanStyle::default()
            },
            ..Span::default()
        }
    }

    fn offset(vertex_angle: f64) -> ExtensionOffset {
        ExtensionOffset {
            span_start_point: Vector2::create(5.0, 6.0),
            center_point: Vector2::create(15.0, 8.0),
            render_config: RenderConfig {
                vertex_angle,
                ..RenderConfig::default()
            },
            ..ExtensionOffset::default()
        }
    }

    #[test]
    fn no_background_paints_nothing() {
        let mut surface = RecordingSurface::new();
        SpanBackground
            .draw(&mut surface, Scale::default(), &span(None), &offset(0.0), None)
            .unwrap();
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn fills_span_box_at_start_point() {
        let yellow = Color::rgb(255, 255, 0);
        let mut surface = RecordingSurface::new();
        SpanBackground
            .draw(&mut surface, Scale::default(), &span(Some(yellow)), &offset(0.0), None)
            .unwrap();
        assert_eq!(
            surface.ops(),
            &[
                DrawOp::SetFillStyle { color: yellow },
                DrawOp::FillRect {
                    x: 5.0,
                    y: 6.0,
                    width: 30.0,
                    height: 16.0
                }
            ]
        );
    }

    #[test]
    fn slanted_box_is_bracketed() {
        let mut surface = RecordingSurface::new();
        SpanBackground
            .draw(
                &mut surface,
                Scale::default(),
                &span(Some(Color::BLACK)),
                &offset(30.0),
                None,
            )
            .unwrap();
        assert_eq!(surface.ops().first(), Some(&DrawOp::SetFillStyle { color: Color::BLACK }));
        assert_eq!(surface.ops().last(), Some(&DrawOp::Restore));
        assert_eq!(surface.save_depth(), 0);
    }
}
