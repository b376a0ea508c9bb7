use super::{ExtensionOffset, SpanExtension};
use quire_render_core::{DrawingSurface, RenderError};
use quire_skeleton::Span;
use quire_types::{BoundRect, Color, Scale, deg_to_rad};

/// Paints span text on its baseline.
///
/// The font is only re-issued when it changes, so a run of spans in one style
/// costs a single `set_font`. The memo lives for one pass. The fill colour is
/// set for every span, since earlier extensions fill with their own colours.
#[derive(Debug, Default)]
pub struct FontAndBaseline {
    font: Option<String>,
}

impl FontAndBaseline {
    fn apply_style(&mut self, surface: &mut dyn DrawingSurface, span: &Span) {
        let font = span.style.font_string();
        if self.font.as_deref() != Some(font.as_str()) {
            surface.set_font(&font);
            self.font = Some(font);
        }
        surface.set_fill_style(span.style.color.unwrap_or(Color::BLACK));
    }
}

impl SpanExtension for FontAndBaseline {
    fn key(&self) -> &str {
        "font-and-baseline"
    }

    fn clear_cache(&mut self) {
        self.font = None;
    }

    fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        _parent_scale: Scale,
        span: &Span,
        offset: &ExtensionOffset,
        _bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        self.apply_style(surface, span);
        let anchor = offset.span_point_with_font;
        let config = &offset.render_config;

        let upright = config.is_rotate_non_east_asian
            && config.vertex_angle.abs() == 90.0
            && !has_east_asian(&span.content);
        if !upright {
            return surface.fill_text(&span.content, anchor.x, anchor.y);
        }

        // Latin runs in vertical text stay upright, turned back about their anchor.
        log::trace!("Painting '{}' upright", span.content);
        surface.save();
        surface.translate(anchor.x, anchor.y);
        surface.rotate(-deg_to_rad(config.vertex_angle));
        let result = surface.fill_text(&span.content, 0.0, 0.0);
        surface.restore();
        result
    }
}

/// True if `text` contains a CJK ideograph, kana, hangul or full-width form.
pub fn has_east_asian(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c as u32,
            0x1100..=0x11FF
            | 0x2E80..=0x2FDF
            | 0x3000..=0x30FF
            | 0x3130..=0x318F
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xAC00..=0xD7AF
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFFEF
            | 0x20000..=0x2FA1F)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_render_core::{DrawOp, RecordingSurface};
    use quire_skeleton::{RenderConfig, SpanStyle};
    use quire_types::Vector2;

    fn span(content: &str) -> Span {
        Span {
            content: content.into(),
            width: 20.0,
            ..Span::default()
        }
    }

    fn offset(config: RenderConfig) -> ExtensionOffset {
        ExtensionOffset {
            span_point_with_font: Vector2::create(4.0, 12.0),
            render_config: config,
            ..ExtensionOffset::default()
        }
    }

    fn draw(ext: &mut FontAndBaseline, surface: &mut RecordingSurface, span: &Span, config: RenderConfig) {
        ext.draw(surface, Scale::default(), span, &offset(config), None)
            .unwrap();
    }

    #[test]
    fn paints_text_at_baseline_anchor() {
        let mut surface = RecordingSurface::new();
        draw(&mut FontAndBaseline::default(), &mut surface, &span("hi"), RenderConfig::default());
        assert_eq!(
            surface.ops(),
            &[
                DrawOp::SetFont {
                    font: "11pt Arial".into()
                },
                DrawOp::SetFillStyle { color: Color::BLACK },
                DrawOp::FillText {
                    text: "hi".into(),
                    x: 4.0,
                    y: 12.0
                },
            ]
        );
    }

    #[test]
    fn style_is_memoised_until_cleared() {
        let mut ext = FontAndBaseline::default();
        let mut surface = RecordingSurface::new();
        draw(&mut ext, &mut surface, &span("a"), RenderConfig::default());
        draw(&mut ext, &mut surface, &span("b"), RenderConfig::default());
        let font_sets = |s: &RecordingSurface| {
            s.ops()
                .iter()
                .filter(|op| matches!(op, DrawOp::SetFont { .. }))
                .count()
        };
        assert_eq!(font_sets(&surface), 1);

        ext.clear_cache();
        draw(&mut ext, &mut surface, &span("c"), RenderConfig::default());
        assert_eq!(font_sets(&surface), 2);
    }

    #[test]
    fn colour_change_is_reissued() {
        let mut ext = FontAndBaseline::default();
        let mut surface = RecordingSurface::new();
        draw(&mut ext, &mut surface, &span("a"), RenderConfig::default());
        let red = Span {
            style: SpanStyle {
                color: Some(Color::rgb(255, 0, 0)),
                ..SpanStyle::default()
            },
            ..span("b")
        };
        draw(&mut ext, &mut surface, &red, RenderConfig::default());
        assert!(surface.ops().contains(&DrawOp::SetFillStyle {
            color: Color::rgb(255, 0, 0)
        }));
    }

    #[test]
    fn latin_text_in_vertical_layout_is_turned_upright() {
        let config = RenderConfig {
            vertex_angle: 90.0,
            is_rotate_non_east_asian: true,
            ..RenderConfig::default()
        };
        let mut surface = RecordingSurface::new();
        draw(&mut FontAndBaseline::default(), &mut surface, &span("abc"), config);
        let ops = surface.ops();
        assert!(ops.contains(&DrawOp::Rotate {
            angle: -deg_to_rad(90.0)
        }));
        assert!(ops.contains(&DrawOp::FillText {
            text: "abc".into(),
            x: 0.0,
            y: 0.0
        }));
        assert_eq!(surface.save_depth(), 0);
    }

    #[test]
    fn east_asian_text_keeps_layout_rotation() {
        let config = RenderConfig {
            vertex_angle: -90.0,
            is_rotate_non_east_asian: true,
            ..RenderConfig::default()
        };
        let mut surface = RecordingSurface::new();
        draw(&mut FontAndBaseline::default(), &mut surface, &span("漢字"), config);
        assert!(!surface.ops().iter().any(|op| matches!(op, DrawOp::Rotate { .. })));
    }

    #[test]
    fn detects_east_asian_scripts() {
        assert!(has_east_asian("中文"));
        assert!(has_east_asian("かな"));
        assert!(has_east_asian("한국어"));
        assert!(has_east_asian("mixed 字"));
        assert!(!has_east_asian("plain latin"));
        assert!(!has_east_asian(""));
    }
}
