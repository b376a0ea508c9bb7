use super::{ExtensionOffset, LineExtension};
use quire_render_core::{DrawingSurface, RenderError};
use quire_skeleton::Line;
use quire_types::{BoundRect, Color, Scale, get_scale};

/// Outlines BLOCK lines. Hosts that render embedded objects themselves replace
/// this under the same key.
#[derive(Debug)]
pub struct BlockPlaceholder {
    pub stroke: Color,
}

impl Default for BlockPlaceholder {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0xC0, 0xC0, 0xC0),
        }
    }
}

impl LineExtension for BlockPlaceholder {
    fn key(&self) -> &str {
        "block-placeholder"
    }

    fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        parent_scale: Scale,
        line: &Line,
        offset: &ExtensionOffset,
        bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        let origin = offset.origin_translate + offset.align_offset;
        let outline = BoundRect::new(
            origin.x,
            origin.y,
            origin.x + line.width,
            origin.y + line.line_height,
        );
        if bounds.is_some_and(|b| !b.intersects(&outline)) {
            log::trace!("Block line at {:?} outside bounds, skipped", origin);
            return Ok(());
        }
        let scale = get_scale(parent_scale);
        surface.set_stroke_style(self.stroke);
        surface.set_line_width(if scale > 0.0 { 1.0 / scale } else { 1.0 });
        surface.stroke_rect(origin.x, origin.y, line.width, line.line_height)
    }
}
