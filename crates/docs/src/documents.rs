use crate::align::{PagePadding, horizontal_offset, vertical_offset};
use crate::config::{DocumentOffsetConfig, DocumentsConfig};
use crate::extension::{ExtensionOffset, ExtensionRegistry};
use crate::liquid::Liquid;
use crate::observable::{PageRenderEvent, PageRenderObservable};
use crate::rotation::{rotate_point, rotated_alignment, rotated_envelope};
use quire_render_core::{DrawOp, DrawingSurface, RecordingSurface, RenderError};
use quire_skeleton::{Column, Line, LineType, Page, RenderConfig, SkeletonProvider};
use quire_types::{
    BoundRect, Scale, Size, Transform, Vector2, deg_to_rad, fix_line_width_by_scale, get_scale,
};
use serde::Serialize;
use std::sync::Arc;

/// Counters collected during one draw pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawStats {
    pub pages: usize,
    pub text_lines: usize,
    pub block_lines: usize,
    pub spans_painted: usize,
    /// Spans without content, never handed to extensions.
    pub spans_skipped: usize,
    pub cursor_saves: usize,
    pub cursor_restores: usize,
}

/// Renders the pages of a document skeleton.
///
/// The component has its own size, which is the container the pages are
/// aligned in, and a position used by hosts to map pixels back to pages.
pub struct Documents {
    key: String,
    skeleton: Option<Arc<dyn SkeletonProvider>>,
    config: DocumentsConfig,
    width: f64,
    height: f64,
    docs_left: f64,
    docs_top: f64,
    transform: Transform,
    parent_scale: Scale,
    extensions: ExtensionRegistry,
    /// Fired once per page with the page's accumulated offset.
    pub on_page_render: PageRenderObservable,
    draw_liquid: Liquid,
    dirty: bool,
    cached_ops: Option<CachedPass>,
}

/// Ops of the last recorded pass and the bounds it was culled against.
struct CachedPass {
    bounds: Option<BoundRect>,
    ops: Vec<DrawOp>,
}

impl Documents {
    /// A component without a skeleton, using the default configuration.
    pub fn new(key: impl Into<String>) -> Self {
        Self::create(key, None, None)
    }

    pub fn create(
        key: impl Into<String>,
        skeleton: Option<Arc<dyn SkeletonProvider>>,
        config: Option<DocumentsConfig>,
    ) -> Self {
        let mut documents = Self {
            key: key.into(),
            skeleton,
            config: DocumentsConfig::default(),
            width: 0.0,
            height: 0.0,
            docs_left: 0.0,
            docs_top: 0.0,
            transform: Transform::IDENTITY,
            parent_scale: Scale::default(),
            extensions: ExtensionRegistry::with_defaults(),
            on_page_render: PageRenderObservable::new(),
            draw_liquid: Liquid::new(),
            dirty: true,
            cached_ops: None,
        };
        documents.set_config(config);
        documents
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn config(&self) -> &DocumentsConfig {
        &self.config
    }

    /// Applies `config`; `None` restores the defaults and zero margins fall
    /// back to the default margins.
    pub fn set_config(&mut self, config: Option<DocumentsConfig>) {
        self.config = config.unwrap_or_default().normalized();
        if !self.config.allow_cache {
            self.cached_ops = None;
        }
        self.make_dirty(true);
    }

    pub fn get_offset_config(&self) -> DocumentOffsetConfig {
        DocumentOffsetConfig {
            docs_left: self.docs_left,
            docs_top: self.docs_top,
            document_transform: self.transform,
            page_layout_type: self.config.page_layout_type,
            page_margin_left: self.config.page_margin_left,
            page_margin_top: self.config.page_margin_top,
        }
    }

    pub fn skeleton(&self) -> Option<&Arc<dyn SkeletonProvider>> {
        self.skeleton.as_ref()
    }

    pub fn change_skeleton(&mut self, skeleton: Arc<dyn SkeletonProvider>) -> &mut Self {
        self.skeleton = Some(skeleton);
        self.make_dirty(true);
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self.make_dirty(true);
        self
    }

    /// Moves the component inside its scene. Painted ops are relative to the
    /// component, so this does not invalidate the cache.
    pub fn translate(&mut self, left: f64, top: f64) -> &mut Self {
        self.docs_left = left;
        self.docs_top = top;
        self.transform = Transform::translate((left, top));
        self
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn parent_scale(&self) -> Scale {
        self.parent_scale
    }

    pub fn set_parent_scale(&mut self, scale: Scale) {
        if self.parent_scale != scale {
            self.parent_scale = scale;
            self.make_dirty(true);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn make_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    /// Mutable access to the registry. Marks the component dirty.
    pub fn extensions_mut(&mut self) -> &mut ExtensionRegistry {
        self.make_dirty(true);
        &mut self.extensions
    }

    /// Cache-aware entry point.
    ///
    /// With caching allowed, nothing changed since the last pass and the same
    /// `bounds`, replays the recorded ops and returns `None`. Otherwise records a
    /// fresh pass, replays it onto `surface` and returns its stats.
    pub fn render(
        &mut self,
        surface: &mut dyn DrawingSurface,
        bounds: Option<&BoundRect>,
    ) -> Result<Option<DrawStats>, RenderError> {
        if self.config.allow_cache && !self.dirty {
            if let Some(cached) = &self.cached_ops {
                if cached.bounds.as_ref() == bounds {
                    log::trace!(
                        "Documents '{}': replaying {} cached ops",
                        self.key,
                        cached.ops.len()
                    );
                    RecordingSurface::replay(&cached.ops, surface)?;
                    return Ok(None);
                }
                log::debug!("Documents '{}': bounds changed, cache discarded", self.key);
            }
        }

        let mut recording = RecordingSurface::new();
        let stats = self.draw(&mut recording, bounds)?;
        let ops = recording.take_ops();
        RecordingSurface::replay(&ops, surface)?;
        if self.config.allow_cache {
            self.cached_ops = Some(CachedPass {
                bounds: bounds.copied(),
                ops,
            });
        }
        self.make_dirty(false);
        Ok(Some(stats))
    }

    /// Runs one draw pass over every page of the skeleton.
    ///
    /// A missing skeleton, or one without data, is a no-op. The first extension
    /// failure aborts the pass; the page rotation is undone before the error is
    /// returned.
    pub fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        bounds: Option<&BoundRect>,
    ) -> Result<DrawStats, RenderError> {
        let mut stats = DrawStats::default();
        let Some(skeleton) = self.skeleton.clone() else {
            return Ok(stats);
        };
        let Some(data) = skeleton.skeleton_data() else {
            log::trace!("Documents '{}': skeleton has no data", self.key);
            return Ok(stats);
        };
        log::debug!("Documents '{}': drawing {} page(s)", self.key, data.pages.len());

        self.draw_liquid.reset();
        self.extensions.clear_caches();

        let scale = get_scale(self.parent_scale);
        let mut pass = PagePass {
            extensions: &mut self.extensions,
            stats: &mut stats,
            parent_scale: self.parent_scale,
            scale,
            container: Size::new(self.width, self.height),
            bounds,
        };

        let mut page_left = 0.0;
        let mut page_top = 0.0;
        for (page_index, page) in data.pages.iter().enumerate() {
            let config = page.render_config;
            let center_angle = deg_to_rad(config.center_angle);
            let vertex_angle = deg_to_rad(config.vertex_angle);
            let final_angle = vertex_angle - center_angle;
            log::debug!(
                "Page {} at ({}, {}), final angle {:.4} rad",
                page_index,
                page_left,
                page_top,
                final_angle
            );

            let mut event = PageRenderEvent {
                page,
                page_index,
                page_left,
                page_top,
                surface: &mut *surface,
            };
            self.on_page_render.notify(&mut event);

            {
                let mut rotated = RotationGuard::start(&mut *surface, final_angle);
                let mut page_scope = self.draw_liquid.scope();
                pass.draw_page(&mut page_scope, rotated.surface(), page)?;
            }
            pass.stats.pages += 1;

            let delta = self.draw_liquid.translate_page(
                page,
                self.config.page_layout_type,
                self.config.page_margin_left,
                self.config.page_margin_top,
            );
            page_left += delta.x;
            page_top += delta.y;
        }

        debug_assert_eq!(self.draw_liquid.depth(), 0);
        let (saves, restores) = self.draw_liquid.counters();
        stats.cursor_saves = saves;
        stats.cursor_restores = restores;
        log::debug!("Documents '{}': pass finished {:?}", self.key, stats);
        Ok(stats)
    }
}

impl std::fmt::Debug for Documents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Documents")
            .field("key", &self.key)
            .field("has_skeleton", &self.skeleton.is_some())
            .field("config", &self.config)
            .field("size", &self.size())
            .field("extensions", &self.extensions)
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Rotates the surface for the lifetime of the guard, then rotates it back by
/// the exact inverse, including when painting bails out early.
struct RotationGuard<'a> {
    surface: &'a mut dyn DrawingSurface,
    angle: f64,
}

impl<'a> RotationGuard<'a> {
    fn start(surface: &'a mut dyn DrawingSurface, angle: f64) -> Self {
        surface.rotate(angle);
        Self { surface, angle }
    }

    fn surface(&mut self) -> &mut dyn DrawingSurface {
        &mut *self.surface
    }
}

impl Drop for RotationGuard<'_> {
    fn drop(&mut self) {
        self.surface.rotate(-self.angle);
    }
}

/// Per-pass state shared by the page traversal.
struct PagePass<'a> {
    extensions: &'a mut ExtensionRegistry,
    stats: &'a mut DrawStats,
    parent_scale: Scale,
    scale: f64,
    container: Size,
    bounds: Option<&'a BoundRect>,
}

/// Alignment and angles resolved for one column.
struct ColumnFrame<'a> {
    config: &'a RenderConfig,
    center_angle: f64,
    vertex_angle: f64,
    align_offset: Vector2,
    line_offsets: Option<Vec<f64>>,
}

impl PagePass<'_> {
    fn fix(&self, value: f64) -> f64 {
        fix_line_width_by_scale(value, self.scale)
    }

    /// Alignment of an unrotated page, evaluated at device scale.
    fn flat_alignment(&self, page: &Page) -> Vector2 {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        let config = &page.render_config;
        let padding = PagePadding::of(page).scaled(scale);
        let x = horizontal_offset(
            self.container.width * scale,
            page.width * scale,
            padding.left,
            padding.right,
            config.horizontal_align,
        );
        let y = vertical_offset(
            self.container.height * scale,
            page.height * scale,
            padding.top,
            padding.bottom,
            config.vertical_align,
        );
        Vector2::create(x / scale, y / scale)
    }

    fn draw_page(
        &mut self,
        liquid: &mut Liquid,
        surface: &mut dyn DrawingSurface,
        page: &Page,
    ) -> Result<(), RenderError> {
        let flat_alignment = self.flat_alignment(page);
        for section in &page.sections {
            let mut section_scope = liquid.scope();
            section_scope.translate_section(section);
            for column in &section.columns {
                let mut column_scope = section_scope.scope();
                column_scope.translate_column(column);
                self.draw_column(&mut column_scope, surface, page, column, flat_alignment)?;
            }
        }
        Ok(())
    }

    fn draw_column(
        &mut self,
        liquid: &mut Liquid,
        surface: &mut dyn DrawingSurface,
        page: &Page,
        column: &Column,
        flat_alignment: Vector2,
    ) -> Result<(), RenderError> {
        let config = &page.render_config;
        let vertex_angle = deg_to_rad(config.vertex_angle);
        let mut frame = ColumnFrame {
            config,
            center_angle: deg_to_rad(config.center_angle),
            vertex_angle,
            align_offset: flat_alignment,
            line_offsets: None,
        };

        if vertex_angle != 0.0 {
            let envelope = rotated_envelope(&column.lines, column.width, vertex_angle);
            let aligned = rotated_alignment(
                &envelope,
                vertex_angle,
                self.container,
                PagePadding::of(page),
                config,
            );
            log::trace!(
                "Rotated column: {}x{}, effective width {}",
                envelope.rotated_width,
                envelope.rotated_height,
                aligned.effective_width
            );
            liquid.translate(0.0, -envelope.vertical_shift);
            frame.align_offset = aligned.align_offset;
            frame.line_offsets = Some(envelope.line_offsets);
        }

        for (index, line) in column.lines.iter().enumerate() {
            match line.line_type {
                LineType::Block => self.draw_block_line(liquid, surface, line, &frame)?,
                LineType::Text => self.draw_text_line(liquid, surface, line, index, &frame)?,
            }
        }
        Ok(())
    }

    fn draw_block_line(
        &mut self,
        liquid: &mut Liquid,
        surface: &mut dyn DrawingSurface,
        line: &Line,
        frame: &ColumnFrame<'_>,
    ) -> Result<(), RenderError> {
        self.stats.block_lines += 1;
        let mut line_scope = liquid.scope();
        line_scope.translate_line(line, false);
        let offset = ExtensionOffset {
            origin_translate: Vector2::create(self.fix(line_scope.x()), self.fix(line_scope.y())),
            align_offset: frame.align_offset,
            render_config: *frame.config,
            ..ExtensionOffset::default()
        };
        log::trace!("Block line at {:?}", offset.origin_translate);
        self.extensions
            .draw_line(surface, self.parent_scale, line, &offset, self.bounds)
    }

    fn draw_text_line(
        &mut self,
        liquid: &mut Liquid,
        surface: &mut dyn DrawingSurface,
        line: &Line,
        index: usize,
        frame: &ColumnFrame<'_>,
    ) -> Result<(), RenderError> {
        self.stats.text_lines += 1;
        let (sin, cos) = frame.center_angle.sin_cos();
        let ascent_sin = line.ascent * sin;
        let ascent_cos = line.ascent * cos;

        let mut line_scope = liquid.scope();
        line_scope.translate_line(line, true);
        if let Some(offset_x) = frame.line_offsets.as_ref().and_then(|o| o.get(index)) {
            line_scope.translate(*offset_x, 0.0);
        }

        for divide in &line.divides {
            let mut divide_scope = line_scope.scope();
            divide_scope.translate_divide(divide);

            for span in &divide.spans {
                if !span.is_paintable() {
                    self.stats.spans_skipped += 1;
                    continue;
                }

                let origin =
                    Vector2::create(self.fix(divide_scope.x()), self.fix(divide_scope.y()));
                let center_point =
                    Vector2::create(self.fix(span.width / 2.0), self.fix(line.line_height / 2.0));
                let span_left = span.left + span.padding_left;

                let span_start_point = rotate_point(
                    origin.add_by_point(self.fix(span_left), 0.0),
                    center_point,
                    frame.center_angle,
                    frame.vertex_angle,
                    frame.align_offset,
                );
                let span_point_with_font = rotate_point(
                    origin.add_by_point(self.fix(span_left + ascent_sin), self.fix(ascent_cos)),
                    center_point,
                    frame.center_angle,
                    frame.vertex_angle,
                    frame.align_offset,
                );

                let offset = ExtensionOffset {
                    origin_translate: origin,
                    span_start_point,
                    span_point_with_font,
                    center_point,
                    align_offset: frame.align_offset,
                    render_config: *frame.config,
                };
                log::trace!("Span '{}' at {:?}", span.content, span_start_point);
                self.extensions
                    .draw_span(surface, self.parent_scale, span, &offset, self.bounds)?;
                self.stats.spans_painted += 1;
            }
        }
        Ok(())
    }
}
