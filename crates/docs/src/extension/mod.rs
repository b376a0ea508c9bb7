//! Paint extensions.
//!
//! The renderer never paints by itself. It computes geometry for each block line
//! and each non-empty span and hands it to the registered extensions, which
//! issue the actual surface calls. Extensions run in registration order on every
//! unit, so earlier extensions paint underneath later ones.

mod background;
mod block;
mod decoration;
mod font_and_baseline;

pub use self::background::SpanBackground;
pub use self::block::BlockPlaceholder;
pub use self::decoration::SpanDecoration;
pub use self::font_and_baseline::FontAndBaseline;

use quire_render_core::{DrawingSurface, RenderError};
use quire_skeleton::{Line, RenderConfig, Span};
use quire_types::{BoundRect, Scale, Vector2};

/// Geometry computed for one paintable unit during a pass.
///
/// Line-level dispatch fills only `origin_translate`, `align_offset` and
/// `render_config`; the span anchors stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtensionOffset {
    /// Cursor position snapped to the device grid.
    pub origin_translate: Vector2,
    /// Rotated top-left (ink start) of the span.
    pub span_start_point: Vector2,
    /// Rotated baseline start of the span.
    pub span_point_with_font: Vector2,
    /// Half the span width and half the line height: the rotation pivot.
    pub center_point: Vector2,
    pub align_offset: Vector2,
    pub render_config: RenderConfig,
}

/// Paints BLOCK lines.
pub trait LineExtension {
    fn key(&self) -> &str;

    /// Drops state memoised during the previous pass.
    fn clear_cache(&mut self) {}

    fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        parent_scale: Scale,
        line: &Line,
        offset: &ExtensionOffset,
        bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError>;
}

/// Paints non-empty spans of TEXT lines.
pub trait SpanExtension {
    fn key(&self) -> &str;

    /// Drops state memoised during the previous pass.
    fn clear_cache(&mut self) {}

    fn draw(
        &mut self,
        surface: &mut dyn DrawingSurface,
        parent_scale: Scale,
        span: &Span,
        offset: &ExtensionOffset,
        bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    Line,
    Span,
}

pub enum DocsExtension {
    Line(Box<dyn LineExtension>),
    Span(Box<dyn SpanExtension>),
}

impl DocsExtension {
    pub fn line(extension: impl LineExtension + 'static) -> Self {
        DocsExtension::Line(Box::new(extension))
    }

    pub fn span(extension: impl SpanExtension + 'static) -> Self {
        DocsExtension::Span(Box::new(extension))
    }

    pub fn kind(&self) -> ExtensionKind {
        match self {
            DocsExtension::Line(_) => ExtensionKind::Line,
            DocsExtension::Span(_) => ExtensionKind::Span,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            DocsExtension::Line(ext) => ext.key(),
            DocsExtension::Span(ext) => ext.key(),
        }
    }

    pub fn clear_cache(&mut self) {
        match self {
            DocsExtension::Line(ext) => ext.clear_cache(),
            DocsExtension::Span(ext) => ext.clear_cache(),
        }
    }
}

impl std::fmt::Debug for DocsExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsExtension")
            .field("kind", &self.kind())
            .field("key", &self.key())
            .finish()
    }
}

/// The default extensions, in paint order: background, glyphs, decorations,
/// then block placeholders.
pub fn default_extensions() -> Vec<DocsExtension> {
    vec![
        DocsExtension::span(SpanBackground::default()),
        DocsExtension::span(FontAndBaseline::default()),
        DocsExtension::span(SpanDecoration::default()),
        DocsExtension::line(BlockPlaceholder::default()),
    ]
}

/// Insertion-ordered set of extensions keyed by [`DocsExtension::key`].
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    extensions: Vec<DocsExtension>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for extension in default_extensions() {
            registry.register(extension);
        }
        registry
    }

    /// Appends `extension`, or replaces an extension with the same key in place.
    pub fn register(&mut self, extension: DocsExtension) {
        match self.extensions.iter_mut().find(|e| e.key() == extension.key()) {
            Some(existing) => {
                log::debug!("Replacing extension '{}'", extension.key());
                *existing = extension;
            }
            None => self.extensions.push(extension),
        }
    }

    pub fn unregister(&mut self, key: &str) -> Option<DocsExtension> {
        let index = self.extensions.iter().position(|e| e.key() == key)?;
        Some(self.extensions.remove(index))
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|e| e.key())
    }

    pub fn clear_caches(&mut self) {
        for extension in &mut self.extensions {
            extension.clear_cache();
        }
    }

    /// Runs every line extension on `line`, stopping at the first failure.
    pub fn draw_line(
        &mut self,
        surface: &mut dyn DrawingSurface,
        parent_scale: Scale,
        line: &Line,
        offset: &ExtensionOffset,
        bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        for extension in &mut self.extensions {
            if let DocsExtension::Line(ext) = extension {
                ext.draw(surface, parent_scale, line, offset, bounds)
                    .inspect_err(|e| log::warn!("Line extension '{}' failed: {}", ext.key(), e))?;
            }
        }
        Ok(())
    }

    /// Runs every span extension on `span`, stopping at the first failure.
    pub fn draw_span(
        &mut self,
        surface: &mut dyn DrawingSurface,
        parent_scale: Scale,
        span: &Span,
        offset: &ExtensionOffset,
        bounds: Option<&BoundRect>,
    ) -> Result<(), RenderError> {
        for extension in &mut self.extensions {
            if let DocsExtension::Span(ext) = extension {
                ext.draw(surface, parent_scale, span, offset, bounds)
                    .inspect_err(|e| log::warn!("Span extension '{}' failed: {}", ext.key(), e))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_render_core::RecordingSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        key: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl SpanExtension for Probe {
        fn key(&self) -> &str {
            self.key
        }

        fn clear_cache(&mut self) {
            self.log.borrow_mut().push(format!("clear {}", self.key));
        }

        fn draw(
            &mut self,
            _surface: &mut dyn DrawingSurface,
            _parent_scale: Scale,
            span: &Span,
            _offset: &ExtensionOffset,
            _bounds: Option<&BoundRect>,
        ) -> Result<(), RenderError> {
            self.log.borrow_mut().push(format!("{} {}", self.key, span.content));
            Ok(())
        }
    }

    fn probe(key: &'static str, log: &Rc<RefCell<Vec<String>>>) -> DocsExtension {
        DocsExtension::span(Probe {
            key,
            log: Rc::clone(log),
        })
    }

    fn span(content: &str) -> Span {
        Span {
            content: content.into(),
            ..Span::default()
        }
    }

    #[test]
    fn defaults_are_registered_in_paint_order() {
        let registry = ExtensionRegistry::with_defaults();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(
            keys,
            vec!["span-background", "font-and-baseline", "span-decoration", "block-placeholder"]
        );
    }

    #[test]
    fn dispatch_follows_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ExtensionRegistry::new();
        registry.register(probe("b", &log));
        registry.register(probe("a", &log));
        let mut surface = RecordingSurface::new();
        registry
            .draw_span(&mut surface, Scale::default(), &span("x"), &ExtensionOffset::default(), None)
            .unwrap();
        assert_eq!(*log.borrow(), vec!["b x", "a x"]);
    }

    #[test]
    fn re_registering_a_key_keeps_its_position() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ExtensionRegistry::new();
        registry.register(probe("first", &log));
        registry.register(probe("second", &log));
        registry.register(probe("first", &log));
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn unregister_removes_by_key() {
        let mut registry = ExtensionRegistry::with_defaults();
        let removed = registry.unregister("font-and-baseline").unwrap();
        assert_eq!(removed.kind(), ExtensionKind::Span);
        assert_eq!(registry.len(), 3);
        assert!(registry.unregister("font-and-baseline").is_none());
    }

    #[test]
    fn span_extensions_ignore_lines() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ExtensionRegistry::new();
        registry.register(probe("only-spans", &log));
        let mut surface = RecordingSurface::new();
        registry
            .draw_line(&mut surface, Scale::default(), &Line::default(), &ExtensionOffset::default(), None)
            .unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clear_caches_reaches_every_extension() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ExtensionRegistry::new();
        registry.register(probe("a", &log));
        registry.register(probe("b", &log));
        registry.clear_caches();
        assert_eq!(*log.borrow(), vec!["clear a", "clear b"]);
    }
}
