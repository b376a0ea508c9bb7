//! Quire renders laid-out document skeletons.
//!
//! A skeleton (pages, sections, columns, lines, divides, spans) is produced by an
//! external layout stage. [`Documents`] walks it once per draw pass, resolving
//! page alignment and rotated-text geometry, and hands every paintable unit to
//! an ordered set of extensions that issue the actual drawing calls.

pub mod builder;
pub mod error;
pub mod renderer;

pub use builder::{RenderBuilder, stacked_size};
pub use error::QuireError;
pub use renderer::{DocumentRenderer, PageOffset, RenderOutput};

pub use quire_docs::{
    DocsExtension, DocumentOffsetConfig, Documents, DocumentsConfig, DrawStats, ExtensionKind,
    ExtensionOffset, ExtensionRegistry, LineExtension, Liquid, PageRenderEvent,
    PageRenderObservable, SpanExtension,
};
pub use quire_render_core::{DrawOp, DrawingSurface, RecordingSurface, RenderError};
pub use quire_skeleton::{
    Column, Divide, DocumentSkeleton, HorizontalAlign, Line, LineType, Page, PageLayoutType,
    RenderConfig, Section, SkeletonData, SkeletonError, SkeletonProvider, Span, SpanStyle,
    VerticalAlign, WrapStrategy,
};
pub use quire_types::{BoundRect, Color, Scale, Size, Transform, Vector2};
