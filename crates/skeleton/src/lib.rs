//! The document skeleton: a precomputed, read-only layout tree.
//!
//! Pages hold sections, sections hold columns, columns hold lines, text lines
//! hold divides and divides hold spans. Every offset needed to paint has already
//! been resolved by an external layout stage; the renderer only walks the tree.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkeletonError {
    #[error("Invalid skeleton JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid skeleton: {0}")]
    Invalid(String),
}

pub mod config;
pub mod model;
pub mod provider;

pub use self::config::{HorizontalAlign, PageLayoutType, RenderConfig, VerticalAlign, WrapStrategy};
pub use self::model::{
    Column, Divide, Line, LineType, Page, Section, SkeletonData, Span, SpanStyle,
};
pub use self::provider::{DocumentSkeleton, SkeletonProvider};
