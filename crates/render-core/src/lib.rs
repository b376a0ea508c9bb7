//! Core rendering abstractions for skeleton rendering.
//!
//! This crate provides the fundamental traits and types shared by the renderer
//! and its drawing backends:
//! - `DrawingSurface` trait abstracting the host's 2-D canvas
//! - `DrawOp`, a serializable record of one surface call
//! - `RecordingSurface`, a backend that records ops and tracks the transform
//! - Error types for rendering operations

mod error;
mod recording;
mod traits;
mod types;

pub use error::RenderError;
pub use recording::RecordingSurface;
pub use traits::DrawingSurface;
pub use types::DrawOp;
