use quire_render_core::RenderError;
use quire_skeleton::SkeletonError;
use thiserror::Error;

/// Errors surfaced by the rendering front end.
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Skeleton error: {0}")]
    Skeleton(#[from] SkeletonError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for QuireError {
    fn from(e: serde_json::Error) -> Self {
        QuireError::Skeleton(SkeletonError::Json(e))
    }
}
