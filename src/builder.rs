use crate::error::QuireError;
use crate::renderer::DocumentRenderer;
use quire_docs::{Documents, DocumentsConfig};
use quire_skeleton::{DocumentSkeleton, PageLayoutType, SkeletonData, SkeletonProvider};
use quire_types::{Scale, Size};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a [`DocumentRenderer`].
#[derive(Debug, Default)]
pub struct RenderBuilder {
    skeleton: Option<DocumentSkeleton>,
    config: Option<DocumentsConfig>,
    size: Option<Size>,
    parent_scale: Scale,
}

impl RenderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates a skeleton from a JSON file.
    pub fn with_skeleton_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, QuireError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            QuireError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read skeleton from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.skeleton = Some(DocumentSkeleton::from_json_str(&source)?);
        Ok(self)
    }

    /// Loads and validates a skeleton from a JSON string.
    pub fn with_skeleton_source(mut self, source: &str) -> Result<Self, QuireError> {
        self.skeleton = Some(DocumentSkeleton::from_json_str(source)?);
        Ok(self)
    }

    /// Uses an in-memory skeleton. It is validated in [`RenderBuilder::build`].
    pub fn with_skeleton_data(mut self, data: SkeletonData) -> Self {
        self.skeleton = Some(DocumentSkeleton::new(data));
        self
    }

    pub fn with_config(mut self, config: DocumentsConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, QuireError> {
        let source = fs::read_to_string(path)?;
        let config: DocumentsConfig = serde_json::from_str(&source)
            .map_err(|e| QuireError::Config(format!("Invalid documents config: {}", e)))?;
        self.config = Some(config);
        Ok(self)
    }

    /// Component size the pages are aligned in. Defaults to the size of the
    /// stacked pages.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    pub fn with_parent_scale(mut self, scale: Scale) -> Self {
        self.parent_scale = scale;
        self
    }

    pub fn build(self) -> Result<DocumentRenderer, QuireError> {
        let skeleton = self.skeleton.unwrap_or_else(DocumentSkeleton::empty);
        if let Some(data) = skeleton.skeleton_data() {
            data.validate()?;
        }
        let config = self.config.unwrap_or_default().normalized();
        if let Some(size) = self.size {
            if !(size.width >= 0.0 && size.height >= 0.0) {
                return Err(QuireError::Config(format!(
                    "Component size must be non-negative, got {}x{}",
                    size.width, size.height
                )));
            }
        }
        let size = match (self.size, skeleton.skeleton_data()) {
            (Some(size), _) => size,
            (None, Some(data)) => stacked_size(data, &config),
            (None, None) => Size::zero(),
        };

        let provider: Arc<dyn SkeletonProvider> = Arc::new(skeleton);
        let mut documents = Documents::create("quire", Some(provider), Some(config));
        documents.resize(size.width, size.height);
        documents.set_parent_scale(self.parent_scale);
        log::debug!("Built renderer: {}x{} at scale {:?}", size.width, size.height, self.parent_scale);
        Ok(DocumentRenderer::new(documents))
    }
}

/// Size of all pages stacked along the layout direction, separated by the
/// configured page margin.
pub fn stacked_size(data: &SkeletonData, config: &DocumentsConfig) -> Size {
    let gaps = data.pages.len().saturating_sub(1) as f64;
    let widths = data.pages.iter().map(|p| p.width);
    let heights = data.pages.iter().map(|p| p.height);
    match config.page_layout_type {
        PageLayoutType::Vertical => Size::new(
            widths.fold(0.0, f64::max),
            heights.sum::<f64>() + gaps * config.page_margin_top,
        ),
        PageLayoutType::Horizontal => Size::new(
            widths.sum::<f64>() + gaps * config.page_margin_left,
            heights.fold(0.0, f64::max),
        ),
    }
}
