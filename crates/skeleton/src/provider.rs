use crate::SkeletonError;
use crate::model::SkeletonData;
use std::path::Path;

/// Source of the laid-out tree for a draw pass.
///
/// Implementations must not mutate the returned data while a pass is running;
/// re-layout happens strictly between passes.
pub trait SkeletonProvider {
    /// The current skeleton, or `None` when nothing has been laid out yet.
    fn skeleton_data(&self) -> Option<&SkeletonData>;
}

/// A skeleton held in memory, typically produced by an external layout process
/// and loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct DocumentSkeleton {
    data: Option<SkeletonData>,
}

impl DocumentSkeleton {
    pub fn new(data: SkeletonData) -> Self {
        Self { data: Some(data) }
    }

    /// A provider that has no data; draw passes over it are no-ops.
    pub fn empty() -> Self {
        Self { data: None }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SkeletonError> {
        let data: SkeletonData = serde_json::from_str(json)?;
        if let Err(e) = data.validate() {
            log::warn!("Rejecting skeleton: {}", e);
            return Err(e);
        }
        log::debug!("Loaded skeleton with {} page(s)", data.pages.len());
        Ok(Self::new(data))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SkeletonError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Replaces the tree after a re-layout.
    pub fn set_data(&mut self, data: Option<SkeletonData>) {
        self.data = data;
    }
}

impl SkeletonProvider for DocumentSkeleton {
    fn skeleton_data(&self) -> Option<&SkeletonData> {
        self.data.as_ref()
    }
}
