use quire_skeleton::PageLayoutType;
use quire_types::Transform;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_MARGIN_LEFT: f64 = 17.0;
pub const DEFAULT_PAGE_MARGIN_TOP: f64 = 14.0;

/// Construction-time configuration of a [`crate::Documents`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentsConfig {
    /// Gap between horizontally stacked pages.
    pub page_margin_left: f64,
    /// Gap between vertically stacked pages.
    pub page_margin_top: f64,
    pub page_layout_type: PageLayoutType,
    /// Keep the ops of the last pass and replay them while nothing changed.
    pub allow_cache: bool,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            page_margin_left: DEFAULT_PAGE_MARGIN_LEFT,
            page_margin_top: DEFAULT_PAGE_MARGIN_TOP,
            page_layout_type: PageLayoutType::Vertical,
            allow_cache: false,
        }
    }
}

impl DocumentsConfig {
    /// Replaces zero margins with the defaults.
    pub fn normalized(self) -> Self {
        let or_default = |value: f64, default: f64| if value == 0.0 { default } else { value };
        Self {
            page_margin_left: or_default(self.page_margin_left, DEFAULT_PAGE_MARGIN_LEFT),
            page_margin_top: or_default(self.page_margin_top, DEFAULT_PAGE_MARGIN_TOP),
            ..self
        }
    }
}

/// Where the component sits and how its pages are stacked, for collaborators
/// that map between model and pixel positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentOffsetConfig {
    pub docs_left: f64,
    pub docs_top: f64,
    pub document_transform: Transform,
    pub page_layout_type: PageLayoutType,
    pub page_margin_left: f64,
    pub page_margin_top: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DocumentsConfig::default();
        assert_eq!(config.page_margin_left, 17.0);
        assert_eq!(config.page_margin_top, 14.0);
        assert_eq!(config.page_layout_type, PageLayoutType::Vertical);
        assert!(!config.allow_cache);
    }

    #[test]
    fn partial_json_is_filled_with_defaults() {
        let config: DocumentsConfig =
            serde_json::from_str(r#"{ "pageLayoutType": "HORIZONTAL", "allowCache": true }"#).unwrap();
        assert_eq!(config.page_layout_type, PageLayoutType::Horizontal);
        assert!(config.allow_cache);
        assert_eq!(config.page_margin_left, 17.0);
    }

    #[test]
    fn zero_margins_normalize_to_defaults() {
        let config = DocumentsConfig {
            page_margin_left: 0.0,
            page_margin_top: 30.0,
            ..DocumentsConfig::default()
        }
        .normalized();
        assert_eq!(config.page_margin_left, 17.0);
        assert_eq!(config.page_margin_top, 30.0);
    }
}
