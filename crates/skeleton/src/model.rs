use crate::SkeletonError;
use crate::config::RenderConfig;
use quire_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonData {
    pub pages: Vec<Page>,
}

impl SkeletonData {
    /// Checks the page invariants: finite, non-negative dimensions and margins
    /// that fit inside the dimension they belong to.
    pub fn validate(&self) -> Result<(), SkeletonError> {
        for (index, page) in self.pages.iter().enumerate() {
            page.validate()
                .map_err(|reason| SkeletonError::Invalid(format!("page {}: {}", index, reason)))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    pub sections: Vec<Section>,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub width: f64,
    pub height: f64,
    pub render_config: RenderConfig,
}

impl Page {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }
        let margins = [
            ("marginTop", self.margin_top, self.height),
            ("marginBottom", self.margin_bottom, self.height),
            ("marginLeft", self.margin_left, self.width),
            ("marginRight", self.margin_right, self.width),
        ];
        for (name, margin, dimension) in margins {
            if !margin.is_finite() || margin < 0.0 || margin > dimension {
                return Err(format!("{} {} does not fit in {}", name, margin, dimension));
            }
        }
        Ok(())
    }
}

/// A grouping unit; its only geometry is its vertical offset on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Section {
    pub top: f64,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    pub left: f64,
    /// Width used as the hypotenuse of the rotated text envelope.
    pub width: f64,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineType {
    #[default]
    Text,
    /// Opaque content (embedded objects) painted as one unit by line extensions.
    Block,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Line {
    #[serde(rename = "type")]
    pub line_type: LineType,
    /// Offset of the line box from the top of its column.
    pub top: f64,
    #[serde(alias = "asc")]
    pub ascent: f64,
    pub line_height: f64,
    pub margin_top: f64,
    pub padding_top: f64,
    /// First-line indent, applied when the line is entered with indentation.
    pub padding_left: f64,
    /// Laid-out width; used by block lines.
    pub width: f64,
    pub divides: Vec<Divide>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Divide {
    pub left: f64,
    pub padding_left: f64,
    pub width: f64,
    #[serde(alias = "spanGroup")]
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Span {
    pub content: String,
    pub width: f64,
    pub left: f64,
    pub padding_left: f64,
    pub style: SpanStyle,
}

impl Span {
    /// Spans without content are never painted.
    pub fn is_paintable(&self) -> bool {
        !self.content.is_empty()
    }
}

/// Resolved text style of a span. Shaping already happened upstream; these
/// values only parameterise paint calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpanStyle {
    pub font_family: String,
    /// Font size in points.
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub underline: bool,
    pub strikethrough: bool,
}

impl Default for SpanStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 11.0,
            bold: false,
            italic: false,
            color: None,
            background: None,
            underline: false,
            strikethrough: false,
        }
    }
}

impl SpanStyle {
    /// CSS font shorthand, e.g. `italic bold 11pt Arial`.
    pub fn font_string(&self) -> String {
        let mut font = String::new();
        if self.italic {
            font.push_str("italic ");
        }
        if self.bold {
            font.push_str("bold ");
        }
        font.push_str(&format!("{}pt {}", self.font_size, self.font_family));
        font
    }
}
