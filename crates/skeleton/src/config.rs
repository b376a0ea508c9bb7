use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    /// Resolved like `Left`; justification is already baked into span offsets.
    Justified,
}

/// How content taller than the component is treated once rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapStrategy {
    #[default]
    Unspecified,
    Overflow,
    Clip,
    Wrap,
}

/// Direction in which consecutive pages are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageLayoutType {
    #[default]
    Vertical,
    Horizontal,
}

/// Per-page alignment and rotation inputs. Read-only for the renderer.
///
/// Angles are in degrees. Every field is defaulted so a page without a render
/// configuration behaves as top/left aligned, unrotated text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub vertical_align: VerticalAlign,
    pub horizontal_align: HorizontalAlign,
    /// Baseline rotation.
    pub center_angle: f64,
    /// Skew of the text block.
    pub vertex_angle: f64,
    pub wrap_strategy: WrapStrategy,
    /// Paint runs without East-Asian characters upright in vertical text.
    pub is_rotate_non_east_asian: bool,
}
