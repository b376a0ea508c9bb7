use quire_skeleton::{HorizontalAlign, Page, VerticalAlign};

/// Page margins as seen by the alignment resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PagePadding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl PagePadding {
    pub fn of(page: &Page) -> Self {
        Self {
            top: page.margin_top,
            bottom: page.margin_bottom,
            left: page.margin_left,
            right: page.margin_right,
        }
    }

    pub fn scaled(self, scale: f64) -> Self {
        Self {
            top: self.top * scale,
            bottom: self.bottom * scale,
            left: self.left * scale,
            right: self.right * scale,
        }
    }
}

fn assert_dimension(name: &str, value: f64) {
    assert!(
        value >= 0.0,
        "alignment resolver received a negative or NaN {}: {}",
        name,
        value
    );
}

/// Left offset of content `content_width` wide inside `container_width`.
///
/// # Panics
///
/// Panics on negative dimensions.
pub fn horizontal_offset(
    container_width: f64,
    content_width: f64,
    padding_left: f64,
    padding_right: f64,
    align: HorizontalAlign,
) -> f64 {
    assert_dimension("container width", container_width);
    assert_dimension("content width", content_width);
    match align {
        HorizontalAlign::Center => (container_width - content_width) / 2.0,
        HorizontalAlign::Right => container_width - content_width - padding_right,
        HorizontalAlign::Left | HorizontalAlign::Justified => padding_left,
    }
}

/// Top offset of content `content_height` tall inside `container_height`.
///
/// # Panics
///
/// Panics on negative dimensions.
pub fn vertical_offset(
    container_height: f64,
    content_height: f64,
    padding_top: f64,
    padding_bottom: f64,
    align: VerticalAlign,
) -> f64 {
    assert_dimension("container height", container_height);
    assert_dimension("content height", content_height);
    match align {
        VerticalAlign::Middle => (container_height - content_height) / 2.0,
        VerticalAlign::Bottom => container_height - content_height - padding_bottom,
        VerticalAlign::Top => padding_top,
    }
}
