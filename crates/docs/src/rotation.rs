//! Geometry for skewed and rotated text.
//!
//! A non-zero vertex angle turns every line of a column into a slanted baseline.
//! Consecutive lines are stacked horizontally, so the column's bounding box is a
//! parallelogram whose long side is the column width.

use crate::align::{PagePadding, horizontal_offset, vertical_offset};
use quire_skeleton::{Line, RenderConfig, WrapStrategy};
use quire_types::{Size, Vector2};

const DEGENERATE_SIN: f64 = 1e-9;

/// Rotates `point` about `point + pivot` by `center_angle`, maps the result
/// through the vertex rotation and shifts it by `align_offset`.
///
/// `pivot` is relative to the point, usually the centre of the span box. The
/// map is affine in `point`, so the difference of two anchors computed with the
/// same pivot and angles is the rotated difference of their inputs.
pub fn rotate_point(
    point: Vector2,
    pivot: Vector2,
    center_angle: f64,
    vertex_angle: f64,
    align_offset: Vector2,
) -> Vector2 {
    let spun = point + pivot - pivot.rotate(center_angle);
    spun.rotate(vertex_angle) + align_offset
}

/// Axis-aligned bounds of a rotated column and the per-line corrections that
/// keep its lines stacked inside them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotatedEnvelope {
    pub rotated_width: f64,
    pub rotated_height: f64,
    /// Rotated-frame x shift for each line, index-aligned with the input lines.
    pub line_offsets: Vec<f64>,
    /// Shift that moves the leftmost corner onto x = 0.
    pub fix_offset_x: f64,
    /// Y of the topmost corner; negative when the text climbs upwards.
    pub fix_offset_y: f64,
    /// Top of the first line. Lines are measured from here.
    pub vertical_shift: f64,
}

/// Computes the envelope of `lines` laid out `column_width` wide and skewed by
/// `vertex_angle` radians.
///
/// A zero angle or an empty column yields an all-zero envelope.
pub fn rotated_envelope(lines: &[Line], column_width: f64, vertex_angle: f64) -> RotatedEnvelope {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return RotatedEnvelope::default();
    };
    if vertex_angle == 0.0 {
        return RotatedEnvelope {
            line_offsets: vec![0.0; lines.len()],
            ..RotatedEnvelope::default()
        };
    }

    let (sin, cos) = vertex_angle.sin_cos();
    if sin.abs() < DEGENERATE_SIN {
        return RotatedEnvelope {
            rotated_width: column_width * cos.abs(),
            line_offsets: vec![0.0; lines.len()],
            ..RotatedEnvelope::default()
        };
    }

    let first_top = first.top;
    let stack_height = last.top + last.line_height - first_top;
    let line_offsets = lines
        .iter()
        .map(|line| -(line.top - first_top) * cos / sin)
        .collect();

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for stacked in [0.0, stack_height] {
        for along in [0.0, column_width] {
            let x = -stacked / sin + along * cos;
            let y = along * sin;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    RotatedEnvelope {
        rotated_width: max_x - min_x,
        rotated_height: max_y - min_y,
        line_offsets,
        fix_offset_x: -min_x,
        fix_offset_y: min_y,
        vertical_shift: first_top,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedAlignment {
    pub align_offset: Vector2,
    /// Width used for horizontal alignment after the overflow clip.
    pub effective_width: f64,
}

/// Aligns a rotated column inside `container`, applying the overflow policy.
///
/// When the envelope is taller than the container and wrapping is off, the
/// width is clipped to the width at which the slanted text exactly fits. This
/// happens for `Overflow`, or for any strategy with a positive angle. Negative
/// angles under other strategies keep the full width and may spill sideways.
pub fn rotated_alignment(
    envelope: &RotatedEnvelope,
    vertex_angle: f64,
    container: Size,
    padding: PagePadding,
    config: &RenderConfig,
) -> RotatedAlignment {
    let exceeds_height = envelope.rotated_height > container.height;

    let mut effective_width = envelope.rotated_width;
    if exceeds_height
        && config.wrap_strategy != WrapStrategy::Wrap
        && (config.wrap_strategy == WrapStrategy::Overflow || vertex_angle > 0.0)
    {
        effective_width = container.height / vertex_angle.abs().tan();
    }

    let horizontal = horizontal_offset(
        container.width,
        effective_width,
        padding.left,
        padding.right,
        config.horizontal_align,
    );
    let vertical = vertical_offset(
        container.height,
        envelope.rotated_height,
        padding.top,
        padding.bottom,
        config.vertical_align,
    );

    let exceed_height_fix = if !exceeds_height {
        vertical - envelope.fix_offset_y
    } else if vertex_angle < 0.0 {
        container.height - (envelope.rotated_height + envelope.fix_offset_y)
    } else {
        -envelope.fix_offset_y
    };

    RotatedAlignment {
        align_offset: Vector2::create(horizontal + envelope.fix_offset_x, exceed_height_fix),
        effective_width,
    }
}
