use crate::geometry::Scale;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Effective device scale of a parent scene: the larger of its two axes.
pub fn get_scale(parent_scale: Scale) -> f64 {
    parent_scale.scale_x.max(parent_scale.scale_y)
}

/// Snaps `value` to the device pixel grid implied by `scale`.
///
/// Adjacent spans painted from snapped offsets share exact pixel edges, so no
/// seams appear between them when zoomed. Halves round toward positive
/// infinity, so `-0.25` at scale 2 snaps to zero.
pub fn fix_line_width_by_scale(value: f64, scale: f64) -> f64 {
    if scale == 0.0 {
        return value;
    }
    (value * scale + 0.5).floor() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_device_pixels() {
        assert_eq!(fix_line_width_by_scale(10.3, 1.0), 10.0);
        assert_eq!(fix_line_width_by_scale(10.3, 2.0), 10.5);
        assert_eq!(fix_line_width_by_scale(-0.26, 2.0), -0.5);
    }

    #[test]
    fn halves_round_up_on_both_sides_of_zero() {
        assert_eq!(fix_line_width_by_scale(0.25, 2.0), 0.5);
        assert_eq!(fix_line_width_by_scale(-0.25, 2.0), 0.0);
        assert_eq!(fix_line_width_by_scale(-1.5, 1.0), -1.0);
        assert_eq!(fix_line_width_by_scale(2.5, 1.0), 3.0);
    }

    #[test]
    fn zero_scale_leaves_value_untouched() {
        assert_eq!(fix_line_width_by_scale(3.3, 0.0), 3.3);
    }

    #[test]
    fn scale_is_the_larger_axis() {
        assert_eq!(get_scale(Scale { scale_x: 1.5, scale_y: 2.0 }), 2.0);
        assert_eq!(get_scale(Scale::default()), 1.0);
    }

    #[test]
    fn degrees_convert_to_radians() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert_eq!(deg_to_rad(0.0), 0.0);
    }
}
