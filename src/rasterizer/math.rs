//! Viewport transform math

/// Map one NDC component into pixel space along a single axis.
///
/// `-1` lands on `origin`, `+1` on `origin + extent`. Halfway results round
/// away from zero, so 2.5 becomes 3 and -7.5 becomes -8. The caller checks
/// that `ndc` is finite; results beyond the i32 range saturate.
pub fn ndc_to_pixel(ndc: f64, origin: i32, extent: i32) -> i32 {
    let p = (ndc + 1.0) * (extent as f64 / 2.0) + origin as f64;
    p.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_endpoints() {
        assert_eq!(ndc_to_pixel(-1.0, 25, 50), 25);
        assert_eq!(ndc_to_pixel(1.0, 25, 50), 75);
        assert_eq!(ndc_to_pixel(0.0, 25, 50), 50);
        assert_eq!(ndc_to_pixel(-0.5, 25, 50), 38);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 1.0 * 2.5 = 2.5
        assert_eq!(ndc_to_pixel(0.0, 0, 5), 3);
        // 2.5 - 10 = -7.5
        assert_eq!(ndc_to_pixel(0.0, -10, 5), -8);
        // 3.5 stays 4, not the even neighbour
        assert_eq!(ndc_to_pixel(0.0, 1, 5), 4);
    }

    #[test]
    fn test_decimal_half_pixel() {
        // (0.9 + 1) * 25 = 47.5
        assert_eq!(ndc_to_pixel(0.9, 0, 50), 48);
        // (0.3 + 1) * 25 = 32.5
        assert_eq!(ndc_to_pixel(0.3, 0, 50), 33);
    }

    #[test]
    fn test_outside_unit_range_extrapolates() {
        assert_eq!(ndc_to_pixel(3.0, 0, 10), 20);
        assert_eq!(ndc_to_pixel(-3.0, 0, 10), -10);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(ndc_to_pixel(1.0e30, 0, 10), i32::MAX);
        assert_eq!(ndc_to_pixel(-1.0e30, 0, 10), i32::MIN);
    }
}
