/// Physical size of the render surface backing a CSS-sized container.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Scales the CSS size by the device pixel ratio, clamped to `max_ratio`.
    /// Never returns a zero dimension.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_ratio: f64) -> Self {
        let ratio = pixel_ratio(device_pixel_ratio, max_ratio);
        Self {
            width: physical(css_width, ratio),
            height: physical(css_height, ratio),
        }
    }
}

/// Effective pixel ratio: `min(dpr, max_ratio)`, falling back to 1 for
/// nonsensical inputs.
pub fn pixel_ratio(device_pixel_ratio: f64, max_ratio: f64) -> f64 {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    if max_ratio.is_finite() && max_ratio > 0.0 {
        dpr.min(max_ratio)
    } else {
        dpr
    }
}

fn physical(css: f64, ratio: f64) -> u32 {
    if !css.is_finite() || css <= 0.0 {
        return 1;
    }
    ((css * ratio).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::{SurfaceSize, pixel_ratio};

    #[test]
    fn pixel_ratio_is_clamped_to_two() {
        assert_eq!(pixel_ratio(1.0, 2.0), 1.0);
        assert_eq!(pixel_ratio(1.5, 2.0), 1.5);
        assert_eq!(pixel_ratio(3.0, 2.0), 2.0);
        assert_eq!(pixel_ratio(0.0, 2.0), 1.0);
        assert_eq!(pixel_ratio(f64::NAN, 2.0), 1.0);
    }

    #[test]
    fn css_size_scales_by_effective_ratio() {
        assert_eq!(
            SurfaceSize::from_css(640.0, 360.0, 3.0, 2.0),
            SurfaceSize {
                width: 1280,
                height: 720
            }
        );
        assert_eq!(
            SurfaceSize::from_css(100.5, 50.25, 1.0, 2.0),
            SurfaceSize {
                width: 101,
                height: 50
            }
        );
    }

    #[test]
    fn collapsed_container_still_gets_one_pixel() {
        assert_eq!(
            SurfaceSize::from_css(0.0, -4.0, 2.0, 2.0),
            SurfaceSize {
                width: 1,
                height: 1
            }
        );
    }
}
