use crate::core::data::render_config::ConfigError;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::errors::FieldError;

/// A zoomed extent must span at least this many units in the last place of
/// its largest-magnitude bound, otherwise neighbouring samples collapse onto
/// the same double.
pub const MIN_EXTENT_ULPS: f64 = 16.0;

/// Shrinks (`zoom > 1`) or grows (`zoom < 1`) the viewport's extents by
/// `zoom`, keeping its center fixed.
pub fn apply_zoom(viewport: Viewport, zoom: f64) -> Result<Viewport, FieldError> {
    if !(zoom.is_finite() && zoom > 0.0) {
        return Err(ConfigError::InvalidZoom { zoom }.into());
    }

    if zoom == 1.0 {
        return Ok(viewport);
    }

    let center = viewport.center();
    let half_width = viewport.width() / zoom / 2.0;
    let half_height = viewport.height() / zoom / 2.0;

    let x_min = center.real - half_width;
    let x_max = center.real + half_width;
    let y_min = center.imag - half_height;
    let y_max = center.imag + half_height;

    if is_collapsed(x_min, x_max) || is_collapsed(y_min, y_max) {
        return Err(ViewportError::CollapsedByZoom {
            zoom,
            width: x_max - x_min,
            height: y_max - y_min,
        }
        .into());
    }

    Ok(Viewport::new(x_min, x_max, y_min, y_max)?)
}

fn is_collapsed(lo: f64, hi: f64) -> bool {
    let extent = hi - lo;
    let scale = lo.abs().max(hi.abs());

    // non-finite extents are left for Viewport::new to report
    extent.is_finite() && (extent < f64::MIN_POSITIVE || extent < MIN_EXTENT_ULPS * f64::EPSILON * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Viewport {
        Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap()
    }

    #[test]
    fn test_zoom_of_one_is_identity() {
        let viewport = Viewport::new(-0.7453, -0.7449, 0.1127, 0.1131).unwrap();

        assert_eq!(apply_zoom(viewport, 1.0), Ok(viewport));
    }

    #[test]
    fn test_zoom_divides_extents() {
        let zoomed = apply_zoom(classic(), 2.0).unwrap();

        assert_eq!(zoomed, Viewport::new(-1.25, 0.25, -0.75, 0.75).unwrap());
    }

    #[test]
    fn test_zoom_out_grows_extents() {
        let zoomed = apply_zoom(classic(), 0.5).unwrap();

        assert_eq!(zoomed.width(), 6.0);
        assert_eq!(zoomed.height(), 6.0);
    }

    #[test]
    fn test_zoom_preserves_center() {
        let viewport = Viewport::new(-0.9, 0.3, 0.05, 0.65).unwrap();

        for zoom in [0.1, 0.75, 3.0, 17.5, 1e6] {
            let zoomed = apply_zoom(viewport, zoom).unwrap();
            let expected = viewport.center();
            let actual = zoomed.center();

            assert!((actual.real - expected.real).abs() < 1e-12, "zoom {}", zoom);
            assert!((actual.imag - expected.imag).abs() < 1e-12, "zoom {}", zoom);
        }
    }

    #[test]
    fn test_invalid_zoom_is_a_config_error() {
        for zoom in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                apply_zoom(classic(), zoom),
                Err(FieldError::InvalidConfig(ConfigError::InvalidZoom { .. }))
            ));
        }
    }

    #[test]
    fn test_extreme_zoom_collapses_viewport() {
        let result = apply_zoom(classic(), 1e300);

        assert!(matches!(
            result,
            Err(FieldError::DegenerateViewport(
                ViewportError::CollapsedByZoom { .. }
            ))
        ));
    }

    #[test]
    fn test_zoom_below_precision_around_offset_center_collapses() {
        let viewport = Viewport::new(-0.75, -0.74, 0.1, 0.11).unwrap();

        assert!(apply_zoom(viewport, 1e10).is_ok());
        assert!(matches!(
            apply_zoom(viewport, 1e15),
            Err(FieldError::DegenerateViewport(
                ViewportError::CollapsedByZoom { .. }
            ))
        ));
    }

    #[test]
    fn test_extreme_zoom_out_overflow_is_degenerate() {
        let result = apply_zoom(classic(), 1e-308);

        assert!(matches!(result, Err(FieldError::DegenerateViewport(_))));
    }
}
