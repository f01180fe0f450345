use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteBounds,
    InvalidSize { width: f64, height: f64 },
    CollapsedByZoom { zoom: f64, width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds => {
                write!(f, "viewport bounds must be finite")
            }
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::CollapsedByZoom {
                zoom,
                width,
                height,
            } => {
                write!(
                    f,
                    "zoom {} collapses the viewport to {}x{}, below double precision resolution",
                    zoom, width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Axis-aligned region of the complex plane, `x` along the real axis and
/// `y` along the imaginary axis. Bounds are finite and strictly ordered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|bound| bound.is_finite()) {
            return Err(ViewportError::NonFiniteBounds);
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        // also rejects a difference that overflows to infinity
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: midpoint(self.x_min, self.x_max),
            imag: midpoint(self.y_min, self.y_max),
        }
    }
}

// halves first so two bounds near f64::MAX do not overflow
fn midpoint(lo: f64, hi: f64) -> f64 {
    lo / 2.0 + hi / 2.0
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "re [{}, {}] im [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();

        assert_eq!(viewport.x_min(), -2.0);
        assert_eq!(viewport.x_max(), 1.0);
        assert_eq!(viewport.y_min(), -1.5);
        assert_eq!(viewport.y_max(), 1.5);
    }

    #[test]
    fn test_viewport_dimensions() {
        let viewport = Viewport::new(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(viewport.width(), 3.5);
        assert_eq!(viewport.height(), 2.0);
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        assert_eq!(
            Viewport::new(1.0, 1.0, -1.0, 1.0),
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 2.0
            })
        );
        assert_eq!(
            Viewport::new(-1.0, 1.0, 2.0, -2.0),
            Err(ViewportError::InvalidSize {
                width: 2.0,
                height: -4.0
            })
        );
        assert_eq!(
            Viewport::new(2.0, -2.0, 2.0, -2.0),
            Err(ViewportError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_bounds() {
        assert_eq!(
            Viewport::new(f64::NAN, 1.0, -1.0, 1.0),
            Err(ViewportError::NonFiniteBounds)
        );
        assert_eq!(
            Viewport::new(-1.0, f64::INFINITY, -1.0, 1.0),
            Err(ViewportError::NonFiniteBounds)
        );
    }

    #[test]
    fn test_viewport_rejects_overflowing_extent() {
        let result = Viewport::new(-f64::MAX, f64::MAX, -1.0, 1.0);

        assert!(matches!(result, Err(ViewportError::InvalidSize { .. })));
    }

    #[test]
    fn test_viewport_center() {
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_viewport_display() {
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();

        assert_eq!(viewport.to_string(), "re [-2, 1] im [-1.5, 1.5]");
    }
}
