use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Smallest escape radius for which the smoothing correction stays defined:
/// any escaped `|z|` is then above one, so `ln(ln|z|)` has a positive argument.
pub const MIN_SMOOTHING_ESCAPE_RADIUS: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    ZeroMaxIterations,
    InvalidEscapeRadius { escape_radius: f64 },
    InvalidZoom { zoom: f64 },
    EscapeRadiusTooSmallForSmoothing { escape_radius: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "width must be greater than zero"),
            Self::ZeroHeight => write!(f, "height must be greater than zero"),
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius { escape_radius } => {
                write!(
                    f,
                    "escape radius must be a positive finite number: {}",
                    escape_radius
                )
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be a positive finite number: {}", zoom)
            }
            Self::EscapeRadiusTooSmallForSmoothing { escape_radius } => {
                write!(
                    f,
                    "smoothing requires an escape radius of at least {}: {}",
                    MIN_SMOOTHING_ESCAPE_RADIUS, escape_radius
                )
            }
        }
    }
}

impl Error for ConfigError {}

fn default_escape_radius() -> f64 {
    DEFAULT_ESCAPE_RADIUS
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

/// Parameters for a single field generation. Not validated on construction;
/// every generation entry point calls [`RenderConfig::validate`] first.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iter: u32,
    #[serde(default = "default_escape_radius")]
    pub escape_radius: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub smoothing: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iter: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            zoom: DEFAULT_ZOOM,
            smoothing: false,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn new(width: u32, height: u32, max_iter: u32) -> Self {
        Self {
            width,
            height,
            max_iter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_escape_radius(mut self, escape_radius: f64) -> Self {
        self.escape_radius = escape_radius;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }

        if self.max_iter == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if !(self.escape_radius.is_finite() && self.escape_radius > 0.0) {
            return Err(ConfigError::InvalidEscapeRadius {
                escape_radius: self.escape_radius,
            });
        }

        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::InvalidZoom { zoom: self.zoom });
        }

        if self.smoothing && self.escape_radius < MIN_SMOOTHING_ESCAPE_RADIUS {
            return Err(ConfigError::EscapeRadiusTooSmallForSmoothing {
                escape_radius: self.escape_radius,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();

        assert_eq!(config.escape_radius, 2.0);
        assert_eq!(config.zoom, 1.0);
        assert!(!config.smoothing);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            RenderConfig::new(0, 10, 50).validate(),
            Err(ConfigError::ZeroWidth)
        );
        assert_eq!(
            RenderConfig::new(10, 0, 50).validate(),
            Err(ConfigError::ZeroHeight)
        );
        assert_eq!(
            RenderConfig::new(10, 10, 0).validate(),
            Err(ConfigError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_non_positive_escape_radius_is_rejected() {
        for escape_radius in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let result = RenderConfig::new(10, 10, 50)
                .with_escape_radius(escape_radius)
                .validate();

            assert!(matches!(
                result,
                Err(ConfigError::InvalidEscapeRadius { .. })
            ));
        }
    }

    #[test]
    fn test_non_positive_zoom_is_rejected() {
        for zoom in [0.0, -1.0, f64::NAN] {
            let result = RenderConfig::new(10, 10, 50).with_zoom(zoom).validate();

            assert!(matches!(result, Err(ConfigError::InvalidZoom { .. })));
        }
    }

    #[test]
    fn test_zoom_out_is_accepted() {
        let config = RenderConfig::new(10, 10, 50).with_zoom(0.25);

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_small_escape_radius_is_rejected_only_when_smoothing() {
        let raw = RenderConfig::new(10, 10, 50).with_escape_radius(0.5);
        let smoothed = raw.with_smoothing(true);

        assert_eq!(raw.validate(), Ok(()));
        assert_eq!(
            smoothed.validate(),
            Err(ConfigError::EscapeRadiusTooSmallForSmoothing { escape_radius: 0.5 })
        );
        assert_eq!(
            smoothed
                .with_escape_radius(MIN_SMOOTHING_ESCAPE_RADIUS)
                .validate(),
            Ok(())
        );
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "width": 3, "height": 2, "max_iter": 50 }"#).unwrap();

        assert_eq!(config, RenderConfig::new(3, 2, 50));
    }
}
