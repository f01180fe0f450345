use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::data::render_config::{ConfigError, DEFAULT_ESCAPE_RADIUS, DEFAULT_ZOOM, RenderConfig};
use crate::core::data::viewport::{Viewport, ViewportError};

#[derive(Debug)]
pub enum PresetError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Empty,
    UnknownPreset { selector: String, available: Vec<String> },
    Viewport { name: String, source: ViewportError },
    Config { name: String, source: ConfigError },
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read presets: {}", err),
            Self::Parse(err) => write!(f, "could not parse presets: {}", err),
            Self::Empty => write!(f, "preset table is empty"),
            Self::UnknownPreset { selector, available } => {
                write!(
                    f,
                    "no preset named or numbered '{}' (available: {})",
                    selector,
                    available.join(", ")
                )
            }
            Self::Viewport { name, source } => write!(f, "preset '{}': {}", name, source),
            Self::Config { name, source } => write!(f, "preset '{}': {}", name, source),
        }
    }
}

impl Error for PresetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Empty | Self::UnknownPreset { .. } => None,
            Self::Viewport { source, .. } => Some(source),
            Self::Config { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for PresetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

fn default_escape_radius() -> f64 {
    DEFAULT_ESCAPE_RADIUS
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

/// One row of a preset table: a named region plus the render settings that
/// go with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub width: u32,
    pub height: u32,
    pub max_iter: u32,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_escape_radius")]
    pub escape_radius: f64,
    #[serde(default)]
    pub smoothing: bool,
}

impl Preset {
    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            max_iter: self.max_iter,
            escape_radius: self.escape_radius,
            zoom: self.zoom,
            smoothing: self.smoothing,
        }
    }

    /// Validated config and (unzoomed) viewport for this preset.
    pub fn to_request(&self) -> Result<(RenderConfig, Viewport), PresetError> {
        let viewport = Viewport::new(self.x_min, self.x_max, self.y_min, self.y_max).map_err(
            |source| PresetError::Viewport {
                name: self.name.clone(),
                source,
            },
        )?;

        let config = self.render_config();
        config.validate().map_err(|source| PresetError::Config {
            name: self.name.clone(),
            source,
        })?;

        Ok((config, viewport))
    }
}

fn preset(
    name: &str,
    (x_min, x_max, y_min, y_max): (f64, f64, f64, f64),
    width: u32,
    height: u32,
    max_iter: u32,
    smoothing: bool,
) -> Preset {
    Preset {
        name: name.to_string(),
        x_min,
        x_max,
        y_min,
        y_max,
        width,
        height,
        max_iter,
        zoom: DEFAULT_ZOOM,
        escape_radius: DEFAULT_ESCAPE_RADIUS,
        smoothing,
    }
}

#[must_use]
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        preset("classic", (-2.5, 1.0, -1.25, 1.25), 700, 500, 256, false),
        preset("seahorse-valley", (-0.76, -0.73, 0.09, 0.12), 600, 600, 512, true),
        preset("elephant-valley", (0.25, 0.35, 0.0, 0.1), 600, 600, 400, true),
        preset("triple-spiral", (-0.09, -0.086, 0.654, 0.658), 600, 600, 1000, true),
    ]
}

/// Reads a JSON array of presets.
pub fn load_presets(path: impl AsRef<Path>) -> Result<Vec<Preset>, PresetError> {
    let contents = fs::read_to_string(path)?;

    parse_presets(&contents)
}

pub fn parse_presets(contents: &str) -> Result<Vec<Preset>, PresetError> {
    let presets: Vec<Preset> = serde_json::from_str(contents)?;

    if presets.is_empty() {
        return Err(PresetError::Empty);
    }

    Ok(presets)
}

/// Picks a preset by name (case-insensitive) or, failing that, by index.
pub fn select_preset<'a>(presets: &'a [Preset], selector: &str) -> Result<&'a Preset, PresetError> {
    let by_name = presets
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(selector));

    let by_index = || {
        selector
            .parse::<usize>()
            .ok()
            .and_then(|index| presets.get(index))
    };

    by_name.or_else(by_index).ok_or_else(|| PresetError::UnknownPreset {
        selector: selector.to_string(),
        available: presets.iter().map(|preset| preset.name.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"[
        { "name": "Full", "x_min": -2.0, "x_max": 1.0, "y_min": -1.5, "y_max": 1.5,
          "width": 3, "height": 3, "max_iter": 50 },
        { "name": "zoomed", "x_min": -2.0, "x_max": 1.0, "y_min": -1.5, "y_max": 1.5,
          "width": 8, "height": 6, "max_iter": 100, "zoom": 4.0, "escape_radius": 4.0,
          "smoothing": true }
    ]"#;

    #[test]
    fn test_parse_presets_applies_defaults() {
        let presets = parse_presets(TABLE).unwrap();

        assert_eq!(presets.len(), 2);
        assert_eq!(presets[0].zoom, 1.0);
        assert_eq!(presets[0].escape_radius, 2.0);
        assert!(!presets[0].smoothing);
        assert_eq!(presets[1].zoom, 4.0);
        assert!(presets[1].smoothing);
    }

    #[test]
    fn test_parse_presets_rejects_malformed_json() {
        assert!(matches!(parse_presets("[{"), Err(PresetError::Parse(_))));
        assert!(matches!(parse_presets("[]"), Err(PresetError::Empty)));
    }

    #[test]
    fn test_load_presets_reports_missing_file() {
        let result = load_presets("does/not/exist.json");

        assert!(matches!(result, Err(PresetError::Io(_))));
    }

    #[test]
    fn test_select_preset_by_name_or_index() {
        let presets = parse_presets(TABLE).unwrap();

        assert_eq!(select_preset(&presets, "full").unwrap().name, "Full");
        assert_eq!(select_preset(&presets, "1").unwrap().name, "zoomed");
    }

    #[test]
    fn test_select_unknown_preset_lists_available() {
        let presets = parse_presets(TABLE).unwrap();

        let err = select_preset(&presets, "7").unwrap_err();

        assert_eq!(
            err.to_string(),
            "no preset named or numbered '7' (available: Full, zoomed)"
        );
    }

    #[test]
    fn test_to_request() {
        let presets = parse_presets(TABLE).unwrap();

        let (config, viewport) = presets[1].to_request().unwrap();

        assert_eq!(
            config,
            RenderConfig::new(8, 6, 100)
                .with_zoom(4.0)
                .with_escape_radius(4.0)
                .with_smoothing(true)
        );
        assert_eq!(viewport, Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap());
    }

    #[test]
    fn test_to_request_rejects_degenerate_viewport() {
        let mut degenerate = builtin_presets().remove(0);
        degenerate.x_max = degenerate.x_min;

        assert!(matches!(
            degenerate.to_request(),
            Err(PresetError::Viewport {
                source: ViewportError::InvalidSize { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_to_request_rejects_invalid_config() {
        let mut invalid = builtin_presets().remove(0);
        invalid.width = 0;

        assert!(matches!(
            invalid.to_request(),
            Err(PresetError::Config {
                source: ConfigError::ZeroWidth,
                ..
            })
        ));
    }

    #[test]
    fn test_builtin_presets_are_valid() {
        for preset in builtin_presets() {
            assert!(preset.to_request().is_ok(), "{}", preset.name);
        }
    }
}
