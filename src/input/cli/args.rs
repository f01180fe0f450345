use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::presets::{Preset, PresetError, builtin_presets, load_presets, select_preset};
use crate::core::actions::generate_field::generate_field::ExecutionMode;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

const DEFAULT_PRESET: &str = "classic";

/// Generate an escape-time Mandelbrot field and summarise it
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct RenderArgs {
    /// JSON file holding an array of named presets (built-in table if omitted)
    #[arg(long)]
    pub presets: Option<PathBuf>,

    /// Preset to render, by name or index
    #[arg(short, long)]
    pub preset: Option<String>,

    /// List the available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    #[arg(long, allow_hyphen_values = true)]
    pub x_min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub x_max: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub y_min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub y_max: Option<f64>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(short, long)]
    pub max_iter: Option<u32>,

    #[arg(short, long)]
    pub zoom: Option<f64>,

    #[arg(short, long)]
    pub escape_radius: Option<f64>,

    /// Force smoothed (continuous) iteration counts
    #[arg(long, conflicts_with = "raw")]
    pub smooth: bool,

    /// Force raw integer iteration counts
    #[arg(long)]
    pub raw: bool,

    /// Evaluate on the calling thread only
    #[arg(long)]
    pub serial: bool,

    /// Print an ASCII preview of the field
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A fully resolved, validated render request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub name: String,
    pub config: RenderConfig,
    pub viewport: Viewport,
}

impl RenderArgs {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    #[must_use]
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.serial {
            ExecutionMode::Serial
        } else {
            ExecutionMode::Parallel
        }
    }

    pub fn preset_table(&self) -> Result<Vec<Preset>, PresetError> {
        match &self.presets {
            Some(path) => load_presets(path),
            None => Ok(builtin_presets()),
        }
    }

    /// Selected preset with every command-line override applied.
    pub fn resolve(&self, presets: &[Preset]) -> Result<RenderRequest, PresetError> {
        let selector = self.preset.as_deref().unwrap_or(DEFAULT_PRESET);
        let selected = match (self.preset.is_some(), select_preset(presets, selector)) {
            (_, Ok(preset)) => preset,
            // an external table need not contain the built-in default name
            (false, Err(_)) => presets.first().ok_or(PresetError::Empty)?,
            (true, Err(err)) => return Err(err),
        };

        let preset = self.apply_overrides(selected.clone());
        let (config, viewport) = preset.to_request()?;

        Ok(RenderRequest {
            name: preset.name,
            config,
            viewport,
        })
    }

    fn apply_overrides(&self, mut preset: Preset) -> Preset {
        preset.x_min = self.x_min.unwrap_or(preset.x_min);
        preset.x_max = self.x_max.unwrap_or(preset.x_max);
        preset.y_min = self.y_min.unwrap_or(preset.y_min);
        preset.y_max = self.y_max.unwrap_or(preset.y_max);
        preset.width = self.width.unwrap_or(preset.width);
        preset.height = self.height.unwrap_or(preset.height);
        preset.max_iter = self.max_iter.unwrap_or(preset.max_iter);
        preset.zoom = self.zoom.unwrap_or(preset.zoom);
        preset.escape_radius = self.escape_radius.unwrap_or(preset.escape_radius);

        if self.smooth {
            preset.smoothing = true;
        } else if self.raw {
            preset.smoothing = false;
        }

        preset
    }
}
