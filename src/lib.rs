mod config;
mod controllers;
mod core;
mod input;
mod presenters;

pub use config::presets::{Preset, PresetError, builtin_presets, load_presets, parse_presets, select_preset};
pub use controllers::cli::field_controller::FieldController;
pub use controllers::ports::field_presenter::FieldPresenterPort;
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_field::generate_field::{
    ExecutionMode, GenerateFieldError, generate_field, generate_field_cancelable, generate_field_with_mode,
};
pub use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::field::{Field, FieldShapeError};
pub use crate::core::data::render_config::{ConfigError, RenderConfig};
pub use crate::core::data::sample_grid::SampleGrid;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::errors::FieldError;
pub use crate::core::fractals::mandelbrot::algorithm::{Escape, MandelbrotAlgorithm, iterate, smoothed_count};
pub use crate::core::util::apply_zoom::apply_zoom;
pub use crate::core::util::build_grid::build_grid;
pub use input::cli::args::{RenderArgs, RenderRequest};
pub use presenters::terminal::ascii::AsciiPreviewPresenter;
pub use presenters::terminal::summary::SummaryPresenter;
