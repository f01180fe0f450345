use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::{debug, warn};

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_field::generate_field_parallel::{
    generate_field_parallel, generate_field_parallel_cancelable,
};
use crate::core::actions::generate_field::generate_field_serial::generate_field_serial;
use crate::core::data::field::{Field, FieldData};
use crate::core::data::render_config::RenderConfig;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport::Viewport;
use crate::core::errors::FieldError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::apply_zoom::apply_zoom;
use crate::core::util::build_grid::build_grid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Serial,
    #[default]
    Parallel,
}

/// Error type for cancelable field generation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GenerateFieldError {
    /// The caller's token fired before every row was computed.
    Cancelled(Cancelled),
    /// The inputs were rejected before any computation started.
    Field(FieldError),
}

impl fmt::Display for GenerateFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Field(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GenerateFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Field(err) => Some(err),
        }
    }
}

impl From<FieldError> for GenerateFieldError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}

struct Prepared {
    effective: Viewport,
    grid: SampleGrid,
    algorithm: MandelbrotAlgorithm,
}

fn prepare(config: &RenderConfig, viewport: Viewport) -> Result<Prepared, FieldError> {
    let algorithm = MandelbrotAlgorithm::new(config)?;
    let effective = apply_zoom(viewport, config.zoom)?;
    let grid = build_grid(effective, config.width, config.height)?;

    debug!(
        "sampling {}x{} over {} (zoom {})",
        config.width, config.height, effective, config.zoom
    );

    Ok(Prepared {
        effective,
        grid,
        algorithm,
    })
}

fn finish(config: &RenderConfig, prepared: Prepared, data: FieldData, started: Instant) -> Field {
    let field = Field::from_generated(
        prepared.grid.width(),
        prepared.grid.height(),
        prepared.effective,
        data,
    );

    debug!("generated {} cells in {:?}", field.data().len(), started.elapsed());

    if config.smoothing {
        if let Some((min, max)) = field.value_range() {
            if min < 0.0 || max > config.max_iter as f64 {
                warn!(
                    "smoothed values span [{}, {}], outside [0, {}]; clamp before colour mapping",
                    min, max, config.max_iter
                );
            }
        }
    }

    field
}

/// Validates the inputs, zooms the viewport about its center, samples it and
/// evaluates every sample in parallel.
///
/// The returned field carries the effective viewport. Row 0 corresponds to
/// its `y_min`.
pub fn generate_field(config: &RenderConfig, viewport: Viewport) -> Result<Field, FieldError> {
    generate_field_with_mode(config, viewport, ExecutionMode::Parallel)
}

pub fn generate_field_with_mode(
    config: &RenderConfig,
    viewport: Viewport,
    mode: ExecutionMode,
) -> Result<Field, FieldError> {
    let started = Instant::now();
    let prepared = prepare(config, viewport)?;

    let data = match mode {
        ExecutionMode::Serial => generate_field_serial(&prepared.grid, &prepared.algorithm),
        ExecutionMode::Parallel => generate_field_parallel(&prepared.grid, &prepared.algorithm),
    };

    Ok(finish(config, prepared, data, started))
}

/// Parallel generation that stops between rows once `cancel` fires. No
/// partial field is returned.
pub fn generate_field_cancelable<C: CancelToken>(
    config: &RenderConfig,
    viewport: Viewport,
    cancel: &C,
) -> Result<Field, GenerateFieldError> {
    let started = Instant::now();
    let prepared = prepare(config, viewport)?;

    let data = generate_field_parallel_cancelable(&prepared.grid, &prepared.algorithm, cancel)
        .map_err(GenerateFieldError::Cancelled)?;

    Ok(finish(config, prepared, data, started))
}
