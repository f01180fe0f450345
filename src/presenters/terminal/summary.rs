use std::io::{self, Write};

use crate::controllers::ports::field_presenter::FieldPresenterPort;
use crate::core::data::field::Field;
use crate::input::cli::args::RenderRequest;

/// Prints the parameters actually used and a few field statistics.
#[derive(Debug, Default)]
pub struct SummaryPresenter {}

impl FieldPresenterPort for SummaryPresenter {
    fn present(&self, request: &RenderRequest, field: &Field, out: &mut dyn Write) -> io::Result<()> {
        let config = &request.config;
        let viewport = field.viewport();

        writeln!(out, "Preset: {}", request.name)?;
        writeln!(out, "x_min: {}, x_max: {}", viewport.x_min(), viewport.x_max())?;
        writeln!(out, "y_min: {}, y_max: {}", viewport.y_min(), viewport.y_max())?;
        writeln!(out, "width: {}, height: {}", field.width(), field.height())?;
        writeln!(out, "max_iter: {}", config.max_iter)?;
        writeln!(out, "zoom: {}", config.zoom)?;
        writeln!(out, "escape_radius: {}", config.escape_radius)?;
        writeln!(out, "smoothing: {}", if config.smoothing { "on" } else { "off" })?;

        match field.value_range() {
            Some((min, max)) => writeln!(out, "values: [{:.4}, {:.4}]", min, max)?,
            None => writeln!(out, "values: none")?,
        }

        let bounded = field.bounded_count(config.max_iter);
        let total = field.data().len().max(1);
        writeln!(
            out,
            "bounded: {} of {} ({:.1}%)",
            bounded,
            field.data().len(),
            bounded as f64 * 100.0 / total as f64
        )
    }
}

impl SummaryPresenter {
    pub fn new() -> Self {
        Self {}
    }
}
