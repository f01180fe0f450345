use std::io::{self, Write};

use crate::controllers::ports::field_presenter::FieldPresenterPort;
use crate::core::data::field::Field;
use crate::input::cli::args::RenderRequest;

const RAMP: &[u8] = b" .:-=+*#%@";
const DEFAULT_COLUMNS: usize = 72;
// terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Coarse character-ramp preview. Fast-escaping cells are light, bounded
/// cells are `@`.
///
/// The top printed line shows the `y_max` row, so the field is read from its
/// last row upwards.
#[derive(Debug)]
pub struct AsciiPreviewPresenter {
    columns: usize,
}

impl FieldPresenterPort for AsciiPreviewPresenter {
    fn present(&self, request: &RenderRequest, field: &Field, out: &mut dyn Write) -> io::Result<()> {
        if field.width() == 0 || field.height() == 0 {
            return Ok(());
        }

        let columns = self.columns.min(field.width()).max(1);
        let scale = field.width() as f64 / columns as f64;
        let lines = ((field.height() as f64 / (scale * CELL_ASPECT)).round() as usize)
            .clamp(1, field.height());
        let max_iter = request.config.max_iter as f64;

        for line in 0..lines {
            let row = field.height() - 1 - line * field.height() / lines;
            let mut text = Vec::with_capacity(columns + 1);

            for column in 0..columns {
                let column = column * field.width() / columns;
                let value = field.get(row, column).unwrap_or(0.0);
                text.push(ramp_char(value, max_iter));
            }

            text.push(b'\n');
            out.write_all(&text)?;
        }

        Ok(())
    }
}

fn ramp_char(value: f64, max_iter: f64) -> u8 {
    let t = if value.is_nan() || max_iter <= 0.0 {
        0.0
    } else {
        value.clamp(0.0, max_iter) / max_iter
    };

    RAMP[(t * (RAMP.len() - 1) as f64).round() as usize]
}

impl Default for AsciiPreviewPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl AsciiPreviewPresenter {
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }
}
