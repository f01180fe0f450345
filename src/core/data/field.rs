use std::error::Error;
use std::fmt;

use crate::core::data::viewport::Viewport;

pub type FieldData = Vec<f64>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldShapeError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FieldShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "field data size ({}) does not match width x height ({})",
                    actual, expected
                )
            }
        }
    }
}

impl Error for FieldShapeError {}

/// Row-major `height × width` grid of per-pixel values. Row 0 holds the
/// samples at `viewport.y_min()`, column 0 those at `viewport.x_min()`.
///
/// Smoothed values can land slightly outside `[0, max_iter]`; consumers clamp
/// before colour mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    viewport: Viewport,
    data: FieldData,
}

impl Field {
    pub fn from_data(
        width: usize,
        height: usize,
        viewport: Viewport,
        data: FieldData,
    ) -> Result<Self, FieldShapeError> {
        let expected = width * height;

        if data.len() != expected {
            return Err(FieldShapeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            viewport,
            data,
        })
    }

    /// Generators produce exactly `width * height` values, so no check is needed.
    pub(crate) fn from_generated(
        width: usize,
        height: usize,
        viewport: Viewport,
        data: FieldData,
    ) -> Self {
        debug_assert_eq!(data.len(), width * height);

        Self {
            width,
            height,
            viewport,
            data,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The viewport actually sampled, after zoom.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.height || column >= self.width {
            return None;
        }

        Some(self.data[row * self.width + column])
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.height {
            return None;
        }

        let start = row * self.width;
        Some(&self.data[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Smallest and largest values, or `None` for an empty field.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.data.iter().fold(None, |range, &value| match range {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
    }

    /// Number of cells that stayed bounded for the whole budget.
    #[must_use]
    pub fn bounded_count(&self, max_iter: u32) -> usize {
        let max_iter = max_iter as f64;

        self.data.iter().filter(|&&value| value == max_iter).count()
    }
}
