use crate::core::data::complex::Complex;

/// Real samples run along columns, imaginary samples along rows, both in
/// increasing order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl SampleGrid {
    pub(crate) fn from_axes(real: Vec<f64>, imag: Vec<f64>) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    #[must_use]
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.real.len()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.imag.len()
    }

    /// Sample point for `row` (imaginary axis) and `column` (real axis).
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn point(&self, row: usize, column: usize) -> Complex {
        Complex {
            real: self.real[column],
            imag: self.imag[row],
        }
    }

    pub fn row_points(&self, row: usize) -> impl Iterator<Item = Complex> + '_ {
        let imag = self.imag[row];

        self.real.iter().map(move |&real| Complex { real, imag })
    }
}
