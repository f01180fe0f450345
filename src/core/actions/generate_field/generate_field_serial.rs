use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::field::FieldData;
use crate::core::data::sample_grid::SampleGrid;

/// Evaluates every sample on the calling thread, rows outermost.
pub fn generate_field_serial<Alg: FractalAlgorithm>(grid: &SampleGrid, algorithm: &Alg) -> FieldData {
    (0..grid.height())
        .flat_map(|row| grid.row_points(row))
        .map(|c| algorithm.compute(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        fn compute(&self, c: Complex) -> f64 {
            c.real + 10.0 * c.imag
        }
    }

    #[test]
    fn test_serial_is_row_major_over_imaginary_axis() {
        let grid = SampleGrid::from_axes(vec![1.0, 2.0, 3.0], vec![0.0, 1.0]);

        let results = generate_field_serial(&grid, &StubAlgorithm {});

        assert_eq!(results, vec![1.0, 2.0, 3.0, 11.0, 12.0, 13.0]);
    }

    #[test]
    fn test_serial_single_sample() {
        let grid = SampleGrid::from_axes(vec![4.0], vec![2.0]);

        assert_eq!(generate_field_serial(&grid, &StubAlgorithm {}), vec![24.0]);
    }
}
