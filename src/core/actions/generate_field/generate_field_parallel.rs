use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::field::FieldData;
use crate::core::data::sample_grid::SampleGrid;

/// Evaluates the grid in parallel using rayon's work-stealing scheduler, one
/// task per row.
///
/// For cancel-aware generation, use [`generate_field_parallel_cancelable`].
pub fn generate_field_parallel<Alg>(grid: &SampleGrid, algorithm: &Alg) -> FieldData
where
    Alg: FractalAlgorithm + Sync,
{
    match generate_field_parallel_cancelable(grid, algorithm, &NeverCancel) {
        Ok(data) => data,
        Err(_) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`generate_field_parallel`], but polls `cancel` at the start of each
/// row and abandons the whole field once it reports cancellation.
///
/// Rows are computed into their own buffers and concatenated in order, so
/// the result is identical to the serial generator.
pub fn generate_field_parallel_cancelable<Alg, C>(
    grid: &SampleGrid,
    algorithm: &Alg,
    cancel: &C,
) -> Result<FieldData, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    C: CancelToken,
{
    let row_width = grid.width();
    let completed = AtomicUsize::new(0);

    let rows: Option<Vec<Vec<f64>>> = (0..grid.height())
        .into_par_iter()
        .map(|row| {
            if cancel.is_cancelled() {
                return None;
            }

            let mut values = Vec::with_capacity(row_width);
            values.extend(grid.row_points(row).map(|c| algorithm.compute(c)));
            completed.fetch_add(1, Ordering::Relaxed);

            Some(values)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
        .ok_or_else(|| Cancelled {
            completed_rows: completed.load(Ordering::Relaxed),
            total_rows: grid.height(),
        })
}
