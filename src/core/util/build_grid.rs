use crate::core::data::render_config::ConfigError;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport::Viewport;

/// Samples `width` real values across `[x_min, x_max]` and `height` imaginary
/// values across `[y_min, y_max]`, both endpoints included. A single sample
/// sits on the lower bound.
pub fn build_grid(viewport: Viewport, width: u32, height: u32) -> Result<SampleGrid, ConfigError> {
    if width == 0 {
        return Err(ConfigError::ZeroWidth);
    }

    if height == 0 {
        return Err(ConfigError::ZeroHeight);
    }

    let real = linspace(viewport.x_min(), viewport.x_max(), width as usize);
    let imag = linspace(viewport.y_min(), viewport.y_max(), height as usize);

    Ok(SampleGrid::from_axes(real, imag))
}

fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }

    let step = (stop - start) / (count - 1) as f64;
    let mut samples: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();

    // pin the last sample so rounding in `step` never overshoots the bound
    samples[count - 1] = stop;
    samples
}
