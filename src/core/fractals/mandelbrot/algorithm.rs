use std::f64::consts::LN_2;

use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::render_config::{ConfigError, RenderConfig};

/// Terminal state of one escape-time orbit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Escape {
    /// Index of the step whose magnitude check fired, or `max_iter` when the
    /// orbit stayed bounded.
    pub iterations: u32,
    pub z_final: Complex,
    pub escaped: bool,
}

impl Escape {
    #[must_use]
    pub fn smoothed(&self) -> f64 {
        smoothed_count(self.iterations, self.z_final, self.escaped)
    }
}

/// Runs `z ← z² + c` from `z = 0`, checking `|z| > escape_radius` before each
/// update.
#[must_use]
pub fn iterate(c: Complex, max_iter: u32, escape_radius: f64) -> Escape {
    let outside = escape_test(escape_radius);
    let mut z = Complex::ZERO;

    for iteration in 0..max_iter {
        if outside(z) {
            return Escape {
                iterations: iteration,
                z_final: z,
                escaped: true,
            };
        }
        z = z.square() + c;
    }

    Escape {
        iterations: max_iter,
        z_final: z,
        escaped: false,
    }
}

// Compares squared magnitudes while r² is representable. Past that the orbit
// itself can overflow, so the fallback uses hypot and counts a NaN or
// infinite orbit as escaped.
fn escape_test(escape_radius: f64) -> impl Fn(Complex) -> bool {
    let radius_squared = escape_radius * escape_radius;
    let squared_fits = radius_squared.is_finite();

    move |z: Complex| {
        if squared_fits {
            z.magnitude_squared() > radius_squared
        } else {
            let magnitude = z.magnitude();
            magnitude.is_nan() || magnitude > escape_radius
        }
    }
}

/// Continuous iteration estimate `n - log2(ln|z|)`. Bounded orbits keep their
/// raw count.
///
/// Callers must ensure `|z_final| > 1` for escaped orbits, which holds when
/// the escape radius is at least one.
#[must_use]
pub fn smoothed_count(iterations: u32, z_final: Complex, escaped: bool) -> f64 {
    if !escaped {
        return iterations as f64;
    }

    iterations as f64 - log_modulus(z_final).ln() / LN_2
}

// ln|z| from the squared magnitude, which stays above one whenever |z| does;
// falls back to hypot once squaring overflows
fn log_modulus(z: Complex) -> f64 {
    let magnitude_squared = z.magnitude_squared();

    if magnitude_squared.is_finite() {
        0.5 * magnitude_squared.ln()
    } else {
        z.magnitude().ln()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iter: u32,
    escape_radius: f64,
    smoothing: bool,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, c: Complex) -> f64 {
        let escape = iterate(c, self.max_iter, self.escape_radius);

        if self.smoothing {
            escape.smoothed()
        } else {
            escape.iterations as f64
        }
    }
}

impl MandelbrotAlgorithm {
    pub fn new(config: &RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            max_iter: config.max_iter,
            escape_radius: config.escape_radius,
            smoothing: config.smoothing,
        })
    }
}
