use crate::core::data::complex::Complex;

/// Per-sample kernel. Implementations are pure: the same `c` always yields
/// the same value, and no state is shared between calls.
pub trait FractalAlgorithm {
    fn compute(&self, c: Complex) -> f64;
}
