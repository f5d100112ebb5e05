//! Per-cell operating temperature sampling.
//!
//! Each derived cell draws exactly one temperature from the operating band.
//! The draw sits behind a trait so tests can pin it to a known value; the
//! derivation step owns the one-decimal rounding rule.

use crate::constants::{CELL_TEMP_MAX_C, CELL_TEMP_MIN_C};

/// Source of raw operating temperatures in °C.
pub trait TemperatureSource {
    /// Next temperature within [CELL_TEMP_MIN_C, CELL_TEMP_MAX_C].
    fn next_temp_c(&mut self) -> f64;
}

/// Uniform draw over the operating band using the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformTemperature;

impl TemperatureSource for UniformTemperature {
    fn next_temp_c(&mut self) -> f64 {
        use rand::Rng;
        let mut rng = rand::rng();
        let band = CELL_TEMP_MAX_C - CELL_TEMP_MIN_C;
        CELL_TEMP_MIN_C + rng.random::<f64>() * band
    }
}

/// Always yields the same temperature. Test stub.
#[derive(Debug, Clone, Copy)]
pub struct FixedTemperature(pub f64);

impl TemperatureSource for FixedTemperature {
    fn next_temp_c(&mut self) -> f64 {
        self.0
    }
}
