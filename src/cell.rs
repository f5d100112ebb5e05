// src/cell.rs - Cell configuration and derived per-cell parameters

use crate::chemistry::{ChemistryType, profile_for};
use crate::error::AnalyzerError;
use crate::math_utils::{clamp_percent, round_to};
use crate::temperature::{TemperatureSource, UniformTemperature};
use serde::{Deserialize, Serialize};

/// One configured cell, supplied by the caller for a single analysis run.
/// Ids are assigned by the caller and expected to be unique within the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellConfig {
    pub id: u32,
    pub chemistry: ChemistryType,
    pub current_a: f64,
}

impl CellConfig {
    pub fn new(id: u32, chemistry: ChemistryType, current_a: f64) -> Self {
        Self {
            id,
            chemistry,
            current_a,
        }
    }
}

/// Full parameter set derived for one cell.
///
/// Immutable once produced and valid only for the run that produced it;
/// nothing is persisted. The temperature is the only non-deterministic
/// field; every other field is fixed by chemistry and current.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellResult {
    pub id: u32,
    pub chemistry: ChemistryType,
    pub voltage_v: f64,
    pub current_a: f64,
    pub temperature_c: f64,
    pub capacity_wh: f64,
    pub max_voltage_v: f64,
    pub min_voltage_v: f64,
    pub voltage_range_percent: f64,
}

impl CellResult {
    /// Range percentage clamped into [0, 100] and scaled to a 0..1 fraction
    /// for progress-bar style rendering.
    pub fn range_fraction(&self) -> f64 {
        clamp_percent(self.voltage_range_percent) / 100.0
    }
}

/// Derive the full parameter set for one configured cell.
///
/// Voltage and the band bounds come straight from the chemistry profile,
/// capacity is `voltage * current` rounded to two decimals, and the
/// temperature is one draw from `source` rounded to one decimal. Rejects a
/// zero, negative, or non-finite current before computing capacity.
pub fn derive_parameters(
    config: &CellConfig,
    source: &mut dyn TemperatureSource,
) -> Result<CellResult, AnalyzerError> {
    if !config.current_a.is_finite() || config.current_a <= 0.0 {
        return Err(AnalyzerError::NonPositiveCurrent {
            current: config.current_a,
        });
    }

    let profile = profile_for(config.chemistry);
    let temperature_c = round_to(source.next_temp_c(), 1);
    let capacity_wh = round_to(profile.nominal_voltage_v * config.current_a, 2);

    Ok(CellResult {
        id: config.id,
        chemistry: config.chemistry,
        voltage_v: profile.nominal_voltage_v,
        current_a: config.current_a,
        temperature_c,
        capacity_wh,
        max_voltage_v: profile.max_voltage_v,
        min_voltage_v: profile.min_voltage_v,
        voltage_range_percent: profile.voltage_range_percent(),
    })
}

/// Convenience wrapper over the thread-local uniform temperature source.
pub fn derive(config: &CellConfig) -> Result<CellResult, AnalyzerError> {
    derive_parameters(config, &mut UniformTemperature)
}
