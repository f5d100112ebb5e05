// src/analysis.rs - Run-level aggregation and orchestration

use crate::cell::{CellConfig, CellResult, derive_parameters};
use crate::error::AnalyzerError;
use crate::math_utils::round_to;
use crate::temperature::{TemperatureSource, UniformTemperature};
use serde::Serialize;

/// Summary statistics over one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Exact sum of per-cell capacities (each already rounded to 2 decimals).
    pub total_capacity_wh: f64,
    /// Mean of per-cell temperatures, rounded to 1 decimal.
    pub avg_temperature_c: f64,
    /// Maximum nominal voltage across the run.
    pub peak_voltage_v: f64,
    pub cell_count: usize,
}

/// Reduce a non-empty result sequence to its summary statistics.
pub fn aggregate(results: &[CellResult]) -> Result<AnalysisSummary, AnalyzerError> {
    if results.is_empty() {
        return Err(AnalyzerError::EmptyResultSet);
    }

    let total_capacity_wh: f64 = results.iter().map(|r| r.capacity_wh).sum();
    let temp_sum: f64 = results.iter().map(|r| r.temperature_c).sum();
    let peak_voltage_v = results
        .iter()
        .map(|r| r.voltage_v)
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(AnalysisSummary {
        total_capacity_wh,
        avg_temperature_c: round_to(temp_sum / results.len() as f64, 1),
        peak_voltage_v,
        cell_count: results.len(),
    })
}

/// Per-cell results plus their summary for one run, in configuration order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub results: Vec<CellResult>,
    pub summary: AnalysisSummary,
}

/// Run one full analysis: derive every configured cell in input order, then
/// aggregate. Result order matches config order; table and chart rendering
/// downstream rely on that.
///
/// Each call is a self-contained request/response cycle; no state is
/// retained between runs.
pub fn analyze_with(
    configs: &[CellConfig],
    source: &mut dyn TemperatureSource,
) -> Result<AnalysisReport, AnalyzerError> {
    let mut results = Vec::with_capacity(configs.len());
    for config in configs {
        results.push(derive_parameters(config, source)?);
    }
    let summary = aggregate(&results)?;
    Ok(AnalysisReport { results, summary })
}

/// `analyze_with` using the thread-local uniform temperature source.
pub fn analyze(configs: &[CellConfig]) -> Result<AnalysisReport, AnalyzerError> {
    analyze_with(configs, &mut UniformTemperature)
}
