// src/report.rs - Tabular, CSV, and chart-shaped views of an analysis run

use crate::analysis::AnalysisReport;
use crate::cell::CellResult;
use crate::chemistry::ChemistryType;

/// Abstract column definition for the results table and its CSV export.
/// Allows customizable data extraction from derived cell results.
pub trait ReportColumn {
    /// Column header name, as shown in the table and the CSV header row.
    fn header(&self) -> &str;

    /// Extract the rendered value for this column from one result.
    fn extract_value(&self, result: &CellResult) -> String;
}

pub struct CellIdColumn;
pub struct TypeColumn;
pub struct VoltageColumn;
pub struct CurrentColumn;
pub struct TemperatureColumn;
pub struct CapacityColumn;
pub struct MinVoltageColumn;
pub struct MaxVoltageColumn;

impl ReportColumn for CellIdColumn {
    fn header(&self) -> &str { "Cell ID" }
    fn extract_value(&self, result: &CellResult) -> String {
        format!("{}", result.id)
    }
}

impl ReportColumn for TypeColumn {
    fn header(&self) -> &str { "Type" }
    fn extract_value(&self, result: &CellResult) -> String {
        result.chemistry.as_str().to_string()
    }
}

impl ReportColumn for VoltageColumn {
    fn header(&self) -> &str { "Voltage (V)" }
    fn extract_value(&self, result: &CellResult) -> String {
        format!("{:.1}", result.voltage_v)
    }
}

impl ReportColumn for CurrentColumn {
    fn header(&self) -> &str { "Current (A)" }
    fn extract_value(&self, result: &CellResult) -> String {
        format!("{}", result.current_a)
    }
}

impl ReportColumn for TemperatureColumn {
    fn header(&self) -> &str { "Temperature (°C)" }
    fn extract_value(&self, result: &CellResult) -> String {
        format!("{:.1}", result.temperature_c)
    }
}

impl ReportColumn for CapacityColumn {
    fn header(&self) -> &str { "Capacity (Wh)" }
    fn extract_value(&self, result: &CellResult) -> String {
        format!("{:.2}", result.capacity_wh)
    }
}

impl ReportColumn for MinVoltageColumn {
    fn header(&self) -> &str { "Min Voltage (V)" }
    fn extract_value(&self, result: &CellResult) -> String {
        format!("{:.1}", result.min_voltage_v)
    }
}

impl ReportColumn for MaxVoltageColumn {
    fn header(&self) -> &str { "Max Voltage (V)" }
    fn extract_value(&self, result: &CellResult) -> String {
        format!("{:.1}", result.max_voltage_v)
    }
}

/// The eight standard table columns, in display order.
pub fn standard_columns() -> Vec<Box<dyn ReportColumn>> {
    vec![
        Box::new(CellIdColumn),
        Box::new(TypeColumn),
        Box::new(VoltageColumn),
        Box::new(CurrentColumn),
        Box::new(TemperatureColumn),
        Box::new(CapacityColumn),
        Box::new(MinVoltageColumn),
        Box::new(MaxVoltageColumn),
    ]
}

/// Render one row of cell values against a column set.
pub fn table_row(columns: &[Box<dyn ReportColumn>], result: &CellResult) -> Vec<String> {
    columns.iter().map(|c| c.extract_value(result)).collect()
}

/// Render the full results table as CSV with the standard columns, one row
/// per cell in run order, trailing newline included.
pub fn csv_export(results: &[CellResult]) -> String {
    let columns = standard_columns();
    let mut out = String::new();

    let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
    out.push_str(&headers.join(","));
    out.push('\n');

    for result in results {
        out.push_str(&table_row(&columns, result).join(","));
        out.push('\n');
    }

    out
}

/// Cell count per chemistry in first-seen order. Series for the
/// type-distribution bar chart.
pub fn chemistry_distribution(results: &[CellResult]) -> Vec<(ChemistryType, usize)> {
    let mut counts: Vec<(ChemistryType, usize)> = Vec::new();
    for result in results {
        match counts.iter_mut().find(|(kind, _)| *kind == result.chemistry) {
            Some((_, count)) => *count += 1,
            None => counts.push((result.chemistry, 1)),
        }
    }
    counts
}

/// (cell id, capacity) pairs in run order. Series for the capacity
/// comparison bar chart.
pub fn capacity_by_cell(results: &[CellResult]) -> Vec<(u32, f64)> {
    results.iter().map(|r| (r.id, r.capacity_wh)).collect()
}

/// Machine-readable dump of a full run. Ephemeral output for the caller;
/// the crate itself persists nothing.
pub fn report_to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
