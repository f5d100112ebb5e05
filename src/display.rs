// src/display.rs - Console rendering of an analysis run

use crate::analysis::{AnalysisReport, AnalysisSummary};
use crate::cell::CellResult;
use crate::chemistry::ChemistryType;
use crate::report::{capacity_by_cell, chemistry_distribution};
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Scale a value against a maximum into a fixed-width text bar.
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

/// Fixed-width progress bar for a 0..1 fraction.
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One card per cell: chemistry-colored header, metric line, and the
/// voltage range bar with the band bounds.
pub fn render_cell_card(result: &CellResult) -> String {
    let title = format!("🔋 Cell {} ({})", result.id, result.chemistry.as_str());
    let header = match result.chemistry {
        ChemistryType::Lfp => title.green().bold(),
        ChemistryType::Mnc => title.red().bold(),
    };

    let metrics = format!(
        "  Voltage: {:.1}V   Current: {}A   Temperature: {:.1}°C   Capacity: {:.2} Wh",
        result.voltage_v, result.current_a, result.temperature_c, result.capacity_wh
    );

    let range = format!(
        "  Voltage Range: [{}] {:.1}V - {:.1}V (Current: {:.1}V)",
        progress_bar(result.range_fraction(), BAR_WIDTH),
        result.min_voltage_v,
        result.max_voltage_v,
        result.voltage_v
    );

    format!("{header}\n{metrics}\n{range}\n")
}

/// Summary metrics block for one run.
pub fn render_summary(summary: &AnalysisSummary) -> String {
    format!(
        "{}\n  Total Capacity: {} Wh\n  Avg Temperature: {:.1}°C\n  Peak Voltage: {:.1}V\n  Cell Count: {}\n",
        "📊 Analysis Summary".bold(),
        summary.total_capacity_wh,
        summary.avg_temperature_c,
        summary.peak_voltage_v,
        summary.cell_count
    )
}

/// Text bar chart of cell counts per chemistry.
pub fn render_distribution_chart(results: &[CellResult]) -> String {
    let counts = chemistry_distribution(results);
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0) as f64;

    let mut out = format!("{}\n", "📈 Cell Type Distribution".bold());
    for (kind, count) in counts {
        out.push_str(&format!(
            "  {:<4} | {} {}\n",
            kind.as_str(),
            bar(count as f64, max, BAR_WIDTH / 2),
            count
        ));
    }
    out
}

/// Text bar chart of capacity per cell id.
pub fn render_capacity_chart(results: &[CellResult]) -> String {
    let series = capacity_by_cell(results);
    let max = series.iter().map(|(_, wh)| *wh).fold(0.0, f64::max);

    let mut out = format!("{}\n", "⚡ Capacity Comparison".bold());
    for (id, capacity_wh) in series {
        out.push_str(&format!(
            "  Cell {} | {} {:.2} Wh\n",
            id,
            bar(capacity_wh, max, BAR_WIDTH / 2),
            capacity_wh
        ));
    }
    out
}

/// Write the whole report to stdout: summary, per-cell cards, both charts.
pub fn print_report(report: &AnalysisReport) {
    println!("{}", render_summary(&report.summary));
    for result in &report.results {
        println!("{}", render_cell_card(result));
    }
    println!("{}", render_distribution_chart(&report.results));
    println!("{}", render_capacity_chart(&report.results));
}
