// Export and chart-series tests over a full analysis run

use battery_cell_analyzer::analysis::analyze_with;
use battery_cell_analyzer::cell::CellConfig;
use battery_cell_analyzer::chemistry::ChemistryType;
use battery_cell_analyzer::report::{
    capacity_by_cell, chemistry_distribution, csv_export, report_to_json,
};
use battery_cell_analyzer::temperature::FixedTemperature;
use serde_json::Value;

fn sample_report() -> battery_cell_analyzer::analysis::AnalysisReport {
    let configs = vec![
        CellConfig::new(1, ChemistryType::Lfp, 2.0),
        CellConfig::new(2, ChemistryType::Mnc, 1.5),
        CellConfig::new(3, ChemistryType::Lfp, 3.0),
    ];
    analyze_with(&configs, &mut FixedTemperature(30.0)).unwrap()
}

#[test]
fn test_csv_export_of_full_run() {
    let report = sample_report();
    let csv = csv_export(&report.results);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Cell ID,Type,Voltage (V),Current (A),Temperature (°C),Capacity (Wh),Min Voltage (V),Max Voltage (V)"
    );
    assert_eq!(lines[1], "1,LFP,3.2,2,30.0,6.40,2.8,4.0");
    assert_eq!(lines[2], "2,MNC,3.6,1.5,30.0,5.40,3.2,3.4");
    assert_eq!(lines[3], "3,LFP,3.2,3,30.0,9.60,2.8,4.0");
}

#[test]
fn test_chart_series_shapes() {
    let report = sample_report();

    let distribution = chemistry_distribution(&report.results);
    assert_eq!(
        distribution,
        vec![(ChemistryType::Lfp, 2), (ChemistryType::Mnc, 1)]
    );

    let capacities = capacity_by_cell(&report.results);
    assert_eq!(capacities, vec![(1, 6.4), (2, 5.4), (3, 9.6)]);
}

#[test]
fn test_json_dump_round_trips_through_serde() {
    let report = sample_report();
    let json = report_to_json(&report).unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["cell_count"], 3);
    assert_eq!(value["summary"]["peak_voltage_v"], 3.6);
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
    assert_eq!(value["results"][0]["chemistry"], "Lfp");
    assert_eq!(value["results"][1]["voltage_range_percent"], 50.0);
}
