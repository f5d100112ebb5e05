// End-to-end analysis run tests
// Exercises the derive -> aggregate pipeline the way an interactive caller would

use battery_cell_analyzer::analysis::{analyze, analyze_with};
use battery_cell_analyzer::cell::CellConfig;
use battery_cell_analyzer::chemistry::ChemistryType;
use battery_cell_analyzer::constants::{CELL_TEMP_MAX_C, CELL_TEMP_MIN_C, MAX_CELLS_PER_RUN};
use battery_cell_analyzer::error::AnalyzerError;
use battery_cell_analyzer::temperature::FixedTemperature;
use approx::assert_abs_diff_eq;
use more_asserts::{assert_ge, assert_le};

fn three_cell_configs() -> Vec<CellConfig> {
    vec![
        CellConfig::new(1, ChemistryType::Lfp, 2.0),
        CellConfig::new(2, ChemistryType::Mnc, 1.5),
        CellConfig::new(3, ChemistryType::Lfp, 3.0),
    ]
}

#[test]
fn test_three_cell_run_produces_expected_capacities() {
    println!("🔋 Running three-cell analysis with a pinned temperature source");

    let report = analyze_with(&three_cell_configs(), &mut FixedTemperature(30.0)).unwrap();

    let capacities: Vec<f64> = report.results.iter().map(|r| r.capacity_wh).collect();
    println!("   Capacities: {:?}", capacities);

    assert_abs_diff_eq!(capacities[0], 6.4, epsilon = 1e-12);
    assert_abs_diff_eq!(capacities[1], 5.4, epsilon = 1e-12);
    assert_abs_diff_eq!(capacities[2], 9.6, epsilon = 1e-12);

    assert_abs_diff_eq!(report.summary.total_capacity_wh, 21.4, epsilon = 1e-12);
    assert_eq!(report.summary.peak_voltage_v, 3.6);
    assert_eq!(report.summary.cell_count, 3);
    assert_eq!(report.summary.avg_temperature_c, 30.0);
}

#[test]
fn test_result_order_matches_config_order() {
    let report = analyze_with(&three_cell_configs(), &mut FixedTemperature(30.0)).unwrap();

    let ids: Vec<u32> = report.results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let chemistries: Vec<ChemistryType> = report.results.iter().map(|r| r.chemistry).collect();
    assert_eq!(
        chemistries,
        vec![ChemistryType::Lfp, ChemistryType::Mnc, ChemistryType::Lfp]
    );
}

#[test]
fn test_full_eight_cell_run() {
    let configs: Vec<CellConfig> = (1..=MAX_CELLS_PER_RUN as u32)
        .map(|id| {
            let chemistry = if id % 2 == 0 {
                ChemistryType::Mnc
            } else {
                ChemistryType::Lfp
            };
            CellConfig::new(id, chemistry, 2.0)
        })
        .collect();

    let report = analyze(&configs).unwrap();
    assert_eq!(report.summary.cell_count, 8);
    assert_eq!(report.results.len(), 8);

    // 4 x (3.2 * 2.0) + 4 x (3.6 * 2.0)
    assert_abs_diff_eq!(report.summary.total_capacity_wh, 54.4, epsilon = 1e-9);
    assert_eq!(report.summary.peak_voltage_v, 3.6);
}

#[test]
fn test_random_temperatures_stay_in_band_across_runs() {
    let configs = three_cell_configs();

    for _ in 0..50 {
        let report = analyze(&configs).unwrap();
        for result in &report.results {
            assert_ge!(result.temperature_c, CELL_TEMP_MIN_C);
            assert_le!(result.temperature_c, CELL_TEMP_MAX_C);
        }
        assert_ge!(report.summary.avg_temperature_c, CELL_TEMP_MIN_C);
        assert_le!(report.summary.avg_temperature_c, CELL_TEMP_MAX_C);
    }
}

#[test]
fn test_runs_share_no_state() {
    let configs = three_cell_configs();

    let first = analyze_with(&configs, &mut FixedTemperature(26.0)).unwrap();
    let second = analyze_with(&configs, &mut FixedTemperature(39.0)).unwrap();

    // Deterministic fields agree; only the pinned temperatures differ.
    assert_eq!(
        first.summary.total_capacity_wh,
        second.summary.total_capacity_wh
    );
    assert_eq!(first.summary.avg_temperature_c, 26.0);
    assert_eq!(second.summary.avg_temperature_c, 39.0);
}

#[test]
fn test_empty_run_is_rejected() {
    assert_eq!(analyze(&[]).unwrap_err(), AnalyzerError::EmptyResultSet);
}
