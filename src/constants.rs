// Chemistry voltage constants (volts)
pub const LFP_NOMINAL_VOLTAGE: f64 = 3.2;
pub const LFP_MAX_VOLTAGE: f64 = 4.0;
pub const LFP_MIN_VOLTAGE: f64 = 2.8;

pub const MNC_NOMINAL_VOLTAGE: f64 = 3.6;
pub const MNC_MAX_VOLTAGE: f64 = 3.4; // inverted band: max sits below min
pub const MNC_MIN_VOLTAGE: f64 = 3.2;

// Operating temperature band sampled once per derived cell (°C)
pub const CELL_TEMP_MIN_C: f64 = 25.0;
pub const CELL_TEMP_MAX_C: f64 = 40.0;

// Range percentage reported when a chemistry's voltage band is inverted
pub const INVERTED_BAND_RANGE_PERCENT: f64 = 50.0;

// Collaborator-level input bounds. Exported for UI layers; the core only
// enforces current > 0.
pub const MAX_CELLS_PER_RUN: usize = 8;
pub const MIN_CURRENT_A: f64 = 0.1;
pub const MAX_CURRENT_A: f64 = 10.0;
