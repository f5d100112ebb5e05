// src/chemistry.rs - Chemistry system with electrical properties per cell type

use crate::constants::{
    INVERTED_BAND_RANGE_PERCENT, LFP_MAX_VOLTAGE, LFP_MIN_VOLTAGE, LFP_NOMINAL_VOLTAGE,
    MNC_MAX_VOLTAGE, MNC_MIN_VOLTAGE, MNC_NOMINAL_VOLTAGE,
};
use crate::math_utils::round_to;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChemistryType {
    Lfp,
    Mnc,
}

impl ChemistryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChemistryType::Lfp => "LFP",
            ChemistryType::Mnc => "MNC",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LFP" => Some(ChemistryType::Lfp),
            "MNC" => Some(ChemistryType::Mnc),
            _ => None,
        }
    }

    /// Case-insensitive tag resolution. Any tag that is not "LFP" resolves
    /// to MNC, preserving the two-way branch of the original tool rather
    /// than rejecting unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("LFP") {
            ChemistryType::Lfp
        } else {
            ChemistryType::Mnc
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChemistryProfile {
    pub kind: ChemistryType,
    pub nominal_voltage_v: f64,
    pub max_voltage_v: f64,
    pub min_voltage_v: f64,
}

impl ChemistryProfile {
    /// Position of the nominal voltage inside the [min, max] band, as a
    /// percentage rounded to one decimal.
    ///
    /// An inverted band (max <= min, as with the MNC constants) yields the
    /// fixed fallback percentage instead of a negative or infinite value.
    pub fn voltage_range_percent(&self) -> f64 {
        if self.max_voltage_v > self.min_voltage_v {
            let fraction =
                (self.nominal_voltage_v - self.min_voltage_v) / (self.max_voltage_v - self.min_voltage_v);
            round_to(fraction * 100.0, 1)
        } else {
            INVERTED_BAND_RANGE_PERCENT
        }
    }
}

pub static CHEMISTRY_PROFILES: Lazy<HashMap<ChemistryType, ChemistryProfile>> = Lazy::new(|| {
    use ChemistryType::*;
    let mut m = HashMap::new();

    m.insert(Lfp, ChemistryProfile {
        kind: Lfp,
        nominal_voltage_v: LFP_NOMINAL_VOLTAGE,
        max_voltage_v: LFP_MAX_VOLTAGE,
        min_voltage_v: LFP_MIN_VOLTAGE,
    });

    m.insert(Mnc, ChemistryProfile {
        kind: Mnc,
        nominal_voltage_v: MNC_NOMINAL_VOLTAGE,
        max_voltage_v: MNC_MAX_VOLTAGE,
        min_voltage_v: MNC_MIN_VOLTAGE,
    });

    m
});

pub fn get_profile(kind: ChemistryType) -> Option<&'static ChemistryProfile> {
    CHEMISTRY_PROFILES.get(&kind)
}

/// Infallible lookup for internal use; every variant is registered in the
/// profile table at startup.
pub fn profile_for(kind: ChemistryType) -> &'static ChemistryProfile {
    match CHEMISTRY_PROFILES.get(&kind) {
        Some(profile) => profile,
        None => panic!("cannot find chemistry profile: {:?}", kind),
    }
}
