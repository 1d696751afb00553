//! Hydrocarbon zone thresholds

use serde::{Deserialize, Serialize};

/// Default cut-offs for hydrocarbon zone classification
pub mod zone_thresholds {
    // === Gas ===
    /// Deep resistivity above this suggests gas (ohm·m)
    pub const GAS_RESISTIVITY_MIN: f64 = 100.0;
    /// Porosity above this is required for a gas call (fraction)
    pub const GAS_POROSITY_MIN: f64 = 0.15;

    // === Oil ===
    /// Lower (exclusive) bound of the oil resistivity window (ohm·m)
    pub const OIL_RESISTIVITY_LOW: f64 = 50.0;
    /// Upper (inclusive) bound of the oil resistivity window (ohm·m)
    pub const OIL_RESISTIVITY_HIGH: f64 = 100.0;
    /// Porosity above this is required for an oil call (fraction)
    pub const OIL_POROSITY_MIN: f64 = 0.10;
}

/// Thresholds used by the zone classifier
///
/// Rules are evaluated Gas first, then Oil, with Water as the default.
/// If the windows are ever tuned to overlap, Gas wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    /// Gas: resistivity strictly above this (ohm·m)
    #[serde(default = "default_gas_resistivity")]
    pub gas_resistivity: f64,
    /// Gas: porosity strictly above this (fraction)
    #[serde(default = "default_gas_porosity")]
    pub gas_porosity: f64,
    /// Oil: resistivity strictly above this (ohm·m)
    #[serde(default = "default_oil_resistivity_low")]
    pub oil_resistivity_low: f64,
    /// Oil: resistivity at or below this (ohm·m)
    #[serde(default = "default_oil_resistivity_high")]
    pub oil_resistivity_high: f64,
    /// Oil: porosity strictly above this (fraction)
    #[serde(default = "default_oil_porosity")]
    pub oil_porosity: f64,
}

fn default_gas_resistivity() -> f64 {
    zone_thresholds::GAS_RESISTIVITY_MIN
}
fn default_gas_porosity() -> f64 {
    zone_thresholds::GAS_POROSITY_MIN
}
fn default_oil_resistivity_low() -> f64 {
    zone_thresholds::OIL_RESISTIVITY_LOW
}
fn default_oil_resistivity_high() -> f64 {
    zone_thresholds::OIL_RESISTIVITY_HIGH
}
fn default_oil_porosity() -> f64 {
    zone_thresholds::OIL_POROSITY_MIN
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self {
            gas_resistivity: zone_thresholds::GAS_RESISTIVITY_MIN,
            gas_porosity: zone_thresholds::GAS_POROSITY_MIN,
            oil_resistivity_low: zone_thresholds::OIL_RESISTIVITY_LOW,
            oil_resistivity_high: zone_thresholds::OIL_RESISTIVITY_HIGH,
            oil_porosity: zone_thresholds::OIL_POROSITY_MIN,
        }
    }
}

impl ZoneThresholds {
    /// Named values, for validation messages and error reporting.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("gas_resistivity", self.gas_resistivity),
            ("gas_porosity", self.gas_porosity),
            ("oil_resistivity_low", self.oil_resistivity_low),
            ("oil_resistivity_high", self.oil_resistivity_high),
            ("oil_porosity", self.oil_porosity),
        ]
    }
}
