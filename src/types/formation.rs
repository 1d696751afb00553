//! Formation parameters supplied per computation call

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Matrix and fluid densities for the density-porosity transform (g/cm³)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityParameters {
    /// Grain (matrix) density - 2.65 for quartz sandstone
    #[serde(default = "default_rho_matrix")]
    pub rho_matrix: f64,
    /// Pore fluid density - 1.0 for fresh water
    #[serde(default = "default_rho_fluid")]
    pub rho_fluid: f64,
}

fn default_rho_matrix() -> f64 {
    defaults::RHO_MATRIX_SANDSTONE
}
fn default_rho_fluid() -> f64 {
    defaults::RHO_FLUID_FRESH_WATER
}

impl Default for DensityParameters {
    fn default() -> Self {
        Self {
            rho_matrix: defaults::RHO_MATRIX_SANDSTONE,
            rho_fluid: defaults::RHO_FLUID_FRESH_WATER,
        }
    }
}

/// Archie equation parameters
///
/// `Sw = ((a * Rw) / (phi^m * Rt))^(1/n)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchieParameters {
    /// Tortuosity factor
    #[serde(default = "default_a")]
    pub a: f64,
    /// Cementation exponent
    #[serde(default = "default_m")]
    pub m: f64,
    /// Saturation exponent
    #[serde(default = "default_n")]
    pub n: f64,
    /// Formation water resistivity (ohm·m)
    #[serde(default = "default_rw")]
    pub rw: f64,
}

fn default_a() -> f64 {
    defaults::ARCHIE_TORTUOSITY
}
fn default_m() -> f64 {
    defaults::ARCHIE_CEMENTATION
}
fn default_n() -> f64 {
    defaults::ARCHIE_SATURATION_EXPONENT
}
fn default_rw() -> f64 {
    defaults::FORMATION_WATER_RESISTIVITY
}

impl Default for ArchieParameters {
    fn default() -> Self {
        Self {
            a: defaults::ARCHIE_TORTUOSITY,
            m: defaults::ARCHIE_CEMENTATION,
            n: defaults::ARCHIE_SATURATION_EXPONENT,
            rw: defaults::FORMATION_WATER_RESISTIVITY,
        }
    }
}

impl ArchieParameters {
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [("a", self.a), ("m", self.m), ("n", self.n), ("rw", self.rw)]
    }
}
