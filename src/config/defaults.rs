//! System-wide default constants.
//!
//! Every default formation parameter lives here so the config structs, the
//! CLI and the tests agree on one set of numbers.

// ============================================================================
// Density Porosity
// ============================================================================

/// Quartz sandstone grain density (g/cm³).
pub const RHO_MATRIX_SANDSTONE: f64 = 2.65;

/// Fresh mud-filtrate density (g/cm³).
pub const RHO_FLUID_FRESH_WATER: f64 = 1.0;

// ============================================================================
// Archie
// ============================================================================

/// Tortuosity factor `a`.
pub const ARCHIE_TORTUOSITY: f64 = 1.0;

/// Cementation exponent `m`. 2.0 suits consolidated sandstones.
pub const ARCHIE_CEMENTATION: f64 = 2.0;

/// Saturation exponent `n`.
pub const ARCHIE_SATURATION_EXPONENT: f64 = 2.0;

/// Formation water resistivity `Rw` (ohm·m).
pub const FORMATION_WATER_RESISTIVITY: f64 = 0.1;

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable holding an explicit config path.
pub const CONFIG_ENV_VAR: &str = "WELL_LOG_CONFIG";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "well_log.toml";

/// Well name used when none is configured.
pub const DEFAULT_WELL_NAME: &str = "Unnamed Well";
