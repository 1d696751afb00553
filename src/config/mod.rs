//! Well Configuration Module
//!
//! Formation parameters and zone cut-offs loaded from TOML, so an analyst can
//! tune a run per well without recompiling.
//!
//! ## Loading Order
//!
//! 1. `WELL_LOG_CONFIG` environment variable (path to TOML file)
//! 2. `well_log.toml` in the current working directory
//! 3. Built-in defaults (`config::defaults`)
//!
//! ## Usage
//!
//! The config is an ordinary value handed to whoever needs it; there is no
//! global instance.
//!
//! ```ignore
//! let config = WellConfig::load();
//! petrophysics::estimate_porosity(&mut dataset, &config.density)?;
//! ```

mod well_config;
pub mod defaults;
pub mod validation;

pub use well_config::*;
