//! Well Configuration - formation parameters and zone cut-offs as TOML values
//!
//! Each section implements `Default` with the values in `config::defaults`
//! and `types::zone_thresholds`, so a missing file or a partial file behaves
//! exactly like the built-in constants.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use super::validation::{self, ValidationWarning};
use crate::types::{ArchieParameters, DensityParameters, ZoneThresholds};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one interpretation run.
///
/// Load with `WellConfig::load()` which searches:
/// 1. `$WELL_LOG_CONFIG` env var
/// 2. `./well_log.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellConfig {
    /// Well identification
    #[serde(default)]
    pub well: WellInfo,

    /// Matrix / fluid densities for porosity
    #[serde(default)]
    pub density: DensityParameters,

    /// Archie a, m, n, Rw
    #[serde(default)]
    pub archie: ArchieParameters,

    /// Hydrocarbon zone cut-offs
    #[serde(default)]
    pub zones: ZoneThresholds,
}

impl WellConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELL_LOG_CONFIG` environment variable
    /// 2. `./well_log.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// A candidate that is missing or fails to load is skipped with a warning.
    pub fn load() -> Self {
        let env_path = std::env::var_os(defaults::CONFIG_ENV_VAR).map(PathBuf::from);
        Self::search(env_path.as_deref(), Path::new(defaults::CONFIG_FILE_NAME))
    }

    /// The search behind [`load`](Self::load) with explicit candidates.
    pub fn search(env_path: Option<&Path>, local_path: &Path) -> Self {
        // (path, source, warn when missing)
        let candidates = env_path
            .map(|p| (p, defaults::CONFIG_ENV_VAR, true))
            .into_iter()
            .chain(std::iter::once((local_path, defaults::CONFIG_FILE_NAME, false)));

        for (path, source, expected) in candidates {
            if !path.exists() {
                if expected {
                    warn!(path = %path.display(), "{source} points to a missing file, falling back");
                }
                continue;
            }
            match Self::load_from_file(path) {
                Ok(config) => {
                    info!(path = %path.display(), well = %config.well.name, source, "Loaded well config");
                    return config;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, source, "Ignoring unusable config, falling back");
                }
            }
        }

        info!("No well config found - using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate TOML text.
    ///
    /// Two passes: unknown keys are logged as warnings (never fatal), then
    /// serde deserialization, then range validation.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        for w in config.validate()? {
            warn!(field = %w.field, "{}", w);
        }
        Ok(config)
    }

    /// Validate physical ranges. Impossible values fail; suspicious values
    /// come back as warnings.
    pub fn validate(&self) -> Result<Vec<ValidationWarning>, ConfigError> {
        let (errors, warnings) = validation::validate_physical_ranges(self);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Serialize back to TOML, e.g. to write a starter config.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Well Info
// ============================================================================

/// Identification metadata - not used for logic, but appears in logs and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellInfo {
    /// Well name / identifier
    #[serde(default = "default_well_name")]
    pub name: String,

    /// Field name
    #[serde(default)]
    pub field: String,
}

fn default_well_name() -> String {
    defaults::DEFAULT_WELL_NAME.to_string()
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: default_well_name(),
            field: String::new(),
        }
    }
}
