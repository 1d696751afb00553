//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Unknown keys never break a config.

use std::collections::HashSet;

use crate::petrophysics::DENSITY_TOLERANCE;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " - did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for WellConfig.
///
/// Maintained by hand to match the structs in well_config.rs and types/.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [well]
        "well",
        "well.name",
        "well.field",
        // [density]
        "density",
        "density.rho_matrix",
        "density.rho_fluid",
        // [archie]
        "archie",
        "archie.a",
        "archie.m",
        "archie.n",
        "archie.rw",
        // [zones]
        "zones",
        "zones.gas_resistivity",
        "zones.gas_porosity",
        "zones.oil_resistivity_low",
        "zones.oil_resistivity_high",
        "zones.oil_porosity",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (k, levenshtein(unknown, k)))
        .filter(|&(_, dist)| dist <= 3)
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys - it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed WellConfig.
///
/// Returns (errors, warnings). Errors are values the pipeline cannot use;
/// warnings are unusual for sedimentary rocks but still computable.
pub fn validate_physical_ranges(
    config: &super::WellConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let d = &config.density;
    let a = &config.archie;
    let z = &config.zones;

    let numbers = [
        ("density.rho_matrix", d.rho_matrix),
        ("density.rho_fluid", d.rho_fluid),
        ("archie.a", a.a),
        ("archie.m", a.m),
        ("archie.n", a.n),
        ("archie.rw", a.rw),
        ("zones.gas_resistivity", z.gas_resistivity),
        ("zones.gas_porosity", z.gas_porosity),
        ("zones.oil_resistivity_low", z.oil_resistivity_low),
        ("zones.oil_resistivity_high", z.oil_resistivity_high),
        ("zones.oil_porosity", z.oil_porosity),
    ];
    // NaN/Inf comparisons silently pass - catch them explicitly
    for (name, value) in numbers {
        if !value.is_finite() {
            errors.push(format!("{name} must be finite (got {value})"));
        }
    }
    if !errors.is_empty() {
        return (errors, warnings);
    }

    // Densities: porosity divides by (rho_matrix - rho_fluid)
    if d.rho_matrix <= 0.0 || d.rho_fluid <= 0.0 {
        errors.push(format!(
            "density.rho_matrix ({:.3}) and density.rho_fluid ({:.3}) must be > 0",
            d.rho_matrix, d.rho_fluid
        ));
    }
    if (d.rho_matrix - d.rho_fluid).abs() <= DENSITY_TOLERANCE {
        errors.push(format!(
            "density.rho_matrix ({:.3}) must differ from density.rho_fluid ({:.3})",
            d.rho_matrix, d.rho_fluid
        ));
    }

    // Archie: n is used as 1/n, a and Rw scale the numerator
    if a.n == 0.0 {
        errors.push("archie.n must be non-zero (used as 1/n)".to_string());
    }
    if a.a <= 0.0 {
        errors.push(format!("archie.a = {:.3} must be > 0", a.a));
    }
    if a.rw <= 0.0 {
        errors.push(format!("archie.rw = {:.4} must be > 0", a.rw));
    }

    // Zones: the oil window must not be inverted
    if z.oil_resistivity_low > z.oil_resistivity_high {
        errors.push(format!(
            "zones.oil_resistivity_low ({:.1}) must be <= oil_resistivity_high ({:.1})",
            z.oil_resistivity_low, z.oil_resistivity_high
        ));
    }

    // Matrix density: 2.0-3.1 g/cm³ covers coal-free sedimentary minerals
    if !(2.0..=3.1).contains(&d.rho_matrix) {
        warnings.push(range_warning("density.rho_matrix", d.rho_matrix, "2.0-3.1 g/cm³"));
    }
    // Fluid density: light oil to saturated brine
    if !(0.6..=1.3).contains(&d.rho_fluid) {
        warnings.push(range_warning("density.rho_fluid", d.rho_fluid, "0.6-1.3 g/cm³"));
    }
    if d.rho_fluid >= d.rho_matrix {
        warnings.push(ValidationWarning {
            field: "density.rho_fluid".to_string(),
            message: format!(
                "rho_fluid ({:.3}) is not below rho_matrix ({:.3}) - porosity will invert",
                d.rho_fluid, d.rho_matrix
            ),
            suggestion: None,
        });
    }
    if !(1.0..=3.0).contains(&a.m) {
        warnings.push(range_warning("archie.m", a.m, "1.0-3.0"));
    }
    if !(1.0..=3.0).contains(&a.n) {
        warnings.push(range_warning("archie.n", a.n, "1.0-3.0"));
    }
    for (name, value) in [
        ("zones.gas_porosity", z.gas_porosity),
        ("zones.oil_porosity", z.oil_porosity),
    ] {
        if !(0.0..=1.0).contains(&value) {
            warnings.push(range_warning(name, value, "0-1 (fraction)"));
        }
    }
    if z.gas_resistivity < z.oil_resistivity_high {
        warnings.push(ValidationWarning {
            field: "zones.gas_resistivity".to_string(),
            message: format!(
                "gas_resistivity ({:.1}) overlaps the oil window (<= {:.1}) - gas takes precedence",
                z.gas_resistivity, z.oil_resistivity_high
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

fn range_warning(field: &str, value: f64, range: &str) -> ValidationWarning {
    ValidationWarning {
        field: field.to_string(),
        message: format!("{field} = {value:.3} is outside typical range ({range})"),
        suggestion: None,
    }
}

// ============================================================================
// Tests
// ============================================================================
