//! Density porosity
//!
//! `phi = (rho_matrix - rho_bulk) / (rho_matrix - rho_fluid)`
//!
//! No clamping: physically inconsistent inputs produce porosity outside
//! [0, 1], which is reported rather than hidden.

use serde::{Deserialize, Serialize};

use super::{input_curve, require_finite, PetrophysicsError};
use crate::types::{curves, CurveData, DensityParameters, WellLogDataset};

/// Matrix and fluid densities closer than this are treated as equal (g/cm³)
pub const DENSITY_TOLERANCE: f64 = 1e-9;

/// Outcome of a porosity run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PorosityReport {
    /// Rows written
    pub rows: usize,
    /// Rows whose porosity is negative, above 1, or not finite
    pub out_of_range_rows: Vec<usize>,
}

/// Density porosity for a single bulk density reading.
pub fn density_porosity(rho_bulk: f64, params: &DensityParameters) -> f64 {
    (params.rho_matrix - rho_bulk) / (params.rho_matrix - params.rho_fluid)
}

/// Compute the `porosity` curve from `RHOB`.
pub fn estimate_porosity(
    dataset: &mut WellLogDataset,
    params: &DensityParameters,
) -> Result<PorosityReport, PetrophysicsError> {
    require_finite("rho_matrix", params.rho_matrix)?;
    require_finite("rho_fluid", params.rho_fluid)?;
    if (params.rho_matrix - params.rho_fluid).abs() <= DENSITY_TOLERANCE {
        return Err(PetrophysicsError::DegenerateParameters {
            rho_matrix: params.rho_matrix,
            rho_fluid: params.rho_fluid,
        });
    }

    let rhob = input_curve(dataset, curves::BULK_DENSITY)?;
    let porosity: Vec<f64> = rhob.iter().map(|&rho| density_porosity(rho, params)).collect();

    let out_of_range_rows = porosity
        .iter()
        .enumerate()
        .filter(|(_, phi)| !(0.0..=1.0).contains(*phi))
        .map(|(row, _)| row)
        .collect();

    let rows = porosity.len();
    dataset.set_curve(curves::POROSITY, CurveData::Numeric(porosity))?;

    Ok(PorosityReport {
        rows,
        out_of_range_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DatasetState;

    fn dataset(rhob: Vec<f64>) -> WellLogDataset {
        let depth = (0..rhob.len()).map(|i| 1000.0 + 500.0 * i as f64).collect();
        WellLogDataset::new(depth)
            .and_then(|d| d.with_curve(curves::BULK_DENSITY, rhob))
            .expect("valid dataset")
    }

    fn sandstone() -> DensityParameters {
        DensityParameters {
            rho_matrix: 2.65,
            rho_fluid: 1.0,
        }
    }

    #[test]
    fn test_porosity_matches_formula() {
        let rhob = vec![2.45, 2.55, 2.60, 2.50];
        let mut ds = dataset(rhob.clone());
        let report = estimate_porosity(&mut ds, &sandstone()).expect("porosity");

        assert_eq!(report.rows, 4);
        assert!(report.out_of_range_rows.is_empty());
        let phi = ds.porosity().expect("porosity written");
        for (p, rho) in phi.iter().zip(&rhob) {
            let expected = (2.65 - rho) / (2.65 - 1.0);
            assert!((p - expected).abs() < 1e-9, "phi {} vs {}", p, expected);
        }
        // RHOB 2.45 -> 0.2 / 1.65
        assert!((phi[0] - 0.121_212_121).abs() < 1e-8);
        assert_eq!(ds.state(), DatasetState::PorosityComputed);
    }

    #[test]
    fn test_porosity_is_idempotent() {
        let mut ds = dataset(vec![2.45, 2.30]);
        estimate_porosity(&mut ds, &sandstone()).expect("first run");
        let first = ds.clone();
        estimate_porosity(&mut ds, &sandstone()).expect("second run");

        assert_eq!(ds, first);
        assert_eq!(ds.curves().len(), 3, "Depth, RHOB, porosity - no duplicate column");
    }

    #[test]
    fn test_degenerate_densities_leave_dataset_untouched() {
        let mut ds = dataset(vec![2.45]);
        let before = ds.clone();
        let err = estimate_porosity(
            &mut ds,
            &DensityParameters {
                rho_matrix: 2.65,
                rho_fluid: 2.65,
            },
        )
        .expect_err("rho_m == rho_f");

        assert!(matches!(err, PetrophysicsError::DegenerateParameters { .. }));
        assert_eq!(ds, before);
        assert!(ds.porosity().is_none());
    }

    #[test]
    fn test_densities_within_tolerance_are_degenerate() {
        let mut ds = dataset(vec![2.45]);
        let err = estimate_porosity(
            &mut ds,
            &DensityParameters {
                rho_matrix: 2.65,
                rho_fluid: 2.65 + 1e-12,
            },
        );
        assert!(matches!(err, Err(PetrophysicsError::DegenerateParameters { .. })));
    }

    #[test]
    fn test_missing_density_curve() {
        let mut ds = WellLogDataset::new(vec![1000.0]).expect("depth");
        let err = estimate_porosity(&mut ds, &sandstone()).expect_err("no RHOB");
        assert_eq!(
            err,
            PetrophysicsError::MissingCurve {
                curve: curves::BULK_DENSITY
            }
        );
    }

    #[test]
    fn test_out_of_range_porosity_is_kept_and_reported() {
        // Denser than matrix -> negative, lighter than fluid -> above 1
        let mut ds = dataset(vec![2.80, 2.45, 0.90]);
        let report = estimate_porosity(&mut ds, &sandstone()).expect("porosity");

        assert_eq!(report.out_of_range_rows, vec![0, 2]);
        let phi = ds.porosity().expect("porosity");
        assert!(phi[0] < 0.0, "no clamping, got {}", phi[0]);
        assert!(phi[2] > 1.0, "no clamping, got {}", phi[2]);
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        let mut ds = dataset(vec![2.45]);
        let err = estimate_porosity(
            &mut ds,
            &DensityParameters {
                rho_matrix: f64::NAN,
                rho_fluid: 1.0,
            },
        );
        assert!(matches!(
            err,
            Err(PetrophysicsError::InvalidParameter { name: "rho_matrix", .. })
        ));
    }
}
