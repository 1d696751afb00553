//! Petrophysics Module
//!
//! Deterministic log-derived rock and fluid properties. Everything here is a
//! pure transformation of a borrowed dataset: no I/O, no logging, no globals.
//!
//! ## Stages
//! - `estimate_porosity()` - density porosity from RHOB
//! - `estimate_saturation()` - Archie water saturation (needs porosity)
//! - `classify_zones()` - Gas / Oil / Water labels (needs porosity)
//!
//! Saturation and zone classification are independent of each other. Each
//! stage owns exactly one output curve and overwrites it on re-run.
//! Fatal errors leave the dataset untouched.

pub mod porosity;
pub mod saturation;
pub mod zones;

pub use porosity::{density_porosity, estimate_porosity, PorosityReport, DENSITY_TOLERANCE};
pub use saturation::{
    archie_saturation, estimate_saturation, SaturationReport, UndefinedReason, UndefinedRow,
};
pub use zones::{classify_sample, classify_zones, ZoneReport};

use thiserror::Error;

use crate::types::{curves, DatasetError, PipelineStage, WellLogDataset};

/// Errors returned by the pipeline stages
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PetrophysicsError {
    /// A required input log is not in the dataset
    #[error("missing input curve '{curve}' - load a log containing it")]
    MissingCurve { curve: &'static str },

    /// A curve exists but holds the wrong kind of values
    #[error("curve '{curve}' is not numeric")]
    IncompatibleCurve { curve: &'static str },

    /// Matrix and fluid density coincide, porosity would divide by zero
    #[error("matrix density ({rho_matrix}) and fluid density ({rho_fluid}) must differ")]
    DegenerateParameters { rho_matrix: f64, rho_fluid: f64 },

    /// Stage invoked before the stage it depends on
    #[error("{stage} requires {requires} - compute {requires} first")]
    PrerequisiteMissing {
        stage: PipelineStage,
        requires: PipelineStage,
    },

    /// Archie is undefined for these rows (strict callers only)
    #[error("water saturation undefined for {} row(s): {:?}", .rows.len(), .rows)]
    UndefinedSaturation { rows: Vec<usize> },

    /// A formation or threshold parameter is unusable
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Look up a required numeric input curve.
pub(crate) fn input_curve<'a>(
    dataset: &'a WellLogDataset,
    curve: &'static str,
) -> Result<&'a [f64], PetrophysicsError> {
    if !dataset.has_curve(curve) {
        return Err(PetrophysicsError::MissingCurve { curve });
    }
    dataset
        .numeric(curve)
        .ok_or(PetrophysicsError::IncompatibleCurve { curve })
}

/// Look up porosity on behalf of a downstream stage.
pub(crate) fn porosity_for<'a>(
    dataset: &'a WellLogDataset,
    stage: PipelineStage,
) -> Result<&'a [f64], PetrophysicsError> {
    if !dataset.state().allows(stage) {
        // A porosity column of the wrong type also leaves the dataset Raw
        return Err(if dataset.has_curve(curves::POROSITY) {
            PetrophysicsError::IncompatibleCurve {
                curve: curves::POROSITY,
            }
        } else {
            PetrophysicsError::PrerequisiteMissing {
                stage,
                requires: PipelineStage::Porosity,
            }
        });
    }
    dataset
        .porosity()
        .ok_or(PetrophysicsError::IncompatibleCurve {
            curve: curves::POROSITY,
        })
}

/// Reject NaN and infinite parameters.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<(), PetrophysicsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PetrophysicsError::InvalidParameter { name, value })
    }
}
