//! Archie water saturation
//!
//! `Sw = ((a * Rw) / (phi^m * Rt))^(1/n)`
//!
//! Rows where the equation has no real, finite answer are stored as `None`
//! and listed in the report; the remaining rows are still computed.

use serde::{Deserialize, Serialize};

use super::{input_curve, porosity_for, require_finite, PetrophysicsError};
use crate::types::{curves, ArchieParameters, CurveData, PipelineStage, WellLogDataset};

/// Why Archie produced no value for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// phi = 0 puts a zero in the denominator
    ZeroPorosity,
    /// phi < 0 raised to a fractional cementation exponent
    NegativePorosity,
    /// Rt = 0 puts a zero in the denominator
    ZeroResistivity,
    /// Any other non-real or infinite result
    NonFinite,
}

impl std::fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UndefinedReason::ZeroPorosity => write!(f, "zero porosity"),
            UndefinedReason::NegativePorosity => {
                write!(f, "negative porosity with fractional cementation exponent")
            }
            UndefinedReason::ZeroResistivity => write!(f, "zero resistivity"),
            UndefinedReason::NonFinite => write!(f, "non-finite result"),
        }
    }
}

/// A row left without a saturation value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UndefinedRow {
    pub row: usize,
    pub depth: f64,
    pub reason: UndefinedReason,
}

/// Outcome of a saturation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaturationReport {
    /// Rows written (valid or not)
    pub rows: usize,
    /// Rows whose saturation is undefined, in row order
    pub undefined_rows: Vec<UndefinedRow>,
}

impl SaturationReport {
    pub fn is_complete(&self) -> bool {
        self.undefined_rows.is_empty()
    }

    /// Row indices of the undefined rows
    pub fn undefined_indices(&self) -> Vec<usize> {
        self.undefined_rows.iter().map(|u| u.row).collect()
    }

    /// Strict view: any undefined row becomes `UndefinedSaturation`.
    pub fn into_result(self) -> Result<Self, PetrophysicsError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(PetrophysicsError::UndefinedSaturation {
                rows: self.undefined_indices(),
            })
        }
    }
}

/// Archie saturation for one sample.
///
/// Returns the reason instead of NaN/inf when no real value exists.
pub fn archie_saturation(
    porosity: f64,
    resistivity: f64,
    params: &ArchieParameters,
) -> Result<f64, UndefinedReason> {
    if porosity == 0.0 {
        return Err(UndefinedReason::ZeroPorosity);
    }
    if porosity < 0.0 && params.m.fract() != 0.0 {
        return Err(UndefinedReason::NegativePorosity);
    }
    if resistivity == 0.0 {
        return Err(UndefinedReason::ZeroResistivity);
    }

    let base = (params.a * params.rw) / (porosity.powf(params.m) * resistivity);
    let sw = base.powf(1.0 / params.n);
    if sw.is_finite() {
        Ok(sw)
    } else {
        Err(UndefinedReason::NonFinite)
    }
}

/// Compute the `water_saturation` curve from `porosity` and `RILD`.
pub fn estimate_saturation(
    dataset: &mut WellLogDataset,
    params: &ArchieParameters,
) -> Result<SaturationReport, PetrophysicsError> {
    for (name, value) in params.entries() {
        require_finite(name, value)?;
    }
    if params.n == 0.0 {
        return Err(PetrophysicsError::InvalidParameter {
            name: "n",
            value: params.n,
        });
    }

    let porosity = porosity_for(dataset, PipelineStage::Saturation)?;
    let resistivity = input_curve(dataset, curves::DEEP_RESISTIVITY)?;
    let depth = dataset.depth();

    let mut undefined_rows = Vec::new();
    let saturation: Vec<Option<f64>> = porosity
        .iter()
        .zip(resistivity)
        .enumerate()
        .map(|(row, (&phi, &rt))| match archie_saturation(phi, rt, params) {
            Ok(sw) => Some(sw),
            Err(reason) => {
                undefined_rows.push(UndefinedRow {
                    row,
                    depth: depth[row],
                    reason,
                });
                None
            }
        })
        .collect();

    let rows = saturation.len();
    dataset.set_curve(curves::WATER_SATURATION, CurveData::Nullable(saturation))?;

    Ok(SaturationReport {
        rows,
        undefined_rows,
    })
}
