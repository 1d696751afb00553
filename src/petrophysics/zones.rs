//! Hydrocarbon zone classification from resistivity and porosity

use serde::{Deserialize, Serialize};

use super::{input_curve, porosity_for, require_finite, PetrophysicsError};
use crate::types::{curves, CurveData, PipelineStage, WellLogDataset, ZoneLabel, ZoneThresholds};

/// Outcome of a classification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneReport {
    pub rows: usize,
    pub gas: usize,
    pub oil: usize,
    pub water: usize,
}

impl ZoneReport {
    pub fn count(&self, zone: ZoneLabel) -> usize {
        match zone {
            ZoneLabel::Gas => self.gas,
            ZoneLabel::Oil => self.oil,
            ZoneLabel::Water => self.water,
        }
    }

    /// Rows labelled Gas or Oil
    pub fn hydrocarbon_rows(&self) -> usize {
        ZoneLabel::ALL
            .into_iter()
            .filter(|zone| zone.is_hydrocarbon())
            .map(|zone| self.count(zone))
            .sum()
    }
}

/// Classify one sample. Gas is tested before Oil; anything else is Water.
///
/// NaN inputs fail every comparison and therefore land in Water.
pub fn classify_sample(resistivity: f64, porosity: f64, thresholds: &ZoneThresholds) -> ZoneLabel {
    if resistivity > thresholds.gas_resistivity && porosity > thresholds.gas_porosity {
        ZoneLabel::Gas
    } else if resistivity > thresholds.oil_resistivity_low
        && resistivity <= thresholds.oil_resistivity_high
        && porosity > thresholds.oil_porosity
    {
        ZoneLabel::Oil
    } else {
        ZoneLabel::Water
    }
}

/// Compute the `hydrocarbon_zone` curve from `porosity` and `RILD`.
pub fn classify_zones(
    dataset: &mut WellLogDataset,
    thresholds: &ZoneThresholds,
) -> Result<ZoneReport, PetrophysicsError> {
    for (name, value) in thresholds.entries() {
        require_finite(name, value)?;
    }
    if thresholds.oil_resistivity_low > thresholds.oil_resistivity_high {
        return Err(PetrophysicsError::InvalidParameter {
            name: "oil_resistivity_low",
            value: thresholds.oil_resistivity_low,
        });
    }

    let porosity = porosity_for(dataset, PipelineStage::ZoneClassification)?;
    let resistivity = input_curve(dataset, curves::DEEP_RESISTIVITY)?;

    let labels: Vec<ZoneLabel> = resistivity
        .iter()
        .zip(porosity)
        .map(|(&rt, &phi)| classify_sample(rt, phi, thresholds))
        .collect();

    let mut report = ZoneReport {
        rows: labels.len(),
        ..ZoneReport::default()
    };
    for zone in &labels {
        match zone {
            ZoneLabel::Gas => report.gas += 1,
            ZoneLabel::Oil => report.oil += 1,
            ZoneLabel::Water => report.water += 1,
        }
    }

    dataset.set_curve(curves::HYDROCARBON_ZONE, CurveData::Zone(labels))?;
    Ok(report)
}
