//! Per-zone averages of the derived curves

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::types::{WellLogDataset, ZoneLabel};

/// Summary of one zone across the whole log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStatistics {
    pub zone: ZoneLabel,
    pub samples: usize,
    /// `None` when the zone has no samples
    pub mean_porosity: Option<f64>,
    /// Mean over rows with a defined saturation; `None` if there are none
    pub mean_water_saturation: Option<f64>,
}

fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.mean())
    }
}

/// One entry per zone label, in Gas, Oil, Water order.
///
/// Empty when zones have not been classified.
pub fn zone_statistics(dataset: &WellLogDataset) -> Vec<ZoneStatistics> {
    let Some(zones) = dataset.hydrocarbon_zones() else {
        return Vec::new();
    };
    let porosity = dataset.porosity();
    let saturation = dataset.water_saturation();

    ZoneLabel::ALL
        .iter()
        .map(|&zone| {
            let rows: Vec<usize> = zones
                .iter()
                .enumerate()
                .filter(|&(_, &z)| z == zone)
                .map(|(row, _)| row)
                .collect();

            let phi: Vec<f64> = porosity
                .map(|p| rows.iter().map(|&r| p[r]).filter(|v| v.is_finite()).collect())
                .unwrap_or_default();
            let sw: Vec<f64> = saturation
                .map(|s| rows.iter().filter_map(|&r| s[r]).collect())
                .unwrap_or_default();

            ZoneStatistics {
                zone,
                samples: rows.len(),
                mean_porosity: mean_of(&phi),
                mean_water_saturation: mean_of(&sw),
            }
        })
        .collect()
}
