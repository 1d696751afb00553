//! Contiguous depth intervals sharing one zone label

use serde::{Deserialize, Serialize};

use crate::types::{WellLogDataset, ZoneLabel};

/// A run of consecutive (by depth) samples with the same zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInterval {
    pub zone: ZoneLabel,
    /// Shallowest sample depth in the run
    pub top: f64,
    /// Deepest sample depth in the run
    pub base: f64,
    pub samples: usize,
}

impl ZoneInterval {
    pub fn thickness(&self) -> f64 {
        self.base - self.top
    }
}

/// Merge classified samples into depth intervals.
///
/// Rows are visited in depth order regardless of how they are stored, so an
/// unsorted log still yields contiguous intervals. Returns an empty list when
/// zones have not been classified.
pub fn zone_intervals(dataset: &WellLogDataset) -> Vec<ZoneInterval> {
    let Some(zones) = dataset.hydrocarbon_zones() else {
        return Vec::new();
    };
    let depth = dataset.depth();

    let mut order: Vec<usize> = (0..depth.len()).collect();
    order.sort_by(|&a, &b| depth[a].total_cmp(&depth[b]));

    let mut intervals: Vec<ZoneInterval> = Vec::new();
    for row in order {
        let (zone, d) = (zones[row], depth[row]);
        match intervals.last_mut() {
            Some(current) if current.zone == zone => {
                current.base = d;
                current.samples += 1;
            }
            _ => intervals.push(ZoneInterval {
                zone,
                top: d,
                base: d,
                samples: 1,
            }),
        }
    }
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{curves, CurveData};

    fn classified(depth: Vec<f64>, zones: Vec<ZoneLabel>) -> WellLogDataset {
        let mut ds = WellLogDataset::new(depth).expect("depth");
        ds.set_curve(curves::HYDROCARBON_ZONE, CurveData::Zone(zones))
            .expect("zones");
        ds
    }

    #[test]
    fn test_merges_runs_in_depth_order() {
        // Stored out of order
        let ds = classified(
            vec![1030.0, 1000.0, 1020.0, 1010.0, 1040.0],
            vec![
                ZoneLabel::Water,
                ZoneLabel::Gas,
                ZoneLabel::Oil,
                ZoneLabel::Gas,
                ZoneLabel::Water,
            ],
        );
        let intervals = zone_intervals(&ds);

        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].zone, ZoneLabel::Gas);
        assert!((intervals[0].top - 1000.0).abs() < f64::EPSILON);
        assert!((intervals[0].base - 1010.0).abs() < f64::EPSILON);
        assert_eq!(intervals[0].samples, 2);
        assert_eq!(intervals[1].zone, ZoneLabel::Oil);
        assert_eq!(intervals[2].zone, ZoneLabel::Water);
        assert!((intervals[2].thickness() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unclassified_dataset_has_no_intervals() {
        let ds = WellLogDataset::new(vec![1000.0]).expect("depth");
        assert!(zone_intervals(&ds).is_empty());
    }
}
