//! Columnar well-log dataset indexed by depth

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::{DatasetState, ZoneLabel};

/// Fixed curve names shared with upstream loaders and downstream consumers.
///
/// Names are case-sensitive.
pub mod curves {
    /// Index curve - never transformed
    pub const DEPTH: &str = "Depth";
    /// Bulk density log (g/cm³)
    pub const BULK_DENSITY: &str = "RHOB";
    /// Deep induction resistivity log (ohm·m)
    pub const DEEP_RESISTIVITY: &str = "RILD";

    /// Output of the porosity estimator
    pub const POROSITY: &str = "porosity";
    /// Output of the saturation estimator
    pub const WATER_SATURATION: &str = "water_saturation";
    /// Output of the zone classifier
    pub const HYDROCARBON_ZONE: &str = "hydrocarbon_zone";
}

/// Errors raised while building or extending a dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("curve '{curve}' has {actual} samples, dataset has {expected}")]
    LengthMismatch {
        curve: String,
        expected: usize,
        actual: usize,
    },

    #[error("curve '{0}' already exists")]
    DuplicateCurve(String),

    #[error("the Depth curve is the dataset index and cannot be replaced")]
    DepthImmutable,

    #[error("sample {row} is missing the Depth curve")]
    MissingDepth { row: usize },

    #[error("Depth at row {row} is not a finite number ({value})")]
    InvalidDepth { row: usize, value: f64 },

    #[error("sample {row} does not share the curve set of sample 0")]
    InconsistentSample { row: usize },

    #[error("dataset has no samples")]
    Empty,
}

/// Values of a single curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum CurveData {
    /// Plain numeric curve (measured logs, porosity)
    Numeric(Vec<f64>),
    /// Numeric curve with explicit invalid markers (`None`)
    Nullable(Vec<Option<f64>>),
    /// Categorical zone labels
    Zone(Vec<ZoneLabel>),
}

impl CurveData {
    pub fn len(&self) -> usize {
        match self {
            CurveData::Numeric(v) => v.len(),
            CurveData::Nullable(v) => v.len(),
            CurveData::Zone(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell text for tabular export. Invalid markers render empty.
    pub fn cell_text(&self, row: usize) -> String {
        match self {
            CurveData::Numeric(v) => v.get(row).map(f64::to_string).unwrap_or_default(),
            CurveData::Nullable(v) => v
                .get(row)
                .copied()
                .flatten()
                .map(|x| x.to_string())
                .unwrap_or_default(),
            CurveData::Zone(v) => v.get(row).map(|z| z.to_string()).unwrap_or_default(),
        }
    }
}

/// A named curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub name: String,
    pub data: CurveData,
}

/// Well-log samples stored column-wise
///
/// Every curve has exactly one value per sample, so row `i` of any curve
/// belongs to `depth()[i]`. The Depth curve is always first and is never
/// rewritten. Rows are kept in the order supplied; they need not be sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellLogDataset {
    curves: Vec<Curve>,
}

impl WellLogDataset {
    /// Create a dataset from its depth index.
    pub fn new(depth: Vec<f64>) -> Result<Self, DatasetError> {
        if let Some((row, &value)) = depth.iter().enumerate().find(|(_, d)| !d.is_finite()) {
            return Err(DatasetError::InvalidDepth { row, value });
        }
        Ok(Self {
            curves: vec![Curve {
                name: curves::DEPTH.to_string(),
                data: CurveData::Numeric(depth),
            }],
        })
    }

    /// Build from row-oriented samples (curve name -> value).
    ///
    /// All samples must carry the same curve names, including Depth.
    pub fn from_samples(samples: &[BTreeMap<String, f64>]) -> Result<Self, DatasetError> {
        let first = samples.first().ok_or(DatasetError::Empty)?;
        for (row, sample) in samples.iter().enumerate() {
            if !sample.contains_key(curves::DEPTH) {
                return Err(DatasetError::MissingDepth { row });
            }
            if sample.len() != first.len() || !sample.keys().all(|k| first.contains_key(k)) {
                return Err(DatasetError::InconsistentSample { row });
            }
        }

        let depth = samples.iter().map(|s| s[curves::DEPTH]).collect();
        let mut dataset = Self::new(depth)?;
        for name in first.keys().filter(|k| k.as_str() != curves::DEPTH) {
            let values = samples.iter().map(|s| s[name]).collect();
            dataset.insert_curve(name, CurveData::Numeric(values))?;
        }
        Ok(dataset)
    }

    /// Builder-style variant of [`insert_curve`](Self::insert_curve) for numeric curves.
    pub fn with_curve(mut self, name: &str, values: Vec<f64>) -> Result<Self, DatasetError> {
        self.insert_curve(name, CurveData::Numeric(values))?;
        Ok(self)
    }

    /// Add a new curve. Fails on length mismatch, duplicates and Depth.
    pub fn insert_curve(&mut self, name: &str, data: CurveData) -> Result<(), DatasetError> {
        if name == curves::DEPTH {
            return Err(DatasetError::DepthImmutable);
        }
        if self.has_curve(name) {
            return Err(DatasetError::DuplicateCurve(name.to_string()));
        }
        self.check_length(name, &data)?;
        self.curves.push(Curve {
            name: name.to_string(),
            data,
        });
        Ok(())
    }

    /// Write a derived curve, replacing any previous values in place so the
    /// column order stays stable across re-runs.
    pub(crate) fn set_curve(&mut self, name: &str, data: CurveData) -> Result<(), DatasetError> {
        if name == curves::DEPTH {
            return Err(DatasetError::DepthImmutable);
        }
        self.check_length(name, &data)?;
        match self.curves.iter_mut().find(|c| c.name == name) {
            Some(curve) => curve.data = data,
            None => self.curves.push(Curve {
                name: name.to_string(),
                data,
            }),
        }
        Ok(())
    }

    fn check_length(&self, name: &str, data: &CurveData) -> Result<(), DatasetError> {
        if data.len() == self.len() {
            Ok(())
        } else {
            Err(DatasetError::LengthMismatch {
                curve: name.to_string(),
                expected: self.len(),
                actual: data.len(),
            })
        }
    }

    /// Number of depth samples
    pub fn len(&self) -> usize {
        self.curves.first().map_or(0, |c| c.data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The depth index
    pub fn depth(&self) -> &[f64] {
        match self.curves.first().map(|c| &c.data) {
            Some(CurveData::Numeric(v)) => v,
            _ => &[],
        }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.name == name)
    }

    pub fn has_curve(&self, name: &str) -> bool {
        self.curve(name).is_some()
    }

    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.name.as_str())
    }

    /// Values of a numeric curve, if present with that type
    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        match self.curve(name).map(|c| &c.data) {
            Some(CurveData::Numeric(v)) => Some(v),
            _ => None,
        }
    }

    /// Values of a nullable curve, if present with that type
    pub fn nullable(&self, name: &str) -> Option<&[Option<f64>]> {
        match self.curve(name).map(|c| &c.data) {
            Some(CurveData::Nullable(v)) => Some(v),
            _ => None,
        }
    }

    /// Labels of a zone curve, if present with that type
    pub fn zones(&self, name: &str) -> Option<&[ZoneLabel]> {
        match self.curve(name).map(|c| &c.data) {
            Some(CurveData::Zone(v)) => Some(v),
            _ => None,
        }
    }

    /// Porosity values, when the porosity estimator has run
    pub fn porosity(&self) -> Option<&[f64]> {
        self.numeric(curves::POROSITY)
    }

    /// Water saturation, `None` marking rows where Archie is undefined
    pub fn water_saturation(&self) -> Option<&[Option<f64>]> {
        self.nullable(curves::WATER_SATURATION)
    }

    pub fn hydrocarbon_zones(&self) -> Option<&[ZoneLabel]> {
        self.zones(curves::HYDROCARBON_ZONE)
    }

    /// Interpretation progress derived from the output curves present
    pub fn state(&self) -> DatasetState {
        DatasetState::from_outputs(
            self.porosity().is_some(),
            self.water_saturation().is_some(),
            self.hydrocarbon_zones().is_some(),
        )
    }
}
