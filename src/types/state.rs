//! Zone labels, pipeline stages and dataset interpretation state

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Zone Label
// ============================================================================

/// Fluid zone assigned to a depth sample by the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZoneLabel {
    Gas,
    Oil,
    Water,
}

impl ZoneLabel {
    pub const ALL: [ZoneLabel; 3] = [ZoneLabel::Gas, ZoneLabel::Oil, ZoneLabel::Water];

    /// Gas and oil both count as pay
    pub fn is_hydrocarbon(self) -> bool {
        matches!(self, ZoneLabel::Gas | ZoneLabel::Oil)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ZoneLabel::Gas => "Gas",
            ZoneLabel::Oil => "Oil",
            ZoneLabel::Water => "Water",
        }
    }
}

impl std::fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised zone label text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zone label '{0}' (expected Gas, Oil or Water)")]
pub struct ParseZoneLabelError(pub String);

impl FromStr for ZoneLabel {
    type Err = ParseZoneLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Gas" => Ok(ZoneLabel::Gas),
            "Oil" => Ok(ZoneLabel::Oil),
            "Water" => Ok(ZoneLabel::Water),
            other => Err(ParseZoneLabelError(other.to_string())),
        }
    }
}

// ============================================================================
// Pipeline Stages
// ============================================================================

/// One stage of the derivation pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Porosity,
    Saturation,
    ZoneClassification,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Porosity => write!(f, "porosity"),
            PipelineStage::Saturation => write!(f, "water saturation"),
            PipelineStage::ZoneClassification => write!(f, "zone classification"),
        }
    }
}

/// Interpretation progress of a dataset
///
/// `Raw -> PorosityComputed -> {SaturationComputed, ZoneClassified}`.
/// Saturation and zoning are independent branches; `Interpreted` means both ran.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DatasetState {
    #[default]
    Raw,
    PorosityComputed,
    SaturationComputed,
    ZoneClassified,
    Interpreted,
}

impl DatasetState {
    /// Derive the state from which output curves are present.
    pub fn from_outputs(porosity: bool, saturation: bool, zones: bool) -> Self {
        match (porosity, saturation, zones) {
            (false, _, _) => DatasetState::Raw,
            (true, false, false) => DatasetState::PorosityComputed,
            (true, true, false) => DatasetState::SaturationComputed,
            (true, false, true) => DatasetState::ZoneClassified,
            (true, true, true) => DatasetState::Interpreted,
        }
    }

    /// Whether `stage` may run from this state.
    pub fn allows(self, stage: PipelineStage) -> bool {
        match stage {
            PipelineStage::Porosity => true,
            PipelineStage::Saturation | PipelineStage::ZoneClassification => {
                self != DatasetState::Raw
            }
        }
    }
}
