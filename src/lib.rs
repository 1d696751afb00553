//! Well Log Insights: petrophysical interpretation of well logs
//!
//! Turns raw density and resistivity logs into reservoir properties.
//!
//! ## Architecture
//!
//! - **Petrophysics**: the pure core - porosity, Archie saturation, zone labels
//! - **Pipeline**: runs the three stages with configured parameters and logs the outcome
//! - **Config**: per-well TOML parameters with typo detection and range checks
//! - **Ingest / Report**: CSV in, CSV + JSON out

pub mod config;
pub mod ingest;
pub mod petrophysics;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export configuration
pub use config::WellConfig;

// Re-export commonly used types
pub use types::{
    curves, ArchieParameters, Curve, CurveData, DatasetError, DatasetState, DensityParameters,
    PipelineStage, WellLogDataset, ZoneLabel, ZoneThresholds,
};

// Re-export the pipeline stages
pub use petrophysics::{
    classify_sample, classify_zones, estimate_porosity, estimate_saturation, PetrophysicsError,
    PorosityReport, SaturationReport, UndefinedReason, UndefinedRow, ZoneReport,
};

pub use pipeline::{run_pipeline, PipelineOptions, PipelineSummary};
