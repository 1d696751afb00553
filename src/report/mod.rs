//! Interpretation report: zone intervals, per-zone statistics and export.
//!
//! Everything here reads an already-augmented dataset; nothing feeds back
//! into the petrophysics core.

pub mod export;
pub mod intervals;
pub mod statistics;

pub use export::{save_csv, write_csv};
pub use intervals::{zone_intervals, ZoneInterval};
pub use statistics::{zone_statistics, ZoneStatistics};

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::WellConfig;
use crate::pipeline::PipelineSummary;
use crate::types::{ArchieParameters, DensityParameters, WellLogDataset, ZoneThresholds};

/// Parameters a run was made with, echoed into the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportParameters {
    pub density: DensityParameters,
    pub archie: ArchieParameters,
    pub zones: ZoneThresholds,
}

/// Complete interpretation report for one well
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub well: String,
    #[serde(default)]
    pub field: String,
    pub generated_at: DateTime<Utc>,
    pub parameters: ReportParameters,
    pub summary: PipelineSummary,
    pub intervals: Vec<ZoneInterval>,
    pub statistics: Vec<ZoneStatistics>,
}

/// Assemble a report from an interpreted dataset.
pub fn build_report(
    dataset: &WellLogDataset,
    config: &WellConfig,
    summary: PipelineSummary,
) -> AnalysisReport {
    AnalysisReport {
        well: config.well.name.clone(),
        field: config.well.field.clone(),
        generated_at: Utc::now(),
        parameters: ReportParameters {
            density: config.density,
            archie: config.archie,
            zones: config.zones,
        },
        summary,
        intervals: zone_intervals(dataset),
        statistics: zone_statistics(dataset),
    }
}

/// Write the report as pretty-printed JSON.
pub fn save_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), intervals = report.intervals.len(), "Report written");
    Ok(())
}
