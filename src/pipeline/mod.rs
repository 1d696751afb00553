//! Interpretation Pipeline
//!
//! ```text
//! STAGE 1: Porosity             RHOB            -> porosity
//! STAGE 2: Water saturation     porosity + RILD -> water_saturation
//! STAGE 3: Zone classification  porosity + RILD -> hydrocarbon_zone
//! ```
//!
//! Stages 2 and 3 only depend on stage 1. This runner sits on the caller side
//! of the petrophysics core: it supplies parameters from `WellConfig`, logs
//! what the core reports, and applies the strict/lenient policy for
//! undefined saturation rows.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::WellConfig;
use crate::petrophysics::{
    self, PetrophysicsError, PorosityReport, SaturationReport, ZoneReport,
};
use crate::types::{DatasetState, WellLogDataset};

/// Caller policy for one pipeline run
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Treat any undefined saturation row as a failure
    pub strict: bool,
}

/// What one full run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub rows: usize,
    pub state: DatasetState,
    pub porosity: PorosityReport,
    pub saturation: SaturationReport,
    pub zones: ZoneReport,
}

/// Run all three stages on `dataset` with the parameters in `config`.
///
/// Any existing output curves are overwritten in place. In strict mode the
/// dataset is still fully augmented before `UndefinedSaturation` is returned.
pub fn run_pipeline(
    dataset: &mut WellLogDataset,
    config: &WellConfig,
    options: PipelineOptions,
) -> Result<PipelineSummary, PetrophysicsError> {
    info!(
        well = %config.well.name,
        rows = dataset.len(),
        state = ?dataset.state(),
        "Starting interpretation"
    );

    let porosity = petrophysics::estimate_porosity(dataset, &config.density)?;
    debug!(
        rho_matrix = config.density.rho_matrix,
        rho_fluid = config.density.rho_fluid,
        "Stage 1: porosity computed"
    );
    if !porosity.out_of_range_rows.is_empty() {
        warn!(
            rows = ?porosity.out_of_range_rows,
            "Porosity outside [0, 1] - check RHOB against matrix/fluid densities"
        );
    }

    let saturation = petrophysics::estimate_saturation(dataset, &config.archie)?;
    debug!(
        a = config.archie.a,
        m = config.archie.m,
        n = config.archie.n,
        rw = config.archie.rw,
        "Stage 2: water saturation computed"
    );
    for undefined in &saturation.undefined_rows {
        warn!(
            row = undefined.row,
            depth = undefined.depth,
            reason = %undefined.reason,
            "Water saturation undefined"
        );
    }

    let zones = petrophysics::classify_zones(dataset, &config.zones)?;
    debug!(gas = zones.gas, oil = zones.oil, water = zones.water, "Stage 3: zones classified");

    let summary = PipelineSummary {
        rows: dataset.len(),
        state: dataset.state(),
        porosity,
        saturation,
        zones,
    };

    info!(
        rows = summary.rows,
        hydrocarbon_rows = summary.zones.hydrocarbon_rows(),
        undefined_saturation = summary.saturation.undefined_rows.len(),
        "Interpretation complete"
    );

    if options.strict {
        summary.saturation.clone().into_result()?;
    }
    Ok(summary)
}
