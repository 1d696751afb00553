//! Shared data structures for the petrophysical interpretation pipeline
//!
//! - `WellLogDataset`: columnar samples indexed by depth
//! - `DensityParameters` / `ArchieParameters`: per-call formation inputs
//! - `ZoneThresholds`: classifier cut-offs
//! - `ZoneLabel`, `PipelineStage`, `DatasetState`

mod dataset;
mod formation;
mod state;
// Public so callers can reach the `zone_thresholds` constants as `types::thresholds`.
pub mod thresholds;

pub use dataset::*;
pub use formation::*;
pub use state::*;
pub use thresholds::*;
