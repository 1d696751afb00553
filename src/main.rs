//! Well Log Insights - petrophysical interpretation of a single well log
//!
//! Derives porosity from bulk density, Archie water saturation from porosity
//! and deep resistivity, and flags Gas / Oil / Water zones.
//!
//! # Usage
//!
//! ```bash
//! # Interpret the built-in sample log
//! well-log-insights --sample
//!
//! # Interpret a CSV log and export the augmented table plus a JSON report
//! well-log-insights --input log.csv --output interpreted.csv --report report.json
//!
//! # Limestone matrix, tighter cementation
//! well-log-insights --input log.csv --rho-matrix 2.71 --m 2.2
//!
//! # Write a starter config with the built-in defaults
//! well-log-insights init-config well_log.toml
//! ```
//!
//! # Environment Variables
//!
//! - `WELL_LOG_CONFIG`: Path to a TOML config (default: ./well_log.toml)
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use well_log_insights::config::WellConfig;
use well_log_insights::pipeline::{run_pipeline, PipelineOptions};
use well_log_insights::types::WellLogDataset;
use well_log_insights::{ingest, report};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "well-log-insights")]
#[command(about = "Porosity, water saturation and hydrocarbon zones from well logs")]
#[command(version)]
struct CliArgs {
    /// CSV well log with a header row (Depth, RHOB, RILD, ...)
    #[arg(short, long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Use the built-in four-sample demonstration log
    #[arg(long)]
    sample: bool,

    /// TOML config path; must load. Without it WELL_LOG_CONFIG, then
    /// ./well_log.toml, then built-in defaults are tried
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Matrix density override (g/cm³)
    #[arg(long)]
    rho_matrix: Option<f64>,

    /// Fluid density override (g/cm³)
    #[arg(long)]
    rho_fluid: Option<f64>,

    /// Archie tortuosity factor override
    #[arg(long)]
    a: Option<f64>,

    /// Archie cementation exponent override
    #[arg(long)]
    m: Option<f64>,

    /// Archie saturation exponent override
    #[arg(long)]
    n: Option<f64>,

    /// Formation water resistivity override (ohm·m)
    #[arg(long)]
    rw: Option<f64>,

    /// Write the augmented dataset as CSV
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the interpretation report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Fail if water saturation is undefined for any row
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Write a config file populated with the built-in defaults
    InitConfig {
        /// Destination path
        #[arg(default_value = "well_log.toml")]
        path: PathBuf,
    },
}

impl CliArgs {
    /// Apply command-line parameter overrides on top of the loaded config.
    fn apply_overrides(&self, config: &mut WellConfig) {
        let overrides = [
            (self.rho_matrix, &mut config.density.rho_matrix),
            (self.rho_fluid, &mut config.density.rho_fluid),
            (self.a, &mut config.archie.a),
            (self.m, &mut config.archie.m),
            (self.n, &mut config.archie.n),
            (self.rw, &mut config.archie.rw),
        ];
        for (value, slot) in overrides {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

fn load_config(args: &CliArgs) -> Result<WellConfig> {
    let mut config = match &args.config {
        Some(path) => WellConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WellConfig::load(),
    };
    args.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        bail!("{e}");
    }
    Ok(config)
}

fn load_dataset(args: &CliArgs) -> Result<WellLogDataset> {
    match (&args.input, args.sample) {
        (Some(path), _) => {
            ingest::load_csv(path).with_context(|| format!("loading {}", path.display()))
        }
        (None, true) => {
            info!("Using built-in sample log");
            Ok(ingest::sample_dataset()?)
        }
        (None, false) => bail!("no data: pass --input <CSV> or --sample"),
    }
}

/// Print the Depth / zone table the way analysts read it: shallow to deep.
fn print_zone_table(dataset: &WellLogDataset) {
    let (Some(zones), Some(porosity)) = (dataset.hydrocarbon_zones(), dataset.porosity()) else {
        return;
    };
    let saturation = dataset.water_saturation();
    let depth = dataset.depth();

    let mut order: Vec<usize> = (0..dataset.len()).collect();
    order.sort_by(|&a, &b| depth[a].total_cmp(&depth[b]));

    println!("{:>10}  {:>9}  {:>9}  {}", "Depth", "Porosity", "Sw", "Zone");
    for row in order {
        let sw = saturation
            .and_then(|s| s[row])
            .map_or_else(|| "undefined".to_string(), |v| format!("{v:.3}"));
        println!(
            "{:>10.1}  {:>9.3}  {:>9}  {}",
            depth[row], porosity[row], sw, zones[row]
        );
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    if let Some(SubCommand::InitConfig { path }) = &args.command {
        if path.exists() {
            bail!("{} already exists - not overwriting", path.display());
        }
        let text = WellConfig::default().to_toml_string()?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "Wrote default config");
        return Ok(());
    }

    let config = load_config(&args)?;
    let mut dataset = load_dataset(&args)?;

    let summary = run_pipeline(
        &mut dataset,
        &config,
        PipelineOptions {
            strict: args.strict,
        },
    )?;

    print_zone_table(&dataset);

    if let Some(path) = &args.output {
        report::save_csv(&dataset, path)?;
    }
    if let Some(path) = &args.report {
        let analysis = report::build_report(&dataset, &config, summary);
        report::save_json(&analysis, path)?;
    }

    Ok(())
}
