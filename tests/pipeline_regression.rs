//! Pipeline Regression Tests
//!
//! Drives the three petrophysics stages through the public API and pins the
//! reference numbers, stage ordering rules and re-run behaviour.

use std::collections::BTreeMap;

use well_log_insights::config::WellConfig;
use well_log_insights::petrophysics::{
    classify_sample, classify_zones, estimate_porosity, estimate_saturation, PetrophysicsError,
    UndefinedReason,
};
use well_log_insights::pipeline::{run_pipeline, PipelineOptions};
use well_log_insights::types::{
    curves, ArchieParameters, DatasetState, DensityParameters, PipelineStage, WellLogDataset,
    ZoneLabel, ZoneThresholds,
};

fn sandstone() -> DensityParameters {
    DensityParameters {
        rho_matrix: 2.65,
        rho_fluid: 1.0,
    }
}

fn archie() -> ArchieParameters {
    ArchieParameters {
        a: 1.0,
        m: 2.0,
        n: 2.0,
        rw: 0.1,
    }
}

/// Mixed log, deliberately unsorted by depth:
/// row 0 gas sand, row 1 oil sand, row 2 tight oil-window, row 3 wet shale,
/// row 4 zero-porosity streak (RHOB == matrix).
fn mixed_log() -> WellLogDataset {
    let rows = [
        (2050.0, 2.30, 150.0),
        (2010.0, 2.45, 75.0),
        (2030.0, 2.58, 75.0),
        (2000.0, 1.90, 30.0),
        (2020.0, 2.65, 40.0),
    ];
    let samples: Vec<BTreeMap<String, f64>> = rows
        .iter()
        .map(|&(depth, rhob, rild)| {
            BTreeMap::from([
                (curves::DEPTH.to_string(), depth),
                (curves::BULK_DENSITY.to_string(), rhob),
                (curves::DEEP_RESISTIVITY.to_string(), rild),
            ])
        })
        .collect();
    WellLogDataset::from_samples(&samples).expect("valid samples")
}

#[test]
fn reference_porosity_and_saturation() {
    let mut ds = WellLogDataset::new(vec![1000.0])
        .and_then(|d| d.with_curve(curves::BULK_DENSITY, vec![2.45]))
        .and_then(|d| d.with_curve(curves::DEEP_RESISTIVITY, vec![120.0]))
        .expect("valid dataset");

    estimate_porosity(&mut ds, &sandstone()).expect("porosity");
    let phi = ds.porosity().expect("porosity")[0];
    assert!((phi - 0.2 / 1.65).abs() < 1e-9, "phi = {phi}");

    estimate_saturation(&mut ds, &archie()).expect("saturation");
    let sw = ds.water_saturation().expect("saturation")[0].expect("defined");
    let expected = (0.1 / (phi * phi * 120.0)).sqrt();
    assert!((sw - expected).abs() < 1e-12);
    // 3 significant figures
    assert!((sw - 0.238).abs() < 5e-4, "Sw = {sw}");
}

#[test]
fn porosity_formula_holds_for_every_row() {
    let mut ds = mixed_log();
    estimate_porosity(&mut ds, &sandstone()).expect("porosity");

    let rhob = ds.numeric(curves::BULK_DENSITY).expect("RHOB");
    let phi = ds.porosity().expect("porosity");
    for (p, rho) in phi.iter().zip(rhob) {
        assert!((p - (2.65 - rho) / (2.65 - 1.0)).abs() < 1e-9);
    }
}

#[test]
fn classifier_reference_cases() {
    let t = ZoneThresholds::default();
    assert_eq!(classify_sample(150.0, 0.20, &t), ZoneLabel::Gas);
    assert_eq!(classify_sample(75.0, 0.12, &t), ZoneLabel::Oil);
    assert_eq!(classify_sample(75.0, 0.05, &t), ZoneLabel::Water);
    assert_eq!(classify_sample(30.0, 0.5, &t), ZoneLabel::Water);
}

#[test]
fn downstream_stages_require_porosity() {
    let mut ds = mixed_log();
    let before = ds.clone();

    assert_eq!(
        estimate_saturation(&mut ds, &archie()),
        Err(PetrophysicsError::PrerequisiteMissing {
            stage: PipelineStage::Saturation,
            requires: PipelineStage::Porosity,
        })
    );
    assert_eq!(
        classify_zones(&mut ds, &ZoneThresholds::default()),
        Err(PetrophysicsError::PrerequisiteMissing {
            stage: PipelineStage::ZoneClassification,
            requires: PipelineStage::Porosity,
        })
    );
    assert_eq!(ds, before);
    assert_eq!(ds.state(), DatasetState::Raw);
}

#[test]
fn zero_porosity_row_is_isolated() {
    let mut ds = mixed_log();
    estimate_porosity(&mut ds, &sandstone()).expect("porosity");
    let report = estimate_saturation(&mut ds, &archie()).expect("call still succeeds");

    assert_eq!(report.undefined_indices(), vec![4]);
    assert_eq!(report.undefined_rows[0].reason, UndefinedReason::ZeroPorosity);
    assert!((report.undefined_rows[0].depth - 2020.0).abs() < f64::EPSILON);

    let sw = ds.water_saturation().expect("saturation");
    for (row, value) in sw.iter().enumerate() {
        if row == 4 {
            assert!(value.is_none());
        } else {
            assert!(value.is_some_and(f64::is_finite), "row {row} should be valid");
        }
    }
}

#[test]
fn saturation_and_zoning_are_independent_branches() {
    let mut ds = mixed_log();
    estimate_porosity(&mut ds, &sandstone()).expect("porosity");

    classify_zones(&mut ds, &ZoneThresholds::default()).expect("zones without saturation");
    assert_eq!(ds.state(), DatasetState::ZoneClassified);
    assert!(ds.water_saturation().is_none());

    estimate_saturation(&mut ds, &archie()).expect("saturation after zones");
    assert_eq!(ds.state(), DatasetState::Interpreted);
}

#[test]
fn zones_stay_aligned_with_unsorted_rows() {
    let mut ds = mixed_log();
    estimate_porosity(&mut ds, &sandstone()).expect("porosity");
    classify_zones(&mut ds, &ZoneThresholds::default()).expect("zones");

    // phi: 0.212, 0.121, 0.042, 0.455, 0.0
    assert_eq!(
        ds.hydrocarbon_zones().expect("zones"),
        &[
            ZoneLabel::Gas,
            ZoneLabel::Oil,
            ZoneLabel::Water,
            ZoneLabel::Water,
            ZoneLabel::Water,
        ]
    );
    assert_eq!(ds.depth(), &[2050.0, 2010.0, 2030.0, 2000.0, 2020.0]);
}

#[test]
fn degenerate_densities_do_not_touch_dataset() {
    let mut ds = mixed_log();
    let before = ds.clone();
    let result = estimate_porosity(
        &mut ds,
        &DensityParameters {
            rho_matrix: 2.0,
            rho_fluid: 2.0,
        },
    );
    assert!(matches!(result, Err(PetrophysicsError::DegenerateParameters { .. })));
    assert_eq!(ds, before);
}

#[test]
fn rerunning_full_pipeline_is_deterministic() {
    let config = WellConfig::default();
    let mut ds = mixed_log();

    let first = run_pipeline(&mut ds, &config, PipelineOptions::default()).expect("first run");
    let snapshot = ds.clone();
    let second = run_pipeline(&mut ds, &config, PipelineOptions::default()).expect("second run");

    assert_eq!(first, second);
    assert_eq!(ds, snapshot);
    assert_eq!(ds.curves().len(), 6, "Depth, RHOB, RILD + three outputs");
}

#[test]
fn rerun_with_new_parameters_overwrites_outputs() {
    let mut config = WellConfig::default();
    let mut ds = mixed_log();
    run_pipeline(&mut ds, &config, PipelineOptions::default()).expect("sandstone run");
    let sandstone_phi = ds.porosity().expect("porosity").to_vec();

    // Limestone matrix raises porosity everywhere
    config.density.rho_matrix = 2.71;
    run_pipeline(&mut ds, &config, PipelineOptions::default()).expect("limestone run");
    let limestone_phi = ds.porosity().expect("porosity");

    assert_eq!(ds.curves().len(), 6);
    for (old, new) in sandstone_phi.iter().zip(limestone_phi) {
        assert!(new > old);
    }
    // The former zero-porosity row now has a saturation value
    assert!(ds.water_saturation().expect("saturation")[4].is_some());
}
