//! End-to-end pipeline tests over CSV files on disk.

use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use folio_analytics::WeightMode;
use folio_core::FolioError;
use folio_engine::{CsvTableLoader, Pipeline, PipelineConfig};

const PRICES: &str = "\
date,Asset1,Asset2,Asset3,Asset4,Asset5
2024-01-02,100.0,50.0,20.0,10.0,5.0
2024-01-03,110.0,50.0,21.0,10.0,5.0
2024-01-04,99.0,50.0,21.0,10.0,5.0
";

const WEIGHTS: &str = "\
date,Asset1,Asset2,Asset3,Asset4,Asset5
2024-01-01,0.2,0.3,0.25,0.15,0.1
2024-01-04,1.0,0.0,0.0,0.0,0.0
";

fn write_fixture(dir: &Path) -> PipelineConfig {
    let prices = dir.join("prices.csv");
    let weights = dir.join("weights.csv");
    fs::write(&prices, PRICES).unwrap();
    fs::write(&weights, WEIGHTS).unwrap();

    PipelineConfig {
        prices_file: prices.display().to_string(),
        weights_file: weights.display().to_string(),
        ..PipelineConfig::default()
    }
}

#[test]
fn test_static_pipeline_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());
    let loader = CsvTableLoader::new();
    let pipeline = Pipeline::from_config(&config, &loader).unwrap();

    assert_eq!(pipeline.assets().len(), 5);
    let r = pipeline.portfolio_returns().unwrap();
    // 0.2 * 10% + 0.25 * 5%
    assert_relative_eq!(r.values()[0], 3.25, epsilon = 1e-12);
    // 0.2 * -10%
    assert_relative_eq!(r.values()[1], -2.0, epsilon = 1e-12);

    let families = pipeline.family_weights().unwrap();
    assert_relative_eq!(families.value(0, "Fixed Income").unwrap(), 0.5);
    assert_relative_eq!(families.value(1, "Fixed Income").unwrap(), 1.0);
}

#[test]
fn test_time_varying_pipeline_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        weight_mode: WeightMode::TimeVarying,
        ..write_fixture(dir.path())
    };
    let loader = CsvTableLoader::new();
    let pipeline = Pipeline::from_config(&config, &loader).unwrap();

    let r = pipeline.portfolio_returns().unwrap();
    assert_relative_eq!(r.values()[0], 3.25, epsilon = 1e-12);
    // fully in Asset1 from 2024-01-04
    assert_relative_eq!(r.values()[1], -10.0, epsilon = 1e-12);
}

#[test]
fn test_loader_cache_is_shared_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());
    let loader = CsvTableLoader::new();

    Pipeline::from_config(&config, &loader).unwrap();
    Pipeline::from_config(&config, &loader).unwrap();
    assert_eq!(loader.len(), 2);
}

#[test]
fn test_missing_prices_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        prices_file: dir.path().join("absent.csv").display().to_string(),
        ..write_fixture(dir.path())
    };
    let err = Pipeline::from_config(&config, &CsvTableLoader::new()).unwrap_err();
    assert!(matches!(err, FolioError::MissingFile { .. }));
}

#[test]
fn test_report_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());
    let pipeline = Pipeline::from_config(&config, &CsvTableLoader::new()).unwrap();

    let report = pipeline.report().unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"cumulative_portfolio_returns\""));
    assert!(json.contains("Fixed Income"));
}
