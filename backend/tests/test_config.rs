//! Configuration Loading Tests

use rental_pricing_core_rs::{ConfigError, ForecastConfig, ForecastError, Forecaster, RatePlan};

fn temp_config_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "rental-pricing-{}-{}.json",
        name,
        std::process::id()
    ))
}

#[test]
fn test_load_config_from_file() {
    let path = temp_config_path("load");
    std::fs::write(&path, r#"{"max_duration_days": 90, "parallel_threshold": 8}"#).unwrap();

    let config = ForecastConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.max_duration_days, 90);
    assert_eq!(config.parallel_threshold, 8);
}

#[test]
fn test_missing_file_is_io_error() {
    let path = temp_config_path("missing");
    let err = ForecastConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("rental-pricing-missing"));
}

#[test]
fn test_unknown_type_is_parse_error() {
    let err = ForecastConfig::from_json_str(r#"{"max_duration_days": "lots"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_loaded_limit_is_enforced() {
    let config = ForecastConfig::from_json_str(r#"{"max_duration_days": 14}"#).unwrap();
    let forecaster = Forecaster::new(config);
    let rates = RatePlan::new(1_000, 6_000, 20_000);

    assert_eq!(forecaster.forecast(&rates, 14).unwrap().len(), 14);
    assert_eq!(
        forecaster.forecast(&rates, 15),
        Err(ForecastError::DurationTooLong { days: 15, max: 14 })
    );
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ForecastConfig {
        max_duration_days: 400,
        parallel_threshold: 2,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ForecastConfig::from_json_str(&json).unwrap(), config);
}
