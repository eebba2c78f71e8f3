//! Bulk Forecast Tests
//!
//! Batches are evaluated request by request: results line up with the input
//! and an invalid request only fails its own slot.

use rental_pricing_core_rs::{
    bulk_forecast, forecast, ForecastConfig, ForecastError, ForecastRequest, Forecaster, RatePlan,
};

fn request(day: i64, week: i64, month: i64, days: i64) -> ForecastRequest {
    ForecastRequest::new(RatePlan::new(day, week, month), days)
}

#[test]
fn test_empty_batch() {
    assert!(bulk_forecast(&[]).is_empty());
}

#[test]
fn test_results_match_request_order() {
    let requests = vec![
        request(1_000, 6_000, 20_000, 10),
        request(1_000, 6_000, 20_000, 28),
        request(500, 3_000, 9_000, 3),
    ];

    let results = bulk_forecast(&requests);
    assert_eq!(results.len(), 3);

    let totals: Vec<i64> = results
        .iter()
        .map(|r| r.as_ref().unwrap().accumulative_cost_in_cents)
        .collect();
    assert_eq!(totals, vec![9_000, 20_000, 1_500]);
}

#[test]
fn test_invalid_request_fails_only_its_slot() {
    let requests = vec![
        request(1_000, 6_000, 20_000, 10),
        request(1_000, 6_000, 20_000, 0),
        request(-1, 6_000, 20_000, 5),
        request(1_000, 6_000, 20_000, 28),
    ];

    let results = bulk_forecast(&requests);

    assert!(results[0].is_ok());
    assert_eq!(
        results[1],
        Err(ForecastError::InvalidDuration { days: 0 })
    );
    assert!(matches!(
        results[2],
        Err(ForecastError::NegativeRate { field: "per_day_cents", .. })
    ));
    assert_eq!(
        results[3].as_ref().unwrap().accumulative_cost_in_cents,
        20_000
    );
}

#[test]
fn test_bulk_matches_single_forecasts() {
    let requests: Vec<ForecastRequest> = (1..=40)
        .map(|days| request(1_000 + days, 6_000, 19_000 + days * 10, days))
        .collect();

    let results = bulk_forecast(&requests);
    for (req, result) in requests.iter().zip(results) {
        assert_eq!(result, forecast(&req.rates, req.duration_days));
    }
}

#[test]
fn test_parallel_and_sequential_paths_agree() {
    let requests: Vec<ForecastRequest> = (1..=100)
        .map(|i| request(800 + i, 5_000 + i * 3, 18_000, i % 60 + 1))
        .collect();

    let sequential = Forecaster::new(ForecastConfig {
        parallel_threshold: usize::MAX,
        ..ForecastConfig::default()
    });
    let parallel = Forecaster::new(ForecastConfig {
        parallel_threshold: 1,
        ..ForecastConfig::default()
    });

    assert_eq!(
        sequential.bulk_forecast(&requests),
        parallel.bulk_forecast(&requests)
    );
}

#[test]
fn test_shared_forecaster_across_threads() {
    let forecaster = Forecaster::default();
    let rates = RatePlan::new(1_000, 6_000, 20_000);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8)
            .map(|days| {
                let forecaster = &forecaster;
                scope.spawn(move || forecaster.forecast(&rates, days * 5).unwrap())
            })
            .collect();

        for (idx, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.len(), (idx + 1) * 5);
        }
    });
}

#[test]
fn test_request_deserializes_from_json() {
    let json = r#"[
        {"rates": {"per_day_cents": 1000, "per_week_cents": 6000, "per_month_cents": 20000}, "duration_days": 10}
    ]"#;
    let requests: Vec<ForecastRequest> = serde_json::from_str(json).unwrap();
    assert_eq!(requests, vec![request(1_000, 6_000, 20_000, 10)]);
}
