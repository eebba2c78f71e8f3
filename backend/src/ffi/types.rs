//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::config::ForecastConfig;
use crate::models::{Forecast, ForecastDay, RatePlan, RentalPeriodSplit};
use crate::optimizer::ForecastRequest;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict
///
/// # Errors
/// Returns `ValueError` if the field is missing, or the conversion error if
/// it has the wrong type.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract a field with a default value if missing
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// Input Parsers
// ========================================================================

/// Convert Python dict to RatePlan
///
/// Sign checks are left to the forecaster so Python sees the same messages
/// as Rust callers.
pub fn parse_rate_plan(py_rates: &Bound<'_, PyDict>) -> PyResult<RatePlan> {
    Ok(RatePlan {
        per_day_cents: extract_required(py_rates, "per_day_cents")?,
        per_week_cents: extract_required(py_rates, "per_week_cents")?,
        per_month_cents: extract_required(py_rates, "per_month_cents")?,
    })
}

/// Convert Python dict to ForecastConfig, defaulting missing fields
pub fn parse_forecast_config(py_config: &Bound<'_, PyDict>) -> PyResult<ForecastConfig> {
    let defaults = ForecastConfig::default();
    Ok(ForecastConfig {
        max_duration_days: extract_with_default(
            py_config,
            "max_duration_days",
            defaults.max_duration_days,
        )?,
        parallel_threshold: extract_with_default(
            py_config,
            "parallel_threshold",
            defaults.parallel_threshold,
        )?,
    })
}

/// Convert a Python list of `{"rates": {...}, "duration_days": n}` dicts
pub fn parse_requests(py_requests: &Bound<'_, PyList>) -> PyResult<Vec<ForecastRequest>> {
    let mut requests = Vec::with_capacity(py_requests.len());
    for item in py_requests.iter() {
        let dict: Bound<'_, PyDict> = item.downcast_into()?;
        let rates: Bound<'_, PyDict> = dict
            .get_item("rates")?
            .ok_or_else(|| PyValueError::new_err("Missing required field 'rates'"))?
            .downcast_into()?;

        requests.push(ForecastRequest::new(
            parse_rate_plan(&rates)?,
            extract_required(&dict, "duration_days")?,
        ));
    }
    Ok(requests)
}

// ========================================================================
// Output Converters
// ========================================================================

fn rates_to_py<'py>(py: Python<'py>, rates: &RatePlan) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("per_day_cents", rates.per_day_cents)?;
    dict.set_item("per_week_cents", rates.per_week_cents)?;
    dict.set_item("per_month_cents", rates.per_month_cents)?;
    Ok(dict)
}

fn split_to_py<'py>(py: Python<'py>, split: &RentalPeriodSplit) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("days1", split.days1)?;
    dict.set_item("days7", split.days7)?;
    dict.set_item("days28", split.days28)?;
    Ok(dict)
}

fn forecast_day_to_py<'py>(py: Python<'py>, entry: &ForecastDay) -> PyResult<Bound<'py, PyDict>> {
    let details = PyDict::new(py);
    details.set_item(
        "exact_split_distribution",
        split_to_py(py, &entry.details.exact_split_distribution)?,
    )?;
    details.set_item(
        "exact_split_cost_in_cents",
        entry.details.exact_split_cost_in_cents,
    )?;
    details.set_item("optimal_split", split_to_py(py, &entry.details.optimal_split)?)?;
    details.set_item("rates", rates_to_py(py, &entry.details.rates)?)?;
    details.set_item("plain_text", entry.details.plain_text.as_str())?;

    let dict = PyDict::new(py);
    dict.set_item("day", entry.day)?;
    dict.set_item("cost_in_cents", entry.cost_in_cents)?;
    dict.set_item("accumulative_cost_in_cents", entry.accumulative_cost_in_cents)?;
    dict.set_item("rental_period", split_to_py(py, &entry.rental_period)?)?;
    dict.set_item("strategy", entry.strategy.as_str())?;
    dict.set_item("coverage", entry.coverage.as_str())?;
    dict.set_item("covered_days", entry.covered_days)?;
    dict.set_item("overshoot_days", entry.overshoot_days)?;
    dict.set_item(
        "savings_vs_day_rate_in_cents",
        entry.savings_vs_day_rate_in_cents,
    )?;
    dict.set_item(
        "savings_vs_day_rate_fraction",
        entry.savings_vs_day_rate_fraction,
    )?;
    dict.set_item(
        "savings_vs_exact_split_in_cents",
        entry.savings_vs_exact_split_in_cents,
    )?;
    dict.set_item("details", details)?;
    Ok(dict)
}

/// Convert a Forecast to a Python dict
pub fn forecast_to_py<'py>(py: Python<'py>, forecast: &Forecast) -> PyResult<Bound<'py, PyDict>> {
    let days = PyList::empty(py);
    for entry in &forecast.days {
        days.append(forecast_day_to_py(py, entry)?)?;
    }

    let dict = PyDict::new(py);
    dict.set_item(
        "accumulative_cost_in_cents",
        forecast.accumulative_cost_in_cents,
    )?;
    dict.set_item("days", days)?;
    Ok(dict)
}
