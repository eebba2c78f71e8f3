//! PyO3 wrapper for Forecaster
//!
//! This module provides the Python interface to the Rust forecaster.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{forecast_to_py, parse_forecast_config, parse_rate_plan, parse_requests};
use crate::optimizer::Forecaster as RustForecaster;

/// Python wrapper for Rust Forecaster
///
/// # Example (from Python)
///
/// ```python
/// from rental_pricing_core_rs import Forecaster
///
/// forecaster = Forecaster({"max_duration_days": 365})
/// result = forecaster.forecast(
///     {"per_day_cents": 1000, "per_week_cents": 6000, "per_month_cents": 20000},
///     10,
/// )
/// print(result["accumulative_cost_in_cents"])  # 9000
/// ```
#[pyclass(name = "Forecaster")]
pub struct PyForecaster {
    inner: RustForecaster,
}

#[pymethods]
impl PyForecaster {
    /// Create a forecaster, optionally from a config dict
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config {
            Some(dict) => parse_forecast_config(dict)?,
            None => Default::default(),
        };
        Ok(PyForecaster {
            inner: RustForecaster::new(config),
        })
    }

    /// Forecast optimal cumulative cost for days 1..=duration_days
    ///
    /// # Errors
    ///
    /// Raises ValueError for negative rates or a duration outside
    /// 1..=max_duration_days.
    fn forecast<'py>(
        &self,
        py: Python<'py>,
        rates: &Bound<'py, PyDict>,
        duration_days: i64,
    ) -> PyResult<Bound<'py, PyDict>> {
        let rates = parse_rate_plan(rates)?;
        let forecast = self
            .inner
            .forecast(&rates, duration_days)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        forecast_to_py(py, &forecast)
    }

    /// Forecast a list of requests
    ///
    /// Returns a list aligned with the input. Each element is either a
    /// forecast dict or `{"error": "<message>"}`.
    fn bulk_forecast<'py>(
        &self,
        py: Python<'py>,
        requests: &Bound<'py, PyList>,
    ) -> PyResult<Bound<'py, PyList>> {
        let requests = parse_requests(requests)?;
        let results = py.allow_threads(|| self.inner.bulk_forecast(&requests));

        let out = PyList::empty(py);
        for result in results {
            match result {
                Ok(forecast) => out.append(forecast_to_py(py, &forecast)?)?,
                Err(e) => {
                    let dict = PyDict::new(py);
                    dict.set_item("error", e.to_string())?;
                    out.append(dict)?;
                }
            }
        }
        Ok(out)
    }
}
