//! Rental Pricing Core - Rust Engine
//!
//! Cost optimization and price forecasting for day / week / month rentals.
//!
//! # Architecture
//!
//! - **models**: Domain types (RatePlan, RentalPeriodSplit, Forecast)
//! - **optimizer**: Minimum-cost cover table and forecast builder
//! - **pricing**: Line-item subtotals over rental and sale prices
//! - **config**: Forecaster limits and tuning
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Forecasts are deterministic (fixed month > week > day tie-break)
//! 3. No shared mutable state; every call is independent
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod config;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod pricing;

// Re-exports for convenience
pub use config::{ConfigError, ForecastConfig};
pub use error::{ErrorKind, ForecastError};
pub use models::{
    Bucket, CostOptionDetails, Coverage, Forecast, ForecastDay, RatePlan, RentalPeriodSplit,
    Strategy,
};
pub use optimizer::{bulk_forecast, forecast, format_cents, ForecastRequest, Forecaster};
pub use pricing::{
    bulk_calculate_sub_total, calculate_sub_total, LineItem, LineItemForecast, Price,
    RentalPrice, SalePrice, SubTotal,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn rental_pricing_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::forecaster::PyForecaster>()?;
    Ok(())
}
