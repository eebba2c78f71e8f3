//! Domain types for the rental pricing core

pub mod forecast;
pub mod period;
pub mod rates;

pub use forecast::{CostOptionDetails, Coverage, Forecast, ForecastDay, Strategy};
pub use period::RentalPeriodSplit;
pub use rates::{Bucket, RatePlan};
