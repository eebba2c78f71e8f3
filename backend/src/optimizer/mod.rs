//! Rental Cost Optimizer
//!
//! Chooses, for every day of a rental, the cheapest mix of day, week and
//! 28-day units that covers at least that many days, and reports savings
//! against pure day-rate pricing and against the exact (no overshoot) split.
//!
//! # Critical Invariants
//!
//! 1. **Monotonic totals**: `accumulative_cost_in_cents` never decreases from
//!    one day to the next, and never grows by more than one day rate
//! 2. **Never worse than simpler strategies**: both savings figures are >= 0
//! 3. **Deterministic ties**: equal-cost candidates resolve month > week > day
//! 4. **Pure**: no shared state; a `Forecaster` is `Send + Sync`
//!
//! # Example
//!
//! ```rust
//! use rental_pricing_core_rs::{forecast, RatePlan, RentalPeriodSplit, Strategy};
//!
//! let rates = RatePlan::new(1_000, 6_000, 20_000);
//! let result = forecast(&rates, 10).unwrap();
//!
//! assert_eq!(result.accumulative_cost_in_cents, 9_000);
//! let last = result.last().unwrap();
//! assert_eq!(last.rental_period, RentalPeriodSplit::new(3, 1, 0));
//! assert_eq!(last.strategy, Strategy::Weekly);
//! assert_eq!(last.savings_vs_day_rate_in_cents, 1_000);
//! ```

pub mod explain;
pub mod table;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::models::{
    CostOptionDetails, Coverage, Forecast, ForecastDay, RatePlan, RentalPeriodSplit, Strategy,
};

pub use explain::format_cents;
pub use table::CostTable;

/// One entry of a bulk forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub rates: RatePlan,
    pub duration_days: i64,
}

impl ForecastRequest {
    pub fn new(rates: RatePlan, duration_days: i64) -> Self {
        Self {
            rates,
            duration_days,
        }
    }
}

/// Configured forecasting entry point
///
/// Holds only immutable configuration, so a single instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast the optimal cumulative cost for days `1..=duration_days`
    ///
    /// # Errors
    ///
    /// - `InvalidDuration` if `duration_days < 1`
    /// - `DurationTooLong` if it exceeds `max_duration_days`
    /// - `NegativeRate` if any rate is negative
    ///
    /// All-zero rates are valid and produce an all-zero forecast.
    pub fn forecast(
        &self,
        rates: &RatePlan,
        duration_days: i64,
    ) -> Result<Forecast, ForecastError> {
        let duration = match self.validate(rates, duration_days) {
            Ok(duration) => duration,
            Err(e) => {
                tracing::warn!("Rejected forecast request: {}", e);
                return Err(e);
            }
        };

        tracing::debug!(
            duration_days = duration,
            per_day_cents = rates.per_day_cents,
            per_week_cents = rates.per_week_cents,
            per_month_cents = rates.per_month_cents,
            "building forecast"
        );

        let table = CostTable::build(rates, duration);
        let days = (1..=duration)
            .map(|day| forecast_day(rates, &table, day))
            .collect();

        Ok(Forecast {
            accumulative_cost_in_cents: table.cost(duration),
            days,
        })
    }

    /// Forecast each request independently
    ///
    /// Results line up with `requests` by index. A rejected request only
    /// fails its own slot. Batches of at least `parallel_threshold` requests
    /// are spread over the rayon pool.
    pub fn bulk_forecast(
        &self,
        requests: &[ForecastRequest],
    ) -> Vec<Result<Forecast, ForecastError>> {
        let parallel = requests.len() >= self.config.parallel_threshold;
        tracing::trace!(count = requests.len(), parallel, "bulk forecast");

        if parallel {
            requests
                .par_iter()
                .map(|req| self.forecast(&req.rates, req.duration_days))
                .collect()
        } else {
            requests
                .iter()
                .map(|req| self.forecast(&req.rates, req.duration_days))
                .collect()
        }
    }

    fn validate(&self, rates: &RatePlan, duration_days: i64) -> Result<usize, ForecastError> {
        if duration_days < 1 {
            return Err(ForecastError::InvalidDuration {
                days: duration_days,
            });
        }
        if duration_days > i64::from(self.config.max_duration_days) {
            return Err(ForecastError::DurationTooLong {
                days: duration_days,
                max: self.config.max_duration_days,
            });
        }
        rates.validate()?;

        Ok(duration_days as usize)
    }
}

/// Forecast with the default configuration
///
/// See [`Forecaster::forecast`].
pub fn forecast(rates: &RatePlan, duration_days: i64) -> Result<Forecast, ForecastError> {
    Forecaster::default().forecast(rates, duration_days)
}

/// Bulk forecast with the default configuration
///
/// See [`Forecaster::bulk_forecast`].
pub fn bulk_forecast(requests: &[ForecastRequest]) -> Vec<Result<Forecast, ForecastError>> {
    Forecaster::default().bulk_forecast(requests)
}

fn forecast_day(rates: &RatePlan, table: &CostTable, day: usize) -> ForecastDay {
    let cost = table.cost(day);
    let optimal = table.split(day);
    let covered = optimal.total_days();

    let exact = RentalPeriodSplit::exact_for(day);
    let exact_cost = exact.cost_in_cents(rates);
    let day_rate_cost = rates.day_rate_cost(day);

    let savings_vs_day_rate = day_rate_cost.saturating_sub(cost);
    let savings_fraction = if day_rate_cost == 0 {
        0.0
    } else {
        savings_vs_day_rate as f64 / day_rate_cost as f64
    };

    let plain_text = explain::plain_text(&explain::Summary {
        day,
        optimal: &optimal,
        optimal_cost: cost,
        exact: &exact,
        exact_cost,
        day_rate_cost,
    });

    ForecastDay {
        day: day as u32,
        cost_in_cents: cost.saturating_sub(table.cost(day - 1)),
        accumulative_cost_in_cents: cost,
        rental_period: optimal,
        strategy: Strategy::for_split(&optimal),
        coverage: if covered > day {
            Coverage::Overshoot
        } else {
            Coverage::Exact
        },
        covered_days: covered as u32,
        overshoot_days: (covered - day) as u32,
        savings_vs_day_rate_in_cents: savings_vs_day_rate,
        savings_vs_day_rate_fraction: savings_fraction,
        savings_vs_exact_split_in_cents: exact_cost.saturating_sub(cost),
        details: CostOptionDetails {
            exact_split_distribution: exact,
            exact_split_cost_in_cents: exact_cost,
            optimal_split: optimal,
            rates: *rates,
            plain_text,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_rates() -> RatePlan {
        RatePlan::new(1_000, 6_000, 20_000)
    }

    #[test]
    fn test_forecast_has_one_entry_per_day() {
        let result = forecast(&reference_rates(), 45).unwrap();
        assert_eq!(result.len(), 45);
        for (idx, entry) in result.days.iter().enumerate() {
            assert_eq!(entry.day as usize, idx + 1);
        }
    }

    #[test]
    fn test_marginal_costs_sum_to_total() {
        let result = forecast(&reference_rates(), 60).unwrap();
        let sum: i64 = result.days.iter().map(|d| d.cost_in_cents).sum();
        assert_eq!(sum, result.accumulative_cost_in_cents);
    }

    #[test]
    fn test_overshoot_entry() {
        let result = forecast(&reference_rates(), 23).unwrap();
        let entry = result.day(23).unwrap();
        assert_eq!(entry.coverage, Coverage::Overshoot);
        assert_eq!(entry.covered_days, 28);
        assert_eq!(entry.overshoot_days, 5);
        assert_eq!(entry.strategy, Strategy::Monthly);
        // Exact split: 3 weeks + 2 days = $200, same price as the month
        assert_eq!(entry.details.exact_split_cost_in_cents, 20_000);
        assert_eq!(entry.savings_vs_exact_split_in_cents, 0);
    }

    #[test]
    fn test_zero_marginal_cost_inside_overshoot() {
        let result = forecast(&reference_rates(), 28).unwrap();
        assert_eq!(result.day(24).unwrap().cost_in_cents, 0);
        assert_eq!(result.day(28).unwrap().cost_in_cents, 0);
    }

    #[test]
    fn test_rejects_zero_and_negative_duration() {
        assert_eq!(
            forecast(&reference_rates(), 0),
            Err(ForecastError::InvalidDuration { days: 0 })
        );
        assert_eq!(
            forecast(&reference_rates(), -5),
            Err(ForecastError::InvalidDuration { days: -5 })
        );
    }

    #[test]
    fn test_rejects_negative_rate() {
        let rates = RatePlan::new(1_000, 6_000, -1);
        assert_eq!(
            forecast(&rates, 3),
            Err(ForecastError::NegativeRate {
                field: "per_month_cents",
                value: -1
            })
        );
    }

    #[test]
    fn test_respects_max_duration() {
        let forecaster = Forecaster::new(ForecastConfig {
            max_duration_days: 30,
            ..ForecastConfig::default()
        });
        assert!(forecaster.forecast(&reference_rates(), 30).is_ok());
        assert_eq!(
            forecaster.forecast(&reference_rates(), 31),
            Err(ForecastError::DurationTooLong { days: 31, max: 30 })
        );
    }

    #[test]
    fn test_forecaster_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Forecaster>();
    }
}
