//! Forecast output types
//!
//! A forecast has one entry per day of the requested duration (1-indexed).
//! Each entry reports the cheapest way to cover that many days, the running
//! total and how much it saves against simpler strategies.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

use super::period::RentalPeriodSplit;
use super::rates::{Bucket, RatePlan};

/// Dominant denomination of an optimal split
///
/// This is the largest bucket the split buys, not the one it buys most of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Only single-day units
    Daily,
    /// At least one week unit, no month units
    Weekly,
    /// At least one month unit
    Monthly,
}

impl Strategy {
    /// Label for a split
    ///
    /// An empty split (only possible for day 0) is labelled `Daily`.
    pub fn for_split(split: &RentalPeriodSplit) -> Self {
        match split.largest_bucket() {
            Some(Bucket::Month) => Strategy::Monthly,
            Some(Bucket::Week) => Strategy::Weekly,
            Some(Bucket::Day) | None => Strategy::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Daily => "daily",
            Strategy::Weekly => "weekly",
            Strategy::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Whether the optimal split covers exactly the requested days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// Split covers exactly the requested number of days
    Exact,
    /// Split buys more days than requested because that is cheaper
    Overshoot,
}

impl Coverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Coverage::Exact => "exact",
            Coverage::Overshoot => "overshoot",
        }
    }
}

/// The two candidate splits for a day count, with the rates and a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostOptionDetails {
    /// Fewest-units split covering exactly the day count
    pub exact_split_distribution: RentalPeriodSplit,

    /// Price of `exact_split_distribution` (cents)
    pub exact_split_cost_in_cents: i64,

    /// Cheapest split, overshoot permitted
    pub optimal_split: RentalPeriodSplit,

    /// Rates the splits were priced with
    pub rates: RatePlan,

    /// One-line explanation suitable for display
    pub plain_text: String,
}

/// Forecast entry for a single day count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Day count this entry covers (1-indexed)
    pub day: u32,

    /// Marginal cost of extending the rental from `day - 1` to `day` (cents)
    ///
    /// Can be zero when an overshooting bucket already covers this day.
    pub cost_in_cents: i64,

    /// Cheapest total cost to cover `day` days (cents)
    pub accumulative_cost_in_cents: i64,

    /// Split achieving `accumulative_cost_in_cents`
    pub rental_period: RentalPeriodSplit,

    /// Dominant denomination of `rental_period`
    pub strategy: Strategy,

    /// Whether `rental_period` overshoots `day`
    pub coverage: Coverage,

    /// Days actually paid for by `rental_period`
    pub covered_days: u32,

    /// `covered_days - day`
    pub overshoot_days: u32,

    /// Day-rate cost minus optimal cost (cents, never negative)
    pub savings_vs_day_rate_in_cents: i64,

    /// Savings as a fraction of the day-rate cost (0 when that cost is 0)
    pub savings_vs_day_rate_fraction: f64,

    /// Exact-split cost minus optimal cost (cents, never negative)
    pub savings_vs_exact_split_in_cents: i64,

    pub details: CostOptionDetails,
}

/// Day-by-day cost forecast for a rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Cheapest total cost for the full duration (cents)
    pub accumulative_cost_in_cents: i64,

    /// One entry per day, ordered 1..=duration
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    /// Number of forecast days
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entry for day `day` (1-indexed)
    pub fn day(&self, day: usize) -> Option<&ForecastDay> {
        day.checked_sub(1).and_then(|idx| self.days.get(idx))
    }

    /// Entry for the full duration
    pub fn last(&self) -> Option<&ForecastDay> {
        self.days.last()
    }
}
