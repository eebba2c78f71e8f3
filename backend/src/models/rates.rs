//! Rate Plans and Rental Buckets
//!
//! A rate plan prices the three purchasable rental denominations.
//! All monetary values in cents/minor units.

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Purchasable rental denomination
///
/// Variants are declared smallest first so the derived ordering gives
/// `Month > Week > Day`, which is also the tie-break preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// A single day
    Day,
    /// Seven consecutive days
    Week,
    /// A fixed 28-day block (not a calendar month)
    Month,
}

impl Bucket {
    /// Buckets in tie-break preference order (largest first)
    pub const BY_PREFERENCE: [Bucket; 3] = [Bucket::Month, Bucket::Week, Bucket::Day];

    /// Number of days one unit of this bucket covers
    pub fn length_days(self) -> usize {
        match self {
            Bucket::Day => 1,
            Bucket::Week => 7,
            Bucket::Month => 28,
        }
    }

    /// Singular and plural display names
    pub(crate) fn noun(self, count: u32) -> &'static str {
        match (self, count == 1) {
            (Bucket::Day, true) => "day",
            (Bucket::Day, false) => "days",
            (Bucket::Week, true) => "week",
            (Bucket::Week, false) => "weeks",
            (Bucket::Month, true) => "month",
            (Bucket::Month, false) => "months",
        }
    }
}

/// Day / week / month price triple for a rentable item
///
/// # Example
/// ```
/// use rental_pricing_core_rs::{Bucket, RatePlan};
///
/// let rates = RatePlan::new(1_000, 6_000, 20_000); // $10/day, $60/week, $200/month
/// assert_eq!(rates.rate_for(Bucket::Week), 6_000);
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatePlan {
    /// Price of one day unit (cents)
    pub per_day_cents: i64,
    /// Price of one 7-day unit (cents)
    pub per_week_cents: i64,
    /// Price of one 28-day unit (cents)
    pub per_month_cents: i64,
}

impl RatePlan {
    pub fn new(per_day_cents: i64, per_week_cents: i64, per_month_cents: i64) -> Self {
        Self {
            per_day_cents,
            per_week_cents,
            per_month_cents,
        }
    }

    /// Price of one unit of `bucket`
    pub fn rate_for(&self, bucket: Bucket) -> i64 {
        match bucket {
            Bucket::Day => self.per_day_cents,
            Bucket::Week => self.per_week_cents,
            Bucket::Month => self.per_month_cents,
        }
    }

    /// Reject plans with negative prices
    ///
    /// Fields are checked day, week, month; the first negative one is reported.
    pub fn validate(&self) -> Result<(), ForecastError> {
        let fields = [
            ("per_day_cents", self.per_day_cents),
            ("per_week_cents", self.per_week_cents),
            ("per_month_cents", self.per_month_cents),
        ];

        for (field, value) in fields {
            if value < 0 {
                return Err(ForecastError::NegativeRate { field, value });
            }
        }
        Ok(())
    }

    /// Cost of renting `days` days purely at the day rate
    pub fn day_rate_cost(&self, days: usize) -> i64 {
        self.per_day_cents.saturating_mul(days as i64)
    }
}
