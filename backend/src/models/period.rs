//! Rental period splits
//!
//! A split decomposes a rental into day, week and 28-day units.
//! The split need not sum to the requested duration: an optimal split may
//! overshoot it by buying a larger bucket.

use serde::{Deserialize, Serialize};

use super::rates::{Bucket, RatePlan};

/// Unit counts for each rental bucket
///
/// # Example
/// ```
/// use rental_pricing_core_rs::{RatePlan, RentalPeriodSplit};
///
/// let split = RentalPeriodSplit::exact_for(38); // 1 month + 1 week + 3 days
/// assert_eq!((split.days28, split.days7, split.days1), (1, 1, 3));
/// assert_eq!(split.total_days(), 38);
///
/// let rates = RatePlan::new(1_000, 6_000, 20_000);
/// assert_eq!(split.cost_in_cents(&rates), 29_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalPeriodSplit {
    /// Number of single-day units
    pub days1: u32,
    /// Number of 7-day units
    pub days7: u32,
    /// Number of 28-day units
    pub days28: u32,
}

impl RentalPeriodSplit {
    pub fn new(days1: u32, days7: u32, days28: u32) -> Self {
        Self {
            days1,
            days7,
            days28,
        }
    }

    /// Exact decomposition of `days` using the fewest units
    ///
    /// Greedy by largest bucket. This is optimal for 28/7/1 because each
    /// bucket length divides the next one, and always feasible because the
    /// day unit divides every duration.
    pub fn exact_for(days: usize) -> Self {
        let days28 = days / Bucket::Month.length_days();
        let rest = days % Bucket::Month.length_days();
        let days7 = rest / Bucket::Week.length_days();
        let days1 = rest % Bucket::Week.length_days();

        Self::new(days1 as u32, days7 as u32, days28 as u32)
    }

    /// Number of units of `bucket` in this split
    pub fn count(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::Day => self.days1,
            Bucket::Week => self.days7,
            Bucket::Month => self.days28,
        }
    }

    /// Copy of this split with one more unit of `bucket`
    pub fn with_unit(mut self, bucket: Bucket) -> Self {
        match bucket {
            Bucket::Day => self.days1 += 1,
            Bucket::Week => self.days7 += 1,
            Bucket::Month => self.days28 += 1,
        }
        self
    }

    /// Days covered by the split (may exceed the requested duration)
    pub fn total_days(&self) -> usize {
        Bucket::BY_PREFERENCE
            .iter()
            .map(|&bucket| self.count(bucket) as usize * bucket.length_days())
            .sum()
    }

    /// Total number of purchased units
    pub fn unit_count(&self) -> u32 {
        self.days1 + self.days7 + self.days28
    }

    /// Largest bucket with a non-zero count, if any
    pub fn largest_bucket(&self) -> Option<Bucket> {
        Bucket::BY_PREFERENCE
            .into_iter()
            .find(|&bucket| self.count(bucket) > 0)
    }

    /// Price of this split under `rates` (saturating at `i64::MAX`)
    pub fn cost_in_cents(&self, rates: &RatePlan) -> i64 {
        Bucket::BY_PREFERENCE.iter().fold(0i64, |acc, &bucket| {
            let line = rates
                .rate_for(bucket)
                .saturating_mul(i64::from(self.count(bucket)));
            acc.saturating_add(line)
        })
    }

    /// Human-readable unit list, largest bucket first
    ///
    /// e.g. `"1 month + 3 days"`; an empty split renders as `"nothing"`.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = Bucket::BY_PREFERENCE
            .iter()
            .filter(|&&bucket| self.count(bucket) > 0)
            .map(|&bucket| {
                let n = self.count(bucket);
                format!("{} {}", n, bucket.noun(n))
            })
            .collect();

        if parts.is_empty() {
            "nothing".to_string()
        } else {
            parts.join(" + ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_for_small_durations() {
        assert_eq!(RentalPeriodSplit::exact_for(0), RentalPeriodSplit::default());
        assert_eq!(RentalPeriodSplit::exact_for(6), RentalPeriodSplit::new(6, 0, 0));
        assert_eq!(RentalPeriodSplit::exact_for(7), RentalPeriodSplit::new(0, 1, 0));
        assert_eq!(RentalPeriodSplit::exact_for(27), RentalPeriodSplit::new(6, 3, 0));
        assert_eq!(RentalPeriodSplit::exact_for(28), RentalPeriodSplit::new(0, 0, 1));
    }

    #[test]
    fn test_exact_for_always_sums_to_duration() {
        for days in 0..200 {
            assert_eq!(RentalPeriodSplit::exact_for(days).total_days(), days);
        }
    }

    #[test]
    fn test_with_unit_and_largest_bucket() {
        let split = RentalPeriodSplit::default();
        assert_eq!(split.largest_bucket(), None);

        let split = split.with_unit(Bucket::Day).with_unit(Bucket::Week);
        assert_eq!(split, RentalPeriodSplit::new(1, 1, 0));
        assert_eq!(split.largest_bucket(), Some(Bucket::Week));
        assert_eq!(split.unit_count(), 2);
        assert_eq!(split.total_days(), 8);
    }

    #[test]
    fn test_cost_in_cents() {
        let rates = RatePlan::new(1_000, 6_000, 20_000);
        let split = RentalPeriodSplit::new(3, 1, 0);
        assert_eq!(split.cost_in_cents(&rates), 9_000);
    }

    #[test]
    fn test_cost_saturates_instead_of_overflowing() {
        let rates = RatePlan::new(0, 0, i64::MAX);
        let split = RentalPeriodSplit::new(0, 0, 2);
        assert_eq!(split.cost_in_cents(&rates), i64::MAX);
    }

    #[test]
    fn test_describe() {
        assert_eq!(RentalPeriodSplit::new(3, 1, 0).describe(), "1 week + 3 days");
        assert_eq!(RentalPeriodSplit::new(1, 0, 2).describe(), "2 months + 1 day");
        assert_eq!(RentalPeriodSplit::default().describe(), "nothing");
    }
}
