//! Minimum-cost cover table
//!
//! `cost[d]` is the cheapest way to buy at least `d` days from the three
//! buckets:
//!
//! ```text
//! cost[0] = 0
//! cost[d] = min( cost[d - 1]          + per_day,
//!                cost[max(d - 7, 0)]  + per_week,
//!                cost[max(d - 28, 0)] + per_month )
//! ```
//!
//! Clamping the predecessor to day 0 is what models overshoot: a bucket
//! longer than the remaining need is bought "from day 0".

use crate::models::{Bucket, RatePlan, RentalPeriodSplit};

/// Per-day optimal costs and the splits that achieve them
#[derive(Debug, Clone)]
pub struct CostTable {
    costs: Vec<i64>,
    choices: Vec<Option<Bucket>>,
    splits: Vec<RentalPeriodSplit>,
}

impl CostTable {
    /// Fill the table for days `0..=duration`
    ///
    /// Ties go to the larger bucket (month, then week, then day). Sums
    /// saturate at `i64::MAX`.
    pub fn build(rates: &RatePlan, duration: usize) -> Self {
        let mut costs = Vec::with_capacity(duration + 1);
        let mut choices = Vec::with_capacity(duration + 1);
        let mut splits = Vec::with_capacity(duration + 1);

        costs.push(0i64);
        choices.push(None);
        splits.push(RentalPeriodSplit::default());

        for day in 1..=duration {
            let candidate = |bucket: Bucket| {
                let prev = day.saturating_sub(bucket.length_days());
                (costs[prev].saturating_add(rates.rate_for(bucket)), bucket, prev)
            };

            // Only a strictly cheaper candidate displaces the current best,
            // so checking largest first implements the tie-break.
            let mut best = candidate(Bucket::Month);
            for bucket in [Bucket::Week, Bucket::Day] {
                let next = candidate(bucket);
                if next.0 < best.0 {
                    best = next;
                }
            }

            let (cost, bucket, prev) = best;
            let split = splits[prev].with_unit(bucket);
            costs.push(cost);
            choices.push(Some(bucket));
            splits.push(split);
        }

        Self {
            costs,
            choices,
            splits,
        }
    }

    /// Largest day the table covers
    pub fn duration(&self) -> usize {
        self.costs.len() - 1
    }

    /// Cheapest cost to cover `day` days
    ///
    /// # Panics
    /// Panics if `day > self.duration()`
    pub fn cost(&self, day: usize) -> i64 {
        self.costs[day]
    }

    /// Bucket bought last on the optimal path to `day` (`None` for day 0)
    pub fn choice(&self, day: usize) -> Option<Bucket> {
        self.choices[day]
    }

    /// Optimal split for `day`
    pub fn split(&self, day: usize) -> RentalPeriodSplit {
        self.splits[day]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_rates() -> RatePlan {
        RatePlan::new(1_000, 6_000, 20_000)
    }

    #[test]
    fn test_day_zero_is_free() {
        let table = CostTable::build(&reference_rates(), 0);
        assert_eq!(table.duration(), 0);
        assert_eq!(table.cost(0), 0);
        assert_eq!(table.choice(0), None);
        assert_eq!(table.split(0), RentalPeriodSplit::default());
    }

    #[test]
    fn test_ten_days_is_one_week_plus_three_days() {
        let table = CostTable::build(&reference_rates(), 10);
        assert_eq!(table.cost(10), 9_000);
        assert_eq!(table.split(10), RentalPeriodSplit::new(3, 1, 0));
    }

    #[test]
    fn test_tie_prefers_week_over_days() {
        // 6 days: 6 x $10 = $60 ties with one overshooting week at $60
        let table = CostTable::build(&reference_rates(), 6);
        assert_eq!(table.cost(6), 6_000);
        assert_eq!(table.choice(6), Some(Bucket::Week));
        assert_eq!(table.split(6), RentalPeriodSplit::new(0, 1, 0));
    }

    #[test]
    fn test_tie_prefers_month_over_week() {
        // 4 weeks cost the same as a month
        let rates = RatePlan::new(1_000, 5_000, 20_000);
        let table = CostTable::build(&rates, 28);
        assert_eq!(table.cost(28), 20_000);
        assert_eq!(table.split(28), RentalPeriodSplit::new(0, 0, 1));
    }

    #[test]
    fn test_month_overshoot_kicks_in_before_day_28() {
        let table = CostTable::build(&reference_rates(), 28);
        // 22 days = 3 weeks + 1 day = $190, still under a month
        assert_eq!(table.cost(22), 19_000);
        // 23 days: 3 weeks + 2 days ties a month at $200; month wins the tie
        assert_eq!(table.cost(23), 20_000);
        assert_eq!(table.split(23), RentalPeriodSplit::new(0, 0, 1));
        assert_eq!(table.cost(27), 20_000);
        assert_eq!(table.cost(28), 20_000);
    }

    #[test]
    fn test_all_zero_rates() {
        let table = CostTable::build(&RatePlan::new(0, 0, 0), 40);
        for day in 0..=40 {
            assert_eq!(table.cost(day), 0);
        }
        // Every day ties at zero, so the month bucket is always chosen
        assert_eq!(table.split(28), RentalPeriodSplit::new(0, 0, 1));
        assert_eq!(table.split(40), RentalPeriodSplit::new(0, 0, 2));
    }

    #[test]
    fn test_saturating_costs() {
        let rates = RatePlan::new(i64::MAX, i64::MAX, i64::MAX);
        let table = CostTable::build(&rates, 60);
        assert_eq!(table.cost(1), i64::MAX);
        assert_eq!(table.cost(60), i64::MAX);
    }
}
