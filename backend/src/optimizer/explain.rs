//! Plain-text summaries for forecast entries

use crate::models::RentalPeriodSplit;

/// Format cents as a dollar amount, e.g. `9000` -> `"$90.00"`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// Inputs for one summary line
pub(crate) struct Summary<'a> {
    pub day: usize,
    pub optimal: &'a RentalPeriodSplit,
    pub optimal_cost: i64,
    pub exact: &'a RentalPeriodSplit,
    pub exact_cost: i64,
    pub day_rate_cost: i64,
}

/// Render a summary
///
/// ```text
/// 10 days: 1 week + 3 days = $90.00; exact split 1 week + 3 days = $90.00; daily rate $100.00; saves $10.00 vs daily rate
/// 20 days: 1 month = $200.00, covering 28 days; exact split 2 weeks + 6 days = $180.00; daily rate $200.00
/// ```
pub(crate) fn plain_text(summary: &Summary<'_>) -> String {
    let noun = if summary.day == 1 { "day" } else { "days" };
    let covered = summary.optimal.total_days();

    let mut text = format!(
        "{} {}: {} = {}",
        summary.day,
        noun,
        summary.optimal.describe(),
        format_cents(summary.optimal_cost)
    );

    if covered > summary.day {
        text.push_str(&format!(", covering {} days", covered));
    }

    text.push_str(&format!(
        "; exact split {} = {}; daily rate {}",
        summary.exact.describe(),
        format_cents(summary.exact_cost),
        format_cents(summary.day_rate_cost)
    ));

    let savings = summary.day_rate_cost.saturating_sub(summary.optimal_cost);
    if savings > 0 {
        text.push_str(&format!("; saves {} vs daily rate", format_cents(savings)));
    }

    text
}
