//! Nutrition aggregation module
//!
//! Groups log entries into calendar days and computes the dashboard reports.
//! Every function here is pure over its input.

pub mod calendar;
pub mod distribution;
pub mod error;
pub mod grouper;
pub mod weekly;

pub use calendar::{CalendarSettings, DayCalendar, DEFAULT_LOCALE, DEFAULT_TIMEZONE};
pub use distribution::{distribute_macros, MacroDistribution};
pub use error::{AggregateError, AggregateResult};
pub use grouper::{flatten, group_by_day};
pub use weekly::{summarize_weekly, WeeklySummary};

/// `numerator / denominator` rounded half up; `denominator` must be non-zero
///
/// Works in `u128` so sums of full-range `u64` totals cannot overflow.
pub(crate) fn round_half_up(numerator: u128, denominator: u128) -> u128 {
    (2 * numerator + denominator) / (2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1640, 2), 820);
        assert_eq!(round_half_up(201, 2), 101);
        assert_eq!(round_half_up(301, 3), 100);
        assert_eq!(round_half_up(5, 10), 1);
        assert_eq!(round_half_up(4, 10), 0);
        assert_eq!(round_half_up(0, 7), 0);
    }

    #[test]
    fn test_round_half_up_full_range() {
        let max = u64::MAX as u128;
        assert_eq!(round_half_up(max, 1), max);
        assert_eq!(round_half_up(2 * max, 2), max);
        assert_eq!(round_half_up(max * 100, max), 100);
    }
}
