//! Macro distribution
//!
//! Percentage share of carbs, protein and fats across all day buckets.

use serde::Serialize;
use tracing::debug;

use super::{round_half_up, AggregateError, AggregateResult};
use crate::models::{DayBucket, Macros};

/// Macro shares in whole percent
///
/// Each category is rounded on its own, so the three shares can add up to
/// 99 or 101.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroDistribution {
    pub carbs_pct: u32,
    pub protein_pct: u32,
    pub fats_pct: u32,
    pub totals: Macros,
}

impl MacroDistribution {
    pub fn percent_sum(&self) -> u32 {
        self.carbs_pct + self.protein_pct + self.fats_pct
    }
}

pub fn distribute_macros(buckets: &[DayBucket]) -> AggregateResult<MacroDistribution> {
    let totals: Macros = buckets.iter().map(|day| day.total_macros).sum();
    let grand_total = totals.carbs as u128 + totals.protein as u128 + totals.fats as u128;
    if grand_total == 0 {
        return Err(AggregateError::DivideByZero);
    }

    // At most 100, so the narrowing is lossless
    let percent = |grams: u64| round_half_up(grams as u128 * 100, grand_total) as u32;

    let distribution = MacroDistribution {
        carbs_pct: percent(totals.carbs),
        protein_pct: percent(totals.protein),
        fats_pct: percent(totals.fats),
        totals,
    };

    debug!(
        grams = %grand_total,
        percent_sum = distribution.percent_sum(),
        "macro distribution computed"
    );
    Ok(distribution)
}
