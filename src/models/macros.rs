//! Shared macro-nutrient structure
//!
//! Used by log entries, day buckets, and the macro distribution report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro-nutrient grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub carbs: u64,   // grams
    pub protein: u64, // grams
    pub fats: u64,    // grams
}

impl Macros {
    pub fn new(carbs: u64, protein: u64, fats: u64) -> Self {
        Self { carbs, protein, fats }
    }

    /// Create a new Macros with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of all three categories, saturating at `u64::MAX`
    pub fn total_grams(&self) -> u64 {
        self.carbs.saturating_add(self.protein).saturating_add(self.fats)
    }

    /// Add another set of macros to this one; each category saturates
    pub fn add(&self, other: &Macros) -> Self {
        Self {
            carbs: self.carbs.saturating_add(other.carbs),
            protein: self.protein.saturating_add(other.protein),
            fats: self.fats.saturating_add(other.fats),
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros::add(&self, &other)
    }
}

impl std::ops::AddAssign for Macros {
    fn add_assign(&mut self, other: Macros) {
        *self = Macros::add(self, &other);
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Macros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g C | {}g P | {}g F", self.carbs, self.protein, self.fats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_macros() {
        let total: Macros = vec![
            Macros::new(28, 15, 12),
            Macros::new(15, 45, 18),
            Macros::zero(),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Macros::new(43, 60, 30));
        assert_eq!(total.total_grams(), 133);
    }

    #[test]
    fn test_add_assign() {
        let mut m = Macros::new(1, 2, 3);
        m += Macros::new(10, 20, 30);
        assert_eq!(m, Macros::new(11, 22, 33));
    }

    #[test]
    fn test_add_saturates() {
        let m = Macros::new(u64::MAX, 5, u64::MAX - 1) + Macros::new(1, 5, 1);
        assert_eq!(m, Macros::new(u64::MAX, 10, u64::MAX));
        assert_eq!(m.total_grams(), u64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Macros::new(28, 15, 12).to_string(), "28g C | 15g P | 12g F");
    }
}
