//! Inflation sources
//!
//! Costs are quoted in financial-close money. An [`InflationIndex`] turns a period
//! start date into the multiplier that restates those costs in the money of that
//! period. Calculators receive the index by injection, so tests can substitute a
//! [`ConstantInflation`] for the date-driven [`IndexedInflation`].

mod indexed;

pub use indexed::{IndexedInflation, InflationMode};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cumulative inflation from financial close to a given date
pub trait InflationIndex {
    /// Multiplier (>= 0) to apply to financial-close costs at `date`
    fn factor_at(&self, date: NaiveDate) -> f64;
}

/// Returns the same multiplier for every date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantInflation(pub f64);

impl ConstantInflation {
    /// No inflation at all
    pub fn none() -> Self {
        Self(1.0)
    }
}

impl Default for ConstantInflation {
    fn default() -> Self {
        Self::none()
    }
}

impl InflationIndex for ConstantInflation {
    fn factor_at(&self, _date: NaiveDate) -> f64 {
        self.0
    }
}

impl<T: InflationIndex + ?Sized> InflationIndex for &T {
    fn factor_at(&self, date: NaiveDate) -> f64 {
        (**self).factor_at(date)
    }
}

impl<T: InflationIndex + ?Sized> InflationIndex for Box<T> {
    fn factor_at(&self, date: NaiveDate) -> f64 {
        (**self).factor_at(date)
    }
}
