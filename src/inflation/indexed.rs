//! Rate-driven inflation index anchored at financial close

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::InflationIndex;

/// How elapsed time since financial close is counted when compounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InflationMode {
    /// Costs are not inflated
    #[default]
    None,
    /// Compound once per whole year elapsed
    Annual,
    /// Compound per whole month elapsed (rate is still annual)
    Monthly,
    /// Compound continuously by calendar day, actual/365.25
    Daily,
}

/// Inflation at an annual rate, compounded from the financial-close date.
///
/// The factor is exactly 1.0 at financial close in every mode. Dates before
/// close give a factor below 1.0 (deflation back to earlier money). Whole
/// years and months are counted on the calendar and truncate toward zero,
/// so 11 months after close is still year 0 under [`InflationMode::Annual`].
/// A month is reached on the date the close steps to, clamped to month end
/// the same way [`CashflowSchedule::monthly`](crate::schedule::CashflowSchedule::monthly)
/// steps periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedInflation {
    /// Date the base costs are quoted at
    pub date_of_financial_close: NaiveDate,

    /// Annual inflation rate, e.g. 0.025 for 2.5%
    pub inflation_rate: f64,

    pub inflation_mode: InflationMode,
}

impl IndexedInflation {
    pub fn new(date_of_financial_close: NaiveDate, inflation_rate: f64, inflation_mode: InflationMode) -> Self {
        Self {
            date_of_financial_close,
            inflation_rate,
            inflation_mode,
        }
    }

    /// Whole calendar months from financial close to `date`, truncated toward zero
    pub fn months_since_close(&self, date: NaiveDate) -> i32 {
        let close = self.date_of_financial_close;
        let months = (date.year() - close.year()) * 12 + date.month() as i32 - close.month() as i32;
        let step = Months::new(months.unsigned_abs());

        if months > 0 && close.checked_add_months(step).map_or(true, |reached| reached > date) {
            months - 1
        } else if months < 0 && close.checked_sub_months(step).map_or(true, |reached| reached < date) {
            months + 1
        } else {
            months
        }
    }

    fn years_elapsed(&self, date: NaiveDate) -> f64 {
        match self.inflation_mode {
            InflationMode::None => 0.0,
            InflationMode::Annual => (self.months_since_close(date) / 12) as f64,
            InflationMode::Monthly => self.months_since_close(date) as f64 / 12.0,
            InflationMode::Daily => {
                (date - self.date_of_financial_close).num_days() as f64 / 365.25
            }
        }
    }
}

impl InflationIndex for IndexedInflation {
    fn factor_at(&self, date: NaiveDate) -> f64 {
        if self.inflation_mode == InflationMode::None {
            return 1.0;
        }

        (1.0 + self.inflation_rate).powf(self.years_elapsed(date))
    }
}
