//! Applies calculators across an ordered list of periods
//!
//! Periods are independent of each other given a fixed parameter set, so the
//! only ordering guarantee is sequence order. There is no aggregation and no
//! short-circuiting: a calculator reporting `false` for one period does not
//! stop the run.

use log::debug;

use crate::calculators::StepCalculator;
use super::cashflows::CashflowPeriod;

/// Run `calculator` on every period, in order
pub fn apply<C: StepCalculator + ?Sized>(
    calculator: &C,
    periods: &mut [CashflowPeriod],
    fraction_of_spend: f64,
) {
    for period in periods.iter_mut() {
        if !calculator.calculate_step(period, fraction_of_spend) {
            debug!(
                "{} did not complete for period starting {}",
                calculator.name(),
                period.period_start
            );
        }
    }
}

/// Run each calculator across the whole schedule before moving on to the next
pub fn apply_all(
    calculators: &[&dyn StepCalculator],
    periods: &mut [CashflowPeriod],
    fraction_of_spend: f64,
) {
    for calculator in calculators {
        apply(*calculator, periods, fraction_of_spend);
    }
}
