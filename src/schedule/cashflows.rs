//! Cash-flow period records and schedules

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculators::StepCalculator;
use super::runner;

/// A single time-step of a project's cash-flow schedule.
///
/// Only the fields used by the construction cost calculators are modelled here.
/// Every monetary field starts unset and is filled in by whichever calculator
/// owns it; a calculator never writes fields it does not own.
///
/// The `*_before_margin` fields hold inflated spend before any EPC margin. The
/// blackboard cost producers own them and the profit calculator reads them, so
/// the `*_including_margin` fields are only ever written from fresh inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowPeriod {
    // Timing
    pub period_start: NaiveDate,

    // One-time costs booked at financial close
    pub special_capital_costs: Option<f64>,
    pub development_cost_if_owning: Option<f64>,
    pub development_cost: Option<f64>,

    // Construction spend
    pub turbine_cost_before_margin: Option<f64>,
    pub balance_of_plant_cost_before_margin: Option<f64>,
    pub turbine_cost_including_margin: Option<f64>,
    pub balance_of_plant_cost_including_margin: Option<f64>,

    // Selling mode only
    pub construction_profit: Option<f64>,

    // Owned by other calculators
    pub balance_of_plant_costs_at_financial_close: Option<f64>,
}

impl CashflowPeriod {
    /// Create a period with every monetary field unset
    pub fn new(period_start: NaiveDate) -> Self {
        Self {
            period_start,
            special_capital_costs: None,
            development_cost_if_owning: None,
            development_cost: None,
            turbine_cost_before_margin: None,
            balance_of_plant_cost_before_margin: None,
            turbine_cost_including_margin: None,
            balance_of_plant_cost_including_margin: None,
            construction_profit: None,
            balance_of_plant_costs_at_financial_close: None,
        }
    }
}

/// Ordered cash-flow schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashflowSchedule {
    pub periods: Vec<CashflowPeriod>,
}

impl CashflowSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_periods(periods: Vec<CashflowPeriod>) -> Self {
        Self { periods }
    }

    /// Schedule of `count` consecutive monthly periods starting at `start`
    pub fn monthly(start: NaiveDate, count: u32) -> Self {
        Self::stepped(start, count, 1)
    }

    /// Schedule of `count` consecutive quarterly periods starting at `start`
    pub fn quarterly(start: NaiveDate, count: u32) -> Self {
        Self::stepped(start, count, 3)
    }

    fn stepped(start: NaiveDate, count: u32, months_per_step: u32) -> Self {
        // Month arithmetic clamps to the last day of shorter months
        let periods = (0..count)
            .map_while(|i| start.checked_add_months(Months::new(i * months_per_step)))
            .map(CashflowPeriod::new)
            .collect();
        Self { periods }
    }

    /// Add a period at the end of the schedule
    pub fn push(&mut self, period: CashflowPeriod) {
        self.periods.push(period);
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Run one calculator across every period in order
    pub fn apply<C: StepCalculator + ?Sized>(&mut self, calculator: &C, fraction_of_spend: f64) {
        runner::apply(calculator, &mut self.periods, fraction_of_spend);
    }

    /// Run a sequence of calculators, each one across the whole schedule
    pub fn apply_all(&mut self, calculators: &[&dyn StepCalculator], fraction_of_spend: f64) {
        runner::apply_all(calculators, &mut self.periods, fraction_of_spend);
    }

    /// Get summary totals
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            total_periods: self.periods.len(),
            total_special_capital_costs: self.total(|p| p.special_capital_costs),
            total_development_cost: self.total(|p| p.development_cost),
            total_turbine_cost: self.total(|p| p.turbine_cost_including_margin),
            total_balance_of_plant_cost: self.total(|p| p.balance_of_plant_cost_including_margin),
            total_construction_profit: self.total(|p| p.construction_profit),
        }
    }

    fn total<F>(&self, field: F) -> f64
    where
        F: Fn(&CashflowPeriod) -> Option<f64>,
    {
        self.periods.iter().filter_map(field).sum()
    }
}

/// Summary totals for a schedule; unset fields count as zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_periods: usize,
    pub total_special_capital_costs: f64,
    pub total_development_cost: f64,
    pub total_turbine_cost: f64,
    pub total_balance_of_plant_cost: f64,
    pub total_construction_profit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_period_is_unset() {
        let period = CashflowPeriod::new(date(2020, 1, 1));

        assert_eq!(period.period_start, date(2020, 1, 1));
        assert_eq!(period.turbine_cost_including_margin, None);
        assert_eq!(period.turbine_cost_before_margin, None);
        assert_eq!(period.construction_profit, None);
    }

    #[test]
    fn test_monthly_schedule_steps_by_calendar_month() {
        let schedule = CashflowSchedule::monthly(date(2020, 1, 31), 3);

        let starts: Vec<_> = schedule.periods.iter().map(|p| p.period_start).collect();
        assert_eq!(starts, vec![date(2020, 1, 31), date(2020, 2, 29), date(2020, 3, 31)]);
    }

    #[test]
    fn test_quarterly_schedule() {
        let schedule = CashflowSchedule::quarterly(date(2020, 1, 1), 4);

        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.periods[3].period_start, date(2020, 10, 1));
    }

    #[test]
    fn test_summary_treats_unset_as_zero() {
        let mut first = CashflowPeriod::new(date(2020, 1, 1));
        first.turbine_cost_including_margin = Some(3.0);
        first.balance_of_plant_cost_including_margin = Some(2.0);
        first.development_cost = Some(11.0);
        first.construction_profit = Some(-0.5);

        let mut second = CashflowPeriod::new(date(2020, 2, 1));
        second.turbine_cost_including_margin = Some(1.5);

        let schedule = CashflowSchedule::from_periods(vec![first, second]);
        let summary = schedule.summary();

        assert_eq!(summary.total_periods, 2);
        assert_relative_eq!(summary.total_turbine_cost, 4.5);
        assert_relative_eq!(summary.total_balance_of_plant_cost, 2.0);
        assert_relative_eq!(summary.total_development_cost, 11.0);
        assert_relative_eq!(summary.total_construction_profit, -0.5);
        assert_eq!(summary.total_special_capital_costs, 0.0);
    }
}
