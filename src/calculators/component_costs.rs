//! Per-component construction spend, for use with the blackboard orchestrator.
//!
//! These write the pre-margin turbine and balance-of-plant costs that
//! [`ConstructionProfitCalculator`](super::ConstructionProfitCalculator) waits for.
//! The margin-inclusive fields belong to the profit calculator.

use crate::inflation::InflationIndex;
use crate::schedule::CashflowPeriod;
use super::StepCalculator;

/// Sets `turbine_cost_before_margin` to turbine cost x inflation x fraction of spend
#[derive(Debug, Clone)]
pub struct TurbineCostCalculator<I> {
    turbine_costs: f64,
    inflation: I,
}

impl<I: InflationIndex> TurbineCostCalculator<I> {
    pub fn new(turbine_costs: f64, inflation: I) -> Self {
        Self { turbine_costs, inflation }
    }
}

impl<I: InflationIndex> StepCalculator for TurbineCostCalculator<I> {
    fn name(&self) -> &str {
        "turbine_cost"
    }

    fn calculate_step(&self, period: &mut CashflowPeriod, fraction_of_spend: f64) -> bool {
        let inflation = self.inflation.factor_at(period.period_start);
        period.turbine_cost_before_margin = Some(self.turbine_costs * inflation * fraction_of_spend);
        true
    }

    fn clear_outputs(&self, period: &mut CashflowPeriod) {
        period.turbine_cost_before_margin = None;
    }
}

/// Sets `balance_of_plant_cost_before_margin` to balance-of-plant cost x
/// inflation x fraction of spend
#[derive(Debug, Clone)]
pub struct BalanceOfPlantCostCalculator<I> {
    balance_of_plant_costs_at_financial_close: f64,
    inflation: I,
}

impl<I: InflationIndex> BalanceOfPlantCostCalculator<I> {
    pub fn new(balance_of_plant_costs_at_financial_close: f64, inflation: I) -> Self {
        Self {
            balance_of_plant_costs_at_financial_close,
            inflation,
        }
    }
}

impl<I: InflationIndex> StepCalculator for BalanceOfPlantCostCalculator<I> {
    fn name(&self) -> &str {
        "balance_of_plant_cost"
    }

    fn calculate_step(&self, period: &mut CashflowPeriod, fraction_of_spend: f64) -> bool {
        let inflation = self.inflation.factor_at(period.period_start);
        period.balance_of_plant_cost_before_margin =
            Some(self.balance_of_plant_costs_at_financial_close * inflation * fraction_of_spend);
        true
    }

    fn clear_outputs(&self, period: &mut CashflowPeriod) {
        period.balance_of_plant_cost_before_margin = None;
    }
}
