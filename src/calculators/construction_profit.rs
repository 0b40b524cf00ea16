//! Blackboard-gated construction profit
//!
//! Reads the pre-margin turbine and balance-of-plant costs other calculators
//! have put on the period. Until both are present it reports `false` and leaves
//! the period untouched, expecting to be called again once they are. Once
//! unblocked it writes the margin-inclusive costs and the profit.

use log::trace;

use crate::schedule::CashflowPeriod;
use super::params::ConstructionCostParams;
use super::StepCalculator;

#[derive(Debug, Clone)]
pub struct ConstructionProfitCalculator {
    params: ConstructionCostParams,
}

impl ConstructionProfitCalculator {
    pub fn new(params: ConstructionCostParams) -> Self {
        Self { params }
    }
}

impl StepCalculator for ConstructionProfitCalculator {
    fn name(&self) -> &str {
        "construction_profit"
    }

    fn calculate_step(&self, period: &mut CashflowPeriod, _fraction_of_spend: f64) -> bool {
        let (Some(turbine_cost), Some(balance_of_plant_cost)) = (
            period.turbine_cost_before_margin,
            period.balance_of_plant_cost_before_margin,
        ) else {
            trace!("period {}: waiting for component costs", period.period_start);
            return false;
        };

        self.params.book_financial_close_costs(period);
        self.params.charge_margin(period, turbine_cost, balance_of_plant_cost);

        true
    }
}
