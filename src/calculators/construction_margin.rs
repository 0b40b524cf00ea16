//! Construction cost, margin and profit for a single cash-flow period

use log::trace;

use crate::inflation::InflationIndex;
use crate::schedule::CashflowPeriod;
use super::component_costs::{BalanceOfPlantCostCalculator, TurbineCostCalculator};
use super::construction_profit::ConstructionProfitCalculator;
use super::params::ConstructionCostParams;
use super::StepCalculator;

/// Sets the construction cost fields of a period.
///
/// Per period:
/// 1. Looks up cumulative inflation for the period start.
/// 2. At financial close only, books special capital and development costs
///    (`development_cost_if_owning` only when not selling).
/// 3. Sets the pre-margin turbine and balance-of-plant costs to base cost x
///    inflation x fraction of spend.
/// 4. Copies them to the margin-inclusive fields. When selling, it first records
///    the (negative) construction profit on those costs and then grosses both
///    costs up by the EPC margin.
///
/// Fields not written by a branch keep whatever value they already had.
#[derive(Debug, Clone)]
pub struct ConstructionMarginCalculator<I> {
    params: ConstructionCostParams,
    inflation: I,
}

impl<I: InflationIndex> ConstructionMarginCalculator<I> {
    pub fn new(params: ConstructionCostParams, inflation: I) -> Self {
        Self { params, inflation }
    }

    /// Update `period` in place
    pub fn calculate(&self, period: &mut CashflowPeriod, fraction_of_spend: f64) {
        let inflation = self.inflation.factor_at(period.period_start);

        self.params.book_financial_close_costs(period);

        let turbine_cost = self.params.turbine_costs * inflation * fraction_of_spend;
        let balance_of_plant_cost =
            self.params.balance_of_plant_costs_at_financial_close * inflation * fraction_of_spend;
        period.turbine_cost_before_margin = Some(turbine_cost);
        period.balance_of_plant_cost_before_margin = Some(balance_of_plant_cost);

        self.params.charge_margin(period, turbine_cost, balance_of_plant_cost);

        trace!(
            "period {}: inflation={} turbine={:?} bop={:?} profit={:?}",
            period.period_start,
            inflation,
            period.turbine_cost_including_margin,
            period.balance_of_plant_cost_including_margin,
            period.construction_profit,
        );
    }

    /// Split into the three calculators used with the blackboard orchestrator.
    ///
    /// Run together they produce the same period as [`Self::calculate`].
    pub fn decompose(
        self,
    ) -> (TurbineCostCalculator<I>, BalanceOfPlantCostCalculator<I>, ConstructionProfitCalculator)
    where
        I: Clone,
    {
        (
            TurbineCostCalculator::new(self.params.turbine_costs, self.inflation.clone()),
            BalanceOfPlantCostCalculator::new(
                self.params.balance_of_plant_costs_at_financial_close,
                self.inflation,
            ),
            ConstructionProfitCalculator::new(self.params),
        )
    }
}

impl<I: InflationIndex> StepCalculator for ConstructionMarginCalculator<I> {
    fn name(&self) -> &str {
        "construction_margin"
    }

    fn calculate_step(&self, period: &mut CashflowPeriod, fraction_of_spend: f64) -> bool {
        self.calculate(period, fraction_of_spend);
        true
    }
}
