//! Test data builders
//!
//! Builders default every value the test does not care about, so a test only
//! states the inputs that drive the behaviour it checks.

use chrono::NaiveDate;

use crate::calculators::{ConstructionCostParams, ConstructionMarginCalculator, StepCalculator};
use crate::inflation::ConstantInflation;
use crate::schedule::CashflowPeriod;

/// Arbitrary value for inputs that should not affect the result
pub const ANY_DOUBLE: f64 = 5.55555;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub struct PeriodBuilder {
    period: CashflowPeriod,
}

impl PeriodBuilder {
    /// Every monetary field pre-filled with [`ANY_DOUBLE`]
    pub fn new() -> Self {
        let mut period = CashflowPeriod::new(date(2020, 6, 1));
        period.special_capital_costs = Some(ANY_DOUBLE);
        period.development_cost_if_owning = Some(ANY_DOUBLE);
        period.development_cost = Some(ANY_DOUBLE);
        period.turbine_cost_before_margin = Some(ANY_DOUBLE);
        period.balance_of_plant_cost_before_margin = Some(ANY_DOUBLE);
        period.turbine_cost_including_margin = Some(ANY_DOUBLE);
        period.balance_of_plant_cost_including_margin = Some(ANY_DOUBLE);
        period.construction_profit = Some(ANY_DOUBLE);
        period.balance_of_plant_costs_at_financial_close = Some(ANY_DOUBLE);
        Self { period }
    }

    /// Every monetary field unset
    pub fn unset() -> Self {
        Self {
            period: CashflowPeriod::new(date(2020, 6, 1)),
        }
    }

    pub fn starting(mut self, period_start: NaiveDate) -> Self {
        self.period.period_start = period_start;
        self
    }

    pub fn with_turbine_cost_before_margin(mut self, cost: f64) -> Self {
        self.period.turbine_cost_before_margin = Some(cost);
        self
    }

    pub fn with_balance_of_plant_cost_before_margin(mut self, cost: f64) -> Self {
        self.period.balance_of_plant_cost_before_margin = Some(cost);
        self
    }

    pub fn with_turbine_cost_including_margin(mut self, cost: f64) -> Self {
        self.period.turbine_cost_including_margin = Some(cost);
        self
    }

    pub fn with_balance_of_plant_cost_including_margin(mut self, cost: f64) -> Self {
        self.period.balance_of_plant_cost_including_margin = Some(cost);
        self
    }

    pub fn build(self) -> CashflowPeriod {
        self.period
    }
}

impl Default for PeriodBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`ConstructionMarginCalculator`] with constant inflation
pub struct CalculatorBuilder {
    params: ConstructionCostParams,
    inflation: ConstantInflation,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            params: ConstructionCostParams {
                balance_of_plant_costs_at_financial_close: ANY_DOUBLE,
                development_cost: ANY_DOUBLE,
                turbine_costs: ANY_DOUBLE,
                special_capital_costs: ANY_DOUBLE,
                date_of_financial_close: date(2020, 1, 1),
                in_selling_mode: false,
                epc_margin: ANY_DOUBLE,
            },
            inflation: ConstantInflation(ANY_DOUBLE),
        }
    }

    pub fn with_turbine_costs(mut self, cost: f64) -> Self {
        self.params.turbine_costs = cost;
        self
    }

    pub fn with_balance_of_plant_costs(mut self, cost: f64) -> Self {
        self.params.balance_of_plant_costs_at_financial_close = cost;
        self
    }

    pub fn with_development_cost(mut self, cost: f64) -> Self {
        self.params.development_cost = cost;
        self
    }

    pub fn with_financial_close(mut self, date: NaiveDate) -> Self {
        self.params.date_of_financial_close = date;
        self
    }

    pub fn with_inflation(mut self, inflation: f64) -> Self {
        self.inflation = ConstantInflation(inflation);
        self
    }

    pub fn with_epc_margin(mut self, epc_margin: f64) -> Self {
        self.params.epc_margin = epc_margin;
        self
    }

    pub fn in_selling_mode(mut self) -> Self {
        self.params.in_selling_mode = true;
        self
    }

    pub fn build(self) -> ConstructionMarginCalculator<ConstantInflation> {
        ConstructionMarginCalculator::new(self.params, self.inflation)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the fraction of spend into `special_capital_costs`
pub struct SpecialCapitalCostAsFractionOfSpend;

impl StepCalculator for SpecialCapitalCostAsFractionOfSpend {
    fn name(&self) -> &str {
        "special_capital_cost_as_fraction_of_spend"
    }

    fn calculate_step(&self, period: &mut CashflowPeriod, fraction_of_spend: f64) -> bool {
        period.special_capital_costs = Some(fraction_of_spend);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builders_match_new() {
        assert_eq!(PeriodBuilder::default().build(), PeriodBuilder::new().build());

        let mut from_default = PeriodBuilder::unset().build();
        let mut from_new = from_default.clone();
        CalculatorBuilder::default().build().calculate(&mut from_default, 0.3);
        CalculatorBuilder::new().build().calculate(&mut from_new, 0.3);
        assert_eq!(from_default, from_new);
    }
}
