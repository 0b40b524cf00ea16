//! Project parameters shared by the construction cost calculators

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::CashflowPeriod;

/// Base costs and structuring options for one calculator run.
///
/// All costs are quoted in financial-close money; inflation is applied by the
/// calculator per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionCostParams {
    /// Balance-of-plant cost at financial close
    pub balance_of_plant_costs_at_financial_close: f64,

    /// Development cost, booked once at financial close
    pub development_cost: f64,

    /// Turbine cost at financial close
    pub turbine_costs: f64,

    /// Special capital costs, booked once at financial close
    pub special_capital_costs: f64,

    pub date_of_financial_close: NaiveDate,

    /// Whether construction is sold on to an external buyer with an EPC margin
    pub in_selling_mode: bool,

    /// EPC margin as a fraction of base cost (0.1 = 10%)
    pub epc_margin: f64,
}

impl Default for ConstructionCostParams {
    fn default() -> Self {
        Self {
            balance_of_plant_costs_at_financial_close: 0.0,
            development_cost: 0.0,
            turbine_costs: 0.0,
            special_capital_costs: 0.0,
            date_of_financial_close: NaiveDate::default(),
            in_selling_mode: false,
            epc_margin: 0.0,
        }
    }
}

impl ConstructionCostParams {
    pub fn with_balance_of_plant_costs(mut self, cost: f64) -> Self {
        self.balance_of_plant_costs_at_financial_close = cost;
        self
    }

    pub fn with_development_cost(mut self, cost: f64) -> Self {
        self.development_cost = cost;
        self
    }

    pub fn with_turbine_costs(mut self, cost: f64) -> Self {
        self.turbine_costs = cost;
        self
    }

    pub fn with_special_capital_costs(mut self, cost: f64) -> Self {
        self.special_capital_costs = cost;
        self
    }

    pub fn with_financial_close(mut self, date: NaiveDate) -> Self {
        self.date_of_financial_close = date;
        self
    }

    pub fn with_epc_margin(mut self, epc_margin: f64) -> Self {
        self.epc_margin = epc_margin;
        self
    }

    pub fn selling(mut self, in_selling_mode: bool) -> Self {
        self.in_selling_mode = in_selling_mode;
        self
    }

    /// Exact match only; the nearest or following period does not count
    pub fn is_financial_close(&self, date: NaiveDate) -> bool {
        date == self.date_of_financial_close
    }

    /// Book the one-time costs if `period` starts on the financial-close date
    pub(crate) fn book_financial_close_costs(&self, period: &mut CashflowPeriod) {
        if !self.is_financial_close(period.period_start) {
            return;
        }

        period.special_capital_costs = Some(self.special_capital_costs);

        if !self.in_selling_mode {
            period.development_cost_if_owning = Some(self.development_cost);
        }

        period.development_cost = Some(self.development_cost);
    }

    /// Write the period's margin-inclusive costs, taking the EPC margin first when selling.
    ///
    /// Profit is the margin on the pre-uplift costs, so it has to be derived
    /// before the costs are grossed up. The inputs must be pre-margin costs;
    /// feeding back the `*_including_margin` fields compounds the margin.
    pub(crate) fn charge_margin(&self, period: &mut CashflowPeriod, turbine_cost: f64, balance_of_plant_cost: f64) {
        if !self.in_selling_mode {
            period.turbine_cost_including_margin = Some(turbine_cost);
            period.balance_of_plant_cost_including_margin = Some(balance_of_plant_cost);
            return;
        }

        period.construction_profit = Some(-1.0 * (turbine_cost + balance_of_plant_cost) * self.epc_margin);

        let uplift = 1.0 + self.epc_margin;
        period.turbine_cost_including_margin = Some(turbine_cost * uplift);
        period.balance_of_plant_cost_including_margin = Some(balance_of_plant_cost * uplift);
    }
}
