//! Calculators that populate fields on a cash-flow period
//!
//! Each calculator owns a subset of [`CashflowPeriod`] fields. Calculators are
//! deterministic: given the same period contents they always make the same
//! decision, which is what lets the blackboard orchestrator detect a stall.

mod params;
mod construction_margin;
mod component_costs;
mod construction_profit;

pub use params::ConstructionCostParams;
pub use construction_margin::ConstructionMarginCalculator;
pub use component_costs::{TurbineCostCalculator, BalanceOfPlantCostCalculator};
pub use construction_profit::ConstructionProfitCalculator;

use crate::schedule::CashflowPeriod;

/// Trait for period calculators
///
/// Implement this trait to contribute fields to a [`CashflowPeriod`], either
/// directly through the schedule runner or via the blackboard orchestrator.
pub trait StepCalculator {
    /// Short identifier used in logs and error reports
    fn name(&self) -> &str;

    /// Populate this calculator's fields on `period`.
    ///
    /// Returns `false` when fields it depends on are not on the period yet; it
    /// should then leave the period unchanged and expect to be called again.
    /// Returns `true` once its fields have been written.
    fn calculate_step(&self, period: &mut CashflowPeriod, fraction_of_spend: f64) -> bool;

    /// Unset the fields other calculators wait on.
    ///
    /// The blackboard orchestrator calls this on every registered calculator
    /// before polling, so readiness is never decided by values left over from
    /// an earlier run. The default leaves the period alone.
    fn clear_outputs(&self, _period: &mut CashflowPeriod) {}
}
