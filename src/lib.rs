//! Cash Flow Calculator - construction cost, margin and profit per schedule period
//!
//! This library provides:
//! - Cash-flow period records and schedules for capital projects
//! - The construction margin calculator (financial-close bookings, inflated
//!   construction spend, EPC margin and construction profit in selling mode)
//! - Injected inflation sources (constant and rate-driven)
//! - A schedule runner and a bounded blackboard orchestrator for running
//!   calculators that depend on each other's fields

pub mod error;
pub mod inflation;
pub mod schedule;
pub mod calculators;
pub mod blackboard;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{CalculationError, Result};
pub use inflation::{InflationIndex, ConstantInflation, IndexedInflation, InflationMode};
pub use schedule::{CashflowPeriod, CashflowSchedule, ScheduleSummary};
pub use calculators::{StepCalculator, ConstructionCostParams, ConstructionMarginCalculator};
pub use blackboard::{BlackboardOrchestrator, OrchestratorConfig};
