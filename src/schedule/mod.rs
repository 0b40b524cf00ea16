//! Cash-flow schedules and the iterator that applies calculators to them

mod cashflows;
pub mod runner;

pub use cashflows::{CashflowPeriod, CashflowSchedule, ScheduleSummary};
pub use runner::{apply, apply_all};
