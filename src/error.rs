//! Error types for schedule calculations

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// The blackboard queue could not be drained: the pending calculators are
    /// still waiting on fields nobody produces (missing or cyclic dependency)
    #[error("unsatisfied dependencies for period starting {period_start} after {passes} passes: {pending:?}")]
    UnsatisfiedDependencies {
        period_start: NaiveDate,
        pending: Vec<String>,
        passes: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CalculationError>;
