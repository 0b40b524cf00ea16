//! Blackboard orchestration of period calculators
//!
//! The period is the blackboard. Calculators are polled in turn; one that
//! cannot run yet because its inputs are missing goes to the back of the queue
//! and is retried after the others have had a chance to fill those inputs in.
//! Calculators never call each other, so adding one does not require knowing
//! which of the others it depends on.
//!
//! Before polling, every registered calculator clears its outputs from the
//! period, so a calculator that waits on a field only sees the value written
//! during this run. Re-running over an already calculated schedule therefore
//! gives the same records as the first run, whatever the registration order.
//!
//! # Termination
//!
//! Polling is bounded. A *pass* is one trip through the queue as it stood when
//! the pass began. The run fails with
//! [`CalculationError::UnsatisfiedDependencies`] when
//! - a whole pass completes nothing (a missing or cyclic dependency: calculators
//!   are deterministic, so the next pass would see the same period), or
//! - `max_passes` passes have run and calculators are still pending.

use std::collections::VecDeque;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculators::StepCalculator;
use crate::error::{CalculationError, Result};
use crate::schedule::CashflowPeriod;

/// Default bound on passes through the pending queue for one period
pub const DEFAULT_MAX_PASSES: usize = 64;

/// Configuration for a blackboard orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Maximum passes through the pending queue per period
    pub max_passes: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl OrchestratorConfig {
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(CalculationError::InvalidConfig(
                "max_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// What happened while orchestrating one period
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlackboardRun {
    /// Calculator names in the order they completed
    pub completed: Vec<String>,

    /// Total `calculate_step` calls, including blocked ones
    pub invocations: usize,

    pub passes: usize,
}

/// Runs a set of calculators against each period until all have contributed
pub struct BlackboardOrchestrator {
    calculators: Vec<Box<dyn StepCalculator>>,
    config: OrchestratorConfig,
}

impl BlackboardOrchestrator {
    pub fn new(config: OrchestratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            calculators: Vec::new(),
            config,
        })
    }

    /// Register a calculator (builder form)
    pub fn with_calculator(mut self, calculator: Box<dyn StepCalculator>) -> Self {
        self.register(calculator);
        self
    }

    pub fn register(&mut self, calculator: Box<dyn StepCalculator>) {
        self.calculators.push(calculator);
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run every registered calculator on `period` until each has completed once
    pub fn calculate_step(&self, period: &mut CashflowPeriod, fraction_of_spend: f64) -> Result<BlackboardRun> {
        for calculator in &self.calculators {
            calculator.clear_outputs(period);
        }

        let mut pending: VecDeque<&dyn StepCalculator> =
            self.calculators.iter().map(|c| &**c).collect();
        let mut run = BlackboardRun::default();

        while !pending.is_empty() {
            if run.passes == self.config.max_passes {
                return Err(self.unsatisfied(period, &pending, run.passes));
            }
            run.passes += 1;

            let completed_before = run.completed.len();

            for _ in 0..pending.len() {
                let Some(calculator) = pending.pop_front() else {
                    break;
                };
                run.invocations += 1;

                if calculator.calculate_step(period, fraction_of_spend) {
                    run.completed.push(calculator.name().to_string());
                } else {
                    pending.push_back(calculator);
                }
            }

            if run.completed.len() == completed_before {
                return Err(self.unsatisfied(period, &pending, run.passes));
            }
        }

        debug!(
            "period {}: {} calculators completed in {} passes ({} calls)",
            period.period_start,
            run.completed.len(),
            run.passes,
            run.invocations
        );

        Ok(run)
    }

    /// Orchestrate every period in order, stopping at the first failure
    pub fn calculate_schedule(
        &self,
        periods: &mut [CashflowPeriod],
        fraction_of_spend: f64,
    ) -> Result<Vec<BlackboardRun>> {
        periods
            .iter_mut()
            .map(|period| self.calculate_step(period, fraction_of_spend))
            .collect()
    }

    fn unsatisfied(
        &self,
        period: &CashflowPeriod,
        pending: &VecDeque<&dyn StepCalculator>,
        passes: usize,
    ) -> CalculationError {
        let pending: Vec<String> = pending.iter().map(|c| c.name().to_string()).collect();
        warn!(
            "period {}: calculators still blocked after {} passes: {:?}",
            period.period_start, passes, pending
        );
        CalculationError::UnsatisfiedDependencies {
            period_start: period.period_start,
            pending,
            passes,
        }
    }
}
