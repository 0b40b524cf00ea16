//! Cash Flow Calculator demo
//!
//! Runs the construction margin calculation over a sample wind farm schedule,
//! once directly and once through the blackboard orchestrator, and writes the
//! resulting periods to stdout as CSV. Set `RUST_LOG=debug` for progress logs.

use anyhow::{ensure, Context};
use cash_flow_calculator::{
    BlackboardOrchestrator, CashflowSchedule, ConstructionCostParams, ConstructionMarginCalculator,
    IndexedInflation, InflationMode, OrchestratorConfig,
};
use chrono::NaiveDate;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let financial_close = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid financial close date")?;

    // Sample project, costs in millions at financial close
    let params = ConstructionCostParams::default()
        .with_turbine_costs(120.0)
        .with_balance_of_plant_costs(80.0)
        .with_development_cost(11.0)
        .with_special_capital_costs(13.0)
        .with_financial_close(financial_close)
        .with_epc_margin(0.08)
        .selling(true);
    info!("Parameters: {}", serde_json::to_string(&params)?);

    let inflation = IndexedInflation::new(financial_close, 0.025, InflationMode::Monthly);
    let calculator = ConstructionMarginCalculator::new(params, inflation);

    // Even spend over an 18 month build
    let months = 18;
    let fraction_of_spend = 1.0 / months as f64;

    let mut direct = CashflowSchedule::monthly(financial_close, months);
    direct.apply(&calculator, fraction_of_spend);

    let (turbine, balance_of_plant, profit) = calculator.decompose();
    let blackboard = BlackboardOrchestrator::new(OrchestratorConfig::default())?
        .with_calculator(Box::new(profit))
        .with_calculator(Box::new(turbine))
        .with_calculator(Box::new(balance_of_plant));

    let mut orchestrated = CashflowSchedule::monthly(financial_close, months);
    let runs = blackboard.calculate_schedule(&mut orchestrated.periods, fraction_of_spend)?;
    info!(
        "Blackboard: {} periods, {} calculator calls",
        runs.len(),
        runs.iter().map(|r| r.invocations).sum::<usize>()
    );

    ensure!(
        direct.periods == orchestrated.periods,
        "blackboard and direct schedules disagree"
    );

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for period in &direct.periods {
        writer.serialize(period)?;
    }
    writer.flush()?;

    let summary = direct.summary();
    info!("Summary:");
    info!("  Periods: {}", summary.total_periods);
    info!("  Turbine cost: {:.4}", summary.total_turbine_cost);
    info!("  Balance of plant cost: {:.4}", summary.total_balance_of_plant_cost);
    info!("  Development cost: {:.4}", summary.total_development_cost);
    info!("  Special capital costs: {:.4}", summary.total_special_capital_costs);
    info!("  Construction profit: {:.4}", summary.total_construction_profit);

    Ok(())
}
