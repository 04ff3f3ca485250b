//! SIP Planner CLI
//!
//! Projects a monthly SIP and prints the summary, rate scenarios, year-wise
//! table, and the first months of the statement.

use anyhow::Context;
use clap::Parser;
use std::fs::File;

use sip_planner::plan::SipPlan;
use sip_planner::projection::{goal_progress, project, required_contribution};
use sip_planner::scenario::scenario_set;
use sip_planner::statement::write_statement;

/// Project the growth of a monthly SIP
#[derive(Debug, Parser)]
#[command(name = "sip_planner", version, about)]
struct Args {
    /// Monthly contribution
    #[arg(long, default_value_t = 5000.0)]
    monthly: f64,

    /// Investment duration in years
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=40))]
    years: u32,

    /// Expected annual return in percent
    #[arg(long, default_value_t = 12.0)]
    rate: f64,

    /// Target future value
    #[arg(long)]
    goal: Option<f64>,

    /// Write the full statement to this CSV file
    #[arg(long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let plan = match args.goal {
        Some(goal) => SipPlan::with_goal(args.monthly, args.years * 12, args.rate, goal),
        None => SipPlan::from_years(args.monthly, args.years, args.rate),
    };

    let projection = project(&plan).context("projection failed")?;
    let scenarios = scenario_set(&plan).context("scenario projection failed")?;

    println!("SIP Planner v0.1.0");
    println!("==================\n");

    println!(
        "Plan: {:.0}/month for {} years at {}%",
        plan.monthly_contribution, args.years, plan.annual_rate_percent
    );
    println!();

    println!("Investment Scenarios:");
    println!(
        "  Pessimistic ({}%): {:>14.0}",
        scenarios.pessimistic.annual_rate_percent, scenarios.pessimistic.summary.future_value
    );
    println!(
        "  Expected    ({}%): {:>14.0}",
        scenarios.expected.annual_rate_percent, scenarios.expected.summary.future_value
    );
    println!(
        "  Optimistic  ({}%): {:>14.0}",
        scenarios.optimistic.annual_rate_percent, scenarios.optimistic.summary.future_value
    );
    println!();

    println!("Summary:");
    println!("  Total Invested:  {:>14.0}", projection.summary.total_invested);
    println!("  Returns Earned:  {:>14.0}", projection.summary.total_returns);
    println!("  Maturity Amount: {:>14.0}", projection.summary.future_value);
    println!();

    if let Some(goal) = plan.goal_amount {
        let required = required_contribution(goal, plan.duration_months, plan.annual_rate_percent)
            .context("required-contribution solve failed")?;
        println!("Goal: {:.0} in {} years", goal, args.years);
        println!("  Required monthly contribution: {:.0}", required);
        if let Some(progress) = goal_progress(projection.summary.future_value, goal) {
            println!("  Goal achievement at current plan: {:.1}%", progress * 100.0);
        }
        println!();
    }

    println!("Year-wise Summary:");
    println!("{:>5} {:>14} {:>14}", "Year", "Invested", "Value");
    if let Some(rows) = projection.yearly_summary(args.years) {
        for row in &rows {
            println!("{:>5} {:>14.0} {:>14.0}", row.year, row.invested, row.value);
        }
    }
    println!();

    println!("Monthly Statement (first 12 months):");
    println!("{:>5} {:>14} {:>14}", "Month", "Invested", "Value");
    for period in projection.periods.iter().take(12) {
        println!(
            "{:>5} {:>14.0} {:>14.0}",
            period.period_index, period.cumulative_invested, period.accumulated_value
        );
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("unable to create {}", path))?;
        write_statement(file, &projection, None).context("statement export failed")?;
        println!("\nFull statement written to: {}", path);
    }

    Ok(())
}
