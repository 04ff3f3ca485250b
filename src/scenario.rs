//! Scenario runner for pessimistic/expected/optimistic forecasts
//!
//! Each scenario is an independent full projection at a shifted rate, not a
//! perturbation of the base series.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::plan::SipPlan;
use crate::projection::{project, ProjectionSummary};

/// Rate spread applied around the expected rate, in percentage points
const RATE_SPREAD: f64 = 2.0;

/// Floor for the pessimistic annual rate, in percent
const PESSIMISTIC_RATE_FLOOR: f64 = 1.0;

/// Summary figures for one rate scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateScenario {
    /// Annual rate this scenario was projected at, in percent
    pub annual_rate_percent: f64,

    /// Headline figures at this rate
    pub summary: ProjectionSummary,
}

/// Projections at rate-2 / rate / rate+2
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub pessimistic: RateScenario,
    pub expected: RateScenario,
    pub optimistic: RateScenario,
}

/// Project a plan at the expected rate and two bracketing rates
///
/// The pessimistic rate is floored at 1% so a low expected rate never
/// produces a negative-growth forecast.
pub fn scenario_set(plan: &SipPlan) -> Result<ScenarioSet, PlanError> {
    let pessimistic_rate = (plan.annual_rate_percent - RATE_SPREAD).max(PESSIMISTIC_RATE_FLOOR);
    let optimistic_rate = plan.annual_rate_percent + RATE_SPREAD;

    let at_rate = |rate: f64| -> Result<RateScenario, PlanError> {
        let scenario_plan = SipPlan::new(plan.monthly_contribution, plan.duration_months, rate);
        Ok(RateScenario {
            annual_rate_percent: rate,
            summary: project(&scenario_plan)?.summary,
        })
    };

    Ok(ScenarioSet {
        pessimistic: at_rate(pessimistic_rate)?,
        expected: at_rate(plan.annual_rate_percent)?,
        optimistic: at_rate(optimistic_rate)?,
    })
}
