//! Core SIP projection engine
//!
//! Closed-form and iterative future-value computations for a fixed monthly
//! contribution compounding at a fixed rate, plus the analytic inverse that
//! solves for the contribution needed to reach a target amount.

use log::debug;

use super::schedule::{PeriodValue, Projection, ProjectionSummary};
use crate::error::PlanError;
use crate::plan::SipPlan;

/// Monthly rates below this magnitude take the linear (zero-growth) branch.
///
/// The closed form divides by the rate, so near-zero rates would otherwise
/// divide cancellation noise by cancellation noise.
const ZERO_RATE_EPS: f64 = 1e-12;

/// Annuity-due accumulation factor: ((1+r)^n - 1) * (1+r) / r
///
/// Each contribution is invested at the start of its month, so it earns
/// growth for that full month. At r = 0 the limit is simply n.
fn annuity_due_factor(monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate.abs() < ZERO_RATE_EPS {
        debug!(
            "zero monthly rate: using linear accumulation over {} months",
            months
        );
        return months as f64;
    }
    let growth = (1.0 + monthly_rate).powf(f64::from(months));
    (growth - 1.0) * (1.0 + monthly_rate) / monthly_rate
}

/// Reject non-finite results from extreme rate/duration combinations
fn check_finite(value: f64) -> Result<f64, PlanError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlanError::NonFiniteResult { value })
    }
}

/// Future value of a monthly SIP, closed form
///
/// `future_value = contribution * ((1+r)^n - 1) * (1+r) / r` with
/// `r = annual_rate_percent / 12 / 100`, falling back to
/// `contribution * n` when the rate is zero.
pub fn future_value(
    monthly_contribution: f64,
    duration_months: u32,
    annual_rate_percent: f64,
) -> Result<f64, PlanError> {
    if !(monthly_contribution > 0.0) || !monthly_contribution.is_finite() {
        return Err(PlanError::InvalidContribution(monthly_contribution));
    }
    if duration_months == 0 {
        return Err(PlanError::InvalidDuration(duration_months));
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    check_finite(monthly_contribution * annuity_due_factor(monthly_rate, duration_months))
}

/// Run a full projection for a plan
///
/// Produces the month-by-month schedule from the recurrence
/// `value[i] = value[i-1] * (1+r) + contribution` together with the
/// closed-form summary. The closed form is the exact solution of the
/// recurrence, so the terminal schedule value and `future_value` agree
/// to floating-point tolerance.
pub fn project(plan: &SipPlan) -> Result<Projection, PlanError> {
    plan.validate()?;

    let contribution = plan.monthly_contribution;
    let months = plan.duration_months;
    let monthly_rate = plan.monthly_rate();
    let growth = 1.0 + monthly_rate;

    let mut periods = Vec::with_capacity(months as usize);
    let mut value = 0.0;
    for month in 1..=months {
        value = value * growth + contribution;
        periods.push(PeriodValue {
            period_index: month,
            cumulative_invested: contribution * month as f64,
            accumulated_value: value,
        });
    }
    check_finite(value)?;

    let total_invested = contribution * months as f64;
    let fv = check_finite(contribution * annuity_due_factor(monthly_rate, months))?;

    Ok(Projection {
        summary: ProjectionSummary {
            total_invested,
            future_value: fv,
            total_returns: fv - total_invested,
        },
        periods,
    })
}

/// Monthly contribution needed to reach `goal_amount` over the horizon
///
/// Analytic inverse of the annuity-due future value:
/// `required = goal * r / (((1+r)^n - 1) * (1+r))`, or `goal / n` at
/// zero rate.
pub fn required_contribution(
    goal_amount: f64,
    duration_months: u32,
    annual_rate_percent: f64,
) -> Result<f64, PlanError> {
    if !(goal_amount > 0.0) || !goal_amount.is_finite() {
        return Err(PlanError::InvalidGoal(goal_amount));
    }
    if duration_months == 0 {
        return Err(PlanError::InvalidDuration(duration_months));
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let factor = annuity_due_factor(monthly_rate, duration_months);
    check_finite(goal_amount / factor)
}

/// Fraction of the goal reached by the projected future value, capped at 1
///
/// Not defined when there is no goal.
pub fn goal_progress(future_value: f64, goal_amount: f64) -> Option<f64> {
    if goal_amount > 0.0 {
        Some((future_value / goal_amount).min(1.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_terminal_value_matches_closed_form() {
        for &(contribution, years, rate) in &[
            (500.0, 1, 1.0),
            (5000.0, 10, 12.0),
            (2500.0, 25, 8.0),
            (10_000.0, 40, 20.0),
        ] {
            let plan = SipPlan::from_years(contribution, years, rate);
            let projection = project(&plan).unwrap();

            let terminal = projection.periods.last().unwrap().accumulated_value;
            assert_relative_eq!(
                terminal,
                projection.summary.future_value,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn test_known_scenario() {
        // 5000/month, 10 years at 12%: monthly rate 1%, 120 months
        let plan = SipPlan::from_years(5000.0, 10, 12.0);
        let projection = project(&plan).unwrap();

        assert_eq!(projection.summary.total_invested, 600_000.0);
        assert_relative_eq!(
            projection.summary.future_value,
            1_161_695.0,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            projection.summary.total_returns,
            projection.summary.future_value - 600_000.0,
            max_relative = 1e-12
        );
        assert_eq!(projection.periods.len(), 120);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let plan = SipPlan::new(1000.0, 12, 0.0);
        let projection = project(&plan).unwrap();

        assert_eq!(projection.summary.future_value, 12_000.0);
        assert_eq!(projection.summary.total_returns, 0.0);
        assert_eq!(projection.periods[5].accumulated_value, 6000.0);
    }

    #[test]
    fn test_future_value_monotonic_in_rate() {
        let mut prev = future_value(5000.0, 120, 1.0).unwrap();
        for rate in [2.0, 5.0, 8.0, 12.0, 16.0, 20.0] {
            let fv = future_value(5000.0, 120, rate).unwrap();
            assert!(fv > prev, "fv should increase with rate ({} -> {})", prev, fv);
            prev = fv;
        }
    }

    #[test]
    fn test_required_contribution_round_trip() {
        let goal = 2_000_000.0;
        let required = required_contribution(goal, 120, 12.0).unwrap();
        assert_relative_eq!(required, 8608.0, max_relative = 1e-4);

        let plan = SipPlan::new(required, 120, 12.0);
        let projection = project(&plan).unwrap();
        assert_relative_eq!(projection.summary.future_value, goal, max_relative = 1e-9);
    }

    #[test]
    fn test_required_contribution_zero_rate() {
        let required = required_contribution(24_000.0, 24, 0.0).unwrap();
        assert_eq!(required, 1000.0);
    }

    #[test]
    fn test_goal_progress() {
        assert_eq!(goal_progress(500_000.0, 1_000_000.0), Some(0.5));
        assert_eq!(goal_progress(1_500_000.0, 1_000_000.0), Some(1.0));
        assert_eq!(goal_progress(500_000.0, 0.0), None);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert_eq!(
            future_value(-100.0, 120, 12.0),
            Err(PlanError::InvalidContribution(-100.0))
        );
        assert_eq!(
            future_value(5000.0, 0, 12.0),
            Err(PlanError::InvalidDuration(0))
        );
        assert_eq!(
            required_contribution(0.0, 120, 12.0),
            Err(PlanError::InvalidGoal(0.0))
        );
    }

    #[test]
    fn test_overflow_reported_not_returned() {
        // Absurd rate drives (1+r)^n past f64 range
        let result = future_value(5000.0, 480, 1e9);
        assert!(matches!(result, Err(PlanError::NonFiniteResult { .. })));
    }

    #[test]
    fn test_huge_duration_overflows_to_error() {
        // Durations past i32::MAX must not wrap into a negative exponent
        let result = future_value(5000.0, 3_000_000_000, 12.0);
        assert!(matches!(result, Err(PlanError::NonFiniteResult { .. })));

        let required = required_contribution(1_000_000.0, 3_000_000_000, 12.0);
        match required {
            Ok(value) => assert!(value >= 0.0, "negative contribution: {}", value),
            Err(PlanError::NonFiniteResult { .. }) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
}
