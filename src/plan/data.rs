//! SIP plan data structures matching the planner input form

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Inputs for one SIP projection
///
/// A plan is a fixed monthly contribution invested for a fixed number of
/// months at an expected annual growth rate, with an optional target
/// amount the investor wants to reach by the end of the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipPlan {
    /// Contribution invested at the start of every month
    pub monthly_contribution: f64,

    /// Investment horizon in months
    pub duration_months: u32,

    /// Expected annual growth rate as a percentage (e.g. 12.0 for 12%)
    pub annual_rate_percent: f64,

    /// Target future value, if the investor has a goal in mind
    #[serde(default)]
    pub goal_amount: Option<f64>,
}

impl SipPlan {
    /// Create a plan without a goal
    pub fn new(monthly_contribution: f64, duration_months: u32, annual_rate_percent: f64) -> Self {
        Self {
            monthly_contribution,
            duration_months,
            annual_rate_percent,
            goal_amount: None,
        }
    }

    /// Create a plan with a target future value
    pub fn with_goal(
        monthly_contribution: f64,
        duration_months: u32,
        annual_rate_percent: f64,
        goal_amount: f64,
    ) -> Self {
        Self {
            monthly_contribution,
            duration_months,
            annual_rate_percent,
            goal_amount: Some(goal_amount),
        }
    }

    /// Create a plan from a horizon expressed in whole years
    pub fn from_years(monthly_contribution: f64, years: u32, annual_rate_percent: f64) -> Self {
        Self::new(monthly_contribution, years * 12, annual_rate_percent)
    }

    /// Horizon in whole years (truncating partial years)
    pub fn duration_years(&self) -> u32 {
        self.duration_months / 12
    }

    /// Effective periodic compounding rate: annual% / 12 / 100
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    /// Check the plan is well-formed, reporting which field failed
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.monthly_contribution > 0.0) || !self.monthly_contribution.is_finite() {
            return Err(PlanError::InvalidContribution(self.monthly_contribution));
        }
        if self.duration_months == 0 {
            return Err(PlanError::InvalidDuration(self.duration_months));
        }
        if let Some(goal) = self.goal_amount {
            if goal < 0.0 || !goal.is_finite() {
                return Err(PlanError::InvalidGoal(goal));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let plan = SipPlan::from_years(5000.0, 10, 12.0);
        assert_eq!(plan.duration_months, 120);
        assert_eq!(plan.duration_years(), 10);
        assert!((plan.monthly_rate() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_validation_names_field() {
        let plan = SipPlan::new(0.0, 120, 12.0);
        assert_eq!(plan.validate(), Err(PlanError::InvalidContribution(0.0)));

        let plan = SipPlan::new(5000.0, 0, 12.0);
        assert_eq!(plan.validate(), Err(PlanError::InvalidDuration(0)));

        let plan = SipPlan::with_goal(5000.0, 120, 12.0, -1.0);
        assert_eq!(plan.validate(), Err(PlanError::InvalidGoal(-1.0)));
    }

    #[test]
    fn test_nan_contribution_rejected() {
        let plan = SipPlan::new(f64::NAN, 120, 12.0);
        assert!(matches!(
            plan.validate(),
            Err(PlanError::InvalidContribution(_))
        ));
    }
}
