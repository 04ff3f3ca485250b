//! AWS Lambda handler for SIP projections
//!
//! Accepts plan inputs as JSON and returns the summary, rate scenarios,
//! year-wise table, first months of the statement, and (when a goal is
//! supplied) the required monthly contribution and goal progress.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use sip_planner::plan::SipPlan;
use sip_planner::projection::{
    goal_progress, project, required_contribution, PeriodValue, ProjectionSummary, YearlyRow,
};
use sip_planner::scenario::{scenario_set, ScenarioSet};

/// Number of statement rows returned in the response
const STATEMENT_MONTHS: usize = 12;

/// Input plan for the projection
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Monthly contribution (default: 5000)
    #[serde(default = "default_monthly")]
    pub monthly_contribution: f64,

    /// Investment duration in years (default: 10)
    #[serde(default = "default_years")]
    pub years: u32,

    /// Expected annual return in percent (default: 12)
    #[serde(default = "default_rate")]
    pub annual_rate_percent: f64,

    /// Target future value; 0 means no goal
    #[serde(default)]
    pub goal_amount: f64,
}

fn default_monthly() -> f64 {
    5000.0
}
fn default_years() -> u32 {
    10
}
fn default_rate() -> f64 {
    12.0
}

/// Horizon bounds accepted on this surface, matching the planner form
const MIN_YEARS: u32 = 1;
const MAX_YEARS: u32 = 40;

/// Build a plan from the request, enforcing the form's year bounds
fn plan_from_request(request: &PlanRequest) -> Result<SipPlan, String> {
    if !(MIN_YEARS..=MAX_YEARS).contains(&request.years) {
        return Err(format!(
            "years must be between {} and {}, got {}",
            MIN_YEARS, MAX_YEARS, request.years
        ));
    }

    let plan = if request.goal_amount > 0.0 {
        SipPlan::with_goal(
            request.monthly_contribution,
            request.years * 12,
            request.annual_rate_percent,
            request.goal_amount,
        )
    } else {
        SipPlan::from_years(
            request.monthly_contribution,
            request.years,
            request.annual_rate_percent,
        )
    };

    Ok(plan)
}

/// Goal figures, present only when a goal was supplied
#[derive(Debug, Serialize)]
pub struct GoalOutput {
    pub goal_amount: f64,
    pub required_monthly_contribution: f64,
    pub progress: f64,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub summary: ProjectionSummary,
    pub scenarios: ScenarioSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalOutput>,
    pub yearly_summary: Vec<YearlyRow>,
    pub statement: Vec<PeriodValue>,
    pub duration_months: u32,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &PlanResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: PlanRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let plan = match plan_from_request(&request) {
        Ok(p) => p,
        Err(message) => {
            return Ok(error_response(400, &message));
        }
    };

    let projection = match project(&plan) {
        Ok(p) => p,
        Err(e) => {
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let scenarios = match scenario_set(&plan) {
        Ok(s) => s,
        Err(e) => {
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let goal = match plan.goal_amount {
        Some(goal_amount) => {
            let required = match required_contribution(
                goal_amount,
                plan.duration_months,
                plan.annual_rate_percent,
            ) {
                Ok(r) => r,
                Err(e) => {
                    return Ok(error_response(400, &e.to_string()));
                }
            };
            let progress =
                goal_progress(projection.summary.future_value, goal_amount).unwrap_or(0.0);
            Some(GoalOutput {
                goal_amount,
                required_monthly_contribution: required,
                progress,
            })
        }
        None => None,
    };

    let yearly_summary = projection.yearly_summary(request.years).unwrap_or_default();
    let statement: Vec<PeriodValue> = projection
        .periods
        .iter()
        .take(STATEMENT_MONTHS)
        .cloned()
        .collect();

    let execution_time_ms = start.elapsed().as_millis() as u64;

    let response = PlanResponse {
        summary: projection.summary,
        scenarios,
        goal,
        yearly_summary,
        statement,
        duration_months: plan.duration_months,
        execution_time_ms,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(years: u32) -> PlanRequest {
        PlanRequest {
            monthly_contribution: 5000.0,
            years,
            annual_rate_percent: 12.0,
            goal_amount: 0.0,
        }
    }

    #[test]
    fn test_plan_from_request_in_bounds() {
        let plan = plan_from_request(&request(10)).unwrap();
        assert_eq!(plan.duration_months, 120);
        assert_eq!(plan.goal_amount, None);
    }

    #[test]
    fn test_plan_from_request_rejects_out_of_bounds_years() {
        assert!(plan_from_request(&request(0)).is_err());
        assert!(plan_from_request(&request(41)).is_err());

        // Large enough that years * 12 would wrap u32 if it were computed
        let err = plan_from_request(&request(400_000_000)).unwrap_err();
        assert!(err.contains("between 1 and 40"), "unexpected message: {}", err);
    }

    #[test]
    fn test_plan_from_request_maps_zero_goal_to_none() {
        let mut req = request(10);
        req.goal_amount = 2_000_000.0;
        let plan = plan_from_request(&req).unwrap();
        assert_eq!(plan.goal_amount, Some(2_000_000.0));

        req.goal_amount = 0.0;
        assert_eq!(plan_from_request(&req).unwrap().goal_amount, None);
    }
}
