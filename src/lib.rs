//! SIP Planner - Projection engine for monthly fixed-contribution investment plans
//!
//! This library provides:
//! - Month-by-month and year-by-year accumulation schedules under compound growth
//! - Closed-form future value matching the iterative schedule exactly
//! - Pessimistic/expected/optimistic rate scenarios
//! - Required-contribution solver for a target future value
//! - CSV statement export

pub mod error;
pub mod plan;
pub mod projection;
pub mod scenario;
pub mod statement;

// Re-export commonly used types
pub use error::PlanError;
pub use plan::SipPlan;
pub use projection::{project, required_contribution, Projection, ProjectionSummary};
pub use scenario::{scenario_set, ScenarioSet};
