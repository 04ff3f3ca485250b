//! Projection engine for SIP plans

mod engine;
mod schedule;

pub use engine::{future_value, goal_progress, project, required_contribution};
pub use schedule::{PeriodValue, Projection, ProjectionSummary, YearlyRow};
