//! Output structures for SIP projections

use serde::{Deserialize, Serialize};

/// Accumulated position at the end of one contribution period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodValue {
    /// Contribution period, 1-indexed
    pub period_index: u32,

    /// Total contributed through this period
    pub cumulative_invested: f64,

    /// Accumulated value at the end of this period
    pub accumulated_value: f64,
}

/// Headline figures for a projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Total contributed over the horizon
    pub total_invested: f64,

    /// Accumulated value at the end of the horizon
    pub future_value: f64,

    /// Growth over contributions: future_value - total_invested
    pub total_returns: f64,
}

/// One row of the year-wise summary table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRow {
    /// Plan year, 1-indexed
    pub year: u32,

    /// Total contributed through this year
    pub invested: f64,

    /// Accumulated value at the end of this year
    pub value: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// Headline figures
    pub summary: ProjectionSummary,

    /// Month-by-month schedule, one entry per contribution period
    pub periods: Vec<PeriodValue>,
}

impl Projection {
    /// Year-end positions for the first `years` years of the schedule
    ///
    /// Each row reports the cumulative contributions and the accumulated
    /// value at the last period of that year. Returns `None` when the
    /// schedule is shorter than `years * 12` periods.
    pub fn yearly_summary(&self, years: u32) -> Option<Vec<YearlyRow>> {
        if self.periods.len() < years as usize * 12 {
            return None;
        }

        let rows = (1..=years)
            .map(|year| {
                let last = &self.periods[year as usize * 12 - 1];
                YearlyRow {
                    year,
                    invested: last.cumulative_invested,
                    value: last.accumulated_value,
                }
            })
            .collect();

        Some(rows)
    }
}
