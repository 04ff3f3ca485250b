//! CSV export of the month-by-month SIP statement

use std::io;

use serde::Serialize;

use crate::projection::Projection;

/// One exported statement row
#[derive(Debug, Serialize)]
struct StatementRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "InvestedTillNow")]
    invested_till_now: f64,
    #[serde(rename = "Value")]
    value: f64,
}

/// Write the per-period statement as CSV
///
/// `limit` caps the number of rows (the planner shows the first 12 months);
/// `None` exports the full schedule.
pub fn write_statement<W: io::Write>(
    writer: W,
    projection: &Projection,
    limit: Option<usize>,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let count = limit.unwrap_or(projection.periods.len());

    for period in projection.periods.iter().take(count) {
        csv_writer.serialize(StatementRow {
            month: period.period_index,
            invested_till_now: period.cumulative_invested,
            value: period.accumulated_value,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
