//! Reduction of a projection schedule to its final summary

use crate::model::{SimulationResult, SummaryData};

/// Reduce a schedule to the final totals and yield percentage.
///
/// Reads the last entry of the sequence; returns `None` for an empty slice
/// ([`project`](crate::project) always emits at least the month-0 entry, so
/// engine output never hits that case). When `total_invested` is zero the
/// yield is mathematically undefined and the resulting non-finite value is
/// passed through as-is rather than coerced; rendering it is the
/// presentation layer's problem.
pub fn summarize(results: &[SimulationResult]) -> Option<SummaryData> {
    let last = results.last()?;
    Some(SummaryData {
        total_amount: last.total_amount,
        total_invested: last.total_invested,
        total_interest: last.total_interest,
        yield_percentage: last.total_interest / last.total_invested * 100.0,
    })
}
