//! Compound-interest projection engine
//!
//! Maps `SimulationInputs` to the ordered sequence of account states, one
//! entry per elapsed month including month 0. Pure arithmetic: no I/O, no
//! hidden state, identical inputs reproduce the identical schedule.

use crate::model::{PeriodType, RateType, SimulationInputs, SimulationResult};

/// Round a monetary value to 2 decimal places.
fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Number of months the schedule spans, excluding month 0.
pub fn total_months(inputs: &SimulationInputs) -> u32 {
    match inputs.period_type {
        PeriodType::Years => inputs.period * 12,
        PeriodType::Months => inputs.period,
    }
}

/// Effective monthly compounding rate as a decimal fraction.
///
/// Yearly rates convert geometrically: `(1 + r/100)^(1/12) - 1` is the
/// monthly rate that compounds back to the stated annual rate. Dividing the
/// annual rate by 12 would overstate the yield and is deliberately not used.
pub fn monthly_rate(inputs: &SimulationInputs) -> f64 {
    match inputs.rate_type {
        RateType::Monthly => inputs.interest_rate / 100.0,
        RateType::Yearly => (1.0 + inputs.interest_rate / 100.0).powf(1.0 / 12.0) - 1.0,
    }
}

/// Project the amortization schedule for the given inputs.
///
/// Returns `total_months + 1` entries strictly ordered by month, starting
/// with the month-0 state. Interest accrues on the balance before that
/// month's contribution is added, so a deposit earns nothing in the month it
/// lands. Monetary fields are rounded to 2 decimals; the contribution field
/// carries the raw input value.
///
/// The engine does not validate: a zero period degrades to the length-1
/// month-0 schedule. See [`SimulationInputs::validate`] for boundary checks.
pub fn project(inputs: &SimulationInputs) -> Vec<SimulationResult> {
    let months = total_months(inputs);
    let rate = monthly_rate(inputs);

    let mut total = inputs.initial_amount;
    let mut invested = inputs.initial_amount;
    let mut interest_accrued = 0.0;

    let mut schedule = Vec::with_capacity(months as usize + 1);
    schedule.push(SimulationResult {
        month: 0,
        total_invested: round_currency(invested),
        total_interest: 0.0,
        total_amount: round_currency(total),
        monthly_contribution: 0.0,
    });

    for month in 1..=months {
        let interest_this_month = total * rate;
        total += interest_this_month + inputs.monthly_contribution;
        invested += inputs.monthly_contribution;
        interest_accrued += interest_this_month;

        schedule.push(SimulationResult {
            month,
            total_invested: round_currency(invested),
            total_interest: round_currency(interest_accrued),
            total_amount: round_currency(total),
            monthly_contribution: inputs.monthly_contribution,
        });
    }

    schedule
}
