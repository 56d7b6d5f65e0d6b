//! Tests for the projection engine
//!
//! These tests verify:
//! - Schedule length and ordering for both period units
//! - The month-0 starting entry
//! - Interest accrual order relative to contributions
//! - Geometric yearly-to-monthly rate conversion
//! - Determinism of repeated runs

use crate::model::{PeriodType, RateType, SimulationInputs};
use crate::projection::{monthly_rate, project, total_months};

fn inputs(
    initial_amount: f64,
    monthly_contribution: f64,
    interest_rate: f64,
    rate_type: RateType,
    period: u32,
    period_type: PeriodType,
) -> SimulationInputs {
    SimulationInputs {
        initial_amount,
        monthly_contribution,
        interest_rate,
        rate_type,
        period,
        period_type,
    }
}

#[test]
fn test_schedule_length_in_months() {
    let params = inputs(1_000.0, 0.0, 1.0, RateType::Monthly, 18, PeriodType::Months);

    assert_eq!(total_months(&params), 18);
    assert_eq!(
        project(&params).len(),
        19,
        "18 months plus the month-0 entry"
    );
}

#[test]
fn test_schedule_length_in_years() {
    let params = inputs(1_000.0, 0.0, 1.0, RateType::Monthly, 5, PeriodType::Years);

    assert_eq!(total_months(&params), 60);
    assert_eq!(project(&params).len(), 61, "5 years plus the month-0 entry");
}

#[test]
fn test_months_are_contiguous_from_zero() {
    let params = inputs(500.0, 25.0, 0.8, RateType::Monthly, 2, PeriodType::Years);
    let schedule = project(&params);

    for (idx, entry) in schedule.iter().enumerate() {
        assert_eq!(
            entry.month, idx as u32,
            "entry {idx} should carry month {idx}"
        );
    }
}

#[test]
fn test_month_zero_entry() {
    let params = inputs(2_500.0, 150.0, 0.5, RateType::Monthly, 12, PeriodType::Months);
    let first = project(&params)[0];

    assert_eq!(first.month, 0);
    assert_eq!(first.total_invested, 2_500.0);
    assert_eq!(first.total_interest, 0.0);
    assert_eq!(first.total_amount, 2_500.0);
    assert_eq!(
        first.monthly_contribution, 0.0,
        "no contribution lands at month 0"
    );
}

/// Scenario from the original calculator: one month at 1% with a R$100
/// contribution on top of R$1000.
#[test]
fn test_single_month_accrual() {
    let params = inputs(1_000.0, 100.0, 1.0, RateType::Monthly, 1, PeriodType::Months);
    let schedule = project(&params);

    assert_eq!(schedule.len(), 2);

    let month_one = schedule[1];
    assert_eq!(month_one.total_interest, 10.00);
    assert_eq!(month_one.total_invested, 1_100.00);
    assert_eq!(month_one.total_amount, 1_110.00);
    assert_eq!(month_one.monthly_contribution, 100.0);
}

/// A contribution must not earn interest in the month it is deposited.
#[test]
fn test_contribution_earns_nothing_on_deposit() {
    let params = inputs(0.0, 100.0, 1.0, RateType::Monthly, 2, PeriodType::Months);
    let schedule = project(&params);

    assert_eq!(
        schedule[1].total_interest, 0.0,
        "month 1 interest accrues on the empty starting balance"
    );
    assert_eq!(schedule[1].total_amount, 100.0);

    assert_eq!(
        schedule[2].total_interest, 1.0,
        "month 2 interest accrues on month 1's deposit"
    );
    assert_eq!(schedule[2].total_amount, 201.0);
}

#[test]
fn test_additivity_invariant() {
    let params = inputs(1_000.0, 100.0, 1.0, RateType::Monthly, 2, PeriodType::Years);

    for entry in project(&params) {
        let delta = (entry.total_amount - (entry.total_invested + entry.total_interest)).abs();
        assert!(
            delta < 0.01,
            "month {}: total {} should equal invested {} + interest {}",
            entry.month,
            entry.total_amount,
            entry.total_invested,
            entry.total_interest
        );
    }
}

#[test]
fn test_total_amount_is_monotonic() {
    let params = inputs(500.0, 50.0, 0.5, RateType::Monthly, 3, PeriodType::Years);
    let schedule = project(&params);

    for window in schedule.windows(2) {
        assert!(
            window[1].total_amount >= window[0].total_amount - 0.01,
            "total must not shrink between months {} and {}",
            window[0].month,
            window[1].month
        );
    }
}

#[test]
fn test_zero_inputs_flatline() {
    let params = inputs(0.0, 0.0, 1.0, RateType::Monthly, 3, PeriodType::Months);
    let schedule = project(&params);

    assert_eq!(schedule.len(), 4);
    for entry in schedule {
        assert_eq!(entry.total_amount, 0.0);
        assert_eq!(entry.total_invested, 0.0);
        assert_eq!(entry.total_interest, 0.0);
    }
}

#[test]
fn test_zero_period_degrades_to_starting_entry() {
    let params = inputs(1_000.0, 100.0, 1.0, RateType::Monthly, 0, PeriodType::Months);
    let schedule = project(&params);

    assert_eq!(schedule.len(), 1, "no elapsed months, only the month-0 state");
    assert_eq!(schedule[0].total_amount, 1_000.0);
}

#[test]
fn test_yearly_rate_converts_geometrically() {
    let params = inputs(1_000.0, 0.0, 12.0, RateType::Yearly, 1, PeriodType::Years);
    let rate = monthly_rate(&params);

    assert!(
        (rate - 0.009_488_8).abs() < 1e-6,
        "12% a year should derive 1.12^(1/12) - 1, got {rate}"
    );
    assert!(
        (rate - 0.01).abs() > 5e-4,
        "geometric conversion must differ from the naive 12%/12"
    );

    // Compounding the derived rate 12 times reproduces the annual rate.
    let annual = (1.0 + rate).powi(12) - 1.0;
    assert!((annual - 0.12).abs() < 1e-10);
}

#[test]
fn test_monthly_rate_is_plain_fraction() {
    let params = inputs(1_000.0, 0.0, 1.5, RateType::Monthly, 1, PeriodType::Months);
    assert_eq!(monthly_rate(&params), 0.015);
}

#[test]
fn test_projection_is_deterministic() {
    let params = inputs(3_000.0, 75.0, 8.0, RateType::Yearly, 10, PeriodType::Years);

    let first = project(&params);
    let second = project(&params);
    assert_eq!(first, second, "same inputs must reproduce the same schedule");
}

#[test]
fn test_monetary_fields_rounded_to_cents() {
    let params = inputs(1_000.0, 33.33, 0.7, RateType::Monthly, 3, PeriodType::Years);

    for entry in project(&params) {
        for value in [entry.total_invested, entry.total_interest, entry.total_amount] {
            let cents = value * 100.0;
            assert!(
                (cents - cents.round()).abs() < 1e-6,
                "month {}: {value} is not rounded to 2 decimals",
                entry.month
            );
        }
    }
}
