//! Tests for the summary reducer
//!
//! These tests verify:
//! - The summary mirrors the last schedule entry
//! - Yield percentage arithmetic
//! - The zero-invested and empty-sequence edge cases

use crate::model::{PeriodType, RateType, SimulationInputs, SimulationResult};
use crate::projection::project;
use crate::summary::summarize;

fn sample_inputs() -> SimulationInputs {
    SimulationInputs {
        initial_amount: 1_000.0,
        monthly_contribution: 100.0,
        interest_rate: 1.0,
        rate_type: RateType::Monthly,
        period: 2,
        period_type: PeriodType::Years,
    }
}

#[test]
fn test_summary_mirrors_last_entry() {
    let schedule = project(&sample_inputs());
    let summary = summarize(&schedule).expect("engine output is never empty");
    let last = schedule.last().unwrap();

    assert_eq!(summary.total_amount, last.total_amount);
    assert_eq!(summary.total_invested, last.total_invested);
    assert_eq!(summary.total_interest, last.total_interest);
}

#[test]
fn test_yield_percentage_arithmetic() {
    let schedule = vec![SimulationResult {
        month: 0,
        total_invested: 2_000.0,
        total_interest: 500.0,
        total_amount: 2_500.0,
        monthly_contribution: 0.0,
    }];

    let summary = summarize(&schedule).unwrap();
    assert_eq!(
        summary.yield_percentage, 25.0,
        "500 earned on 2000 invested is a 25% yield"
    );
}

#[test]
fn test_zero_invested_yield_is_non_finite() {
    let params = SimulationInputs {
        initial_amount: 0.0,
        monthly_contribution: 0.0,
        interest_rate: 1.0,
        rate_type: RateType::Monthly,
        period: 3,
        period_type: PeriodType::Months,
    };

    let summary = summarize(&project(&params)).unwrap();
    assert_eq!(summary.total_amount, 0.0);
    assert!(
        !summary.yield_percentage.is_finite(),
        "0/0 must surface as a non-finite sentinel, not a crash"
    );
}

#[test]
fn test_empty_sequence_yields_none() {
    assert!(summarize(&[]).is_none());
}

#[test]
fn test_summarize_of_project_agrees() {
    let schedule = project(&sample_inputs());
    let summary = summarize(&schedule).unwrap();

    assert_eq!(
        summary.total_amount,
        schedule.last().unwrap().total_amount,
        "summary total must equal the final schedule entry"
    );
}
