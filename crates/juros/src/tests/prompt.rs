//! Tests for the tip prompt interpolation

use juros_core::{PeriodType, RateType, SimulationInputs, project, summarize};

use crate::insight::build_prompt;

fn sample() -> (SimulationInputs, juros_core::SummaryData) {
    let inputs = SimulationInputs {
        initial_amount: 1_000.0,
        monthly_contribution: 100.0,
        interest_rate: 1.0,
        rate_type: RateType::Monthly,
        period: 2,
        period_type: PeriodType::Years,
    };
    let summary = summarize(&project(&inputs)).unwrap();
    (inputs, summary)
}

#[test]
fn test_prompt_interpolates_inputs() {
    let (inputs, summary) = sample();
    let prompt = build_prompt(&summary, &inputs);

    assert!(prompt.contains("Valor Inicial: R$ 1000"));
    assert!(prompt.contains("Aporte Mensal: R$ 100"));
    assert!(prompt.contains("Taxa de Juros: 1 ao mês"));
    assert!(prompt.contains("Período: 2 anos"));
}

#[test]
fn test_prompt_interpolates_summary_with_two_decimals() {
    let (inputs, summary) = sample();
    let prompt = build_prompt(&summary, &inputs);

    let expected = format!("Valor Total Final: R$ {:.2}", summary.total_amount);
    assert!(prompt.contains(&expected));
}

#[test]
fn test_prompt_has_no_percent_signs() {
    // Percentages are interpolated as plain numbers; units live in the text
    let (inputs, summary) = sample();
    let prompt = build_prompt(&summary, &inputs);

    assert!(!prompt.contains('%'));
}

#[test]
fn test_prompt_names_yearly_units() {
    let (mut inputs, summary) = sample();
    inputs.rate_type = RateType::Yearly;
    inputs.period_type = PeriodType::Months;
    let prompt = build_prompt(&summary, &inputs);

    assert!(prompt.contains("ao ano"));
    assert!(prompt.contains("2 meses"));
}
