use juros_core::{PeriodType, RateType, SimulationInputs, SummaryData};

/// Fixed fallback sentence shown when the tip backend is unavailable.
pub const FALLBACK_INSIGHT: &str = "Não foi possível gerar insights no momento. \
     Mas lembre-se: a constância é a chave para o sucesso financeiro!";

/// Build the natural-language prompt for the tip backend.
///
/// Monetary fields are interpolated as plain decimal numbers and percentages
/// carry no `%` suffix; the model reads the units from the surrounding text.
pub fn build_prompt(summary: &SummaryData, inputs: &SimulationInputs) -> String {
    let rate_unit = match inputs.rate_type {
        RateType::Monthly => "ao mês",
        RateType::Yearly => "ao ano",
    };
    let period_unit = match inputs.period_type {
        PeriodType::Months => "meses",
        PeriodType::Years => "anos",
    };

    format!(
        "Como um consultor financeiro especialista, analise esta simulação de juros compostos:\n\
         - Valor Inicial: R$ {initial}\n\
         - Aporte Mensal: R$ {contribution}\n\
         - Taxa de Juros: {rate} {rate_unit}\n\
         - Período: {period} {period_unit}\n\
         \n\
         Resultados obtidos:\n\
         - Valor Total Final: R$ {total:.2}\n\
         - Total Investido: R$ {invested:.2}\n\
         - Total em Juros: R$ {interest:.2}\n\
         - Rendimento sobre o capital: {yield_pct:.2}\n\
         \n\
         Forneça 3 dicas curtas e práticas em português para o usuário melhorar \
         seu resultado ou entender o poder desse investimento. Seja motivador e técnico.",
        initial = inputs.initial_amount,
        contribution = inputs.monthly_contribution,
        rate = inputs.interest_rate,
        period = inputs.period,
        total = summary.total_amount,
        invested = summary.total_invested,
        interest = summary.total_interest,
        yield_pct = summary.yield_percentage,
    )
}
