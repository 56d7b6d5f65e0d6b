/// Format a monetary value as Brazilian currency (`R$ 1.234,56`).
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let mut reais = abs_value as i64;
    let mut centavos = ((abs_value - reais as f64) * 100.0).round() as i64;
    if centavos == 100 {
        reais += 1;
        centavos = 0;
    }

    // Thousands separators, pt-BR style
    let reais_str = reais.to_string();
    let mut grouped = String::new();
    for (i, c) in reais_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let reais_formatted: String = grouped.chars().rev().collect();

    if value < 0.0 {
        format!("-R$ {reais_formatted},{centavos:02}")
    } else {
        format!("R$ {reais_formatted},{centavos:02}")
    }
}

/// Format a yield percentage; the value already is a percentage, not a
/// fraction. Non-finite values (undefined yield) render as a dash.
pub fn format_percentage(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}%")
    } else {
        "—".to_string()
    }
}
