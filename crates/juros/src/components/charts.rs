//! Growth chart for the projection schedule.

use juros_core::SimulationResult;
use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::util::format::format_currency;

/// Upper bound on rendered bars; long schedules get downsampled.
const MAX_POINTS: usize = 60;

pub fn render_growth_chart(frame: &mut Frame, area: Rect, results: &[SimulationResult]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" GROWTH PROJECTION ");

    if results.len() < 2 {
        let paragraph = Paragraph::new("No schedule to display").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Bars are 4 cells wide plus a 1-cell gap; sample months to fit
    let inner_width = area.width.saturating_sub(2) as usize;
    let capacity = (inner_width / 5).clamp(1, MAX_POINTS);
    let step = results.len().div_ceil(capacity).max(1);

    let final_amount = results[results.len() - 1].total_amount;

    let bars: Vec<Bar> = results
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % step == 0 || *idx == results.len() - 1)
        .take(capacity + 1)
        .map(|(_, entry)| {
            let value = entry.total_amount.max(0.0) as u64;
            let style = growth_style(entry.total_amount, final_amount);

            Bar::default()
                .value(value)
                .label(Line::from(format!("{}", entry.month)))
                .text_value(format_currency(entry.total_amount))
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .direction(Direction::Vertical);

    frame.render_widget(chart, area);
}

/// Color gradient based on progress toward the final amount.
fn growth_style(value: f64, final_value: f64) -> Style {
    let ratio = if final_value > 0.0 {
        (value / final_value).clamp(0.0, 1.5)
    } else {
        0.0
    };

    if ratio < 0.25 {
        Style::default().fg(Color::Yellow)
    } else if ratio < 0.5 {
        Style::default().fg(Color::LightYellow)
    } else if ratio < 0.75 {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default().fg(Color::Green)
    }
}
