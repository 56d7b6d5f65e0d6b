use crate::components::charts::render_growth_chart;
use crate::components::{Component, EventResult};
use crate::state::{AppState, FieldId};
use crate::util::format::{format_currency, format_percentage};
use crossterm::event::{KeyCode, KeyEvent};
use juros_core::{PeriodType, RateType, SimulationInputs};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Screen;

pub struct SimulationScreen;

impl SimulationScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = FieldId::ALL
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let selected = idx == state.form_state.selected_field;

                let label_style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let (value, value_style) = match &state.form_state.editing {
                    Some(buffer) if selected => (
                        format!("{buffer}\u{2588}"),
                        Style::default().fg(Color::Cyan),
                    ),
                    _ => (field_value_text(*field, &state.inputs), Style::default()),
                };

                let marker = if selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{marker}{:<22}", field.label()), label_style),
                    Span::styled(value, value_style),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PARAMETERS "),
        );

        frame.render_widget(list, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = if let Some(summary) = &state.summary {
            vec![
                Line::from(Span::styled(
                    "SUMMARY",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!(
                    "  Final Amount:      {}",
                    format_currency(summary.total_amount)
                )),
                Line::from(format!(
                    "  Total Invested:    {}",
                    format_currency(summary.total_invested)
                )),
                Line::from(format!(
                    "  Total Interest:    {}",
                    format_currency(summary.total_interest)
                )),
                Line::from(format!(
                    "  Yield on Capital:  {}",
                    format_percentage(summary.yield_percentage)
                )),
            ]
        } else {
            vec![
                Line::from("No simulation results available."),
                Line::from(""),
                Line::from("Adjust the parameters to run a projection."),
            ]
        };

        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

        frame.render_widget(paragraph, area);
    }

    fn handle_editing_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => {
                let Some(text) = state.form_state.editing.take() else {
                    return EventResult::Handled;
                };
                let field = FieldId::ALL[state.form_state.selected_field];
                match state.apply_field_edit(field, &text) {
                    Ok(()) => state.clear_error(),
                    Err(message) => state.set_error(message),
                }
            }
            KeyCode::Esc => {
                state.form_state.editing = None;
            }
            KeyCode::Backspace => {
                if let Some(buffer) = state.form_state.editing.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
                if let Some(buffer) = state.form_state.editing.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        EventResult::Handled
    }
}

/// Display text for a field's current value.
fn field_value_text(field: FieldId, inputs: &SimulationInputs) -> String {
    match field {
        FieldId::InitialAmount => format_currency(inputs.initial_amount),
        FieldId::MonthlyContribution => format_currency(inputs.monthly_contribution),
        FieldId::InterestRate => format!("{}%", inputs.interest_rate),
        FieldId::RateType => match inputs.rate_type {
            RateType::Monthly => "Monthly".to_string(),
            RateType::Yearly => "Yearly".to_string(),
        },
        FieldId::Period => inputs.period.to_string(),
        FieldId::PeriodType => match inputs.period_type {
            PeriodType::Months => "Months".to_string(),
            PeriodType::Years => "Years".to_string(),
        },
    }
}

/// Raw text seed when a numeric field enters edit mode.
fn edit_seed(field: FieldId, inputs: &SimulationInputs) -> String {
    match field {
        FieldId::InitialAmount => format!("{}", inputs.initial_amount),
        FieldId::MonthlyContribution => format!("{}", inputs.monthly_contribution),
        FieldId::InterestRate => format!("{}", inputs.interest_rate),
        FieldId::Period => inputs.period.to_string(),
        FieldId::RateType | FieldId::PeriodType => String::new(),
    }
}

impl Component for SimulationScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.form_state.editing.is_some() {
            return self.handle_editing_key(key, state);
        }

        let field_count = FieldId::ALL.len();
        let field = FieldId::ALL[state.form_state.selected_field];

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.form_state.selected_field = (state.form_state.selected_field + 1) % field_count;
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.form_state.selected_field = state
                    .form_state
                    .selected_field
                    .checked_sub(1)
                    .unwrap_or(field_count - 1);
                EventResult::Handled
            }
            KeyCode::Enter => {
                if field.is_cycling() {
                    state.cycle_field(field);
                } else {
                    state.form_state.editing = Some(edit_seed(field, &state.inputs));
                }
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Left | KeyCode::Right => {
                if field.is_cycling() {
                    state.cycle_field(field);
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(44), // Parameters form
                Constraint::Min(0),     // Summary + chart
            ])
            .split(area);

        self.render_form(frame, chunks[0], state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Summary cards
                Constraint::Min(0),    // Growth chart
            ])
            .split(chunks[1]);

        self.render_summary(frame, right[0], state);
        render_growth_chart(frame, right[1], &state.results);
    }
}

impl Screen for SimulationScreen {
    fn title(&self) -> &str {
        "Simulation"
    }
}
