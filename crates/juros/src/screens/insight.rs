use crate::components::{Component, EventResult};
use crate::state::{AppState, InsightStatus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

pub struct InsightScreen;

impl InsightScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Component for InsightScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('g') => {
                // One request in flight at a time
                if state.insight != InsightStatus::Loading && state.summary.is_some() {
                    state.insight_requested = true;
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" FINANCIAL TIP ");

        let paragraph = match &state.insight {
            InsightStatus::Idle => Paragraph::new(vec![
                Line::from(""),
                Line::from("No tip generated yet."),
                Line::from(""),
                Line::from("Press [g] to ask the local model for advice on the"),
                Line::from("current simulation."),
            ])
            .block(block),
            InsightStatus::Loading => Paragraph::new(vec![
                Line::from(""),
                Line::styled(
                    "Consulting the financial advisor...",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .block(block),
            InsightStatus::Ready(text) => Paragraph::new(text.as_str())
                .wrap(Wrap { trim: false })
                .block(block),
        };

        frame.render_widget(paragraph, area);
    }
}

impl Screen for InsightScreen {
    fn title(&self) -> &str {
        "Insight"
    }
}
