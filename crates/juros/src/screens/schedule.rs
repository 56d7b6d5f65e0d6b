use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::Screen;

/// Rows jumped by PgUp/PgDn.
const PAGE_SIZE: usize = 10;

pub struct ScheduleScreen;

impl ScheduleScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ScheduleScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let max_offset = state.results.len().saturating_sub(1);
        let offset = state.schedule_state.scroll_offset;

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if offset < max_offset {
                    state.schedule_state.scroll_offset = offset + 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.schedule_state.scroll_offset = offset.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::PageDown => {
                state.schedule_state.scroll_offset = (offset + PAGE_SIZE).min(max_offset);
                EventResult::Handled
            }
            KeyCode::PageUp => {
                state.schedule_state.scroll_offset = offset.saturating_sub(PAGE_SIZE);
                EventResult::Handled
            }
            KeyCode::Char('g') | KeyCode::Home => {
                state.schedule_state.scroll_offset = 0;
                EventResult::Handled
            }
            KeyCode::Char('G') | KeyCode::End => {
                state.schedule_state.scroll_offset = max_offset;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let start_idx = state.schedule_state.scroll_offset;
        let visible_count = (area.height as usize).saturating_sub(3);

        // Header
        let mut items = vec![ListItem::new(Line::from(vec![Span::styled(
            format!(
                "{:>6} {:>16} {:>16} {:>16} {:>16}",
                "Month", "Contribution", "Invested", "Interest", "Total"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )]))];

        // Data rows
        for entry in state.results.iter().skip(start_idx).take(visible_count) {
            items.push(ListItem::new(Line::from(format!(
                "{:>6} {:>16} {:>16} {:>16} {:>16}",
                entry.month,
                format_currency(entry.monthly_contribution),
                format_currency(entry.total_invested),
                format_currency(entry.total_interest),
                format_currency(entry.total_amount)
            ))));
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" MONTHLY SCHEDULE "),
        );

        frame.render_widget(list, area);
    }
}

impl Screen for ScheduleScreen {
    fn title(&self) -> &str {
        "Schedule"
    }
}
