use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::insight::{InsightClient, build_prompt};
use crate::screens::{
    insight::InsightScreen, schedule::ScheduleScreen, simulation::SimulationScreen,
};
use crate::state::{AppState, InsightStatus, TabId};
use crate::worker::{InsightRequest, InsightResponse, InsightWorker};

/// How long to wait for a terminal event before polling the worker.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    simulation_screen: SimulationScreen,
    schedule_screen: ScheduleScreen,
    insight_screen: InsightScreen,
    worker: InsightWorker,
}

impl App {
    pub fn new(client: InsightClient) -> Self {
        Self {
            state: AppState::default(),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            simulation_screen: SimulationScreen::new(),
            schedule_screen: ScheduleScreen::new(),
            insight_screen: InsightScreen::new(),
            worker: InsightWorker::new(client),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.dispatch_insight_request();
            self.poll_worker();
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Simulation => self.simulation_screen.render(frame, area, &self.state),
            TabId::Schedule => self.schedule_screen.render(frame, area, &self.state),
            TabId::Insight => self.insight_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        // Bounded wait so worker responses surface without a key press
        if !event::poll(TICK_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings; text editing on the form takes precedence
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() && !self.state.is_editing() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc if !self.state.is_editing() => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Simulation => self
                .simulation_screen
                .handle_key(key_event, &mut self.state),
            TabId::Schedule => self.schedule_screen.handle_key(key_event, &mut self.state),
            TabId::Insight => self.insight_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }

    /// Turn a screen-level tip request into a worker message.
    fn dispatch_insight_request(&mut self) {
        if !self.state.insight_requested {
            return;
        }
        self.state.insight_requested = false;

        let Some(summary) = &self.state.summary else {
            return;
        };

        let prompt = build_prompt(summary, &self.state.inputs);
        if self.worker.send(InsightRequest::Generate { prompt }) {
            self.state.insight = InsightStatus::Loading;
        } else {
            self.state.set_error("Tip worker is unavailable".to_string());
        }
    }

    fn poll_worker(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            match response {
                InsightResponse::Complete { text } => {
                    self.state.insight = InsightStatus::Ready(text);
                }
            }
        }
    }
}
