//! Main TUI application state and logic

use crate::algorithms::AlgorithmId;
use crate::playback::PlaybackController;
use crate::trace::Trace;
use crate::ui::pseudocode;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Interval between auto-play steps.
const TICK: Duration = Duration::from_millis(700);

/// The main application state
pub struct App {
    /// Playback over the recorded trace
    pub controller: PlaybackController,

    /// Which algorithm produced the trace; selects the pseudocode table
    pub kind: AlgorithmId,

    /// Title for the structure pane
    pub title: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display when the current frame has none
    pub status_message: String,

    /// Last time an auto-play step was taken
    pub last_tick: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(kind: AlgorithmId, title: impl Into<String>, trace: Trace) -> Self {
        App {
            controller: PlaybackController::with_trace(trace),
            kind,
            title: title.into(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_tick: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.controller.is_playing() && self.last_tick.elapsed() >= TICK {
                self.controller.tick();
                if !self.controller.is_playing() {
                    self.status_message = "Playback complete".to_string();
                }
                self.last_tick = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Structure on the left, pseudocode on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(pane_area);

        let current = self.controller.current_frame();
        let (message, line) = match current {
            Some(f) => (f.message.clone(), f.pseudocode_line),
            None => (self.status_message.clone(), -1),
        };

        if let Some(f) = current {
            super::panes::render_structure_pane(
                frame,
                columns[0],
                &f.snapshot,
                &f.highlight,
                &self.title,
            );
        }

        super::panes::render_pseudocode_pane(
            frame,
            columns[1],
            pseudocode::lines(self.kind),
            line,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &message,
            self.controller.position(),
            self.controller.len(),
            self.controller.is_playing(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.controller.step_back();
                self.status_message = "Stepped back".to_string();
            }
            KeyCode::Right => {
                self.controller.step_forward();
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.controller.is_playing() {
                        self.controller.pause();
                        self.status_message = "Paused".to_string();
                    } else if self.controller.play() {
                        // Fire the first auto-step immediately
                        self.last_tick = Instant::now()
                            .checked_sub(TICK)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.controller.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.controller.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}
