//! Main TUI application state and logic

use crate::interpreter::engine::Evaluator;
use crate::interpreter::errors::EvalError;
use crate::interpreter::vars::format_value;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused (for scrolling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    History,
    Variables,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::History => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::History,
        }
    }
}

/// One evaluated expression and its outcome
pub struct HistoryEntry {
    pub expression: String,
    pub outcome: Result<f64, EvalError>,
}

/// The main application state
pub struct App {
    /// The evaluator instance (one variable table per session)
    pub evaluator: Evaluator,

    /// Current contents of the expression input line
    pub input: String,

    /// Evaluated expressions, oldest first
    pub history: Vec<HistoryEntry>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets (usize::MAX = pinned to bottom, clamped at
    /// render time)
    pub history_scroll: usize,
    pub vars_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around the given evaluator
    pub fn new(evaluator: Evaluator) -> Self {
        App {
            evaluator,
            input: String::new(),
            history: Vec::new(),
            focused_pane: FocusedPane::History,
            history_scroll: 0,
            vars_scroll: 0,
            should_quit: false,
            status_message: String::from("Type an expression and press Enter"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

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

        // History/variables on top, input line and status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        super::panes::render_history_pane(
            frame,
            columns[0],
            &self.history,
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        super::panes::render_variables_pane(
            frame,
            columns[1],
            self.evaluator.vars(),
            self.focused_pane == FocusedPane::Variables,
            &mut self.vars_scroll,
        );

        super::panes::render_input_pane(frame, main_chunks[1], &self.input);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.history.len(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
                FocusedPane::Variables => {
                    self.vars_scroll = self.vars_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
                FocusedPane::Variables => {
                    self.vars_scroll = self.vars_scroll.saturating_add(1);
                }
            },
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Evaluate the current input line and append it to the history
    fn submit(&mut self) {
        let expression = self.input.trim().to_string();
        if expression.is_empty() {
            return;
        }

        let outcome = self.evaluator.evaluate(&expression);
        self.status_message = match &outcome {
            Ok(value) => format!("= {}", format_value(*value)),
            Err(err) => format!("Error: {}", err),
        };

        self.history.push(HistoryEntry {
            expression,
            outcome,
        });
        self.input.clear();

        // Pin the history pane to the newest entry
        self.history_scroll = usize::MAX;
    }
}
