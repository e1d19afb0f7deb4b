//! Keyboard handling for the dashboard.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::App;

/// Work the event loop must start on behalf of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze(String),
    RefreshStatus,
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('u') if ctrl => {
            app.clear_input();
            None
        }
        KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        // Enter does exactly what the Analyze button does.
        KeyCode::Enter => app.begin_analysis().map(Command::Analyze),
        KeyCode::F(5) => {
            app.mark_checking();
            Some(Command::RefreshStatus)
        }
        KeyCode::Tab => {
            app.next_popular();
            None
        }
        KeyCode::BackTab => {
            app.previous_popular();
            None
        }
        KeyCode::Backspace => {
            app.pop_char();
            None
        }
        KeyCode::Delete => {
            app.clear_input();
            None
        }
        KeyCode::Char(c) if !ctrl && !c.is_control() => {
            app.push_char(c);
            None
        }
        _ => None,
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
