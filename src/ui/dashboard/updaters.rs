//! Dashboard state update logic
//!
//! Timer ticks and key handling for the dashboard screen

use super::state::{DashboardState, Focus};

use crossterm::event::KeyCode;
use std::time::Instant;

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit,
    Quit,
}

impl DashboardState {
    /// Advance the animation tick and the controller timers.
    pub fn update(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.controller.tick(now);
    }

    /// Apply a key press to the input bar.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return KeyAction::None;
            }
            KeyCode::Enter if matches!(self.focus, Focus::Ticker | Focus::Analyze) => {
                return KeyAction::Submit;
            }
            _ => {}
        }

        match self.focus {
            Focus::Ticker => self.edit_ticker(code),
            Focus::Interval => match code {
                KeyCode::Left | KeyCode::Up => self.interval = self.interval.previous(),
                KeyCode::Right | KeyCode::Down => self.interval = self.interval.next(),
                _ => {}
            },
            Focus::Analyze => {}
        }
        KeyAction::None
    }

    fn edit_ticker(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if !c.is_control() => self.ticker_input.push(c),
            KeyCode::Backspace => {
                self.ticker_input.pop();
            }
            KeyCode::Left => self.interval = self.interval.previous(),
            KeyCode::Right => self.interval = self.interval.next(),
            _ => {}
        }
    }
}
