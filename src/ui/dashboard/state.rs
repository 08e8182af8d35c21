//! Dashboard state management
//!
//! Contains the dashboard state struct and the input focus enum

use crate::analysis::Interval;
use crate::dashboard::DashboardController;
use crate::environment::Environment;
use crate::ui::app::UIConfig;
use crate::ui::terminal_view::TerminalView;

use std::time::Instant;

/// Which part of the input bar receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Ticker,
    Interval,
    Analyze,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Ticker => Focus::Interval,
            Focus::Interval => Focus::Analyze,
            Focus::Analyze => Focus::Ticker,
        }
    }
}

/// Everything the dashboard screen renders from.
pub struct DashboardState {
    /// Drives the terminal view from submissions and timers.
    pub controller: DashboardController<TerminalView>,
    /// The backend the dashboard talks to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Raw ticker field contents, validated on submit.
    pub ticker_input: String,
    /// Interval selector value.
    pub interval: Interval,
    pub focus: Focus,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            controller: DashboardController::new(TerminalView::default()),
            environment,
            start_time,
            ticker_input: ui_config.initial_ticker.unwrap_or_default(),
            interval: ui_config.interval,
            focus: Focus::Ticker,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    pub fn view(&self) -> &TerminalView {
        self.controller.view()
    }
}
