//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::analysis::error::ApiError;
use crate::analysis::{Analysis, AnalysisApi, Interval};
use crate::consts::dashboard_consts::{COMPLETION_QUEUE_SIZE, timing};
use crate::dashboard::Submission;
use crate::ui::dashboard::updaters::KeyAction;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Ticker submitted as soon as the dashboard opens.
    pub initial_ticker: Option<String>,
    pub interval: Interval,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        initial_ticker: Option<String>,
        interval: Interval,
    ) -> Self {
        Self {
            with_background_color,
            initial_ticker,
            interval,
        }
    }
}

/// A finished request on its way back to the UI loop.
struct CompletedSubmission {
    submission: Submission,
    result: Result<Analysis, ApiError>,
}

/// Application state
pub struct App {
    /// Dashboard screen state.
    state: DashboardState,

    /// Client shared with every submission task.
    api: Arc<dyn AnalysisApi>,

    /// Submission tasks report back through this channel.
    completion_sender: mpsc::Sender<CompletedSubmission>,
    completion_receiver: mpsc::Receiver<CompletedSubmission>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Arc<dyn AnalysisApi>, ui_config: UIConfig) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_QUEUE_SIZE);
        let state = DashboardState::new(api.environment().clone(), Instant::now(), ui_config);
        Self {
            state,
            api,
            completion_sender,
            completion_receiver,
        }
    }

    /// Starts a submission from the current input. Invalid input is reported
    /// inline by the controller and never leaves the UI thread.
    fn submit(&mut self) {
        let Ok(submission) = self
            .state
            .controller
            .begin_submission(&self.state.ticker_input, self.state.interval)
        else {
            return;
        };

        let api = Arc::clone(&self.api);
        let sender = self.completion_sender.clone();
        tokio::spawn(async move {
            let result = api.analyze(&submission.request).await;
            if sender
                .send(CompletedSubmission { submission, result })
                .await
                .is_err()
            {
                log::debug!("UI loop closed before the submission completed");
            }
        });
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    if !app.state.ticker_input.trim().is_empty() {
        app.submit();
    }

    // UI event loop
    loop {
        // Apply every submission that finished since the last frame
        while let Ok(completed) = app.completion_receiver.try_recv() {
            // Failures are already on screen as a toast
            let _ = app.state.controller.complete_submission(
                completed.submission,
                completed.result,
                Instant::now(),
            );
        }

        app.state.update(Instant::now());
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(timing::ui_tick())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                match app.state.handle_key(key.code) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Submit => app.submit(),
                    KeyAction::None => {}
                }
            }
        }
    }
}
