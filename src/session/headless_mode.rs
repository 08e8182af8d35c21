//! Headless mode execution

use super::console_view::ConsoleView;
use super::messages::{print_artifact_written, print_session_exit_success, print_session_starting};
use crate::analysis::{AnalysisApi, Interval};
use crate::consts::dashboard_consts::timing;
use crate::dashboard::DashboardController;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

/// Options for a single headless analysis
#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub ticker: String,
    pub interval: Interval,
    /// Where to write the predictions panel as an HTML fragment
    pub html_out: Option<PathBuf>,
    /// Where to write the chart figure as JSON
    pub chart_out: Option<PathBuf>,
}

/// Runs one submission and prints the rendered dashboard to stdout
///
/// This function handles:
/// 1. The submission itself, through the same controller the TUI uses
/// 2. Letting the stat transitions commit before printing the activity log
/// 3. Writing the requested artifacts
///
/// # Returns
/// * `Ok(())` - The analysis was rendered
/// * `Err` - Validation or request failure
pub async fn run_headless_mode(
    api: &dyn AnalysisApi,
    options: HeadlessOptions,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", api.environment());

    let mut controller = DashboardController::new(ConsoleView::stdout());
    let result = controller
        .submit(api, &options.ticker, options.interval)
        .await;

    // Let the price and signal stats commit
    tokio::time::sleep(timing::stat_transition()).await;
    controller.tick(Instant::now());

    for event in controller.activity().iter().filter(|e| e.should_display()) {
        println!("{}", event);
    }
    result?;

    if let Some(path) = &options.html_out {
        let html = controller
            .view()
            .predictions()
            .map(|panel| panel.to_html())
            .unwrap_or_default();
        std::fs::write(path, html)?;
        print_artifact_written("predictions panel", path);
    }

    if let Some(path) = &options.chart_out {
        match controller.view().figure() {
            Some(figure) => {
                std::fs::write(path, serde_json::to_string_pretty(figure)?)?;
                print_artifact_written("chart figure", path);
            }
            None => log::warn!("No chart was plotted, skipping {}", path.display()),
        }
    }

    print_session_exit_success();
    Ok(())
}
