//! Dashboard header component
//!
//! Renders the title and the loading gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render header with title and request progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!(
        "MARKET DASHBOARD v{}  [{}: {}]",
        version,
        state.environment,
        state.environment.api_url()
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let view = state.view();
    let (progress_text, gauge_color, progress_percent) = if view.loading {
        // Animated gauge - loops every 20 ticks
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            format!("{} LOADING - Fetching analysis", SPINNER[state.tick % SPINNER.len()]),
            Color::LightGreen,
            progress,
        )
    } else {
        let ready = match state.controller.last_rendered() {
            Some(analysis) => format!("READY - Showing {}", analysis.ticker),
            None => "READY - Enter a ticker".to_string(),
        };
        (ready, Color::LightBlue, 100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
