//! Dashboard main renderer

use super::components::{chart, footer, header, input_bar, logs, predictions, stats, toast};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    input_bar::render_input_bar(f, main_chunks[1], state);
    stats::render_stats(f, main_chunks[2], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[3]);

    predictions::render_predictions(f, content_chunks[0], state);
    chart::render_chart(f, content_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[4], state);
    footer::render_footer(f, main_chunks[5], state);

    // Overlays go last so they sit on top
    toast::render_toast(f, f.area(), state);
}
