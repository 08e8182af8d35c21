//! Dashboard input bar component
//!
//! Ticker field, interval selector and the Analyze button

use super::super::state::{DashboardState, Focus};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

pub fn render_input_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(35),
            Constraint::Percentage(20),
        ])
        .split(area);

    // Ticker field, with the validation message underneath
    let cursor = if state.focus == Focus::Ticker && state.tick % 10 < 5 {
        "_"
    } else {
        " "
    };
    let mut ticker_lines = vec![Line::from(vec![
        Span::raw(state.ticker_input.clone()),
        Span::raw(cursor),
    ])];
    if let Some(error) = &state.view().input_error {
        ticker_lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::LightRed),
        )));
    }
    let ticker = Paragraph::new(ticker_lines).block(
        Block::default()
            .title("Ticker")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focus_style(state.focus == Focus::Ticker)),
    );
    f.render_widget(ticker, chunks[0]);

    let interval = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{} ({})", state.interval.label(), state.interval)),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title("Interval")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focus_style(state.focus == Focus::Interval)),
    );
    f.render_widget(interval, chunks[1]);

    let button_label = if state.view().loading {
        "Analyzing..."
    } else {
        "Analyze"
    };
    let button = Paragraph::new(button_label)
        .alignment(ratatui::layout::Alignment::Center)
        .style(focus_style(state.focus == Focus::Analyze))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(focus_style(state.focus == Focus::Analyze)),
        );
    f.render_widget(button, chunks[2]);
}
