//! Dashboard stat boxes
//!
//! Price (with the change line), signal and RSI

use super::super::state::DashboardState;
use super::super::utils::stat_color;
use crate::render::StatValue;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Styled stat text. Stats waiting on their transition render dimmed.
fn stat_line(stat: Option<&StatValue>, transitioning: bool) -> Line<'static> {
    let Some(stat) = stat else {
        return Line::from(Span::styled("--", Style::default().fg(Color::DarkGray)));
    };
    let mut style = Style::default()
        .fg(stat_color(stat.color))
        .add_modifier(Modifier::BOLD);
    if transitioning {
        style = style.add_modifier(Modifier::DIM);
    }
    Line::from(Span::styled(stat.text.clone(), style))
}

fn stat_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render_stats(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let view = state.view();
    let controller = &state.controller;

    let change = view.price_change.clone().unwrap_or_default();
    let change_color = if change.starts_with('-') {
        Color::LightRed
    } else {
        Color::LightGreen
    };
    let price = Paragraph::new(vec![
        stat_line(view.price.as_ref(), controller.is_price_transitioning()),
        Line::from(Span::styled(change, Style::default().fg(change_color))),
    ])
    .alignment(Alignment::Center)
    .block(stat_block("Current Price"));
    f.render_widget(price, chunks[0]);

    let signal = Paragraph::new(stat_line(
        view.signal.as_ref(),
        controller.is_signal_transitioning(),
    ))
    .alignment(Alignment::Center)
    .block(stat_block("Signal"));
    f.render_widget(signal, chunks[1]);

    let rsi = Paragraph::new(stat_line(view.rsi.as_ref(), false))
        .alignment(Alignment::Center)
        .block(stat_block("RSI"));
    f.render_widget(rsi, chunks[2]);
}
