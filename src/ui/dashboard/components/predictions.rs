//! Dashboard predictions panel component
//!
//! Renders the four analysis cards as one scrolling list

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_predictions(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = match &state.view().predictions {
        Some(panel) => panel
            .cards
            .iter()
            .flat_map(|card| {
                let title = Line::from(Span::styled(
                    card.title,
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ));
                std::iter::once(title)
                    .chain(card.rows.iter().map(|row| {
                        Line::from(vec![
                            Span::styled(
                                format!("{:<12}", row.label),
                                Style::default().fg(Color::DarkGray),
                            ),
                            Span::raw(row.value.clone()),
                        ])
                    }))
                    .chain(std::iter::once(Line::default()))
            })
            .collect(),
        None => vec![Line::from("No analysis yet")],
    };

    let block = Block::default()
        .title("PREDICTIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
