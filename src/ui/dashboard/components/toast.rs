//! Error toast overlay

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 5;

/// Bottom-right corner of `area`, clamped to fit.
fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height.saturating_sub(height + 3),
        width,
        height,
    }
}

pub fn render_toast(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(message) = &state.view().toast else {
        return;
    };

    let remaining = state
        .controller
        .toast()
        .remaining(std::time::Instant::now())
        .map(|d| format!(" {}s ", d.as_secs() + 1))
        .unwrap_or_default();

    let popup = toast_area(area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White).bg(Color::Red))
            .block(
                Block::default()
                    .title("Error")
                    .title_bottom(remaining)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    ),
            ),
        popup,
    );
}
