//! Dashboard footer component
//!
//! Renders the key help line and session uptime

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let uptime = state.start_time.elapsed().as_secs();
    let footer_text = format!(
        "[Enter] Analyze | [Tab] Next field | [←/→] Interval | [Esc] Quit | Up {}m {:02}s",
        uptime / 60,
        uptime % 60
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
