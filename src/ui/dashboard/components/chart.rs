//! Dashboard chart component
//!
//! Draws the last plotted trace as text candlesticks, one column per bar,
//! newest bars on the right.

use super::super::state::DashboardState;
use crate::ui::terminal_view::Candle;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const BODY: char = '┃';
const WICK: char = '│';
const VOID: char = ' ';

const BULLISH_COLOR: Color = Color::Rgb(16, 185, 129);
const BEARISH_COLOR: Color = Color::Rgb(239, 68, 68);

/// Width of the price axis, including the separator.
const Y_AXIS_WIDTH: u16 = 11;

/// Grid of candle glyphs for a fixed drawing area.
pub struct CandleGrid<'a> {
    candles: &'a [Candle],
    min_price: f64,
    max_price: f64,
    height: u16,
}

impl<'a> CandleGrid<'a> {
    /// Keeps the newest bars that fit in `width` columns.
    pub fn new(candles: &'a [Candle], width: u16, height: u16) -> Self {
        let visible = candles.len().min(width as usize);
        let candles = &candles[candles.len() - visible..];

        let max_price = candles
            .iter()
            .fold(f64::NEG_INFINITY, |max, c| max.max(c.high));
        let min_price = candles.iter().fold(f64::INFINITY, |min, c| min.min(c.low));

        Self {
            candles,
            min_price,
            max_price,
            height,
        }
    }

    pub fn visible(&self) -> &'a [Candle] {
        self.candles
    }

    /// Row index (0 = bottom) a price falls into.
    fn row_of(&self, price: f64) -> u16 {
        if self.height == 0 {
            return 0;
        }
        let span = self.max_price - self.min_price;
        if span <= 0.0 {
            return self.height / 2;
        }
        let scaled = (price - self.min_price) / span * f64::from(self.height - 1);
        scaled.round().clamp(0.0, f64::from(self.height - 1)) as u16
    }

    /// Glyph of `candle` at row `y`.
    pub fn glyph(&self, candle: &Candle, y: u16) -> char {
        let high = self.row_of(candle.high);
        let low = self.row_of(candle.low);
        let body_top = self.row_of(candle.open.max(candle.close));
        let body_bottom = self.row_of(candle.open.min(candle.close));

        if (body_bottom..=body_top).contains(&y) {
            BODY
        } else if (low..=high).contains(&y) {
            WICK
        } else {
            VOID
        }
    }

    /// Price shown on the axis at row `y`.
    fn axis_price(&self, y: u16) -> f64 {
        if self.height <= 1 {
            return self.min_price;
        }
        self.min_price + (self.max_price - self.min_price) * f64::from(y) / f64::from(self.height - 1)
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        (0..self.height)
            .rev()
            .map(|y| {
                let axis = if y % 3 == 0 || y == self.height - 1 {
                    format!("{:>8.2} │", self.axis_price(y))
                } else {
                    format!("{:>8} │", "")
                };
                let mut spans = vec![Span::styled(axis, Style::default().fg(Color::Gray))];
                spans.extend(self.candles.iter().map(|candle| {
                    let color = if candle.is_bullish() {
                        BULLISH_COLOR
                    } else {
                        BEARISH_COLOR
                    };
                    Span::styled(
                        self.glyph(candle, y).to_string(),
                        Style::default().fg(color),
                    )
                }));
                Line::from(spans)
            })
            .collect()
    }
}

pub fn render_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chart = state.view().chart.as_ref();
    let title = chart
        .map(|c| c.title.clone())
        .unwrap_or_else(|| "CHART".to_string());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    let lines = match chart {
        Some(chart) if !chart.candles.is_empty() => {
            let grid = CandleGrid::new(
                &chart.candles,
                inner.width.saturating_sub(Y_AXIS_WIDTH),
                inner.height.saturating_sub(1),
            );
            let mut lines = grid.lines();
            if let (Some(first), Some(last)) = (grid.visible().first(), grid.visible().last()) {
                lines.push(Line::from(Span::styled(
                    format!("{:>10}{} .. {}", "", first.date, last.date),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        _ => vec![Line::from(Span::styled(
            "No chart data",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            date: "2024-01-02".to_string(),
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn glyphs_follow_body_and_wicks() {
        let candles = vec![candle(20.0, 30.0, 0.0, 10.0)];
        let grid = CandleGrid::new(&candles, 10, 4);

        // rows: 0 -> 0.0, 1 -> 10.0, 2 -> 20.0, 3 -> 30.0
        assert_eq!(grid.glyph(&candles[0], 3), WICK);
        assert_eq!(grid.glyph(&candles[0], 2), BODY);
        assert_eq!(grid.glyph(&candles[0], 1), BODY);
        assert_eq!(grid.glyph(&candles[0], 0), WICK);
    }

    #[test]
    fn keeps_newest_candles_that_fit() {
        let candles: Vec<Candle> = (0..5)
            .map(|i| candle(i as f64, i as f64 + 1.0, i as f64 - 1.0, i as f64))
            .collect();
        let grid = CandleGrid::new(&candles, 3, 5);

        assert_eq!(grid.visible().len(), 3);
        assert_eq!(grid.visible()[0].open, 2.0);
        assert_eq!(grid.lines().len(), 5);
    }
}
