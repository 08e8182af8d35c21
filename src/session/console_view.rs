//! Console rendition of the dashboard
//!
//! Prints every view update as a line of text. Used by headless mode.

use crate::dashboard::DashboardView;
use crate::render::{
    CandlestickTrace, ChartLayout, Figure, PlotConfig, PredictionsPanel, StatColor, StatValue,
};
use std::io::{self, Write};

use super::messages::COLOR_RESET;

fn ansi(color: StatColor) -> &'static str {
    match color {
        StatColor::Green => "\x1b[1;32m",
        StatColor::Red => "\x1b[1;31m",
        StatColor::Yellow => "\x1b[1;33m",
        StatColor::Blue => "\x1b[1;34m",
    }
}

/// Writes dashboard updates to `out` and keeps the latest panel and plot for export.
#[derive(Debug)]
pub struct ConsoleView<W: Write> {
    out: W,
    predictions: Option<PredictionsPanel>,
    figure: Option<Figure>,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            predictions: None,
            figure: None,
        }
    }

    pub fn predictions(&self) -> Option<&PredictionsPanel> {
        self.predictions.as_ref()
    }

    /// The last figure handed to `new_plot`.
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Failed to write dashboard output: {}", e);
        }
    }

    fn emit_stat(&mut self, label: &str, stat: &StatValue) {
        let line = format!(
            "{:<8}{}{}{}",
            label,
            ansi(stat.color),
            stat.text,
            COLOR_RESET
        );
        self.emit(&line);
    }
}

impl<W: Write> DashboardView for ConsoleView<W> {
    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            self.emit("Loading analysis...");
        }
    }

    fn set_input_error(&mut self, message: Option<String>) {
        if let Some(message) = message {
            self.emit(&format!("\x1b[1;31mTicker: {}{}", message, COLOR_RESET));
        }
    }

    fn set_price(&mut self, stat: &StatValue) {
        self.emit_stat("Price:", stat);
    }

    fn set_price_change(&mut self, line: &str) {
        self.emit(&format!("{:<8}{}", "Change:", line));
    }

    fn set_signal(&mut self, stat: &StatValue) {
        self.emit_stat("Signal:", stat);
    }

    fn set_rsi(&mut self, stat: &StatValue) {
        self.emit_stat("RSI:", stat);
    }

    fn set_predictions(&mut self, panel: &PredictionsPanel) {
        for card in &panel.cards {
            self.emit(&format!("\n{}", card.title));
            for row in &card.rows {
                self.emit(&format!("  {:<12}{}", row.label, row.value));
            }
        }
        self.predictions = Some(panel.clone());
    }

    fn new_plot(
        &mut self,
        container_id: &str,
        traces: &[CandlestickTrace],
        layout: &ChartLayout,
        config: &PlotConfig,
    ) {
        let candles: usize = traces.iter().map(|t| t.len()).sum();
        self.emit(&format!(
            "\n[{}] {} ({} candles)",
            container_id, layout.title.text, candles
        ));
        self.figure = Some(Figure {
            traces: traces.to_vec(),
            layout: layout.clone(),
            config: config.clone(),
        });
    }

    fn show_toast(&mut self, message: &str) {
        self.emit(&format!("\x1b[1;31mError: {}{}", message, COLOR_RESET));
    }

    fn hide_toast(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::response::decode_analysis;
    use crate::analysis::{AnalysisRequest, Interval, Ticker};
    use crate::render::{build_figure, price_stat};
    use serde_json::json;

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.out).expect("utf8")
    }

    #[test]
    fn stats_are_coloured() {
        let mut view = ConsoleView::new(Vec::new());
        view.set_signal(&StatValue::new("SELL 🔴", StatColor::Red));
        assert_eq!(output(view), "Signal: \x1b[1;31mSELL 🔴\x1b[0m\n");
    }

    #[test]
    fn plot_is_kept_for_export() {
        let request = AnalysisRequest::new(Ticker::parse("amd").unwrap(), Interval::OneDay);
        let body = json!({
            "current_price": 150.0,
            "chart_data": {
                "dates": ["2024-01-02"],
                "open": [149.0], "high": [151.0], "low": [148.0], "close": [150.0]
            }
        });
        let analysis = decode_analysis(200, body.to_string().as_bytes(), &request).unwrap();
        let figure = build_figure(&analysis.ticker, analysis.chart.as_ref().unwrap()).unwrap();

        let mut view = ConsoleView::new(Vec::new());
        view.set_price(&price_stat(&analysis));
        view.new_plot("chart", &figure.traces, &figure.layout, &figure.config);

        assert_eq!(view.figure(), Some(&figure));
        let text = output(view);
        assert!(text.contains("$150.00"));
        assert!(text.contains("[chart] AMD - Candlestick Chart (1 candles)"));
    }
}
