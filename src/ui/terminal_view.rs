//! Terminal view
//!
//! Holds whatever the controller last wrote into each display slot. The
//! dashboard components read from here on every frame.

use crate::dashboard::DashboardView;
use crate::render::{CandlestickTrace, ChartLayout, PlotConfig, PredictionsPanel, StatValue};

/// One complete OHLC bar of the plotted trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// The chart as last drawn by `new_plot`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedChart {
    pub title: String,
    pub candles: Vec<Candle>,
}

/// Gaps in any of the four series drop the bar.
fn candles_from_trace(trace: &CandlestickTrace) -> Vec<Candle> {
    (0..trace.len())
        .filter_map(|i| {
            Some(Candle {
                date: trace.x[i].clone(),
                open: trace.open[i]?,
                high: trace.high[i]?,
                low: trace.low[i]?,
                close: trace.close[i]?,
            })
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct TerminalView {
    pub loading: bool,
    pub input_error: Option<String>,
    pub price: Option<StatValue>,
    pub price_change: Option<String>,
    pub signal: Option<StatValue>,
    pub rsi: Option<StatValue>,
    pub predictions: Option<PredictionsPanel>,
    pub chart: Option<PlottedChart>,
    pub toast: Option<String>,
}

impl DashboardView for TerminalView {
    fn set_loading_visible(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_input_error(&mut self, message: Option<String>) {
        self.input_error = message;
    }

    fn set_price(&mut self, stat: &StatValue) {
        self.price = Some(stat.clone());
    }

    fn set_price_change(&mut self, line: &str) {
        self.price_change = Some(line.to_string());
    }

    fn set_signal(&mut self, stat: &StatValue) {
        self.signal = Some(stat.clone());
    }

    fn set_rsi(&mut self, stat: &StatValue) {
        self.rsi = Some(stat.clone());
    }

    fn set_predictions(&mut self, panel: &PredictionsPanel) {
        self.predictions = Some(panel.clone());
    }

    fn new_plot(
        &mut self,
        _container_id: &str,
        traces: &[CandlestickTrace],
        layout: &ChartLayout,
        _config: &PlotConfig,
    ) {
        self.chart = Some(PlottedChart {
            title: layout.title.text.clone(),
            candles: traces
                .iter()
                .filter(|trace| !trace.is_empty())
                .flat_map(candles_from_trace)
                .collect(),
        });
    }

    fn show_toast(&mut self, message: &str) {
        self.toast = Some(message.to_string());
    }

    fn hide_toast(&mut self) {
        self.toast = None;
    }
}
