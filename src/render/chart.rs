//! Candlestick chart figure
//!
//! Serializes to the `{data, layout, config}` shape a Plotly-style
//! `newPlot(container, traces, layout, config)` call consumes.

use crate::analysis::ChartData;
use crate::consts::dashboard_consts::chart::{DECREASING_COLOR, HOVER_MODE, INCREASING_COLOR};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleStyle {
    pub line: LineStyle,
    pub fillcolor: String,
}

impl CandleStyle {
    fn solid(color: &str) -> Self {
        Self {
            line: LineStyle {
                color: color.to_string(),
            },
            fillcolor: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlestickTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub increasing: CandleStyle,
    pub decreasing: CandleStyle,
}

impl CandlestickTrace {
    /// Number of complete candles, i.e. indexes present in every series.
    pub fn len(&self) -> usize {
        [
            self.x.len(),
            self.open.len(),
            self.high.len(),
            self.low.len(),
            self.close.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: AxisTitle,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
}

/// Everything one plot call needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    #[serde(rename = "data")]
    pub traces: Vec<CandlestickTrace>,
    pub layout: ChartLayout,
    pub config: PlotConfig,
}

/// Builds the candlestick figure, or `None` when there are no dates to plot.
pub fn build_figure(ticker: &str, chart: &ChartData) -> Option<Figure> {
    if !chart.has_dates() {
        return None;
    }

    let trace = CandlestickTrace {
        kind: "candlestick",
        name: ticker.to_string(),
        x: chart.dates.clone(),
        open: chart.open.clone(),
        high: chart.high.clone(),
        low: chart.low.clone(),
        close: chart.close.clone(),
        increasing: CandleStyle::solid(INCREASING_COLOR),
        decreasing: CandleStyle::solid(DECREASING_COLOR),
    };

    let layout = ChartLayout {
        title: AxisTitle {
            text: format!("{} - Candlestick Chart", ticker),
        },
        xaxis: Axis {
            title: AxisTitle {
                text: "Date".to_string(),
            },
            rangeslider: Some(RangeSlider { visible: false }),
        },
        yaxis: Axis {
            title: AxisTitle {
                text: "Price ($)".to_string(),
            },
            rangeslider: None,
        },
        hovermode: HOVER_MODE,
    };

    Some(Figure {
        traces: vec![trace],
        layout,
        config: PlotConfig {
            responsive: true,
            display_mode_bar: false,
        },
    })
}
