//! Pure render functions
//!
//! Everything here is a deterministic function of an `Analysis`.

pub mod chart;
pub mod format;
pub mod panel;
pub mod stats;

pub use chart::{CandlestickTrace, ChartLayout, Figure, PlotConfig, build_figure};
pub use format::{format_price, format_price_change, format_volume};
pub use panel::PredictionsPanel;
pub use stats::{StatColor, StatValue, price_stat, rsi_stat, signal_stat};
