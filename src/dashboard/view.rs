//! View contract
//!
//! The set of display slots the controller writes into. The terminal UI and
//! the headless console both implement it.

use crate::render::{CandlestickTrace, ChartLayout, PlotConfig, PredictionsPanel, StatValue};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait DashboardView {
    fn set_loading_visible(&mut self, visible: bool);

    /// Inline message next to the ticker input. `None` clears it.
    fn set_input_error(&mut self, message: Option<String>);

    fn set_price(&mut self, stat: &StatValue);

    fn set_price_change(&mut self, line: &str);

    fn set_signal(&mut self, stat: &StatValue);

    fn set_rsi(&mut self, stat: &StatValue);

    /// Replaces the predictions container's content.
    fn set_predictions(&mut self, panel: &PredictionsPanel);

    /// Draws a new plot into `container_id`, replacing whatever was there.
    fn new_plot(
        &mut self,
        container_id: &str,
        traces: &[CandlestickTrace],
        layout: &ChartLayout,
        config: &PlotConfig,
    );

    fn show_toast(&mut self, message: &str);

    fn hide_toast(&mut self);
}
