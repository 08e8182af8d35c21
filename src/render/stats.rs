//! Stat widgets: price, signal and RSI

use super::format::{format_price, to_fixed};
use crate::analysis::{Analysis, Signal};
use serde::Serialize;

/// Colour class applied to a stat display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatColor {
    Green,
    Red,
    Yellow,
    Blue,
}

/// Text and colour shown by one stat display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    pub text: String,
    pub color: StatColor,
}

impl StatValue {
    pub fn new(text: impl Into<String>, color: StatColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub fn price_stat(analysis: &Analysis) -> StatValue {
    let color = if analysis.price_change >= 0.0 {
        StatColor::Green
    } else {
        StatColor::Red
    };
    StatValue::new(format_price(analysis.current_price), color)
}

pub fn signal_stat(signal: Signal) -> StatValue {
    let color = match signal {
        Signal::Buy => StatColor::Green,
        Signal::Sell => StatColor::Red,
        Signal::Hold => StatColor::Yellow,
    };
    StatValue::new(format!("{} {}", signal, signal.emoji()), color)
}

/// Red above 70, green below 30, blue in between (both bounds exclusive).
pub fn rsi_stat(rsi: f64) -> StatValue {
    let color = if rsi > 70.0 {
        StatColor::Red
    } else if rsi < 30.0 {
        StatColor::Green
    } else {
        StatColor::Blue
    };
    StatValue::new(to_fixed(rsi, 2), color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_text_and_color() {
        assert_eq!(
            signal_stat(Signal::Buy),
            StatValue::new("BUY 🟢", StatColor::Green)
        );
        assert_eq!(
            signal_stat(Signal::Sell),
            StatValue::new("SELL 🔴", StatColor::Red)
        );
        assert_eq!(
            signal_stat(Signal::Hold),
            StatValue::new("HOLD 🟡", StatColor::Yellow)
        );
    }

    #[test]
    fn rsi_thresholds_are_strict() {
        assert_eq!(rsi_stat(70.0).color, StatColor::Blue);
        assert_eq!(rsi_stat(70.01).color, StatColor::Red);
        assert_eq!(rsi_stat(30.0).color, StatColor::Blue);
        assert_eq!(rsi_stat(29.99).color, StatColor::Green);
        assert_eq!(rsi_stat(50.0), StatValue::new("50.00", StatColor::Blue));
        assert_eq!(rsi_stat(70.125), StatValue::new("70.13", StatColor::Red));
    }

    #[test]
    fn color_names() {
        assert_eq!(StatColor::Yellow.to_string(), "yellow");
    }
}
