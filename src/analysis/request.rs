//! Analysis request types and input validation

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Errors raised while validating user input, before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a stock ticker")]
    EmptyTicker,
}

/// Candle intervals offered by the interval selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Interval {
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMinute,
    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    FiveMinutes,
    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[strum(serialize = "30m")]
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    OneHour,
    #[default]
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,
    #[strum(serialize = "1wk")]
    #[serde(rename = "1wk")]
    OneWeek,
    #[strum(serialize = "1mo")]
    #[serde(rename = "1mo")]
    OneMonth,
}

impl Interval {
    /// Human readable label used by the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1 Minute",
            Interval::FiveMinutes => "5 Minutes",
            Interval::FifteenMinutes => "15 Minutes",
            Interval::ThirtyMinutes => "30 Minutes",
            Interval::OneHour => "1 Hour",
            Interval::OneDay => "1 Day",
            Interval::OneWeek => "1 Week",
            Interval::OneMonth => "1 Month",
        }
    }

    /// The next interval in selector order, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Interval> = Interval::iter().collect();
        let idx = all.iter().position(|i| *i == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The previous interval in selector order, wrapping around.
    pub fn previous(self) -> Self {
        let all: Vec<Interval> = Interval::iter().collect();
        let idx = all.iter().position(|i| *i == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// A validated ticker symbol: trimmed, uppercase and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub ticker: Ticker,
    pub interval: Interval,
}

impl AnalysisRequest {
    pub fn new(ticker: Ticker, interval: Interval) -> Self {
        Self { ticker, interval }
    }
}
