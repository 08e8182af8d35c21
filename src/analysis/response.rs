//! Analysis response decoding
//!
//! The backend answers with a loosely typed JSON object. `RawAnalysis` mirrors it
//! with every field optional; `Analysis::from_raw` applies the defaults table once
//! so render code never has to think about missing data.

use super::error::ApiError;
use super::request::AnalysisRequest;
use crate::consts::dashboard_consts::defaults;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Trading recommendation. Anything other than exactly `BUY` or `SELL` is `Hold`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display)]
pub enum Signal {
    #[strum(serialize = "BUY")]
    Buy,
    #[strum(serialize = "SELL")]
    Sell,
    #[default]
    #[strum(serialize = "HOLD")]
    Hold,
}

impl Signal {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("BUY") => Signal::Buy,
            Some("SELL") => Signal::Sell,
            _ => Signal::Hold,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Signal::Buy => "🟢",
            Signal::Sell => "🔴",
            Signal::Hold => "🟡",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawIndicators {
    #[serde(default, deserialize_with = "lenient::number")]
    rsi: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    macd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    ma20: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    ma50: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPredictions {
    #[serde(default, deserialize_with = "lenient::number")]
    next_hour: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    next_day: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    next_week: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    confidence: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTrend {
    #[serde(default, deserialize_with = "lenient::text")]
    short_term: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    medium_term: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    long_term: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawChartData {
    #[serde(default, deserialize_with = "lenient::texts")]
    dates: Vec<String>,
    #[serde(default, deserialize_with = "lenient::numbers")]
    open: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient::numbers")]
    high: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient::numbers")]
    low: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient::numbers")]
    close: Vec<Option<f64>>,
}

/// The response body exactly as the backend sent it.
#[derive(Debug, Default, Deserialize)]
struct RawAnalysis {
    #[serde(default, deserialize_with = "lenient::text")]
    ticker: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    close: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    price_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    price_change_percent: Option<f64>,
    #[serde(default)]
    signal: Option<Value>,
    #[serde(default, deserialize_with = "lenient::number")]
    rsi: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    indicators: Option<RawIndicators>,
    #[serde(default, deserialize_with = "lenient::object")]
    predictions: Option<RawPredictions>,
    #[serde(default, deserialize_with = "lenient::object")]
    trend: Option<RawTrend>,
    #[serde(default, deserialize_with = "lenient::number")]
    volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    volatility: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    risk_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    support: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    resistance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    chart_data: Option<RawChartData>,
    #[serde(default, deserialize_with = "lenient::object")]
    historical_data: Option<RawChartData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Indicators {
    pub macd: f64,
    pub ma20: f64,
    pub ma50: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    pub next_hour: f64,
    pub next_day: f64,
    pub next_week: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub short_term: String,
    pub medium_term: String,
    pub long_term: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskProfile {
    pub volume: f64,
    pub volatility: f64,
    pub risk_level: String,
    pub support: f64,
    pub resistance: f64,
}

/// OHLC series aligned by index to `dates`. Non-numeric samples are kept as gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub dates: Vec<String>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
}

impl ChartData {
    /// Whether there is anything to plot.
    pub fn has_dates(&self) -> bool {
        !self.dates.is_empty()
    }
}

/// Fully populated analysis record consumed by every render step.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub ticker: String,
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub signal: Signal,
    pub rsi: f64,
    pub indicators: Indicators,
    pub predictions: Predictions,
    pub trend: Trend,
    pub risk: RiskProfile,
    /// `None` when the payload carried no chart block at all.
    pub chart: Option<ChartData>,
}

impl Analysis {
    fn from_raw(raw: RawAnalysis, request: &AnalysisRequest) -> Result<Self, ApiError> {
        // chart_data wins whenever it is present, even if empty
        let raw_chart = raw.chart_data.or(raw.historical_data);

        let price = raw
            .current_price
            .or(raw.close)
            .or_else(|| {
                raw_chart
                    .as_ref()
                    .and_then(|c| c.close.iter().rev().find_map(|v| *v))
            })
            .ok_or_else(|| ApiError::Malformed("response carries no current price".to_string()))?;

        let indicators = raw.indicators.unwrap_or_default();
        let predictions = raw.predictions.unwrap_or_default();
        let trend = raw.trend.unwrap_or_default();
        let neutral = || defaults::TREND.to_string();

        Ok(Self {
            ticker: raw
                .ticker
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| request.ticker.to_string()),
            current_price: price,
            price_change: raw.price_change.unwrap_or(0.0),
            price_change_percent: raw.price_change_percent.unwrap_or(0.0),
            signal: Signal::from_value(raw.signal.as_ref()),
            rsi: raw.rsi.or(indicators.rsi).unwrap_or(defaults::RSI),
            indicators: Indicators {
                macd: indicators.macd.unwrap_or(0.0),
                ma20: indicators.ma20.unwrap_or(price),
                ma50: indicators.ma50.unwrap_or(price),
            },
            predictions: Predictions {
                next_hour: predictions.next_hour.unwrap_or(price),
                next_day: predictions.next_day.unwrap_or(price),
                next_week: predictions.next_week.unwrap_or(price),
                confidence: predictions.confidence.unwrap_or(defaults::CONFIDENCE),
            },
            trend: Trend {
                short_term: trend.short_term.unwrap_or_else(neutral),
                medium_term: trend.medium_term.unwrap_or_else(neutral),
                long_term: trend.long_term.unwrap_or_else(neutral),
            },
            risk: RiskProfile {
                volume: raw.volume.unwrap_or(0.0),
                volatility: raw.volatility.unwrap_or(defaults::VOLATILITY),
                risk_level: raw
                    .risk_level
                    .unwrap_or_else(|| defaults::RISK_LEVEL.to_string()),
                support: raw.support.unwrap_or(price * defaults::SUPPORT_FACTOR),
                resistance: raw.resistance.unwrap_or(price * defaults::RESISTANCE_FACTOR),
            },
            chart: raw_chart.map(|c| ChartData {
                dates: c.dates,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
            }),
        })
    }
}

/// JavaScript-style truthiness, used for the `error` field.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Extracts the application error carried by a payload, if any.
fn application_error(body: &Value) -> Option<ApiError> {
    let error = body.get("error").filter(|e| is_truthy(e))?;
    let message = match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(ApiError::Application { message })
}

/// Turns a raw HTTP exchange into an `Analysis` or the matching failure.
///
/// A body with a truthy `error` field is an application error regardless of the
/// status code; otherwise a non-2xx status is an HTTP error.
pub fn decode_analysis(
    status: u16,
    body: &[u8],
    request: &AnalysisRequest,
) -> Result<Analysis, ApiError> {
    if !(200..300).contains(&status) {
        // The backend answers unknown tickers with 404 + {"error": ...}; that
        // message is more useful in the toast than the bare status.
        if let Some(err) = serde_json::from_slice::<Value>(body)
            .ok()
            .as_ref()
            .and_then(application_error)
        {
            return Err(err);
        }
        return Err(ApiError::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(ApiError::Malformed(
            "expected a JSON object at the top level".to_string(),
        ));
    }
    if let Some(err) = application_error(&value) {
        return Err(err);
    }

    let raw: RawAnalysis = serde_json::from_value(value)?;
    Analysis::from_raw(raw, request)
}

/// Field deserializers that treat wrong-typed values as absent instead of failing.
mod lenient {
    use super::*;

    fn as_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    fn as_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(value.as_ref().and_then(as_number))
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(value.as_ref().and_then(as_text))
    }

    pub fn numbers<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Option<f64>>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(match value {
            Some(Value::Array(items)) => items.iter().map(as_number).collect(),
            _ => Vec::new(),
        })
    }

    pub fn texts<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(match value {
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| as_text(v).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Decodes a nested object, treating anything that is not an object as absent.
    pub fn object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(d)?;
        match value {
            Some(v @ Value::Object(_)) => serde_json::from_value(v)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
