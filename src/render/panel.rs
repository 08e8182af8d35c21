//! Predictions panel
//!
//! Four fixed cards built from one analysis. The panel is regenerated from
//! scratch on every render and can be emitted as an HTML fragment.

use super::format::{format_price, format_volume, to_fixed};
use crate::analysis::Analysis;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelCard {
    pub title: &'static str,
    pub rows: Vec<PanelRow>,
}

impl PanelCard {
    fn new(title: &'static str, rows: Vec<(&'static str, String)>) -> Self {
        Self {
            title,
            rows: rows
                .into_iter()
                .map(|(label, value)| PanelRow { label, value })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionsPanel {
    pub cards: Vec<PanelCard>,
}

impl PredictionsPanel {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let indicators = &analysis.indicators;
        let predictions = &analysis.predictions;
        let trend = &analysis.trend;
        let risk = &analysis.risk;

        Self {
            cards: vec![
                PanelCard::new(
                    "Technical Indicators",
                    vec![
                        ("RSI", to_fixed(analysis.rsi, 2)),
                        ("MACD", to_fixed(indicators.macd, 4)),
                        ("MA20", format_price(indicators.ma20)),
                        ("MA50", format_price(indicators.ma50)),
                    ],
                ),
                PanelCard::new(
                    "Price Predictions",
                    vec![
                        ("Next Hour", format_price(predictions.next_hour)),
                        ("Next Day", format_price(predictions.next_day)),
                        ("Next Week", format_price(predictions.next_week)),
                        ("Confidence", format!("{}%", to_fixed(predictions.confidence, 0))),
                    ],
                ),
                PanelCard::new(
                    "Trend Analysis",
                    vec![
                        ("Short Term", trend.short_term.clone()),
                        ("Medium Term", trend.medium_term.clone()),
                        ("Long Term", trend.long_term.clone()),
                    ],
                ),
                PanelCard::new(
                    "Risk Analysis",
                    vec![
                        ("Volume", format_volume(risk.volume)),
                        ("Volatility", format!("{}%", to_fixed(risk.volatility, 2))),
                        ("Risk Level", risk.risk_level.clone()),
                        ("Support", format_price(risk.support)),
                        ("Resistance", format_price(risk.resistance)),
                    ],
                ),
            ],
        }
    }

    /// HTML fragment that replaces the predictions container's content.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Err(e) = self.write_html(&mut html) {
            log::warn!("Failed to build predictions HTML: {}", e);
        }
        html
    }

    pub fn write_html(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for card in &self.cards {
            writeln!(out, r#"<div class="prediction-card">"#)?;
            writeln!(
                out,
                r#"  <h3 class="prediction-title">{}</h3>"#,
                escape_html(card.title)
            )?;
            for row in &card.rows {
                writeln!(
                    out,
                    r#"  <div class="prediction-item"><span class="prediction-label">{}:</span> <span class="prediction-value">{}</span></div>"#,
                    escape_html(row.label),
                    escape_html(&row.value)
                )?;
            }
            writeln!(out, "</div>")?;
        }
        Ok(())
    }
}

// Trend and risk strings come straight from the server.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
