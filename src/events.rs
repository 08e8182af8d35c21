//! Event System
//!
//! Activity log entries produced by the dashboard controller

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Input handling and submission bookkeeping.
    Controller,
    /// The analysis request and its response.
    Network,
    /// Render targets (stats, panel, chart).
    Renderer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn controller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Controller, msg, event_type, log_level)
    }

    pub fn network_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Network, msg, event_type, log_level)
    }

    pub fn renderer_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Renderer, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
