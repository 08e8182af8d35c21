//! Error handling for the analysis module

use crate::consts::dashboard_consts::GENERIC_FAILURE_MESSAGE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered outside the 2xx range without an error payload.
    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was JSON but not an analysis payload.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The server reported a failure through the `error` field.
    #[error("{message}")]
    Application { message: String },
}

impl ApiError {
    /// Text shown in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application { message } if !message.trim().is_empty() => message.clone(),
            ApiError::Http { .. } | ApiError::Malformed(_) => self.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
