use crate::analysis::error::ApiError;
use crate::environment::Environment;

pub(crate) mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::AnalysisClient;
pub use request::{AnalysisRequest, Interval, Ticker, ValidationError};
pub use response::{Analysis, ChartData, Signal};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AnalysisApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Requests an analysis for one ticker and interval.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, ApiError>;
}
