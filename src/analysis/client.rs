//! Analysis API client
//!
//! Posts analysis requests to the backend and decodes the answer.

use crate::analysis::AnalysisApi;
use crate::analysis::error::ApiError;
use crate::analysis::request::AnalysisRequest;
use crate::analysis::response::{Analysis, decode_analysis};
use crate::consts::dashboard_consts::{ANALYZE_ENDPOINT, REQUEST_TIMEOUT_SECS};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("market-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    environment: Environment,
}

impl AnalysisClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl AnalysisApi for AnalysisClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, ApiError> {
        let url = self.build_url(ANALYZE_ENDPOINT);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_analysis(status, &body, request)
    }
}
