use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use gluco_guide_domain::entities::{HealthInput, PredictionResult};

use crate::config::ClientConfig;
use crate::error::PredictionClientError;

/// Health report served by GET /api/health
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Service status, "healthy" when the model is ready
    pub status: String,

    /// Whether the prediction model is loaded
    #[serde(default)]
    pub model_loaded: bool,

    /// Service version string, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Operations exposed by the prediction service
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submit a health input for classification
    async fn predict(&self, input: &HealthInput)
        -> Result<PredictionResult, PredictionClientError>;

    /// Probe service liveness and model readiness
    async fn check_health(&self) -> Result<ServiceHealth, PredictionClientError>;

    /// Fetch the rendered PDF report for a health input
    async fn fetch_report(&self, input: &HealthInput) -> Result<Vec<u8>, PredictionClientError>;
}

/// HTTP client for the prediction service
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    /// Create a client for the given endpoint configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// The endpoint configuration in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check the status line, then decode the JSON body
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PredictionClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(PredictionClientError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    #[instrument(skip(self, input))]
    async fn predict(
        &self,
        input: &HealthInput,
    ) -> Result<PredictionResult, PredictionClientError> {
        let url = self.config.endpoint("/api/predict");
        debug!("POST {}", url);

        let response = self.http.post(&url).json(input).send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn check_health(&self) -> Result<ServiceHealth, PredictionClientError> {
        let url = self.config.endpoint("/api/health");
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, input))]
    async fn fetch_report(&self, input: &HealthInput) -> Result<Vec<u8>, PredictionClientError> {
        let url = self.config.endpoint("/api/report");
        debug!("POST {}", url);

        let response = self.http.post(&url).json(input).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PredictionClientError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Create the default client for the service named by the environment
pub fn create_default_prediction_client() -> impl PredictionApi {
    PredictionClient::from_env()
}
