//! numtally API client implementation.

use numtally_core::{HealthStatus, SumRequest, SumResponse};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

const SUM_PATH: &str = "/api/sum";
const HEALTH_PATH: &str = "/health";

/// Async client for the numtally API.
#[derive(Clone, Debug)]
pub struct NumtallyClient {
    config: ClientConfig,
    http: Client,
}

impl NumtallyClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    /// Returns [`Error::Build`] if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Build)?;
        Ok(Self { config, http })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the server to sum `numbers`.
    ///
    /// Any response carrying a JSON envelope is returned as-is, including
    /// validation (400) and overflow (500) rejections; inspect
    /// [`SumResponse::success`].
    ///
    /// # Errors
    /// [`Error::Network`] or [`Error::Timeout`] if the request fails, and
    /// [`Error::UnexpectedResponse`] if the body is not an envelope (for
    /// example the plain-text 429 from the rate limiter).
    pub async fn calculate_sum(&self, numbers: &[f64]) -> Result<SumResponse> {
        let url = self.config.url(SUM_PATH);
        tracing::debug!(%url, count = numbers.len(), "Requesting sum");

        let response = self
            .http
            .post(&url)
            .json(&SumRequest::new(numbers))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        match serde_json::from_str::<SumResponse>(&body) {
            Ok(envelope) => {
                if !envelope.success {
                    tracing::debug!(
                        status = status.as_u16(),
                        error = envelope.error.as_deref().unwrap_or_default(),
                        "Sum rejected"
                    );
                }
                Ok(envelope)
            }
            Err(e) => {
                tracing::warn!(status = status.as_u16(), "Response is not a sum envelope: {e}");
                Err(Error::unexpected(status.as_u16(), body))
            }
        }
    }

    /// Fetch the server's health document.
    ///
    /// # Errors
    /// [`Error::Network`] or [`Error::Timeout`] if the request fails, and
    /// [`Error::UnexpectedResponse`] on a non-success status or a body that
    /// is not a health document.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = self.config.url(HEALTH_PATH);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::unexpected(status.as_u16(), body));
        }
        serde_json::from_str(&body).map_err(|_| Error::unexpected(status.as_u16(), body))
    }
}
