// Reqwest-backed dashboard gateway with bounded linear-backoff retries
use crate::application::gateway::{
    DashboardConfig, DashboardGateway, FetchError, HealthPayload, TransportError,
};
use crate::domain::service::ServiceId;
use crate::domain::stats::{SystemInfo, SystemStats};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_BASE: Duration = Duration::from_millis(1000);

/// Run one GET attempt up to `MAX_ATTEMPTS` times. Attempt `i` failing waits
/// `BACKOFF_BASE * i` before the next try (1s, then 2s); the last failure is
/// surfaced as-is. No jitter, no cancellation once started.
async fn retry_get<T, F, Fut>(url: &str, mut attempt_fn: F) -> Result<T, TransportError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TransportError>>,
{
    let mut attempt = 1;
    loop {
        match attempt_fn().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < MAX_ATTEMPTS => {
                let backoff = BACKOFF_BASE * attempt;
                tracing::warn!(
                    url,
                    attempt,
                    "request failed, retrying in {}ms: {}",
                    backoff.as_millis(),
                    e
                );
                sleep(backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpDashboardGateway {
    client: Client,
    base_url: String,
}

impl HttpDashboardGateway {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn attempt(&self, url: &str) -> Result<Response, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Network {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = retry_get(&url, || self.attempt(&url)).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::MalformedResponse { url, source })
    }
}

#[async_trait]
impl DashboardGateway for HttpDashboardGateway {
    async fn service_health(&self, service: ServiceId) -> Result<HealthPayload, FetchError> {
        self.get_json(&format!("/health/{}", service.health_key()))
            .await
    }

    async fn system_stats(&self) -> Result<SystemStats, FetchError> {
        self.get_json("/system-stats").await
    }

    async fn uptime(&self) -> Result<serde_json::Value, FetchError> {
        self.get_json("/uptime").await
    }

    async fn dashboard_config(&self) -> Result<DashboardConfig, FetchError> {
        self.get_json("/dashboard-config").await
    }

    async fn system_info(&self) -> Result<SystemInfo, FetchError> {
        self.get_json("/system-info").await
    }
}
