// Gateway trait for the dashboard's HTTP backends
use crate::domain::service::ServiceId;
use crate::domain::stats::{SystemInfo, SystemStats};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Network or HTTP failure, surfaced to callers only after retries are
/// exhausted.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("GET {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure of a single gateway operation. The health poller treats a
/// malformed body exactly like a transport failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Either startup fetch failing fails the whole bootstrap. Fatal to the
/// initial render, not to the process.
#[derive(Debug, Error)]
#[error("bootstrap fetch failed: {0}")]
pub struct BootstrapError(#[from] pub FetchError);

/// Body of `/health/{service}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthPayload {
    pub status: String,
}

/// Body of `/dashboard-config`: per-service link targets, keyed by
/// `ServiceId::config_key`, each nullable.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub urls: HashMap<String, Option<String>>,
}

impl DashboardConfig {
    /// URL configured for a service, if present and non-empty.
    pub fn url_for(&self, service: ServiceId) -> Option<&str> {
        self.urls
            .get(service.config_key())
            .and_then(|url| url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[async_trait]
pub trait DashboardGateway: Send + Sync {
    /// GET `/health/{service}`
    async fn service_health(&self, service: ServiceId) -> Result<HealthPayload, FetchError>;

    /// GET `/system-stats`
    async fn system_stats(&self) -> Result<SystemStats, FetchError>;

    /// GET `/uptime` - opaque body, only success/failure matters here
    async fn uptime(&self) -> Result<serde_json::Value, FetchError>;

    /// GET `/dashboard-config`
    async fn dashboard_config(&self) -> Result<DashboardConfig, FetchError>;

    /// GET `/system-info`
    async fn system_info(&self) -> Result<SystemInfo, FetchError>;
}
