// Host metrics and identity domain models
use serde::Deserialize;

/// Snapshot from `/system-stats`. Fields the endpoint omits stay `None` and
/// must not overwrite a previously displayed value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemStats {
    pub cpu_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub disk_percent: Option<f64>,
}

/// Host identity from `/system-info`. Fetched once at startup, immutable for
/// the rest of the session.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    #[serde(rename = "ipAddress")]
    pub ip_address: String,
}
