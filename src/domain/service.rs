// Monitored service domain model
use chrono::{DateTime, Utc};
use std::fmt;

/// The fixed set of backends monitored by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    Grafana,
    Influx,
    Portainer,
    Redis,
    Telegraf,
    Vscode,
    Ecat,
    Controls,
}

impl ServiceId {
    /// Fixed poll order for a health cycle.
    pub const ALL: [ServiceId; 8] = [
        ServiceId::Grafana,
        ServiceId::Influx,
        ServiceId::Portainer,
        ServiceId::Redis,
        ServiceId::Telegraf,
        ServiceId::Vscode,
        ServiceId::Ecat,
        ServiceId::Controls,
    ];

    /// Path segment of the health endpoint (`/health/{key}`).
    pub fn health_key(&self) -> &'static str {
        match self {
            ServiceId::Grafana => "grafana",
            ServiceId::Influx => "influx",
            ServiceId::Portainer => "portainer",
            ServiceId::Redis => "redis",
            ServiceId::Telegraf => "telegraf",
            ServiceId::Vscode => "vscode",
            ServiceId::Ecat => "ecat",
            ServiceId::Controls => "controls",
        }
    }

    /// Key inside the dashboard config `urls` map. Not the same namespace as
    /// the health key: the config publishes influx under `influxdb`.
    pub fn config_key(&self) -> &'static str {
        match self {
            ServiceId::Influx => "influxdb",
            other => other.health_key(),
        }
    }

    /// Identifier of the link slot this service's URL lands on.
    pub fn link_id(&self) -> String {
        format!("{}Link", self.health_key())
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.health_key())
    }
}

/// Health reported by a service. Anything other than `Up` renders as down,
/// but the raw wire value is kept and forwarded to the indicator update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Up,
    Down,
    Other(String),
}

impl HealthStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "up" => HealthStatus::Up,
            "down" => HealthStatus::Down,
            other => HealthStatus::Other(other.to_string()),
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, HealthStatus::Up)
    }

    /// Raw wire value, as forwarded to the rendering layer.
    pub fn as_str(&self) -> &str {
        match self {
            HealthStatus::Up => "up",
            HealthStatus::Down => "down",
            HealthStatus::Other(raw) => raw,
        }
    }
}

/// Last observed health of one service. Superseded on every poll cycle,
/// never merged with the previous value.
#[derive(Debug, Clone)]
pub struct ServiceHealth {
    pub service: ServiceId,
    pub status: HealthStatus,
    pub last_checked: DateTime<Utc>,
}

impl ServiceHealth {
    pub fn new(service: ServiceId, status: HealthStatus) -> Self {
        Self {
            service,
            status,
            last_checked: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_asymmetry() {
        assert_eq!(ServiceId::Influx.health_key(), "influx");
        assert_eq!(ServiceId::Influx.config_key(), "influxdb");
        assert_eq!(ServiceId::Influx.link_id(), "influxLink");

        // Every other service uses the same key in both namespaces
        for service in ServiceId::ALL {
            if service != ServiceId::Influx {
                assert_eq!(service.health_key(), service.config_key());
            }
        }
    }

    #[test]
    fn test_status_from_raw_preserves_unknown_values() {
        assert_eq!(HealthStatus::from_raw("up"), HealthStatus::Up);
        assert_eq!(HealthStatus::from_raw("down"), HealthStatus::Down);

        let degraded = HealthStatus::from_raw("degraded");
        assert_eq!(degraded, HealthStatus::Other("degraded".to_string()));
        assert!(!degraded.is_up());
        assert_eq!(degraded.as_str(), "degraded");
    }
}
