// Test doubles shared by the poller tests
use crate::application::gateway::{
    DashboardConfig, DashboardGateway, FetchError, HealthPayload, TransportError,
};
use crate::domain::service::{HealthStatus, ServiceId};
use crate::domain::stats::{SystemInfo, SystemStats};
use crate::presentation::view::{DashboardView, StatKind};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

fn transport_error(url: &str) -> FetchError {
    FetchError::Transport(TransportError::Status {
        url: url.to_string(),
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    })
}

/// Gateway double with per-endpoint programmed outcomes. Anything left
/// unprogrammed fails with a transport error.
#[derive(Default)]
pub struct MockGateway {
    pub health: HashMap<ServiceId, String>,
    pub stats: Option<SystemStats>,
    pub uptime_ok: bool,
    pub config: Option<DashboardConfig>,
    pub info: Option<SystemInfo>,
    health_calls: AtomicU32,
    stats_calls: AtomicU32,
    uptime_calls: AtomicU32,
}

impl MockGateway {
    pub fn health_calls(&self) -> u32 {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn stats_calls(&self) -> u32 {
        self.stats_calls.load(Ordering::SeqCst)
    }

    pub fn uptime_calls(&self) -> u32 {
        self.uptime_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardGateway for MockGateway {
    async fn service_health(&self, service: ServiceId) -> Result<HealthPayload, FetchError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        match self.health.get(&service) {
            Some(raw) => Ok(HealthPayload {
                status: raw.clone(),
            }),
            None => Err(transport_error(&format!(
                "/health/{}",
                service.health_key()
            ))),
        }
    }

    async fn system_stats(&self) -> Result<SystemStats, FetchError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.stats
            .clone()
            .ok_or_else(|| transport_error("/system-stats"))
    }

    async fn uptime(&self) -> Result<serde_json::Value, FetchError> {
        self.uptime_calls.fetch_add(1, Ordering::SeqCst);
        if self.uptime_ok {
            Ok(serde_json::json!({ "uptime": "1 day, 2:03" }))
        } else {
            Err(transport_error("/uptime"))
        }
    }

    async fn dashboard_config(&self) -> Result<DashboardConfig, FetchError> {
        self.config
            .clone()
            .ok_or_else(|| transport_error("/dashboard-config"))
    }

    async fn system_info(&self) -> Result<SystemInfo, FetchError> {
        self.info
            .clone()
            .ok_or_else(|| transport_error("/system-info"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ShowLoading,
    HideLoading,
    Indicator(ServiceId, String),
    Connection(bool),
    Stat(StatKind, f64),
    Link(ServiceId, String),
    SystemInfo(String),
    BootstrapError,
}

/// View double recording every call in order.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn recorded(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Raw status most recently forwarded for a service.
    pub fn indicator(&self, service: ServiceId) -> Option<String> {
        self.recorded().iter().rev().find_map(|event| match event {
            ViewEvent::Indicator(recorded, raw) if *recorded == service => Some(raw.clone()),
            _ => None,
        })
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl DashboardView for RecordingView {
    fn show_loading(&self) {
        self.push(ViewEvent::ShowLoading);
    }

    fn hide_loading(&self) {
        self.push(ViewEvent::HideLoading);
    }

    fn update_health_indicator(&self, service: ServiceId, status: &HealthStatus) {
        self.push(ViewEvent::Indicator(service, status.as_str().to_string()));
    }

    fn update_connection_status(&self, connected: bool) {
        self.push(ViewEvent::Connection(connected));
    }

    fn update_stat(&self, stat: StatKind, value: f64) {
        self.push(ViewEvent::Stat(stat, value));
    }

    fn set_service_link(&self, service: ServiceId, url: &str) {
        self.push(ViewEvent::Link(service, url.to_string()));
    }

    fn render_system_info(&self, info: &SystemInfo) {
        self.push(ViewEvent::SystemInfo(format!(
            "{} ({})",
            info.hostname, info.ip_address
        )));
    }

    fn render_bootstrap_error(&self) {
        self.push(ViewEvent::BootstrapError);
    }
}
