// Tracing-backed view - renders dashboard updates as log events
use crate::domain::service::{HealthStatus, ServiceId};
use crate::domain::stats::SystemInfo;
use crate::presentation::view::{DashboardView, StatKind};

/// Default display surface for the binary: every update becomes a tracing
/// event, which is what rendering means for a headless deployment.
#[derive(Debug, Default)]
pub struct LogView;

impl DashboardView for LogView {
    fn show_loading(&self) {
        tracing::info!("loading dashboard data");
    }

    fn hide_loading(&self) {
        tracing::info!("loading finished");
    }

    fn update_health_indicator(&self, service: ServiceId, status: &HealthStatus) {
        let visual = if status.is_up() { "up" } else { "down" };
        tracing::info!(
            service = %service,
            status = status.as_str(),
            visual,
            "health indicator updated"
        );
    }

    fn update_connection_status(&self, connected: bool) {
        if connected {
            tracing::info!("connection status: SYSTEM ONLINE");
        } else {
            tracing::warn!("connection status: CONNECTION ERROR");
        }
    }

    fn update_stat(&self, stat: StatKind, value: f64) {
        tracing::info!("[{}: {:.1}%]", stat.label(), value);
    }

    fn set_service_link(&self, service: ServiceId, url: &str) {
        tracing::info!(slot = %service.link_id(), url, "service link updated");
    }

    fn render_system_info(&self, info: &SystemInfo) {
        tracing::info!("{} ({})", info.hostname, info.ip_address);
    }

    fn render_bootstrap_error(&self) {
        tracing::error!("Error loading dashboard");
    }
}
