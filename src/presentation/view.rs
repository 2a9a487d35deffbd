// Rendering seam - what the polling core needs from a display surface
use crate::domain::service::{HealthStatus, ServiceId};
use crate::domain::stats::SystemInfo;

/// One of the three host stat displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Cpu,
    Memory,
    Disk,
}

impl StatKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Cpu => "cpu",
            StatKind::Memory => "mem",
            StatKind::Disk => "disk",
        }
    }
}

/// Display surface driven by the pollers. Implementations only set what they
/// are told to; a skipped call leaves the previous value on screen.
pub trait DashboardView: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn update_health_indicator(&self, service: ServiceId, status: &HealthStatus);
    fn update_connection_status(&self, connected: bool);
    fn update_stat(&self, stat: StatKind, value: f64);
    fn set_service_link(&self, service: ServiceId, url: &str);
    fn render_system_info(&self, info: &SystemInfo);
    fn render_bootstrap_error(&self);
}

/// Shows the loading indicator for as long as it lives. Hiding happens on
/// drop, so no exit path can leave the indicator visible.
pub struct LoadingGuard<'a> {
    view: &'a dyn DashboardView,
}

impl<'a> LoadingGuard<'a> {
    pub fn new(view: &'a dyn DashboardView) -> Self {
        view.show_loading();
        Self { view }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.view.hide_loading();
    }
}
