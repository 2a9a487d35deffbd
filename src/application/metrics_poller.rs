// Metrics poller - fast host-stats refresh plus the slower combined tick
use crate::application::gateway::DashboardGateway;
use crate::domain::stats::SystemStats;
use crate::presentation::view::{DashboardView, StatKind};
use std::sync::Arc;

pub struct MetricsPoller {
    gateway: Arc<dyn DashboardGateway>,
    view: Arc<dyn DashboardView>,
}

impl MetricsPoller {
    pub fn new(gateway: Arc<dyn DashboardGateway>, view: Arc<dyn DashboardView>) -> Self {
        Self { gateway, view }
    }

    /// One fast stats poll. Failures are logged and isolated: they never
    /// touch the connection banner, and the displays keep their last values.
    pub async fn poll_once(&self) {
        match self.gateway.system_stats().await {
            Ok(stats) => self.apply(&stats),
            Err(e) => tracing::warn!("system stats poll failed: {}", e),
        }
    }

    /// The slow combined refresh: stats and uptime fetched together. The
    /// uptime body is opaque; only the stats are applied.
    pub async fn refresh_combined(&self) {
        let (stats, uptime) = tokio::join!(self.gateway.system_stats(), self.gateway.uptime());
        match (stats, uptime) {
            (Ok(stats), Ok(_)) => self.apply(&stats),
            (Err(e), _) => tracing::warn!("combined stats refresh failed: {}", e),
            (_, Err(e)) => tracing::warn!("uptime refresh failed: {}", e),
        }
    }

    // Each field updates independently; an endpoint omitting one leaves the
    // previous value on screen.
    fn apply(&self, stats: &SystemStats) {
        if let Some(cpu) = stats.cpu_percent {
            self.view.update_stat(StatKind::Cpu, cpu);
        }
        if let Some(memory) = stats.memory_percent {
            self.view.update_stat(StatKind::Memory, memory);
        }
        if let Some(disk) = stats.disk_percent {
            self.view.update_stat(StatKind::Disk, disk);
        }
    }
}
