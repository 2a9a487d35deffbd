// Health poller - one concurrent check per monitored service
use crate::application::gateway::DashboardGateway;
use crate::application::state::DashboardState;
use crate::domain::service::{HealthStatus, ServiceId};
use crate::presentation::view::DashboardView;
use futures::future::join_all;
use std::sync::Arc;

pub struct HealthPoller {
    gateway: Arc<dyn DashboardGateway>,
    state: Arc<DashboardState>,
    view: Arc<dyn DashboardView>,
}

impl HealthPoller {
    pub fn new(
        gateway: Arc<dyn DashboardGateway>,
        state: Arc<DashboardState>,
        view: Arc<dyn DashboardView>,
    ) -> Self {
        Self {
            gateway,
            state,
            view,
        }
    }

    /// Run one health poll cycle. Checks start in `ServiceId::ALL` order and
    /// run concurrently; there is no batch outcome - each service's result
    /// lands on its own indicator, and completion order is unspecified.
    pub async fn poll_all(&self) {
        join_all(ServiceId::ALL.iter().map(|&service| self.check(service))).await;
    }

    async fn check(&self, service: ServiceId) {
        match self.gateway.service_health(service).await {
            Ok(payload) => {
                let status = HealthStatus::from_raw(&payload.status);
                self.state.record_health(service, status.clone());
                self.view.update_health_indicator(service, &status);

                // Only flip the banner when it was showing an error
                if !self.state.is_connected() {
                    self.state.set_connected(true);
                    self.view.update_connection_status(true);
                }
            }
            Err(e) => {
                tracing::error!(service = %service, "health check failed: {}", e);
                self.state.record_health(service, HealthStatus::Down);
                self.view.update_health_indicator(service, &HealthStatus::Down);
                self.state.set_connected(false);
                self.view.update_connection_status(false);
            }
        }
    }
}
