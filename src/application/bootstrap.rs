// Bootstrap sequence - one-shot config and identity fetch at startup
use crate::application::gateway::{BootstrapError, DashboardConfig, DashboardGateway};
use crate::application::health_poller::HealthPoller;
use crate::domain::service::ServiceId;
use crate::presentation::view::{DashboardView, LoadingGuard};
use std::sync::Arc;

pub struct Bootstrap {
    gateway: Arc<dyn DashboardGateway>,
    view: Arc<dyn DashboardView>,
    health_poller: Arc<HealthPoller>,
}

impl Bootstrap {
    pub fn new(
        gateway: Arc<dyn DashboardGateway>,
        view: Arc<dyn DashboardView>,
        health_poller: Arc<HealthPoller>,
    ) -> Self {
        Self {
            gateway,
            view,
            health_poller,
        }
    }

    /// Fetch dashboard config and host identity together; both must succeed
    /// or the bootstrap fails as a whole. The loading indicator is hidden on
    /// every exit path by the guard.
    pub async fn run(&self) -> Result<(), BootstrapError> {
        let _loading = LoadingGuard::new(self.view.as_ref());

        let (dashboard_config, system_info) = match tokio::try_join!(
            self.gateway.dashboard_config(),
            self.gateway.system_info()
        ) {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::error!("dashboard bootstrap failed: {}", e);
                self.view.render_bootstrap_error();
                return Err(BootstrapError(e));
            }
        };

        self.apply_config(&dashboard_config);
        self.view.render_system_info(&system_info);

        // First health cycle right away instead of waiting a full period
        self.health_poller.poll_all().await;
        Ok(())
    }

    // Services without a configured URL keep their default link target
    fn apply_config(&self, dashboard_config: &DashboardConfig) {
        for service in ServiceId::ALL {
            if let Some(url) = dashboard_config.url_for(service) {
                self.view.set_service_link(service, url);
            }
        }
    }
}
