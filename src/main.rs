// Main entry point - Dependency injection and scheduler startup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::bootstrap::Bootstrap;
use crate::application::health_poller::HealthPoller;
use crate::application::metrics_poller::MetricsPoller;
use crate::application::scheduler::Scheduler;
use crate::application::state::DashboardState;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::http_gateway::HttpDashboardGateway;
use crate::presentation::log_view::LogView;
use crate::presentation::view::DashboardView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_settings()?;

    // Infrastructure layer
    let gateway = Arc::new(HttpDashboardGateway::new(
        settings.endpoints.base_url.clone(),
    ));

    // Shared state and display surface
    let state = Arc::new(DashboardState::new());
    let view: Arc<dyn DashboardView> = Arc::new(LogView);

    // Application layer
    let health_poller = Arc::new(HealthPoller::new(
        gateway.clone(),
        state.clone(),
        view.clone(),
    ));
    let metrics_poller = Arc::new(MetricsPoller::new(gateway.clone(), view.clone()));
    let bootstrap = Arc::new(Bootstrap::new(
        gateway.clone(),
        view.clone(),
        health_poller.clone(),
    ));

    let scheduler = Scheduler::new(bootstrap, health_poller, metrics_poller);

    tracing::info!(
        "starting rig-dashboard poller against {}",
        settings.endpoints.base_url
    );
    scheduler.start().await;

    // The timers run until the process is stopped
    tokio::signal::ctrl_c().await?;
    Ok(())
}
