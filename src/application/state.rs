// Shared dashboard state - per-service health and the connection flag
use crate::domain::service::{HealthStatus, ServiceHealth, ServiceId};
use std::collections::HashMap;
use std::sync::Mutex;

/// Last-value state shared between overlapping poll cycles. Writes are
/// last-writer-wins; nothing here retains history.
#[derive(Debug)]
pub struct DashboardState {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    services: HashMap<ServiceId, ServiceHealth>,
    connected: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                services: HashMap::new(),
                // The page starts out assuming the backends are reachable;
                // the first failed cycle flips this.
                connected: true,
            }),
        }
    }

    pub fn record_health(&self, service: ServiceId, status: HealthStatus) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .services
            .insert(service, ServiceHealth::new(service, status));
    }

    pub fn set_connected(&self, connected: bool) {
        self.inner.lock().unwrap().connected = connected;
    }

    pub fn is_connected(&self) -> bool {
        self.inner.lock().unwrap().connected
    }

    pub fn service_status(&self, service: ServiceId) -> Option<HealthStatus> {
        self.inner
            .lock()
            .unwrap()
            .services
            .get(&service)
            .map(|health| health.status.clone())
    }

    /// Snapshot for the rendering side, in fixed service order.
    pub fn snapshot(&self) -> Vec<ServiceHealth> {
        let inner = self.inner.lock().unwrap();
        ServiceId::ALL
            .iter()
            .filter_map(|service| inner.services.get(service).cloned())
            .collect()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
