// Application layer - Use cases driving the dashboard
pub mod bootstrap;
pub mod gateway;
pub mod health_poller;
pub mod metrics_poller;
pub mod scheduler;
pub mod state;

#[cfg(test)]
pub mod test_support;
