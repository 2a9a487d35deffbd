// Scheduler - startup sequence plus the three fixed-period poll timers
use crate::application::bootstrap::Bootstrap;
use crate::application::health_poller::HealthPoller;
use crate::application::metrics_poller::MetricsPoller;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval, interval_at};

pub const METRICS_INTERVAL: Duration = Duration::from_millis(2000);
pub const HEALTH_INTERVAL: Duration = Duration::from_millis(60_000);
pub const COMBINED_STATS_INTERVAL: Duration = Duration::from_millis(60_000);

pub struct Scheduler {
    bootstrap: Arc<Bootstrap>,
    health_poller: Arc<HealthPoller>,
    metrics_poller: Arc<MetricsPoller>,
}

impl Scheduler {
    pub fn new(
        bootstrap: Arc<Bootstrap>,
        health_poller: Arc<HealthPoller>,
        metrics_poller: Arc<MetricsPoller>,
    ) -> Self {
        Self {
            bootstrap,
            health_poller,
            metrics_poller,
        }
    }

    /// Run the one-shot bootstrap, then arm the recurring timers for the
    /// life of the process. The timers are armed even when bootstrap fails;
    /// their ticks just keep failing and logging on their own.
    pub async fn start(&self) {
        if self.bootstrap.run().await.is_err() {
            tracing::warn!("continuing with recurring polls despite failed bootstrap");
        }

        // Metrics tick immediately for the first paint; the two slow timers
        // wait a full period since bootstrap already ran a health cycle.
        let metrics = self.metrics_poller.clone();
        tokio::spawn(async move {
            let mut ticks = interval(METRICS_INTERVAL);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                let metrics = metrics.clone();
                tokio::spawn(async move { metrics.poll_once().await });
            }
        });

        let health = self.health_poller.clone();
        tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + HEALTH_INTERVAL, HEALTH_INTERVAL);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                let health = health.clone();
                // Cycles overlap if a slow retry sequence outlives the period
                tokio::spawn(async move { health.poll_all().await });
            }
        });

        let combined = self.metrics_poller.clone();
        tokio::spawn(async move {
            let mut ticks = interval_at(
                Instant::now() + COMBINED_STATS_INTERVAL,
                COMBINED_STATS_INTERVAL,
            );
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                let combined = combined.clone();
                tokio::spawn(async move { combined.refresh_combined().await });
            }
        });
    }
}
