//! Periodic status reporting.
//!
//! # Responsibilities
//! - Snapshot store counters on a fixed interval
//! - Emit each snapshot as a structured log line and a size gauge
//! - Stop promptly once shutdown fires

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::ReporterConfig;
use crate::lifecycle::ShutdownListener;
use crate::observability::metrics;
use crate::store::Store;

pub struct Reporter {
    store: Arc<Store>,
    interval: Duration,
}

impl Reporter {
    pub fn new(store: Arc<Store>, interval: Duration) -> Self {
        Self { store, interval }
    }

    pub fn from_config(store: Arc<Store>, config: &ReporterConfig) -> Self {
        Self::new(store, Duration::from_secs(config.interval_secs))
    }

    /// Run until `shutdown` fires. Returns the number of reports emitted.
    pub async fn run(self, mut shutdown: ShutdownListener) -> u64 {
        tracing::info!(interval_secs = self.interval.as_secs(), "Reporter starting");

        // First report lands one full interval after start.
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut reports = 0;
        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!(reports, "Reporter stopping");
                    break;
                }
                _ = ticker.tick() => {
                    self.report();
                    reports += 1;
                }
            }
        }
        reports
    }

    fn report(&self) {
        // Lock is held only inside current_stats().
        let stats = self.store.current_stats();
        metrics::record_database_size(stats.database_size);
        tracing::info!(
            requests = stats.requests,
            database_size = stats.database_size,
            "Server status"
        );
    }
}
