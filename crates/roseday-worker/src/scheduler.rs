//! Periodic wake scheduling.
//!
//! The original deployment registers a best-effort hourly wake-up under the
//! `hourly-notify` tag. [`WakeScheduler`] reproduces that trigger for hosts
//! without a native periodic-sync facility: a loop that sleeps for the
//! configured interval (with jitter to avoid thundering herd), dispatches a
//! [`WorkerEvent::PeriodicSync`] to the worker, and awaits its completion
//! before sleeping again. Delivery stays best-effort: dispatch failures are
//! logged, never fatal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::event::WorkerEvent;
use crate::host::Host;
use crate::worker::{HOURLY_NOTIFY_TAG, Worker};

/// Wake scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Base interval between wakes.
    pub interval: Duration,
    /// Maximum jitter as a fraction of the interval (0.0–1.0).
    pub jitter_fraction: f64,
    /// Tag carried by the dispatched periodic-sync events.
    pub tag: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3600),
            jitter_fraction: 0.05,
            tag: HOURLY_NOTIFY_TAG.to_string(),
        }
    }
}

impl SchedulerConfig {
    /// Creates a config with the given wake interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ..Default::default()
        }
    }

    /// Builder: set the jitter fraction.
    pub fn with_jitter(mut self, fraction: f64) -> Self {
        self.jitter_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Builder: set the event tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Calculates the next wake delay with jitter applied.
    pub fn next_wake_delay(&self) -> Duration {
        let base = self.interval.as_secs_f64();
        let jitter = rand_jitter(base * self.jitter_fraction);
        Duration::from_secs_f64((base + jitter).max(0.0))
    }
}

/// Simple pseudo-random jitter in [-range, range], seeded from the clock.
fn rand_jitter(range: f64) -> f64 {
    use std::time::SystemTime;

    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();

    let fraction = (nanos as f64) / 1_000_000_000.0;
    (fraction * 2.0 - 1.0) * range
}

/// Handle for stopping a running scheduler.
#[derive(Clone, Debug)]
pub struct SchedulerStop {
    stop_tx: Arc<watch::Sender<bool>>,
}

impl SchedulerStop {
    /// Stops the scheduler after its current dispatch settles.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }
}

/// Drives periodic wake events into a worker.
pub struct WakeScheduler {
    config: SchedulerConfig,
    stop_tx: Arc<watch::Sender<bool>>,
    stop_rx: watch::Receiver<bool>,
}

impl WakeScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        Self {
            config,
            stop_tx: Arc::new(stop_tx),
            stop_rx,
        }
    }

    /// Returns a handle that stops this scheduler.
    pub fn stop_handle(&self) -> SchedulerStop {
        SchedulerStop {
            stop_tx: self.stop_tx.clone(),
        }
    }

    /// Runs the wake loop until stopped.
    ///
    /// Each wake dispatches one periodic-sync event and awaits the worker's
    /// dispatch future, honoring the keep-alive contract.
    pub async fn run<H: Host>(&self, worker: &Worker<H>) {
        let mut stop_rx = self.stop_rx.clone();

        info!(
            interval_secs = self.config.interval.as_secs(),
            tag = %self.config.tag,
            "wake scheduler started"
        );

        loop {
            let delay = self.config.next_wake_delay();
            debug!(delay_secs = delay.as_secs(), "scheduling next wake");

            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let event = WorkerEvent::periodic_sync(self.config.tag.clone());
                    match worker.dispatch(event).await {
                        Ok(outcome) => debug!(?outcome, "periodic wake handled"),
                        Err(error) => warn!(error = %error, "periodic wake failed"),
                    }
                }
                result = stop_rx.changed() => {
                    if result.is_err() || *stop_rx.borrow() {
                        info!("wake scheduler stopping");
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::error::HostError;
    use crate::host::{NotificationHandle, NotificationOptions, WindowClient};

    #[derive(Default)]
    struct CountingHost {
        shows: Arc<AtomicU32>,
    }

    impl Host for CountingHost {
        async fn skip_waiting(&self) -> Result<(), HostError> {
            Ok(())
        }

        async fn claim_clients(&self) -> Result<(), HostError> {
            Ok(())
        }

        async fn show_notification(
            &self,
            _title: &str,
            _options: &NotificationOptions,
        ) -> Result<NotificationHandle, HostError> {
            let n = self.shows.fetch_add(1, Ordering::SeqCst);
            Ok(NotificationHandle::new(format!("n-{n}")))
        }

        async fn close_notification(&self, _handle: &NotificationHandle) -> Result<(), HostError> {
            Ok(())
        }

        async fn window_clients(&self) -> Result<Vec<WindowClient>, HostError> {
            Ok(Vec::new())
        }

        async fn focus_client(&self, _id: &str) -> Result<(), HostError> {
            Ok(())
        }

        async fn open_window(&self, _path: &str) -> Result<(), HostError> {
            Ok(())
        }
    }

    #[test]
    fn config_default() {
        let config = SchedulerConfig::default();
        assert_eq!(config.interval, Duration::from_secs(3600));
        assert_eq!(config.tag, HOURLY_NOTIFY_TAG);
        assert!(config.jitter_fraction > 0.0);
    }

    #[test]
    fn next_wake_delay_within_jitter_bounds() {
        let config = SchedulerConfig::new(Duration::from_secs(60)).with_jitter(0.1);
        let delay = config.next_wake_delay();
        assert!(delay.as_secs_f64() >= 54.0);
        assert!(delay.as_secs_f64() <= 66.0);
    }

    #[test]
    fn zero_jitter_is_exact() {
        let config = SchedulerConfig::new(Duration::from_secs(60)).with_jitter(0.0);
        assert_eq!(config.next_wake_delay(), Duration::from_secs(60));
    }

    #[tokio::test]
    async fn dispatches_wakes_until_stopped() {
        let host = CountingHost::default();
        let shows = host.shows.clone();

        let worker = Worker::new(host);
        worker.dispatch(WorkerEvent::Install).await.unwrap();
        worker.dispatch(WorkerEvent::Activate).await.unwrap();

        let scheduler =
            WakeScheduler::new(SchedulerConfig::new(Duration::from_millis(10)).with_jitter(0.0));
        let stop = scheduler.stop_handle();

        let task = tokio::spawn(async move {
            scheduler.run(&worker).await;
        });

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(shows.load(Ordering::SeqCst) >= 2);

        stop.stop();
        task.await.unwrap();

        let after_stop = shows.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(shows.load(Ordering::SeqCst), after_stop);
    }

    #[tokio::test]
    async fn wake_failure_is_not_fatal() {
        // Worker never activated, so every wake fails with NotActive.
        let host = CountingHost::default();
        let shows = host.shows.clone();
        let worker = Worker::new(host);

        let scheduler =
            WakeScheduler::new(SchedulerConfig::new(Duration::from_millis(10)).with_jitter(0.0));
        let stop = scheduler.stop_handle();

        let task = tokio::spawn(async move {
            scheduler.run(&worker).await;
        });

        tokio::time::sleep(Duration::from_millis(40)).await;
        stop.stop();
        // The loop survived the failures and stops cleanly.
        task.await.unwrap();
        assert_eq!(shows.load(Ordering::SeqCst), 0);
    }
}
