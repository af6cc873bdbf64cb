//! The background worker state machine.
//!
//! One [`Worker`] exists per host process. It is driven entirely by
//! host-delivered events ([`WorkerEvent`]) and keeps no cross-event state
//! beyond its lifecycle phase: content is resolved fresh on every wake, and
//! the host's notification store and window list are never cached.
//!
//! Awaiting the future returned by [`Worker::dispatch`] is the keep-alive
//! contract: the host (or a test harness) must not consider an event handled
//! until that future settles.

use chrono::{DateTime, Local};
use tokio::sync::RwLock;
use tracing::{debug, info};

use roseday_core::resolve;

use crate::error::{WorkerError, WorkerResult};
use crate::event::{WorkerEvent, parse_push_payload};
use crate::host::{Host, NotificationHandle, NotificationOptions};

/// The periodic-sync tag that triggers the display routine.
pub const HOURLY_NOTIFY_TAG: &str = "hourly-notify";

/// The application root path, used to find or open the app window.
pub const ROOT_PATH: &str = "/";

/// Short buzz-pause-buzz vibration pattern, in milliseconds.
pub const VIBRATE_PATTERN: [u32; 3] = [100, 50, 100];

/// Lifecycle phase of the worker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// No install event has been delivered yet.
    Uninstalled,
    /// Installed (waiting skipped), activation pending.
    Installing,
    /// Activated; wake, push, and click events are handled.
    Active,
}

/// What a dispatched event resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Install completed, waiting skipped.
    Installed,
    /// Activation completed, clients claimed.
    Activated,
    /// A notification was displayed.
    Notified(NotificationHandle),
    /// The event carried an unrecognized tag and was ignored.
    Skipped,
    /// An existing root window was brought to the foreground.
    Focused(String),
    /// A new window was opened at the root path.
    Opened,
}

/// The background worker, generic over its host runtime.
pub struct Worker<H: Host> {
    host: H,
    phase: RwLock<LifecyclePhase>,
    clock: fn() -> DateTime<Local>,
}

impl<H: Host> Worker<H> {
    /// Creates a worker in the uninstalled phase, using wall-clock time.
    pub fn new(host: H) -> Self {
        Self::with_clock(host, Local::now)
    }

    /// Creates a worker with an explicit clock, so tests can pin the date.
    pub fn with_clock(host: H, clock: fn() -> DateTime<Local>) -> Self {
        Self {
            host,
            phase: RwLock::new(LifecyclePhase::Uninstalled),
            clock,
        }
    }

    /// The host this worker drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The current lifecycle phase.
    pub async fn phase(&self) -> LifecyclePhase {
        *self.phase.read().await
    }

    /// Routes a host-delivered event to its handler.
    ///
    /// Each dispatch is independent and shares no mutable state with other
    /// dispatches apart from the lifecycle phase, so concurrent deliveries
    /// need no further synchronization.
    ///
    /// # Errors
    ///
    /// Fails when a host facility fails, when a wake/push/click event arrives
    /// before activation completed, or when a lifecycle event arrives out of
    /// order.
    pub async fn dispatch(&self, event: WorkerEvent) -> WorkerResult<Outcome> {
        debug!(?event, "dispatching worker event");
        match event {
            WorkerEvent::Install => self.handle_install().await,
            WorkerEvent::Activate => self.handle_activate().await,
            WorkerEvent::PeriodicSync { tag } => self.handle_periodic_sync(&tag).await,
            WorkerEvent::Push { payload } => self.handle_push(payload.as_deref()).await,
            WorkerEvent::NotificationClick { notification } => self.handle_click(&notification).await,
        }
    }

    async fn handle_install(&self) -> WorkerResult<Outcome> {
        let mut phase = self.phase.write().await;
        if *phase != LifecyclePhase::Uninstalled {
            return Err(WorkerError::InvalidTransition {
                from: *phase,
                to: LifecyclePhase::Installing,
            });
        }
        self.host.skip_waiting().await?;
        *phase = LifecyclePhase::Installing;
        info!("worker installed, waiting skipped");
        Ok(Outcome::Installed)
    }

    async fn handle_activate(&self) -> WorkerResult<Outcome> {
        let mut phase = self.phase.write().await;
        if *phase != LifecyclePhase::Installing {
            return Err(WorkerError::InvalidTransition {
                from: *phase,
                to: LifecyclePhase::Active,
            });
        }
        self.host.claim_clients().await?;
        *phase = LifecyclePhase::Active;
        info!("worker activated, clients claimed");
        Ok(Outcome::Activated)
    }

    async fn handle_periodic_sync(&self, tag: &str) -> WorkerResult<Outcome> {
        self.require_active().await?;
        if tag != HOURLY_NOTIFY_TAG {
            debug!(tag, "ignoring periodic wake with unrecognized tag");
            return Ok(Outcome::Skipped);
        }
        self.show_day_notification().await.map(Outcome::Notified)
    }

    async fn handle_push(&self, payload: Option<&[u8]>) -> WorkerResult<Outcome> {
        self.require_active().await?;
        match payload.and_then(parse_push_payload) {
            Some(message) => {
                let handle = self
                    .host
                    .show_notification(&message.title, &message.options)
                    .await?;
                info!(title = %message.title, "push notification displayed");
                Ok(Outcome::Notified(handle))
            }
            None => self.show_day_notification().await.map(Outcome::Notified),
        }
    }

    async fn handle_click(&self, notification: &NotificationHandle) -> WorkerResult<Outcome> {
        self.require_active().await?;
        self.host.close_notification(notification).await?;

        let clients = self.host.window_clients().await?;
        for client in clients {
            if client.url == ROOT_PATH && client.focusable {
                self.host.focus_client(&client.id).await?;
                info!(client_id = %client.id, "focused existing root window");
                return Ok(Outcome::Focused(client.id));
            }
        }

        self.host.open_window(ROOT_PATH).await?;
        info!("opened new window at root path");
        Ok(Outcome::Opened)
    }

    /// Displays the notification for the current local date.
    async fn show_day_notification(&self) -> WorkerResult<NotificationHandle> {
        let content = resolve((self.clock)());
        let options = NotificationOptions {
            body: content.message,
            icon: Some(content.image.clone()),
            badge: Some(content.image),
            vibrate: VIBRATE_PATTERN.to_vec(),
        };
        let handle = self.host.show_notification(&content.title, &options).await?;
        info!(title = %content.title, "day notification displayed");
        Ok(handle)
    }

    async fn require_active(&self) -> WorkerResult<()> {
        let phase = *self.phase.read().await;
        if phase != LifecyclePhase::Active {
            return Err(WorkerError::NotActive { phase });
        }
        Ok(())
    }
}
