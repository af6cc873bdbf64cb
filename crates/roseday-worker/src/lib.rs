//! Background worker: event dispatch, notification display, window focus.
//!
//! This crate is the event-driven half of roseday. A [`Worker`] reacts to
//! host-delivered lifecycle and wake events, resolves the day's greeting
//! through `roseday-core`, and asks its [`Host`] to display it. The
//! [`DesktopHost`] binds that seam to a desktop notification service, and
//! the [`WakeScheduler`] supplies the hourly trigger on hosts without a
//! native periodic-sync facility.
//!
//! # Example
//!
//! ```rust,no_run
//! use roseday_worker::{DesktopHost, DesktopHostConfig, Worker, WorkerEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let worker = Worker::new(DesktopHost::new(DesktopHostConfig::default()));
//!     worker.dispatch(WorkerEvent::Install).await?;
//!     worker.dispatch(WorkerEvent::Activate).await?;
//!     Ok(())
//! }
//! ```

mod desktop;
mod error;
mod event;
mod host;
mod scheduler;
mod signals;
mod worker;

pub use desktop::{DesktopHost, DesktopHostConfig};
pub use error::{HostError, WorkerError, WorkerResult};
pub use event::{PushMessage, WorkerEvent, parse_push_payload};
pub use host::{Host, NotificationHandle, NotificationOptions, WindowClient};
pub use scheduler::{SchedulerConfig, SchedulerStop, WakeScheduler};
pub use signals::shutdown_signal;
pub use worker::{
    HOURLY_NOTIFY_TAG, LifecyclePhase, Outcome, ROOT_PATH, VIBRATE_PATTERN, Worker,
};
