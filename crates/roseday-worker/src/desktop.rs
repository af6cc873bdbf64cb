//! Desktop host backed by `notify-rust`.
//!
//! Binds the [`Host`] seam to a plain desktop session: notifications go
//! through the freedesktop/OS notification service. A plain desktop session
//! has no application window registry, so the window-management calls report
//! no clients and log what a full shell would have done; shells embedding
//! the worker implement [`Host`] themselves.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use notify_rust::Notification;
use tracing::{debug, info, warn};

use crate::error::HostError;
use crate::host::{Host, NotificationHandle, NotificationOptions, WindowClient};

/// Configuration for the desktop host.
#[derive(Debug, Clone)]
pub struct DesktopHostConfig {
    /// Application name for notifications.
    pub app_name: String,
    /// Directory holding the image assets. When set, root-relative asset
    /// paths like `/rose.png` are resolved beneath it; when unset, icon
    /// references are passed to the notification service as-is.
    pub asset_root: Option<PathBuf>,
    /// Notification timeout in seconds.
    pub timeout_secs: u32,
}

impl Default for DesktopHostConfig {
    fn default() -> Self {
        Self {
            app_name: "roseday".to_string(),
            asset_root: None,
            timeout_secs: 10,
        }
    }
}

impl DesktopHostConfig {
    /// Builder: set the application name.
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Builder: set the asset root directory.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Builder: set the notification timeout.
    pub fn with_timeout_secs(mut self, secs: u32) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A [`Host`] for desktop sessions, displaying through `notify-rust`.
pub struct DesktopHost {
    config: DesktopHostConfig,
    next_handle: AtomicU64,
}

impl DesktopHost {
    /// Creates a desktop host with the given configuration.
    pub fn new(config: DesktopHostConfig) -> Self {
        Self {
            config,
            next_handle: AtomicU64::new(0),
        }
    }

    /// Maps a root-relative asset reference to a displayable icon string.
    fn resolve_icon(&self, icon: &str) -> String {
        match &self.config.asset_root {
            Some(root) => root
                .join(icon.trim_start_matches('/'))
                .to_string_lossy()
                .into_owned(),
            None => icon.to_string(),
        }
    }

    fn mint_handle(&self) -> NotificationHandle {
        let id = self.next_handle.fetch_add(1, Ordering::SeqCst);
        NotificationHandle::new(format!("desktop-{id}"))
    }
}

impl Host for DesktopHost {
    async fn skip_waiting(&self) -> Result<(), HostError> {
        // Desktop sessions run a single worker instance; nothing to skip.
        debug!("skip_waiting: no previous instance on desktop");
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), HostError> {
        debug!("claim_clients: no client registry on desktop");
        Ok(())
    }

    async fn show_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, HostError> {
        let mut notification = Notification::new();
        notification
            .appname(&self.config.app_name)
            .summary(title)
            .body(&options.body)
            .timeout(Duration::from_secs(self.config.timeout_secs as u64));

        if let Some(ref icon) = options.icon {
            notification.icon(&self.resolve_icon(icon));
        }
        // The vibrate pattern and badge have no desktop equivalent.

        notification
            .show()
            .map_err(|e| HostError::display(e.to_string()))?;

        let handle = self.mint_handle();
        info!(title, handle = handle.as_str(), "desktop notification shown");
        Ok(handle)
    }

    async fn close_notification(&self, handle: &NotificationHandle) -> Result<(), HostError> {
        // The notification service owns the popup; it expires on its own.
        debug!(
            handle = handle.as_str(),
            "close_notification: desktop notifications expire on their own"
        );
        Ok(())
    }

    async fn window_clients(&self) -> Result<Vec<WindowClient>, HostError> {
        Ok(Vec::new())
    }

    async fn focus_client(&self, id: &str) -> Result<(), HostError> {
        Err(HostError::focus(format!(
            "no window registry on desktop host (client {id})"
        )))
    }

    async fn open_window(&self, path: &str) -> Result<(), HostError> {
        // Best-effort: without an attached shell there is nothing to open.
        warn!(path, "open_window: no shell attached, nothing opened");
        Ok(())
    }
}
