//! The host-runtime interface.
//!
//! The host provides worker lifecycle, notification display, and window
//! management; this crate never reimplements those facilities. [`Host`] is
//! the seam: the worker drives it, implementations bind it to a real runtime
//! (see [`crate::DesktopHost`]) or to a test double.

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Opaque identifier of a displayed notification.
///
/// The notification itself is owned by the host until the user dismisses or
/// clicks it; this handle only names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationHandle(String);

impl NotificationHandle {
    /// Creates a handle from a host-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The host-assigned identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display options accompanying a notification title.
///
/// This is also the `options` shape accepted in push payloads, so every
/// field defaults to empty/absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    /// Body text. Defaults to empty.
    #[serde(default)]
    pub body: String,

    /// Icon asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Badge asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Vibration pattern as ordered millisecond durations. Best-effort
    /// haptic hint; hosts without haptics ignore it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vibrate: Vec<u32>,
}

/// An open application window as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowClient {
    /// Host-assigned client identifier.
    pub id: String,
    /// The URL the window is showing.
    pub url: String,
    /// Whether the host can bring this window to the foreground.
    pub focusable: bool,
}

impl WindowClient {
    /// Creates a window client descriptor.
    pub fn new(id: impl Into<String>, url: impl Into<String>, focusable: bool) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            focusable,
        }
    }
}

/// The host runtime the worker runs inside.
///
/// All methods are async and fallible. The worker never caches what the host
/// owns: the notification store and the window list are queried fresh on
/// every event.
pub trait Host {
    /// Signals immediate activation readiness, skipping any waiting period
    /// for an old worker instance.
    fn skip_waiting(&self) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Takes control of all currently open application instances so they are
    /// governed by this worker without a reload.
    fn claim_clients(&self) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Displays a notification and returns its handle once the host
    /// acknowledges the request.
    fn show_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> impl Future<Output = Result<NotificationHandle, HostError>> + Send;

    /// Closes a displayed notification.
    fn close_notification(
        &self,
        handle: &NotificationHandle,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Enumerates all open application windows, including ones not under
    /// this worker's control.
    fn window_clients(&self) -> impl Future<Output = Result<Vec<WindowClient>, HostError>> + Send;

    /// Brings the window client with the given id to the foreground.
    fn focus_client(&self, id: &str) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Opens a new application window at the given path.
    fn open_window(&self, path: &str) -> impl Future<Output = Result<(), HostError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_is_empty() {
        let options = NotificationOptions::default();
        assert!(options.body.is_empty());
        assert!(options.icon.is_none());
        assert!(options.badge.is_none());
        assert!(options.vibrate.is_empty());
    }

    #[test]
    fn options_deserialize_with_all_fields_absent() {
        let options: NotificationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, NotificationOptions::default());
    }

    #[test]
    fn options_deserialize_partial() {
        let options: NotificationOptions =
            serde_json::from_str(r#"{"body":"hi","vibrate":[100,50,100]}"#).unwrap();
        assert_eq!(options.body, "hi");
        assert_eq!(options.vibrate, vec![100, 50, 100]);
        assert!(options.icon.is_none());
    }

    #[test]
    fn handle_preserves_id() {
        let handle = NotificationHandle::new("n-42");
        assert_eq!(handle.as_str(), "n-42");
    }
}
