//! Worker event types and push payload parsing.
//!
//! The five host-delivered event kinds are represented as one tagged enum
//! and routed through [`crate::Worker::dispatch`], replacing implicit
//! callback registration with an explicit, testable dispatch function.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::host::{NotificationHandle, NotificationOptions};

/// A host-delivered lifecycle or wake event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEvent {
    /// The worker was installed by the host.
    Install,
    /// The host activated this worker instance.
    Activate,
    /// A periodic wake-up signal, carrying the registration tag.
    PeriodicSync {
        /// The tag the wake-up was registered under.
        tag: String,
    },
    /// A push message from outside the application, with an optional raw
    /// payload.
    Push {
        /// Raw payload bytes, if the push carried any.
        payload: Option<Vec<u8>>,
    },
    /// The user clicked a displayed notification.
    NotificationClick {
        /// The clicked notification.
        notification: NotificationHandle,
    },
}

impl WorkerEvent {
    /// Creates a periodic-sync event with the given tag.
    pub fn periodic_sync(tag: impl Into<String>) -> Self {
        Self::PeriodicSync { tag: tag.into() }
    }

    /// Creates a push event carrying the given payload.
    pub fn push(payload: impl Into<Vec<u8>>) -> Self {
        Self::Push {
            payload: Some(payload.into()),
        }
    }

    /// Creates a push event without a payload.
    pub fn empty_push() -> Self {
        Self::Push { payload: None }
    }
}

/// The recognized push payload shape: `{ title, options? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Notification title. An empty title makes the payload unusable.
    pub title: String,
    /// Display options; absent options mean empty options.
    #[serde(default)]
    pub options: NotificationOptions,
}

/// Parses a push payload into a usable message.
///
/// Returns `None` for anything that is not a usable payload: JSON that does
/// not match the shape, a missing title, or an empty title. Parse failures
/// never escape; the caller falls back to the default display routine.
pub fn parse_push_payload(bytes: &[u8]) -> Option<PushMessage> {
    let message: PushMessage = match serde_json::from_slice(bytes) {
        Ok(message) => message,
        Err(error) => {
            debug!(error = %error, "push payload did not parse, using fallback");
            return None;
        }
    };

    if message.title.is_empty() {
        debug!("push payload has an empty title, using fallback");
        return None;
    }

    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_only_payload() {
        let message = parse_push_payload(br#"{"title":"X"}"#).unwrap();
        assert_eq!(message.title, "X");
        assert_eq!(message.options, NotificationOptions::default());
    }

    #[test]
    fn parses_payload_with_options() {
        let message =
            parse_push_payload(br#"{"title":"Hi","options":{"body":"there","icon":"/kiss.png"}}"#)
                .unwrap();
        assert_eq!(message.title, "Hi");
        assert_eq!(message.options.body, "there");
        assert_eq!(message.options.icon.as_deref(), Some("/kiss.png"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_push_payload(b"not json").is_none());
        assert!(parse_push_payload(b"").is_none());
    }

    #[test]
    fn rejects_missing_title() {
        assert!(parse_push_payload(br#"{"options":{"body":"x"}}"#).is_none());
    }

    #[test]
    fn rejects_empty_title() {
        assert!(parse_push_payload(br#"{"title":""}"#).is_none());
    }

    #[test]
    fn rejects_non_string_title() {
        assert!(parse_push_payload(br#"{"title":7}"#).is_none());
    }

    #[test]
    fn event_constructors() {
        assert_eq!(
            WorkerEvent::periodic_sync("hourly-notify"),
            WorkerEvent::PeriodicSync {
                tag: "hourly-notify".to_string()
            }
        );
        assert_eq!(WorkerEvent::empty_push(), WorkerEvent::Push { payload: None });
        assert_eq!(
            WorkerEvent::push(&b"{}"[..]),
            WorkerEvent::Push {
                payload: Some(b"{}".to_vec())
            }
        );
    }
}
