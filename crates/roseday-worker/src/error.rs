//! Worker error types.

use thiserror::Error;

use crate::worker::LifecyclePhase;

/// Result type for worker operations.
pub type WorkerResult<T> = Result<T, WorkerError>;

/// Errors surfaced by a host facility.
///
/// These are never retried here; they fail the dispatch future and are
/// surfaced only through host-level diagnostics.
#[derive(Debug, Error)]
pub enum HostError {
    /// The notification display facility refused or failed the request.
    #[error("notification display failed: {message}")]
    Display { message: String },

    /// Closing a displayed notification failed.
    #[error("notification close failed: {message}")]
    Close { message: String },

    /// Enumerating open window clients failed.
    #[error("window enumeration failed: {message}")]
    Windows { message: String },

    /// Focusing a window client failed.
    #[error("window focus failed: {message}")]
    Focus { message: String },

    /// Opening a new window failed.
    #[error("window open failed: {message}")]
    Open { message: String },

    /// A lifecycle call (skip-waiting, claim-clients) failed.
    #[error("lifecycle call failed: {message}")]
    Lifecycle { message: String },
}

impl HostError {
    /// Creates a display error.
    pub fn display(message: impl Into<String>) -> Self {
        Self::Display {
            message: message.into(),
        }
    }

    /// Creates a close error.
    pub fn close(message: impl Into<String>) -> Self {
        Self::Close {
            message: message.into(),
        }
    }

    /// Creates a window enumeration error.
    pub fn windows(message: impl Into<String>) -> Self {
        Self::Windows {
            message: message.into(),
        }
    }

    /// Creates a focus error.
    pub fn focus(message: impl Into<String>) -> Self {
        Self::Focus {
            message: message.into(),
        }
    }

    /// Creates an open error.
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open {
            message: message.into(),
        }
    }

    /// Creates a lifecycle error.
    pub fn lifecycle(message: impl Into<String>) -> Self {
        Self::Lifecycle {
            message: message.into(),
        }
    }
}

/// Errors that can occur while dispatching a worker event.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// A host call failed.
    #[error("host call failed: {0}")]
    Host(#[from] HostError),

    /// A wake, push, or click event arrived before activation completed.
    #[error("worker is not active (current phase: {phase:?})")]
    NotActive {
        /// The lifecycle phase the worker was in.
        phase: LifecyclePhase,
    },

    /// A lifecycle event arrived out of order.
    #[error("invalid lifecycle transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// The phase the worker was in.
        from: LifecyclePhase,
        /// The phase the event tried to enter.
        to: LifecyclePhase,
    },
}
