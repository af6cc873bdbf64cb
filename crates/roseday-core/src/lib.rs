//! Core types: calendar days, date→content mapping, tracing setup.

pub mod content;
pub mod date;
pub mod error;
pub mod tracing;

pub use content::{
    DEFAULT_IMAGE, NotificationContent, SPECIAL_MONTH, resolve, resolve_day, resolve_now,
};
pub use date::CalendarDay;
pub use error::InvalidDate;
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
