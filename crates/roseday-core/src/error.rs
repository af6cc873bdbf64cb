//! Core error types.

use thiserror::Error;

/// An out-of-range month or day was supplied when constructing a calendar day.
///
/// Dates derived from a [`chrono`] datetime are always valid; this error only
/// arises from raw month/day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid calendar date: month {month}, day {day}")]
pub struct InvalidDate {
    /// The rejected month value.
    pub month: u32,
    /// The rejected day value.
    pub day: u32,
}
