//! Calendar-day extraction from wall-clock time.
//!
//! A [`CalendarDay`] is the only input the content resolver looks at: the
//! month and day-of-month of the moment a wake event fired, in local time.
//! Nothing is stored between invocations.

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::InvalidDate;

/// A month/day pair in the Gregorian calendar, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    month: u32,
    day: u32,
}

impl CalendarDay {
    /// Creates a calendar day from raw month/day numbers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate`] when the month is outside 1–12 or the day is
    /// outside 1–31.
    pub fn new(month: u32, day: u32) -> Result<Self, InvalidDate> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(InvalidDate { month, day });
        }
        Ok(Self { month, day })
    }

    /// Extracts the month and day-of-month from a local datetime.
    pub fn from_datetime(dt: &DateTime<Local>) -> Self {
        Self {
            month: dt.month(),
            day: dt.day(),
        }
    }

    /// The calendar day right now, in local time.
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// The month, 1–12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of the month, 1–31.
    pub fn day(&self) -> u32 {
        self.day
    }
}
