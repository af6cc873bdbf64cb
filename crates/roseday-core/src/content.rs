//! Date→content mapping for the February greeting week.
//!
//! This module is the content resolver: a pure, total function from a
//! [`CalendarDay`] to the title, message, and image shown in a notification.
//! February 7–14 carry individually authored text and images; every other
//! date resolves to the default pair. The text and image lookups are
//! independent, but both fall back to the same defaults, so the mapping has
//! no gaps.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDay;

/// The month carrying per-day greetings (February).
pub const SPECIAL_MONTH: u32 = 2;

/// Image used for every day without a dedicated image.
pub const DEFAULT_IMAGE: &str = "/rose.png";

const DEFAULT_TITLE: &str = "Miss You! ❤️";
const DEFAULT_MESSAGE: &str = "Open the app to see today's surprise!";

/// The title, body text, and image reference shown to the user.
///
/// Constructed fresh per invocation and consumed immediately; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    /// Notification title. Never empty.
    pub title: String,
    /// Notification body. May be empty.
    pub message: String,
    /// Image asset path, resolved relative to the application root.
    pub image: String,
}

/// Authored text for the greeting week, one entry per day.
///
/// This is a per-day lookup, not range arithmetic: each day's text is
/// independent of its neighbours.
fn day_text(day: u32) -> Option<(&'static str, &'static str)> {
    match day {
        7 => Some(("It's Rose Day! 🌹", "Have you seen your blooming surprise?")),
        8 => Some(("It's Propose Day! 💍", "Someone is waiting for your answer...")),
        9 => Some(("It's Chocolate Day! 🍫", "Something sweet is waiting for you!")),
        10 => Some(("It's Teddy Day! 🧸", "Your fluffy friend is missing you!")),
        11 => Some(("It's Promise Day! 🤝", "A special promise is waiting...")),
        12 => Some(("It's Hug Day! 🤗", "Sending you a virtual warm hug!")),
        13 => Some(("It's Kiss Day! 💋", "A little magic is waiting in the app!")),
        14 => Some(("Happy Valentine's Day! ❤️", "Your biggest surprise is ready!")),
        _ => None,
    }
}

/// Dedicated images for the greeting week.
fn day_image(day: u32) -> Option<&'static str> {
    match day {
        7 => Some("/rose.png"),
        8 => Some("/propose.png"),
        9 => Some("/chocolate.png"),
        10 => Some("/teddy.png"),
        11 => Some("/promise.png"),
        12 => Some("/hug.png"),
        13 => Some("/kiss.png"),
        14 => Some("/valentine.png"),
        _ => None,
    }
}

/// Resolves the notification content for a calendar day.
///
/// Pure and total: every possible day resolves to exactly one content value,
/// with no side effects and no shared state.
pub fn resolve_day(day: CalendarDay) -> NotificationContent {
    let in_special_month = day.month() == SPECIAL_MONTH;

    let (title, message) = if in_special_month {
        day_text(day.day()).unwrap_or((DEFAULT_TITLE, DEFAULT_MESSAGE))
    } else {
        (DEFAULT_TITLE, DEFAULT_MESSAGE)
    };

    // Image fallback is intentionally shared between unmapped special-month
    // days and all other months: only eight curated images exist.
    let image = if in_special_month {
        day_image(day.day()).unwrap_or(DEFAULT_IMAGE)
    } else {
        DEFAULT_IMAGE
    };

    NotificationContent {
        title: title.to_string(),
        message: message.to_string(),
        image: image.to_string(),
    }
}

/// Resolves the notification content for a local datetime.
pub fn resolve(date: DateTime<Local>) -> NotificationContent {
    resolve_day(CalendarDay::from_datetime(&date))
}

/// Resolves the notification content for the current local time.
pub fn resolve_now() -> NotificationContent {
    resolve(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(month: u32, day: u32) -> CalendarDay {
        CalendarDay::new(month, day).unwrap()
    }

    #[test]
    fn all_eight_greeting_days() {
        let expected = [
            (7, "It's Rose Day! 🌹", "Have you seen your blooming surprise?", "/rose.png"),
            (8, "It's Propose Day! 💍", "Someone is waiting for your answer...", "/propose.png"),
            (9, "It's Chocolate Day! 🍫", "Something sweet is waiting for you!", "/chocolate.png"),
            (10, "It's Teddy Day! 🧸", "Your fluffy friend is missing you!", "/teddy.png"),
            (11, "It's Promise Day! 🤝", "A special promise is waiting...", "/promise.png"),
            (12, "It's Hug Day! 🤗", "Sending you a virtual warm hug!", "/hug.png"),
            (13, "It's Kiss Day! 💋", "A little magic is waiting in the app!", "/kiss.png"),
            (14, "Happy Valentine's Day! ❤️", "Your biggest surprise is ready!", "/valentine.png"),
        ];

        for (d, title, message, image) in expected {
            let content = resolve_day(day(2, d));
            assert_eq!(content.title, title, "day {d}");
            assert_eq!(content.message, message, "day {d}");
            assert_eq!(content.image, image, "day {d}");
        }
    }

    #[test]
    fn february_outside_week_gets_defaults() {
        for d in [1, 2, 6, 15, 20, 28] {
            let content = resolve_day(day(2, d));
            assert_eq!(content.title, DEFAULT_TITLE, "day {d}");
            assert_eq!(content.message, DEFAULT_MESSAGE, "day {d}");
            assert_eq!(content.image, DEFAULT_IMAGE, "day {d}");
        }
    }

    #[test]
    fn other_months_always_default() {
        for month in (1..=12).filter(|&m| m != SPECIAL_MONTH) {
            for d in [1, 7, 14, 28, 31] {
                let content = resolve_day(day(month, d));
                assert_eq!(content.title, DEFAULT_TITLE, "month {month} day {d}");
                assert_eq!(content.message, DEFAULT_MESSAGE, "month {month} day {d}");
                assert_eq!(content.image, DEFAULT_IMAGE, "month {month} day {d}");
            }
        }
    }

    #[test]
    fn resolver_is_idempotent() {
        let first = resolve_day(day(2, 14));
        let second = resolve_day(day(2, 14));
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_uses_local_date_fields() {
        let dt = Local.with_ymd_and_hms(2025, 2, 7, 23, 59, 59).unwrap();
        let content = resolve(dt);
        assert_eq!(content.title, "It's Rose Day! 🌹");
        assert_eq!(content.image, "/rose.png");
    }

    #[test]
    fn title_is_never_empty() {
        for month in 1..=12 {
            for d in 1..=31 {
                assert!(!resolve_day(day(month, d)).title.is_empty());
            }
        }
    }

    #[test]
    fn content_serde_roundtrip() {
        let content = resolve_day(day(2, 9));
        let json = serde_json::to_string(&content).unwrap();
        let parsed: NotificationContent = serde_json::from_str(&json).unwrap();
        assert_eq!(content, parsed);
    }
}
