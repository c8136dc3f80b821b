//! Watering schedule arithmetic.

use time::{Date, Duration};

/// Days between watering rounds when proposing a new due date.
pub const DEFAULT_INTERVAL_DAYS: i64 = 14;

/// The proposed due-watered date for a newly created or freshly
/// renewed instance.
pub fn proposed_due_date(today: Date) -> Date {
    today + Duration::days(DEFAULT_INTERVAL_DAYS)
}
