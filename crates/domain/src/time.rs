//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for an entity's `last_changed` and `last_updated`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
