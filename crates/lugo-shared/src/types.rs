//! Common types

use chrono::Utc;

/// Milliseconds since the Unix epoch, used as a sortable prefix in object names.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
