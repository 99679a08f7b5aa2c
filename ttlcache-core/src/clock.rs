//! Wall-clock helper for callers.
//!
//! The cache itself never reads a clock; every operation takes `now`
//! explicitly. Callers that want real time can pass `unix_seconds()`.

use chrono::Utc;

/// Current Unix time in whole seconds.
pub fn unix_seconds() -> i64 {
    Utc::now().timestamp()
}
