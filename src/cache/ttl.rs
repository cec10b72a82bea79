//! Default TTL policy
//!
//! Entries written without an explicit TTL live until the next 04:00 local
//! wall-clock time, giving a predictable daily cold-cache point.

use chrono::{Local, Timelike};

/// Local hour at which default-TTL entries expire.
pub const RESET_HOUR: u32 = 4;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Seconds from `now` until the next `RESET_HOUR`:00:00.
///
/// Always in `1..=86400`; at exactly 04:00:00 the next boundary is tomorrow.
pub fn seconds_until_next_reset<T: Timelike>(now: &T) -> u64 {
    let elapsed = u64::from(now.num_seconds_from_midnight());
    let reset = u64::from(RESET_HOUR) * 3600;

    if elapsed < reset {
        reset - elapsed
    } else {
        SECONDS_PER_DAY - elapsed + reset
    }
}

/// Default TTL computed from the current local time.
pub fn default_ttl() -> u64 {
    seconds_until_next_reset(&Local::now())
}
