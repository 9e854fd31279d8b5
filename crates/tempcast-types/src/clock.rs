//! Host clock readers

use chrono::{Local, NaiveDateTime, Utc};

/// Current wall-clock time in UTC
pub fn utc_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Current wall-clock time in the host's local timezone
pub fn local_now() -> NaiveDateTime {
    log::warn!("reading the local clock is not monotonic across DST transitions, prefer utc()");
    Local::now().naive_local()
}
