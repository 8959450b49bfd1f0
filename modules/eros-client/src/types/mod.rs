//! Response records for each platform.
//!
//! Each record requires only its identifying fields; everything else is
//! optional and collections default to empty. Fields the API adds later are
//! ignored rather than rejected.

pub mod instagram;
pub mod pinterest;
pub mod threads;
pub mod tiktok;
pub mod twitter;
pub mod youtube;

use chrono::{DateTime, Utc};

/// Convert a unix timestamp in seconds, as sent by Instagram, TikTok and Threads.
pub(crate) fn from_unix(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}
