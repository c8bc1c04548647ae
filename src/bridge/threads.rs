//! Thread reconciliation policy: previews, archive deadlines, and the
//! shape of a lazily created thread.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::config::ThreadConfig;
use crate::store::{Message, Thread, ThreadStatus};
use crate::utils::formatting::{collapse_whitespace, truncate_chars};

pub const PREVIEW_MAX_CHARS: usize = 120;
pub const MIN_THREAD_TTL_HOURS: i64 = 1;
pub const MAX_THREAD_TTL_HOURS: i64 = 168;

/// Single-line thread preview derived from a message body.
pub fn thread_preview(body: &str) -> String {
    truncate_chars(&collapse_whitespace(body), PREVIEW_MAX_CHARS)
}

/// Archive deadline for a thread touched at `now`. The TTL is clamped to
/// one hour minimum and one week maximum regardless of configuration.
pub fn archive_deadline(now: DateTime<Utc>, ttl_hours: i64) -> DateTime<Utc> {
    now + Duration::hours(ttl_hours.clamp(MIN_THREAD_TTL_HOURS, MAX_THREAD_TTL_HOURS))
}

/// Thread candidate rooted at an existing channel message. Whether this
/// instance or a concurrent one wins is decided by the store's
/// first-writer-wins insert.
pub fn thread_for_root(root: &Message, config: &ThreadConfig, now: DateTime<Utc>) -> Thread {
    Thread {
        id: Uuid::new_v4(),
        server_id: root.server_id.clone(),
        channel_id: root.channel_id.clone(),
        root_message_id: root.id.clone(),
        creator_id: root.author_id.clone(),
        preview: thread_preview(&root.body),
        member_cap: config.member_cap,
        message_count: 0,
        last_message_at: now,
        auto_archive_at: archive_deadline(now, config.ttl_hours),
        status: ThreadStatus::Active,
        created_at: now,
    }
}
