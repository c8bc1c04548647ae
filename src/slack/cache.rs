//! TTL cache for `users.info` lookups so attribution does not hammer the
//! API once per inbound message.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::SlackUser;

pub trait UserInfoCache: Send + Sync {
    fn get(&self, team_id: &str, user_id: &str) -> Option<SlackUser>;
    fn put(&self, team_id: &str, user_id: &str, user: SlackUser);
}

struct CacheEntry {
    user: SlackUser,
    expires_at: Instant,
}

pub struct InMemoryUserCache {
    ttl: Duration,
    entries: RwLock<HashMap<(String, String), CacheEntry>>,
}

impl InMemoryUserCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl UserInfoCache for InMemoryUserCache {
    fn get(&self, team_id: &str, user_id: &str) -> Option<SlackUser> {
        let key = (team_id.to_string(), user_id.to_string());
        {
            let entries = self.entries.read();
            match entries.get(&key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Some(entry.user.clone())
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Expired; drop it so the map does not grow unbounded.
        self.entries.write().remove(&key);
        None
    }

    fn put(&self, team_id: &str, user_id: &str, user: SlackUser) {
        let entry = CacheEntry {
            user,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries
            .write()
            .insert((team_id.to_string(), user_id.to_string()), entry);
    }
}
