use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use super::{
    Bridge, BridgeStatus, BridgeStore, Correlation, LocatedMessage, Message, MessageLocation,
    MessageStore, ReactionMap, ReactorId, StoreError, Thread, Workspace, WorkspaceStore,
};

/// In-memory bridge store with secondary indexes on the two lookup paths:
/// `(slack_team_id, slack_channel_id)` for inbound resolution and
/// `(server_id, channel_id)` for outbound fan-out. Lookups never scan the
/// whole bridge table; the indexes are maintained on create. A real
/// document-store adapter must provide the same indexes, otherwise inbound
/// resolution degrades to a scan across every server, which is the
/// scalability bound of this design.
#[derive(Default)]
pub struct MemoryBridgeStore {
    bridges: RwLock<HashMap<Uuid, Bridge>>,
    slack_index: RwLock<HashMap<(String, String), HashSet<Uuid>>>,
    channel_index: RwLock<HashMap<(String, String), HashSet<Uuid>>>,
}

#[async_trait]
impl BridgeStore for MemoryBridgeStore {
    async fn create_bridge(&self, bridge: &Bridge) -> Result<(), StoreError> {
        let mut bridges = self.bridges.write();
        bridges.insert(bridge.id, bridge.clone());

        self.slack_index
            .write()
            .entry((
                bridge.slack_team_id.clone(),
                bridge.slack_channel_id.clone(),
            ))
            .or_default()
            .insert(bridge.id);
        self.channel_index
            .write()
            .entry((bridge.server_id.clone(), bridge.channel_id.clone()))
            .or_default()
            .insert(bridge.id);
        Ok(())
    }

    async fn get_bridge(&self, id: Uuid) -> Result<Option<Bridge>, StoreError> {
        Ok(self.bridges.read().get(&id).cloned())
    }

    async fn find_active_by_slack_channel(
        &self,
        slack_team_id: &str,
        slack_channel_id: &str,
    ) -> Result<Option<Bridge>, StoreError> {
        let ids = {
            let index = self.slack_index.read();
            index
                .get(&(slack_team_id.to_string(), slack_channel_id.to_string()))
                .cloned()
                .unwrap_or_default()
        };

        let bridges = self.bridges.read();
        Ok(ids
            .iter()
            .filter_map(|id| bridges.get(id))
            .find(|bridge| bridge.status == BridgeStatus::Active)
            .cloned())
    }

    async fn find_by_channel(
        &self,
        server_id: &str,
        channel_id: &str,
    ) -> Result<Vec<Bridge>, StoreError> {
        let ids = {
            let index = self.channel_index.read();
            index
                .get(&(server_id.to_string(), channel_id.to_string()))
                .cloned()
                .unwrap_or_default()
        };

        let bridges = self.bridges.read();
        let mut found: Vec<Bridge> = ids
            .iter()
            .filter_map(|id| bridges.get(id))
            .cloned()
            .collect();
        found.sort_by_key(|bridge| bridge.created_at);
        Ok(found)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: BridgeStatus,
        last_error: Option<String>,
    ) -> Result<(), StoreError> {
        let mut bridges = self.bridges.write();
        let bridge = bridges
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("bridge {id}")))?;
        bridge.status = status;
        bridge.last_error = last_error;
        bridge.updated_at = Utc::now();
        Ok(())
    }

    async fn record_sync(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut bridges = self.bridges.write();
        let bridge = bridges
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("bridge {id}")))?;
        bridge.message_count += 1;
        bridge.last_sync_at = Some(at);
        bridge.updated_at = Utc::now();
        Ok(())
    }

    async fn count_bridges(&self) -> Result<i64, StoreError> {
        Ok(self.bridges.read().len() as i64)
    }
}

#[derive(Default)]
pub struct MemoryWorkspaceStore {
    workspaces: RwLock<HashMap<String, Workspace>>,
}

#[async_trait]
impl WorkspaceStore for MemoryWorkspaceStore {
    async fn get_by_team(&self, slack_team_id: &str) -> Result<Option<Workspace>, StoreError> {
        Ok(self.workspaces.read().get(slack_team_id).cloned())
    }

    async fn get_by_server(&self, server_id: &str) -> Result<Option<Workspace>, StoreError> {
        Ok(self
            .workspaces
            .read()
            .values()
            .find(|workspace| workspace.server_id == server_id)
            .cloned())
    }

    async fn upsert_workspace(&self, workspace: &Workspace) -> Result<(), StoreError> {
        self.workspaces
            .write()
            .insert(workspace.slack_team_id.clone(), workspace.clone());
        Ok(())
    }
}

struct ThreadDoc {
    thread: Thread,
    messages: HashMap<String, Message>,
}

#[derive(Default)]
struct ChannelDoc {
    messages: HashMap<String, Message>,
    threads: HashMap<Uuid, ThreadDoc>,
    thread_by_root: HashMap<String, Uuid>,
}

/// One lock over all channel documents; messages and threads for a channel
/// live together the way the surrounding application stores them.
#[derive(Default, Clone)]
pub struct SharedChannels(Arc<RwLock<HashMap<(String, String), ChannelDoc>>>);

pub struct MemoryMessageStore {
    channels: SharedChannels,
}

impl MemoryMessageStore {
    pub fn new(channels: SharedChannels) -> Self {
        Self { channels }
    }

    fn channel_key(server_id: &str, channel_id: &str) -> (String, String) {
        (server_id.to_string(), channel_id.to_string())
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn insert_channel_message(&self, message: &Message) -> Result<(), StoreError> {
        let mut channels = self.channels.0.write();
        let doc = channels
            .entry(Self::channel_key(&message.server_id, &message.channel_id))
            .or_default();
        doc.messages.insert(message.id.clone(), message.clone());
        Ok(())
    }

    async fn insert_thread_message(
        &self,
        thread_id: Uuid,
        message: &Message,
    ) -> Result<(), StoreError> {
        let mut channels = self.channels.0.write();
        let doc = channels
            .entry(Self::channel_key(&message.server_id, &message.channel_id))
            .or_default();
        let thread = doc
            .threads
            .get_mut(&thread_id)
            .ok_or_else(|| StoreError::NotFound(format!("thread {thread_id}")))?;
        thread.messages.insert(message.id.clone(), message.clone());
        Ok(())
    }

    async fn get_message(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Option<LocatedMessage>, StoreError> {
        let channels = self.channels.0.read();
        let Some(doc) = channels.get(&Self::channel_key(server_id, channel_id)) else {
            return Ok(None);
        };

        if let Some(message) = doc.messages.get(message_id) {
            return Ok(Some(LocatedMessage {
                location: MessageLocation::Channel,
                message: message.clone(),
            }));
        }

        for (thread_id, thread) in &doc.threads {
            if let Some(message) = thread.messages.get(message_id) {
                return Ok(Some(LocatedMessage {
                    location: MessageLocation::Thread(*thread_id),
                    message: message.clone(),
                }));
            }
        }
        Ok(None)
    }

    async fn find_by_slack_ts(
        &self,
        server_id: &str,
        channel_id: &str,
        slack_ts: &str,
    ) -> Result<Option<LocatedMessage>, StoreError> {
        let channels = self.channels.0.read();
        let Some(doc) = channels.get(&Self::channel_key(server_id, channel_id)) else {
            return Ok(None);
        };

        let correlated = |message: &Message| {
            message
                .correlation
                .as_ref()
                .is_some_and(|correlation| correlation.slack_ts == slack_ts)
        };

        if let Some(message) = doc.messages.values().find(|m| correlated(m)) {
            return Ok(Some(LocatedMessage {
                location: MessageLocation::Channel,
                message: message.clone(),
            }));
        }

        for (thread_id, thread) in &doc.threads {
            if let Some(message) = thread.messages.values().find(|m| correlated(m)) {
                return Ok(Some(LocatedMessage {
                    location: MessageLocation::Thread(*thread_id),
                    message: message.clone(),
                }));
            }
        }
        Ok(None)
    }

    async fn merge_correlation(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        correlation: &Correlation,
    ) -> Result<(), StoreError> {
        let mut channels = self.channels.0.write();
        let doc = channels
            .entry(Self::channel_key(server_id, channel_id))
            .or_default();

        let message = if let Some(message) = doc.messages.get_mut(message_id) {
            message
        } else {
            doc.threads
                .values_mut()
                .find_map(|thread| thread.messages.get_mut(message_id))
                .ok_or_else(|| StoreError::NotFound(format!("message {message_id}")))?
        };

        // First correlation wins; a concurrent dispatcher that lost the race
        // leaves the stored link untouched.
        if message.correlation.is_none() {
            message.correlation = Some(correlation.clone());
        }
        Ok(())
    }

    async fn add_reactor(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        emoji_key: &str,
        reactor: &ReactorId,
    ) -> Result<(), StoreError> {
        self.with_message_mut(server_id, channel_id, message_id, |message| {
            message
                .reactions
                .entry(emoji_key.to_string())
                .or_default()
                .insert(reactor.clone());
        })
    }

    async fn remove_reactor(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        emoji_key: &str,
        reactor: &ReactorId,
    ) -> Result<(), StoreError> {
        self.with_message_mut(server_id, channel_id, message_id, |message| {
            if let Some(reactors) = message.reactions.get_mut(emoji_key) {
                reactors.remove(reactor);
                if reactors.is_empty() {
                    message.reactions.remove(emoji_key);
                }
            }
        })
    }

    async fn reactions(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
    ) -> Result<ReactionMap, StoreError> {
        let located = self
            .get_message(server_id, channel_id, message_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("message {message_id}")))?;
        Ok(located.message.reactions)
    }

    async fn find_or_create_thread(&self, thread: &Thread) -> Result<Thread, StoreError> {
        let mut channels = self.channels.0.write();
        let doc = channels
            .entry(Self::channel_key(&thread.server_id, &thread.channel_id))
            .or_default();

        if let Some(existing_id) = doc.thread_by_root.get(&thread.root_message_id) {
            let existing = doc
                .threads
                .get(existing_id)
                .ok_or_else(|| StoreError::Backend("thread index out of sync".to_string()))?;
            return Ok(existing.thread.clone());
        }

        doc.thread_by_root
            .insert(thread.root_message_id.clone(), thread.id);
        doc.threads.insert(
            thread.id,
            ThreadDoc {
                thread: thread.clone(),
                messages: HashMap::new(),
            },
        );
        Ok(thread.clone())
    }

    async fn get_thread(
        &self,
        server_id: &str,
        channel_id: &str,
        thread_id: Uuid,
    ) -> Result<Option<Thread>, StoreError> {
        let channels = self.channels.0.read();
        Ok(channels
            .get(&Self::channel_key(server_id, channel_id))
            .and_then(|doc| doc.threads.get(&thread_id))
            .map(|doc| doc.thread.clone()))
    }

    async fn touch_thread(
        &self,
        server_id: &str,
        channel_id: &str,
        thread_id: Uuid,
        last_message_at: DateTime<Utc>,
        preview: &str,
        auto_archive_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut channels = self.channels.0.write();
        let doc = channels
            .get_mut(&Self::channel_key(server_id, channel_id))
            .ok_or_else(|| StoreError::NotFound(format!("channel {channel_id}")))?;
        let thread = doc
            .threads
            .get_mut(&thread_id)
            .ok_or_else(|| StoreError::NotFound(format!("thread {thread_id}")))?;

        thread.thread.message_count += 1;
        thread.thread.last_message_at = last_message_at;
        thread.thread.preview = preview.to_string();
        // The deadline only moves forward.
        if auto_archive_at > thread.thread.auto_archive_at {
            thread.thread.auto_archive_at = auto_archive_at;
        }
        Ok(())
    }
}

impl MemoryMessageStore {
    fn with_message_mut(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        apply: impl FnOnce(&mut Message),
    ) -> Result<(), StoreError> {
        let mut channels = self.channels.0.write();
        let doc = channels
            .get_mut(&Self::channel_key(server_id, channel_id))
            .ok_or_else(|| StoreError::NotFound(format!("channel {channel_id}")))?;

        let message = if let Some(message) = doc.messages.get_mut(message_id) {
            message
        } else {
            doc.threads
                .values_mut()
                .find_map(|thread| thread.messages.get_mut(message_id))
                .ok_or_else(|| StoreError::NotFound(format!("message {message_id}")))?
        };
        apply(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{MemoryBridgeStore, MemoryMessageStore, SharedChannels};
    use crate::store::{
        Bridge, BridgeStatus, BridgeStore, Correlation, Message, MessageStore, Origin, ReactorId,
        SyncDirection, Thread, ThreadStatus,
    };

    fn bridge(team: &str, channel: &str, status: BridgeStatus) -> Bridge {
        let now = Utc::now();
        Bridge {
            id: Uuid::new_v4(),
            slack_team_id: team.to_string(),
            slack_channel_id: channel.to_string(),
            server_id: "srv1".to_string(),
            channel_id: "general".to_string(),
            direction: SyncDirection::Bidirectional,
            status,
            sync_reactions: true,
            sync_threads: true,
            show_slack_usernames: false,
            display_name_override: None,
            avatar_url_override: None,
            message_count: 0,
            last_sync_at: None,
            last_error: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn message(id: &str, slack_ts: Option<&str>) -> Message {
        Message {
            id: id.to_string(),
            server_id: "srv1".to_string(),
            channel_id: "general".to_string(),
            author_id: "user1".to_string(),
            author_name: None,
            author_avatar_url: None,
            body: "hello".to_string(),
            origin: Origin::Internal,
            correlation: slack_ts.map(|ts| Correlation {
                slack_ts: ts.to_string(),
                slack_channel_id: "C1".to_string(),
                slack_team_id: "T1".to_string(),
                is_thread_reply: false,
                bridge_id: Uuid::new_v4(),
            }),
            reactions: Default::default(),
            created_at: Utc::now(),
        }
    }

    fn thread(root_message_id: &str) -> Thread {
        let now = Utc::now();
        Thread {
            id: Uuid::new_v4(),
            server_id: "srv1".to_string(),
            channel_id: "general".to_string(),
            root_message_id: root_message_id.to_string(),
            creator_id: "user1".to_string(),
            preview: "hello".to_string(),
            member_cap: 20,
            message_count: 0,
            last_message_at: now,
            auto_archive_at: now,
            status: ThreadStatus::Active,
            created_at: now,
        }
    }

    #[tokio::test]
    async fn indexed_lookup_skips_inactive_bridges() {
        let store = MemoryBridgeStore::default();
        let paused = bridge("T1", "C1", BridgeStatus::Paused);
        let active = bridge("T1", "C1", BridgeStatus::Active);
        store.create_bridge(&paused).await.unwrap();
        store.create_bridge(&active).await.unwrap();

        let found = store
            .find_active_by_slack_channel("T1", "C1")
            .await
            .unwrap()
            .expect("active bridge resolves");
        assert_eq!(found.id, active.id);

        assert!(store
            .find_active_by_slack_channel("T1", "C2")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn find_by_channel_returns_every_configured_bridge() {
        let store = MemoryBridgeStore::default();
        let a = bridge("T1", "C1", BridgeStatus::Active);
        let b = bridge("T2", "C9", BridgeStatus::Error);
        store.create_bridge(&a).await.unwrap();
        store.create_bridge(&b).await.unwrap();

        let found = store.find_by_channel("srv1", "general").await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn find_or_create_thread_is_first_writer_wins() {
        let store = MemoryMessageStore::new(SharedChannels::default());
        store
            .insert_channel_message(&message("root", Some("111.222")))
            .await
            .unwrap();

        let first = thread("root");
        let second = thread("root");

        let created = store.find_or_create_thread(&first).await.unwrap();
        let reused = store.find_or_create_thread(&second).await.unwrap();

        assert_eq!(created.id, first.id);
        assert_eq!(reused.id, first.id, "second writer reuses the first thread");
    }

    #[tokio::test]
    async fn find_by_slack_ts_searches_channel_then_threads() {
        let store = MemoryMessageStore::new(SharedChannels::default());
        store
            .insert_channel_message(&message("root", Some("111.222")))
            .await
            .unwrap();
        let t = store.find_or_create_thread(&thread("root")).await.unwrap();
        store
            .insert_thread_message(t.id, &message("reply", Some("111.333")))
            .await
            .unwrap();

        let in_channel = store
            .find_by_slack_ts("srv1", "general", "111.222")
            .await
            .unwrap()
            .expect("root resolves");
        assert_eq!(in_channel.message.id, "root");

        let in_thread = store
            .find_by_slack_ts("srv1", "general", "111.333")
            .await
            .unwrap()
            .expect("reply resolves");
        assert_eq!(in_thread.message.id, "reply");
    }

    #[tokio::test]
    async fn reaction_roundtrip_prunes_empty_entries() {
        let store = MemoryMessageStore::new(SharedChannels::default());
        store
            .insert_channel_message(&message("m1", None))
            .await
            .unwrap();

        let reactor = ReactorId::external(Uuid::new_v4(), "U42");
        store
            .add_reactor("srv1", "general", "m1", "1f44d", &reactor)
            .await
            .unwrap();
        assert_eq!(
            store.reactions("srv1", "general", "m1").await.unwrap().len(),
            1
        );

        store
            .remove_reactor("srv1", "general", "m1", "1f44d", &reactor)
            .await
            .unwrap();
        assert!(
            store
                .reactions("srv1", "general", "m1")
                .await
                .unwrap()
                .is_empty(),
            "empty entry is deleted, not retained"
        );
    }

    #[tokio::test]
    async fn merge_correlation_keeps_first_link() {
        let store = MemoryMessageStore::new(SharedChannels::default());
        store
            .insert_channel_message(&message("m1", None))
            .await
            .unwrap();

        let bridge_id = Uuid::new_v4();
        let first = Correlation {
            slack_ts: "1.0".to_string(),
            slack_channel_id: "C1".to_string(),
            slack_team_id: "T1".to_string(),
            is_thread_reply: false,
            bridge_id,
        };
        let mut second = first.clone();
        second.slack_ts = "2.0".to_string();

        store
            .merge_correlation("srv1", "general", "m1", &first)
            .await
            .unwrap();
        store
            .merge_correlation("srv1", "general", "m1", &second)
            .await
            .unwrap();

        let stored = store
            .get_message("srv1", "general", "m1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            stored.message.correlation.unwrap().slack_ts,
            "1.0",
            "first correlation wins"
        );
    }
}
