use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod memory;

use self::memory::{MemoryBridgeStore, MemoryMessageStore, MemoryWorkspaceStore, SharedChannels};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncDirection {
    InboundOnly,
    OutboundOnly,
    Bidirectional,
}

impl SyncDirection {
    pub fn allows_inbound(self) -> bool {
        matches!(self, Self::InboundOnly | Self::Bidirectional)
    }

    pub fn allows_outbound(self) -> bool {
        matches!(self, Self::OutboundOnly | Self::Bidirectional)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeStatus {
    Active,
    Paused,
    Error,
    Disconnected,
}

/// One synchronized channel pair. Mutated by every sync attempt, moved to
/// `Error` after a terminal Slack failure, never auto-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bridge {
    pub id: Uuid,
    pub slack_team_id: String,
    pub slack_channel_id: String,
    pub server_id: String,
    pub channel_id: String,
    pub direction: SyncDirection,
    pub status: BridgeStatus,
    pub sync_reactions: bool,
    pub sync_threads: bool,
    pub show_slack_usernames: bool,
    pub display_name_override: Option<String>,
    pub avatar_url_override: Option<String>,
    pub message_count: i64,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One Slack OAuth grant, scoped to one internal server. Read-only to the
/// bridge at sync time.
pub struct Workspace {
    pub slack_team_id: String,
    pub team_name: String,
    pub server_id: String,
    pub bot_token: SecretString,
    pub bot_user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Clone for Workspace {
    fn clone(&self) -> Self {
        Self {
            slack_team_id: self.slack_team_id.clone(),
            team_name: self.team_name.clone(),
            server_id: self.server_id.clone(),
            bot_token: self.bot_token.expose_secret().to_owned().into(),
            bot_user_id: self.bot_user_id.clone(),
            created_at: self.created_at,
        }
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("slack_team_id", &self.slack_team_id)
            .field("team_name", &self.team_name)
            .field("server_id", &self.server_id)
            .field("bot_token", &"[redacted]")
            .field("bot_user_id", &self.bot_user_id)
            .finish()
    }
}

/// Where a message came from. Checked once at the boundary; everything
/// downstream branches on this instead of re-deriving it from flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    Internal,
    External { bridge_id: Uuid },
}

impl Origin {
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

/// Soft link between an internal message and its Slack counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correlation {
    pub slack_ts: String,
    pub slack_channel_id: String,
    pub slack_team_id: String,
    pub is_thread_reply: bool,
    pub bridge_id: Uuid,
}

/// Identifier of one reactor within a reaction aggregate. External reactors
/// carry the owning bridge so the outbound diff can skip mirroring them back
/// to the platform that produced them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactorId(String);

impl ReactorId {
    pub fn internal(user_id: &str) -> Self {
        Self(user_id.to_string())
    }

    pub fn external(bridge_id: Uuid, slack_user_id: &str) -> Self {
        Self(format!("slack:{bridge_id}:{slack_user_id}"))
    }

    /// Whether this reactor was imported through the given bridge. Keeps the
    /// id encoding private to this type.
    pub fn is_from_bridge(&self, bridge_id: Uuid) -> bool {
        self.0
            .strip_prefix("slack:")
            .and_then(|rest| rest.split_once(':'))
            .is_some_and(|(id, _)| id == bridge_id.to_string())
    }
}

/// Per-message reaction aggregate, keyed by the emoji's code points (see
/// `parsers::emoji::storage_key`), never by raw emoji text.
pub type ReactionMap = BTreeMap<String, BTreeSet<ReactorId>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub server_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_name: Option<String>,
    pub author_avatar_url: Option<String>,
    pub body: String,
    pub origin: Origin,
    pub correlation: Option<Correlation>,
    #[serde(default)]
    pub reactions: ReactionMap,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadStatus {
    Active,
    Archived,
}

/// Reply-chain entity rooted at one channel message. Lazily created, never
/// merged or split; the archive deadline moves forward on every message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: Uuid,
    pub server_id: String,
    pub channel_id: String,
    pub root_message_id: String,
    pub creator_id: String,
    pub preview: String,
    pub member_cap: u32,
    pub message_count: i64,
    pub last_message_at: DateTime<Utc>,
    pub auto_archive_at: DateTime<Utc>,
    pub status: ThreadStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLocation {
    Channel,
    Thread(Uuid),
}

#[derive(Debug, Clone)]
pub struct LocatedMessage {
    pub location: MessageLocation,
    pub message: Message,
}

#[async_trait]
pub trait BridgeStore: Send + Sync {
    async fn create_bridge(&self, bridge: &Bridge) -> Result<(), StoreError>;

    async fn get_bridge(&self, id: Uuid) -> Result<Option<Bridge>, StoreError>;

    /// Indexed lookup on `(slack_team_id, slack_channel_id, status)`. There
    /// is at most one active bridge per external pair.
    async fn find_active_by_slack_channel(
        &self,
        slack_team_id: &str,
        slack_channel_id: &str,
    ) -> Result<Option<Bridge>, StoreError>;

    /// Every bridge configured for an internal channel, regardless of status
    /// or direction. Callers filter; outbound fan-out must never
    /// short-circuit on the first match.
    async fn find_by_channel(
        &self,
        server_id: &str,
        channel_id: &str,
    ) -> Result<Vec<Bridge>, StoreError>;

    async fn set_status(
        &self,
        id: Uuid,
        status: BridgeStatus,
        last_error: Option<String>,
    ) -> Result<(), StoreError>;

    /// Increments the message counter and stamps `last_sync_at`.
    async fn record_sync(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError>;

    async fn count_bridges(&self) -> Result<i64, StoreError>;
}

#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    async fn get_by_team(&self, slack_team_id: &str) -> Result<Option<Workspace>, StoreError>;

    async fn get_by_server(&self, server_id: &str) -> Result<Option<Workspace>, StoreError>;

    async fn upsert_workspace(&self, workspace: &Workspace) -> Result<(), StoreError>;
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert_channel_message(&self, message: &Message) -> Result<(), StoreError>;

    async fn insert_thread_message(
        &self,
        thread_id: Uuid,
        message: &Message,
    ) -> Result<(), StoreError>;

    async fn get_message(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Option<LocatedMessage>, StoreError>;

    /// Resolves a message by its Slack timestamp correlation. Channel
    /// messages are searched first, then each thread's messages.
    async fn find_by_slack_ts(
        &self,
        server_id: &str,
        channel_id: &str,
        slack_ts: &str,
    ) -> Result<Option<LocatedMessage>, StoreError>;

    /// Idempotent correlation write-back after an outbound post: the first
    /// stored correlation wins, later merges are no-ops.
    async fn merge_correlation(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        correlation: &Correlation,
    ) -> Result<(), StoreError>;

    /// Commutative set insert; creates the emoji entry when absent.
    async fn add_reactor(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        emoji_key: &str,
        reactor: &ReactorId,
    ) -> Result<(), StoreError>;

    /// Commutative set removal; an entry whose reactor set becomes empty is
    /// deleted, never left as a zero-reactor placeholder.
    async fn remove_reactor(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        emoji_key: &str,
        reactor: &ReactorId,
    ) -> Result<(), StoreError>;

    async fn reactions(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
    ) -> Result<ReactionMap, StoreError>;

    /// First-writer-wins thread creation keyed on the root message id.
    /// Concurrent creators race safely: the loser gets the winner's thread.
    async fn find_or_create_thread(&self, thread: &Thread) -> Result<Thread, StoreError>;

    async fn get_thread(
        &self,
        server_id: &str,
        channel_id: &str,
        thread_id: Uuid,
    ) -> Result<Option<Thread>, StoreError>;

    /// Bumps `message_count`, `last_message_at`, the preview, and pushes the
    /// auto-archive deadline forward.
    async fn touch_thread(
        &self,
        server_id: &str,
        channel_id: &str,
        thread_id: Uuid,
        last_message_at: DateTime<Utc>,
        preview: &str,
        auto_archive_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}

/// Holds the store trait objects behind one handle, mirroring how the rest
/// of the application injects its document store. The in-memory stores back
/// tests and local runs; a deployment wires real document-store adapters.
#[derive(Clone)]
pub struct StoreManager {
    bridge_store: Arc<dyn BridgeStore>,
    workspace_store: Arc<dyn WorkspaceStore>,
    message_store: Arc<dyn MessageStore>,
}

impl StoreManager {
    pub fn new(
        bridge_store: Arc<dyn BridgeStore>,
        workspace_store: Arc<dyn WorkspaceStore>,
        message_store: Arc<dyn MessageStore>,
    ) -> Self {
        Self {
            bridge_store,
            workspace_store,
            message_store,
        }
    }

    pub fn in_memory() -> Self {
        let channels = SharedChannels::default();
        Self::new(
            Arc::new(MemoryBridgeStore::default()),
            Arc::new(MemoryWorkspaceStore::default()),
            Arc::new(MemoryMessageStore::new(channels)),
        )
    }

    pub fn bridge_store(&self) -> Arc<dyn BridgeStore> {
        self.bridge_store.clone()
    }

    pub fn workspace_store(&self) -> Arc<dyn WorkspaceStore> {
        self.workspace_store.clone()
    }

    pub fn message_store(&self) -> Arc<dyn MessageStore> {
        self.message_store.clone()
    }
}
