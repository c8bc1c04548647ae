use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cache;
pub mod client;

pub use self::cache::{InMemoryUserCache, UserInfoCache};
pub use self::client::SlackClient;

/// Error codes after which a bridge can never succeed again without
/// reconfiguration. Everything else is treated as transient: logged, bridge
/// status untouched, retried on the next natural trigger.
pub const TERMINAL_ERROR_CODES: &[&str] = &[
    "channel_not_found",
    "is_archived",
    "not_in_channel",
    "account_inactive",
    "token_revoked",
    "invalid_auth",
];

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("slack api error: {code}")]
    Api { code: String },
    #[error("slack transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected slack response: {0}")]
    Malformed(String),
}

impl SlackError {
    pub fn api(code: impl Into<String>) -> Self {
        Self::Api { code: code.into() }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Api { code } => TERMINAL_ERROR_CODES.contains(&code.as_str()),
            _ => false,
        }
    }

    /// Reaction state already matched what we asked for; safe to treat as
    /// success since the operations are idempotent.
    pub fn is_noop_reaction(&self) -> bool {
        matches!(self, Self::Api { code } if code == "already_reacted" || code == "no_reaction")
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code } => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackUser {
    pub id: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackChannel {
    pub id: String,
    pub name: String,
    pub is_private: bool,
}

/// One `chat.postMessage` call.
#[derive(Debug, Clone, Default)]
pub struct OutboundPost {
    pub channel: String,
    pub text: String,
    pub username: Option<String>,
    pub icon_url: Option<String>,
    /// Parent timestamp when posting into a Slack thread.
    pub thread_ts: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PostedMessage {
    pub ts: String,
    pub channel: String,
}

/// Result of an `oauth.v2.access` exchange.
pub struct OAuthGrant {
    pub team_id: String,
    pub team_name: Option<String>,
    pub access_token: SecretString,
    pub bot_user_id: String,
}

/// Slack Web API surface the bridge depends on. A trait so the sync engine
/// can be exercised against a double without network access.
#[async_trait]
pub trait SlackApi: Send + Sync {
    async fn post_message(
        &self,
        token: &SecretString,
        post: &OutboundPost,
    ) -> Result<PostedMessage, SlackError>;

    async fn add_reaction(
        &self,
        token: &SecretString,
        channel: &str,
        ts: &str,
        emoji_name: &str,
    ) -> Result<(), SlackError>;

    async fn remove_reaction(
        &self,
        token: &SecretString,
        channel: &str,
        ts: &str,
        emoji_name: &str,
    ) -> Result<(), SlackError>;

    /// Public and private channels, merged across pagination cursors.
    async fn list_channels(&self, token: &SecretString) -> Result<Vec<SlackChannel>, SlackError>;

    async fn user_info(
        &self,
        token: &SecretString,
        user_id: &str,
    ) -> Result<SlackUser, SlackError>;

    async fn oauth_access(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<OAuthGrant, SlackError>;

    async fn team_info(
        &self,
        token: &SecretString,
        team_id: &str,
    ) -> Result<String, SlackError>;
}

/// Inbound webhook envelope, routed on `type`. The `url_verification`
/// challenge never gets this far; the webhook answers it from the raw
/// payload before parsing an envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub team_id: Option<String>,
    pub event: Option<serde_json::Value>,
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    pub channel: String,
    pub user: Option<String>,
    pub bot_id: Option<String>,
    pub subtype: Option<String>,
    #[serde(default)]
    pub text: String,
    pub ts: String,
    pub thread_ts: Option<String>,
}

impl MessageEvent {
    /// A reply carries the root's timestamp in `thread_ts`; the root itself
    /// carries its own.
    pub fn is_thread_reply(&self) -> bool {
        self.thread_ts
            .as_deref()
            .is_some_and(|thread_ts| thread_ts != self.ts)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionEvent {
    pub user: String,
    pub reaction: String,
    pub item: ReactionItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub channel: String,
    pub ts: String,
}
