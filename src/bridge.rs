//! Sync engine core: inbound Slack events, outbound mirroring, OAuth
//! completion, and the workspace channel query.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::parsers::{emoji, mrkdwn};
use crate::slack::{
    EventEnvelope, MessageEvent, ReactionEvent, SlackApi, SlackChannel, SlackError, UserInfoCache,
};
use crate::store::{
    Correlation, Message, MessageLocation, Origin, ReactorId, StoreError, StoreManager, Workspace,
};

pub mod dispatch;
pub mod reactions;
pub mod resolver;
pub mod threads;

use self::dispatch::OutboundDispatcher;
use self::resolver::{message_drop_reason, resolve_inbound, ResolvedInbound};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid oauth state parameter")]
    InvalidState,
    #[error("slack oauth is not configured")]
    OAuthNotConfigured,
    #[error("no workspace connected for server {0}")]
    UnknownServer(String),
    #[error(transparent)]
    Slack(#[from] SlackError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct BridgeCore {
    store: StoreManager,
    slack: Arc<dyn SlackApi>,
    user_cache: Arc<dyn UserInfoCache>,
    config: Config,
    dispatcher: Arc<OutboundDispatcher>,
}

impl BridgeCore {
    pub fn new(
        store: StoreManager,
        slack: Arc<dyn SlackApi>,
        user_cache: Arc<dyn UserInfoCache>,
        config: Config,
    ) -> Self {
        let dispatcher = Arc::new(OutboundDispatcher::new(
            store.clone(),
            slack.clone(),
            config.limits.outbound_concurrency,
        ));
        Self {
            store,
            slack,
            user_cache,
            config,
            dispatcher,
        }
    }

    pub fn store(&self) -> &StoreManager {
        &self.store
    }

    /// Routes one verified `event_callback` envelope. Unrecognized inner
    /// event types are acknowledged and dropped; the webhook must answer
    /// 200 for everything it does not sync.
    pub async fn handle_event_callback(&self, envelope: &EventEnvelope) -> Result<()> {
        let Some(team_id) = envelope.team_id.as_deref() else {
            debug!("event callback dropped reason=missing_team_id");
            return Ok(());
        };
        let Some(event) = envelope.event.as_ref() else {
            debug!("event callback dropped team_id={} reason=missing_event", team_id);
            return Ok(());
        };
        let kind = event.get("type").and_then(|v| v.as_str()).unwrap_or("");

        match kind {
            "message" => match serde_json::from_value::<MessageEvent>(event.clone()) {
                Ok(message) => self.handle_inbound_message(team_id, message).await,
                Err(err) => {
                    warn!("malformed message event team_id={}: {}", team_id, err);
                    Ok(())
                }
            },
            "reaction_added" | "reaction_removed" => {
                match serde_json::from_value::<ReactionEvent>(event.clone()) {
                    Ok(reaction) => {
                        self.handle_inbound_reaction(team_id, reaction, kind == "reaction_added")
                            .await
                    }
                    Err(err) => {
                        warn!("malformed reaction event team_id={}: {}", team_id, err);
                        Ok(())
                    }
                }
            }
            other => {
                debug!("event callback ignored team_id={} type={}", team_id, other);
                Ok(())
            }
        }
    }

    pub async fn handle_inbound_message(&self, team_id: &str, event: MessageEvent) -> Result<()> {
        if let Some(reason) = message_drop_reason(&event, None) {
            debug!(
                "inbound message dropped team_id={} ts={} reason={:?}",
                team_id, event.ts, reason
            );
            return Ok(());
        }

        let ResolvedInbound { workspace, bridge } =
            match resolve_inbound(&self.store, team_id, &event.channel).await? {
                Ok(resolved) => resolved,
                Err(_) => return Ok(()),
            };

        if let Some(reason) = message_drop_reason(&event, Some(&workspace)) {
            debug!(
                "inbound message dropped team_id={} ts={} reason={:?}",
                team_id, event.ts, reason
            );
            return Ok(());
        }
        let Some(user_id) = event.user.clone() else {
            debug!("inbound message dropped ts={} reason=no_user", event.ts);
            return Ok(());
        };

        // Webhook retries redeliver the same event; the Slack timestamp is
        // the dedup key.
        if self
            .store
            .message_store()
            .find_by_slack_ts(&bridge.server_id, &bridge.channel_id, &event.ts)
            .await?
            .is_some()
        {
            debug!("inbound message dropped ts={} reason=duplicate", event.ts);
            return Ok(());
        }

        let (author_name, author_avatar_url) = if bridge.show_slack_usernames {
            self.slack_attribution(&workspace, &user_id).await
        } else {
            (workspace.team_name.clone(), None)
        };

        let now = Utc::now();
        let message = Message {
            id: Uuid::new_v4().to_string(),
            server_id: bridge.server_id.clone(),
            channel_id: bridge.channel_id.clone(),
            author_id: user_id,
            author_name: Some(author_name),
            author_avatar_url,
            body: mrkdwn::to_internal(&event.text),
            origin: Origin::External { bridge_id: bridge.id },
            correlation: Some(Correlation {
                slack_ts: event.ts.clone(),
                slack_channel_id: event.channel.clone(),
                slack_team_id: team_id.to_string(),
                is_thread_reply: event.is_thread_reply(),
                bridge_id: bridge.id,
            }),
            reactions: Default::default(),
            created_at: now,
        };

        if event.is_thread_reply() && bridge.sync_threads {
            self.place_thread_reply(&event, &bridge.server_id, &bridge.channel_id, &message)
                .await?;
        } else {
            self.store
                .message_store()
                .insert_channel_message(&message)
                .await?;
        }

        self.store.bridge_store().record_sync(bridge.id, now).await?;
        debug!(
            "inbound message synced bridge_id={} ts={} message_id={}",
            bridge.id, event.ts, message.id
        );
        Ok(())
    }

    /// Reconciles a Slack thread reply onto an internal thread rooted at the
    /// message correlated with `thread_ts`. When the root is unknown the
    /// reply is stored flat in the channel rather than lost.
    async fn place_thread_reply(
        &self,
        event: &MessageEvent,
        server_id: &str,
        channel_id: &str,
        message: &Message,
    ) -> Result<()> {
        let root_ts = event.thread_ts.as_deref().unwrap_or(&event.ts);
        let Some(root) = self
            .store
            .message_store()
            .find_by_slack_ts(server_id, channel_id, root_ts)
            .await?
        else {
            debug!(
                "thread root unknown thread_ts={} storing_flat=true",
                root_ts
            );
            self.store
                .message_store()
                .insert_channel_message(message)
                .await?;
            return Ok(());
        };

        let now = Utc::now();
        let thread_id = match root.location {
            // Replies to a message that already lives inside a thread join
            // that thread instead of nesting.
            MessageLocation::Thread(existing) => existing,
            MessageLocation::Channel => {
                let candidate =
                    threads::thread_for_root(&root.message, &self.config.threads, now);
                self.store
                    .message_store()
                    .find_or_create_thread(&candidate)
                    .await?
                    .id
            }
        };

        self.store
            .message_store()
            .insert_thread_message(thread_id, message)
            .await?;
        self.store
            .message_store()
            .touch_thread(
                server_id,
                channel_id,
                thread_id,
                now,
                &threads::thread_preview(&message.body),
                threads::archive_deadline(now, self.config.threads.ttl_hours),
            )
            .await?;
        Ok(())
    }

    pub async fn handle_inbound_reaction(
        &self,
        team_id: &str,
        event: ReactionEvent,
        added: bool,
    ) -> Result<()> {
        if event.item.kind != "message" {
            return Ok(());
        }

        let ResolvedInbound { workspace, bridge } =
            match resolve_inbound(&self.store, team_id, &event.item.channel).await? {
                Ok(resolved) => resolved,
                Err(_) => return Ok(()),
            };

        // The bot's own reactions are mirror writes coming back around.
        if event.user == workspace.bot_user_id {
            debug!("inbound reaction dropped ts={} reason=bot_actor", event.item.ts);
            return Ok(());
        }
        if !bridge.sync_reactions {
            return Ok(());
        }

        let Some(located) = self
            .store
            .message_store()
            .find_by_slack_ts(&bridge.server_id, &bridge.channel_id, &event.item.ts)
            .await?
        else {
            debug!(
                "inbound reaction dropped ts={} reason=unknown_message",
                event.item.ts
            );
            return Ok(());
        };

        let key = emoji::reaction_key_for_name(&event.reaction);
        let reactor = ReactorId::external(bridge.id, &event.user);
        let message = &located.message;
        if added {
            self.store
                .message_store()
                .add_reactor(&message.server_id, &message.channel_id, &message.id, &key, &reactor)
                .await?;
        } else {
            self.store
                .message_store()
                .remove_reactor(&message.server_id, &message.channel_id, &message.id, &key, &reactor)
                .await?;
        }

        debug!(
            "inbound reaction synced bridge_id={} ts={} added={} key={}",
            bridge.id, event.item.ts, added, key
        );
        Ok(())
    }

    /// Mirrors one internal message to Slack; fire-and-forget per bridge.
    pub async fn sync_message_outbound(
        &self,
        location: MessageLocation,
        message: Message,
    ) -> Result<()> {
        self.dispatcher
            .sync_message(&crate::store::LocatedMessage { location, message })
            .await
    }

    /// Applies one internal reactor change and mirrors the transition.
    pub async fn sync_reaction_outbound(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        emoji_char: &str,
        user_id: &str,
        added: bool,
    ) -> Result<()> {
        self.dispatcher
            .sync_reaction(server_id, channel_id, message_id, emoji_char, user_id, added)
            .await
    }

    /// Completes an OAuth installation: exchanges the code, enriches the
    /// team name, and persists the workspace grant. Returns the redirect
    /// URL embedded in `state`.
    pub async fn complete_oauth(&self, code: &str, state: &str) -> Result<String, BridgeError> {
        let Some((server_id, redirect_url)) = state.split_once(':') else {
            return Err(BridgeError::InvalidState);
        };
        if server_id.is_empty() || redirect_url.is_empty() {
            return Err(BridgeError::InvalidState);
        }

        let (Some(client_id), Some(client_secret)) = (
            self.config.slack.client_id.as_deref(),
            self.config.slack.client_secret.as_deref(),
        ) else {
            return Err(BridgeError::OAuthNotConfigured);
        };

        let grant = self.slack.oauth_access(client_id, client_secret, code).await?;

        let team_name = match grant.team_name.clone() {
            Some(name) => name,
            None => self
                .slack
                .team_info(&grant.access_token, &grant.team_id)
                .await
                .unwrap_or_else(|err| {
                    debug!("team.info enrichment failed team_id={}: {}", grant.team_id, err);
                    grant.team_id.clone()
                }),
        };

        let workspace = Workspace {
            slack_team_id: grant.team_id.clone(),
            team_name,
            server_id: server_id.to_string(),
            bot_token: grant.access_token,
            bot_user_id: grant.bot_user_id,
            created_at: Utc::now(),
        };
        self.store.workspace_store().upsert_workspace(&workspace).await?;

        info!(
            "workspace connected team_id={} server_id={}",
            grant.team_id, server_id
        );
        Ok(redirect_url.to_string())
    }

    /// Channels of the workspace connected to `server_id`, sorted by name.
    pub async fn list_workspace_channels(
        &self,
        server_id: &str,
    ) -> Result<Vec<SlackChannel>, BridgeError> {
        let Some(workspace) = self.store.workspace_store().get_by_server(server_id).await? else {
            return Err(BridgeError::UnknownServer(server_id.to_string()));
        };

        let mut channels = self.slack.list_channels(&workspace.bot_token).await?;
        channels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(channels)
    }

    /// Best-effort attribution lookup; failures degrade to the raw user id.
    async fn slack_attribution(
        &self,
        workspace: &Workspace,
        user_id: &str,
    ) -> (String, Option<String>) {
        if let Some(user) = self.user_cache.get(&workspace.slack_team_id, user_id) {
            return (user.display_name, user.avatar_url);
        }
        match self.slack.user_info(&workspace.bot_token, user_id).await {
            Ok(user) => {
                self.user_cache
                    .put(&workspace.slack_team_id, user_id, user.clone());
                (user.display_name, user.avatar_url)
            }
            Err(err) => {
                debug!("user info lookup failed user_id={}: {}", user_id, err);
                (user_id.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::Mutex;
    use secrecy::SecretString;
    use serde_json::json;
    use uuid::Uuid;

    use super::{BridgeCore, BridgeError};
    use crate::config::Config;
    use crate::slack::{
        EventEnvelope, InMemoryUserCache, OAuthGrant, OutboundPost, PostedMessage, SlackApi,
        SlackChannel, SlackError, SlackUser,
    };
    use crate::store::{
        Bridge, BridgeStatus, MessageLocation, Origin, ReactorId, StoreManager, SyncDirection,
        Workspace,
    };

    #[derive(Default)]
    struct FakeSlack {
        channels: Mutex<Vec<SlackChannel>>,
        user_info_calls: Mutex<u32>,
    }

    #[async_trait]
    impl SlackApi for FakeSlack {
        async fn post_message(
            &self,
            _token: &SecretString,
            post: &OutboundPost,
        ) -> Result<PostedMessage, SlackError> {
            Ok(PostedMessage {
                ts: "1700000001.000100".to_string(),
                channel: post.channel.clone(),
            })
        }

        async fn add_reaction(
            &self,
            _token: &SecretString,
            _channel: &str,
            _ts: &str,
            _emoji_name: &str,
        ) -> Result<(), SlackError> {
            Ok(())
        }

        async fn remove_reaction(
            &self,
            _token: &SecretString,
            _channel: &str,
            _ts: &str,
            _emoji_name: &str,
        ) -> Result<(), SlackError> {
            Ok(())
        }

        async fn list_channels(
            &self,
            _token: &SecretString,
        ) -> Result<Vec<SlackChannel>, SlackError> {
            Ok(self.channels.lock().clone())
        }

        async fn user_info(
            &self,
            _token: &SecretString,
            user_id: &str,
        ) -> Result<SlackUser, SlackError> {
            *self.user_info_calls.lock() += 1;
            Ok(SlackUser {
                id: user_id.to_string(),
                display_name: format!("user {user_id}"),
                avatar_url: Some("https://example.com/a.png".to_string()),
            })
        }

        async fn oauth_access(
            &self,
            _client_id: &str,
            _client_secret: &str,
            _code: &str,
        ) -> Result<OAuthGrant, SlackError> {
            Ok(OAuthGrant {
                team_id: "TNEW".to_string(),
                team_name: Some("new team".to_string()),
                access_token: "xoxb-granted".to_owned().into(),
                bot_user_id: "UBOT".to_string(),
            })
        }

        async fn team_info(
            &self,
            _token: &SecretString,
            _team_id: &str,
        ) -> Result<String, SlackError> {
            Ok("enriched team".to_string())
        }
    }

    fn bridge() -> Bridge {
        Bridge {
            id: Uuid::new_v4(),
            slack_team_id: "T1".to_string(),
            slack_channel_id: "CSLACK".to_string(),
            server_id: "s1".to_string(),
            channel_id: "c1".to_string(),
            direction: SyncDirection::Bidirectional,
            status: BridgeStatus::Active,
            sync_reactions: true,
            sync_threads: true,
            show_slack_usernames: true,
            display_name_override: None,
            avatar_url_override: None,
            message_count: 0,
            last_sync_at: None,
            last_error: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn workspace() -> Workspace {
        Workspace {
            slack_team_id: "T1".to_string(),
            team_name: "acme".to_string(),
            server_id: "s1".to_string(),
            bot_token: "xoxb-test".to_owned().into(),
            bot_user_id: "UBOT".to_string(),
            created_at: Utc::now(),
        }
    }

    async fn core_with(bridge: &Bridge) -> (BridgeCore, StoreManager, Arc<FakeSlack>) {
        let store = StoreManager::in_memory();
        store
            .workspace_store()
            .upsert_workspace(&workspace())
            .await
            .expect("workspace seeded");
        store
            .bridge_store()
            .create_bridge(bridge)
            .await
            .expect("bridge seeded");
        let slack = Arc::new(FakeSlack::default());
        let core = BridgeCore::new(
            store.clone(),
            slack.clone() as Arc<dyn SlackApi>,
            Arc::new(InMemoryUserCache::new(Duration::from_secs(60))),
            Config::default(),
        );
        (core, store, slack)
    }

    fn message_envelope(ts: &str, text: &str, thread_ts: Option<&str>) -> EventEnvelope {
        let mut event = json!({
            "type": "message",
            "channel": "CSLACK",
            "user": "U1",
            "text": text,
            "ts": ts,
        });
        if let Some(thread_ts) = thread_ts {
            event["thread_ts"] = json!(thread_ts);
        }
        EventEnvelope {
            kind: "event_callback".to_string(),
            team_id: Some("T1".to_string()),
            event: Some(event),
            event_id: Some("Ev1".to_string()),
        }
    }

    #[tokio::test]
    async fn inbound_message_is_stored_transcoded_and_attributed() {
        let br = bridge();
        let (core, store, _slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("1.0", "*hi* <@U99>", None))
            .await
            .expect("event handled");

        let located = store
            .message_store()
            .find_by_slack_ts("s1", "c1", "1.0")
            .await
            .expect("lookup")
            .expect("message stored");
        let message = located.message;
        assert_eq!(message.body, "**hi** @someone");
        assert_eq!(message.origin, Origin::External { bridge_id: br.id });
        assert_eq!(message.author_name.as_deref(), Some("user U1"));
        let correlation = message.correlation.expect("correlation stored");
        assert_eq!(correlation.slack_ts, "1.0");
        assert!(!correlation.is_thread_reply);

        let synced = store
            .bridge_store()
            .get_bridge(br.id)
            .await
            .expect("lookup")
            .expect("bridge present");
        assert_eq!(synced.message_count, 1);
    }

    #[tokio::test]
    async fn duplicate_delivery_is_stored_once() {
        let br = bridge();
        let (core, store, _slack) = core_with(&br).await;

        let envelope = message_envelope("1.0", "hi", None);
        core.handle_event_callback(&envelope).await.expect("first");
        core.handle_event_callback(&envelope).await.expect("retry");

        let synced = store
            .bridge_store()
            .get_bridge(br.id)
            .await
            .expect("lookup")
            .expect("bridge present");
        assert_eq!(synced.message_count, 1, "retry must not double-sync");
    }

    #[tokio::test]
    async fn bot_echo_is_dropped() {
        let br = bridge();
        let (core, store, _slack) = core_with(&br).await;

        let mut envelope = message_envelope("1.0", "hi", None);
        envelope.event.as_mut().expect("event")["bot_id"] = json!("B1");
        core.handle_event_callback(&envelope).await.expect("handled");

        let mut own_bot = message_envelope("2.0", "hi", None);
        own_bot.event.as_mut().expect("event")["user"] = json!("UBOT");
        core.handle_event_callback(&own_bot).await.expect("handled");

        assert!(store
            .message_store()
            .find_by_slack_ts("s1", "c1", "1.0")
            .await
            .expect("lookup")
            .is_none());
        assert!(store
            .message_store()
            .find_by_slack_ts("s1", "c1", "2.0")
            .await
            .expect("lookup")
            .is_none());
    }

    #[tokio::test]
    async fn team_name_attribution_when_usernames_disabled() {
        let mut br = bridge();
        br.show_slack_usernames = false;
        let (core, store, slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("1.0", "hi", None))
            .await
            .expect("handled");

        let located = store
            .message_store()
            .find_by_slack_ts("s1", "c1", "1.0")
            .await
            .expect("lookup")
            .expect("message stored");
        assert_eq!(located.message.author_name.as_deref(), Some("acme"));
        assert_eq!(*slack.user_info_calls.lock(), 0);
    }

    #[tokio::test]
    async fn user_info_is_cached_across_messages() {
        let br = bridge();
        let (core, _store, slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("1.0", "one", None))
            .await
            .expect("handled");
        core.handle_event_callback(&message_envelope("2.0", "two", None))
            .await
            .expect("handled");

        assert_eq!(*slack.user_info_calls.lock(), 1);
    }

    #[tokio::test]
    async fn thread_reply_joins_a_thread_rooted_at_the_correlated_message() {
        let br = bridge();
        let (core, store, _slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("1.0", "root", None))
            .await
            .expect("root handled");
        core.handle_event_callback(&message_envelope("2.0", "reply", Some("1.0")))
            .await
            .expect("reply handled");

        let reply = store
            .message_store()
            .find_by_slack_ts("s1", "c1", "2.0")
            .await
            .expect("lookup")
            .expect("reply stored");
        let MessageLocation::Thread(thread_id) = reply.location else {
            panic!("reply must land in a thread");
        };
        let thread = store
            .message_store()
            .get_thread("s1", "c1", thread_id)
            .await
            .expect("lookup")
            .expect("thread exists");
        assert_eq!(thread.message_count, 1);
        assert_eq!(thread.preview, "reply");
    }

    #[tokio::test]
    async fn reply_to_unknown_root_degrades_to_flat_storage() {
        let br = bridge();
        let (core, store, _slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("2.0", "orphan", Some("1.0")))
            .await
            .expect("handled");

        let located = store
            .message_store()
            .find_by_slack_ts("s1", "c1", "2.0")
            .await
            .expect("lookup")
            .expect("stored");
        assert_eq!(located.location, MessageLocation::Channel);
    }

    #[tokio::test]
    async fn thread_reply_without_thread_sync_is_stored_flat() {
        let mut br = bridge();
        br.sync_threads = false;
        let (core, store, _slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("1.0", "root", None))
            .await
            .expect("root handled");
        core.handle_event_callback(&message_envelope("2.0", "reply", Some("1.0")))
            .await
            .expect("reply handled");

        let located = store
            .message_store()
            .find_by_slack_ts("s1", "c1", "2.0")
            .await
            .expect("lookup")
            .expect("stored");
        assert_eq!(located.location, MessageLocation::Channel);
    }

    fn reaction_envelope(kind: &str, user: &str, name: &str, ts: &str) -> EventEnvelope {
        EventEnvelope {
            kind: "event_callback".to_string(),
            team_id: Some("T1".to_string()),
            event: Some(json!({
                "type": kind,
                "user": user,
                "reaction": name,
                "item": { "type": "message", "channel": "CSLACK", "ts": ts },
            })),
            event_id: Some("Ev2".to_string()),
        }
    }

    #[tokio::test]
    async fn inbound_reaction_adds_and_removes_external_reactor() {
        let br = bridge();
        let (core, store, _slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("1.0", "hi", None))
            .await
            .expect("message handled");
        let message_id = store
            .message_store()
            .find_by_slack_ts("s1", "c1", "1.0")
            .await
            .expect("lookup")
            .expect("stored")
            .message
            .id;

        core.handle_event_callback(&reaction_envelope("reaction_added", "U2", "thumbsup", "1.0"))
            .await
            .expect("reaction handled");

        let reactions = store
            .message_store()
            .reactions("s1", "c1", &message_id)
            .await
            .expect("reactions");
        let reactors = reactions.get("1f44d").expect("thumbsup aggregated");
        assert!(reactors.contains(&ReactorId::external(br.id, "U2")));

        core.handle_event_callback(&reaction_envelope("reaction_removed", "U2", "thumbsup", "1.0"))
            .await
            .expect("removal handled");
        let reactions = store
            .message_store()
            .reactions("s1", "c1", &message_id)
            .await
            .expect("reactions");
        assert!(reactions.is_empty(), "empty aggregates are pruned");
    }

    #[tokio::test]
    async fn bot_actor_reactions_are_discarded() {
        let br = bridge();
        let (core, store, _slack) = core_with(&br).await;

        core.handle_event_callback(&message_envelope("1.0", "hi", None))
            .await
            .expect("message handled");
        core.handle_event_callback(&reaction_envelope("reaction_added", "UBOT", "thumbsup", "1.0"))
            .await
            .expect("reaction handled");

        let message_id = store
            .message_store()
            .find_by_slack_ts("s1", "c1", "1.0")
            .await
            .expect("lookup")
            .expect("stored")
            .message
            .id;
        let reactions = store
            .message_store()
            .reactions("s1", "c1", &message_id)
            .await
            .expect("reactions");
        assert!(reactions.is_empty());
    }

    #[tokio::test]
    async fn complete_oauth_persists_the_workspace_and_returns_redirect() {
        let br = bridge();
        let (core, store, _slack) = {
            let (mut core, store, slack) = core_with(&br).await;
            core.config.slack.client_id = Some("client".to_string());
            core.config.slack.client_secret = Some("secret".to_string());
            (core, store, slack)
        };

        let redirect = core
            .complete_oauth("authcode", "s2:https://app.example.com/settings")
            .await
            .expect("oauth completes");
        assert_eq!(redirect, "https://app.example.com/settings");

        let saved = store
            .workspace_store()
            .get_by_team("TNEW")
            .await
            .expect("lookup")
            .expect("workspace saved");
        assert_eq!(saved.server_id, "s2");
        assert_eq!(saved.team_name, "new team");
        assert_eq!(saved.bot_user_id, "UBOT");
    }

    #[tokio::test]
    async fn complete_oauth_rejects_bad_state_and_missing_config() {
        let br = bridge();
        let (core, _store, _slack) = core_with(&br).await;

        let err = core.complete_oauth("authcode", "nostate").await.expect_err("bad state");
        assert!(matches!(err, BridgeError::InvalidState));

        let err = core
            .complete_oauth("authcode", "s1:https://app.example.com")
            .await
            .expect_err("unconfigured");
        assert!(matches!(err, BridgeError::OAuthNotConfigured));
    }

    #[tokio::test]
    async fn channel_list_is_sorted_and_scoped_to_the_server() {
        let br = bridge();
        let (core, _store, slack) = core_with(&br).await;
        *slack.channels.lock() = vec![
            SlackChannel {
                id: "C2".to_string(),
                name: "zebra".to_string(),
                is_private: true,
            },
            SlackChannel {
                id: "C1".to_string(),
                name: "alpha".to_string(),
                is_private: false,
            },
        ];

        let channels = core.list_workspace_channels("s1").await.expect("channels");
        assert_eq!(channels[0].name, "alpha");
        assert_eq!(channels[1].name, "zebra");

        let err = core
            .list_workspace_channels("s-unknown")
            .await
            .expect_err("unknown server");
        assert!(matches!(err, BridgeError::UnknownServer(_)));
    }
}
