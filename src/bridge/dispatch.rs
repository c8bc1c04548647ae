//! Outbound fan-out: internal messages and reaction changes mirrored to
//! every eligible Slack bridge.
//!
//! Failures are isolated per bridge. A terminal Slack error code moves that
//! bridge to `Error` status; everything else is logged and the bridge stays
//! eligible for the next attempt. Nothing here ever propagates an error to
//! the internal caller beyond store failures.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use futures::{stream, StreamExt};
use secrecy::SecretString;
use tracing::{debug, warn};

use super::reactions::{mirror_action, MirrorAction};
use crate::parsers::{emoji, markdown};
use crate::slack::{OutboundPost, SlackApi, SlackError};
use crate::store::{
    Bridge, BridgeStatus, Correlation, LocatedMessage, Message, MessageLocation, StoreManager,
};

pub struct OutboundDispatcher {
    store: StoreManager,
    slack: Arc<dyn SlackApi>,
    concurrency: usize,
}

/// Parent resolution for an outbound thread reply.
enum ThreadParent {
    /// Post under this Slack timestamp; `None` degrades to a flat post.
    Ts(Option<String>),
    /// The root backfill failed terminally and disabled the bridge; the
    /// reply is not posted.
    BridgeDisabled,
}

impl OutboundDispatcher {
    pub fn new(store: StoreManager, slack: Arc<dyn SlackApi>, concurrency: usize) -> Self {
        Self {
            store,
            slack,
            concurrency: concurrency.max(1),
        }
    }

    /// Mirrors one internal message to every active outbound bridge of its
    /// channel. The message is expected to already be persisted.
    pub async fn sync_message(&self, located: &LocatedMessage) -> Result<()> {
        let message = &located.message;
        if message.origin.is_external() {
            debug!(
                "outbound skipped message_id={} reason=external_origin",
                message.id
            );
            return Ok(());
        }

        let bridges: Vec<Bridge> = self
            .store
            .bridge_store()
            .find_by_channel(&message.server_id, &message.channel_id)
            .await?
            .into_iter()
            .filter(|bridge| {
                bridge.status == BridgeStatus::Active && bridge.direction.allows_outbound()
            })
            .collect();
        if bridges.is_empty() {
            return Ok(());
        }

        let text = markdown::to_mrkdwn(&message.body);
        debug!(
            "outbound fanout message_id={} bridges={} text_len={}",
            message.id,
            bridges.len(),
            text.len()
        );

        stream::iter(bridges)
            .for_each_concurrent(self.concurrency, |bridge| {
                let text = text.clone();
                async move {
                    if let Err(err) = self.dispatch_to_bridge(&bridge, located, &text).await {
                        warn!(
                            "outbound dispatch failed bridge_id={} message_id={}: {}",
                            bridge.id, located.message.id, err
                        );
                    }
                }
            })
            .await;

        Ok(())
    }

    async fn dispatch_to_bridge(
        &self,
        bridge: &Bridge,
        located: &LocatedMessage,
        text: &str,
    ) -> Result<()> {
        let message = &located.message;
        let Some(workspace) = self
            .store
            .workspace_store()
            .get_by_team(&bridge.slack_team_id)
            .await?
        else {
            warn!(
                "outbound dropped bridge_id={} reason=missing_workspace team_id={}",
                bridge.id, bridge.slack_team_id
            );
            return Ok(());
        };

        let thread_ts = match located.location {
            MessageLocation::Thread(thread_id) if bridge.sync_threads => {
                match self
                    .resolve_thread_ts(bridge, &workspace.bot_token, message, thread_id)
                    .await?
                {
                    ThreadParent::Ts(ts) => ts,
                    ThreadParent::BridgeDisabled => return Ok(()),
                }
            }
            // Thread replies degrade to flat channel posts when thread sync
            // is off or the root cannot be correlated.
            _ => None,
        };

        let post = OutboundPost {
            channel: bridge.slack_channel_id.clone(),
            text: text.to_string(),
            username: display_name(bridge, message),
            icon_url: icon_url(bridge, message),
            thread_ts,
        };

        match self.slack.post_message(&workspace.bot_token, &post).await {
            Ok(posted) => {
                let correlation = Correlation {
                    slack_ts: posted.ts,
                    slack_channel_id: posted.channel,
                    slack_team_id: bridge.slack_team_id.clone(),
                    is_thread_reply: post.thread_ts.is_some(),
                    bridge_id: bridge.id,
                };
                self.store
                    .message_store()
                    .merge_correlation(
                        &message.server_id,
                        &message.channel_id,
                        &message.id,
                        &correlation,
                    )
                    .await?;
                self.store
                    .bridge_store()
                    .record_sync(bridge.id, Utc::now())
                    .await?;
                debug!(
                    "outbound posted bridge_id={} message_id={} slack_ts={}",
                    bridge.id, message.id, correlation.slack_ts
                );
                Ok(())
            }
            Err(err) => self.handle_slack_failure(bridge, err).await,
        }
    }

    /// Slack parent timestamp for a thread reply. When the internal root has
    /// never been posted to this bridge it is backfilled first so the reply
    /// lands in a real Slack thread instead of dangling.
    async fn resolve_thread_ts(
        &self,
        bridge: &Bridge,
        token: &SecretString,
        message: &Message,
        thread_id: uuid::Uuid,
    ) -> Result<ThreadParent> {
        let Some(thread) = self
            .store
            .message_store()
            .get_thread(&message.server_id, &message.channel_id, thread_id)
            .await?
        else {
            return Ok(ThreadParent::Ts(None));
        };

        let Some(root) = self
            .store
            .message_store()
            .get_message(&message.server_id, &message.channel_id, &thread.root_message_id)
            .await?
        else {
            return Ok(ThreadParent::Ts(None));
        };
        let root = root.message;

        if let Some(correlation) = &root.correlation {
            if correlation.bridge_id == bridge.id {
                return Ok(ThreadParent::Ts(Some(correlation.slack_ts.clone())));
            }
            // Correlated to a different bridge; no parent on this one.
            return Ok(ThreadParent::Ts(None));
        }

        if root.origin.is_external() {
            return Ok(ThreadParent::Ts(None));
        }

        let backfill = OutboundPost {
            channel: bridge.slack_channel_id.clone(),
            text: markdown::to_mrkdwn(&root.body),
            username: display_name(bridge, &root),
            icon_url: icon_url(bridge, &root),
            thread_ts: None,
        };
        let posted = match self.slack.post_message(token, &backfill).await {
            Ok(posted) => posted,
            // A terminal code on the backfill escalates the bridge the same
            // way a direct post would; the reply is dropped with it.
            Err(err) if err.is_terminal() => {
                self.handle_slack_failure(bridge, err).await?;
                return Ok(ThreadParent::BridgeDisabled);
            }
            Err(err) => return Err(err.into()),
        };
        debug!(
            "outbound root backfilled bridge_id={} root_message_id={} slack_ts={}",
            bridge.id, root.id, posted.ts
        );

        let correlation = Correlation {
            slack_ts: posted.ts.clone(),
            slack_channel_id: posted.channel,
            slack_team_id: bridge.slack_team_id.clone(),
            is_thread_reply: false,
            bridge_id: bridge.id,
        };
        self.store
            .message_store()
            .merge_correlation(&root.server_id, &root.channel_id, &root.id, &correlation)
            .await?;

        Ok(ThreadParent::Ts(Some(posted.ts)))
    }

    /// Applies one internal reactor change and mirrors the aggregate
    /// transition to the correlated Slack message, if any.
    pub async fn sync_reaction(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        emoji_char: &str,
        user_id: &str,
        added: bool,
    ) -> Result<()> {
        let reactor = crate::store::ReactorId::internal(user_id);
        let key = emoji::storage_key(emoji_char);

        let message_store = self.store.message_store();
        if added {
            message_store
                .add_reactor(server_id, channel_id, message_id, &key, &reactor)
                .await?;
        } else {
            message_store
                .remove_reactor(server_id, channel_id, message_id, &key, &reactor)
                .await?;
        }

        let Some(located) = message_store
            .get_message(server_id, channel_id, message_id)
            .await?
        else {
            return Ok(());
        };
        let Some(correlation) = located.message.correlation else {
            // Never posted to Slack; the aggregate update alone is enough.
            return Ok(());
        };

        let Some(bridge) = self.store.bridge_store().get_bridge(correlation.bridge_id).await?
        else {
            return Ok(());
        };
        if bridge.status != BridgeStatus::Active
            || !bridge.direction.allows_outbound()
            || !bridge.sync_reactions
        {
            return Ok(());
        }

        let reactions = message_store.reactions(server_id, channel_id, message_id).await?;
        let Some(action) = mirror_action(&reactions, &key, bridge.id, added) else {
            return Ok(());
        };

        let Some(name) = emoji::reaction_name_for_key(&key) else {
            debug!(
                "reaction mirror skipped bridge_id={} key={} reason=no_slack_name",
                bridge.id, key
            );
            return Ok(());
        };

        let Some(workspace) = self
            .store
            .workspace_store()
            .get_by_team(&bridge.slack_team_id)
            .await?
        else {
            return Ok(());
        };

        let result = match action {
            MirrorAction::Add => {
                self.slack
                    .add_reaction(
                        &workspace.bot_token,
                        &correlation.slack_channel_id,
                        &correlation.slack_ts,
                        name,
                    )
                    .await
            }
            MirrorAction::Remove => {
                self.slack
                    .remove_reaction(
                        &workspace.bot_token,
                        &correlation.slack_channel_id,
                        &correlation.slack_ts,
                        name,
                    )
                    .await
            }
        };

        match result {
            Ok(()) => {
                debug!(
                    "reaction mirrored bridge_id={} action={:?} name={}",
                    bridge.id, action, name
                );
                Ok(())
            }
            Err(err) => self.handle_slack_failure(&bridge, err).await,
        }
    }

    async fn handle_slack_failure(&self, bridge: &Bridge, err: SlackError) -> Result<()> {
        if err.is_terminal() {
            let code = err.code().unwrap_or("unknown_error").to_string();
            warn!(
                "bridge disabled bridge_id={} terminal_error={}",
                bridge.id, code
            );
            self.store
                .bridge_store()
                .set_status(bridge.id, BridgeStatus::Error, Some(code))
                .await?;
            Ok(())
        } else {
            warn!("transient slack failure bridge_id={}: {}", bridge.id, err);
            Ok(())
        }
    }
}

/// Attribution override chain for outbound posts.
fn display_name(bridge: &Bridge, message: &Message) -> Option<String> {
    bridge
        .display_name_override
        .clone()
        .or_else(|| message.author_name.clone())
        .or_else(|| Some(message.author_id.clone()))
}

fn icon_url(bridge: &Bridge, message: &Message) -> Option<String> {
    bridge
        .avatar_url_override
        .clone()
        .or_else(|| message.author_avatar_url.clone())
}
