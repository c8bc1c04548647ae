//! Inbound event admission: workspace/bridge resolution and the checks that
//! keep bot echoes and unsyncable events out of the pipeline.

use anyhow::Result;
use tracing::debug;

use crate::slack::MessageEvent;
use crate::store::{Bridge, StoreManager, Workspace};

/// Message subtypes that are never synchronized. Bot messages are the loop
/// prevention backstop; the rest are channel housekeeping noise. Edits and
/// deletions arrive as subtypes too and are deliberately not synced.
const SKIPPED_SUBTYPES: &[&str] = &[
    "bot_message",
    "channel_join",
    "channel_leave",
    "channel_topic",
    "channel_purpose",
    "channel_name",
    "message_changed",
    "message_deleted",
    "thread_broadcast",
];

pub struct ResolvedInbound {
    pub workspace: Workspace,
    pub bridge: Bridge,
}

/// Why an inbound event was dropped, for debug logs only. Every drop is a
/// clean 200 to Slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    SkippedSubtype,
    BotEcho,
    UnknownWorkspace,
    NoActiveBridge,
    DirectionForbidsInbound,
}

/// Admission check for an inbound message event. Callers run it once with
/// no workspace before touching the store (subtype and `bot_id` need no
/// lookup) and again after resolution for the own-bot check.
pub fn message_drop_reason(
    event: &MessageEvent,
    workspace: Option<&Workspace>,
) -> Option<DropReason> {
    if let Some(subtype) = event.subtype.as_deref() {
        if SKIPPED_SUBTYPES.contains(&subtype) {
            return Some(DropReason::SkippedSubtype);
        }
    }
    if event.bot_id.is_some() {
        return Some(DropReason::BotEcho);
    }
    if let Some(workspace) = workspace {
        if event.user.as_deref() == Some(workspace.bot_user_id.as_str()) {
            return Some(DropReason::BotEcho);
        }
    }
    None
}

/// Resolves the workspace and active bridge for an inbound Slack channel.
pub async fn resolve_inbound(
    store: &StoreManager,
    slack_team_id: &str,
    slack_channel_id: &str,
) -> Result<Result<ResolvedInbound, DropReason>> {
    let Some(workspace) = store.workspace_store().get_by_team(slack_team_id).await? else {
        debug!("inbound dropped team_id={} reason=unknown_workspace", slack_team_id);
        return Ok(Err(DropReason::UnknownWorkspace));
    };

    let Some(bridge) = store
        .bridge_store()
        .find_active_by_slack_channel(slack_team_id, slack_channel_id)
        .await?
    else {
        debug!(
            "inbound dropped team_id={} channel_id={} reason=no_active_bridge",
            slack_team_id, slack_channel_id
        );
        return Ok(Err(DropReason::NoActiveBridge));
    };

    if !bridge.direction.allows_inbound() {
        debug!(
            "inbound dropped bridge_id={} reason=direction_forbids_inbound",
            bridge.id
        );
        return Ok(Err(DropReason::DirectionForbidsInbound));
    }

    Ok(Ok(ResolvedInbound { workspace, bridge }))
}
