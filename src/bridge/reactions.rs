//! Reaction mirroring rules.
//!
//! The store keeps the full reactor set per emoji; Slack only ever sees one
//! bot reaction per emoji. Mirroring therefore collapses the set to a
//! presence bit: add the bot reaction on the transition from zero mirrored
//! reactors, remove it on the transition back to zero. Reactors that came
//! from the target bridge itself are excluded so Slack-originated reactions
//! are never echoed back.

use uuid::Uuid;

use crate::store::ReactionMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAction {
    Add,
    Remove,
}

/// Reactors for `emoji_key` that should be represented on the Slack side of
/// `bridge_id`: everyone except reactors the bridge itself imported.
pub fn mirrored_count(reactions: &ReactionMap, emoji_key: &str, bridge_id: Uuid) -> usize {
    reactions
        .get(emoji_key)
        .map(|reactors| {
            reactors
                .iter()
                .filter(|reactor| !reactor.is_from_bridge(bridge_id))
                .count()
        })
        .unwrap_or(0)
}

/// Mirror action after one reactor change has already been applied to the
/// aggregate. `None` means the Slack side already reflects the new state.
pub fn mirror_action(
    reactions: &ReactionMap,
    emoji_key: &str,
    bridge_id: Uuid,
    added: bool,
) -> Option<MirrorAction> {
    let count = mirrored_count(reactions, emoji_key, bridge_id);
    if added && count == 1 {
        Some(MirrorAction::Add)
    } else if !added && count == 0 {
        Some(MirrorAction::Remove)
    } else {
        None
    }
}
