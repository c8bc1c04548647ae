//! Slack mrkdwn → internal markdown.
//!
//! Pure and stateless. Code spans and fenced blocks are never rewritten.
//! No cross-directory identity resolution is attempted for user mentions;
//! they collapse to a generic placeholder.

use once_cell::sync::Lazy;
use regex::Regex;

use super::emoji;
use super::segments::rewrite_outside_code;

static USER_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<@[A-Z0-9]+(?:\|[^>]*)?>").expect("user mention regex compiles"));
static SPECIAL_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!(here|channel|everyone)>").expect("special mention regex compiles"));
static CHANNEL_MENTION_LABELED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<#[A-Z0-9]+\|([^>]+)>").expect("channel mention regex compiles"));
static CHANNEL_MENTION_BARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<#([A-Z0-9]+)>").expect("bare channel mention regex compiles"));
static LABELED_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(https?://[^|>]+)\|([^>]+)>").expect("labeled link regex compiles"));
static BARE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(https?://[^>]+)>").expect("bare link regex compiles"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").expect("bold regex compiles"));
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([^_\n]+)_").expect("italic regex compiles"));
static STRIKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~([^~\n]+)~").expect("strike regex compiles"));

pub const MENTION_PLACEHOLDER: &str = "@someone";

/// Converts one Slack mrkdwn body to internal markdown.
pub fn to_internal(text: &str) -> String {
    rewrite_outside_code(text, rewrite_text)
}

fn rewrite_text(text: &str) -> String {
    let text = USER_MENTION_RE.replace_all(text, MENTION_PLACEHOLDER);
    let text = SPECIAL_MENTION_RE.replace_all(&text, "@$1");
    let text = CHANNEL_MENTION_LABELED_RE.replace_all(&text, "#$1");
    let text = CHANNEL_MENTION_BARE_RE.replace_all(&text, "#$1");
    let text = LABELED_LINK_RE.replace_all(&text, "[$2]($1)");
    let text = BARE_LINK_RE.replace_all(&text, "$1");
    // Bold runs before italic: once `*x*` has become `**x**` the italic
    // rule below only sees underscores.
    let text = BOLD_RE.replace_all(&text, "**$1**");
    let text = ITALIC_RE.replace_all(&text, "*$1*");
    let text = STRIKE_RE.replace_all(&text, "~~$1~~");
    emoji::decode_colon_names(&text)
}
