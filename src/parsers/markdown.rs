//! Internal markdown → Slack mrkdwn.
//!
//! Inverse of `mrkdwn::to_internal` for the supported forms. Code spans and
//! fenced blocks are never rewritten.

use once_cell::sync::Lazy;
use regex::Regex;

use super::emoji;
use super::segments::rewrite_outside_code;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").expect("link regex compiles"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("bold regex compiles"));
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").expect("italic regex compiles"));
static STRIKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~~([^~\n]+)~~").expect("strike regex compiles"));

// The regex crate has no lookaround, so bold output is parked on private-use
// sentinels until the single-asterisk italic pass has run; otherwise `*b*`
// produced from `**b**` would be re-matched as italic.
const BOLD_OPEN: char = '\u{e000}';
const BOLD_CLOSE: char = '\u{e001}';

/// Converts one internal markdown body to Slack mrkdwn.
pub fn to_mrkdwn(text: &str) -> String {
    rewrite_outside_code(text, rewrite_text)
}

fn rewrite_text(text: &str) -> String {
    let text = LINK_RE.replace_all(text, "<$2|$1>");
    let text = BOLD_RE.replace_all(&text, format!("{BOLD_OPEN}$1{BOLD_CLOSE}").as_str());
    // `$1_` would parse as a (nonexistent) capture group named `1_`, so the
    // group reference has to be braced here.
    let text = ITALIC_RE.replace_all(&text, "_${1}_");
    let text: String = text
        .chars()
        .map(|c| match c {
            BOLD_OPEN | BOLD_CLOSE => '*',
            other => other,
        })
        .collect();
    let text = STRIKE_RE.replace_all(&text, "~$1~");
    emoji::encode_unicode_emoji(&text)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::to_mrkdwn;
    use crate::parsers::mrkdwn::to_internal;

    #[test_case("**hi**", "*hi*"; "bold")]
    #[test_case("*hi*", "_hi_"; "italic")]
    #[test_case("~~hi~~", "~hi~"; "strikethrough")]
    #[test_case("**b** and *i* and ~~s~~", "*b* and _i_ and ~s~"; "mixed styles")]
    fn style_conversion(input: &str, expected: &str) {
        assert_eq!(to_mrkdwn(input), expected);
    }

    #[test]
    fn bold_is_not_mistaken_for_italic() {
        assert_eq!(to_mrkdwn("**b** *i*"), "*b* _i_");
    }

    #[test]
    fn bracket_links_become_pipe_links() {
        assert_eq!(
            to_mrkdwn("[docs](https://example.com/a)"),
            "<https://example.com/a|docs>"
        );
    }

    #[test]
    fn code_spans_are_untouched() {
        assert_eq!(to_mrkdwn("`**hi**`"), "`**hi**`");
        assert_eq!(to_mrkdwn("```\n**hi**\n```"), "```\n**hi**\n```");
    }

    #[test]
    fn known_unicode_emoji_becomes_colon_name() {
        assert_eq!(to_mrkdwn("nice 🔥"), "nice :fire:");
    }

    #[test_case("*hi*"; "bold")]
    #[test_case("_em_"; "italic")]
    #[test_case("~gone~"; "strikethrough")]
    #[test_case("<https://example.com/x|label>"; "labeled link")]
    fn external_internal_external_is_idempotent(input: &str) {
        let once = to_mrkdwn(&to_internal(input));
        assert_eq!(once, input);
        let twice = to_mrkdwn(&to_internal(&once));
        assert_eq!(twice, once);
    }
}
