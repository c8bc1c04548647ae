use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::emoji_data::EMOJI_TABLE;

static NAME_TO_EMOJI: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| EMOJI_TABLE.iter().copied().collect());

/// Reverse map. Aliases share a code point sequence; the first table entry
/// for a sequence is the canonical name used when encoding outward.
static EMOJI_TO_NAME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (name, emoji) in EMOJI_TABLE.iter().copied() {
        map.entry(emoji).or_insert(name);
    }
    map
});

/// Candidate emoji grouped by leading char, longest sequence first, so the
/// text scanner can greedily match multi-code-point emoji (flags, variation
/// selectors) before their prefixes.
static EMOJI_BY_FIRST_CHAR: Lazy<HashMap<char, Vec<&'static str>>> = Lazy::new(|| {
    let mut map: HashMap<char, Vec<&'static str>> = HashMap::new();
    for emoji in EMOJI_TO_NAME.keys() {
        if let Some(first) = emoji.chars().next() {
            map.entry(first).or_default().push(emoji);
        }
    }
    for candidates in map.values_mut() {
        candidates.sort_by_key(|e| std::cmp::Reverse(e.len()));
    }
    map
});

static COLON_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([a-z0-9_+'-]+(?:::skin-tone-[2-6])?):").expect("emoji name regex compiles")
});

/// Drops a Slack skin-tone variant suffix (`thumbsup::skin-tone-3`) before
/// table lookup.
pub fn strip_skin_tone(name: &str) -> &str {
    match name.split_once("::skin-tone-") {
        Some((base, _)) => base,
        None => name,
    }
}

pub fn emoji_for_name(name: &str) -> Option<&'static str> {
    NAME_TO_EMOJI.get(strip_skin_tone(name)).copied()
}

pub fn name_for_emoji(emoji: &str) -> Option<&'static str> {
    EMOJI_TO_NAME.get(emoji).copied()
}

/// Decodes one external emoji name to Unicode. Unknown names come back
/// wrapped in colons as a visible fallback instead of being dropped.
pub fn decode_name(name: &str) -> String {
    match emoji_for_name(name) {
        Some(emoji) => emoji.to_string(),
        None => format!(":{}:", strip_skin_tone(name)),
    }
}

/// Storage-safe reaction key: the emoji's code points hex-encoded and joined
/// with `-` (`👍` → `1f44d`, a US flag → `1f1fa-1f1f8`). This is a bijective
/// re-encoding of the scalar sequence, so it is injective for every emoji
/// including ZWJ sequences and combining marks.
pub fn storage_key(emoji: &str) -> String {
    emoji
        .chars()
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

pub fn emoji_from_storage_key(key: &str) -> Option<String> {
    key.split('-')
        .map(|part| u32::from_str_radix(part, 16).ok().and_then(char::from_u32))
        .collect()
}

/// Reaction key for an inbound external emoji name. Known names key by
/// their code points; unknown names key by the code points of the name text
/// itself, which cannot collide with any emoji sequence (ASCII letters are
/// not emoji scalars).
pub fn reaction_key_for_name(name: &str) -> String {
    match emoji_for_name(name) {
        Some(emoji) => storage_key(emoji),
        None => storage_key(strip_skin_tone(name)),
    }
}

/// External reaction name for a stored key, when the emoji is in the table.
pub fn reaction_name_for_key(key: &str) -> Option<&'static str> {
    emoji_from_storage_key(key).and_then(|emoji| name_for_emoji(&emoji))
}

/// Rewrites `:name:` tokens in inbound text to Unicode. Unknown names stay
/// as `:name:` (skin-tone suffix stripped) rather than disappearing.
pub fn decode_colon_names(text: &str) -> String {
    COLON_NAME_RE
        .replace_all(text, |caps: &regex::Captures<'_>| decode_name(&caps[1]))
        .into_owned()
}

/// Rewrites known Unicode emoji in outbound text to `:name:` form. Unknown
/// Unicode passes through unchanged; Slack renders raw Unicode fine.
pub fn encode_unicode_emoji(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'outer: while let Some(c) = rest.chars().next() {
        if let Some(candidates) = EMOJI_BY_FIRST_CHAR.get(&c) {
            for emoji in candidates {
                if let Some(after) = rest.strip_prefix(emoji) {
                    out.push(':');
                    out.push_str(EMOJI_TO_NAME[emoji]);
                    out.push(':');
                    rest = after;
                    continue 'outer;
                }
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{
        decode_colon_names, decode_name, emoji_for_name, emoji_from_storage_key,
        encode_unicode_emoji, name_for_emoji, reaction_key_for_name, reaction_name_for_key,
        storage_key, strip_skin_tone,
    };
    use crate::parsers::emoji_data::EMOJI_TABLE;

    #[test]
    fn storage_key_roundtrips_for_every_table_entry() {
        for (_, emoji) in EMOJI_TABLE.iter().copied() {
            let key = storage_key(emoji);
            assert_eq!(
                emoji_from_storage_key(&key).as_deref(),
                Some(emoji),
                "key {key} must decode back to its emoji"
            );
        }
    }

    #[test]
    fn canonical_name_roundtrips_for_every_table_entry() {
        for (_, emoji) in EMOJI_TABLE.iter().copied() {
            let name = name_for_emoji(emoji).expect("every table emoji has a name");
            assert_eq!(emoji_for_name(name), Some(emoji));
        }
    }

    #[test]
    fn storage_keys_are_unique_per_emoji() {
        use std::collections::HashMap;
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (_, emoji) in EMOJI_TABLE.iter().copied() {
            let key = storage_key(emoji);
            if let Some(previous) = seen.insert(key.clone(), emoji) {
                assert_eq!(previous, emoji, "key {key} collides");
            }
        }
    }

    #[test_case("thumbsup", "👍"; "simple name")]
    #[test_case("thumbsup::skin-tone-3", "👍"; "skin tone suffix is stripped")]
    #[test_case("+1", "👍"; "alias resolves to the same emoji")]
    fn decode_name_resolves(name: &str, expected: &str) {
        assert_eq!(decode_name(name), expected);
    }

    #[test]
    fn unknown_name_passes_through_wrapped_in_colons() {
        assert_eq!(decode_name("partyparrot"), ":partyparrot:");
        assert_eq!(
            decode_name("partyparrot::skin-tone-4"),
            ":partyparrot:",
            "fallback drops the skin tone suffix"
        );
    }

    #[test]
    fn decode_colon_names_rewrites_known_and_keeps_unknown() {
        assert_eq!(decode_colon_names("ok :fire: :blorp:"), "ok 🔥 :blorp:");
    }

    #[test]
    fn encode_unicode_emoji_prefers_longer_sequences() {
        // The US flag shares its first scalar with other regional
        // indicators; greedy matching must take the full pair.
        let encoded = encode_unicode_emoji("go 🇺🇸 go");
        assert_eq!(encoded, "go :flag-us: go");
    }

    #[test]
    fn encode_unicode_emoji_passes_unknown_through() {
        let encoded = encode_unicode_emoji("weird \u{1fa97} glyph");
        assert_eq!(encoded, "weird \u{1fa97} glyph");
    }

    #[test]
    fn reaction_key_for_unknown_name_is_stable_and_disjoint() {
        let key = reaction_key_for_name("blorp");
        assert_eq!(key, storage_key("blorp"));
        assert!(reaction_name_for_key(&key).is_none());
    }

    #[test]
    fn reaction_name_for_key_resolves_known_emoji() {
        let key = reaction_key_for_name("thumbsup");
        assert_eq!(reaction_name_for_key(&key), Some("+1"));
    }

    #[test]
    fn strip_skin_tone_is_identity_without_suffix() {
        assert_eq!(strip_skin_tone("wave"), "wave");
    }
}
