use once_cell::sync::Lazy;
use regex::Regex;

/// Matches fenced code blocks and inline code spans. Both markup dialects
/// use the same backtick syntax, so the tokenizer is shared by both
/// transcoding directions.
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```|`[^`\n]+`").expect("code span regex compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Code(&'a str),
}

/// Splits text into code and non-code segments so formatting rewrites can
/// leave fenced/inline code untouched.
pub(crate) fn split_code_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in CODE_RE.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Text(&text[cursor..found.start()]));
        }
        segments.push(Segment::Code(found.as_str()));
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment::Text(&text[cursor..]));
    }
    segments
}

/// Applies `rewrite` to non-code segments only and reassembles the text.
pub(crate) fn rewrite_outside_code(text: &str, rewrite: impl Fn(&str) -> String) -> String {
    split_code_segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => rewrite(t),
            Segment::Code(c) => c.to_string(),
        })
        .collect()
}
