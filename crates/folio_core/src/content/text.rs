//! Markdown-aware text estimates: reading time and excerpts.
//!
//! Both work on a cleaned copy of the body with code, images, link targets
//! and emphasis markers removed. Malformed markdown is left as literal text.

use std::sync::LazyLock;

use regex::Regex;

/// Reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 160;

/// Appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid code block regex"));
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`").expect("valid inline code regex"));
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("valid image regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("valid link regex"));
static FORMATTING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*_~-]").expect("valid formatting regex"));
static NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid newline regex"));

/// How link markup is treated while stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkHandling {
    /// Drop the whole link, text included
    Remove,
    /// Keep the visible text, drop the target
    KeepText,
}

/// Strip markdown syntax from `body`.
pub fn strip_markdown(body: &str, links: LinkHandling) -> String {
    let text = CODE_BLOCK_RE.replace_all(body, "");
    let text = INLINE_CODE_RE.replace_all(&text, "");
    let text = IMAGE_RE.replace_all(&text, "");
    let text = match links {
        LinkHandling::Remove => LINK_RE.replace_all(&text, ""),
        LinkHandling::KeepText => LINK_RE.replace_all(&text, "$1"),
    };
    let text = FORMATTING_RE.replace_all(&text, "");
    text.trim().to_string()
}

/// Count whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read `body` at [`WORDS_PER_MINUTE`], never less than 1.
pub fn estimate_reading_time(body: &str) -> u32 {
    let words = word_count(&strip_markdown(body, LinkHandling::Remove));
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Plain-text excerpt of `body` of at most `max_length` characters plus
/// [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged. Longer text is cut at the
/// last whitespace within the limit so no word is split; if the first word
/// alone exceeds the limit only the ellipsis remains.
pub fn generate_excerpt(body: &str, max_length: usize) -> String {
    let stripped = strip_markdown(body, LinkHandling::KeepText);
    let clean = NEWLINES_RE.replace_all(&stripped, " ");
    let clean = clean.trim();

    let Some((cut, next)) = clean.char_indices().nth(max_length) else {
        return clean.to_string();
    };

    let truncated = &clean[..cut];
    // A cut landing right before whitespace ends on a complete word, so
    // that word is kept rather than dropped.
    let head = if next.is_whitespace() {
        truncated
    } else {
        match truncated.rfind(char::is_whitespace) {
            Some(idx) => &truncated[..idx],
            None => "",
        }
    };

    format!("{}{}", head.trim_end(), ELLIPSIS)
}
