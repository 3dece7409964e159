//! Link anchors for breaking-change and deprecation entries.

/// Words dropped from anchors, compared case-insensitively.
pub const STOP_WORDS: &[&str] = &["the", "a", "an", "now", "is"];

const SEPARATOR: &str = "-";

/// Derives a URL-fragment-safe slug from a title.
///
/// The title is split on every run of non-alphanumeric characters
/// (underscores included), stop words are dropped, and the remaining words
/// are lower-cased and joined with `-`.
///
/// This is the only way anchors are produced; they are never stored, so an
/// edited title always yields a matching anchor.
///
/// ```
/// use changelog_bot::text::generate_anchor;
///
/// assert_eq!(generate_anchor("The Quick Fox"), "quick-fox");
/// assert_eq!(generate_anchor("Remove `index.mapper.dynamic` setting"), "remove-index-mapper-dynamic-setting");
/// ```
pub fn generate_anchor(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .filter(|word| !is_stop_word(word))
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.iter().any(|stop| stop.eq_ignore_ascii_case(word))
}
