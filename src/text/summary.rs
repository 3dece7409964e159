//! Conversion of a PR title into a changelog summary.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ChangelogConfig;

/// One or more trailing ` (#1234)` references.
static TRAILING_PR_REFERENCES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*\(#\d+\))+\s*$").unwrap());

/// `fooBar`, `FooBar...`: a lower-case run followed by a capitalised run.
static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]?[a-z]+[A-Z][a-z]+").unwrap());

/// `index.number_of_shards`, `_source`, `foo_bar`.
static DOTTED_OR_SNAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]*(?:[._][a-z]+)+$").unwrap());

/// Derives a changelog summary from a PR title.
///
/// In order:
/// 1. strip a leading area tag, `[ML] ` or `ML: `, for a configured area code
/// 2. strip a leading `#1234: ` issue prefix
/// 3. strip trailing ` (#1234)` PR references
/// 4. capitalise the first letter and drop one trailing period
/// 5. wrap identifier-like tokens in backticks (see [`quote_identifiers`])
///
/// ```
/// use changelog_bot::config::ChangelogConfig;
/// use changelog_bot::text::normalize_summary;
///
/// let config = ChangelogConfig::default();
/// assert_eq!(normalize_summary("[ML] Fix thing (#1234)", &config), "Fix thing");
/// assert_eq!(normalize_summary("sql: support getMapping.", &config), "Support `getMapping`");
/// ```
pub fn normalize_summary(title: &str, config: &ChangelogConfig) -> String {
    let title = title.trim();
    let title = strip_bracketed_area(title, config);
    let title = strip_colon_area(title, config);
    let title = strip_issue_prefix(title);
    let title = TRAILING_PR_REFERENCES.replace(title, "");
    let title = capitalise_first(title.trim());
    let title = title.strip_suffix('.').unwrap_or(title.as_str());

    quote_identifiers(title)
}

/// Wraps camelCase and dotted/underscored tokens in backticks, leaving other
/// tokens alone, and rejoins tokens with single spaces.
pub fn quote_identifiers(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if CAMEL_CASE.is_match(token) || DOTTED_OR_SNAKE.is_match(token) {
                format!("`{token}`")
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `[code] rest` -> `rest`. The tag must be followed by whitespace.
fn strip_bracketed_area<'a>(title: &'a str, config: &ChangelogConfig) -> &'a str {
    let Some(rest) = title.strip_prefix('[') else {
        return title;
    };
    match rest.split_once(']') {
        Some((code, after)) if config.is_title_area_code(code) && starts_with_space(after) => {
            after.trim_start()
        }
        _ => title,
    }
}

/// `code: rest` -> `rest`. The colon must be followed by whitespace.
fn strip_colon_area<'a>(title: &'a str, config: &ChangelogConfig) -> &'a str {
    match title.split_once(':') {
        Some((code, after)) if config.is_title_area_code(code) && starts_with_space(after) => {
            after.trim_start()
        }
        _ => title,
    }
}

/// `#1234: rest` or `#1234 rest` -> `rest`.
fn strip_issue_prefix(title: &str) -> &str {
    let Some(rest) = title.strip_prefix('#') else {
        return title;
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits_end == 0 {
        return title;
    }
    let after = &rest[digits_end..];
    let after = after.strip_prefix(':').unwrap_or(after);
    if starts_with_space(after) {
        after.trim_start()
    } else {
        title
    }
}

fn starts_with_space(text: &str) -> bool {
    text.starts_with(char::is_whitespace)
}

fn capitalise_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
