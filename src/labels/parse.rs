//! Parsing of raw label strings into tagged variants.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ChangelogConfig;

/// `major.minor.patch` with an optional `v` prefix, pre-release suffix and
/// `-SNAPSHOT` suffix.
static VERSION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v?(\d+\.\d+\.\d+(?:-(?:alpha|beta|rc)\d+)?(?:-SNAPSHOT)?)$").unwrap()
});

/// Anything containing a dotted triple, used to spot malformed version labels.
static VERSION_LIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+").unwrap());

/// A label that does not carry a `>` or `:` prefix but has meaning of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Highlight,
    Breaking,
    Deprecation,
}

/// A version label with its `v` prefix removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// Parses a label such as `v8.1.0` or `8.0.0-rc2`.
    pub fn parse(label: &str) -> Option<Self> {
        VERSION_LABEL
            .captures(label)
            .map(|caps| VersionLabel(caps[1].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// A parsed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// `>name`, holding `name`.
    Type(String),

    /// `:team/name` or `:name`, holding `name` before any override is applied.
    Area(String),

    Version(VersionLabel),

    Marker(Marker),

    /// Any other label. Holds the raw text.
    Unrecognized(String),
}

impl Label {
    /// Returns true for an unprefixed label that contains something that
    /// looks like a version but does not parse as one (e.g. `v8.1.0 backport`).
    pub fn is_ambiguous_version(&self) -> bool {
        matches!(self, Label::Unrecognized(raw) if VERSION_LIKE.is_match(raw))
    }
}

/// Parses a single raw label.
///
/// Prefixed labels are parsed first, so `>breaking` is a [`Label::Type`] even
/// though it also sets the breaking marker; the classifier derives marker
/// flags from the raw label set.
pub fn parse_label(raw: &str, config: &ChangelogConfig) -> Label {
    if let Some(name) = raw.strip_prefix('>') {
        return Label::Type(name.to_string());
    }

    if let Some(rest) = raw.strip_prefix(':') {
        return Label::Area(strip_team_segment(rest).to_string());
    }

    if let Some(version) = VersionLabel::parse(raw) {
        return Label::Version(version);
    }

    if config.highlight_labels.contains(raw) {
        Label::Marker(Marker::Highlight)
    } else if config.breaking_labels.contains(raw) {
        Label::Marker(Marker::Breaking)
    } else if config.deprecation_labels.contains(raw) {
        Label::Marker(Marker::Deprecation)
    } else {
        Label::Unrecognized(raw.to_string())
    }
}

/// Drops a leading non-empty `segment/` from an area label body.
fn strip_team_segment(area: &str) -> &str {
    match area.split_once('/') {
        Some((team, name)) if !team.is_empty() => name,
        _ => area,
    }
}
