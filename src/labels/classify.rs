//! Mapping of a label set onto taxonomy dimensions.
//!
//! Classification is total: any label set, including an empty one, yields a
//! [`Classification`]. Missing dimensions come out as `None`, empty sets or
//! the [`UNKNOWN_TYPE`] sentinel rather than as errors.

use std::collections::BTreeSet;

use crate::config::ChangelogConfig;
use crate::types::UNKNOWN_TYPE;
use crate::types::record::MULTI_VALUE_SEPARATOR;

use super::parse::{Label, parse_label};

/// Structural marker flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Markers {
    pub highlight: bool,
    pub breaking: bool,
    pub deprecation: bool,
}

/// The taxonomy dimensions of a PR's labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Comma-joined change types, or [`UNKNOWN_TYPE`].
    pub change_type: String,

    /// Comma-joined areas, or `None` when the PR has no area label.
    pub area: Option<String>,

    pub versions: BTreeSet<String>,

    pub markers: Markers,
}

/// Classifies a label set.
pub fn classify(labels: &BTreeSet<String>, config: &ChangelogConfig) -> Classification {
    let mut types: Vec<String> = Vec::new();
    let mut areas: Vec<String> = Vec::new();
    let mut versions = BTreeSet::new();

    for raw in labels {
        match parse_label(raw, config) {
            Label::Type(name) => {
                if !name.is_empty() && !config.ignored_type_labels.contains(raw) {
                    types.push(name);
                }
            }
            Label::Area(name) if !name.is_empty() => {
                let area = config.area_overrides.get(&name).cloned().unwrap_or(name);
                if !areas.contains(&area) {
                    areas.push(area);
                }
            }
            Label::Version(version) => {
                versions.insert(version.into_string());
            }
            Label::Area(_) | Label::Marker(_) | Label::Unrecognized(_) => {}
        }
    }

    let markers = Markers {
        highlight: any_label_in(labels, &config.highlight_labels),
        breaking: any_label_in(labels, &config.breaking_labels),
        deprecation: any_label_in(labels, &config.deprecation_labels),
    };

    Classification {
        change_type: join_types(&types),
        area: join_areas(areas, config),
        versions,
        markers,
    }
}

fn any_label_in(labels: &BTreeSet<String>, wanted: &BTreeSet<String>) -> bool {
    !labels.is_disjoint(wanted)
}

fn join_types(types: &[String]) -> String {
    if types.is_empty() {
        UNKNOWN_TYPE.to_string()
    } else {
        types.join(MULTI_VALUE_SEPARATOR)
    }
}

fn join_areas(areas: Vec<String>, config: &ChangelogConfig) -> Option<String> {
    if areas.is_empty() {
        return None;
    }

    let area_set: BTreeSet<&str> = areas.iter().map(String::as_str).collect();
    for combined in &config.combined_areas {
        if combined.members.len() == area_set.len()
            && combined.members.iter().all(|m| area_set.contains(m.as_str()))
        {
            return Some(combined.name.clone());
        }
    }

    Some(areas.join(MULTI_VALUE_SEPARATOR))
}
