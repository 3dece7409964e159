//! Label well-formedness checks.
//!
//! Classification results are only trusted for a PR whose labels pass these
//! checks: at least one version, area and change-type label, and no label
//! that looks like a version without being one. [`suggested_labels`] lists
//! labels that should be added to a PR given the ones it already has.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::config::ChangelogConfig;

use super::parse::{Label, parse_label};

/// A problem with a PR's label set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelIssue {
    #[error("at least one version label is required")]
    MissingVersion,

    #[error("at least one team label (starting with ':') is required")]
    MissingArea,

    #[error("at least one change type label (starting with '>') is required")]
    MissingType,

    /// A label mixes a version with other text, e.g. `v8.1.0 backport`.
    #[error("label {0:?} looks like a version but is not a valid version label")]
    AmbiguousVersion(String),
}

/// Checks a label set, returning every problem found (empty if none).
///
/// Issues are reported in a stable order: missing dimensions first, then
/// ambiguous labels in label order.
pub fn check_labels(labels: &BTreeSet<String>, config: &ChangelogConfig) -> Vec<LabelIssue> {
    let mut has_version = false;
    let mut has_area = false;
    let mut has_type = false;
    let mut ambiguous = Vec::new();

    for raw in labels {
        let label = parse_label(raw, config);
        if label.is_ambiguous_version() {
            ambiguous.push(LabelIssue::AmbiguousVersion(raw.clone()));
        }
        match label {
            Label::Version(_) => has_version = true,
            Label::Area(name) if !name.is_empty() => has_area = true,
            Label::Type(name) if !name.is_empty() => has_type = true,
            _ => {}
        }
    }

    let mut issues = Vec::new();
    if !has_version {
        issues.push(LabelIssue::MissingVersion);
    }
    if !has_area {
        issues.push(LabelIssue::MissingArea);
    }
    if !has_type {
        issues.push(LabelIssue::MissingType);
    }
    issues.extend(ambiguous);
    issues
}

/// Returns the labels that should be added to a PR, in rule order, without
/// duplicates. A label the PR already has is never suggested.
pub fn suggested_labels(labels: &BTreeSet<String>, config: &ChangelogConfig) -> Vec<String> {
    let mut suggested: Vec<String> = Vec::new();
    for rule in &config.label_suggestions {
        if labels.contains(&rule.trigger)
            && !labels.contains(&rule.add)
            && !suggested.contains(&rule.add)
        {
            suggested.push(rule.add.clone());
        }
    }
    suggested
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(items: &[&str]) -> Vec<LabelIssue> {
        let labels = items.iter().map(|s| s.to_string()).collect();
        check_labels(&labels, &ChangelogConfig::default())
    }

    #[test]
    fn well_formed_labels_have_no_issues() {
        assert!(check(&[":ml", ">feature", "v8.1.0", "release highlight"]).is_empty());
    }

    #[test]
    fn empty_label_set_reports_all_missing() {
        assert_eq!(
            check(&[]),
            vec![
                LabelIssue::MissingVersion,
                LabelIssue::MissingArea,
                LabelIssue::MissingType
            ]
        );
    }

    #[test]
    fn missing_version_only() {
        assert_eq!(check(&[":ml", ">feature"]), vec![LabelIssue::MissingVersion]);
    }

    #[test]
    fn bare_prefixes_do_not_count() {
        assert_eq!(
            check(&[":", ">", "v8.1.0"]),
            vec![LabelIssue::MissingArea, LabelIssue::MissingType]
        );
    }

    #[test]
    fn ambiguous_version_label_is_reported() {
        assert_eq!(
            check(&[":ml", ">feature", "v8.1.0", "v8.0.0 backport"]),
            vec![LabelIssue::AmbiguousVersion("v8.0.0 backport".to_string())]
        );
    }

    #[test]
    fn ambiguous_label_is_not_a_version() {
        assert_eq!(
            check(&[":ml", ">feature", "8.1.0-final"]),
            vec![
                LabelIssue::MissingVersion,
                LabelIssue::AmbiguousVersion("8.1.0-final".to_string())
            ]
        );
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            LabelIssue::MissingArea.to_string(),
            "at least one team label (starting with ':') is required"
        );
        assert!(
            LabelIssue::AmbiguousVersion("x 1.2.3".to_string())
                .to_string()
                .contains("\"x 1.2.3\"")
        );
    }

    mod suggestions {
        use super::*;
        use crate::config::LabelSuggestion;

        fn suggest(items: &[&str], config: &ChangelogConfig) -> Vec<String> {
            let labels = items.iter().map(|s| s.to_string()).collect();
            suggested_labels(&labels, config)
        }

        #[test]
        fn highlight_without_docs_gets_docs() {
            let config = ChangelogConfig::default();
            assert_eq!(
                suggest(&[":ml", ">feature", "v8.1.0", "release highlight"], &config),
                vec![">docs".to_string()]
            );
        }

        #[test]
        fn nothing_suggested_when_already_labelled() {
            let config = ChangelogConfig::default();
            assert!(suggest(&["release highlight", ">docs"], &config).is_empty());
            assert!(suggest(&[":ml", ">feature", "v8.1.0"], &config).is_empty());
        }

        #[test]
        fn rules_sharing_a_label_suggest_it_once() {
            let mut config = ChangelogConfig::default();
            config.label_suggestions.push(LabelSuggestion {
                trigger: ">breaking".to_string(),
                add: ">docs".to_string(),
            });
            config.label_suggestions.push(LabelSuggestion {
                trigger: ">breaking".to_string(),
                add: "needs:triage".to_string(),
            });
            assert_eq!(
                suggest(&["release highlight", ">breaking"], &config),
                vec![">docs".to_string(), "needs:triage".to_string()]
            );
        }
    }
}
