//! Everything computed fresh from a PR's facts.
//!
//! Classification and the text transforms are independent of one another;
//! [`DerivedEntry`] just gathers their results so that synthesis and
//! reconciliation work from the same values.

use std::collections::BTreeSet;

use crate::config::ChangelogConfig;
use crate::labels::{Classification, classify};
use crate::text::{extract_issues, normalize_summary, wrap_body};
use crate::types::{PrNumber, PullRequestFacts};

/// Freshly computed changelog values for one PR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedEntry {
    pub pr: PrNumber,

    /// Normalised title. May be empty if the title was nothing but tags.
    pub summary: String,

    /// PR body wrapped to the configured width.
    pub body: String,

    pub issues: BTreeSet<u64>,

    pub classification: Classification,
}

impl DerivedEntry {
    pub fn derive(facts: &PullRequestFacts, config: &ChangelogConfig) -> Self {
        DerivedEntry {
            pr: facts.number,
            summary: normalize_summary(&facts.title, config),
            body: wrap_body(&facts.body, config.wrap_width),
            issues: extract_issues(&facts.body, &facts.repository),
            classification: classify(&facts.labels, config),
        }
    }

    /// The summary, or `None` when normalisation left nothing.
    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.summary)
    }

    /// The wrapped body, or `None` for an empty description.
    pub fn body(&self) -> Option<&str> {
        non_empty(&self.body)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PrState, RepoId};

    fn facts(title: &str, body: &str) -> PullRequestFacts {
        PullRequestFacts {
            number: PrNumber(100),
            title: title.to_string(),
            body: body.to_string(),
            labels: [":ml", ">feature", "v8.1.0", "release highlight"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            repository: RepoId::new("elastic", "elasticsearch"),
            state: PrState::Open,
            is_draft: false,
            is_locked: false,
        }
    }

    #[test]
    fn derives_all_values() {
        let entry = DerivedEntry::derive(
            &facts("[ml] add feature X (#99)", "Closes #5"),
            &ChangelogConfig::default(),
        );
        assert_eq!(entry.pr, PrNumber(100));
        assert_eq!(entry.summary(), Some("Add feature X"));
        assert_eq!(entry.body(), Some("Closes #5"));
        assert_eq!(entry.issues, BTreeSet::from([5]));
        assert_eq!(entry.classification.change_type, "feature");
        assert_eq!(entry.classification.area.as_deref(), Some("Machine Learning"));
        assert!(entry.classification.markers.highlight);
    }

    #[test]
    fn empty_texts_are_absent() {
        let entry = DerivedEntry::derive(&facts("(#12)", "  "), &ChangelogConfig::default());
        assert_eq!(entry.summary(), None);
        assert_eq!(entry.body(), None);
        assert!(entry.issues.is_empty());
    }
}
