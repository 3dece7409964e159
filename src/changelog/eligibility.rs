//! Eligibility pre-filter.
//!
//! Decides whether a PR's current state warrants creating or updating a
//! changelog record. An ineligible PR is not an error: the caller simply
//! leaves any existing record alone.

use crate::config::ChangelogConfig;
use crate::labels::{LabelIssue, check_labels};
use crate::types::PullRequestFacts;

/// Why a PR was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Draft,
    Locked,
    Closed,

    /// The PR carries a label from the exclusion set.
    ExcludedLabel(String),

    /// The PR's labels fail the well-formedness check.
    LabelIssues(Vec<LabelIssue>),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Draft => write!(f, "PR is a draft"),
            SkipReason::Locked => write!(f, "PR is locked"),
            SkipReason::Closed => write!(f, "PR is closed"),
            SkipReason::ExcludedLabel(label) => write!(f, "PR is labelled [{}]", label),
            SkipReason::LabelIssues(issues) => {
                let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                write!(f, "PR has label issues: {}", messages.join("; "))
            }
        }
    }
}

/// Checks whether a PR should be processed.
///
/// Checks run in a fixed order (draft, locked, closed, exclusion labels,
/// label well-formedness) and the first failing one is reported. The
/// exclusion label reported is the lexicographically first one present.
pub fn check_eligibility(
    facts: &PullRequestFacts,
    config: &ChangelogConfig,
) -> Result<(), SkipReason> {
    if facts.is_draft {
        return Err(SkipReason::Draft);
    }
    if facts.is_locked {
        return Err(SkipReason::Locked);
    }
    if facts.is_closed() {
        return Err(SkipReason::Closed);
    }

    if let Some(label) = facts.labels.intersection(&config.exclusion_labels).next() {
        return Err(SkipReason::ExcludedLabel(label.clone()));
    }

    let issues = check_labels(&facts.labels, config);
    if !issues.is_empty() {
        return Err(SkipReason::LabelIssues(issues));
    }

    Ok(())
}

/// Returns true if the PR should be processed.
pub fn is_eligible(facts: &PullRequestFacts, config: &ChangelogConfig) -> bool {
    check_eligibility(facts, config).is_ok()
}
