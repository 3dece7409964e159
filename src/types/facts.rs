//! Canonical pull request facts.
//!
//! A [`PullRequestFacts`] value is derived once per invocation from a webhook
//! or API payload and is never mutated afterwards. Everything downstream
//! (classification, normalisation, synthesis, reconciliation) is a pure
//! function of it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::{PrNumber, RepoId};

/// The open/closed state of a pull request as reported by GitHub.
///
/// Merged pull requests are reported as `closed`, so they fall under
/// [`PrState::Closed`] too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrState {
    Open,
    Closed,
}

impl PrState {
    /// Parses GitHub's `state` string. Returns `None` for unknown values.
    pub fn parse(state: &str) -> Option<Self> {
        match state {
            "open" => Some(PrState::Open),
            "closed" => Some(PrState::Closed),
            _ => None,
        }
    }
}

/// The normalised, immutable view of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFacts {
    /// The PR number.
    pub number: PrNumber,

    /// The PR title, exactly as written by the author.
    pub title: String,

    /// The PR description. A null body is represented as the empty string.
    pub body: String,

    /// Raw label names. Held in a sorted set so that anything joined from
    /// it is deterministic.
    pub labels: BTreeSet<String>,

    /// The repository the PR's head lives in.
    pub repository: RepoId,

    pub state: PrState,
    pub is_draft: bool,
    pub is_locked: bool,
}

impl PullRequestFacts {
    /// Returns true if the PR has been closed (or merged).
    pub fn is_closed(&self) -> bool {
        self.state == PrState::Closed
    }

    /// Returns true if the PR carries the given label verbatim.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}
