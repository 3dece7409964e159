//! Pull request payload parser.
//!
//! This module turns the raw JSON GitHub sends for a `pull_request` webhook
//! delivery (or returns from the pulls API) into a [`PullRequestFacts`]
//! value.
//!
//! # Parsing Strategy
//!
//! 1. The payload is deserialised into raw structures that make every field
//!    optional, so that unknown fields are ignored and missing ones can be
//!    reported by name
//! 2. Required fields (`number`, `title`, `state`, repository) are validated
//!    explicitly; a missing one is an [`ExtractError::MissingField`] naming
//!    its JSON path
//! 3. Optional fields take their GitHub defaults (`body: null` is the empty
//!    string, absent `draft`/`locked` are `false`)

use serde::Deserialize;
use thiserror::Error;

use crate::types::{PrNumber, PrState, PullRequestFacts, RepoId};

/// Error type for payload extraction failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// JSON deserialisation failed (malformed JSON or wrongly typed fields).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A required field is absent or null.
    #[error("missing required field {field}")]
    MissingField { field: &'static str },

    /// Field has invalid value (e.g. PR number 0, unknown state).
    #[error("invalid field value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}

/// Extracts facts from a `pull_request` webhook event payload.
///
/// The PR number is read from the top-level `number`, falling back to
/// `pull_request.number`.
///
/// # Examples
///
/// ```
/// use changelog_bot::webhooks::extract_facts;
///
/// let payload = br#"{
///     "number": 100,
///     "pull_request": {
///         "title": "[ml] add feature X (#99)",
///         "body": "Closes #5",
///         "labels": [{ "name": ":ml" }, { "name": ">feature" }],
///         "head": { "repo": { "full_name": "elastic/elasticsearch" } },
///         "locked": false,
///         "state": "open",
///         "draft": false
///     }
/// }"#;
///
/// let facts = extract_facts(payload).unwrap();
/// assert_eq!(facts.number.0, 100);
/// assert_eq!(facts.repository.to_string(), "elastic/elasticsearch");
/// ```
pub fn extract_facts(payload: &[u8]) -> Result<PullRequestFacts, ExtractError> {
    let raw: RawPullRequestEvent = serde_json::from_slice(payload)?;
    let pull_request = raw.pull_request.ok_or(ExtractError::MissingField {
        field: "pull_request",
    })?;
    let fallback_repo = raw.repository.and_then(|r| r.full_name);
    build_facts(raw.number, pull_request, fallback_repo, PayloadShape::Event)
}

/// Extracts facts from a pull request object as returned by the pulls API
/// (`GET /repos/{owner}/{repo}/pulls/{number}`).
pub fn extract_facts_from_pull_request(payload: &[u8]) -> Result<PullRequestFacts, ExtractError> {
    let raw: RawPullRequest = serde_json::from_slice(payload)?;
    build_facts(None, raw, None, PayloadShape::PullRequest)
}

/// Parses the PR number out of a CI merge ref such as `refs/pull/123/merge`.
pub fn pr_number_from_ref(git_ref: &str) -> Result<PrNumber, ExtractError> {
    let invalid = || ExtractError::InvalidField {
        field: "ref",
        value: git_ref.to_string(),
    };

    let number = git_ref
        .strip_prefix("refs/pull/")
        .and_then(|rest| rest.strip_suffix("/merge"))
        .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        .ok_or_else(invalid)?;

    match number.parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(n) => Ok(PrNumber(n)),
    }
}

// ============================================================================
// Raw payload structures for deserialization
//
// These match GitHub's JSON structure. Option<T> is used liberally so that
// missing fields can be reported by name rather than as a serde message.
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPullRequestEvent {
    number: Option<u64>,
    pull_request: Option<RawPullRequest>,
    repository: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: Option<u64>,
    title: Option<String>,
    body: Option<String>,
    #[serde(default)]
    labels: Vec<RawLabel>,
    head: Option<RawHead>,
    locked: Option<bool>,
    state: Option<String>,
    draft: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawHead {
    // Null when the head repository (a fork) has been deleted.
    repo: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    full_name: Option<String>,
}

fn build_facts(
    event_number: Option<u64>,
    raw: RawPullRequest,
    fallback_repo: Option<String>,
    shape: PayloadShape,
) -> Result<PullRequestFacts, ExtractError> {
    let number = event_number
        .or(raw.number)
        .ok_or(ExtractError::MissingField { field: "number" })?;
    if number == 0 {
        return Err(ExtractError::InvalidField {
            field: "number",
            value: number.to_string(),
        });
    }

    let title = raw.title.ok_or(ExtractError::MissingField {
        field: shape.title(),
    })?;

    let state_str = raw.state.ok_or(ExtractError::MissingField {
        field: shape.state(),
    })?;
    let state = PrState::parse(&state_str).ok_or(ExtractError::InvalidField {
        field: shape.state(),
        value: state_str.clone(),
    })?;

    let full_name = raw
        .head
        .and_then(|h| h.repo)
        .and_then(|r| r.full_name)
        .or(fallback_repo)
        .ok_or(ExtractError::MissingField {
            field: shape.repo(),
        })?;
    let repository = RepoId::parse_full_name(&full_name).map_err(|_| ExtractError::InvalidField {
        field: shape.repo(),
        value: full_name.clone(),
    })?;

    Ok(PullRequestFacts {
        number: PrNumber(number),
        title,
        body: raw.body.unwrap_or_default(),
        labels: raw.labels.into_iter().map(|l| l.name).collect(),
        repository,
        state,
        is_draft: raw.draft.unwrap_or(false),
        is_locked: raw.locked.unwrap_or(false),
    })
}

/// Which payload the pull request object was found in; only affects the
/// field paths reported in errors.
#[derive(Debug, Clone, Copy)]
enum PayloadShape {
    Event,
    PullRequest,
}

impl PayloadShape {
    fn title(self) -> &'static str {
        match self {
            PayloadShape::Event => "pull_request.title",
            PayloadShape::PullRequest => "title",
        }
    }

    fn state(self) -> &'static str {
        match self {
            PayloadShape::Event => "pull_request.state",
            PayloadShape::PullRequest => "state",
        }
    }

    fn repo(self) -> &'static str {
        match self {
            PayloadShape::Event => "pull_request.head.repo.full_name",
            PayloadShape::PullRequest => "head.repo.full_name",
        }
    }
}
