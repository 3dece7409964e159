//! The per-PR pipeline: eligibility, derivation, then synthesis or
//! reconciliation.

use tracing::{debug, info, warn};

use crate::config::ChangelogConfig;
use crate::types::{ChangelogRecord, PullRequestFacts};

use super::derive::DerivedEntry;
use super::eligibility::{SkipReason, check_eligibility};
use super::reconcile::{Reconciled, reconcile};
use super::synthesize::synthesize;

/// What happened to a PR's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The PR is ineligible; any existing record must be left as it is.
    Skipped(SkipReason),

    /// No record existed, so one was synthesised.
    Created(ChangelogRecord),

    /// An existing record was reconciled (possibly without changes).
    Updated(Reconciled),
}

impl Outcome {
    /// The record to persist, if any.
    pub fn record(&self) -> Option<&ChangelogRecord> {
        match self {
            Outcome::Skipped(_) => None,
            Outcome::Created(record) => Some(record),
            Outcome::Updated(reconciled) => Some(&reconciled.record),
        }
    }

    /// Consumes the outcome, returning the record to persist, if any.
    pub fn into_record(self) -> Option<ChangelogRecord> {
        match self {
            Outcome::Skipped(_) => None,
            Outcome::Created(record) => Some(record),
            Outcome::Updated(reconciled) => Some(reconciled.record),
        }
    }
}

/// Creates or updates the changelog record for one PR.
pub fn process(
    facts: &PullRequestFacts,
    existing: Option<ChangelogRecord>,
    config: &ChangelogConfig,
) -> Outcome {
    if let Err(reason) = check_eligibility(facts, config) {
        info!(pr = %facts.number, reason = %reason, "Skipping PR");
        return Outcome::Skipped(reason);
    }

    let entry = DerivedEntry::derive(facts, config);

    match existing {
        None => {
            let record = synthesize(&entry, config);
            info!(
                pr = %record.pr,
                change_type = %record.change_type,
                area = ?record.area,
                "Created changelog record"
            );
            Outcome::Created(record)
        }
        Some(record) => {
            if record.pr != facts.number {
                warn!(
                    record_pr = %record.pr,
                    pr = %facts.number,
                    "Existing record belongs to a different PR, refreshing its number"
                );
            }
            let reconciled = reconcile(record, &entry, config);
            if reconciled.is_unchanged() {
                debug!(pr = %facts.number, "Changelog record already up to date");
            } else {
                let changed: Vec<&str> = reconciled.changed.iter().map(|f| f.key()).collect();
                debug!(pr = %facts.number, ?changed, "Reconciled changelog record");
            }
            Outcome::Updated(reconciled)
        }
    }
}
