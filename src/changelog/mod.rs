//! Changelog record synthesis and reconciliation.
//!
//! This module is the functional core of the crate. [`process`] runs the
//! whole pipeline for one PR:
//!
//! 1. [`check_eligibility`] short-circuits drafts, locked and closed PRs,
//!    excluded labels and malformed label sets
//! 2. [`DerivedEntry::derive`] classifies labels and normalises text
//! 3. [`synthesize`] builds a new record, or [`reconcile`] merges the fresh
//!    values into an existing one
//!
//! [`validate_record`] checks a record against the closed taxonomy. It is
//! not part of the pipeline; callers run it before persisting.

pub mod derive;
pub mod eligibility;
pub mod process;
pub mod reconcile;
pub mod synthesize;
pub mod validation;

pub use derive::DerivedEntry;
pub use eligibility::{SkipReason, check_eligibility, is_eligible};
pub use process::{Outcome, process};
pub use reconcile::{RecordField, Reconciled, reconcile};
pub use synthesize::synthesize;
pub use validation::{ValidationError, validate_record};
