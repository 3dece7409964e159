//! Core domain types for the changelog bot.
//!
//! This module contains the fundamental types used throughout the crate,
//! designed to encode invariants via the type system.

pub mod facts;
pub mod ids;
pub mod record;

// Re-export commonly used types at the module level
pub use facts::{PrState, PullRequestFacts};
pub use ids::{InvalidRepoName, PrNumber, RepoId};
pub use record::{Breaking, ChangelogRecord, Deprecation, Highlight, UNKNOWN_TYPE};
