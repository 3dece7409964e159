//! Extraction of pull request facts from GitHub payloads.
//!
//! This module provides:
//! - Parsing of `pull_request` webhook payloads and pulls-API objects into
//!   [`PullRequestFacts`](crate::types::PullRequestFacts)
//! - PR number recovery from CI merge refs

pub mod parser;

pub use parser::{ExtractError, extract_facts, extract_facts_from_pull_request, pr_number_from_ref};
