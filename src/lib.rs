//! Changelog Bot - maintains a structured changelog record for each pull request.
//!
//! This library provides the functional core: extracting facts from GitHub
//! payloads, classifying labels, normalising text, and synthesising or
//! reconciling changelog records. Fetching payloads and persisting records
//! are left to the caller.

pub mod changelog;
pub mod config;
pub mod labels;
pub mod text;
pub mod types;
pub mod webhooks;

#[cfg(test)]
mod test_utils;
