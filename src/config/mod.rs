//! Classification and normalisation tables.
//!
//! All tables are plain data held in an immutable [`ChangelogConfig`] that is
//! loaded once at process start and passed by reference into the classifier,
//! the eligibility filter and the text normaliser. [`Default`] yields the
//! built-in tables; a JSON file may override any subset of fields.

pub mod taxonomy;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::DEFAULT_WRAP_WIDTH;

pub use taxonomy::Taxonomy;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON or has wrongly typed fields.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A set of areas that collapses into a single named area when a PR is
/// labelled with exactly those areas and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedArea {
    pub members: BTreeSet<String>,
    pub name: String,
}

/// A label that should accompany another one: a PR carrying `trigger` but
/// not `add` should get `add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSuggestion {
    pub trigger: String,
    pub add: String,
}

/// Immutable configuration for changelog synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Change-type labels (with their `>` prefix) that never contribute to `type`.
    pub ignored_type_labels: BTreeSet<String>,

    /// Area renames, keyed by the area name after prefix stripping.
    pub area_overrides: BTreeMap<String, String>,

    pub combined_areas: Vec<CombinedArea>,

    /// Any of these labels makes a PR ineligible.
    pub exclusion_labels: BTreeSet<String>,

    pub highlight_labels: BTreeSet<String>,
    pub breaking_labels: BTreeSet<String>,
    pub deprecation_labels: BTreeSet<String>,

    /// Labels suggested for a PR based on the labels it already has.
    pub label_suggestions: Vec<LabelSuggestion>,

    /// Short area codes stripped from the start of PR titles, compared
    /// case-insensitively (`[ML] ...`, `SQL: ...`).
    pub title_area_codes: BTreeSet<String>,

    /// Column at which PR bodies are wrapped.
    pub wrap_width: usize,

    /// Written into `breaking.impact`, which cannot be derived from the PR.
    pub impact_placeholder: String,

    pub taxonomy: Taxonomy,
}

fn string_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            ignored_type_labels: string_set(&[">new-field-mapper"]),
            area_overrides: [
                ("ml", "Machine Learning"),
                ("Beats", "Beats Plugin"),
                ("Docs", "Docs Infrastructure"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            combined_areas: vec![CombinedArea {
                members: string_set(&["SQL", "EQL"]),
                name: "Query Languages".to_string(),
            }],
            exclusion_labels: string_set(&[
                ">non-issue",
                ">refactoring",
                ">docs",
                ">test",
                ">test-failure",
                ">test-mute",
                ":Delivery/Build",
                ":Delivery/Cloud",
                ":Delivery/Tooling",
                "backport",
                "WIP",
            ]),
            highlight_labels: string_set(&["release highlight"]),
            breaking_labels: string_set(&[">breaking", ">breaking-java"]),
            deprecation_labels: string_set(&[">deprecation"]),
            label_suggestions: vec![LabelSuggestion {
                trigger: "release highlight".to_string(),
                add: ">docs".to_string(),
            }],
            title_area_codes: string_set(&["ml", "beats", "docs", "transform", "ql", "eql", "sql"]),
            wrap_width: DEFAULT_WRAP_WIDTH,
            impact_placeholder: "Please describe the impact of this change to users".to_string(),
            taxonomy: Taxonomy::default(),
        }
    }
}

impl ChangelogConfig {
    /// Parses configuration from JSON. Missing fields take their default.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Returns true if `code` is a known title area code (case-insensitive).
    pub fn is_title_area_code(&self, code: &str) -> bool {
        self.title_area_codes
            .iter()
            .any(|known| known.eq_ignore_ascii_case(code))
    }
}

/// Loads configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ChangelogConfig, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ChangelogConfig::from_json_slice(&bytes)
}
