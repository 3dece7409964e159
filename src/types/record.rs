//! The per-PR changelog record.
//!
//! Serialisation follows the output contract consumed by the persistence
//! layer: keys are emitted in the fixed order
//! `pr, issues, area, type, summary, highlight, breaking, deprecation, versions`
//! and absent optional values are omitted rather than written as `null`,
//! recursively for the nested blocks.
//!
//! Anchors of breaking and deprecation blocks are never stored. They are
//! computed from the block's current title whenever they are needed
//! (including at serialisation time), and any `anchor` key found in an
//! existing record is ignored when it is read back.

use std::collections::BTreeSet;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::ids::PrNumber;
use crate::text::generate_anchor;

/// The `type` value recorded when no change-type label survives filtering.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Separator used when a PR spans several types or areas.
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// A structured changelog entry for one pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogRecord {
    pub pr: PrNumber,

    /// Issues referenced from the PR description.
    #[serde(default)]
    pub issues: BTreeSet<u64>,

    /// The team area. `None` means "not yet known" and may be filled in by
    /// reconciliation; a present value is never overwritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    /// The change type, comma-joined when the PR spans several types.
    #[serde(rename = "type")]
    pub change_type: String,

    /// One-line summary. Same "absent vs. present" rule as `area`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breaking: Option<Breaking>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<Deprecation>,

    /// Versions the change applies to, without the `v` prefix of the label.
    #[serde(default)]
    pub versions: BTreeSet<String>,
}

impl ChangelogRecord {
    /// Returns the individual members of a possibly comma-joined `type`.
    pub fn type_members(&self) -> impl Iterator<Item = &str> {
        split_multi_value(&self.change_type)
    }

    /// Returns the individual members of a possibly comma-joined `area`.
    pub fn area_members(&self) -> impl Iterator<Item = &str> {
        self.area.as_deref().into_iter().flat_map(split_multi_value)
    }
}

fn split_multi_value(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// A release-highlight block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Highlight {
    /// Whether the highlight is featured in the release notes' notable section.
    #[serde(default)]
    pub notable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A breaking-change block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Breaking {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,

    /// Whether the generated docs wrap this entry in a "notable" section.
    #[serde(default)]
    pub notable: bool,
}

impl Breaking {
    /// The link anchor, derived from the current title.
    pub fn anchor(&self) -> Option<String> {
        self.title.as_deref().map(generate_anchor)
    }
}

impl Serialize for Breaking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let anchor = self.anchor();
        let mut state = serializer.serialize_struct("Breaking", 6)?;
        serialize_opt(&mut state, "area", &self.area)?;
        serialize_opt(&mut state, "title", &self.title)?;
        serialize_opt(&mut state, "details", &self.details)?;
        serialize_opt(&mut state, "impact", &self.impact)?;
        state.serialize_field("notable", &self.notable)?;
        serialize_opt(&mut state, "anchor", &anchor)?;
        state.end()
    }
}

/// A deprecation block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Deprecation {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Deprecation {
    /// The link anchor, derived from the current title.
    pub fn anchor(&self) -> Option<String> {
        self.title.as_deref().map(generate_anchor)
    }
}

impl Serialize for Deprecation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let anchor = self.anchor();
        let mut state = serializer.serialize_struct("Deprecation", 4)?;
        serialize_opt(&mut state, "area", &self.area)?;
        serialize_opt(&mut state, "title", &self.title)?;
        serialize_opt(&mut state, "body", &self.body)?;
        serialize_opt(&mut state, "anchor", &anchor)?;
        state.end()
    }
}

fn serialize_opt<S: SerializeStruct>(
    state: &mut S,
    key: &'static str,
    value: &Option<String>,
) -> Result<(), S::Error> {
    match value {
        Some(v) => state.serialize_field(key, v),
        None => state.skip_field(key),
    }
}
