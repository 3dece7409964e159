//! Merging fresh values into an existing, possibly hand-edited record.
//!
//! The merge rules, field by field:
//!
//! | Field | Rule |
//! |---|---|
//! | `pr`, `type`, `versions`, `issues` | always replaced by the fresh value |
//! | `area`, `summary` | filled in only when absent |
//! | `highlight`, `breaking`, `deprecation` | added only when the marker is set and the block is absent, built from the fresh summary, area and body |
//!
//! Nothing is ever removed. Applying [`reconcile`] to its own output with the
//! same [`DerivedEntry`] changes nothing.

use crate::config::ChangelogConfig;
use crate::types::ChangelogRecord;

use super::derive::DerivedEntry;
use super::synthesize::{BlockOrigin, add_missing_blocks};

/// A top-level field of a [`ChangelogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordField {
    Pr,
    Issues,
    Area,
    Type,
    Summary,
    Highlight,
    Breaking,
    Deprecation,
    Versions,
}

impl RecordField {
    /// The field's key in the serialised record.
    pub fn key(self) -> &'static str {
        match self {
            RecordField::Pr => "pr",
            RecordField::Issues => "issues",
            RecordField::Area => "area",
            RecordField::Type => "type",
            RecordField::Summary => "summary",
            RecordField::Highlight => "highlight",
            RecordField::Breaking => "breaking",
            RecordField::Deprecation => "deprecation",
            RecordField::Versions => "versions",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The result of a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub record: ChangelogRecord,

    /// Fields whose value changed, in serialisation order.
    pub changed: Vec<RecordField>,
}

impl Reconciled {
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Reconciles an existing record against freshly derived values.
pub fn reconcile(
    mut record: ChangelogRecord,
    entry: &DerivedEntry,
    config: &ChangelogConfig,
) -> Reconciled {
    let classification = &entry.classification;
    let mut changed = Vec::new();

    refresh(&mut record.pr, entry.pr, RecordField::Pr, &mut changed);
    refresh(&mut record.issues, entry.issues.clone(), RecordField::Issues, &mut changed);
    refresh(
        &mut record.change_type,
        classification.change_type.clone(),
        RecordField::Type,
        &mut changed,
    );
    refresh(
        &mut record.versions,
        classification.versions.clone(),
        RecordField::Versions,
        &mut changed,
    );

    if record.area.is_none() && classification.area.is_some() {
        record.area = classification.area.clone();
        changed.push(RecordField::Area);
    }
    if record.summary.is_none()
        && let Some(summary) = entry.summary()
    {
        record.summary = Some(summary.to_string());
        changed.push(RecordField::Summary);
    }

    changed.extend(add_missing_blocks(
        &mut record,
        entry,
        config,
        BlockOrigin::Reconciled,
    ));
    changed.sort();

    Reconciled { record, changed }
}

fn refresh<T: PartialEq>(slot: &mut T, fresh: T, field: RecordField, changed: &mut Vec<RecordField>) {
    if *slot != fresh {
        *slot = fresh;
        changed.push(field);
    }
}
