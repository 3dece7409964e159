//! Construction of a brand-new record.

use crate::config::ChangelogConfig;
use crate::types::{Breaking, ChangelogRecord, Deprecation, Highlight};

use super::derive::DerivedEntry;
use super::reconcile::RecordField;

/// Builds a new record for a PR that has none yet.
pub fn synthesize(entry: &DerivedEntry, config: &ChangelogConfig) -> ChangelogRecord {
    let classification = &entry.classification;
    let mut record = ChangelogRecord {
        pr: entry.pr,
        issues: entry.issues.clone(),
        area: classification.area.clone(),
        change_type: classification.change_type.clone(),
        summary: entry.summary().map(str::to_string),
        highlight: None,
        breaking: None,
        deprecation: None,
        versions: classification.versions.clone(),
    };
    add_missing_blocks(&mut record, entry, config, BlockOrigin::Created);
    record
}

/// Whether blocks are being added to a new record or to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockOrigin {
    Created,
    Reconciled,
}

/// Adds each block whose marker is set and which the record lacks.
///
/// New blocks take their title, area and body from the freshly derived
/// entry, even when the record's own summary or area has been edited.
/// `breaking.notable` follows the highlight marker only for blocks added to
/// an existing record; a freshly created breaking block is never notable.
/// Existing blocks are never touched. Returns the fields that were added.
pub(crate) fn add_missing_blocks(
    record: &mut ChangelogRecord,
    entry: &DerivedEntry,
    config: &ChangelogConfig,
    origin: BlockOrigin,
) -> Vec<RecordField> {
    let markers = entry.classification.markers;
    let title = entry.summary().map(str::to_string);
    let area = entry.classification.area.clone();
    let body = entry.body().map(str::to_string);
    let mut added = Vec::new();

    if markers.highlight && record.highlight.is_none() {
        record.highlight = Some(Highlight {
            notable: false,
            title: title.clone(),
            body: body.clone(),
        });
        added.push(RecordField::Highlight);
    }

    if markers.breaking && record.breaking.is_none() {
        record.breaking = Some(Breaking {
            area: area.clone(),
            title: title.clone(),
            details: body.clone(),
            impact: Some(config.impact_placeholder.clone()),
            notable: origin == BlockOrigin::Reconciled && markers.highlight,
        });
        added.push(RecordField::Breaking);
    }

    if markers.deprecation && record.deprecation.is_none() {
        record.deprecation = Some(Deprecation { area, title, body });
        added.push(RecordField::Deprecation);
    }

    added
}
