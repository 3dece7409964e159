//! Validation of a record against the closed taxonomy.
//!
//! This is separate from extraction: a record that fails here was built from
//! labels outside the taxonomy (or has been hand-edited into an incomplete
//! state) and can only be fixed upstream.

use thiserror::Error;

use crate::config::Taxonomy;
use crate::types::ChangelogRecord;

/// A problem found when validating a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown change type {0:?}")]
    UnknownType(String),

    #[error("unknown area {0:?}")]
    UnknownArea(String),

    #[error("record has no area")]
    MissingArea,

    #[error("record has no summary")]
    MissingSummary,

    #[error("record applies to no versions")]
    NoVersions,

    #[error("{block} block has no title")]
    EmptyBlockTitle { block: &'static str },
}

/// Validates a record, returning every problem found.
///
/// Comma-joined `type` and `area` values are checked member by member, as
/// are the areas of breaking and deprecation blocks.
pub fn validate_record(
    record: &ChangelogRecord,
    taxonomy: &Taxonomy,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for member in record.type_members() {
        if !taxonomy.is_known_type(member) {
            errors.push(ValidationError::UnknownType(member.to_string()));
        }
    }
    if record.type_members().next().is_none() {
        errors.push(ValidationError::UnknownType(record.change_type.clone()));
    }

    if record.area.is_none() {
        errors.push(ValidationError::MissingArea);
    }
    check_areas(record.area_members(), taxonomy, &mut errors);

    if is_blank(record.summary.as_deref()) {
        errors.push(ValidationError::MissingSummary);
    }
    if record.versions.is_empty() {
        errors.push(ValidationError::NoVersions);
    }

    if let Some(highlight) = &record.highlight
        && is_blank(highlight.title.as_deref())
    {
        errors.push(ValidationError::EmptyBlockTitle { block: "highlight" });
    }
    if let Some(breaking) = &record.breaking {
        if is_blank(breaking.title.as_deref()) {
            errors.push(ValidationError::EmptyBlockTitle { block: "breaking" });
        }
        check_areas(split(breaking.area.as_deref()), taxonomy, &mut errors);
    }
    if let Some(deprecation) = &record.deprecation {
        if is_blank(deprecation.title.as_deref()) {
            errors.push(ValidationError::EmptyBlockTitle { block: "deprecation" });
        }
        check_areas(split(deprecation.area.as_deref()), taxonomy, &mut errors);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_areas<'a>(
    areas: impl Iterator<Item = &'a str>,
    taxonomy: &Taxonomy,
    errors: &mut Vec<ValidationError>,
) {
    for area in areas {
        let error = ValidationError::UnknownArea(area.to_string());
        if !taxonomy.is_known_area(area) && !errors.contains(&error) {
            errors.push(error);
        }
    }
}

fn split(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .into_iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Breaking, Deprecation, Highlight, PrNumber, UNKNOWN_TYPE};
    use std::collections::BTreeSet;

    fn valid() -> ChangelogRecord {
        ChangelogRecord {
            pr: PrNumber(100),
            issues: BTreeSet::new(),
            area: Some("Machine Learning".to_string()),
            change_type: "feature".to_string(),
            summary: Some("Add feature X".to_string()),
            highlight: None,
            breaking: None,
            deprecation: None,
            versions: BTreeSet::from(["8.1.0".to_string()]),
        }
    }

    fn validate(record: &ChangelogRecord) -> Result<(), Vec<ValidationError>> {
        validate_record(record, &Taxonomy::default())
    }

    #[test]
    fn complete_record_is_valid() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn multi_valued_type_and_area_are_checked_per_member() {
        let mut record = valid();
        record.change_type = "bug, enhancement".to_string();
        record.area = Some("Search, Mapping".to_string());
        assert_eq!(validate(&record), Ok(()));

        record.change_type = "bug, cleanup".to_string();
        record.area = Some("Search, Nowhere".to_string());
        assert_eq!(
            validate(&record),
            Err(vec![
                ValidationError::UnknownType("cleanup".to_string()),
                ValidationError::UnknownArea("Nowhere".to_string()),
            ])
        );
    }

    #[test]
    fn unknown_sentinel_fails() {
        let mut record = valid();
        record.change_type = UNKNOWN_TYPE.to_string();
        assert_eq!(
            validate(&record),
            Err(vec![ValidationError::UnknownType(UNKNOWN_TYPE.to_string())])
        );
    }

    #[test]
    fn empty_type_fails() {
        let mut record = valid();
        record.change_type = String::new();
        assert_eq!(
            validate(&record),
            Err(vec![ValidationError::UnknownType(String::new())])
        );
    }

    #[test]
    fn incomplete_record_reports_everything() {
        let mut record = valid();
        record.area = None;
        record.summary = Some("  ".to_string());
        record.versions.clear();
        assert_eq!(
            validate(&record),
            Err(vec![
                ValidationError::MissingArea,
                ValidationError::MissingSummary,
                ValidationError::NoVersions,
            ])
        );
    }

    #[test]
    fn blocks_need_titles_and_known_areas() {
        let mut record = valid();
        record.highlight = Some(Highlight::default());
        record.breaking = Some(Breaking {
            area: Some("Nowhere".to_string()),
            ..Breaking::default()
        });
        record.deprecation = Some(Deprecation {
            area: Some("Nowhere".to_string()),
            title: Some("Deprecate thing".to_string()),
            body: None,
        });
        assert_eq!(
            validate(&record),
            Err(vec![
                ValidationError::EmptyBlockTitle { block: "highlight" },
                ValidationError::EmptyBlockTitle { block: "breaking" },
                ValidationError::UnknownArea("Nowhere".to_string()),
            ])
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::UnknownArea("Nowhere".into()).to_string(),
            "unknown area \"Nowhere\""
        );
        assert_eq!(
            ValidationError::EmptyBlockTitle { block: "breaking" }.to_string(),
            "breaking block has no title"
        );
    }
}
