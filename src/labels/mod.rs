//! Label parsing and classification.
//!
//! GitHub labels encode several taxonomy dimensions through prefix
//! conventions:
//!
//! | Label | Meaning |
//! |-------|---------|
//! | `>bug` | change type |
//! | `:Search/Search` | team area (the first `segment/` is dropped) |
//! | `v8.1.0`, `v8.0.0-rc1` | applicable version |
//! | `release highlight` | marker |
//!
//! Every raw label is first parsed into a [`Label`] variant, and the
//! classifier and label checks work on those variants rather than sniffing
//! prefixes themselves.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use changelog_bot::config::ChangelogConfig;
//! use changelog_bot::labels::classify;
//!
//! let labels: BTreeSet<String> = [":ml", ">feature", "v8.1.0", "release highlight"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//! let classification = classify(&labels, &ChangelogConfig::default());
//!
//! assert_eq!(classification.change_type, "feature");
//! assert_eq!(classification.area.as_deref(), Some("Machine Learning"));
//! assert!(classification.markers.highlight);
//! ```

mod check;
mod classify;
mod parse;

pub use check::{LabelIssue, check_labels, suggested_labels};
pub use classify::{Classification, Markers, classify};
pub use parse::{Label, Marker, VersionLabel, parse_label};
