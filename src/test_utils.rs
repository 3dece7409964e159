//! Shared test utilities and arbitrary generators for property-based testing.

use std::collections::BTreeSet;

use crate::types::{
    Breaking, ChangelogRecord, Deprecation, Highlight, PrNumber, PrState, PullRequestFacts, RepoId,
};
use proptest::prelude::*;

pub fn arb_pr_number() -> impl Strategy<Value = PrNumber> {
    (1u64..1_000_000).prop_map(PrNumber)
}

pub fn arb_type_label() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            ">bug",
            ">enhancement",
            ">feature",
            ">breaking",
            ">deprecation",
            ">new-field-mapper",
            ">non-issue",
        ])
        .prop_map(String::from),
        "[a-z][a-z-]{0,12}".prop_map(|s| format!(">{s}")),
    ]
}

pub fn arb_area_label() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            ":ml",
            ":SQL",
            ":EQL",
            ":Search/Search",
            ":Analytics/Aggregations",
            ":Delivery/Build",
        ])
        .prop_map(String::from),
        "[A-Za-z][A-Za-z ]{0,10}(/[A-Za-z][A-Za-z ]{0,10})?".prop_map(|s| format!(":{s}")),
    ]
}

pub fn arb_version_label() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        0u32..20,
        0u32..20,
        0u32..20,
        prop::sample::select(vec!["", "-alpha1", "-beta2", "-rc1", "-SNAPSHOT"]),
    )
        .prop_map(|(v, major, minor, patch, suffix)| {
            let prefix = if v { "v" } else { "" };
            format!("{prefix}{major}.{minor}.{patch}{suffix}")
        })
}

/// Label sets mixing every label kind, including excluded, marker and
/// unrecognised labels.
pub fn arb_labels() -> impl Strategy<Value = BTreeSet<String>> {
    let label = prop_oneof![
        3 => arb_type_label(),
        3 => arb_area_label(),
        3 => arb_version_label(),
        1 => prop::sample::select(vec!["release highlight", ">breaking-java", "WIP", "backport"])
            .prop_map(String::from),
        1 => "[a-z][a-z ]{0,12}",
        1 => "v[0-9]\\.[0-9]\\.[0-9] [a-z]{1,5}",
    ];
    prop::collection::btree_set(label, 0..8)
}

pub fn arb_title() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "[ml] add feature X (#99)",
            "[ML] Fix thing (#1234)",
            "SQL: support getMapping.",
            "#123: fix the_setting handling",
            "Deprecate index.foo setting",
            "(#12)",
            "",
        ])
        .prop_map(String::from),
        "[A-Za-z0-9 .:#()_\\[\\]]{0,60}",
    ]
}

pub fn arb_body() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 .#\n]{0,200}",
        (1u64..100_000, 1u64..100_000).prop_map(|(a, b)| {
            format!("Closes #{a}.\n\nAlso see elastic/elasticsearch/issues/{b} for details.")
        }),
    ]
}

pub fn arb_facts() -> impl Strategy<Value = PullRequestFacts> {
    (
        arb_pr_number(),
        arb_title(),
        arb_body(),
        arb_labels(),
        prop::bool::weighted(0.2),
        prop::bool::weighted(0.1),
        prop::bool::weighted(0.1),
    )
        .prop_map(|(number, title, body, labels, closed, is_draft, is_locked)| {
            PullRequestFacts {
                number,
                title,
                body,
                labels,
                repository: RepoId::new("elastic", "elasticsearch"),
                state: if closed { PrState::Closed } else { PrState::Open },
                is_draft,
                is_locked,
            }
        })
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z ]{0,30}")
}

fn arb_area() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["Machine Learning", "Search", "Query Languages", "Mapping, Search"])
            .prop_map(String::from),
    )
}

pub fn arb_highlight() -> impl Strategy<Value = Highlight> {
    (prop::bool::ANY, arb_text(), arb_text())
        .prop_map(|(notable, title, body)| Highlight { notable, title, body })
}

pub fn arb_breaking() -> impl Strategy<Value = Breaking> {
    (arb_area(), arb_text(), arb_text(), arb_text(), prop::bool::ANY).prop_map(
        |(area, title, details, impact, notable)| Breaking {
            area,
            title,
            details,
            impact,
            notable,
        },
    )
}

pub fn arb_deprecation() -> impl Strategy<Value = Deprecation> {
    (arb_area(), arb_text(), arb_text()).prop_map(|(area, title, body)| Deprecation {
        area,
        title,
        body,
    })
}

/// Records in any state a human might have left them in.
pub fn arb_record() -> impl Strategy<Value = ChangelogRecord> {
    (
        arb_pr_number(),
        prop::collection::btree_set(1u64..100_000, 0..4),
        arb_area(),
        prop::sample::select(vec!["bug", "feature", "bug, enhancement", "unknown", ""]),
        arb_text(),
        prop::option::of(arb_highlight()),
        prop::option::of(arb_breaking()),
        prop::option::of(arb_deprecation()),
        prop::collection::btree_set(arb_version_label(), 0..3),
    )
        .prop_map(
            |(pr, issues, area, change_type, summary, highlight, breaking, deprecation, versions)| {
                ChangelogRecord {
                    pr,
                    issues,
                    area,
                    change_type: change_type.to_string(),
                    summary,
                    highlight,
                    breaking,
                    deprecation,
                    versions,
                }
            },
        )
}
