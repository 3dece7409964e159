//! The closed sets of recognised change types and areas.
//!
//! A record whose `type` or `area` falls outside these sets fails validation;
//! values are never coerced into the taxonomy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

const KNOWN_TYPES: &[&str] = &[
    "breaking",
    "breaking-java",
    "bug",
    "deprecation",
    "enhancement",
    "feature",
    "known-issue",
    "new-aggregation",
    "regression",
    "security",
    "upgrade",
];

const KNOWN_AREAS: &[&str] = &[
    "Aggregations",
    "Allocation",
    "Analysis",
    "Audit",
    "Authentication",
    "Authorization",
    "Autoscaling",
    "Beats Plugin",
    "CAT APIs",
    "CCR",
    "CRUD",
    "Client",
    "Cluster Coordination",
    "Data streams",
    "Discovery-Plugins",
    "Distributed",
    "Docs Infrastructure",
    "EQL",
    "Engine",
    "FIPS",
    "Features",
    "Geo",
    "Graph",
    "Health",
    "Highlighting",
    "ILM+SLM",
    "IdentityProvider",
    "Indices APIs",
    "Infra/CLI",
    "Infra/Circuit Breakers",
    "Infra/Core",
    "Infra/Logging",
    "Infra/Node Lifecycle",
    "Infra/Plugins",
    "Infra/REST API",
    "Infra/Scripting",
    "Infra/Settings",
    "Ingest",
    "Java High Level REST Client",
    "License",
    "Machine Learning",
    "Mapping",
    "Monitoring",
    "Network",
    "Packaging",
    "Percolator",
    "Performance",
    "Query Languages",
    "Ranking",
    "Recovery",
    "Reindex",
    "Rollup",
    "SQL",
    "Search",
    "Security",
    "Snapshot/Restore",
    "Stats",
    "Store",
    "Suggesters",
    "TLS",
    "Task Management",
    "Transform",
    "Watcher",
];

/// The recognised change types and areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub types: BTreeSet<String>,
    pub areas: BTreeSet<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Taxonomy {
            types: KNOWN_TYPES.iter().map(|s| s.to_string()).collect(),
            areas: KNOWN_AREAS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Taxonomy {
    pub fn is_known_type(&self, value: &str) -> bool {
        self.types.contains(value)
    }

    pub fn is_known_area(&self, value: &str) -> bool {
        self.areas.contains(value)
    }
}
