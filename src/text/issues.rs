//! Extraction of referenced issue numbers from a PR body.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::RepoId;

static HASH_REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\d+)").unwrap());

/// Collects every issue referenced from `body`.
///
/// Two forms are recognised: `#<digits>` and `<owner>/<repo>/issues/<digits>`
/// where `<owner>/<repo>` is the PR's own repository. Duplicates collapse,
/// and numbers too large for a `u64` are skipped.
///
/// ```
/// use changelog_bot::text::extract_issues;
/// use changelog_bot::types::RepoId;
///
/// let repo = RepoId::new("owner", "repo");
/// let issues = extract_issues("Fixes #42 and owner/repo/issues/99", &repo);
/// assert_eq!(issues.into_iter().collect::<Vec<_>>(), vec![42, 99]);
/// ```
pub fn extract_issues(body: &str, repo: &RepoId) -> BTreeSet<u64> {
    let mut issues: BTreeSet<u64> = HASH_REFERENCE
        .captures_iter(body)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();

    let url_marker = format!("{}/issues/", repo.full_name());
    for (pos, _) in body.match_indices(&url_marker) {
        let tail = &body[pos + url_marker.len()..];
        let digits_end = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        if let Ok(n) = tail[..digits_end].parse() {
            issues.insert(n);
        }
    }

    issues
}
