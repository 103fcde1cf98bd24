//! Resource library helpers: search filtering and share-form parsing.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use crate::net::types::Resource;

/// Filter resources by a search query matched (case-insensitively)
/// against titles and tags. An empty query keeps everything.
#[must_use]
pub fn filter_resources(resources: &[Resource], query: &str) -> Vec<Resource> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return resources.to_vec();
    }
    resources
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle)
                || r.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Prefix bare URLs with https:// so shared links always open.
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}

/// Split a comma-separated tag field, dropping empties.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
