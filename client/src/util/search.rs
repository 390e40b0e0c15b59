//! Case-insensitive substring search used by the list pages.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// True when `query` is empty or occurs in any of `fields`, ignoring case.
#[must_use]
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}
