//! Text matching used by autocomplete and name search.

use salary_model::Record;

/// Case-insensitive prefix filter over an option list.
///
/// An empty query returns every option.
pub fn filter_options(items: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on the record name. The query is
/// trimmed first; a blank query matches everything.
pub fn matches_name(record: &Record, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || record.name.to_lowercase().contains(&needle)
}
