//! Rule catalog module
//!
//! Static table of well-known SpamAssassin rules for reference lookups.
//! Never consulted by the parser or analyzer.

pub mod rules;
pub mod types;

pub use rules::DEFAULT_RULES;
pub use types::*;

/// Entries whose name or description contains `query` (case-insensitive)
/// and whose category passes `filter`. An empty query matches everything.
pub fn search(query: &str, filter: CategoryFilter) -> Vec<&'static RuleCatalogEntry> {
    let query = query.to_lowercase();

    DEFAULT_RULES
        .iter()
        .filter(|entry| filter.matches(entry.category))
        .filter(|entry| {
            query.is_empty()
                || entry.name.to_lowercase().contains(&query)
                || entry.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Find a rule by exact name
pub fn lookup(name: &str) -> Option<&'static RuleCatalogEntry> {
    DEFAULT_RULES.iter().find(|entry| entry.name == name)
}
