use crate::domain::{
    search_state::SearchState,
    topics::{match_topics, TopicCatalog},
};

pub fn search_topics(query: &str, catalog: &TopicCatalog) -> Vec<String> {
    let matches = match_topics(query, catalog);
    tracing::trace!(
        query_chars = query.chars().count(),
        matches = matches.len(),
        "topic suggestions computed"
    );
    matches
}

/// Recomputes the dropdown from the current query.
pub fn refresh_suggestions(search: &mut SearchState, catalog: &TopicCatalog) {
    let matches = search_topics(search.query().text(), catalog);
    search.set_matches(matches);
}
