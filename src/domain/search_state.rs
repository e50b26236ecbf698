use super::{content::ContentSlot, text_input_state::TextInputState};

/// Query, suggestions, and loaded content of the search view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    query: TextInputState,
    matches: Vec<String>,
    selected_index: Option<usize>,
    content: ContentSlot,
}

impl SearchState {
    pub fn query(&self) -> &TextInputState {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut TextInputState {
        &mut self.query
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_match(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.matches.get(index))
            .map(String::as_str)
    }

    pub fn content(&self) -> &ContentSlot {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentSlot {
        &mut self.content
    }

    /// Replaces the suggestions; the first one is highlighted.
    pub fn set_matches(&mut self, matches: Vec<String>) {
        self.selected_index = if matches.is_empty() { None } else { Some(0) };
        self.matches = matches;
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.matches.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }

    /// Commits the highlighted suggestion: the query becomes the topic name and
    /// the dropdown closes. Returns the chosen topic.
    pub fn accept_selection(&mut self) -> Option<String> {
        let topic = self.selected_match()?.to_owned();
        self.query.set_text(topic.clone());
        self.matches.clear();
        self.selected_index = None;
        Some(topic)
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.selected_index = None;
        self.content.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentCallSite, ContentRequest, ContentState, RequestId};

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn set_matches_highlights_first_suggestion() {
        let mut state = SearchState::default();

        state.set_matches(topics(&["A", "B"]));

        assert_eq!(state.selected_match(), Some("A"));
    }

    #[test]
    fn empty_matches_clear_highlight() {
        let mut state = SearchState::default();
        state.set_matches(topics(&["A"]));

        state.set_matches(vec![]);

        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut state = SearchState::default();
        state.set_matches(topics(&["A", "B"]));

        state.select_next();
        state.select_next();
        assert_eq!(state.selected_match(), Some("B"));

        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected_match(), Some("A"));
    }

    #[test]
    fn accept_selection_copies_topic_into_query_and_closes_dropdown() {
        let mut state = SearchState::default();
        state.query_mut().insert_char('s');
        state.set_matches(topics(&["Solar", "Switching"]));
        state.select_next();

        let accepted = state.accept_selection();

        assert_eq!(accepted.as_deref(), Some("Switching"));
        assert_eq!(state.query().text(), "Switching");
        assert!(state.matches().is_empty());
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn accept_selection_without_matches_returns_none() {
        let mut state = SearchState::default();

        assert_eq!(state.accept_selection(), None);
    }

    #[test]
    fn reset_clears_query_matches_and_content() {
        let mut state = SearchState::default();
        state.query_mut().insert_char('x');
        state.set_matches(topics(&["X"]));
        state.content_mut().begin(&ContentRequest::for_topic(
            RequestId::new(1),
            ContentCallSite::Suggestion,
            "X",
        ));

        state.reset();

        assert!(state.query().is_empty());
        assert!(state.matches().is_empty());
        assert_eq!(state.content().state(), &ContentState::Empty);
        assert_eq!(state.content().latest_request(), None);
    }
}
