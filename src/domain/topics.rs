//! Topic catalog and the substring matcher behind the search suggestions.

use thiserror::Error;

/// Topics offered by the search box when no catalog is configured.
pub const DEFAULT_TOPICS: [&str; 8] = [
    "Benefits of programmable thermostats",
    "Upcycling ideas for everyday items",
    "Community programs for electronic recycling",
    "Using low-flow faucets and showerheads",
    "DIY irrigation systems for gardens",
    "Switching to energy-efficient light bulbs",
    "Introduction to solar panel systems",
    "Composting organic kitchen waste",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("topic at position {index} is blank")]
    BlankTopic { index: usize },
    #[error("topic {topic:?} is listed more than once")]
    DuplicateTopic { topic: String },
}

/// Ordered, duplicate-free list of searchable topic names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: Vec<String>,
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self {
            topics: DEFAULT_TOPICS.iter().map(|topic| (*topic).to_owned()).collect(),
        }
    }
}

impl TopicCatalog {
    pub fn new<I, S>(topics: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();

        for (index, topic) in topics.into_iter().enumerate() {
            let topic = topic.into();
            if topic.trim().is_empty() {
                return Err(CatalogError::BlankTopic { index });
            }
            if collected.contains(&topic) {
                return Err(CatalogError::DuplicateTopic { topic });
            }
            collected.push(topic);
        }

        Ok(Self { topics: collected })
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Returns every catalog entry containing `query` case-insensitively, in catalog order.
///
/// A blank query yields no suggestions. The query itself is not trimmed before
/// matching, so `" solar"` only matches entries with a space before "solar".
pub fn match_topics(query: &str, catalog: &TopicCatalog) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .topics()
        .iter()
        .filter(|topic| topic.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(topics: &[&str]) -> TopicCatalog {
        TopicCatalog::new(topics.iter().copied()).expect("fixture catalog must be valid")
    }

    #[test]
    fn blank_query_yields_no_suggestions() {
        let catalog = TopicCatalog::default();

        assert!(match_topics("", &catalog).is_empty());
        assert!(match_topics("   \t", &catalog).is_empty());
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let catalog = catalog(&[
            "Using low-flow faucets and showerheads",
            "Benefits of programmable thermostats",
        ]);

        assert_eq!(
            match_topics("FAUCET", &catalog),
            vec!["Using low-flow faucets and showerheads".to_owned()]
        );
    }

    #[test]
    fn water_is_not_a_substring_of_the_faucet_topic() {
        let catalog = catalog(&[
            "Using low-flow faucets and showerheads",
            "Benefits of programmable thermostats",
        ]);

        assert!(match_topics("water", &catalog).is_empty());
    }

    #[test]
    fn preserves_catalog_order() {
        let catalog = TopicCatalog::default();

        let matches = match_topics("s", &catalog);
        let positions: Vec<usize> = matches
            .iter()
            .map(|topic| {
                catalog
                    .topics()
                    .iter()
                    .position(|entry| entry == topic)
                    .expect("match must come from catalog")
            })
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn single_letter_query_stays_permissive() {
        let catalog = TopicCatalog::default();

        let matches = match_topics("e", &catalog);

        assert_eq!(matches.len(), catalog.len());
    }

    #[test]
    fn returned_and_omitted_entries_partition_the_catalog() {
        let catalog = TopicCatalog::default();
        let query = "Sys";

        let matches = match_topics(query, &catalog);

        for topic in catalog.topics() {
            let contains = topic.to_lowercase().contains(&query.to_lowercase());
            assert_eq!(matches.contains(topic), contains, "topic: {topic}");
        }
    }

    #[test]
    fn query_is_not_trimmed_before_matching() {
        let catalog = catalog(&["Introduction to solar panel systems", "Solar basics"]);

        assert_eq!(
            match_topics(" solar", &catalog),
            vec!["Introduction to solar panel systems".to_owned()]
        );
    }

    #[test]
    fn rejects_duplicate_topics() {
        let err = TopicCatalog::new(["A", "B", "A"]).expect_err("duplicates must be rejected");

        assert_eq!(
            err,
            CatalogError::DuplicateTopic {
                topic: "A".to_owned()
            }
        );
    }

    #[test]
    fn rejects_blank_topics() {
        let err = TopicCatalog::new(["A", "  "]).expect_err("blank topic must be rejected");

        assert_eq!(err, CatalogError::BlankTopic { index: 1 });
    }

    #[test]
    fn default_catalog_has_eight_topics() {
        let catalog = TopicCatalog::default();

        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
    }
}
