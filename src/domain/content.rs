//! Topic content requests, their outcomes, and the display slot they land in.

use thiserror::Error;

const SUGGESTION_FALLBACK: &str = "Unable to fetch the file content. Please check the file path.";
const DIRECT_SEARCH_FALLBACK: &str = "No results found for your query.";
const TIP_FALLBACK: &str = "Error loading content";

/// Extension appended to a topic name to form its asset file name.
pub const TOPIC_ASSET_EXTENSION: &str = "txt";

/// Where a content request was issued from. Each site has its own fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCallSite {
    /// A suggestion picked from the search dropdown.
    Suggestion,
    /// The raw query looked up as a topic name.
    DirectSearch,
    /// A link in the tips view.
    Tip,
}

impl ContentCallSite {
    pub fn fallback_text(self) -> &'static str {
        match self {
            Self::Suggestion => SUGGESTION_FALLBACK,
            Self::DirectSearch => DIRECT_SEARCH_FALLBACK,
            Self::Tip => TIP_FALLBACK,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Suggestion => "suggestion",
            Self::DirectSearch => "direct_search",
            Self::Tip => "tip",
        }
    }
}

/// Any failure to produce a topic's text body.
#[derive(Debug, Error)]
pub enum ContentRetrievalFailure {
    #[error("asset name {name:?} is not a plain file name")]
    InvalidAssetName { name: String },
    #[error("asset {name:?} was not found")]
    NotFound { name: String },
    #[error("failed to read asset {name:?}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing request ids for one session.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn next_id(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub id: RequestId,
    pub call_site: ContentCallSite,
    /// Heading shown above the loaded content.
    pub title: String,
    /// File name relative to the content base directory.
    pub asset: String,
}

impl ContentRequest {
    /// Request for `<topic>.txt`, with the topic name used verbatim.
    pub fn for_topic(id: RequestId, call_site: ContentCallSite, topic: &str) -> Self {
        Self {
            id,
            call_site,
            title: topic.to_owned(),
            asset: format!("{topic}.{TOPIC_ASSET_EXTENSION}"),
        }
    }

    pub fn for_asset(id: RequestId, title: &str, asset: &str) -> Self {
        Self {
            id,
            call_site: ContentCallSite::Tip,
            title: title.to_owned(),
            asset: asset.to_owned(),
        }
    }
}

/// A finished request, delivered back to the UI thread.
#[derive(Debug)]
pub struct ContentCompletion {
    pub request: ContentRequest,
    pub outcome: Result<String, ContentRetrievalFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBody {
    Text(String),
    /// One entry per line, used by the direct search listing.
    Lines(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentState {
    #[default]
    Empty,
    Loading {
        title: String,
    },
    Ready {
        title: String,
        body: ContentBody,
    },
    Failed {
        title: String,
        message: String,
    },
}

/// Display slot for one view's content. Only the most recently issued request may fill it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSlot {
    latest: Option<RequestId>,
    state: ContentState,
}

impl ContentSlot {
    pub fn state(&self) -> &ContentState {
        &self.state
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn begin(&mut self, request: &ContentRequest) {
        self.latest = Some(request.id);
        self.state = ContentState::Loading {
            title: request.title.clone(),
        };
    }

    /// Applies a completion if it answers the latest request.
    /// Returns false for stale or unknown completions, which are dropped.
    pub fn apply(&mut self, completion: ContentCompletion) -> bool {
        if self.latest != Some(completion.request.id) {
            return false;
        }

        let ContentCompletion { request, outcome } = completion;
        self.state = match outcome {
            Ok(text) => ContentState::Ready {
                title: request.title,
                body: shape_body(request.call_site, text),
            },
            Err(_) => ContentState::Failed {
                title: request.title,
                message: request.call_site.fallback_text().to_owned(),
            },
        };
        true
    }

    /// Clears the slot and forgets the pending request, so late completions are dropped.
    pub fn reset(&mut self) {
        self.latest = None;
        self.state = ContentState::Empty;
    }
}

fn shape_body(call_site: ContentCallSite, text: String) -> ContentBody {
    match call_site {
        ContentCallSite::DirectSearch => {
            ContentBody::Lines(text.split('\n').map(ToOwned::to_owned).collect())
        }
        ContentCallSite::Suggestion | ContentCallSite::Tip => ContentBody::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(
        request: &ContentRequest,
        outcome: Result<&str, ContentRetrievalFailure>,
    ) -> ContentCompletion {
        ContentCompletion {
            request: request.clone(),
            outcome: outcome.map(ToOwned::to_owned),
        }
    }

    fn not_found(request: &ContentRequest) -> ContentRetrievalFailure {
        ContentRetrievalFailure::NotFound {
            name: request.asset.clone(),
        }
    }

    #[test]
    fn topic_request_uses_name_verbatim() {
        let request = ContentRequest::for_topic(
            RequestId::new(1),
            ContentCallSite::Suggestion,
            "DIY irrigation systems for gardens",
        );

        assert_eq!(request.asset, "DIY irrigation systems for gardens.txt");
        assert_eq!(request.title, "DIY irrigation systems for gardens");
    }

    #[test]
    fn sequence_is_strictly_increasing() {
        let mut sequence = RequestSequence::default();

        let first = sequence.next_id();
        let second = sequence.next_id();

        assert!(second > first);
    }

    #[test]
    fn begin_marks_slot_loading() {
        let mut slot = ContentSlot::default();
        let request = ContentRequest::for_topic(RequestId::new(1), ContentCallSite::Suggestion, "A");

        slot.begin(&request);

        assert_eq!(
            slot.state(),
            &ContentState::Loading {
                title: "A".to_owned()
            }
        );
    }

    #[test]
    fn latest_request_wins_when_results_arrive_out_of_order() {
        let mut slot = ContentSlot::default();
        let first = ContentRequest::for_topic(RequestId::new(1), ContentCallSite::Suggestion, "A");
        let second = ContentRequest::for_topic(RequestId::new(2), ContentCallSite::Suggestion, "B");
        slot.begin(&first);
        slot.begin(&second);

        assert!(slot.apply(completion(&second, Ok("body of B"))));
        assert!(!slot.apply(completion(&first, Ok("body of A"))));

        assert_eq!(
            slot.state(),
            &ContentState::Ready {
                title: "B".to_owned(),
                body: ContentBody::Text("body of B".to_owned()),
            }
        );
    }

    #[test]
    fn stale_result_is_dropped_while_latest_is_pending() {
        let mut slot = ContentSlot::default();
        let first = ContentRequest::for_topic(RequestId::new(1), ContentCallSite::Suggestion, "A");
        let second = ContentRequest::for_topic(RequestId::new(2), ContentCallSite::Suggestion, "B");
        slot.begin(&first);
        slot.begin(&second);

        assert!(!slot.apply(completion(&first, Ok("body of A"))));
        assert_eq!(
            slot.state(),
            &ContentState::Loading {
                title: "B".to_owned()
            }
        );
    }

    #[test]
    fn failures_use_call_site_fallback_text() {
        let cases = [
            (
                ContentCallSite::Suggestion,
                "Unable to fetch the file content. Please check the file path.",
            ),
            (ContentCallSite::DirectSearch, "No results found for your query."),
            (ContentCallSite::Tip, "Error loading content"),
        ];

        for (call_site, expected) in cases {
            let mut slot = ContentSlot::default();
            let request = ContentRequest::for_topic(RequestId::new(7), call_site, "Missing");
            slot.begin(&request);

            let failure = not_found(&request);
            slot.apply(ContentCompletion {
                request,
                outcome: Err(failure),
            });

            assert_eq!(
                slot.state(),
                &ContentState::Failed {
                    title: "Missing".to_owned(),
                    message: expected.to_owned(),
                }
            );
        }
    }

    #[test]
    fn direct_search_body_is_split_into_lines() {
        let mut slot = ContentSlot::default();
        let request =
            ContentRequest::for_topic(RequestId::new(3), ContentCallSite::DirectSearch, "housing");
        slot.begin(&request);

        slot.apply(completion(&request, Ok("one\ntwo\nthree")));

        assert_eq!(
            slot.state(),
            &ContentState::Ready {
                title: "housing".to_owned(),
                body: ContentBody::Lines(vec![
                    "one".to_owned(),
                    "two".to_owned(),
                    "three".to_owned()
                ]),
            }
        );
    }

    #[test]
    fn reset_drops_late_completions() {
        let mut slot = ContentSlot::default();
        let request = ContentRequest::for_topic(RequestId::new(1), ContentCallSite::Suggestion, "A");
        slot.begin(&request);

        slot.reset();

        assert!(!slot.apply(completion(&request, Ok("late"))));
        assert_eq!(slot.state(), &ContentState::Empty);
        assert_eq!(slot.latest_request(), None);
    }
}
