use crate::domain::content::{ContentCompletion, ContentRequest, ContentRetrievalFailure};

const CONTENT_RETRIEVAL_FAILED: &str = "CONTENT_RETRIEVAL_FAILED";

/// Produces the text body of a named asset.
pub trait ContentSource {
    fn read(&self, asset: &str) -> Result<String, ContentRetrievalFailure>;
}

impl<T> ContentSource for &T
where
    T: ContentSource + ?Sized,
{
    fn read(&self, asset: &str) -> Result<String, ContentRetrievalFailure> {
        (*self).read(asset)
    }
}

/// Starts a content request whose result comes back later as an event.
pub trait ContentDispatcher {
    fn dispatch(&mut self, request: ContentRequest);
}

pub fn load_content(source: &dyn ContentSource, request: ContentRequest) -> ContentCompletion {
    let outcome = source.read(&request.asset);

    match &outcome {
        Ok(text) => tracing::debug!(
            request_id = request.id.value(),
            call_site = request.call_site.as_label(),
            asset = %request.asset,
            bytes = text.len(),
            "topic content loaded"
        ),
        Err(error) => tracing::warn!(
            code = CONTENT_RETRIEVAL_FAILED,
            request_id = request.id.value(),
            call_site = request.call_site.as_label(),
            asset = %request.asset,
            error = %error,
            "topic content unavailable; showing fallback"
        ),
    }

    ContentCompletion { request, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::content::{ContentCallSite, ContentSlot, ContentState, RequestId},
        infra::stubs::InMemoryContentSource,
    };

    #[test]
    fn passes_source_payload_through() {
        let source = InMemoryContentSource::with(&[("Composting organic kitchen waste.txt", "Use a bin.")]);
        let request = ContentRequest::for_topic(
            RequestId::new(1),
            ContentCallSite::Suggestion,
            "Composting organic kitchen waste",
        );

        let completion = load_content(&source, request.clone());

        assert_eq!(completion.request, request);
        assert_eq!(completion.outcome.expect("must load"), "Use a bin.");
    }

    #[test]
    fn missing_asset_surfaces_suggestion_fallback_in_slot() {
        let source = InMemoryContentSource::default();
        let request = ContentRequest::for_topic(
            RequestId::new(1),
            ContentCallSite::Suggestion,
            "Introduction to solar panel systems",
        );
        let mut slot = ContentSlot::default();
        slot.begin(&request);

        slot.apply(load_content(&source, request));

        assert_eq!(
            slot.state(),
            &ContentState::Failed {
                title: "Introduction to solar panel systems".to_owned(),
                message: "Unable to fetch the file content. Please check the file path.".to_owned(),
            }
        );
    }
}
