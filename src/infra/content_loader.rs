use std::sync::{mpsc::Sender, Arc};

use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::{content::ContentRequest, events::AppEvent},
    infra::error::AppError,
    usecases::load_content::{load_content, ContentDispatcher, ContentSource},
};

const CONTENT_LOADER_EVENT_SEND_FAILED: &str = "CONTENT_LOADER_EVENT_SEND_FAILED";

/// Reads content off the UI thread and posts each result back as an [`AppEvent`].
pub struct BackgroundContentLoader<S> {
    runtime: Runtime,
    source: Arc<S>,
    events: Sender<AppEvent>,
}

impl<S> BackgroundContentLoader<S>
where
    S: ContentSource + Send + Sync + 'static,
{
    pub fn new(source: S, events: Sender<AppEvent>) -> Result<Self, AppError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("hub-content")
            .build()
            .map_err(AppError::ContentRuntime)?;

        Ok(Self {
            runtime,
            source: Arc::new(source),
            events,
        })
    }
}

impl<S> ContentDispatcher for BackgroundContentLoader<S>
where
    S: ContentSource + Send + Sync + 'static,
{
    fn dispatch(&mut self, request: ContentRequest) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();

        self.runtime.spawn_blocking(move || {
            let completion = load_content(source.as_ref(), request);
            if let Err(error) = events.send(AppEvent::ContentLoaded(completion)) {
                tracing::warn!(
                    code = CONTENT_LOADER_EVENT_SEND_FAILED,
                    error = %error,
                    "content loader could not deliver result; UI loop has stopped"
                );
            }
        });
    }
}
