use std::collections::HashMap;

use anyhow::Result;

use crate::{
    domain::content::{ContentRequest, ContentRetrievalFailure},
    infra::{config::AppConfig, contracts::ConfigAdapter},
    usecases::load_content::{ContentDispatcher, ContentSource},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Content keyed by asset file name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    files: HashMap<String, String>,
}

impl InMemoryContentSource {
    pub fn with(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(name, body)| ((*name).to_owned(), (*body).to_owned()))
                .collect(),
        }
    }
}

impl ContentSource for InMemoryContentSource {
    fn read(&self, asset: &str) -> Result<String, ContentRetrievalFailure> {
        self.files
            .get(asset)
            .cloned()
            .ok_or_else(|| ContentRetrievalFailure::NotFound {
                name: asset.to_owned(),
            })
    }
}

/// Captures dispatched requests so tests can complete them in any order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    pub requests: Vec<ContentRequest>,
}

impl ContentDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, request: ContentRequest) {
        self.requests.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn in_memory_source_misses_unknown_assets() {
        let source = InMemoryContentSource::with(&[("a.txt", "A")]);

        assert_eq!(source.read("a.txt").expect("known asset"), "A");
        assert!(source.read("b.txt").is_err());
    }
}
