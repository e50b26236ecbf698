use crate::{
    domain::{responder::RuleBook, topics::TopicCatalog},
    infra::{config::AppConfig, storage_layout::StorageLayout},
};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub catalog: TopicCatalog,
    pub rules: RuleBook,
    pub layout: StorageLayout,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        catalog: TopicCatalog,
        rules: RuleBook,
        layout: StorageLayout,
    ) -> Self {
        Self {
            config,
            catalog,
            rules,
            layout,
        }
    }
}
