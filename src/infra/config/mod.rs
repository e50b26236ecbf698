mod adapter;
mod app_config;
mod file_config;
mod loader;

pub use adapter::FileConfigAdapter;
pub use app_config::{
    default_tips, AppConfig, AssistantConfig, CatalogConfig, ContentConfig, LogConfig, RuleConfig,
    TipConfig,
};
pub use loader::load;
