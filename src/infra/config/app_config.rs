use serde::{Deserialize, Serialize};

use crate::domain::{
    assistant_state::DEFAULT_GREETING,
    tips_state::{default_tip_links, TipLink},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub content: ContentConfig,
    pub catalog: CatalogConfig,
    pub assistant: AssistantConfig,
    pub tips: Vec<TipConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LogConfig::default(),
            content: ContentConfig::default(),
            catalog: CatalogConfig::default(),
            assistant: AssistantConfig::default(),
            tips: default_tips(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfig {
    pub base_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_dir: "Data".to_owned(),
        }
    }
}

/// `None` means the built-in topic list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CatalogConfig {
    pub topics: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    pub collapsible: bool,
    pub greeting: String,
    /// `None` means the built-in rule table.
    pub rules: Option<Vec<RuleConfig>>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            collapsible: false,
            greeting: DEFAULT_GREETING.to_owned(),
            rules: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    pub keywords: Vec<String>,
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TipConfig {
    pub name: String,
    pub file_name: String,
}

impl From<TipLink> for TipConfig {
    fn from(link: TipLink) -> Self {
        Self {
            name: link.name,
            file_name: link.file_name,
        }
    }
}

impl From<&TipConfig> for TipLink {
    fn from(config: &TipConfig) -> Self {
        TipLink::new(config.name.clone(), config.file_name.clone())
    }
}

pub fn default_tips() -> Vec<TipConfig> {
    default_tip_links().into_iter().map(TipConfig::from).collect()
}
