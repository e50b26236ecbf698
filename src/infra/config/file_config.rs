use serde::Deserialize;

use crate::infra::config::{AppConfig, AssistantConfig, ContentConfig, LogConfig, RuleConfig, TipConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub content: Option<FileContentConfig>,
    pub catalog: Option<FileCatalogConfig>,
    pub assistant: Option<FileAssistantConfig>,
    pub tips: Option<Vec<TipConfig>>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(content) = self.content {
            content.merge_into(&mut config.content);
        }

        if let Some(catalog) = self.catalog {
            if let Some(topics) = catalog.topics {
                config.catalog.topics = Some(topics);
            }
        }

        if let Some(assistant) = self.assistant {
            assistant.merge_into(&mut config.assistant);
        }

        if let Some(tips) = self.tips {
            config.tips = tips;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileContentConfig {
    pub base_dir: Option<String>,
}

impl FileContentConfig {
    fn merge_into(self, config: &mut ContentConfig) {
        if let Some(base_dir) = self.base_dir {
            config.base_dir = base_dir;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileCatalogConfig {
    pub topics: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAssistantConfig {
    pub collapsible: Option<bool>,
    pub greeting: Option<String>,
    pub rules: Option<Vec<RuleConfig>>,
}

impl FileAssistantConfig {
    fn merge_into(self, config: &mut AssistantConfig) {
        if let Some(collapsible) = self.collapsible {
            config.collapsible = collapsible;
        }

        if let Some(greeting) = self.greeting {
            config.greeting = greeting;
        }

        if let Some(rules) = self.rules {
            config.rules = Some(rules);
        }
    }
}
