use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{responder::RuleBookError, topics::CatalogError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid topic catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),
    #[error("invalid assistant rules: {0}")]
    InvalidRules(#[from] RuleBookError),
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to resolve storage path: {details}")]
    StoragePathResolution { details: String },
    #[error("failed to create directory {path}: {source}")]
    StorageDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start content loader runtime: {0}")]
    ContentRuntime(#[source] std::io::Error),
}
