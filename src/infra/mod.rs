//! Infrastructure layer: config, logging, storage layout, and content adapters.

pub mod config;
pub mod content_loader;
pub mod content_store;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod storage_layout;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
