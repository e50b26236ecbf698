//! Use case layer: application workflows and orchestration.

pub mod ask_assistant;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod load_content;
pub mod search_topics;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
