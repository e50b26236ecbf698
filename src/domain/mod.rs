//! Domain layer: topic matching, assistant rules, and view state.

pub mod assistant_state;
pub mod content;
pub mod events;
pub mod responder;
pub mod search_state;
pub mod shell_state;
pub mod text_input_state;
pub mod tips_state;
pub mod topics;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
