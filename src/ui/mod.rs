//! UI layer: terminal session, input mapping, and rendering.

mod chat_rendering;
mod event_source;
pub mod shell;
mod styles;
pub mod terminal;
mod text_input;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
