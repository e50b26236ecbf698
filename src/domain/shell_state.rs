use super::{
    assistant_state::AssistantState, content::RequestSequence, search_state::SearchState,
    tips_state::TipsState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    About,
    Search,
    Tips,
}

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The current view (search box in Search, navigation elsewhere).
    #[default]
    Page,
    /// The assistant's chat input.
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    running: bool,
    view: View,
    focus: Focus,
    search: SearchState,
    tips: TipsState,
    assistant: AssistantState,
    requests: RequestSequence,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(TipsState::default(), AssistantState::default())
    }
}

impl ShellState {
    pub fn new(tips: TipsState, assistant: AssistantState) -> Self {
        Self {
            running: true,
            view: View::About,
            focus: Focus::Page,
            search: SearchState::default(),
            tips,
            assistant,
            requests: RequestSequence::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switches views. Entering or leaving Search clears its session state.
    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        if view == View::Search || self.view == View::Search {
            self.search.reset();
        }
        self.view = view;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub fn tips(&self) -> &TipsState {
        &self.tips
    }

    pub fn tips_mut(&mut self) -> &mut TipsState {
        &mut self.tips
    }

    pub fn assistant(&self) -> &AssistantState {
        &self.assistant
    }

    pub fn assistant_mut(&mut self) -> &mut AssistantState {
        &mut self.assistant
    }

    pub fn requests_mut(&mut self) -> &mut RequestSequence {
        &mut self.requests
    }
}
