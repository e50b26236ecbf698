use super::text_input_state::TextInputState;

/// Greeting the bot opens with the first time the panel is expanded.
pub const DEFAULT_GREETING: &str = "Hi, how can I help you?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::User => "you",
            Self::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

/// Append-only, chronological conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Appends a question and its answer as one step.
    pub fn push_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push(ChatTurn::user(question));
        self.turns.push(ChatTurn::bot(answer));
    }
}

/// Expand/collapse state of the assistant panel plus its conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantState {
    expanded: bool,
    collapsible: bool,
    greeting: String,
    input: TextInputState,
    history: ChatHistory,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new(false, DEFAULT_GREETING)
    }
}

impl AssistantState {
    pub fn new(collapsible: bool, greeting: impl Into<String>) -> Self {
        Self {
            expanded: false,
            collapsible,
            greeting: greeting.into(),
            input: TextInputState::default(),
            history: ChatHistory::default(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInputState {
        &mut self.input
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ChatHistory {
        &mut self.history
    }

    /// Expands the panel, or collapses it when the panel is collapsible.
    /// Returns the new expanded flag.
    pub fn toggle(&mut self) -> bool {
        if !self.expanded {
            self.expand();
        } else if self.collapsible {
            self.expanded = false;
        }
        self.expanded
    }

    pub fn expand(&mut self) {
        self.expanded = true;
        if self.history.is_empty() {
            self.history.push(ChatTurn::bot(self.greeting.clone()));
        }
    }
}
