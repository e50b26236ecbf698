use super::content::ContentCompletion;

#[derive(Debug)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    ContentLoaded(ContentCompletion),
}

/// A key press. Printable keys carry the character; others use names
/// such as `enter`, `esc`, `tab`, `backspace`, `up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The character this key types, if it is a plain printable key.
    pub fn typed_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_key_types_that_char() {
        assert_eq!(KeyInput::new("q", false).typed_char(), Some('q'));
        assert_eq!(KeyInput::new(" ", false).typed_char(), Some(' '));
    }

    #[test]
    fn named_and_ctrl_keys_type_nothing() {
        assert_eq!(KeyInput::new("enter", false).typed_char(), None);
        assert_eq!(KeyInput::new("c", true).typed_char(), None);
    }
}
