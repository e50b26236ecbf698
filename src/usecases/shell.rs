use anyhow::Result;

use crate::domain::{
    content::{ContentCallSite, ContentCompletion, ContentRequest},
    events::{AppEvent, KeyInput},
    responder::RuleBook,
    shell_state::{Focus, ShellState, View},
    text_input_state::TextInputState,
    topics::TopicCatalog,
};

use super::{
    ask_assistant::submit_question, contracts::ShellOrchestrator,
    load_content::ContentDispatcher, search_topics::refresh_suggestions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditOutcome {
    TextChanged,
    CursorMoved,
    NotAnEdit,
}

pub struct DefaultShellOrchestrator<D>
where
    D: ContentDispatcher,
{
    state: ShellState,
    catalog: TopicCatalog,
    rules: RuleBook,
    dispatcher: D,
}

impl<D> DefaultShellOrchestrator<D>
where
    D: ContentDispatcher,
{
    pub fn new(state: ShellState, catalog: TopicCatalog, rules: RuleBook, dispatcher: D) -> Self {
        Self {
            state,
            catalog,
            rules,
            dispatcher,
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "c" => self.state.stop(),
                "a" => self.toggle_assistant(),
                _ => {}
            }
            return;
        }

        if key.key == "tab" {
            self.cycle_focus();
            return;
        }

        match (self.state.focus(), self.state.view()) {
            (Focus::Assistant, _) => self.handle_assistant_key(&key),
            (Focus::Page, View::About) => self.handle_about_key(&key),
            (Focus::Page, View::Search) => self.handle_search_key(&key),
            (Focus::Page, View::Tips) => self.handle_tips_key(&key),
        }
    }

    fn toggle_assistant(&mut self) {
        let expanded = self.state.assistant_mut().toggle();
        self.state.set_focus(if expanded {
            Focus::Assistant
        } else {
            Focus::Page
        });
        tracing::debug!(expanded, "assistant panel toggled");
    }

    fn cycle_focus(&mut self) {
        if !self.state.assistant().is_expanded() {
            return;
        }

        let next = match self.state.focus() {
            Focus::Page => Focus::Assistant,
            Focus::Assistant => Focus::Page,
        };
        self.state.set_focus(next);
    }

    fn handle_assistant_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" => {
                submit_question(self.state.assistant_mut(), &self.rules);
            }
            "esc" => self.state.set_focus(Focus::Page),
            _ => {
                apply_edit_key(self.state.assistant_mut().input_mut(), key);
            }
        }
    }

    fn handle_about_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "/" | "s" => self.open_view(View::Search),
            "t" => self.open_view(View::Tips),
            "a" => self.toggle_assistant(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "esc" => self.open_view(View::About),
            "up" => self.state.search_mut().select_previous(),
            "down" => self.state.search_mut().select_next(),
            "enter" => self.submit_search(),
            _ => {
                let outcome = apply_edit_key(self.state.search_mut().query_mut(), key);
                if outcome == EditOutcome::TextChanged {
                    refresh_suggestions(self.state.search_mut(), &self.catalog);
                }
            }
        }
    }

    fn handle_tips_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "esc" | "h" => self.open_view(View::About),
            "/" => self.open_view(View::Search),
            "j" | "down" => self.state.tips_mut().select_next(),
            "k" | "up" => self.state.tips_mut().select_previous(),
            "enter" | "l" => self.open_selected_tip(),
            "a" => self.toggle_assistant(),
            _ => {}
        }
    }

    fn open_view(&mut self, view: View) {
        tracing::debug!(from = ?self.state.view(), to = ?view, "switching view");
        self.state.set_view(view);
        self.state.set_focus(Focus::Page);
    }

    fn submit_search(&mut self) {
        if let Some(topic) = self.state.search_mut().accept_selection() {
            self.request_topic(ContentCallSite::Suggestion, &topic);
            return;
        }

        let query = self.state.search().query().text().to_owned();
        if !query.trim().is_empty() {
            self.request_topic(ContentCallSite::DirectSearch, &query);
        }
    }

    fn request_topic(&mut self, call_site: ContentCallSite, topic: &str) {
        let id = self.state.requests_mut().next_id();
        let request = ContentRequest::for_topic(id, call_site, topic);
        self.state.search_mut().content_mut().begin(&request);
        self.dispatch(request);
    }

    fn open_selected_tip(&mut self) {
        let Some(link) = self.state.tips().selected_link().cloned() else {
            return;
        };

        let id = self.state.requests_mut().next_id();
        let request = ContentRequest::for_asset(id, &link.name, &link.file_name);
        self.state.tips_mut().content_mut().begin(&request);
        self.dispatch(request);
    }

    fn dispatch(&mut self, request: ContentRequest) {
        tracing::info!(
            request_id = request.id.value(),
            call_site = request.call_site.as_label(),
            asset = %request.asset,
            "requesting topic content"
        );
        self.dispatcher.dispatch(request);
    }

    fn apply_completion(&mut self, completion: ContentCompletion) {
        let request_id = completion.request.id;
        let slot = match completion.request.call_site {
            ContentCallSite::Suggestion | ContentCallSite::DirectSearch => {
                self.state.search_mut().content_mut()
            }
            ContentCallSite::Tip => self.state.tips_mut().content_mut(),
        };

        if !slot.apply(completion) {
            tracing::debug!(
                request_id = request_id.value(),
                "dropping content completion superseded by a newer request"
            );
        }
    }
}

impl<D> ShellOrchestrator for DefaultShellOrchestrator<D>
where
    D: ContentDispatcher,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::ContentLoaded(completion) => self.apply_completion(completion),
        }

        Ok(())
    }
}

fn apply_edit_key(input: &mut TextInputState, key: &KeyInput) -> EditOutcome {
    let changed = match key.key.as_str() {
        "backspace" => input.delete_char_before(),
        "delete" => input.delete_char_at(),
        "left" => {
            input.move_cursor_left();
            return EditOutcome::CursorMoved;
        }
        "right" => {
            input.move_cursor_right();
            return EditOutcome::CursorMoved;
        }
        "home" => {
            input.move_cursor_home();
            return EditOutcome::CursorMoved;
        }
        "end" => {
            input.move_cursor_end();
            return EditOutcome::CursorMoved;
        }
        _ => match key.typed_char() {
            Some(ch) => input.insert_char(ch),
            None => return EditOutcome::NotAnEdit,
        },
    };

    if changed {
        EditOutcome::TextChanged
    } else {
        EditOutcome::NotAnEdit
    }
}
