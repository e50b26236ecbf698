use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::domain::{
    assistant_state::AssistantState,
    content::{ContentBody, ContentState},
    shell_state::{Focus, ShellState, View},
};

use super::chat_rendering::{bottom_scroll_offset, build_chat_lines};
use super::styles;
use super::text_input::{render_text_input, InputField};

const SITE_TITLE: &str = "Immigration Hub";
const ABOUT_TITLE: &str = "About Page";
const ABOUT_TEXT: &str = "Welcome to Immigration Hub! Find guidance on settling into a new country: \
search recommendations by topic, browse practical tips, or ask the assistant.";
const SEARCH_TITLE: &str = "Search Recommendations";
const SEARCH_PLACEHOLDER: &str = "Enter a topic...";
const TIPS_TITLE: &str = "Sustainability Tips";
const ASSISTANT_TITLE: &str = "AI Assistant";
const ASSISTANT_COLLAPSED_LABEL: &str = "Chat with me!";
const ASSISTANT_PLACEHOLDER: &str = "Ask me something...";
const LOADING_TEXT: &str = "Loading...";

/// Maximum suggestion rows shown under the search box.
const MAX_SUGGESTION_ROWS: u16 = 8;

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [header_area, body_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_header(frame, header_area, state.view());

    if state.assistant().is_expanded() {
        let [page_area, assistant_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .areas(body_area);
        render_page(frame, page_area, state);
        render_assistant_panel(frame, assistant_area, state);
    } else {
        let [page_area, launcher_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .areas(body_area);
        render_page(frame, page_area, state);
        render_assistant_launcher(frame, launcher_area);
    }

    let status = Paragraph::new(Span::styled(status_line(state), styles::hint_style()));
    frame.render_widget(status, status_area);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, view: View) {
    let header = Paragraph::new(header_line(view))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn header_line(view: View) -> Line<'static> {
    let nav = [(View::About, "About"), (View::Search, "Search"), (View::Tips, "Tips")];

    let mut spans = vec![
        Span::styled(SITE_TITLE, styles::site_title_style()),
        Span::raw("  "),
    ];
    for (index, (item, label)) in nav.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", styles::hint_style()));
        }
        let style = if item == view {
            styles::selected_item_style()
        } else {
            styles::hint_style()
        };
        spans.push(Span::styled(label, style));
    }

    Line::from(spans)
}

fn render_page(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let focused = state.focus() == Focus::Page;
    match state.view() {
        View::About => render_about(frame, area, focused),
        View::Search => render_search(frame, area, state, focused),
        View::Tips => render_tips(frame, area, state, focused),
    }
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn render_about(frame: &mut Frame<'_>, area: Rect, focused: bool) {
    let about = Paragraph::new(Span::styled(ABOUT_TEXT, styles::content_text_style()))
        .wrap(Wrap { trim: false })
        .block(panel_block(ABOUT_TITLE.to_owned(), focused));
    frame.render_widget(about, area);
}

fn render_search(frame: &mut Frame<'_>, area: Rect, state: &ShellState, focused: bool) {
    let search = state.search();
    let suggestion_rows = suggestion_panel_height(search.matches().len());

    let [input_area, suggestions_area, content_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(suggestion_rows),
            Constraint::Min(1),
        ])
        .areas(area);

    render_text_input(
        frame,
        input_area,
        &InputField {
            title: SEARCH_TITLE,
            placeholder: SEARCH_PLACEHOLDER,
            state: search.query(),
            focused,
        },
    );

    if suggestion_rows > 0 {
        let items: Vec<ListItem<'static>> = search
            .matches()
            .iter()
            .map(|topic| ListItem::new(topic.clone()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM))
            .highlight_style(styles::selected_item_style());

        let mut list_state = ListState::default();
        list_state.select(search.selected_index());
        frame.render_stateful_widget(list, suggestions_area, &mut list_state);
    }

    render_content(frame, content_area, search.content().state());
}

/// Rows for the dropdown: one per match plus the bottom border, none when empty.
fn suggestion_panel_height(match_count: usize) -> u16 {
    if match_count == 0 {
        return 0;
    }

    let rows = u16::try_from(match_count).unwrap_or(u16::MAX);
    rows.min(MAX_SUGGESTION_ROWS).saturating_add(1)
}

fn render_tips(frame: &mut Frame<'_>, area: Rect, state: &ShellState, focused: bool) {
    let tips = state.tips();
    let [links_area, content_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .areas(area);

    let items: Vec<ListItem<'static>> = tips
        .links()
        .iter()
        .map(|link| ListItem::new(link.name.clone()))
        .collect();
    let list = List::new(items)
        .block(panel_block(TIPS_TITLE.to_owned(), focused))
        .highlight_style(styles::selected_item_style());

    let mut list_state = ListState::default();
    list_state.select(tips.selected_index());
    frame.render_stateful_widget(list, links_area, &mut list_state);

    render_content(frame, content_area, tips.content().state());
}

fn render_content(frame: &mut Frame<'_>, area: Rect, content: &ContentState) {
    let Some((title, lines)) = content_view(content) else {
        return;
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel_block(title, false));
    frame.render_widget(paragraph, area);
}

/// Title and body lines for a content slot; `None` while nothing was requested.
fn content_view(content: &ContentState) -> Option<(String, Vec<Line<'static>>)> {
    match content {
        ContentState::Empty => None,
        ContentState::Loading { title } => Some((
            content_title(title),
            vec![Line::from(Span::styled(LOADING_TEXT, styles::hint_style()))],
        )),
        ContentState::Ready { title, body } => {
            let lines = match body {
                ContentBody::Text(text) => text
                    .split('\n')
                    .map(|line| Line::from(Span::styled(line.to_owned(), styles::content_text_style())))
                    .collect(),
                ContentBody::Lines(rows) => rows
                    .iter()
                    .map(|row| Line::from(Span::styled(row.clone(), styles::content_text_style())))
                    .collect(),
            };
            Some((content_title(title), lines))
        }
        ContentState::Failed { title, message } => Some((
            content_title(title),
            vec![Line::from(Span::styled(message.clone(), styles::content_error_style()))],
        )),
    }
}

fn content_title(title: &str) -> String {
    format!("{title} - Content")
}

fn render_assistant_launcher(frame: &mut Frame<'_>, area: Rect) {
    let launcher = Paragraph::new(Line::from(vec![
        Span::styled(ASSISTANT_COLLAPSED_LABEL, styles::bot_speaker_style()),
        Span::styled("  (Ctrl+A)", styles::hint_style()),
    ]))
    .block(panel_block(ASSISTANT_TITLE.to_owned(), false));
    frame.render_widget(launcher, area);
}

fn render_assistant_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let assistant = state.assistant();
    let focused = state.focus() == Focus::Assistant;

    let [history_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(area);

    render_history(frame, history_area, assistant, focused);
    render_text_input(
        frame,
        input_area,
        &InputField {
            title: "",
            placeholder: ASSISTANT_PLACEHOLDER,
            state: assistant.input(),
            focused,
        },
    );
}

fn render_history(frame: &mut Frame<'_>, area: Rect, assistant: &AssistantState, focused: bool) {
    // Inner size = area minus borders
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines = build_chat_lines(assistant.history().turns(), inner_width);
    let offset = bottom_scroll_offset(lines.len(), inner_height);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    let history = Paragraph::new(lines)
        .scroll((offset, 0))
        .block(panel_block(ASSISTANT_TITLE.to_owned(), focused));
    frame.render_widget(history, area);
}

fn status_line(state: &ShellState) -> String {
    let nav_hint = match (state.focus(), state.view()) {
        (Focus::Assistant, _) => "Enter: ask | Esc: back to page | Tab: switch focus",
        (Focus::Page, View::About) => "/ or s: search | t: tips | a: assistant | q: quit",
        (Focus::Page, View::Search) => "type to search | Up/Down: choose | Enter: open | Esc: back",
        (Focus::Page, View::Tips) => "j/k: navigate | l/Enter: open tip | h/Esc: back | q: quit",
    };
    let assistant = if state.assistant().is_expanded() {
        "Ctrl+A: assistant"
    } else {
        "Ctrl+A: chat with me"
    };
    format!("{nav_hint} | {assistant} | Ctrl+C: quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{
        ContentCallSite, ContentCompletion, ContentRequest, ContentRetrievalFailure, RequestId,
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen_text(state: &ShellState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("frame must render");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn header_marks_the_current_view() {
        let line = header_line(View::Tips);

        assert!(line_to_string(&line).starts_with("Immigration Hub"));
        let tips_span = line
            .spans
            .iter()
            .find(|span| span.content == "Tips")
            .expect("tips nav item");
        assert_eq!(tips_span.style, styles::selected_item_style());
    }

    #[test]
    fn status_line_shows_page_hints_per_view() {
        let mut state = ShellState::default();
        assert!(status_line(&state).contains("q: quit"));

        state.set_view(View::Search);
        assert!(status_line(&state).contains("Enter: open"));
    }

    #[test]
    fn status_line_shows_assistant_hints_when_focused() {
        let mut state = ShellState::default();
        state.assistant_mut().expand();
        state.set_focus(Focus::Assistant);

        assert!(status_line(&state).starts_with("Enter: ask"));
    }

    #[test]
    fn suggestion_panel_hidden_without_matches() {
        assert_eq!(suggestion_panel_height(0), 0);
        assert_eq!(suggestion_panel_height(2), 3);
        assert_eq!(suggestion_panel_height(50), MAX_SUGGESTION_ROWS + 1);
    }

    #[test]
    fn empty_content_renders_nothing() {
        assert!(content_view(&ContentState::Empty).is_none());
    }

    #[test]
    fn loaded_text_is_titled_after_the_topic() {
        let mut slot = crate::domain::content::ContentSlot::default();
        let request =
            ContentRequest::for_topic(RequestId::new(1), ContentCallSite::Suggestion, "Housing");
        slot.begin(&request);
        slot.apply(ContentCompletion {
            request,
            outcome: Ok("line one\nline two".to_owned()),
        });

        let (title, lines) = content_view(slot.state()).expect("ready content");

        assert_eq!(title, "Housing - Content");
        assert_eq!(lines.len(), 2);
        assert_eq!(line_to_string(&lines[1]), "line two");
    }

    #[test]
    fn failed_content_shows_fallback_in_error_style() {
        let mut slot = crate::domain::content::ContentSlot::default();
        let request = ContentRequest::for_asset(RequestId::new(4), "Waste Management", "waste.txt");
        slot.begin(&request);
        slot.apply(ContentCompletion {
            request,
            outcome: Err(ContentRetrievalFailure::NotFound {
                name: "waste.txt".to_owned(),
            }),
        });

        let (_, lines) = content_view(slot.state()).expect("failed content");

        assert_eq!(line_to_string(&lines[0]), "Error loading content");
        assert_eq!(lines[0].spans[0].style, styles::content_error_style());
    }

    #[test]
    fn collapsed_assistant_shows_launcher() {
        let text = screen_text(&ShellState::default());

        assert!(text.contains("About Page"));
        assert!(text.contains("Chat with me!"));
    }

    #[test]
    fn expanded_assistant_shows_greeting() {
        let mut state = ShellState::default();
        state.assistant_mut().expand();

        let text = screen_text(&state);

        assert!(text.contains("AI Assistant"));
        assert!(text.contains("bot: Hi, how can I help you?"));
        assert!(!text.contains("Chat with me!"));
    }
}
