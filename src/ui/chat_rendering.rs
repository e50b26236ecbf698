//! Assistant conversation rendering.
//!
//! Turns are hard-wrapped to the panel width so the view can pin the newest
//! lines to the bottom of the panel without guessing wrapped heights.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::domain::assistant_state::{ChatTurn, Speaker};

use super::styles;

/// Builds display lines for the whole history at the given inner width.
pub fn build_chat_lines(turns: &[ChatTurn], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, turn) in turns.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }

        let label = format!("{}: ", turn.speaker.as_label());
        let speaker_style = match turn.speaker {
            Speaker::User => styles::user_speaker_style(),
            Speaker::Bot => styles::bot_speaker_style(),
        };

        let text_width = width.saturating_sub(label.chars().count()).max(1);
        let indent = " ".repeat(label.chars().count());

        for (row, chunk) in wrap_to_width(&turn.text, text_width).into_iter().enumerate() {
            let lead = if row == 0 {
                Span::styled(label.clone(), speaker_style)
            } else {
                Span::raw(indent.clone())
            };
            lines.push(Line::from(vec![
                lead,
                Span::styled(chunk, styles::chat_text_style()),
            ]));
        }
    }

    lines
}

/// Index of the first line to show so the last `height` lines are visible.
pub fn bottom_scroll_offset(total_lines: usize, height: usize) -> usize {
    total_lines.saturating_sub(height)
}

/// Splits text into rows no wider than `width` display columns.
/// Prefers breaking at spaces; words longer than a row are split.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split(' ') {
            let word_width: usize = word.chars().map(|ch| ch.width().unwrap_or(0)).sum();
            let gap = usize::from(!row.is_empty());

            if row_width + gap + word_width <= width {
                if gap == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += gap + word_width;
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width + ch_width > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
        }

        rows.push(row);
    }

    rows
}
