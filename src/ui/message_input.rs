//! Draft editor rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::draft::{DraftState, MAX_DRAFT_CHARS};
use crate::domain::shell_state::InputMode;

use super::styles;

/// Placeholder shown while composing an empty draft.
const PLACEHOLDER_TEXT: &str = "Write your message here...";

/// Hint shown when the editor is idle and empty.
const HINT_TEXT: &str = "Press 'i' to write a message...";

/// Prompt symbol shown before the draft text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders the draft editor panel.
pub fn render_draft_editor(frame: &mut Frame<'_>, area: Rect, draft: &DraftState, mode: InputMode) {
    let is_composing = mode == InputMode::Insert;

    let border_style = if is_composing {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let paragraph = Paragraph::new(build_input_line(draft, mode)).block(
        Block::default()
            .title(input_title(draft, mode))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    // Place the terminal cursor while composing. Saturating arithmetic keeps
    // very long drafts from overflowing the u16 cell coordinates.
    if is_composing {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(cursor_column(draft).min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Builds the line content for the editor.
fn build_input_line(draft: &DraftState, mode: InputMode) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if draft.is_empty() {
        let placeholder = match mode {
            InputMode::Insert => PLACEHOLDER_TEXT,
            InputMode::Normal => HINT_TEXT,
        };
        return Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(draft.text().to_owned(), styles::input_text_style()),
    ])
}

/// Panel title; counts characters while composing.
fn input_title(draft: &DraftState, mode: InputMode) -> String {
    match mode {
        InputMode::Insert => format!("Compose ({}/{})", draft.char_count(), MAX_DRAFT_CHARS),
        InputMode::Normal => "Compose".to_owned(),
    }
}

/// Display column of the cursor relative to the panel's inner left edge.
/// Uses display width, not char count, so wide characters position cleanly.
fn cursor_column(draft: &DraftState) -> usize {
    let text_width: usize = draft
        .text()
        .chars()
        .take(draft.cursor())
        .map(|ch| ch.width().unwrap_or(0))
        .sum();
    PROMPT_SYMBOL.width() + text_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(text: &str) -> DraftState {
        let mut draft = DraftState::default();
        for ch in text.chars() {
            draft.insert(ch);
        }
        draft
    }

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn idle_empty_editor_shows_the_compose_hint() {
        let line = build_input_line(&DraftState::default(), InputMode::Normal);
        let text = line_to_string(&line);

        assert!(text.contains(HINT_TEXT));
        assert!(text.starts_with(PROMPT_SYMBOL));
    }

    #[test]
    fn composing_an_empty_draft_shows_the_placeholder() {
        let line = build_input_line(&DraftState::default(), InputMode::Insert);
        let text = line_to_string(&line);

        assert!(text.contains(PLACEHOLDER_TEXT));
        assert!(!text.contains(HINT_TEXT));
    }

    #[test]
    fn draft_text_is_shown_in_both_modes() {
        let draft = draft_with("gm world");

        for mode in [InputMode::Normal, InputMode::Insert] {
            let text = line_to_string(&build_input_line(&draft, mode));
            assert!(text.contains("gm world"));
            assert!(!text.contains(PLACEHOLDER_TEXT));
        }
    }

    #[test]
    fn title_counts_characters_while_composing() {
        let draft = draft_with("hello");

        assert_eq!(
            input_title(&draft, InputMode::Insert),
            format!("Compose (5/{MAX_DRAFT_CHARS})")
        );
        assert_eq!(input_title(&draft, InputMode::Normal), "Compose");
    }

    #[test]
    fn cursor_column_uses_display_width_for_wide_characters() {
        // Two CJK characters occupy four cells.
        let draft = draft_with("日本");
        assert_eq!(cursor_column(&draft), PROMPT_SYMBOL.len() + 4);

        let ascii = draft_with("ab");
        assert_eq!(cursor_column(&ascii), PROMPT_SYMBOL.len() + 2);
    }

    #[test]
    fn cursor_column_follows_cursor_movement() {
        let mut draft = draft_with("abc");
        draft.move_home();

        assert_eq!(cursor_column(&draft), PROMPT_SYMBOL.len());
    }
}
