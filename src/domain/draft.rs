//! Editing state for the message draft.

/// Cap on draft length. The contract accepts arbitrary strings; this only
/// keeps the single-line editor responsive.
pub const MAX_DRAFT_CHARS: usize = 4096;

/// A draft being composed for `setMessage`. The cursor is a character
/// index, not a byte offset, so multi-byte input edits cleanly.
///
/// The draft deliberately outlives failed sends; it is cleared only on a
/// confirmed write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    text: String,
    cursor: usize,
}

impl DraftState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Inserts at the cursor. Returns `false` once the draft is full.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.char_count() >= MAX_DRAFT_CHARS {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let from = self.byte_index(self.cursor);
        let to = self.byte_index(self.cursor + 1);
        self.text.drain(from..to);
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let from = self.byte_index(self.cursor);
        let to = self.byte_index(self.cursor + 1);
        self.text.drain(from..to);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}
