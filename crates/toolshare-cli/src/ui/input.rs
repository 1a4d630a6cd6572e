// ── single-line text input ───────────────────────────────────────────────────

/// Editable line of text with a byte-offset cursor on a char boundary.
#[derive(Debug, Default, Clone)]
pub(super) struct Input {
    pub(super) text: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn as_str(&self) -> &str {
        &self.text
    }

    pub(super) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor > 0 {
            let i = self.text[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(i..self.cursor);
            self.cursor = i;
        }
    }

    pub(super) fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub(super) fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            let n = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += n;
        }
    }

    /// Split around the cursor: text before, the char under the cursor (a
    /// space at end of line), and text after.
    pub(super) fn split_at_cursor(&self) -> (&str, String, &str) {
        let before = &self.text[..self.cursor];
        match self.text[self.cursor..].chars().next() {
            Some(ch) => {
                let end = self.cursor + ch.len_utf8();
                (before, ch.to_string(), &self.text[end..])
            }
            None => (before, " ".to_string(), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> Input {
        let mut input = Input::default();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn editing_handles_multibyte_chars() {
        let mut input = typed("één");
        assert_eq!(input.cursor, input.text.len());

        input.cursor_left();
        input.backspace();
        assert_eq!(input.as_str(), "én");

        input.cursor_right();
        input.insert_char('!');
        assert_eq!(input.as_str(), "én!");
    }

    #[test]
    fn split_at_cursor_marks_current_char() {
        let mut input = typed("zaag");
        assert_eq!(input.split_at_cursor(), ("zaag", " ".to_string(), ""));
        input.cursor_left();
        assert_eq!(input.split_at_cursor(), ("zaa", "g".to_string(), ""));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut input = typed("boor");
        input.clear();
        assert_eq!(input.as_str(), "");
        assert_eq!(input.cursor, 0);
        input.backspace();
        input.cursor_left();
        assert_eq!(input.cursor, 0);
    }
}
