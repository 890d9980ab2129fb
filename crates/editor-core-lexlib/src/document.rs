//! The document interface lexers read text from and write styles, levels and line states to.
//!
//! [`Document`] is the narrow boundary to the embedding editor. [`TextDocument`] is a complete
//! in-memory implementation on top of a [`ropey::Rope`], used by tests, benchmarks and hosts that
//! do not have their own buffer.

use crate::fold::FOLD_LEVEL_BASE;
use ropey::Rope;

/// Code page identifier for UTF-8 documents.
pub const CP_UTF8: u32 = 65001;

/// Storage that lexers operate on.
///
/// Positions are byte offsets. Line indices are zero based; a document always has at least one
/// line. Out-of-range reads return defaults rather than failing.
pub trait Document {
    /// Total length in bytes.
    fn len(&self) -> usize;

    /// Whether the document has no text.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the bytes starting at `position` into `buf`. Bytes past the end are left untouched.
    fn get_char_range(&self, buf: &mut [u8], position: usize);

    /// Style of the byte at `position`, or 0 past the end.
    fn style_at(&self, position: usize) -> u8;

    /// Line containing `position`. Positions past the end map to the last line.
    fn line_from_position(&self, position: usize) -> usize;

    /// First byte of `line`; lines past the end start at [`Document::len`].
    fn line_start(&self, line: usize) -> usize;

    /// Position just before the line end characters of `line`.
    fn line_end(&self, line: usize) -> usize;

    /// Number of lines.
    fn line_count(&self) -> usize;

    /// Fold level of `line`.
    fn level(&self, line: usize) -> i32;

    /// Set the fold level of `line`, returning the previous one.
    fn set_level(&mut self, line: usize, level: i32) -> i32;

    /// Lexer-defined state of `line`.
    fn line_state(&self, line: usize) -> i32;

    /// Set the lexer-defined state of `line`, returning the previous one.
    fn set_line_state(&mut self, line: usize, state: i32) -> i32;

    /// Move the styling cursor to `position`.
    fn start_styling(&mut self, position: usize);

    /// Style `length` bytes from the styling cursor with `style` and advance the cursor.
    /// Returns `false` when the range runs past the end of the document.
    fn set_style_for(&mut self, length: usize, style: u8) -> bool;

    /// Copy `styles` starting at the styling cursor and advance the cursor.
    fn set_styles(&mut self, styles: &[u8]) -> bool;

    /// Code page of the text; 0 for single byte, [`CP_UTF8`] for UTF-8.
    fn code_page(&self) -> u32 {
        CP_UTF8
    }

    /// Whether `ch` starts a double byte character in the document's code page.
    fn is_dbcs_lead_byte(&self, ch: u8) -> bool {
        is_dbcs_lead_byte(self.code_page(), ch)
    }

    /// Notification that lexer state for `start..end` changed outside normal styling.
    fn change_lexer_state(&mut self, _start: usize, _end: usize) {}
}

/// Double byte lead byte test for the common East Asian code pages.
pub fn is_dbcs_lead_byte(code_page: u32, ch: u8) -> bool {
    match code_page {
        // Shift_JIS
        932 => matches!(ch, 0x81..=0x9F | 0xE0..=0xFC),
        // GBK, Unified Hangul Code, Big5
        936 | 949 | 950 => (0x81..=0xFE).contains(&ch),
        // Korean Johab
        1361 => matches!(ch, 0x84..=0xD3 | 0xD8..=0xDE | 0xE0..=0xF9),
        _ => false,
    }
}

/// An in-memory [`Document`].
///
/// Lines are delimited by CR, LF or CRLF. Per-line levels start at [`FOLD_LEVEL_BASE`] and line
/// states at 0.
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: Rope,
    styles: Vec<u8>,
    levels: Vec<i32>,
    line_states: Vec<i32>,
    styling_position: usize,
    end_styled: usize,
    code_page: u32,
}

impl TextDocument {
    /// Create a UTF-8 document holding `text`.
    pub fn new(text: &str) -> Self {
        let text = Rope::from_str(text);
        let lines = text.len_lines();
        Self {
            styles: vec![0; text.len_bytes()],
            levels: vec![FOLD_LEVEL_BASE; lines],
            line_states: vec![0; lines],
            text,
            styling_position: 0,
            end_styled: 0,
            code_page: CP_UTF8,
        }
    }

    /// Override the reported code page.
    pub fn with_code_page(mut self, code_page: u32) -> Self {
        self.code_page = code_page;
        self
    }

    /// The underlying rope.
    pub fn rope(&self) -> &Rope {
        &self.text
    }

    /// All per-byte styles.
    pub fn styles(&self) -> &[u8] {
        &self.styles
    }

    /// All per-line fold levels.
    pub fn levels(&self) -> &[i32] {
        &self.levels
    }

    /// All per-line states.
    pub fn line_states(&self) -> &[i32] {
        &self.line_states
    }

    /// One past the last position styled since the last edit.
    pub fn end_styled(&self) -> usize {
        self.end_styled
    }

    /// The text as an owned string.
    pub fn text(&self) -> String {
        self.text.to_string()
    }

    /// Insert `text` at byte `position` (a char boundary, clamped to the end).
    ///
    /// Inserted bytes take the style 0, inserted lines copy the level and state of the line
    /// they were split from, and the styled watermark falls back to the start of that line.
    pub fn insert(&mut self, position: usize, text: &str) {
        let position = position.min(self.len());
        let line = self.line_from_position(position);
        let char_idx = self.text.byte_to_char(position);
        self.text.insert(char_idx, text);

        self.styles
            .splice(position..position, std::iter::repeat_n(0, text.len()));
        let added = self.text.len_lines().saturating_sub(self.levels.len());
        let level = self.levels[line];
        let state = self.line_states[line];
        self.levels
            .splice(line + 1..line + 1, std::iter::repeat_n(level, added));
        self.line_states
            .splice(line + 1..line + 1, std::iter::repeat_n(state, added));
        self.invalidate_from_line(line);
    }

    /// Remove the byte range `start..end` (char boundaries, clamped to the document).
    pub fn remove(&mut self, start: usize, end: usize) {
        let end = end.min(self.len());
        let start = start.min(end);
        if start == end {
            return;
        }
        let line = self.line_from_position(start);
        let char_start = self.text.byte_to_char(start);
        let char_end = self.text.byte_to_char(end);
        self.text.remove(char_start..char_end);

        self.styles.drain(start..end);
        let removed = self.levels.len().saturating_sub(self.text.len_lines());
        self.levels.drain(line + 1..line + 1 + removed);
        self.line_states.drain(line + 1..line + 1 + removed);
        self.invalidate_from_line(line);
    }

    fn invalidate_from_line(&mut self, line: usize) {
        self.end_styled = self.end_styled.min(self.line_start(line));
    }
}

impl Document for TextDocument {
    fn len(&self) -> usize {
        self.text.len_bytes()
    }

    fn get_char_range(&self, buf: &mut [u8], position: usize) {
        if position >= self.len() {
            return;
        }
        for (dst, b) in buf.iter_mut().zip(self.text.bytes_at(position)) {
            *dst = b;
        }
    }

    fn style_at(&self, position: usize) -> u8 {
        self.styles.get(position).copied().unwrap_or(0)
    }

    fn line_from_position(&self, position: usize) -> usize {
        self.text.byte_to_line(position.min(self.len()))
    }

    fn line_start(&self, line: usize) -> usize {
        if line >= self.text.len_lines() {
            self.len()
        } else {
            self.text.line_to_byte(line)
        }
    }

    fn line_end(&self, line: usize) -> usize {
        if line + 1 >= self.text.len_lines() {
            return self.len();
        }
        let start = self.line_start(line);
        let mut end = self.line_start(line + 1);
        if end > start && self.text.byte(end - 1) == b'\n' {
            end -= 1;
        }
        if end > start && self.text.byte(end - 1) == b'\r' {
            end -= 1;
        }
        end
    }

    fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    fn level(&self, line: usize) -> i32 {
        self.levels.get(line).copied().unwrap_or(FOLD_LEVEL_BASE)
    }

    fn set_level(&mut self, line: usize, level: i32) -> i32 {
        match self.levels.get_mut(line) {
            Some(slot) => std::mem::replace(slot, level),
            None => FOLD_LEVEL_BASE,
        }
    }

    fn line_state(&self, line: usize) -> i32 {
        self.line_states.get(line).copied().unwrap_or(0)
    }

    fn set_line_state(&mut self, line: usize, state: i32) -> i32 {
        match self.line_states.get_mut(line) {
            Some(slot) => std::mem::replace(slot, state),
            None => 0,
        }
    }

    fn start_styling(&mut self, position: usize) {
        self.styling_position = position.min(self.len());
    }

    fn set_style_for(&mut self, length: usize, style: u8) -> bool {
        let start = self.styling_position;
        let end = start.saturating_add(length);
        if end > self.styles.len() {
            return false;
        }
        self.styles[start..end].fill(style);
        self.styling_position = end;
        self.end_styled = self.end_styled.max(end);
        true
    }

    fn set_styles(&mut self, styles: &[u8]) -> bool {
        let start = self.styling_position;
        let end = start.saturating_add(styles.len());
        if end > self.styles.len() {
            return false;
        }
        self.styles[start..end].copy_from_slice(styles);
        self.styling_position = end;
        self.end_styled = self.end_styled.max(end);
        true
    }

    fn code_page(&self) -> u32 {
        self.code_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_with_mixed_endings() {
        let doc = TextDocument::new("a\r\nbc\rd\n");
        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.line_start(1), 3);
        assert_eq!(doc.line_end(0), 1);
        assert_eq!(doc.line_end(1), 5);
        assert_eq!(doc.line_start(2), 6);
        assert_eq!(doc.line_end(2), 7);
        assert_eq!(doc.line_start(3), 8);
        assert_eq!(doc.line_end(3), 8);
        assert_eq!(doc.line_start(10), 8);
        assert_eq!(doc.line_from_position(4), 1);
        assert_eq!(doc.line_from_position(100), 3);
    }

    #[test]
    fn test_styling_cursor() {
        let mut doc = TextDocument::new("hello");
        doc.start_styling(1);
        assert!(doc.set_style_for(2, 7));
        assert!(doc.set_styles(&[1, 2]));
        assert!(!doc.set_style_for(5, 3));
        assert_eq!(doc.styles(), &[0, 7, 7, 1, 2]);
        assert_eq!(doc.end_styled(), 5);
    }

    #[test]
    fn test_insert_and_remove_keep_metadata_aligned() {
        let mut doc = TextDocument::new("one\ntwo\nthree");
        doc.set_level(1, FOLD_LEVEL_BASE + 3);
        doc.set_line_state(1, 9);
        doc.start_styling(0);
        doc.set_style_for(doc.len(), 4);

        doc.insert(5, "x\ny\n");
        assert_eq!(doc.text(), "one\ntx\ny\nwo\nthree");
        assert_eq!(doc.line_count(), 5);
        assert_eq!(doc.levels().len(), 5);
        assert_eq!(doc.level(2), FOLD_LEVEL_BASE + 3);
        assert_eq!(doc.line_state(3), 9);
        assert_eq!(doc.styles().len(), doc.len());
        assert_eq!(doc.style_at(5), 0);
        assert_eq!(doc.style_at(4), 4);
        assert_eq!(doc.end_styled(), 4);

        doc.remove(5, 9);
        assert_eq!(doc.text(), "one\ntwo\nthree");
        assert_eq!(doc.levels().len(), 3);
        assert_eq!(doc.line_states().len(), 3);
        assert_eq!(doc.styles().len(), doc.len());
    }

    #[test]
    fn test_dbcs_lead_bytes() {
        assert!(is_dbcs_lead_byte(932, 0x82));
        assert!(!is_dbcs_lead_byte(932, 0xA5));
        assert!(is_dbcs_lead_byte(936, 0xB0));
        assert!(!is_dbcs_lead_byte(CP_UTF8, 0xE4));
    }
}
