//! Buffered access to a [`Document`] for the duration of one lex or fold call.
//!
//! Reads go through a sliding window of [`BUFFER_SIZE`] bytes that is refilled around the
//! requested position, keeping [`SLOP_SIZE`] bytes of look-behind so short backtracking does not
//! thrash. Styles are accumulated in a second buffer and handed to the document in runs.

use crate::document::{CP_UTF8, Document};
use crate::fold::{FOLD_LEVEL_BASE, FOLD_LEVEL_WHITE_FLAG};
use crate::property_set::PropertySet;

/// Size of the text window and of the pending style buffer.
pub const BUFFER_SIZE: usize = 4000;
/// Look-behind kept before a refilled position.
pub const SLOP_SIZE: usize = BUFFER_SIZE / 8;

/// How multi-byte characters are encoded in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingType {
    /// One byte per character.
    EightBit,
    /// UTF-8.
    Unicode,
    /// Double byte character sets (Shift_JIS, GBK, Big5, ...).
    Dbcs,
}

/// Indentation whitespace flags reported by [`LexAccessor::indent_amount`].
pub mod indent_flags {
    /// The indentation contains spaces.
    pub const SPACE: i32 = 1;
    /// The indentation contains tabs.
    pub const TAB: i32 = 2;
    /// A tab follows a space in the indentation.
    pub const SPACE_TAB: i32 = 4;
    /// The indentation disagrees with the previous line's.
    pub const INCONSISTENT: i32 = 8;
}

/// Windowed reader and style writer over a [`Document`].
pub struct LexAccessor<'a> {
    doc: &'a mut dyn Document,
    props: Option<&'a PropertySet>,
    buf: Vec<u8>,
    start_pos: usize,
    end_pos: usize,
    code_page: u32,
    encoding: EncodingType,
    len_doc: usize,
    style_buf: Vec<u8>,
    start_seg: usize,
    start_pos_styling: usize,
}

impl<'a> LexAccessor<'a> {
    /// Wrap `doc` with no properties available.
    pub fn new(doc: &'a mut dyn Document) -> Self {
        let code_page = doc.code_page();
        let encoding = match code_page {
            CP_UTF8 => EncodingType::Unicode,
            932 | 936 | 949 | 950 | 1361 => EncodingType::Dbcs,
            _ => EncodingType::EightBit,
        };
        let len_doc = doc.len();
        Self {
            doc,
            props: None,
            buf: vec![0; BUFFER_SIZE],
            start_pos: 0,
            end_pos: 0,
            code_page,
            encoding,
            len_doc,
            style_buf: Vec::with_capacity(BUFFER_SIZE),
            start_seg: 0,
            start_pos_styling: 0,
        }
    }

    /// Wrap `doc` with `props` answering [`LexAccessor::get_property_int`].
    pub fn with_properties(doc: &'a mut dyn Document, props: &'a PropertySet) -> Self {
        let mut accessor = Self::new(doc);
        accessor.props = Some(props);
        accessor
    }

    fn fill(&mut self, position: usize) {
        let mut start = position.saturating_sub(SLOP_SIZE);
        if start + BUFFER_SIZE > self.len_doc {
            start = self.len_doc.saturating_sub(BUFFER_SIZE);
        }
        let end = (start + BUFFER_SIZE).min(self.len_doc);
        self.start_pos = start;
        self.end_pos = end;
        self.doc.get_char_range(&mut self.buf[..end - start], start);
    }

    /// Byte at `position`, 0 when out of range.
    pub fn byte_at(&mut self, position: usize) -> u8 {
        self.safe_byte_at(position, 0)
    }

    /// Byte at `position`, `default` when out of range.
    pub fn safe_byte_at(&mut self, position: usize, default: u8) -> u8 {
        if position < self.start_pos || position >= self.end_pos {
            self.fill(position);
            if position < self.start_pos || position >= self.end_pos {
                return default;
            }
        }
        self.buf[position - self.start_pos]
    }

    /// Byte at `position` (signed, so callers can probe before the start), as a `char`.
    pub fn char_at(&mut self, position: isize) -> char {
        match usize::try_from(position) {
            Ok(position) => char::from(self.safe_byte_at(position, 0)),
            Err(_) => '\0',
        }
    }

    /// Whether the document's code page uses lead bytes and `ch` is one.
    pub fn is_lead_byte(&self, ch: u8) -> bool {
        self.encoding == EncodingType::Dbcs && self.doc.is_dbcs_lead_byte(ch)
    }

    /// The document's encoding family.
    pub fn encoding(&self) -> EncodingType {
        self.encoding
    }

    /// The document's code page.
    pub fn code_page(&self) -> u32 {
        self.code_page
    }

    /// Decode the character starting at `position`.
    ///
    /// Malformed or truncated sequences decode as U+FFFD with a width of one byte so that
    /// iteration always advances. Positions past the end read as `'\0'`.
    pub fn character_and_width(&mut self, position: usize) -> (char, usize) {
        let lead = self.safe_byte_at(position, 0);
        if lead < 0x80 || position >= self.len_doc {
            return (char::from(lead), 1);
        }
        match self.encoding {
            EncodingType::EightBit => (char::from(lead), 1),
            EncodingType::Dbcs => {
                if self.doc.is_dbcs_lead_byte(lead) && position + 1 < self.len_doc {
                    (char::REPLACEMENT_CHARACTER, 2)
                } else {
                    (char::REPLACEMENT_CHARACTER, 1)
                }
            }
            EncodingType::Unicode => self.decode_utf8(position, lead),
        }
    }

    /// Decode the character ending just before `position`, `'\0'` at the start of the document.
    ///
    /// Agrees with what forward iteration with [`character_and_width`] reads there.
    ///
    /// [`character_and_width`]: LexAccessor::character_and_width
    pub fn character_before(&mut self, position: usize) -> char {
        let Some(last) = position.checked_sub(1) else {
            return '\0';
        };
        let byte = self.safe_byte_at(last, 0);
        match self.encoding {
            EncodingType::EightBit => char::from(byte),
            EncodingType::Unicode => {
                if byte < 0x80 {
                    return char::from(byte);
                }
                let mut lead_pos = last;
                while lead_pos + 3 > last
                    && lead_pos > 0
                    && (0x80..0xC0).contains(&self.safe_byte_at(lead_pos, 0))
                {
                    lead_pos -= 1;
                }
                let (ch, width) = self.character_and_width(lead_pos);
                if lead_pos + width == position {
                    ch
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            }
            EncodingType::Dbcs => {
                // Trail bytes overlap ASCII, so walk forward from the start of the line.
                let mut pos = self.line_start(self.get_line(last));
                let mut ch = '\0';
                while pos < position {
                    let (next, width) = self.character_and_width(pos);
                    ch = next;
                    pos += width;
                }
                ch
            }
        }
    }

    fn decode_utf8(&mut self, position: usize, lead: u8) -> (char, usize) {
        let width = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return (char::REPLACEMENT_CHARACTER, 1),
        };
        let mut bytes = [lead, 0, 0, 0];
        for (i, slot) in bytes.iter_mut().enumerate().take(width).skip(1) {
            *slot = self.safe_byte_at(position + i, 0);
        }
        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => match s.chars().next() {
                Some(ch) => (ch, width),
                None => (char::REPLACEMENT_CHARACTER, 1),
            },
            Err(_) => (char::REPLACEMENT_CHARACTER, 1),
        }
    }

    /// Whether the text at `pos` starts with `s`.
    pub fn matches(&mut self, pos: usize, s: &str) -> bool {
        s.bytes()
            .enumerate()
            .all(|(i, b)| self.safe_byte_at(pos + i, 0) == b)
    }

    /// Style already stored in the document at `position`.
    pub fn style_at(&self, position: usize) -> u8 {
        self.doc.style_at(position)
    }

    /// Style at `position`, reading pending styles that have not been flushed yet.
    pub fn buffer_style_at(&self, position: usize) -> u8 {
        if position >= self.start_pos_styling {
            if let Some(&style) = self.style_buf.get(position - self.start_pos_styling) {
                return style;
            }
        }
        self.doc.style_at(position)
    }

    /// Line containing `position`.
    pub fn get_line(&self, position: usize) -> usize {
        self.doc.line_from_position(position)
    }

    /// First position of `line`.
    pub fn line_start(&self, line: usize) -> usize {
        self.doc.line_start(line)
    }

    /// Position before the line end characters of `line`.
    pub fn line_end(&self, line: usize) -> usize {
        self.doc.line_end(line)
    }

    /// Fold level of `line`.
    pub fn level_at(&self, line: usize) -> i32 {
        self.doc.level(line)
    }

    /// Document length in bytes, fixed for the life of the accessor.
    pub fn length(&self) -> usize {
        self.len_doc
    }

    /// Lexer state of `line`.
    pub fn get_line_state(&self, line: usize) -> i32 {
        self.doc.line_state(line)
    }

    /// Set the lexer state of `line`, returning the previous value.
    pub fn set_line_state(&mut self, line: usize, state: i32) -> i32 {
        self.doc.set_line_state(line, state)
    }

    /// Set the fold level of `line`; unchanged values are not written through.
    pub fn set_level(&mut self, line: usize, level: i32) {
        if self.doc.level(line) != level {
            self.doc.set_level(line, level);
        }
    }

    /// Integer property `key`, `default` when unset or when no properties were supplied.
    pub fn get_property_int(&self, key: &str, default: i32) -> i32 {
        self.props.map_or(default, |props| props.get_int(key, default))
    }

    /// Forward a lexer state change notification to the document.
    pub fn change_lexer_state(&mut self, start: usize, end: usize) {
        self.doc.change_lexer_state(start, end);
    }

    /// Hand pending styles to the document.
    pub fn flush(&mut self) {
        if !self.style_buf.is_empty() {
            self.doc.start_styling(self.start_pos_styling);
            self.doc.set_styles(&self.style_buf);
            self.start_pos_styling += self.style_buf.len();
            self.style_buf.clear();
        }
    }

    /// Begin styling at `start`. Pending styles are flushed first.
    pub fn start_at(&mut self, start: usize) {
        self.flush();
        self.doc.start_styling(start);
        self.start_pos_styling = start;
    }

    /// Start of the run that the next [`LexAccessor::colour_to`] will style.
    pub fn get_start_segment(&self) -> usize {
        self.start_seg
    }

    /// Begin a new run at `pos`.
    pub fn start_segment(&mut self, pos: usize) {
        self.start_seg = pos;
    }

    /// Style every position from the segment start through `pos` inclusive with `style` and move
    /// the segment start past `pos`.
    ///
    /// `pos == segment start - 1` is an empty run. A `pos` before that is a caller bug: it is
    /// asserted in debug builds and ignored otherwise.
    pub fn colour_to(&mut self, pos: usize, style: u8) {
        if pos + 1 == self.start_seg {
            return;
        }
        debug_assert!(
            pos >= self.start_seg,
            "colour_to({pos}) before segment start {}",
            self.start_seg
        );
        if pos < self.start_seg {
            return;
        }
        let run = pos - self.start_seg + 1;
        if self.style_buf.len() + run >= BUFFER_SIZE {
            self.flush();
        }
        if self.style_buf.len() + run >= BUFFER_SIZE {
            self.doc.start_styling(self.start_pos_styling);
            self.doc.set_style_for(run, style);
            self.start_pos_styling += run;
        } else {
            self.style_buf.extend(std::iter::repeat_n(style, run));
        }
        self.start_seg = pos + 1;
    }

    /// Copy `start..end` into a string, replacing invalid UTF-8.
    pub fn get_range(&mut self, start: usize, end: usize) -> String {
        let bytes: Vec<u8> = (start..end.min(self.len_doc))
            .map(|pos| self.safe_byte_at(pos, 0))
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// [`LexAccessor::get_range`] with ASCII letters lowered.
    pub fn get_range_lowered(&mut self, start: usize, end: usize) -> String {
        self.get_range(start, end).to_ascii_lowercase()
    }

    /// Indentation of `line` as a fold level, plus [`indent_flags`] describing its whitespace.
    ///
    /// Tabs advance to the next multiple of 8. The result carries [`FOLD_LEVEL_WHITE_FLAG`] when
    /// the line is blank or `is_comment_leader` accepts the first non-blank position.
    pub fn indent_amount(
        &mut self,
        line: usize,
        is_comment_leader: Option<&dyn Fn(&mut LexAccessor<'a>, usize, usize) -> bool>,
    ) -> (i32, i32) {
        let end = self.len_doc;
        let mut flags = 0;
        let mut pos = self.line_start(line);
        let mut ch = self.safe_byte_at(pos, 0);
        let mut indent = 0;
        let mut in_prev_prefix = line > 0;
        let mut pos_prev = if in_prev_prefix {
            self.line_start(line - 1)
        } else {
            0
        };
        while (ch == b' ' || ch == b'\t') && pos < end {
            if in_prev_prefix {
                let ch_prev = self.safe_byte_at(pos_prev, 0);
                pos_prev += 1;
                if ch_prev == b' ' || ch_prev == b'\t' {
                    if ch_prev != ch {
                        flags |= indent_flags::INCONSISTENT;
                    }
                } else {
                    in_prev_prefix = false;
                }
            }
            if ch == b' ' {
                flags |= indent_flags::SPACE;
                indent += 1;
            } else {
                flags |= indent_flags::TAB;
                if flags & indent_flags::SPACE != 0 {
                    flags |= indent_flags::SPACE_TAB;
                }
                indent = (indent / 8 + 1) * 8;
            }
            pos += 1;
            ch = self.safe_byte_at(pos, 0);
        }
        indent += FOLD_LEVEL_BASE;
        let blank = self.line_start(line) == end || matches!(ch, b' ' | b'\t' | b'\n' | b'\r');
        let comment = is_comment_leader.is_some_and(|leader| leader(self, pos, end - pos));
        if blank || comment {
            (indent | FOLD_LEVEL_WHITE_FLAG, flags)
        } else {
            (indent, flags)
        }
    }
}

impl Drop for LexAccessor<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    #[test]
    fn test_window_refill_is_transparent() {
        let text: String = (0..3 * BUFFER_SIZE)
            .map(|i| char::from(b'a' + (i % 26) as u8))
            .collect();
        let mut doc = TextDocument::new(&text);
        let mut styler = LexAccessor::new(&mut doc);
        let first = styler.safe_byte_at(10, 0);
        let far = styler.safe_byte_at(10 + 2 * BUFFER_SIZE, 0);
        assert_eq!(far, text.as_bytes()[10 + 2 * BUFFER_SIZE]);
        assert_eq!(styler.safe_byte_at(10, 0), first);
        assert_eq!(styler.safe_byte_at(3 * BUFFER_SIZE, b'?'), b'?');
    }

    #[test]
    fn test_colour_to_runs() {
        let mut doc = TextDocument::new("abcdef");
        {
            let mut styler = LexAccessor::new(&mut doc);
            styler.start_at(0);
            styler.start_segment(0);
            styler.colour_to(1, 3);
            assert_eq!(styler.get_start_segment(), 2);
            // Empty run.
            styler.colour_to(1, 9);
            styler.colour_to(5, 4);
            assert_eq!(styler.buffer_style_at(4), 4);
        }
        assert_eq!(doc.styles(), &[3, 3, 4, 4, 4, 4]);
    }

    #[test]
    fn test_set_level_is_idempotent() {
        let mut doc = TextDocument::new("a\nb");
        let mut styler = LexAccessor::new(&mut doc);
        styler.set_level(1, FOLD_LEVEL_BASE + 1);
        assert_eq!(styler.level_at(1), FOLD_LEVEL_BASE + 1);
        styler.set_level(1, FOLD_LEVEL_BASE + 1);
        assert_eq!(styler.level_at(0), FOLD_LEVEL_BASE);
    }

    #[test]
    fn test_character_and_width() {
        let mut doc = TextDocument::new("aé中😀");
        let mut styler = LexAccessor::new(&mut doc);
        assert_eq!(styler.character_and_width(0), ('a', 1));
        assert_eq!(styler.character_and_width(1), ('é', 2));
        assert_eq!(styler.character_and_width(3), ('中', 3));
        assert_eq!(styler.character_and_width(6), ('😀', 4));
        // Continuation byte on its own.
        assert_eq!(styler.character_and_width(2), (char::REPLACEMENT_CHARACTER, 1));
        assert_eq!(styler.character_and_width(10), ('\0', 1));
    }

    #[test]
    fn test_character_before() {
        let mut doc = TextDocument::new("aé中😀\n");
        let mut styler = LexAccessor::new(&mut doc);
        assert_eq!(styler.character_before(0), '\0');
        assert_eq!(styler.character_before(1), 'a');
        assert_eq!(styler.character_before(3), 'é');
        assert_eq!(styler.character_before(6), '中');
        assert_eq!(styler.character_before(10), '😀');
        assert_eq!(styler.character_before(11), '\n');
        // Inside a sequence.
        assert_eq!(styler.character_before(5), char::REPLACEMENT_CHARACTER);

        // U+4E2D is E4 B8 AD: a Shift_JIS double byte followed by a half-width katakana byte.
        let mut doc = TextDocument::new("x中\ny").with_code_page(932);
        let mut styler = LexAccessor::new(&mut doc);
        assert_eq!(styler.character_before(1), 'x');
        assert_eq!(styler.character_before(3), char::REPLACEMENT_CHARACTER);
        assert_eq!(styler.character_before(5), '\n');

        let mut doc = TextDocument::new("é").with_code_page(1252);
        let mut styler = LexAccessor::new(&mut doc);
        assert_eq!(styler.character_before(2), '\u{A9}');
    }

    #[test]
    fn test_indent_amount() {
        let mut doc = TextDocument::new("if x:\n    y\n\t z\n\n");
        let mut styler = LexAccessor::new(&mut doc);
        assert_eq!(styler.indent_amount(0, None).0, FOLD_LEVEL_BASE);
        let (level, flags) = styler.indent_amount(1, None);
        assert_eq!(level, FOLD_LEVEL_BASE + 4);
        assert_eq!(flags, indent_flags::SPACE);
        let (level, flags) = styler.indent_amount(2, None);
        assert_eq!(level, FOLD_LEVEL_BASE + 9);
        assert_ne!(flags & indent_flags::INCONSISTENT, 0);
        let (level, _) = styler.indent_amount(3, None);
        assert_eq!(level, FOLD_LEVEL_BASE | FOLD_LEVEL_WHITE_FLAG);
    }

    #[test]
    fn test_get_range_lowered() {
        let mut doc = TextDocument::new("Hello World");
        let mut styler = LexAccessor::new(&mut doc);
        assert_eq!(styler.get_range(0, 5), "Hello");
        assert_eq!(styler.get_range_lowered(6, 50), "world");
        assert!(styler.matches(6, "World"));
        assert!(!styler.matches(6, "Worlds"));
    }
}
